#![doc = include_str!("../README.md")]

pub use convolution::{
    horiz_convolution, horiz_convolution_interleaved, horiz_convolution_planar, vert_convolution,
    vert_convolution_interleaved, vert_convolution_planar, vert_convolution_planar_by_transpose,
};
pub use errors::*;
pub use layout::Layout;
pub use transpose::transpose_planar;

mod convolution;
mod errors;
pub mod kernels;
mod layout;
mod transpose;
