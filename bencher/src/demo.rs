use std::io::Write;

use anyhow::{Context, Result};
use layout_convolve::kernels::box_kernel;
use layout_convolve::{horiz_convolution_interleaved, vert_convolution_interleaved, Layout};

const HEIGHT: u32 = 4;
const WIDTH: u32 = 4;
const CHANNELS: u32 = 2;

#[rustfmt::skip]
const SOURCE: [f32; 32] = [
    1.0, 0., 2.0, 0., 3.0, 0., 1.0, 0.,
    2.0, 0., 6.0, 0., 7.0, 0., 2.0, 0.,
    3.5, 0., 2.5, 0., 3.5, 0., 3.5, 0.,
    4.5, 0., 6.5, 0., 7.5, 0., 4.5, 0.,
];

/// Writes interleaved image as rows of pixels: `[ { c0, c1, }, ... ]`.
pub fn write_interleaved_image(
    out: &mut impl Write,
    image: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
) -> std::io::Result<()> {
    for row in 0..height {
        write!(out, "[ ")?;
        for col in 0..width {
            write!(out, "{{ ")?;
            for ch in 0..num_channels {
                let idx = Layout::Interleaved.index(height, width, num_channels, row, col, ch);
                write!(out, "{}, ", image[idx])?;
            }
            write!(out, "}}, ")?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

/// Blurs the first channel of a small interleaved image
/// and prints the results.
pub fn run_demo(out: &mut impl Write) -> Result<()> {
    let kernel = box_kernel::<3>();
    let mut dst = vec![0f32; SOURCE.len()];

    writeln!(out, "The source matrix is:")?;
    write_interleaved_image(out, &SOURCE, HEIGHT, WIDTH, CHANNELS)?;

    horiz_convolution_interleaved(&kernel, &SOURCE, HEIGHT, WIDTH, CHANNELS, 0, &mut dst)
        .context("Failed to convolve rows")?;
    writeln!(out, "\nThe dst matrix after horizontal convolution is:")?;
    write_interleaved_image(out, &dst, HEIGHT, WIDTH, CHANNELS)?;

    dst.fill(0.);
    vert_convolution_interleaved(&kernel, &SOURCE, HEIGHT, WIDTH, CHANNELS, 0, &mut dst)
        .context("Failed to convolve columns")?;
    writeln!(out, "\nThe dst matrix after vertical convolution is:")?;
    write_interleaved_image(out, &dst, HEIGHT, WIDTH, CHANNELS)?;
    Ok(())
}
