pub use by_transpose::vert_convolution_planar_by_transpose;

use crate::layout::{Direction, Strides};
use crate::{ConvolutionError, Layout};

mod by_transpose;
mod native;

/// Returns the count of samples required by image with given dimensions,
/// or `None` if it doesn't fit into `usize`.
#[inline]
pub(crate) fn samples_count(height: u32, width: u32, num_channels: u32) -> Option<usize> {
    (height as usize)
        .checked_mul(width as usize)?
        .checked_mul(num_channels as usize)
}

/// Checks that buffers are big enough for image with given dimensions.
pub(crate) fn check_buffers(
    src_len: usize,
    dst_len: usize,
    height: u32,
    width: u32,
    num_channels: u32,
) -> Result<(), ConvolutionError> {
    if dst_len < src_len {
        return Err(ConvolutionError::DestinationBufferTooSmall);
    }
    match samples_count(height, width, num_channels) {
        Some(count) if count <= src_len => Ok(()),
        _ => Err(ConvolutionError::SourceBufferTooSmall),
    }
}

/// Checks all preconditions of 1D convolution in the order
/// in which they are documented.
pub(crate) fn check_convolution_args(
    kernel: &[f32],
    src_len: usize,
    dst_len: usize,
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
) -> Result<(), ConvolutionError> {
    if kernel.len() % 2 != 1 {
        return Err(ConvolutionError::EvenKernelLength);
    }
    if channel >= num_channels {
        return Err(ConvolutionError::InvalidChannelIndex);
    }
    check_buffers(src_len, dst_len, height, width, num_channels)
}

#[allow(clippy::too_many_arguments)]
fn convolution<K>(
    layout: Layout,
    direction: Direction,
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    let kernel = kernel.as_ref();
    check_convolution_args(
        kernel,
        src.len(),
        dst.len(),
        height,
        width,
        num_channels,
        channel,
    )?;
    let strides = Strides::new(layout, direction, height, width, num_channels, channel);
    native::convolve_lines(kernel, src, dst, strides);
    Ok(())
}

/// Convolves rows of one channel of a planar image with 1D `kernel`.
///
/// For every row and every column `col` in `[center, width - center)`,
/// where `center = kernel.len() / 2`, writes into `dst` the sum
/// `kernel[k] * src[row, col - center + k]` over all taps `k`.
///
/// Border columns and other channels of `dst` are not modified,
/// so `dst` should be initialized by the caller (usually with zeros).
///
/// # Errors
///
/// Nothing is written to `dst` if:
/// - length of `kernel` is even ([ConvolutionError::EvenKernelLength]);
/// - `channel >= num_channels` ([ConvolutionError::InvalidChannelIndex]);
/// - `dst` is shorter than `src` ([ConvolutionError::DestinationBufferTooSmall]);
/// - `src` is shorter than `height * width * num_channels`
///   ([ConvolutionError::SourceBufferTooSmall]).
pub fn horiz_convolution_planar<K>(
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    convolution(
        Layout::Planar,
        Direction::Horizontal,
        kernel,
        src,
        height,
        width,
        num_channels,
        channel,
        dst,
    )
}

/// Convolves rows of one channel of an interleaved image with 1D `kernel`.
///
/// Same as [horiz_convolution_planar], but samples of a row are
/// `num_channels` elements apart from each other.
pub fn horiz_convolution_interleaved<K>(
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    convolution(
        Layout::Interleaved,
        Direction::Horizontal,
        kernel,
        src,
        height,
        width,
        num_channels,
        channel,
        dst,
    )
}

/// Convolves columns of one channel of a planar image with 1D `kernel`.
///
/// For every column and every row `row` in `[center, height - center)`,
/// where `center = kernel.len() / 2`, writes into `dst` the sum
/// `kernel[k] * src[row - center + k, col]` over all taps `k`.
///
/// Border rows and other channels of `dst` are not modified.
/// Errors are the same as for [horiz_convolution_planar].
pub fn vert_convolution_planar<K>(
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    convolution(
        Layout::Planar,
        Direction::Vertical,
        kernel,
        src,
        height,
        width,
        num_channels,
        channel,
        dst,
    )
}

/// Convolves columns of one channel of an interleaved image with 1D `kernel`.
///
/// Same as [vert_convolution_planar], but adjacent samples of a column are
/// `width * num_channels` elements apart from each other.
pub fn vert_convolution_interleaved<K>(
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    convolution(
        Layout::Interleaved,
        Direction::Vertical,
        kernel,
        src,
        height,
        width,
        num_channels,
        channel,
        dst,
    )
}

/// Convolves rows of one channel of an image with the given layout.
#[allow(clippy::too_many_arguments)]
pub fn horiz_convolution<K>(
    layout: Layout,
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    match layout {
        Layout::Planar => {
            horiz_convolution_planar(kernel, src, height, width, num_channels, channel, dst)
        }
        Layout::Interleaved => {
            horiz_convolution_interleaved(kernel, src, height, width, num_channels, channel, dst)
        }
    }
}

/// Convolves columns of one channel of an image with the given layout.
#[allow(clippy::too_many_arguments)]
pub fn vert_convolution<K>(
    layout: Layout,
    kernel: &K,
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    channel: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError>
where
    K: AsRef<[f32]> + ?Sized,
{
    match layout {
        Layout::Planar => {
            vert_convolution_planar(kernel, src, height, width, num_channels, channel, dst)
        }
        Layout::Interleaved => {
            vert_convolution_interleaved(kernel, src, height, width, num_channels, channel, dst)
        }
    }
}
