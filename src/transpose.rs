use crate::convolution::check_buffers;
use crate::ConvolutionError;

/// Side of the square tile used to walk through the source plane.
pub(crate) const TRANSPOSE_BLOCK_SIZE: usize = 16;

/// Transposes every channel plane of a planar image.
///
/// The source image has `height` rows and `width` columns. The result,
/// written into `dst`, is a planar image with `width` rows and `height`
/// columns, where `dst[channel, col, row] == src[channel, row, col]`.
///
/// Samples of `dst` after `height * width * num_channels` are not modified.
///
/// # Errors
///
/// Nothing is written to `dst` if:
/// - `dst` is shorter than `src` ([ConvolutionError::DestinationBufferTooSmall]);
/// - `src` is shorter than `height * width * num_channels`
///   ([ConvolutionError::SourceBufferTooSmall]).
pub fn transpose_planar(
    src: &[f32],
    height: u32,
    width: u32,
    num_channels: u32,
    dst: &mut [f32],
) -> Result<(), ConvolutionError> {
    check_buffers(src.len(), dst.len(), height, width, num_channels)?;

    let (height, width) = (height as usize, width as usize);
    let plane_size = height * width;
    if plane_size == 0 {
        return Ok(());
    }

    let src_planes = src.chunks_exact(plane_size);
    let dst_planes = dst.chunks_exact_mut(plane_size);
    for (src_plane, dst_plane) in src_planes.zip(dst_planes).take(num_channels as usize) {
        transpose_plane(src_plane, height, width, dst_plane);
    }
    Ok(())
}

/// Transposes one plane tile by tile, so that both reading and writing
/// stay inside a small set of cache lines.
#[inline]
fn transpose_plane(src: &[f32], height: usize, width: usize, dst: &mut [f32]) {
    for row_block in (0..height).step_by(TRANSPOSE_BLOCK_SIZE) {
        let row_block_end = (row_block + TRANSPOSE_BLOCK_SIZE).min(height);
        for col_block in (0..width).step_by(TRANSPOSE_BLOCK_SIZE) {
            let col_block_end = (col_block + TRANSPOSE_BLOCK_SIZE).min(width);
            for row in row_block..row_block_end {
                let src_row = &src[row * width..(row + 1) * width];
                for col in col_block..col_block_end {
                    dst[col * height + row] = src_row[col];
                }
            }
        }
    }
}
