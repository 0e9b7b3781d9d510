use super::{check_convolution_args, horiz_convolution_planar};
use crate::kernels::center_tap;
use crate::{transpose_planar, ConvolutionError};

/// Convolves columns of one channel of a planar image using
/// horizontal convolution of the transposed channel plane.
///
/// The plane of the selected channel is transposed, its rows (former
/// columns) are convolved and the result is transposed back. Memory is
/// read row by row in every step at the cost of moving the plane twice.
/// Other channel planes are not touched.
///
/// The result is the same as of [vert_convolution_planar](crate::vert_convolution_planar):
/// only interior rows of the selected channel are written into `dst`.
/// Intermediate planes are stored in temporary buffers which are
/// dropped before returning.
pub fn vert_convolution_planar_by_transpose<K>(
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
    let center = center_tap(kernel.len());
    if (height as usize) < kernel.len() {
        return Ok(());
    }

    // `check_convolution_args()` guarantees that the whole image,
    // and so the selected plane, fits into `src` and `dst`.
    let plane_size = height as usize * width as usize;
    let plane_start = channel as usize * plane_size;
    let src_plane = &src[plane_start..plane_start + plane_size];

    let mut transposed = vec![0f32; plane_size];
    transpose_planar(src_plane, height, width, 1, &mut transposed)?;

    let mut convolved = vec![0f32; plane_size];
    horiz_convolution_planar(kernel, &transposed, width, height, 1, 0, &mut convolved)?;

    // Reuse the first buffer to transpose the result back.
    transpose_planar(&convolved, width, height, 1, &mut transposed)?;

    let (height, width) = (height as usize, width as usize);
    let interior = center * width..(height - center) * width;
    let dst_plane = &mut dst[plane_start..plane_start + plane_size];
    dst_plane[interior.clone()].copy_from_slice(&transposed[interior]);
    Ok(())
}
