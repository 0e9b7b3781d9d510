use crate::kernels::center_tap;
use crate::layout::Strides;

/// Convolves every line described by `strides` with `kernel`.
///
/// Only samples whose whole window lies inside the line are written,
/// `center` samples at both ends of each line are left untouched.
///
/// Caller must guarantee that `kernel` has odd length and that all
/// samples addressed by `strides` are inside `src` and `dst`.
#[inline(always)]
pub(crate) fn convolve_lines(kernel: &[f32], src: &[f32], dst: &mut [f32], strides: Strides) {
    let center = center_tap(kernel.len());
    if strides.line_len < kernel.len() {
        // No interior samples.
        return;
    }
    let tap_stride = strides.tap_stride;

    for line in 0..strides.lines {
        let line_start = strides.start + line * strides.line_stride;

        for pos in center..strides.line_len - center {
            let window_start = line_start + (pos - center) * tap_stride;
            let window = src[window_start..].iter().step_by(tap_stride);
            let ss: f32 = kernel.iter().zip(window).map(|(&k, &s)| k * s).sum();
            dst[line_start + pos * tap_stride] = ss;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convolve_single_contiguous_line() {
        let src = [1., 2., 3., 4., 5.];
        let mut dst = [-1.; 5];
        let strides = Strides {
            start: 0,
            line_stride: 5,
            tap_stride: 1,
            lines: 1,
            line_len: 5,
        };
        convolve_lines(&[1., 0., -1.], &src, &mut dst, strides);
        assert_eq!(dst, [-1., -2., -2., -2., -1.]);
    }

    #[test]
    fn convolve_strided_line() {
        // Line samples are at indexes 1, 4, 7, 10.
        let src = [0., 1., 0., 0., 2., 0., 0., 3., 0., 0., 4., 0.];
        let mut dst = [0.; 12];
        let strides = Strides {
            start: 1,
            line_stride: 0,
            tap_stride: 3,
            lines: 1,
            line_len: 4,
        };
        convolve_lines(&[1., 1., 1.], &src, &mut dst, strides);
        assert_eq!(dst, [0., 0., 0., 0., 6., 0., 0., 9., 0., 0., 0., 0.]);
    }

    #[test]
    fn kernel_longer_than_line_does_nothing() {
        let src = [1., 2.];
        let mut dst = [7.; 2];
        let strides = Strides {
            start: 0,
            line_stride: 2,
            tap_stride: 1,
            lines: 1,
            line_len: 2,
        };
        convolve_lines(&[1., 1., 1.], &src, &mut dst, strides);
        assert_eq!(dst, [7., 7.]);
    }
}
