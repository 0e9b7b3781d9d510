//! Constructors of commonly used 1D kernels.
//!
//! Any `AsRef<[f32]>` with odd length may be used as a kernel,
//! these functions only save the boilerplate of building box filters.
use crate::KernelError;

/// Returns box (uniform-average) kernel of size `N`.
/// Each tap is equal to `1 / N`, so the sum of weights is `1.0`.
///
/// `N` is not checked here; convolution functions reject even-sized kernels.
pub fn box_kernel<const N: usize>() -> [f32; N] {
    let contribution = 1.0 / N as f32;
    [contribution; N]
}

/// Returns box (uniform-average) kernel with the given odd length.
pub fn box_kernel_vec(len: usize) -> Result<Vec<f32>, KernelError> {
    if len % 2 != 1 {
        return Err(KernelError::InvalidKernelLength(len));
    }
    let contribution = 1.0 / len as f32;
    Ok(vec![contribution; len])
}

/// Returns index of the center tap of kernel with the given length.
#[inline]
pub(crate) fn center_tap(len: usize) -> usize {
    len / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_kernel_is_normalized() {
        let kernel = box_kernel::<7>();
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(kernel.iter().all(|&k| k == kernel[0]));
    }

    #[test]
    fn box_kernel_vec_rejects_even_length() {
        assert_eq!(box_kernel_vec(4), Err(KernelError::InvalidKernelLength(4)));
        assert_eq!(box_kernel_vec(0), Err(KernelError::InvalidKernelLength(0)));
        assert_eq!(box_kernel_vec(3).unwrap(), box_kernel::<3>().to_vec());
    }

    #[test]
    fn center_of_kernel() {
        assert_eq!(center_tap(1), 0);
        assert_eq!(center_tap(3), 1);
        assert_eq!(center_tap(7), 3);
    }
}
