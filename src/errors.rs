use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    #[error("Length of kernel must be odd")]
    EvenKernelLength,
    #[error("Index of channel is out of the number of image channels")]
    InvalidChannelIndex,
    #[error("Size of destination buffer is smaller than size of source buffer")]
    DestinationBufferTooSmall,
    #[error("Size of source buffer is smaller than required by image dimensions")]
    SourceBufferTooSmall,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("Length of kernel must be odd, got {0}")]
    InvalidKernelLength(usize),
}
