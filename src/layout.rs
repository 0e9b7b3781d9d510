/// Order of samples of a multi-channel image inside a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Pixel-major order: all channels of a pixel are stored together.
    ///
    /// Sample `(row, col, channel)` is located at
    /// `row * width * num_channels + col * num_channels + channel`.
    Interleaved,
    /// Channel-major order: a whole 2D plane of one channel is stored
    /// before the next channel begins.
    ///
    /// Sample `(row, col, channel)` is located at
    /// `channel * height * width + row * width + col`.
    Planar,
}

impl Layout {
    /// Returns index of sample inside a buffer with this layout.
    #[inline]
    pub fn index(
        self,
        height: u32,
        width: u32,
        num_channels: u32,
        row: u32,
        col: u32,
        channel: u32,
    ) -> usize {
        let (height, width, num_channels) = (height as usize, width as usize, num_channels as usize);
        let (row, col, channel) = (row as usize, col as usize, channel as usize);
        match self {
            Self::Interleaved => (row * width + col) * num_channels + channel,
            Self::Planar => (channel * height + row) * width + col,
        }
    }
}

/// Axis along which a 1D kernel slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Horizontal,
    Vertical,
}

/// Describes one channel of an image as a set of equally spaced lines
/// of equally spaced samples.
///
/// A "line" is a row for horizontal convolution and a column for
/// vertical convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Strides {
    /// Index of the first sample of the first line.
    pub start: usize,
    /// Distance between first samples of adjacent lines.
    pub line_stride: usize,
    /// Distance between adjacent samples of a line.
    pub tap_stride: usize,
    /// Count of lines.
    pub lines: usize,
    /// Count of samples in a line.
    pub line_len: usize,
}

impl Strides {
    pub fn new(
        layout: Layout,
        direction: Direction,
        height: u32,
        width: u32,
        num_channels: u32,
        channel: u32,
    ) -> Self {
        let (height, width) = (height as usize, width as usize);
        let (num_channels, channel) = (num_channels as usize, channel as usize);

        // Distance between horizontally and vertically adjacent pixels,
        // and index of the first sample of the channel.
        let (pixel_stride, row_stride, start) = match layout {
            Layout::Planar => (1, width, channel * height * width),
            Layout::Interleaved => (num_channels, width * num_channels, channel),
        };

        match direction {
            Direction::Horizontal => Self {
                start,
                line_stride: row_stride,
                tap_stride: pixel_stride,
                lines: height,
                line_len: width,
            },
            Direction::Vertical => Self {
                start,
                line_stride: pixel_stride,
                tap_stride: row_stride,
                lines: width,
                line_len: height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_interleaved_sample() {
        let layout = Layout::Interleaved;
        assert_eq!(layout.index(4, 4, 2, 0, 0, 0), 0);
        assert_eq!(layout.index(4, 4, 2, 0, 0, 1), 1);
        assert_eq!(layout.index(4, 4, 2, 0, 1, 0), 2);
        assert_eq!(layout.index(4, 4, 2, 1, 0, 0), 8);
        assert_eq!(layout.index(4, 4, 2, 3, 3, 1), 31);
    }

    #[test]
    fn index_of_planar_sample() {
        let layout = Layout::Planar;
        assert_eq!(layout.index(4, 5, 2, 0, 1, 0), 1);
        assert_eq!(layout.index(4, 5, 2, 1, 0, 0), 5);
        assert_eq!(layout.index(4, 5, 2, 0, 0, 1), 20);
        assert_eq!(layout.index(4, 5, 2, 3, 4, 1), 39);
    }

    #[test]
    fn strides_address_same_samples_as_index() {
        let (height, width, num_channels) = (3, 5, 4);
        for layout in [Layout::Planar, Layout::Interleaved] {
            for channel in 0..num_channels {
                let s = Strides::new(
                    layout,
                    Direction::Horizontal,
                    height,
                    width,
                    num_channels,
                    channel,
                );
                assert_eq!((s.lines, s.line_len), (3, 5));
                for row in 0..height {
                    for col in 0..width {
                        let idx = s.start + row as usize * s.line_stride + col as usize * s.tap_stride;
                        assert_eq!(
                            idx,
                            layout.index(height, width, num_channels, row, col, channel)
                        );
                    }
                }

                let s = Strides::new(
                    layout,
                    Direction::Vertical,
                    height,
                    width,
                    num_channels,
                    channel,
                );
                assert_eq!((s.lines, s.line_len), (5, 3));
                for col in 0..width {
                    for row in 0..height {
                        let idx = s.start + col as usize * s.line_stride + row as usize * s.tap_stride;
                        assert_eq!(
                            idx,
                            layout.index(height, width, num_channels, row, col, channel)
                        );
                    }
                }
            }
        }
    }
}
