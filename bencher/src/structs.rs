use std::time::Duration;

use layout_convolve::Layout;

pub const CSV_HEADER: &str = "test,horizontal,transpose,vertical,total";

/// One measured way of blurring the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub layout: Layout,
    pub kernel_size: usize,
    /// Replace vertical convolution with horizontal convolution
    /// of the transposed image.
    pub by_transpose: bool,
}

pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "interleaved3",
        layout: Layout::Interleaved,
        kernel_size: 3,
        by_transpose: false,
    },
    Scenario {
        name: "planar3",
        layout: Layout::Planar,
        kernel_size: 3,
        by_transpose: false,
    },
    Scenario {
        name: "interleaved7",
        layout: Layout::Interleaved,
        kernel_size: 7,
        by_transpose: false,
    },
    Scenario {
        name: "planar7",
        layout: Layout::Planar,
        kernel_size: 7,
        by_transpose: false,
    },
    Scenario {
        name: "planar7withTranspose",
        layout: Layout::Planar,
        kernel_size: 7,
        by_transpose: true,
    },
];

/// Durations of the phases of a blur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub horizontal: Duration,
    pub transpose: Duration,
    pub vertical: Duration,
}

impl RuntimeInfo {
    pub fn total(&self) -> Duration {
        self.horizontal + self.transpose + self.vertical
    }

    /// Returns the minimum of each phase separately.
    pub fn min(self, other: Self) -> Self {
        Self {
            horizontal: self.horizontal.min(other.horizontal),
            transpose: self.transpose.min(other.transpose),
            vertical: self.vertical.min(other.vertical),
        }
    }

    /// Formats durations (in seconds) as a CSV row
    /// matching to [CSV_HEADER].
    pub fn to_csv_row(&self, test_name: &str) -> String {
        format!(
            "{},{},{},{},{}",
            test_name,
            self.horizontal.as_secs_f64(),
            self.transpose.as_secs_f64(),
            self.vertical.as_secs_f64(),
            self.total().as_secs_f64()
        )
    }
}
