use std::time::Instant;

use anyhow::{Context, Result};
use layout_convolve::kernels::box_kernel_vec;
use layout_convolve::{
    horiz_convolution, horiz_convolution_planar, transpose_planar, vert_convolution,
};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::structs::{RuntimeInfo, Scenario};

/// Dimensions of the measured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
}

impl Dimensions {
    pub fn samples_count(&self) -> Result<usize> {
        (self.height as usize)
            .checked_mul(self.width as usize)
            .and_then(|v| v.checked_mul(self.channels as usize))
            .with_context(|| format!("Image {:?} is too big", self))
    }
}

/// Returns buffer with uniformly distributed random samples in `[0, 1)`.
pub fn random_samples(seed: u64, count: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random::<f32>()).collect()
}

/// Blurs every channel of `src` into `dst` with a box kernel and returns
/// the duration of each phase.
///
/// `dst` is filled with zeros before blurring because convolution
/// doesn't write border pixels.
pub fn measure_blur(
    scenario: &Scenario,
    src: &[f32],
    dims: Dimensions,
    dst: &mut [f32],
) -> Result<RuntimeInfo> {
    let Dimensions {
        height,
        width,
        channels,
    } = dims;
    let kernel = box_kernel_vec(scenario.kernel_size)?;
    let mut info = RuntimeInfo::default();
    dst.fill(0.);

    let start = Instant::now();
    for channel in 0..channels {
        horiz_convolution(
            scenario.layout,
            &kernel,
            src,
            height,
            width,
            channels,
            channel,
            dst,
        )
        .with_context(|| format!("Failed to convolve rows of channel #{}", channel))?;
    }
    info.horizontal = start.elapsed();

    if scenario.by_transpose {
        // Allocation of temporary buffers is not measured.
        let mut transposed = vec![0f32; dst.len()];
        let mut convolved = vec![0f32; dst.len()];

        let start = Instant::now();
        transpose_planar(dst, height, width, channels, &mut transposed)
            .context("Failed to transpose image")?;
        info.transpose = start.elapsed();

        let start = Instant::now();
        for channel in 0..channels {
            horiz_convolution_planar(
                &kernel,
                &transposed,
                width,
                height,
                channels,
                channel,
                &mut convolved,
            )
            .with_context(|| {
                format!(
                    "Failed to convolve rows of transposed channel #{}",
                    channel
                )
            })?;
        }
        info.vertical = start.elapsed();

        let start = Instant::now();
        transpose_planar(&convolved, width, height, channels, dst)
            .context("Failed to transpose image back")?;
        info.transpose += start.elapsed();
    } else {
        let mut temp = vec![0f32; dst.len()];

        let start = Instant::now();
        for channel in 0..channels {
            vert_convolution(
                scenario.layout,
                &kernel,
                dst,
                height,
                width,
                channels,
                channel,
                &mut temp,
            )
            .with_context(|| format!("Failed to convolve columns of channel #{}", channel))?;
        }
        dst.copy_from_slice(&temp);
        info.vertical = start.elapsed();
    }

    Ok(info)
}

/// Runs the scenario `trials` times and returns the minimal durations.
pub fn measure_scenario(
    scenario: &Scenario,
    src: &[f32],
    dims: Dimensions,
    trials: u32,
    dst: &mut [f32],
) -> Result<RuntimeInfo> {
    let mut best: Option<RuntimeInfo> = None;
    for trial in 0..trials {
        let info = measure_blur(scenario, src, dims, dst)?;
        debug!(
            "{} trial #{}: total {:?}",
            scenario.name,
            trial,
            info.total()
        );
        best = Some(best.map_or(info, |b| b.min(info)));
    }
    best.context("Count of trials must be greater than zero")
}
