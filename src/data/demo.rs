//! Synthetic 10-20 evoked-response dataset for demos and tests.
//!
//! 18 channels, -0.2 s to 0.5 s at 250 Hz, a frontal N100 and a posterior
//! P300 with deterministic per-epoch amplitude, latency and background
//! oscillation differences, so the comparison view has visible bands.

use std::f64::consts::PI;

use ndarray::Array3;

use crate::data::dataset::{AmplitudeSource, Channel, Dataset};
use crate::error::DatasetError;

pub const SAMPLE_RATE_HZ: f64 = 250.0;
pub const TMIN: f64 = -0.2;
pub const TMAX: f64 = 0.5;

/// Standard labels with projected unit-circle positions (x right, y nose).
pub const MONTAGE_10_20: [(&str, [f64; 2]); 18] = [
    ("Fp1", [-0.31, 0.95]),
    ("Fp2", [0.31, 0.95]),
    ("F7", [-0.81, 0.59]),
    ("F3", [-0.40, 0.52]),
    ("F4", [0.40, 0.52]),
    ("F8", [0.81, 0.59]),
    ("T7", [-1.0, 0.0]),
    ("C3", [-0.5, 0.0]),
    ("Cz", [0.0, 0.0]),
    ("C4", [0.5, 0.0]),
    ("T8", [1.0, 0.0]),
    ("P7", [-0.81, -0.59]),
    ("P3", [-0.40, -0.52]),
    ("Pz", [0.0, -0.5]),
    ("P4", [0.40, -0.52]),
    ("P8", [0.81, -0.59]),
    ("O1", [-0.31, -0.95]),
    ("O2", [0.31, -0.95]),
];

/// Head radius in meters the unit positions are scaled to.
const HEAD_RADIUS_M: f64 = 0.09;

pub fn demo_channels() -> Vec<Channel> {
    MONTAGE_10_20
        .iter()
        .map(|(name, p)| Channel::new(*name, [p[0] * HEAD_RADIUS_M, p[1] * HEAD_RADIUS_M]))
        .collect()
}

pub fn demo_times() -> Vec<f64> {
    let n = ((TMAX - TMIN) * SAMPLE_RATE_HZ).round() as usize + 1;
    (0..n).map(|i| TMIN + i as f64 / SAMPLE_RATE_HZ).collect()
}

fn gaussian(t: f64, center: f64, width: f64) -> f64 {
    (-((t - center) / width).powi(2) / 2.0).exp()
}

/// Amplitude in µV of channel `ch` at time `t` for epoch `e`.
fn sample(ch: usize, pos: [f64; 2], e: usize, t: f64) -> f64 {
    let (x, y) = (pos[0], pos[1]);
    let (ef, cf) = (e as f64, ch as f64);

    let p300_weight = (-(x * x + (y + 0.5).powi(2)) / 0.5).exp();
    let n100_weight = (-(x * x + (y - 0.3).powi(2)) / 0.6).exp();

    let gain = 1.0 + 0.3 * (1.7 * ef + cf).sin();
    let jitter = 0.02 * (2.3 * ef).sin();

    let evoked = if t >= 0.0 {
        8.0 * gain * p300_weight * gaussian(t, 0.30 + jitter, 0.05)
            - 3.0 * n100_weight * gaussian(t, 0.10 + jitter / 2.0, 0.025)
    } else {
        0.0
    };
    let alpha = 2.0 * (2.0 * PI * (8.0 + (ch % 5) as f64) * t + 0.9 * ef + 1.3 * cf).sin();
    evoked + alpha
}

/// Per-epoch demo dataset with `epochs` trials.
pub fn demo_dataset(epochs: usize) -> Result<Dataset, DatasetError> {
    let channels = demo_channels();
    let times = demo_times();
    let unit: Vec<[f64; 2]> = MONTAGE_10_20.iter().map(|(_, p)| *p).collect();
    let data = Array3::from_shape_fn((epochs, channels.len(), times.len()), |(e, c, i)| {
        sample(c, unit[c], e, times[i])
    });
    Dataset::new(channels, times, AmplitudeSource::Epochs(data))
}

/// The epoch-averaged counterpart of [`demo_dataset`].
pub fn demo_averaged(epochs: usize) -> Result<Dataset, DatasetError> {
    let per_epoch = demo_dataset(epochs)?;
    Dataset::new(
        per_epoch.channels().to_vec(),
        per_epoch.times().to_vec(),
        AmplitudeSource::Averaged(per_epoch.evoked().clone()),
    )
}
