//! Per-channel waveform traces for the comparison view.

use ndarray::Axis;

use crate::data::dataset::{AmplitudeSource, Dataset};

/// Time-aligned waveform of one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTrace {
    pub channel: String,
    pub times: Vec<f64>,
    pub mean: Vec<f64>,
    /// `[mean - sd, mean + sd]` per time index; only for per-epoch sources.
    pub band: Option<Vec<[f64; 2]>>,
}

impl ChannelTrace {
    /// `[t, mean]` pairs ready for plotting.
    pub fn mean_points(&self) -> Vec<[f64; 2]> {
        self.times
            .iter()
            .zip(&self.mean)
            .map(|(t, v)| [*t, *v])
            .collect()
    }

    /// The ±1 SD band split into one quad per time step.
    ///
    /// Each quad is convex (`[lower_i, lower_i+1, upper_i+1, upper_i]`), so it
    /// can be filled directly.
    pub fn band_quads(&self) -> Vec<[[f64; 2]; 4]> {
        let Some(band) = self.band.as_ref() else {
            return Vec::new();
        };
        self.times
            .windows(2)
            .zip(band.windows(2))
            .map(|(t, b)| {
                [
                    [t[0], b[0][0]],
                    [t[1], b[1][0]],
                    [t[1], b[1][1]],
                    [t[0], b[0][1]],
                ]
            })
            .collect()
    }

    /// Lowest and highest value drawn for this trace, band included.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let lows = self.band.iter().flatten().map(|b| b[0]);
        let highs = self.band.iter().flatten().map(|b| b[1]);
        let all = self.mean.iter().copied().chain(lows).chain(highs);
        all.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Mean and standard deviation over the samples, dividing by `n`.
pub fn mean_and_sd(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Extract the trace of the channel at `index`, or `None` if it does not exist.
///
/// Pure: the result depends only on the channel and the amplitude source.
pub fn extract_trace(dataset: &Dataset, index: usize) -> Option<ChannelTrace> {
    let channel = dataset.channel(index)?;
    let times = dataset.times().to_vec();
    match dataset.amplitudes() {
        AmplitudeSource::Averaged(a) => Some(ChannelTrace {
            channel: channel.name.clone(),
            times,
            mean: a.row(index).to_vec(),
            band: None,
        }),
        AmplitudeSource::Epochs(a) => {
            // (epoch, time) for this channel
            let per_epoch = a.index_axis(Axis(1), index);
            let mut mean = Vec::with_capacity(times.len());
            let mut band = Vec::with_capacity(times.len());
            for column in per_epoch.axis_iter(Axis(1)) {
                let samples: Vec<f64> = column.iter().copied().collect();
                let (m, sd) = mean_and_sd(&samples);
                mean.push(m);
                band.push([m - sd, m + sd]);
            }
            Some(ChannelTrace {
                channel: channel.name.clone(),
                times,
                mean,
                band: Some(band),
            })
        }
    }
}
