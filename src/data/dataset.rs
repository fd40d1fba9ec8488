//! Evoked-response dataset: channels, time axis and amplitudes.
//!
//! A [`Dataset`] is built once from the output of the preprocessing stage
//! (filtering, epoching and averaging happen upstream) and never changes
//! afterwards. All views share it read-only.

use std::collections::HashSet;

use ndarray::{Array2, Array3, ArrayView1, Axis};

use crate::error::DatasetError;

/// A single scalp electrode.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Standard label, unique within a dataset (e.g. `"Fp1"`).
    pub name: String,
    /// 2-D projected scalp position.
    pub position: [f64; 2],
    /// Optional short functional description lines.
    pub description: Option<Vec<String>>,
}

impl Channel {
    pub fn new(name: impl Into<String>, position: [f64; 2]) -> Self {
        Self {
            name: name.into(),
            position,
            description: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.description = Some(lines.into_iter().map(Into::into).collect());
        self
    }
}

/// Amplitude samples as delivered by the preprocessing stage.
#[derive(Debug, Clone, PartialEq)]
pub enum AmplitudeSource {
    /// One averaged waveform per channel, shape `(channel, time)`.
    Averaged(Array2<f64>),
    /// Every epoch, shape `(epoch, channel, time)`.
    Epochs(Array3<f64>),
}

impl AmplitudeSource {
    pub fn shape(&self) -> Vec<usize> {
        match self {
            AmplitudeSource::Averaged(a) => a.shape().to_vec(),
            AmplitudeSource::Epochs(a) => a.shape().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    channels: Vec<Channel>,
    times: Vec<f64>,
    amplitudes: AmplitudeSource,
    /// Evoked response `(channel, time)` used by the topomap.
    evoked: Array2<f64>,
    /// Symmetric color limit over the whole evoked response.
    vlim: f64,
}

impl Dataset {
    /// Validate and assemble a dataset.
    pub fn new(
        channels: Vec<Channel>,
        times: Vec<f64>,
        amplitudes: AmplitudeSource,
    ) -> Result<Self, DatasetError> {
        if channels.is_empty() {
            return Err(DatasetError::NoChannels);
        }
        let mut seen = HashSet::new();
        for ch in &channels {
            if !seen.insert(ch.name.as_str()) {
                return Err(DatasetError::DuplicateChannel(ch.name.clone()));
            }
        }
        if times.is_empty() {
            return Err(DatasetError::EmptyTimeAxis);
        }
        if let Some(i) = times.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(DatasetError::TimeAxisNotIncreasing(i + 1));
        }

        let (n_ch, n_t) = (channels.len(), times.len());
        let evoked = match &amplitudes {
            AmplitudeSource::Averaged(a) => {
                if a.dim() != (n_ch, n_t) {
                    return Err(DatasetError::ShapeMismatch {
                        expected: vec![n_ch, n_t],
                        found: a.shape().to_vec(),
                    });
                }
                a.clone()
            }
            AmplitudeSource::Epochs(a) => {
                let (n_ep, c, t) = a.dim();
                if (c, t) != (n_ch, n_t) {
                    return Err(DatasetError::ShapeMismatch {
                        expected: vec![n_ep, n_ch, n_t],
                        found: a.shape().to_vec(),
                    });
                }
                a.mean_axis(Axis(0)).ok_or(DatasetError::NoEpochs)?
            }
        };

        let peak = evoked
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        let vlim = if peak > 0.0 { peak } else { 1.0 };

        Ok(Self {
            channels,
            times,
            amplitudes,
            evoked,
            vlim,
        })
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn channel_index(&self, name: &str) -> Option<usize> {
        self.channels.iter().position(|c| c.name == name)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Marker positions in channel-list order.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.channels.iter().map(|c| c.position).collect()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn time_len(&self) -> usize {
        self.times.len()
    }

    /// First and last instant of the time axis.
    pub fn time_span(&self) -> (f64, f64) {
        (self.times[0], self.times[self.times.len() - 1])
    }

    pub fn amplitudes(&self) -> &AmplitudeSource {
        &self.amplitudes
    }

    pub fn has_epochs(&self) -> bool {
        matches!(self.amplitudes, AmplitudeSource::Epochs(_))
    }

    /// Number of epochs, or `None` for an averaged source.
    pub fn epoch_count(&self) -> Option<usize> {
        match &self.amplitudes {
            AmplitudeSource::Averaged(_) => None,
            AmplitudeSource::Epochs(a) => Some(a.len_of(Axis(0))),
        }
    }

    pub fn evoked(&self) -> &Array2<f64> {
        &self.evoked
    }

    /// Evoked waveform of one channel.
    pub fn evoked_channel(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.channels.len()).then(|| self.evoked.row(index))
    }

    /// Evoked amplitude of every channel at one time index, in channel order.
    pub fn field_at(&self, time_index: usize) -> Option<Vec<f64>> {
        (time_index < self.times.len()).then(|| self.evoked.column(time_index).to_vec())
    }

    /// Symmetric amplitude limit `(-vlim, vlim)` for the topomap color scale.
    pub fn value_range(&self) -> (f64, f64) {
        (-self.vlim, self.vlim)
    }
}
