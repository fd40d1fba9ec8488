//! Dataset files: a JSON mirror of [`Dataset`] written by the preprocessing stage.
//!
//! ```json
//! {
//!   "channels": [{ "name": "Fp1", "position": [-0.03, 0.08] }],
//!   "times": [-0.2, -0.196],
//!   "epochs": [[[1.2, 0.8]]]
//! }
//! ```
//!
//! Exactly one of `averaged` (`[channel][time]`) or `epochs`
//! (`[epoch][channel][time]`) must be present.

use std::path::Path;

use ndarray::{Array2, Array3, Axis};
use serde::{Deserialize, Serialize};

use crate::data::dataset::{AmplitudeSource, Channel, Dataset};
use crate::error::{DatasetError, DatasetFileError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub name: String,
    pub position: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub channels: Vec<ChannelEntry>,
    pub times: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averaged: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epochs: Option<Vec<Vec<Vec<f64>>>>,
}

impl From<&Dataset> for DatasetFile {
    fn from(d: &Dataset) -> Self {
        let channels = d
            .channels()
            .iter()
            .map(|c| ChannelEntry {
                name: c.name.clone(),
                position: c.position,
                description: c.description.clone(),
            })
            .collect();
        let (averaged, epochs) = match d.amplitudes() {
            AmplitudeSource::Averaged(a) => (
                Some(a.outer_iter().map(|row| row.to_vec()).collect()),
                None,
            ),
            AmplitudeSource::Epochs(a) => (
                None,
                Some(
                    a.axis_iter(Axis(0))
                        .map(|ep| ep.outer_iter().map(|row| row.to_vec()).collect())
                        .collect(),
                ),
            ),
        };
        Self {
            channels,
            times: d.times().to_vec(),
            averaged,
            epochs,
        }
    }
}

fn rectangular<T>(rows: &[Vec<T>], what: &str) -> Result<usize, DatasetError> {
    let width = rows.first().map_or(0, Vec::len);
    if let Some(i) = rows.iter().position(|r| r.len() != width) {
        return Err(DatasetError::Ragged(format!(
            "{what} row {i} has {} entries, expected {width}",
            rows[i].len()
        )));
    }
    Ok(width)
}

fn to_array2(rows: Vec<Vec<f64>>) -> Result<Array2<f64>, DatasetError> {
    let width = rectangular(&rows, "channel")?;
    let height = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat).map_err(|e| DatasetError::Ragged(e.to_string()))
}

fn to_array3(epochs: Vec<Vec<Vec<f64>>>) -> Result<Array3<f64>, DatasetError> {
    let n_ch = rectangular(&epochs, "epoch")?;
    let mut n_t = 0;
    for (i, ep) in epochs.iter().enumerate() {
        let w = rectangular(ep, &format!("epoch {i} channel"))?;
        if i == 0 {
            n_t = w;
        } else if w != n_t {
            return Err(DatasetError::Ragged(format!(
                "epoch {i} has {w} samples per channel, expected {n_t}"
            )));
        }
    }
    let n_ep = epochs.len();
    let flat: Vec<f64> = epochs.into_iter().flatten().flatten().collect();
    Array3::from_shape_vec((n_ep, n_ch, n_t), flat).map_err(|e| DatasetError::Ragged(e.to_string()))
}

impl DatasetFile {
    /// Validate and convert into a [`Dataset`].
    pub fn into_dataset(self) -> Result<Dataset, DatasetFileError> {
        let amplitudes = match (self.averaged, self.epochs) {
            (Some(_), Some(_)) => return Err(DatasetFileError::AmbiguousAmplitudes),
            (None, None) => return Err(DatasetFileError::MissingAmplitudes),
            (Some(rows), None) => AmplitudeSource::Averaged(to_array2(rows)?),
            (None, Some(epochs)) => {
                if epochs.is_empty() {
                    return Err(DatasetError::NoEpochs.into());
                }
                AmplitudeSource::Epochs(to_array3(epochs)?)
            }
        };
        let channels = self
            .channels
            .into_iter()
            .map(|c| Channel {
                name: c.name,
                position: c.position,
                description: c.description,
            })
            .collect();
        Ok(Dataset::new(channels, self.times, amplitudes)?)
    }
}

/// Parse a dataset from JSON text.
pub fn dataset_from_json(text: &str) -> Result<Dataset, DatasetFileError> {
    let file: DatasetFile = serde_json::from_str(text)?;
    file.into_dataset()
}

/// Load a dataset JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetFileError> {
    let text = std::fs::read_to_string(path)?;
    let dataset = dataset_from_json(&text)?;
    log::info!(
        "loaded {} channels x {} samples from {}",
        dataset.channel_count(),
        dataset.time_len(),
        path.display()
    );
    Ok(dataset)
}

/// Write a dataset as pretty-printed JSON.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), DatasetFileError> {
    let file = DatasetFile::from(dataset);
    let text = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, text)?;
    Ok(())
}
