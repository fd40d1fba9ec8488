//! Time cursor: which instant the topomap shows.

use crate::data::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCursor {
    index: usize,
    len: usize,
}

impl TimeCursor {
    /// Cursor over a time axis of `len` samples, clamped start position.
    pub fn new(len: usize, index: usize) -> Self {
        let mut c = Self { index: 0, len };
        c.set(index);
        c
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.time_len(), 0)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest valid index.
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Move to `index`, clamped. Returns `true` when the position changed.
    pub fn set(&mut self, index: usize) -> bool {
        let clamped = index.min(self.max_index());
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }

    /// Move by `delta` samples, clamped. Returns `true` when the position changed.
    pub fn step(&mut self, delta: i64) -> bool {
        let target = (self.index as i64).saturating_add(delta).max(0);
        self.set(usize::try_from(target).unwrap_or(usize::MAX))
    }

    /// Current time in seconds.
    pub fn time(&self, dataset: &Dataset) -> f64 {
        dataset.times()[self.index.min(dataset.time_len() - 1)]
    }
}

/// Label shown under the slider, e.g. `"Time: 0.267 s"`.
pub fn format_time_label(t: f64) -> String {
    format!("Time: {t:.3} s")
}

/// Index of the sample closest to `t`. Ties go to the earlier sample.
pub fn nearest_time_index(times: &[f64], t: f64) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, v) in times.iter().enumerate() {
        let d = (v - t).abs();
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}
