//! Electrode selection state machine.
//!
//! Each channel is either unselected or selected. A pick toggles it: selecting
//! records a freshly extracted trace, deselecting drops it. The selection is
//! iterated in dataset channel order, never click order.

use std::collections::BTreeMap;

use crate::data::dataset::Dataset;
use crate::data::trace::{extract_trace, ChannelTrace};

/// Outcome of an accepted toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Selected(usize),
    Deselected(usize),
}

impl Toggled {
    pub fn index(self) -> usize {
        match self {
            Toggled::Selected(i) | Toggled::Deselected(i) => i,
        }
    }
}

/// Currently active channels and their recorded traces, keyed by channel index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    active: BTreeMap<usize, ChannelTrace>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the channel at `index`. Unknown indices are ignored.
    pub fn toggle(&mut self, dataset: &Dataset, index: usize) -> Option<Toggled> {
        if self.active.remove(&index).is_some() {
            return Some(Toggled::Deselected(index));
        }
        let trace = extract_trace(dataset, index)?;
        self.active.insert(index, trace);
        Some(Toggled::Selected(index))
    }

    /// Toggle by channel identifier. Unknown names are ignored.
    pub fn toggle_by_name(&mut self, dataset: &Dataset, name: &str) -> Option<Toggled> {
        let index = dataset.channel_index(name)?;
        self.toggle(dataset, index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.active.contains_key(&index)
    }

    pub fn is_selected_name(&self, name: &str) -> bool {
        self.active.values().any(|t| t.channel == name)
    }

    /// Selected channel indices, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.keys().copied()
    }

    /// Selected channel names in dataset order.
    pub fn selected_names(&self) -> Vec<String> {
        self.active.values().map(|t| t.channel.clone()).collect()
    }

    /// Recorded traces in dataset order.
    pub fn traces(&self) -> impl Iterator<Item = (usize, &ChannelTrace)> + '_ {
        self.active.iter().map(|(i, t)| (*i, t))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
