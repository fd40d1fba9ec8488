//! Typed input events for the electrode selection controller.
//!
//! Widgets translate raw pointer/keyboard input into [`ViewerEvent`]s before
//! anything reaches the controller: a click on the topomap is already resolved
//! to a marker index, a slider drag to a time index. The controller never
//! inspects widget types.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// ViewerEvent
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A marker was picked; the payload is its index in the channel list the
    /// markers were drawn from.
    MarkerPicked(usize),
    /// A channel was picked by identifier (Electrodes menu, comparison legend).
    ChannelPicked(String),
    /// The time slider moved to an absolute time index.
    TimeCursorMoved(usize),
    /// Keyboard stepping by a signed number of samples.
    TimeCursorStepped(i64),
}

impl ViewerEvent {
    /// `true` for events that can change the selection.
    pub fn is_pick(&self) -> bool {
        matches!(self, ViewerEvent::MarkerPicked(_) | ViewerEvent::ChannelPicked(_))
    }

    /// `true` for events that can move the time cursor.
    pub fn is_cursor(&self) -> bool {
        matches!(
            self,
            ViewerEvent::TimeCursorMoved(_) | ViewerEvent::TimeCursorStepped(_)
        )
    }
}

impl fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerEvent::MarkerPicked(i) => write!(f, "MARKER_PICKED({i})"),
            ViewerEvent::ChannelPicked(name) => write!(f, "CHANNEL_PICKED({name})"),
            ViewerEvent::TimeCursorMoved(i) => write!(f, "TIME_CURSOR_MOVED({i})"),
            ViewerEvent::TimeCursorStepped(d) => write!(f, "TIME_CURSOR_STEPPED({d:+})"),
        }
    }
}
