//! Segment indicator visibility.
//!
//! The controller reports segment changes through [`SegmentVisibility`]; in the
//! app that is an [`EventWriter<SegmentChanged>`]. Consumers re-apply each event
//! to their own indicator set: Bevy UI banners natively, page containers on WASM.

use bevy::prelude::*;

use crate::engine::rotation::controller::SegmentVisibility;

/// Page container pairs toggled through the DOM (WASM only).
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// In-engine top/bottom banners per segment.
pub mod indicators;

/// Indicator pair to show after a segment change. `None` hides all pairs.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentChanged {
    pub active: Option<usize>,
}

impl SegmentVisibility for EventWriter<'_, SegmentChanged> {
    fn on_segment_changed(&mut self, active: Option<usize>) {
        self.write(SegmentChanged { active });
    }
}
