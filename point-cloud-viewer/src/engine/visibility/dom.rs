use bevy::prelude::*;
use constants::dom::{ACTIVE_CLASS, INTRO_TEXT_ID, bottom_container_id, top_container_id};
use web_sys::{Document, window};

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::rotation::controller::SegmentVisibility;
use crate::engine::visibility::SegmentChanged;

/// The host page's `container-{n}-top` / `container-{n}-bottom` pairs.
pub struct DomSegmentContainers {
    document: Document,
    total_segments: usize,
}

impl DomSegmentContainers {
    pub fn from_window(total_segments: usize) -> Option<Self> {
        let document = window()?.document()?;
        Some(Self {
            document,
            total_segments,
        })
    }

    fn set_pair_active(&self, segment: usize, active: bool) {
        for id in [top_container_id(segment), bottom_container_id(segment)] {
            // Pages may omit containers for some segments.
            if let Some(element) = self.document.get_element_by_id(&id) {
                set_class(&element, active, &id);
            }
        }
    }
}

impl SegmentVisibility for DomSegmentContainers {
    fn on_segment_changed(&mut self, active: Option<usize>) {
        for segment in 0..self.total_segments {
            self.set_pair_active(segment, false);
        }
        if let Some(segment) = active {
            self.set_pair_active(segment, true);
        }
    }
}

fn set_class(element: &web_sys::Element, active: bool, id: &str) {
    let classes = element.class_list();
    let result = if active {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
    if let Err(error) = result {
        error!("Failed to update class on #{}: {:?}", id, error);
    }
}

/// Hide the page's static intro text once the viewer is running.
pub fn hide_intro_text() {
    let Some(document) = window().and_then(|window| window.document()) else {
        warn!("Document not available; intro text left as is");
        return;
    };
    if let Some(element) = document.get_element_by_id(INTRO_TEXT_ID) {
        set_class(&element, false, INTRO_TEXT_ID);
    }
}

/// Re-apply every segment change to the page containers.
pub fn apply_dom_segment_containers(
    mut segment_events: EventReader<SegmentChanged>,
    settings: Res<ViewerSettings>,
) {
    if segment_events.is_empty() {
        return;
    }
    let Some(mut containers) = DomSegmentContainers::from_window(settings.rotation.total_segments)
    else {
        error!("Document not available; segment containers not updated");
        segment_events.clear();
        return;
    };
    for event in segment_events.read() {
        containers.on_segment_changed(event.active);
    }
}
