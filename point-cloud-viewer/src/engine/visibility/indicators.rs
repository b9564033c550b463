use bevy::prelude::*;
use constants::render_settings::{INDICATOR_BANNER_HEIGHT, INDICATOR_FONT_SIZE};

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::rotation::controller::SegmentVisibility;
use crate::engine::visibility::SegmentChanged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorSlot {
    Top,
    Bottom,
}

/// One half of a segment's indicator pair.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentIndicator {
    pub segment: usize,
    pub slot: IndicatorSlot,
}

/// Indicator nodes seen through the visibility contract.
struct IndicatorNodes<'q, 'w, 's> {
    nodes: &'q mut Query<'w, 's, (&'static SegmentIndicator, &'static mut Visibility)>,
}

impl SegmentVisibility for IndicatorNodes<'_, '_, '_> {
    fn on_segment_changed(&mut self, active: Option<usize>) {
        for (indicator, mut visibility) in self.nodes.iter_mut() {
            *visibility = if Some(indicator.segment) == active {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Spawn a hidden top and bottom banner for every segment.
pub fn spawn_segment_indicators(mut commands: Commands, settings: Res<ViewerSettings>) {
    let total_segments = settings.rotation.total_segments;

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            for segment in 0..total_segments {
                for slot in [IndicatorSlot::Top, IndicatorSlot::Bottom] {
                    parent.spawn(indicator_bundle(segment, total_segments, slot));
                }
            }
        });
}

fn indicator_bundle(segment: usize, total_segments: usize, slot: IndicatorSlot) -> impl Bundle {
    let mut node = Node {
        position_type: PositionType::Absolute,
        left: Val::Px(0.0),
        right: Val::Px(0.0),
        height: Val::Px(INDICATOR_BANNER_HEIGHT),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    };
    match slot {
        IndicatorSlot::Top => node.top = Val::Px(0.0),
        IndicatorSlot::Bottom => node.bottom = Val::Px(0.0),
    }

    (
        node,
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
        Text::new(format!("{}/{}", segment + 1, total_segments)),
        TextFont {
            font_size: INDICATOR_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Visibility::Hidden,
        SegmentIndicator { segment, slot },
    )
}

/// Re-apply every segment change to the in-engine banners.
pub fn apply_segment_indicators(
    mut segment_events: EventReader<SegmentChanged>,
    mut nodes: Query<(&'static SegmentIndicator, &'static mut Visibility)>,
) {
    let mut indicators = IndicatorNodes { nodes: &mut nodes };
    for event in segment_events.read() {
        indicators.on_segment_changed(event.active);
    }
}
