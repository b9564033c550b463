/// Class toggled on container elements to show them.
pub const ACTIVE_CLASS: &str = "active";

/// Static intro text hidden once the viewer starts.
pub const INTRO_TEXT_ID: &str = "intro-text";

/// Element id of the top container for a 0-based segment.
/// Page ids are 1-based: segment 0 maps to `container-1-top`.
pub fn top_container_id(segment: usize) -> String {
    format!("container-{}-top", segment + 1)
}

/// Element id of the bottom container for a 0-based segment.
pub fn bottom_container_id(segment: usize) -> String {
    format!("container-{}-bottom", segment + 1)
}
