/// Point cloud file served from the asset folder.
pub const POINT_CLOUD_PATH: &str = "point_clouds/forest-blk360_centered.ply";

/// Runtime settings file, optional.
pub const VIEWER_SETTINGS_PATH: &str = "viewer_settings.json";

/// Multiplier applied to every source coordinate.
pub const POINT_SCALE: f32 = 2500.0;

/// Translation applied after scaling (render space, Y-down).
pub const POSITION_OFFSET: [f32; 3] = [0.0, 500.0, 0.0];

/// Colour given to every point. The text format's own colour columns are ignored.
pub const POINT_COLOUR: [f32; 3] = [1.0, 1.0, 1.0];

/// Line that terminates the header block.
pub const END_HEADER_TOKEN: &str = "end_header";
