/// Background colour as 8-bit sRGB.
pub const CLEAR_COLOUR_RGB: [u8; 3] = [107, 186, 255];

/// Camera sits on +Z looking at the origin.
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 500.0];

/// Rendered point diameter in pixels.
pub const POINT_SIZE: f32 = 3.1;

/// Canvas selector used on wasm32.
pub const CANVAS_SELECTOR: &str = "#bevy";

/// Height of each native indicator banner.
pub const INDICATOR_BANNER_HEIGHT: f32 = 56.0;

pub const INDICATOR_FONT_SIZE: f32 = 20.0;

/// Vertical field of view of the camera, radians.
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

/// Viewport height assumed when no window is available to size points against.
pub const REFERENCE_VIEWPORT_HEIGHT: f32 = 1080.0;
