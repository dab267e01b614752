use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;            // Default window width
pub const RENDER_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const COVERFLOW_DELAY: Duration = Duration::from_millis(5000); // Time each slide stays focused in the coverflow
pub const BANNER_DELAY: Duration = Duration::from_millis(6000);    // Time each slide stays focused in the banner

pub const BREAKPOINT: f32 = 768.0;             // Below this viewport width only one neighbour is shown per side
pub const SPACING_NARROW: f32 = 160.0;         // Horizontal distance between neighbours on narrow viewports (px)
pub const SPACING_WIDE: f32 = 280.0;           // Horizontal distance between neighbours on wide viewports (px)

pub const SCALE_STEP: f32 = 0.25;              // Scale lost per step away from the focused slide
pub const ROTATION_STEP: f32 = -25.0;          // Degrees of rotation per signed step
pub const OPACITY_STEP: f32 = 0.3;             // Opacity lost per step away from the focused slide
pub const Z_ORDER_TOP: i32 = 10;               // Z-order of the focused slide
