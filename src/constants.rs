/// Zoom, kinematics and timing constants shared by the widgets.
///
/// These express intended behavior (clamp limits, decay rates, delays) and
/// keep magic numbers out of the controllers.
// Lightbox zoom limits and wheel sensitivity
pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.12;
// Scales below MIN_SCALE + this snap to MIN_SCALE (float drift from repeated steps)
pub const SCALE_SNAP_EPSILON: f64 = 1e-9;

// Max pan distance (px) per unit of zoom above 1x
pub const PAN_BOUND_PER_SCALE: f64 = 600.0;

// Easing applied to the image transform when not dragging
pub const ZOOM_TRANSITION: &str = "transform 0.12s ease";

// Only this suffix is treated as video (case-insensitive)
pub const VIDEO_SUFFIX: &str = ".mp4";

// Drag velocity smoothing: v = (1-α)*v + α*instant
pub const VELOCITY_SMOOTHING: f64 = 0.18;
// Lower bound on the sample interval (ms) to avoid division spikes
pub const MIN_SAMPLE_DT_MS: f64 = 1.0;

// Inertia glide
pub const INERTIA_TICK_MS: i32 = 16;
pub const INERTIA_FRICTION: f64 = 0.95; // per tick
pub const INERTIA_STOP_VELOCITY: f64 = 0.02; // px/ms

// Marquee timing
pub const DEFAULT_LOOP_SECS: f64 = 40.0;
pub const RESUME_DELAY_MS: i32 = 1500;
pub const CENTER_TRANSITION_MS: u32 = 450;

// Pointer travel (px) after which a marquee drag swallows the trailing click
pub const DRAG_CLICK_SLOP_PX: f64 = 6.0;
// Marquee container: horizontal touch gestures drag the track, vertical ones scroll the page
pub const DRAG_TOUCH_ACTION: &str = "pan-y";
