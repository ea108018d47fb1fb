use crate::constants::{MAX_SCALE, MIN_SCALE, PAN_BOUND_PER_SCALE, SCALE_SNAP_EPSILON, ZOOM_STEP};
use crate::core::media::MediaKind;
use glam::DVec2;

/// Scale and translation applied to the lightbox image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: DVec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: MIN_SCALE,
        offset: DVec2::ZERO,
    };

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Symmetric per-axis limit on `offset`, growing linearly above 1x.
    #[inline]
    pub fn pan_bound(&self) -> f64 {
        PAN_BOUND_PER_SCALE * (self.scale - MIN_SCALE)
    }

    #[inline]
    pub fn can_pan(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn clamp_offset(&mut self) {
        let b = self.pan_bound();
        self.offset = self.offset.clamp(DVec2::splat(-b), DVec2::splat(b));
    }

    /// Apply one wheel notch. Negative `delta_y` (scroll up) zooms in.
    /// Returns true when the scale changed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let prev = self.scale;
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        let mut scale = (self.scale + step).clamp(MIN_SCALE, MAX_SCALE);
        if scale - MIN_SCALE < SCALE_SNAP_EPSILON {
            scale = MIN_SCALE;
        }
        self.scale = scale;

        if scale == MIN_SCALE {
            self.offset = DVec2::ZERO;
        } else if scale != prev {
            self.clamp_offset();
        }
        scale != prev
    }

    /// CSS `transform` value for the current state.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// An in-progress pan: remembers where the pointer grabbed the image.
#[derive(Clone, Copy, Debug)]
pub struct PanDrag {
    anchor: DVec2,
}

impl PanDrag {
    /// Starts a pan only when zoomed in.
    pub fn begin(pointer: DVec2, view: &ViewTransform) -> Option<PanDrag> {
        view.can_pan().then(|| PanDrag {
            anchor: pointer - view.offset,
        })
    }

    pub fn update(&self, pointer: DVec2, view: &mut ViewTransform) {
        view.offset = pointer - self.anchor;
        view.clamp_offset();
    }
}

/// Zoom and pan state for whatever the viewer is displaying. Only images
/// zoom; every change of media starts again from identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
    pub view: ViewTransform,
    pub pan: Option<PanDrag>,
    zoomable: bool,
}

impl Viewport {
    pub fn show(&mut self, kind: MediaKind) {
        self.view.reset();
        self.pan = None;
        self.zoomable = kind == MediaKind::Image;
    }

    /// Nothing displayed.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn zoomable(&self) -> bool {
        self.zoomable
    }

    /// Wheel zoom; ignored unless an image is displayed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.zoomable && self.view.wheel(delta_y)
    }

    /// Grab the image at `pointer`. Returns whether a pan started.
    pub fn begin_pan(&mut self, pointer: DVec2) -> bool {
        self.pan = if self.zoomable {
            PanDrag::begin(pointer, &self.view)
        } else {
            None
        };
        self.pan.is_some()
    }

    /// Follow the pointer. Returns false when no pan is in progress.
    pub fn move_pan(&mut self, pointer: DVec2) -> bool {
        match self.pan {
            Some(pan) => {
                pan.update(pointer, &mut self.view);
                true
            }
            None => false,
        }
    }

    pub fn end_pan(&mut self) -> bool {
        self.pan.take().is_some()
    }
}
