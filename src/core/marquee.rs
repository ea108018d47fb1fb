use crate::constants::{
    DRAG_CLICK_SLOP_PX, INERTIA_FRICTION, INERTIA_STOP_VELOCITY, INERTIA_TICK_MS, MIN_SAMPLE_DT_MS,
    VELOCITY_SMOOTHING,
};

/// Wrap a track translation into `(-loop_distance, 0]`.
///
/// The track holds its content twice, so any two offsets one loop apart
/// render identically. A non-positive loop distance pins the track at 0.
#[inline]
pub fn wrap_offset(offset: f64, loop_distance: f64) -> f64 {
    if !(loop_distance > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    let r = offset.rem_euclid(loop_distance);
    if r == 0.0 || r >= loop_distance {
        0.0
    } else {
        r - loop_distance
    }
}

/// Width of one copy of the duplicated content, including the gap that
/// separates the last tile of one copy from the first of the next.
#[inline]
pub fn loop_distance(content_width: f64, gap: f64) -> f64 {
    ((content_width + gap.max(0.0)) / 2.0).max(0.0)
}

#[inline]
pub fn translate_x_css(offset: f64) -> String {
    format!("translateX({}px)", offset)
}

/// X translation of a computed `transform` value (`none`, `matrix(..)` or
/// `matrix3d(..)`).
pub fn translate_x_from_matrix(css: &str) -> Option<f64> {
    let css = css.trim();
    if css.is_empty() || css == "none" {
        return Some(0.0);
    }
    let (name, rest) = css.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let idx = match name.trim() {
        "matrix" => 4,
        "matrix3d" => 12,
        _ => return None,
    };
    args.split(',').nth(idx)?.trim().parse::<f64>().ok()
}

/// Pointer sampling between pointer-down and release.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    start_x: f64,
    start_offset: f64,
    last_x: f64,
    last_t: f64,
    velocity: f64,
    travelled: f64,
}

impl DragSession {
    pub fn begin(x: f64, t_ms: f64, offset: f64) -> Self {
        Self {
            start_x: x,
            start_offset: offset,
            last_x: x,
            last_t: t_ms,
            velocity: 0.0,
            travelled: 0.0,
        }
    }

    /// Record a pointer sample and return the unwrapped track offset.
    pub fn sample(&mut self, x: f64, t_ms: f64) -> f64 {
        let dt = (t_ms - self.last_t).max(MIN_SAMPLE_DT_MS);
        let instant = (x - self.last_x) / dt;
        self.velocity = self.velocity * (1.0 - VELOCITY_SMOOTHING) + instant * VELOCITY_SMOOTHING;
        self.last_x = x;
        self.last_t = t_ms;
        self.travelled = self.travelled.max((x - self.start_x).abs());
        self.start_offset + (x - self.start_x)
    }

    /// Smoothed velocity in px/ms.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// True once the pointer strayed far enough that the release should
    /// not count as a click.
    #[inline]
    pub fn moved_past_slop(&self) -> bool {
        self.travelled > DRAG_CLICK_SLOP_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glide {
    Continue,
    Stop,
}

/// Post-release glide with geometric velocity decay.
#[derive(Clone, Copy, Debug)]
pub struct Inertia {
    velocity: f64,
}

impl Inertia {
    /// `None` when the release velocity is already negligible.
    pub fn launch(velocity: f64) -> Option<Inertia> {
        (velocity.abs() >= INERTIA_STOP_VELOCITY).then_some(Inertia { velocity })
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advance one fixed tick, wrapping `offset` in place.
    pub fn tick(&mut self, offset: &mut f64, loop_distance: f64) -> Glide {
        *offset = wrap_offset(
            *offset + self.velocity * INERTIA_TICK_MS as f64,
            loop_distance,
        );
        self.velocity *= INERTIA_FRICTION;
        if self.velocity.abs() < INERTIA_STOP_VELOCITY {
            Glide::Stop
        } else {
            Glide::Continue
        }
    }
}

/// Clock for the frame-driven auto-scroll.
#[derive(Clone, Copy, Debug)]
pub struct AutoScroll {
    px_per_ms: f64,
    last_ts: Option<f64>,
}

impl AutoScroll {
    pub fn new(loop_distance: f64, duration_secs: f64) -> Self {
        let px_per_ms = if duration_secs > 0.0 {
            loop_distance / (duration_secs * 1000.0)
        } else {
            0.0
        };
        Self {
            px_per_ms,
            last_ts: None,
        }
    }

    #[inline]
    pub fn px_per_ms(&self) -> f64 {
        self.px_per_ms
    }

    /// Forget the previous frame so the next one starts with dt = 0.
    #[inline]
    pub fn restart(&mut self) {
        self.last_ts = None;
    }

    /// Move leftward by the time elapsed since the previous frame.
    pub fn advance(&mut self, offset: f64, ts_ms: f64, loop_distance: f64) -> f64 {
        let dt = self.last_ts.map_or(0.0, |last| (ts_ms - last).max(0.0));
        self.last_ts = Some(ts_ms);
        wrap_offset(offset - self.px_per_ms * dt, loop_distance)
    }
}

/// Offset to write back after the loop distance changed. Only a paused
/// track needs it; a running driver applies its own next position.
#[inline]
pub fn resized_offset(offset: f64, loop_distance: f64, paused: bool) -> (f64, Option<f64>) {
    let offset = wrap_offset(offset, loop_distance);
    (offset, paused.then_some(offset))
}

/// Negative `animation-delay` (seconds) that resumes a one-loop CSS
/// animation at `offset`.
pub fn resume_delay_secs(offset: f64, loop_distance: f64, duration_secs: f64) -> f64 {
    if !(loop_distance > 0.0) {
        return 0.0;
    }
    let progress = -wrap_offset(offset, loop_distance) / loop_distance;
    if progress == 0.0 {
        0.0
    } else {
        -(progress * duration_secs)
    }
}

/// Index of the center closest to `target`; ties go to the lower index.
#[inline]
pub fn nearest_index(centers: &[f64], target: f64) -> Option<usize> {
    let mut best = None::<(usize, f64)>;
    for (i, c) in centers.iter().enumerate() {
        let dx = (target - *c).abs();
        match best {
            Some((_, bd)) if dx >= bd => {}
            _ => best = Some((i, dx)),
        }
    }
    best.map(|(i, _)| i)
}

/// Start and end translations for a centering animation.
///
/// `to` is wrapped; `from` is the current position shifted by whole loops so
/// the eased move from `from` to `to` never crosses the wrap seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterStep {
    pub from: f64,
    pub to: f64,
}

pub fn center_step(
    offset: f64,
    tile_center: f64,
    container_center: f64,
    loop_distance: f64,
) -> CenterStep {
    let delta = container_center - tile_center;
    let to = wrap_offset(offset + delta, loop_distance);
    CenterStep {
        from: to - delta,
        to,
    }
}

/// Outcome of a pointer release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No drag was in progress.
    Ignored,
    /// The release velocity launched a glide; it resumes on its own.
    Glide,
    /// The drag ended without a glide.
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    Pause,
    Resume,
}

/// Pause bookkeeping for one marquee: whether the idle driver runs, what
/// holds it paused, and whether the next click is swallowed.
#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    hover_pause: bool,
    paused: bool,
    hovered: bool,
    drag: Option<DragSession>,
    inertia: Option<Inertia>,
    suppress_click: bool,
}

impl Interaction {
    pub fn new(hover_pause: bool, paused: bool) -> Self {
        Self {
            hover_pause,
            paused,
            hovered: false,
            drag: None,
            inertia: None,
            suppress_click: false,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop the idle driver and drop any glide. Returns whether the idle
    /// driver was running.
    pub fn halt(&mut self) -> bool {
        let was_running = !self.paused;
        self.paused = true;
        self.inertia = None;
        was_running
    }

    /// Paused, with no drag or glide that will resume by itself.
    #[inline]
    pub fn can_resume(&self) -> bool {
        self.paused && self.drag.is_none() && self.inertia.is_none()
    }

    /// Whether a timer or a finished glide may resume the idle driver. A
    /// pointer resting on a hover-pausing marquee keeps it paused.
    #[inline]
    pub fn may_auto_resume(&self) -> bool {
        self.can_resume() && !(self.hovered && self.hover_pause)
    }

    pub fn mark_running(&mut self) {
        self.paused = false;
    }

    /// Any pointer-down inside the container. A suppression left over from
    /// a release whose click never reached the container is dropped here.
    pub fn press(&mut self) {
        self.suppress_click = false;
    }

    pub fn begin_drag(&mut self, session: DragSession) {
        self.halt();
        self.drag = Some(session);
    }

    #[inline]
    pub fn drag_mut(&mut self) -> Option<&mut DragSession> {
        self.drag.as_mut()
    }

    pub fn release(&mut self) -> Release {
        let Some(drag) = self.drag.take() else {
            return Release::Ignored;
        };
        self.suppress_click = drag.moved_past_slop();
        self.inertia = Inertia::launch(drag.velocity());
        if self.inertia.is_some() {
            Release::Glide
        } else {
            Release::Settle
        }
    }

    /// Velocity of the glide in progress, in px/ms.
    #[inline]
    pub fn glide_velocity(&self) -> Option<f64> {
        self.inertia.map(|i| i.velocity())
    }

    /// Advance the glide by one tick. `None` when nothing is gliding.
    pub fn glide(&mut self, offset: &mut f64, loop_distance: f64) -> Option<Glide> {
        let glide = self.inertia.as_mut()?.tick(offset, loop_distance);
        if glide == Glide::Stop {
            self.inertia = None;
        }
        Some(glide)
    }

    /// Record the pointer entering or leaving. Leaving resumes only when no
    /// drag or glide still owns the track.
    pub fn hover(&mut self, inside: bool) -> Option<HoverAction> {
        self.hovered = inside;
        if !self.hover_pause {
            None
        } else if inside {
            Some(HoverAction::Pause)
        } else if self.can_resume() {
            Some(HoverAction::Resume)
        } else {
            None
        }
    }

    /// Consume the pending suppression; true means swallow this click.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}
