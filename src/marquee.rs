use crate::config::{Driver, MarqueeAttrs, MarqueeConfig};
use crate::constants::{CENTER_TRANSITION_MS, DRAG_TOUCH_ACTION, INERTIA_TICK_MS, RESUME_DELAY_MS};
use crate::core::{
    center_step, loop_distance, nearest_index, resized_offset, resume_delay_secs, translate_x_css,
    translate_x_from_matrix, wrap_offset, AutoScroll, Direction, DragSession, Glide, HoverAction,
    Interaction, Release, TaskSlot,
};
use crate::dom;
use crate::error::MountError;
use crate::schedule::{self, Task};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CONTAINER_SELECTOR: &str = "[data-marquee], .gallery.marquee";
const TRACK_SELECTOR: &str = ".marquee-track";
const ARROW_SELECTOR: &str = ".marquee-prev, .marquee-next";
const DRAGGING_CLASS: &str = "is-dragging";

/// What a marquee can be asked to do.
pub trait MarqueeControl {
    fn pause(&self);
    fn resume(&self);
    fn step(&self, dir: Direction);
}

struct MarqueeState {
    config: MarqueeConfig,
    offset: f64,
    loop_distance: f64,
    interaction: Interaction,
    clock: AutoScroll,
    // Frame loop or inertia interval, never both
    motion: TaskSlot<Task>,
    resume_timer: TaskSlot<Task>,
}

struct Callbacks {
    frame: Closure<dyn FnMut(f64)>,
    inertia: Closure<dyn FnMut()>,
    resume: Closure<dyn FnMut()>,
}

impl Callbacks {
    fn new(weak: &Weak<Marquee>) -> Self {
        let w = weak.clone();
        let frame = Closure::wrap(Box::new(move |ts: f64| {
            if let Some(m) = w.upgrade() {
                m.on_frame(ts);
            }
        }) as Box<dyn FnMut(f64)>);
        let w = weak.clone();
        let inertia = Closure::wrap(Box::new(move || {
            if let Some(m) = w.upgrade() {
                m.on_inertia_tick();
            }
        }) as Box<dyn FnMut()>);
        let w = weak.clone();
        let resume = Closure::wrap(Box::new(move || {
            if let Some(m) = w.upgrade() {
                m.on_resume_timer();
            }
        }) as Box<dyn FnMut()>);
        Self {
            frame,
            inertia,
            resume,
        }
    }
}

/// Auto-scrolling, draggable strip of duplicated tiles.
pub struct Marquee {
    container: web::HtmlElement,
    track: web::HtmlElement,
    state: RefCell<MarqueeState>,
    callbacks: Callbacks,
    epoch: Instant,
}

impl Marquee {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    #[inline]
    fn apply(&self, offset: f64) {
        dom::set_style(&self.track, "transform", &translate_x_css(offset));
    }

    fn measure(&self, gap_px: f64) -> f64 {
        loop_distance(self.track.scroll_width() as f64, gap_px)
    }

    /// Stop whatever moves the track and pin it at its current position.
    fn freeze(&self) {
        let offset = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            st.motion.cancel();
            let was_running = st.interaction.halt();
            if was_running && st.config.driver == Driver::Css {
                let x = dom::computed_property(&self.track, "transform")
                    .as_deref()
                    .and_then(translate_x_from_matrix)
                    .unwrap_or(st.offset);
                st.offset = wrap_offset(x, st.loop_distance);
            }
            st.offset
        };
        dom::set_style(&self.track, "animation", "none");
        dom::set_style(&self.track, "transition", "none");
        self.apply(offset);
    }

    /// Hand the track back to the idle driver. Drags and glides finish on
    /// their own and resume afterwards.
    fn resume_now(&self) {
        let (driver, offset, loop_d, secs) = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            st.resume_timer.cancel();
            if !st.interaction.can_resume() {
                return;
            }
            st.loop_distance = self.measure(st.config.gap_px);
            st.offset = wrap_offset(st.offset, st.loop_distance);
            st.clock = AutoScroll::new(st.loop_distance, st.config.loop_secs);
            st.interaction.mark_running();
            (st.config.driver, st.offset, st.loop_distance, st.config.loop_secs)
        };
        match driver {
            Driver::Css => self.hand_back_css(offset, loop_d, secs),
            Driver::Frame => {
                dom::set_style(&self.track, "transition", "none");
                self.apply(offset);
                log::debug!(
                    "[marquee] frame resume at {:.1}px rate={:.4}px/ms",
                    offset,
                    self.state.borrow().clock.px_per_ms()
                );
                let task = schedule::request_frame(&self.callbacks.frame);
                self.state.borrow_mut().motion.start(task);
            }
        }
    }

    fn resume_if_idle(&self) {
        let idle = self.state.borrow().interaction.may_auto_resume();
        if idle {
            self.resume_now();
        }
    }

    fn hand_back_css(&self, offset: f64, loop_d: f64, secs: f64) {
        let delay = resume_delay_secs(offset, loop_d, secs);
        dom::clear_style(&self.track, "transition");
        dom::clear_style(&self.track, "transform");
        // Drop the shorthand first: removing it also clears the delay longhand.
        dom::clear_style(&self.track, "animation");
        dom::set_style(&self.track, "animation-delay", &format!("{}s", delay));
        log::debug!("[marquee] css resume at {:.1}px delay={:.3}s", offset, delay);
    }

    fn on_frame(&self, ts: f64) {
        let offset = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            if st.interaction.is_paused() {
                return;
            }
            st.offset = st.clock.advance(st.offset, ts, st.loop_distance);
            st.offset
        };
        self.apply(offset);
        let next = schedule::request_frame(&self.callbacks.frame);
        self.state.borrow_mut().motion.renew(next);
    }

    fn on_inertia_tick(&self) {
        let (offset, glide) = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            let Some(glide) = st.interaction.glide(&mut st.offset, st.loop_distance) else {
                return;
            };
            (st.offset, glide)
        };
        self.apply(offset);
        if glide == Glide::Stop {
            self.state.borrow_mut().motion.cancel();
            log::debug!("[marquee] inertia stop at {:.1}px", offset);
            self.resume_if_idle();
        }
    }

    fn on_resume_timer(&self) {
        self.state.borrow_mut().resume_timer.finish();
        self.resume_if_idle();
    }

    fn begin_drag(&self, ev: &web::PointerEvent) {
        let drag_enabled = {
            let mut st = self.state.borrow_mut();
            st.interaction.press();
            st.config.drag
        };
        if ev.button() != 0 || !drag_enabled {
            return;
        }
        let on_arrow = dom::event_element(ev)
            .and_then(|t| t.closest(ARROW_SELECTOR).ok().flatten())
            .is_some();
        if on_arrow {
            return;
        }
        // Keeps mouse drags from selecting captions.
        ev.prevent_default();
        self.freeze();
        let now = self.now_ms();
        {
            let mut st = self.state.borrow_mut();
            st.resume_timer.cancel();
            let session = DragSession::begin(ev.client_x() as f64, now, st.offset);
            st.interaction.begin_drag(session);
        }
        _ = self.container.class_list().add_1(DRAGGING_CLASS);
    }

    fn move_drag(&self, ev: &web::PointerEvent) {
        let now = self.now_ms();
        let offset = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            let Some(drag) = st.interaction.drag_mut() else {
                return;
            };
            let raw = drag.sample(ev.client_x() as f64, now);
            st.offset = wrap_offset(raw, st.loop_distance);
            st.offset
        };
        self.apply(offset);
    }

    fn end_drag(&self) {
        let (release, velocity) = {
            let mut st = self.state.borrow_mut();
            let release = st.interaction.release();
            if release == Release::Glide {
                st.motion
                    .start(schedule::every(&self.callbacks.inertia, INERTIA_TICK_MS));
            }
            (release, st.interaction.glide_velocity())
        };
        match release {
            Release::Ignored => return,
            Release::Glide => {
                log::debug!("[marquee] glide v={:.3}px/ms", velocity.unwrap_or_default());
            }
            Release::Settle => {}
        }
        _ = self.container.class_list().remove_1(DRAGGING_CLASS);
        if release == Release::Settle {
            self.resume_if_idle();
        }
    }

    fn on_click_capture(&self, ev: &web::MouseEvent) {
        let swallow = self.state.borrow_mut().interaction.take_click();
        if swallow {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }

    fn on_hover(&self, inside: bool) {
        let action = self.state.borrow_mut().interaction.hover(inside);
        match action {
            Some(HoverAction::Pause) => self.pause(),
            Some(HoverAction::Resume) => self.resume_now(),
            None => {}
        }
    }

    fn remeasure(&self) {
        let reapply = {
            let mut guard = self.state.borrow_mut();
            let st = &mut *guard;
            st.loop_distance = self.measure(st.config.gap_px);
            st.clock = AutoScroll::new(st.loop_distance, st.config.loop_secs);
            let (offset, reapply) =
                resized_offset(st.offset, st.loop_distance, st.interaction.is_paused());
            st.offset = offset;
            reapply
        };
        if let Some(offset) = reapply {
            self.apply(offset);
        }
    }
}

impl MarqueeControl for Marquee {
    fn pause(&self) {
        self.freeze();
        let mut st = self.state.borrow_mut();
        if st.resume_timer.is_active() {
            log::debug!("[marquee] pending resume dropped");
        }
        st.resume_timer.cancel();
    }

    fn resume(&self) {
        self.resume_now();
    }

    /// Center the tile adjacent to the one nearest the container center,
    /// then resume after a delay. Repeated steps restart the delay.
    fn step(&self, dir: Direction) {
        self.pause();
        let centers: Vec<f64> = dom::children(&self.track).iter().map(dom::center_x).collect();
        let focus = dom::center_x(&self.container);
        if let Some(current) = nearest_index(&centers, focus) {
            let target = dir.step(current, centers.len());
            let step = {
                let mut st = self.state.borrow_mut();
                let step = center_step(st.offset, centers[target], focus, st.loop_distance);
                st.offset = step.to;
                step
            };
            self.apply(step.from);
            dom::flush_layout(&self.track);
            dom::set_style(
                &self.track,
                "transition",
                &format!("transform {}ms ease", CENTER_TRANSITION_MS),
            );
            self.apply(step.to);
            log::debug!("[marquee] step {:?} {} -> {}", dir, current, target);
        }
        let task = schedule::after(&self.callbacks.resume, RESUME_DELAY_MS);
        self.state.borrow_mut().resume_timer.start(task);
    }
}

fn read_attrs(container: &web::HtmlElement, track: &web::HtmlElement) -> MarqueeAttrs {
    MarqueeAttrs {
        driver: container.get_attribute("data-marquee"),
        gallery: container.matches(".gallery.marquee").unwrap_or(false),
        hover: container.get_attribute("data-marquee-hover"),
        drag: container.get_attribute("data-marquee-drag"),
        speed: dom::computed_property(container, "--marquee-speed"),
        legacy_speed: dom::computed_property(container, "--speed"),
        gap: dom::computed_property(container, "--marquee-gap"),
        column_gap: dom::computed_property(track, "column-gap"),
    }
}

pub fn mount(container: web::Element) -> Result<Rc<Marquee>, MountError> {
    let container = container
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(CONTAINER_SELECTOR))?;
    let track = dom::require_html(&container, TRACK_SELECTOR)?;
    if track.child_element_count() == 0 {
        return Err(MountError::EmptyTrack);
    }

    let config = MarqueeConfig::from_attrs(&read_attrs(&container, &track));
    let loop_d = loop_distance(track.scroll_width() as f64, config.gap_px);
    log::info!(
        "[marquee] mounted driver={} loop={:.0}px period={:.1}s",
        config.driver.name(),
        loop_d,
        config.loop_secs
    );

    let marquee = Rc::new_cyclic(|weak| Marquee {
        container,
        track,
        state: RefCell::new(MarqueeState {
            config,
            offset: 0.0,
            loop_distance: loop_d,
            // The css driver is already running from the stylesheet.
            interaction: Interaction::new(config.hover_pause, config.driver == Driver::Frame),
            clock: AutoScroll::new(loop_d, config.loop_secs),
            motion: TaskSlot::new(),
            resume_timer: TaskSlot::new(),
        }),
        callbacks: Callbacks::new(weak),
        epoch: Instant::now(),
    });
    dom::set_style(&marquee.container, "touch-action", DRAG_TOUCH_ACTION);
    wire(&marquee);

    if config.driver == Driver::Frame {
        dom::set_style(&marquee.track, "animation", "none");
        marquee.resume_now();
    }
    Ok(marquee)
}

fn wire(m: &Rc<Marquee>) {
    let container: &web::Element = &m.container;

    let md = m.clone();
    dom::listen(container, "pointerdown", move |ev: web::PointerEvent| {
        md.begin_drag(&ev);
    });
    dom::listen(container, "dragstart", |ev: web::Event| ev.prevent_default());
    let mc = m.clone();
    dom::listen_capture(container, "click", move |ev: web::MouseEvent| {
        mc.on_click_capture(&ev);
    });

    for (event, inside) in [("pointerenter", true), ("pointerleave", false)] {
        let mh = m.clone();
        dom::listen(container, event, move |_: web::PointerEvent| {
            mh.on_hover(inside);
        });
    }

    for (selector, dir) in [
        (".marquee-prev", Direction::Prev),
        (".marquee-next", Direction::Next),
    ] {
        if let Some(btn) = dom::query(container, selector) {
            let ms = m.clone();
            dom::listen(&btn, "click", move |ev: web::MouseEvent| {
                ev.prevent_default();
                ms.step(dir);
            });
        }
    }

    let Some(window) = web::window() else {
        return;
    };
    let mm = m.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        mm.move_drag(&ev);
    });
    for event in ["pointerup", "pointercancel"] {
        let mu = m.clone();
        dom::listen(&window, event, move |_: web::PointerEvent| {
            mu.end_drag();
        });
    }
    let mr = m.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        mr.remeasure();
    });
}
