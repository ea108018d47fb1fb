use crate::constants::ZOOM_TRANSITION;
use crate::core::{first_caption, Direction, MediaGroup, MediaItem, Viewport};
use crate::dom;
use crate::error::MountError;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const ROOT_ID: &str = "lightbox";
const GROUP_ATTR: &str = "data-lightbox";
const GROUP_SELECTOR: &str = "a[data-lightbox]";
const CAPTION_ATTR: &str = "data-caption";
const OPEN_CLASS: &str = "is-open";
const DRAGGING_CLASS: &str = "is-dragging";

/// What a media viewer can be asked to do.
pub trait MediaViewer {
    fn open(&self, group: MediaGroup);
    fn close(&self);
    fn navigate(&self, dir: Direction);
}

struct Elements {
    root: web::HtmlElement,
    stage: Option<web::HtmlElement>,
    image: web::HtmlImageElement,
    video: Option<web::HtmlVideoElement>,
    caption: Option<web::Element>,
}

#[derive(Default)]
struct ViewerState {
    group: Option<MediaGroup>,
    viewport: Viewport,
}

/// Modal image/video viewer bound to one `#lightbox` overlay.
pub struct Lightbox {
    els: Elements,
    state: RefCell<ViewerState>,
}

impl Lightbox {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.borrow().group.is_some()
    }

    fn render(&self) {
        let item = match self.state.borrow().group.as_ref() {
            Some(g) => g.current().clone(),
            None => return,
        };

        self.state.borrow_mut().viewport.show(item.kind);
        self.refresh_view();
        if item.is_video() {
            self.show_video(&item);
        } else {
            self.show_image(&item);
        }

        if let Some(cap) = &self.els.caption {
            cap.set_text_content(Some(&item.caption));
        }
    }

    fn show_video(&self, item: &MediaItem) {
        let Some(video) = &self.els.video else {
            log::debug!("[lightbox] no video element for {}", item.src);
            return;
        };
        dom::set_style(&self.els.image, "display", "none");
        dom::set_style(video, "display", "block");
        video.set_src(&item.src);
        _ = video.play();
    }

    fn show_image(&self, item: &MediaItem) {
        self.stop_video();
        dom::set_style(&self.els.image, "display", "block");
        self.els.image.set_src(&item.src);
        self.els.image.set_alt(&item.caption);
    }

    fn stop_video(&self) {
        if let Some(video) = &self.els.video {
            _ = video.pause();
            video.set_src("");
            dom::set_style(video, "display", "none");
        }
    }

    /// Write the viewport back to the image after it was reset.
    fn refresh_view(&self) {
        if let Some(stage) = &self.els.stage {
            _ = stage.class_list().remove_1(DRAGGING_CLASS);
        }
        self.apply_transform(true);
    }

    fn apply_transform(&self, smooth: bool) {
        let css = self.state.borrow().viewport.view.css();
        let transition = if smooth { ZOOM_TRANSITION } else { "none" };
        dom::set_style(&self.els.image, "transition", transition);
        dom::set_style(&self.els.image, "transform", &css);
    }

    fn on_wheel(&self, ev: &web::WheelEvent) {
        {
            let mut st = self.state.borrow_mut();
            if st.group.is_none() || !st.viewport.zoomable() {
                return;
            }
            st.viewport.wheel(ev.delta_y());
        }
        ev.prevent_default();
        self.apply_transform(true);
    }

    fn begin_pan(&self, ev: &web::PointerEvent) {
        if ev.button() != 0 || !self.is_open() {
            return;
        }
        if !self.state.borrow_mut().viewport.begin_pan(pointer_pos(ev)) {
            return;
        }
        ev.prevent_default();
        if let Some(stage) = &self.els.stage {
            _ = stage.class_list().add_1(DRAGGING_CLASS);
        }
        self.apply_transform(false);
    }

    fn move_pan(&self, ev: &web::PointerEvent) {
        if self.state.borrow_mut().viewport.move_pan(pointer_pos(ev)) {
            self.apply_transform(false);
        }
    }

    fn end_pan(&self) {
        if !self.state.borrow_mut().viewport.end_pan() {
            return;
        }
        if let Some(stage) = &self.els.stage {
            _ = stage.class_list().remove_1(DRAGGING_CLASS);
        }
        self.apply_transform(true);
    }

    fn on_keydown(&self, ev: &web::KeyboardEvent) {
        if !self.is_open() {
            return;
        }
        let key = ev.key();
        if key == "Escape" {
            self.close();
        } else if let Some(dir) = Direction::from_key(&key) {
            self.navigate(dir);
        }
    }
}

impl MediaViewer for Lightbox {
    fn open(&self, group: MediaGroup) {
        log::info!("[lightbox] open items={} index={}", group.len(), group.index());
        self.state.borrow_mut().group = Some(group);
        _ = self.els.root.class_list().add_1(OPEN_CLASS);
        _ = self.els.root.set_attribute("aria-hidden", "false");
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            dom::set_style(&body, "overflow", "hidden");
        }
        self.render();
    }

    fn close(&self) {
        {
            let mut st = self.state.borrow_mut();
            st.group = None;
            st.viewport.clear();
        }
        _ = self.els.root.class_list().remove_1(OPEN_CLASS);
        _ = self.els.root.set_attribute("aria-hidden", "true");
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            dom::clear_style(&body, "overflow");
        }
        self.stop_video();
        self.refresh_view();
        log::debug!("[lightbox] closed");
    }

    fn navigate(&self, dir: Direction) {
        {
            let mut st = self.state.borrow_mut();
            match st.group.as_mut() {
                Some(g) => {
                    g.navigate(dir);
                }
                None => return,
            }
        }
        self.render();
    }
}

#[inline]
fn pointer_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn media_item(anchor: &web::Element) -> MediaItem {
    let src = anchor.get_attribute("href").unwrap_or_default();
    let caption = first_caption([
        anchor.get_attribute(CAPTION_ATTR),
        dom::query(anchor, "img").and_then(|img| img.get_attribute("alt")),
        dom::query(anchor, "video").and_then(|v| v.get_attribute("aria-label")),
    ]);
    MediaItem::new(src, caption)
}

/// All anchors sharing the clicked anchor's group name, in document order,
/// positioned at the clicked one.
fn collect_group(document: &web::Document, anchor: &web::Element) -> Option<MediaGroup> {
    let name = anchor.get_attribute(GROUP_ATTR)?;
    let list = document.query_selector_all(GROUP_SELECTOR).ok()?;
    let anchors: Vec<web::Element> = dom::elements(&list)
        .into_iter()
        .filter(|a| a.get_attribute(GROUP_ATTR).as_deref() == Some(name.as_str()))
        .collect();
    let start = anchors.iter().position(|a| a == anchor).unwrap_or(0);
    MediaGroup::new(anchors.iter().map(media_item).collect(), start)
}

pub fn mount(document: &web::Document) -> Result<Rc<Lightbox>, MountError> {
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or(MountError::MissingElement("#lightbox"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement("#lightbox"))?;
    let image = dom::optional::<web::HtmlImageElement>(&root, ".lightbox-img")
        .ok_or(MountError::MissingElement(".lightbox-img"))?;
    let els = Elements {
        stage: dom::optional(&root, ".lightbox-stage"),
        image,
        video: dom::optional(&root, ".lightbox-video"),
        caption: dom::query(&root, ".lightbox-caption"),
        root,
    };
    let lb = Rc::new(Lightbox {
        els,
        state: RefCell::new(ViewerState::default()),
    });
    wire(document, &lb);
    Ok(lb)
}

fn wire(document: &web::Document, lb: &Rc<Lightbox>) {
    let root: &web::Element = &lb.els.root;

    // Thumbnail activation
    let lb_open = lb.clone();
    let doc = document.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let Some(anchor) =
            dom::event_element(&ev).and_then(|t| t.closest(GROUP_SELECTOR).ok().flatten())
        else {
            return;
        };
        ev.prevent_default();
        if let Some(group) = collect_group(&doc, &anchor) {
            lb_open.open(group);
        }
    });

    for (selector, action) in [
        (".lightbox-close", None),
        (".lightbox-prev", Some(Direction::Prev)),
        (".lightbox-next", Some(Direction::Next)),
    ] {
        if let Some(btn) = dom::query(root, selector) {
            let lb_btn = lb.clone();
            dom::on_click(&btn, move || match action {
                Some(dir) => lb_btn.navigate(dir),
                None => lb_btn.close(),
            });
        }
    }

    // Backdrop: only clicks landing on the overlay itself
    let lb_backdrop = lb.clone();
    dom::listen(root, "click", move |ev: web::MouseEvent| {
        let overlay: &web::EventTarget = lb_backdrop.els.root.as_ref();
        let on_backdrop = ev.target().as_ref() == Some(overlay);
        if on_backdrop && lb_backdrop.is_open() {
            lb_backdrop.close();
        }
    });

    let lb_keys = lb.clone();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        lb_keys.on_keydown(&ev);
    });

    let Some(stage) = lb.els.stage.clone() else {
        return;
    };
    let lb_wheel = lb.clone();
    dom::listen_active(&stage, "wheel", move |ev: web::WheelEvent| {
        lb_wheel.on_wheel(&ev);
    });
    let lb_down = lb.clone();
    dom::listen(&stage, "pointerdown", move |ev: web::PointerEvent| {
        lb_down.begin_pan(&ev);
    });

    let Some(window) = web::window() else {
        return;
    };
    let lb_move = lb.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        lb_move.move_pan(&ev);
    });
    for event in ["pointerup", "pointercancel"] {
        let lb_up = lb.clone();
        dom::listen(&window, event, move |_: web::PointerEvent| {
            lb_up.end_pan();
        });
    }
}
