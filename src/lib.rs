#![cfg(target_arch = "wasm32")]
//! Lightbox viewer and marquee gallery widgets for a static site.
//!
//! On start the module waits for the document, then mounts every widget it
//! finds markup for. Widgets whose markup is missing stay inert.
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod core;
mod dom;
mod error;
mod lightbox;
mod marquee;
mod nav;
mod schedule;

pub use crate::core::{Direction, MediaGroup, MediaItem, MediaKind};
pub use lightbox::{Lightbox, MediaViewer};
pub use marquee::{Marquee, MarqueeControl};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-widgets starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    nav::mount(&document);

    match lightbox::mount(&document) {
        Ok(_) => log::info!("[lightbox] ready"),
        Err(e) => log::debug!("[lightbox] disabled: {}", e),
    }

    let containers = document
        .query_selector_all(marquee::CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in dom::elements(&containers) {
        if let Err(e) = marquee::mount(el) {
            log::debug!("[marquee] skipped: {}", e);
        }
    }
    Ok(())
}
