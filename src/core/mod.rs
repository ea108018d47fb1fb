//! Platform-independent widget logic.
//!
//! Nothing in here touches `web_sys`; the DOM controllers feed measurements
//! in and write the results back out. The host-side tests under `tests/`
//! include these files directly.
pub mod direction;
pub mod disclosure;
pub mod group;
pub mod marquee;
pub mod media;
pub mod task;
pub mod zoom;

pub use direction::*;
pub use group::*;
pub use marquee::*;
pub use media::*;
pub use task::*;
pub use zoom::*;
