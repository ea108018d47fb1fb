use thiserror::Error;

/// Reasons a widget declines to mount. None of these reach the page; the
/// widget simply stays inert.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("`{0}` is not an HTML element")]
    NotHtmlElement(&'static str),
    #[error("marquee track has no tiles")]
    EmptyTrack,
}
