use crate::constants::DEFAULT_LOOP_SECS;

/// How the marquee scrolls while idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Driver {
    /// A stylesheet animation moves the track; the controller only takes
    /// over during interaction.
    Css,
    /// The controller moves the track from a per-frame callback.
    #[default]
    Frame,
}

impl Driver {
    pub fn from_attr(value: Option<&str>) -> Driver {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("css") => Driver::Css,
            _ => Driver::Frame,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Driver::Css => "css",
            Driver::Frame => "frame",
        }
    }
}

/// Raw strings read from a marquee container: its data attributes and the
/// computed custom properties.
#[derive(Clone, Debug, Default)]
pub struct MarqueeAttrs {
    pub driver: Option<String>,
    /// Container carries the `.gallery.marquee` class pair, whose stylesheet
    /// animates the track.
    pub gallery: bool,
    pub hover: Option<String>,
    pub drag: Option<String>,
    pub speed: Option<String>,
    /// `--speed`, read when `--marquee-speed` is absent.
    pub legacy_speed: Option<String>,
    pub gap: Option<String>,
    pub column_gap: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub driver: Driver,
    /// Seconds for the track to travel one loop distance.
    pub loop_secs: f64,
    pub gap_px: f64,
    pub hover_pause: bool,
    pub drag: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            loop_secs: DEFAULT_LOOP_SECS,
            gap_px: 0.0,
            hover_pause: true,
            drag: true,
        }
    }
}

impl MarqueeConfig {
    pub fn from_attrs(attrs: &MarqueeAttrs) -> Self {
        let defaults = Self::default();
        let gap_px = attrs
            .gap
            .as_deref()
            .and_then(parse_px)
            .or_else(|| attrs.column_gap.as_deref().and_then(parse_px))
            .unwrap_or(defaults.gap_px);
        let driver = match attrs.driver.as_deref() {
            None if attrs.gallery => Driver::Css,
            value => Driver::from_attr(value),
        };
        let loop_secs = [attrs.speed.as_deref(), attrs.legacy_speed.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|v| parse_css_time(v).filter(|s| *s > 0.0))
            .unwrap_or(defaults.loop_secs);
        Self {
            driver,
            loop_secs,
            gap_px,
            hover_pause: flag_enabled(attrs.hover.as_deref()),
            drag: flag_enabled(attrs.drag.as_deref()),
        }
    }
}

/// Parse a CSS `<time>` (`40s`, `800ms`, `1.5s`) into seconds.
pub fn parse_css_time(value: &str) -> Option<f64> {
    let v = value.trim();
    let (num, div) = if let Some(n) = v.strip_suffix("ms") {
        (n, 1000.0)
    } else if let Some(n) = v.strip_suffix('s') {
        (n, 1.0)
    } else {
        return None;
    };
    let secs = num.trim().parse::<f64>().ok()? / div;
    (secs.is_finite() && secs >= 0.0).then_some(secs)
}

/// Parse a pixel length (`16px`, `16`). Keywords such as `normal` yield
/// `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let v = value.trim();
    let num = v.strip_suffix("px").unwrap_or(v).trim();
    let px = num.parse::<f64>().ok()?;
    (px.is_finite() && px >= 0.0).then_some(px)
}

/// Opt-out flag: absent means enabled; `off`, `false`, `no` or `0` disable.
pub fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => !matches!(v.as_str(), "off" | "false" | "no" | "0"),
        None => true,
    }
}
