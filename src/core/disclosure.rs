/// Next expanded state for a disclosure button given its current
/// `aria-expanded` attribute. A missing or unrecognized value reads as
/// collapsed.
#[inline]
pub fn toggled_expanded(current: Option<&str>) -> bool {
    current != Some("true")
}

#[inline]
pub fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[inline]
pub fn menu_display(expanded: bool) -> &'static str {
    if expanded {
        "block"
    } else {
        "none"
    }
}
