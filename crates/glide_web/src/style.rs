//! Inline style and markup strings written to the DOM.

/// Attribute marking a generated dot list.
pub const DOT_LIST_ATTR: &str = "data-control";

/// Value of [`DOT_LIST_ATTR`] on a generated dot list.
pub const DOT_LIST_VALUE: &str = "slide";

/// Track `touch-action`: the browser keeps vertical scrolling and leaves
/// horizontal drags to the carousel.
pub const TRACK_TOUCH_ACTION: &str = "pan-y";

/// `transform` value placing the track at `offset` pixels.
pub fn translate3d(offset: f64) -> String {
    // -0 would render as "-0px".
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translate3d({offset}px, 0, 0)")
}

/// `transition` value for the track.
pub fn transition_value(enabled: bool, transition: &str) -> &str {
    if enabled {
        transition
    } else {
        ""
    }
}

/// Anchor `href` for the dot at `index` (`#slide1` for the first panel).
pub fn dot_href(index: usize) -> String {
    format!("#slide{}", index + 1)
}

/// Visible label of the dot at `index`.
pub fn dot_label(index: usize) -> String {
    (index + 1).to_string()
}
