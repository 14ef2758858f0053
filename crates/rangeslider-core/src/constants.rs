#![forbid(unsafe_code)]

//! Class names, attribute names, selectors, and notification names shared by
//! the foundation and the markup it drives.

/// Classes toggled on (or read from) the slider root.
pub mod css_classes {
    /// Present while a drag session is active.
    pub const ACTIVE: &str = "slider--active";
    /// Present while the slider is disabled.
    pub const DISABLED: &str = "slider--disabled";
    /// Declares a discrete slider in markup.
    pub const IS_DISCRETE: &str = "slider--discrete";
    /// Present after keyboard interaction, cleared on blur.
    pub const FOCUS: &str = "slider--focus";
    /// Enables track marker placeholders.
    pub const HAS_TRACK_MARKER: &str = "slider--display-markers";
    /// Present while the thumb animates towards a track press.
    pub const IN_TRANSIT: &str = "slider--in-transit";
    /// Class given to every marker placeholder.
    pub const TRACK_MARKER: &str = "slider__track-marker";
}

/// Attribute names, selectors, and notification names.
pub mod strings {
    pub const ARIA_DISABLED: &str = "aria-disabled";
    pub const ARIA_VALUEMAX: &str = "aria-valuemax";
    pub const ARIA_VALUEMIN: &str = "aria-valuemin";
    pub const ARIA_VALUENOW: &str = "aria-valuenow";
    pub const STEP_DATA_ATTR: &str = "data-step";
    pub const TABINDEX: &str = "tabindex";

    pub const CHANGE_EVENT: &str = "slider:change";
    pub const INPUT_EVENT: &str = "slider:input";

    pub const THUMB_CONTAINER_SELECTOR: &str = ".slider__thumb-container";
    pub const TRACK_SELECTOR: &str = ".slider__track";
    pub const PIN_VALUE_MARKER_SELECTOR: &str = ".slider__pin-value-marker";
    pub const TRACK_MARKER_CONTAINER_SELECTOR: &str = ".slider__track-marker-container";
    pub const LAST_TRACK_MARKER_SELECTOR: &str = ".slider__track-marker:last-child";

    /// Style property used for thumb translation and track fill.
    pub const TRANSFORM: &str = "transform";
    /// Style property stretching the last marker over an uneven remainder.
    pub const FLEX_GROW: &str = "flex-grow";
}

/// Numeric defaults.
pub mod numbers {
    /// Multiplier applied to the key step for PageUp/PageDown.
    pub const PAGE_FACTOR: f64 = 4.0;
    /// Key step used when the slider is continuous.
    pub const DEFAULT_KEY_STEP: f64 = 1.0;
    /// Default bounds of a freshly constructed slider.
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 100.0;
    /// Step ratios above this render no track markers at all.
    pub const MAX_TRACK_MARKERS: usize = 10_000;
}
