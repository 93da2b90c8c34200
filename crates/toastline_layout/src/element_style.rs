//! Unified element styling
//!
//! Provides `ElementStyle` - a typed style object covering the properties a
//! toast and its positioning layer need. Styles compose by merging: derived
//! placement, derived motion and caller overrides are layered on top of each
//! other, later layers winning.
//!
//! # Example
//!
//! ```rust
//! use toastline_layout::element_style::{style, PointerEvents};
//!
//! let base = style().flex().pointer_events(PointerEvents::None);
//! let layered = base.merge(&style().z_index(9999));
//!
//! assert_eq!(layered.to_css(), "display: flex; z-index: 9999; pointer-events: none");
//! ```

use serde::Serialize;
use toastline_animation::{Easing, KeyframeAnimation};
use toastline_core::css::{css_length, css_number};
use toastline_core::{Color, Transform};

/// CSS `display`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Flex,
}

impl Display {
    fn to_css(self) -> &'static str {
        match self {
            Display::Flex => "flex",
        }
    }
}

/// CSS `position`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Position {
    fn to_css(self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
        }
    }
}

/// CSS `justify-content`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    Start,
    Center,
    End,
}

impl JustifyContent {
    fn to_css(self) -> &'static str {
        match self {
            JustifyContent::Start => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::End => "flex-end",
        }
    }
}

/// Pointer event behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEvents {
    /// Normal hit testing
    #[default]
    Auto,
    /// Transparent to input
    None,
    /// Reset to the initial value, re-enabling input under a `None` parent
    Initial,
}

impl PointerEvents {
    fn to_css(self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
            PointerEvents::Initial => "initial",
        }
    }
}

/// A CSS transition on every animatable property
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub fn all(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn to_css(&self) -> String {
        format!("all {}ms {}", self.duration_ms, self.easing.to_css())
    }
}

/// Visual style properties for an element
///
/// All properties are optional - when merging styles, only set properties
/// will override.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_events: Option<PointerEvents>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Keyframe animation to play
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<KeyframeAnimation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

impl ElementStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Set display to flex
    pub fn flex(mut self) -> Self {
        self.display = Some(Display::Flex);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Fix the element relative to the viewport
    pub fn fixed(mut self) -> Self {
        self.position = Some(Position::Fixed);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn top(mut self, px: f32) -> Self {
        self.top = Some(px);
        self
    }

    pub fn right(mut self, px: f32) -> Self {
        self.right = Some(px);
        self
    }

    pub fn bottom(mut self, px: f32) -> Self {
        self.bottom = Some(px);
        self
    }

    pub fn left(mut self, px: f32) -> Self {
        self.left = Some(px);
        self
    }

    /// Center children along the main axis
    pub fn justify_center(mut self) -> Self {
        self.justify_content = Some(JustifyContent::Center);
        self
    }

    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = Some(pointer_events);
        self
    }

    // =========================================================================
    // Motion
    // =========================================================================

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn animation(mut self, animation: KeyframeAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Set opacity (0.0 = transparent, 1.0 = opaque)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Fully transparent
    pub fn transparent(self) -> Self {
        self.opacity(0.0)
    }

    // =========================================================================
    // Paint
    // =========================================================================

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set foreground (text) color
    pub fn text_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge another style on top of this one
    ///
    /// Properties from `other` will override properties in `self` if they are set.
    /// Unset properties in `other` will not override.
    pub fn merge(&self, other: &ElementStyle) -> ElementStyle {
        ElementStyle {
            display: other.display.or(self.display),
            position: other.position.or(self.position),
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
            justify_content: other.justify_content.or(self.justify_content),
            transition: other.transition.or(self.transition),
            transform: other.transform.or(self.transform),
            z_index: other.z_index.or(self.z_index),
            pointer_events: other.pointer_events.or(self.pointer_events),
            opacity: other.opacity.or(self.opacity),
            animation: other
                .animation
                .clone()
                .or_else(|| self.animation.clone()),
            background: other.background.or(self.background),
            color: other.color.or(self.color),
            border_color: other.border_color.or(self.border_color),
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }

    /// Inline CSS declarations, in a fixed property order
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        let mut push = |name: &str, value: String| decls.push(format!("{name}: {value}"));

        if let Some(display) = self.display {
            push("display", display.to_css().to_string());
        }
        if let Some(position) = self.position {
            push("position", position.to_css().to_string());
        }
        if let Some(transition) = &self.transition {
            push("transition", transition.to_css());
        }
        if let Some(transform) = &self.transform {
            push("transform", transform.to_css());
        }
        if let Some(top) = self.top {
            push("top", css_length(top));
        }
        if let Some(right) = self.right {
            push("right", css_length(right));
        }
        if let Some(bottom) = self.bottom {
            push("bottom", css_length(bottom));
        }
        if let Some(left) = self.left {
            push("left", css_length(left));
        }
        if let Some(justify) = self.justify_content {
            push("justify-content", justify.to_css().to_string());
        }
        if let Some(z) = self.z_index {
            push("z-index", z.to_string());
        }
        if let Some(pointer_events) = self.pointer_events {
            push("pointer-events", pointer_events.to_css().to_string());
        }
        if let Some(animation) = &self.animation {
            push("animation", animation.css_shorthand());
        }
        if let Some(opacity) = self.opacity {
            push("opacity", css_number(opacity));
        }
        if let Some(background) = self.background {
            push("background", background.to_css());
        }
        if let Some(color) = self.color {
            push("color", color.to_css());
        }
        if let Some(border_color) = self.border_color {
            push("border-color", border_color.to_css());
        }

        decls.join("; ")
    }
}

/// Create a new element style
pub fn style() -> ElementStyle {
    ElementStyle::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let s = style().fixed().top(0.0).z_index(10).opacity(2.0);

        assert_eq!(s.position, Some(Position::Fixed));
        assert_eq!(s.top, Some(0.0));
        assert_eq!(s.z_index, Some(10));
        // Opacity is clamped
        assert_eq!(s.opacity, Some(1.0));
    }

    #[test]
    fn test_style_merge() {
        let base = style()
            .pointer_events(PointerEvents::Initial)
            .bg(Color::WHITE)
            .text_color(Color::BLACK);
        let over = style().pointer_events(PointerEvents::None).opacity(0.0);

        let merged = base.merge(&over);

        // Pointer events should be overridden
        assert_eq!(merged.pointer_events, Some(PointerEvents::None));
        // Untouched properties survive
        assert_eq!(merged.background, Some(Color::WHITE));
        assert_eq!(merged.color, Some(Color::BLACK));
        // New properties come from the overlay
        assert_eq!(merged.opacity, Some(0.0));
    }

    #[test]
    fn test_style_empty() {
        assert!(ElementStyle::new().is_empty());
        assert!(!style().flex().is_empty());
    }

    #[test]
    fn test_css_output() {
        let s = style()
            .fixed()
            .transition(Transition::all(230, Easing::TOAST_ENTER))
            .transform(Transform::translate_y(-20.0))
            .bottom(0.0)
            .left(0.0);
        assert_eq!(
            s.to_css(),
            "position: fixed; transition: all 230ms cubic-bezier(.21,1.02,.73,1); \
             transform: translateY(-20px); bottom: 0; left: 0"
        );
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_value(style().z_index(9999).bg(Color::WHITE)).unwrap();
        assert_eq!(json, serde_json::json!({ "zIndex": 9999, "background": "#ffffff" }));
    }
}
