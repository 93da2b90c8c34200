//! Toast snapshot model
//!
//! A [`Toast`] is an immutable snapshot of one notification as the external
//! lifecycle store sees it at render time. The renderer never mutates it;
//! visibility changes and measured heights arrive as new snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};
use toastline_animation::MotionPreset;
use toastline_core::{Color, ValueOrFn};

use crate::element::{text, Element};
use crate::element_style::ElementStyle;
use crate::position::ToastPosition;

/// Caller-assigned toast identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of toast, selecting the default indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastType {
    Success,
    Error,
    Loading,
    #[default]
    Blank,
    Custom,
}

/// Colors of the default indicator
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconTheme {
    /// Fill of the status mark
    pub primary: Color,
    /// Stroke of the mark glyph
    pub secondary: Color,
}

impl IconTheme {
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }

    pub fn success() -> Self {
        Self::new(Color::from_hex(0x61d345), Color::WHITE)
    }

    pub fn error() -> Self {
        Self::new(Color::from_hex(0xff4b4b), Color::WHITE)
    }

    /// Spinner track (primary) and arc (secondary)
    pub fn loader() -> Self {
        Self::new(Color::from_hex(0xe0e0e0), Color::from_hex(0x616161))
    }
}

/// Caller-supplied icon
#[derive(Clone, Debug, PartialEq)]
pub enum ToastIcon {
    /// A visual element rendered as-is
    Element(Element),
    /// Inline marker text (an emoji, a glyph) wrapped in the animated icon box
    Marker(String),
}

impl From<Element> for ToastIcon {
    fn from(element: Element) -> Self {
        ToastIcon::Element(element)
    }
}

impl From<&str> for ToastIcon {
    fn from(marker: &str) -> Self {
        ToastIcon::Marker(marker.to_string())
    }
}

impl From<String> for ToastIcon {
    fn from(marker: String) -> Self {
        ToastIcon::Marker(marker)
    }
}

/// Message content
#[derive(Clone, Debug, PartialEq)]
pub enum Renderable {
    Text(String),
    Element(Element),
}

impl Renderable {
    pub fn into_element(self) -> Element {
        match self {
            Renderable::Text(content) => text(content),
            Renderable::Element(element) => element,
        }
    }
}

impl From<&str> for Renderable {
    fn from(content: &str) -> Self {
        Renderable::Text(content.to_string())
    }
}

impl From<String> for Renderable {
    fn from(content: String) -> Self {
        Renderable::Text(content)
    }
}

impl From<Element> for Renderable {
    fn from(element: Element) -> Self {
        Renderable::Element(element)
    }
}

/// Message literal or function of the toast it belongs to
pub type ToastMessage = ValueOrFn<Renderable, Toast>;

/// Snapshot of a single notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub toast_type: ToastType,
    pub message: ToastMessage,
    /// Whether the toast should be on screen; false while it animates out
    pub visible: bool,
    /// Rendered bar height, absent until measured
    pub height: Option<f32>,
    pub icon: Option<ToastIcon>,
    pub icon_theme: Option<IconTheme>,
    pub animation: Option<MotionPreset>,
    /// Anchor override; the toaster's anchor applies when absent
    pub position: Option<ToastPosition>,
    pub class_name: Option<String>,
    /// Inline style applied last, over the derived styles
    pub style: ElementStyle,
    pub role: String,
    pub aria_live: String,
}

impl Toast {
    pub fn new(id: ToastId, message: impl Into<Renderable>) -> Self {
        Self::with_message(id, ValueOrFn::Value(message.into()))
    }

    /// Create a toast whose message is computed from the snapshot at render time
    pub fn computed<F>(id: ToastId, message: F) -> Self
    where
        F: Fn(&Toast) -> Renderable + 'static,
    {
        Self::with_message(id, ValueOrFn::computed(message))
    }

    fn with_message(id: ToastId, message: ToastMessage) -> Self {
        Self {
            id,
            toast_type: ToastType::default(),
            message,
            visible: true,
            height: None,
            icon: None,
            icon_theme: None,
            animation: None,
            position: None,
            class_name: None,
            style: ElementStyle::default(),
            role: "status".to_string(),
            aria_live: "polite".to_string(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = toast_type;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn icon(mut self, icon: impl Into<ToastIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_theme(mut self, theme: IconTheme) -> Self {
        self.icon_theme = Some(theme);
        self
    }

    pub fn animation(mut self, preset: MotionPreset) -> Self {
        self.animation = Some(preset);
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn aria_live(mut self, aria_live: impl Into<String>) -> Self {
        self.aria_live = aria_live.into();
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if the bar has a usable measured height
    ///
    /// A zero height counts as unmeasured: it is what a bar reports before
    /// layout has run.
    pub fn is_measured(&self) -> bool {
        matches!(self.height, Some(h) if h > 0.0)
    }

    /// Anchor this toast renders at, given the toaster's default
    pub fn effective_position(&self, default: ToastPosition) -> ToastPosition {
        self.position.unwrap_or(default)
    }

    /// Resolve the message against this snapshot
    pub fn resolve_message(&self) -> Renderable {
        self.message.resolve(self)
    }
}
