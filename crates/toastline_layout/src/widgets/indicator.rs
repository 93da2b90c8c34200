//! Toast icons
//!
//! Resolves what goes in the icon slot of a toast bar. A caller-supplied
//! icon always wins; otherwise the toast type picks a default indicator:
//!
//! | type               | indicator                              |
//! |--------------------|----------------------------------------|
//! | `Blank`, `Custom`  | none                                   |
//! | `Loading`          | spinner                                |
//! | `Success`, `Error` | spinner underneath a check / error mark |
//!
//! The spinner stays mounted under the status mark so a loading toast that
//! resolves to success or error morphs in place instead of jumping.

use crate::element::{div, text, Element};
use crate::element_style::style;
use crate::widgets::toast::{IconTheme, Toast, ToastIcon, ToastType};

/// Resolved contents of the icon slot
#[derive(Clone, Debug, PartialEq)]
pub enum IconContent {
    /// Caller element, rendered as-is
    CustomElement(Element),
    /// Inline marker wrapped in the animated icon box
    InlineMarker(String),
    /// Built-in indicator for the toast type
    DefaultIndicator {
        toast_type: ToastType,
        theme: Option<IconTheme>,
    },
}

/// Pick the icon representation for a toast
pub fn resolve_icon(toast: &Toast) -> IconContent {
    match &toast.icon {
        Some(ToastIcon::Marker(marker)) => IconContent::InlineMarker(marker.clone()),
        Some(ToastIcon::Element(element)) => IconContent::CustomElement(element.clone()),
        None => IconContent::DefaultIndicator {
            toast_type: toast.toast_type,
            theme: toast.icon_theme,
        },
    }
}

impl IconContent {
    /// Render the icon slot, `None` when the slot stays empty
    pub fn render(self) -> Option<Element> {
        match self {
            IconContent::CustomElement(element) => Some(element),
            IconContent::InlineMarker(marker) => Some(animated_icon(marker)),
            IconContent::DefaultIndicator { toast_type, theme } => indicator(toast_type, theme),
        }
    }
}

fn animated_icon(marker: String) -> Element {
    div().class("tl-animated-icon").child(text(marker))
}

fn indicator(toast_type: ToastType, theme: Option<IconTheme>) -> Option<Element> {
    let mark = match toast_type {
        ToastType::Blank | ToastType::Custom => return None,
        ToastType::Loading => None,
        ToastType::Success => Some(status_mark("tl-checkmark", theme.unwrap_or_else(IconTheme::success))),
        ToastType::Error => Some(status_mark("tl-error-mark", theme.unwrap_or_else(IconTheme::error))),
    };

    let loader = theme.unwrap_or_else(IconTheme::loader);
    let spinner = div()
        .class("tl-loader")
        .style(style().border_color(loader.primary).text_color(loader.secondary));

    Some(
        div()
            .class("tl-indicator")
            .child(spinner)
            .child_opt(mark.map(|mark| div().class("tl-status").child(mark))),
    )
}

fn status_mark(class: &str, theme: IconTheme) -> Element {
    div()
        .class(class)
        .style(style().bg(theme.primary).text_color(theme.secondary))
}
