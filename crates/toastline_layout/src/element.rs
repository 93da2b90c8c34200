//! Element tree
//!
//! A small DOM-like tree produced by rendering. Hosts either walk it
//! directly or serialize it (`to_html`, serde) for a real document.
//!
//! ```rust
//! use toastline_layout::element::{div, text};
//!
//! let el = div()
//!     .class("tl-toast-message")
//!     .attr("role", "status")
//!     .child(text("Saved"));
//!
//! assert_eq!(
//!     el.to_html(),
//!     r#"<div class="tl-toast-message" role="status">Saved</div>"#
//! );
//! ```

use serde::Serialize;
use smallvec::SmallVec;

use crate::element_style::ElementStyle;

/// Node kind
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Div,
    Text(String),
}

/// A node in the rendered tree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub classes: SmallVec<[String; 2]>,
    #[serde(skip_serializing_if = "ElementStyle::is_empty")]
    pub style: ElementStyle,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub attributes: SmallVec<[(String, String); 2]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    fn with_kind(kind: ElementKind) -> Self {
        Self {
            kind,
            key: None,
            classes: SmallVec::new(),
            style: ElementStyle::default(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Create a container element
    pub fn div() -> Self {
        Self::with_kind(ElementKind::Div)
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Text(content.into()))
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set a stable key identifying this element across renders
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add a class name (empty names are ignored)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for name in class.split_whitespace() {
            self.classes.push(name.to_string());
        }
        self
    }

    /// Add a class name if present
    pub fn class_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.class(class),
            None => self,
        }
    }

    /// Replace the inline style
    pub fn style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Set an attribute if a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child if present
    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// First element (depth-first, including self) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let ElementKind::Text(content) = &self.kind {
            out.push_str(content);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.kind {
            ElementKind::Text(content) => {
                out.push_str(&html_escape::encode_text(content));
            }
            ElementKind::Div => {
                out.push_str("<div");
                if !self.classes.is_empty() {
                    write_attr(out, "class", &self.classes.join(" "));
                }
                if !self.style.is_empty() {
                    write_attr(out, "style", &self.style.to_css());
                }
                for (name, value) in &self.attributes {
                    write_attr(out, name, value);
                }
                out.push('>');
                for child in &self.children {
                    child.write_html(out);
                }
                out.push_str("</div>");
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

/// Create a container element
pub fn div() -> Element {
    Element::div()
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Element {
    Element::text(content)
}
