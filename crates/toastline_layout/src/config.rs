//! Toaster configuration
//!
//! Settings shared by every toast a [`Toaster`](crate::Toaster) renders. Hosts
//! usually build one in code; it can also be read from a TOML table:
//!
//! ```toml
//! position = "bottom-right"
//! gutter = 12
//! reverse-order = true
//! z-index = 1000
//! ```
//!
//! Missing keys fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toastline_core::{Result, ToastlineError};

use crate::position::ToastPosition;
use crate::widgets::toast_bar::DEFAULT_Z_INDEX;

/// Space between stacked toasts
pub const DEFAULT_GUTTER: f32 = 8.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToasterConfig {
    /// Anchor for toasts without their own position
    pub position: ToastPosition,
    /// Pixels between adjacent toasts in a stack
    pub gutter: f32,
    /// Stack newer toasts behind older ones instead of in front
    pub reverse_order: bool,
    /// Stacking order of visible toasts
    pub z_index: i32,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            gutter: DEFAULT_GUTTER,
            reverse_order: false,
            z_index: DEFAULT_Z_INDEX,
        }
    }
}

impl ToasterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn gutter(mut self, gutter: f32) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = reverse_order;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ToastlineError::Config(e.to_string()))
    }

    /// Read from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ToastlineError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), position = %config.position, "loaded toaster config");
        Ok(config)
    }
}
