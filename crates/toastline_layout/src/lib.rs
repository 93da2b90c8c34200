//! Toastline Layout
//!
//! Toast rendering with fixed-position stacking and keyframe motion.
//!
//! # Example
//!
//! ```rust
//! use toastline_layout::prelude::*;
//!
//! let mut surface = HeadlessSurface::new();
//! let mut frames = FrameQueue::new();
//! let mut toaster = Toaster::new(ToasterConfig::default().position(ToastPosition::BottomRight));
//!
//! let toasts = vec![Toast::new(ToastId(1), "Saved").toast_type(ToastType::Success)];
//! toaster.sync(&toasts, &mut surface, &mut frames);
//!
//! // Heights are read once the frame has been painted
//! frames.commit_frame(&mut surface);
//! if toaster.take_restack() {
//!     toaster.sync(&toasts, &mut surface, &mut frames);
//! }
//!
//! assert!(toaster.height_of(ToastId(1)).is_some());
//! assert!(toaster.stylesheet().contains("@keyframes tl-enter-bottom"));
//! ```

pub mod config;
pub mod element;
pub mod element_style;
pub mod motion;
pub mod position;
pub mod surface;
pub mod widgets;

pub use config::ToasterConfig;
pub use element::{div, text, Element, ElementKind};
pub use element_style::{style, ElementStyle, PointerEvents};
pub use motion::{derive_animation_style, unmeasured_style};
pub use position::{derive_position_style, HorizontalAlign, ToastPosition};
pub use surface::{EstimatedMeasurer, HeadlessSurface, HeightMeasurer, NodeId, RenderSurface};
pub use widgets::{
    resolve_icon, IconContent, IconTheme, MountedToastBar, Renderable, Toast, ToastBar, ToastIcon,
    ToastId, ToastPhase, ToastType, Toaster,
};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::ToasterConfig;
    pub use crate::element::{div, text, Element};
    pub use crate::element_style::{style, ElementStyle};
    pub use crate::position::ToastPosition;
    // Surfaces
    pub use crate::surface::{HeadlessSurface, RenderSurface};
    // Toast widgets
    pub use crate::widgets::{
        IconTheme, Renderable, Toast, ToastBar, ToastIcon, ToastId, ToastType, Toaster,
    };

    pub use toastline_animation::MotionPreset;
    pub use toastline_core::{Color, FrameQueue};
}
