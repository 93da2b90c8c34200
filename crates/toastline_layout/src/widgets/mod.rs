//! Toast widgets
//!
//! - [`Toast`] - snapshot of a notification as the lifecycle store sees it
//! - [`ToastBar`] - renders one toast and measures it after paint
//! - [`Toaster`] - stacks toast bars per anchor without overlap
//! - [`resolve_icon`] - icon slot resolution and default indicators

pub mod indicator;
pub mod toast;
pub mod toast_bar;
pub mod toaster;

pub use indicator::{resolve_icon, IconContent};
pub use toast::{IconTheme, Renderable, Toast, ToastIcon, ToastId, ToastMessage, ToastType};
pub use toast_bar::{
    stylesheet, MountedToastBar, ToastBar, ToastPhase, BAR_CLASS, DEFAULT_Z_INDEX,
    TOAST_STYLESHEET,
};
pub use toaster::Toaster;
