//! Toastline Animation System
//!
//! Keyframe descriptors and the toast motion presets built on them.
//!
//! # Features
//!
//! - **Easing**: CSS cubic-bezier curves that can also be evaluated numerically
//! - **Keyframe Animations**: named, immutable `@keyframes` descriptors with sampling
//! - **Motion Presets**: enter/exit motion per anchored edge or fixed direction
//! - **Registry**: one generated definition per distinct motion parameter tuple

pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod registry;

pub use easing::Easing;
pub use keyframe::{FillMode, KeyframeAnimation, KeyframePoint, KeyframeState};
pub use presets::{
    enter_animation, exit_animation, MotionKey, MotionPhase, MotionPreset, MotionTrack,
    VerticalEdge, ENTER_DURATION_MS, EXIT_DURATION_MS,
};
pub use registry::{KeyframeId, KeyframeRegistry};
