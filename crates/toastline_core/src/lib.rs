//! Toastline Core
//!
//! Foundational primitives shared by the toastline crates:
//!
//! - **Colors**: RGBA values with CSS hex parsing and serialization
//! - **Transforms**: the stacking translation and keyframe transforms
//! - **CSS formatting**: compact number, length and duration output
//! - **Lazy values**: `ValueOrFn`, a literal or a function resolved at render time
//! - **Frame queue**: single-shot tasks run after a frame is painted, with liveness guards
//! - **Errors**: `ToastlineError` for boundary parsing

pub mod color;
pub mod css;
pub mod error;
pub mod frame;
pub mod transform;
pub mod value;

pub use color::Color;
pub use error::{Result, ToastlineError};
pub use frame::{FrameQueue, LivenessGuard, LivenessToken};
pub use transform::Transform;
pub use value::ValueOrFn;
