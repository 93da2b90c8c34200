//! Element transforms
//!
//! Toasts only ever need two shapes of transform: the stacking translation
//! applied to the positioning layer, and a 3D translation plus uniform scale
//! used by enter/exit keyframes.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::css::{css_length, css_number, css_px};

/// A CSS-compatible transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Vertical translation in pixels
    TranslateY(f32),
    /// 3D translation in pixels followed by a uniform scale
    Translate3d { x: f32, y: f32, z: f32, scale: f32 },
}

impl Transform {
    /// Vertical translation
    pub fn translate_y(y: f32) -> Self {
        Transform::TranslateY(y)
    }

    /// Unscaled 3D translation
    pub fn translate3d(x: f32, y: f32, z: f32) -> Self {
        Transform::Translate3d {
            x,
            y,
            z,
            scale: 1.0,
        }
    }

    /// The identity transform expressed as a 3D translation
    pub fn identity() -> Self {
        Self::translate3d(0.0, 0.0, 0.0)
    }

    /// Replace the scale factor (turns a `TranslateY` into a 3D translation)
    pub fn scale(self, factor: f32) -> Self {
        match self {
            Transform::TranslateY(y) => Transform::Translate3d {
                x: 0.0,
                y,
                z: 0.0,
                scale: factor,
            },
            Transform::Translate3d { x, y, z, .. } => Transform::Translate3d {
                x,
                y,
                z,
                scale: factor,
            },
        }
    }

    /// Translation components `(x, y, z)`
    pub fn translation(&self) -> (f32, f32, f32) {
        match *self {
            Transform::TranslateY(y) => (0.0, y, 0.0),
            Transform::Translate3d { x, y, z, .. } => (x, y, z),
        }
    }

    /// Uniform scale factor
    pub fn scale_factor(&self) -> f32 {
        match *self {
            Transform::TranslateY(_) => 1.0,
            Transform::Translate3d { scale, .. } => scale,
        }
    }

    /// Linear interpolation between two transforms
    pub fn lerp(a: &Transform, b: &Transform, t: f32) -> Transform {
        let (ax, ay, az) = a.translation();
        let (bx, by, bz) = b.translation();
        let (sa, sb) = (a.scale_factor(), b.scale_factor());
        Transform::Translate3d {
            x: ax + (bx - ax) * t,
            y: ay + (by - ay) * t,
            z: az + (bz - az) * t,
            scale: sa + (sb - sa) * t,
        }
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        match *self {
            Transform::TranslateY(y) => format!("translateY({})", css_px(y)),
            Transform::Translate3d { x, y, z, scale } => format!(
                "translate3d({},{},{}) scale({})",
                css_length(x),
                css_length(y),
                css_length(z),
                css_number(scale)
            ),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_y_css() {
        assert_eq!(Transform::translate_y(60.0).to_css(), "translateY(60px)");
        assert_eq!(Transform::translate_y(-0.0).to_css(), "translateY(0px)");
    }

    #[test]
    fn test_translate3d_css() {
        let t = Transform::translate3d(0.0, -80.0, 0.0).scale(0.6);
        assert_eq!(t.to_css(), "translate3d(0,-80px,0) scale(.6)");

        let t = Transform::translate3d(300.0, 0.0, -1.0).scale(0.5);
        assert_eq!(t.to_css(), "translate3d(300px,0,-1px) scale(.5)");

        assert_eq!(
            Transform::identity().to_css(),
            "translate3d(0,0,0) scale(1)"
        );
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Transform::translate3d(0.0, -80.0, 0.0).scale(0.6);
        let to = Transform::identity();
        let mid = Transform::lerp(&from, &to, 0.5);
        assert_eq!(mid.translation(), (0.0, -40.0, 0.0));
        assert!((mid.scale_factor() - 0.8).abs() < 1e-6);
    }
}
