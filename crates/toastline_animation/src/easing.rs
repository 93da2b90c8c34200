//! Easing curves
//!
//! CSS-compatible timing functions. Each curve can be written out as CSS and
//! also evaluated numerically, so hosts without a CSS engine can sample the
//! same motion.

use serde::{Serialize, Serializer};
use toastline_core::css::css_number;

/// A timing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(x1, y1, x2, y2)` with implicit endpoints (0,0) and (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Ease-out dominant curve used by the stacking transition and enter motion
    pub const TOAST_ENTER: Easing = Easing::CubicBezier(0.21, 1.02, 0.73, 1.0);

    /// Ease-in dominant curve used by exit motion
    pub const TOAST_EXIT: Easing = Easing::CubicBezier(0.06, 0.71, 0.55, 1.0);

    /// Map linear progress `t` (0.0 to 1.0) to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let curve = BezierCurve::new(x1, y1, x2, y2);
                curve.sample_y(curve.solve_x(t))
            }
        }
    }

    /// CSS timing function
    pub fn to_css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({},{},{},{})",
                css_number(x1),
                css_number(y1),
                css_number(x2),
                css_number(y2)
            ),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Polynomial coefficients of a unit cubic bezier
struct BezierCurve {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl BezierCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn sample_x(&self, s: f32) -> f32 {
        ((self.ax * s + self.bx) * s + self.cx) * s
    }

    fn sample_y(&self, s: f32) -> f32 {
        ((self.ay * s + self.by) * s + self.cy) * s
    }

    fn sample_dx(&self, s: f32) -> f32 {
        (3.0 * self.ax * s + 2.0 * self.bx) * s + self.cx
    }

    /// Find the curve parameter whose x equals `x`
    fn solve_x(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        // Newton-Raphson converges quickly for well-behaved curves
        let mut s = x;
        for _ in 0..8 {
            let err = self.sample_x(s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let d = self.sample_dx(s);
            if d.abs() < EPSILON {
                break;
            }
            s -= err / d;
        }

        // Fall back to bisection
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let v = self.sample_x(s);
            if (v - x).abs() < EPSILON {
                break;
            }
            if x > v {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_output() {
        assert_eq!(Easing::TOAST_ENTER.to_css(), "cubic-bezier(.21,1.02,.73,1)");
        assert_eq!(Easing::TOAST_EXIT.to_css(), "cubic-bezier(.06,.71,.55,1)");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }

    #[test]
    fn test_endpoints_fixed() {
        for easing in [Easing::Linear, Easing::TOAST_ENTER, Easing::TOAST_EXIT] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_runs_ahead_of_linear() {
        // Both toast curves front-load their progress
        let mid_enter = Easing::TOAST_ENTER.apply(0.5);
        let mid_exit = Easing::TOAST_EXIT.apply(0.5);
        assert!(mid_enter > 0.5, "enter midpoint was {mid_enter}");
        assert!(mid_exit > 0.5, "exit midpoint was {mid_exit}");
    }

    #[test]
    fn test_symmetric_curve_midpoint() {
        let ease = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-3);
    }
}
