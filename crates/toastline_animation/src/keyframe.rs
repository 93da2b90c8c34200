//! Keyframe animation descriptors
//!
//! A `KeyframeAnimation` is a named, immutable description of a CSS
//! `@keyframes` rule plus the playback parameters that reference it
//! (duration, timing function, fill mode). It can be rendered to CSS or
//! sampled directly.

use serde::Serialize;
use smallvec::SmallVec;
use toastline_core::css::{css_number, css_seconds};
use toastline_core::Transform;

use crate::easing::Easing;

/// What an element shows outside the active animation interval
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Revert to the element's own style once finished
    #[default]
    None,
    /// Hold the final keyframe once finished
    Forwards,
}

impl FillMode {
    pub fn to_css(self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
        }
    }
}

/// A single stop in a keyframe animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct KeyframePoint {
    /// Position in the animation (0.0 to 1.0)
    pub position: f32,
    pub transform: Transform,
    pub opacity: f32,
}

impl KeyframePoint {
    pub fn new(position: f32, transform: Transform, opacity: f32) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            transform,
            opacity,
        }
    }

    fn to_css(&self) -> String {
        format!(
            "{}% {{transform: {}; opacity:{};}}",
            css_number(self.position * 100.0),
            self.transform.to_css(),
            css_number(self.opacity)
        )
    }
}

/// Interpolated state of an animation at a point in time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeState {
    pub transform: Transform,
    pub opacity: f32,
}

/// A named keyframe animation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframeAnimation {
    /// Name of the `@keyframes` rule
    pub name: String,
    /// Stops sorted by position
    pub keyframes: SmallVec<[KeyframePoint; 2]>,
    pub duration_ms: u32,
    pub easing: Easing,
    pub fill_mode: FillMode,
}

impl KeyframeAnimation {
    pub fn new(name: impl Into<String>, duration_ms: u32, easing: Easing) -> Self {
        Self {
            name: name.into(),
            keyframes: SmallVec::new(),
            duration_ms,
            easing,
            fill_mode: FillMode::None,
        }
    }

    /// Add a keyframe stop
    pub fn keyframe(mut self, position: f32, transform: Transform, opacity: f32) -> Self {
        self.keyframes
            .push(KeyframePoint::new(position, transform, opacity));
        self.keyframes
            .sort_by(|a, b| a.position.total_cmp(&b.position));
        self
    }

    /// Set the fill mode
    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Hold the final keyframe after the animation ends
    pub fn forwards(self) -> Self {
        self.fill_mode(FillMode::Forwards)
    }

    pub fn first(&self) -> Option<&KeyframePoint> {
        self.keyframes.first()
    }

    pub fn last(&self) -> Option<&KeyframePoint> {
        self.keyframes.last()
    }

    /// The `@keyframes` rule
    pub fn css_rule(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for point in &self.keyframes {
            css.push_str("  ");
            css.push_str(&point.to_css());
            css.push('\n');
        }
        css.push('}');
        css
    }

    /// The `animation` shorthand referencing this rule
    pub fn css_shorthand(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            css_seconds(self.duration_ms),
            self.easing.to_css(),
            self.fill_mode.to_css()
        )
    }

    /// Sample the animation `elapsed_ms` after it started
    ///
    /// Returns `None` when there is nothing to show from the animation:
    /// no keyframes, or finished without `forwards` fill.
    pub fn sample(&self, elapsed_ms: f32) -> Option<KeyframeState> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;

        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f32 {
            return match self.fill_mode {
                FillMode::Forwards => Some(KeyframeState {
                    transform: last.transform,
                    opacity: last.opacity,
                }),
                FillMode::None => None,
            };
        }

        let progress = (elapsed_ms / self.duration_ms as f32).max(0.0);
        if progress <= first.position {
            return Some(KeyframeState {
                transform: first.transform,
                opacity: first.opacity,
            });
        }

        // The timing function applies per segment, as in CSS
        for pair in self.keyframes.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if progress <= to.position {
                let span = to.position - from.position;
                let local = if span > 0.0 {
                    (progress - from.position) / span
                } else {
                    1.0
                };
                let t = self.easing.apply(local);
                return Some(KeyframeState {
                    transform: Transform::lerp(&from.transform, &to.transform, t),
                    opacity: from.opacity + (to.opacity - from.opacity) * t,
                });
            }
        }

        Some(KeyframeState {
            transform: last.transform,
            opacity: last.opacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> KeyframeAnimation {
        KeyframeAnimation::new("fade", 1000, Easing::Linear)
            .keyframe(1.0, Transform::identity(), 1.0)
            .keyframe(0.0, Transform::translate3d(0.0, -80.0, 0.0).scale(0.6), 0.5)
    }

    #[test]
    fn test_keyframes_sorted() {
        let anim = fade();
        assert_eq!(anim.first().unwrap().position, 0.0);
        assert_eq!(anim.last().unwrap().position, 1.0);
    }

    #[test]
    fn test_css_rule() {
        let css = fade().css_rule();
        assert_eq!(
            css,
            "@keyframes fade {\n  \
             0% {transform: translate3d(0,-80px,0) scale(.6); opacity:.5;}\n  \
             100% {transform: translate3d(0,0,0) scale(1); opacity:1;}\n}"
        );
    }

    #[test]
    fn test_css_shorthand() {
        let anim = KeyframeAnimation::new("enter", 350, Easing::TOAST_ENTER).forwards();
        assert_eq!(
            anim.css_shorthand(),
            "enter 0.35s cubic-bezier(.21,1.02,.73,1) forwards"
        );
    }

    #[test]
    fn test_sample_linear_midpoint() {
        let state = fade().sample(500.0).unwrap();
        assert!((state.opacity - 0.75).abs() < 1e-5);
        assert_eq!(state.transform.translation(), (0.0, -40.0, 0.0));
    }

    #[test]
    fn test_sample_after_end_respects_fill() {
        assert!(fade().sample(1500.0).is_none());

        let held = fade().forwards().sample(1500.0).unwrap();
        assert_eq!(held.opacity, 1.0);
        assert_eq!(held.transform, Transform::identity());
    }

    #[test]
    fn test_serializes_keyframes() {
        use crate::presets::{enter_animation, MotionTrack, VerticalEdge};

        let anim = enter_animation(MotionTrack::Vertical(VerticalEdge::Top));
        let json = serde_json::to_value(&anim).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "tl-enter-top",
                "keyframes": [
                    {
                        "position": 0.0,
                        "transform": "translate3d(0,-80px,0) scale(.6)",
                        "opacity": 0.5
                    },
                    {
                        "position": 1.0,
                        "transform": "translate3d(0,0,0) scale(1)",
                        "opacity": 1.0
                    }
                ],
                "duration_ms": 350,
                "easing": "cubic-bezier(.21,1.02,.73,1)",
                "fill_mode": "forwards"
            })
        );
    }

    #[test]
    fn test_sample_before_start_is_first_frame() {
        let state = fade().sample(-10.0).unwrap();
        assert_eq!(state.opacity, 0.5);
    }
}
