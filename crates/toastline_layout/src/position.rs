//! Toast anchor positions and placement
//!
//! A toast stack is pinned to one of six screen anchors. The anchor decides
//! which edge the stack hugs, how toasts align horizontally, and the sign of
//! the stacking translation: offsets push toasts down from the top edge and
//! up from the bottom edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toastline_animation::{Easing, VerticalEdge};
use toastline_core::{ToastlineError, Transform};

use crate::element_style::{style, ElementStyle, Transition};

/// Duration of the restacking transition on the positioning layer
pub const POSITION_TRANSITION_MS: u32 = 230;

/// Screen anchor of a toast stack
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// Anchor token, e.g. `"top-right"`
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    pub fn edge(self) -> VerticalEdge {
        VerticalEdge::from_token(self.as_str())
    }

    pub fn align(self) -> HorizontalAlign {
        HorizontalAlign::from_token(self.as_str())
    }
}

impl FromStr for ToastPosition {
    type Err = ToastlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ToastlineError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment of a toast stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Flush against the left edge
    Left,
    /// Flush against the right edge
    Right,
    /// Full width, content centered
    Center,
}

impl HorizontalAlign {
    /// Alignment named by an anchor token, centered unless it names a side
    pub fn from_token(token: &str) -> Self {
        if token.contains("left") {
            HorizontalAlign::Left
        } else if token.contains("right") {
            HorizontalAlign::Right
        } else {
            HorizontalAlign::Center
        }
    }
}

/// Placement of the positioning layer for a toast at `offset` in its stack
pub fn derive_position_style(position: ToastPosition, offset: f32) -> ElementStyle {
    position_style_for_token(position.as_str(), offset)
}

/// Placement for a raw anchor token
///
/// Tokens are interpreted by substring, so malformed tokens still yield a
/// (bottom-anchored, centered) placement rather than an error.
pub fn position_style_for_token(token: &str, offset: f32) -> ElementStyle {
    let edge = VerticalEdge::from_token(token);

    let base = style()
        .fixed()
        .transition(Transition::all(POSITION_TRANSITION_MS, Easing::TOAST_ENTER))
        .transform(Transform::translate_y(offset * edge.factor()));

    let vertical = match edge {
        VerticalEdge::Top => base.top(0.0),
        VerticalEdge::Bottom => base.bottom(0.0),
    };

    let placed = match HorizontalAlign::from_token(token) {
        HorizontalAlign::Left => vertical.left(0.0),
        HorizontalAlign::Right => vertical.right(0.0),
        HorizontalAlign::Center => vertical.left(0.0).right(0.0).justify_center(),
    };

    tracing::trace!(token, offset, "derived position style");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_style::{JustifyContent, Position};

    #[test]
    fn test_tokens_round_trip() {
        for position in ToastPosition::ALL {
            assert_eq!(position.as_str().parse::<ToastPosition>().unwrap(), position);
        }
        assert!("middle-left".parse::<ToastPosition>().is_err());
        assert_eq!(ToastPosition::default(), ToastPosition::TopCenter);
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let p: ToastPosition = serde_json::from_str("\"bottom-right\"").unwrap();
        assert_eq!(p, ToastPosition::BottomRight);
    }

    #[test]
    fn test_vertical_edge_per_position() {
        for position in ToastPosition::ALL {
            let expected = if position.as_str().contains("top") {
                VerticalEdge::Top
            } else {
                VerticalEdge::Bottom
            };
            assert_eq!(position.edge(), expected);
        }
    }

    #[test]
    fn test_exactly_one_alignment() {
        for position in ToastPosition::ALL {
            let s = derive_position_style(position, 0.0);
            let flush_left = s.left.is_some() && s.right.is_none();
            let flush_right = s.right.is_some() && s.left.is_none();
            let centered = s.left.is_some()
                && s.right.is_some()
                && s.justify_content == Some(JustifyContent::Center);
            let selected = [flush_left, flush_right, centered]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(selected, 1, "{position}");
        }
    }

    #[test]
    fn test_alignment_by_substring() {
        assert_eq!(HorizontalAlign::from_token("top-left"), HorizontalAlign::Left);
        assert_eq!(HorizontalAlign::from_token("bottom-right"), HorizontalAlign::Right);
        assert_eq!(HorizontalAlign::from_token("top-center"), HorizontalAlign::Center);
        assert_eq!(HorizontalAlign::from_token("sideways"), HorizontalAlign::Center);
    }

    #[test]
    fn test_offset_sign_follows_edge() {
        let top = derive_position_style(ToastPosition::TopCenter, 24.0);
        assert_eq!(top.transform, Some(Transform::translate_y(24.0)));
        assert_eq!(top.top, Some(0.0));
        assert!(top.bottom.is_none());

        let bottom = derive_position_style(ToastPosition::BottomCenter, 24.0);
        assert_eq!(bottom.transform, Some(Transform::translate_y(-24.0)));
        assert_eq!(bottom.bottom, Some(0.0));
        assert!(bottom.top.is_none());
    }

    #[test]
    fn test_fixed_with_transition() {
        let s = derive_position_style(ToastPosition::TopLeft, 0.0);
        assert_eq!(s.position, Some(Position::Fixed));
        assert_eq!(
            s.transition.unwrap().to_css(),
            "all 230ms cubic-bezier(.21,1.02,.73,1)"
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        for position in ToastPosition::ALL {
            assert_eq!(
                derive_position_style(position, 37.5),
                derive_position_style(position, 37.5)
            );
        }
    }

    #[test]
    fn test_malformed_token_degrades() {
        let s = position_style_for_token("nonsense", 10.0);
        assert_eq!(s.bottom, Some(0.0));
        assert_eq!(s.justify_content, Some(JustifyContent::Center));
    }
}
