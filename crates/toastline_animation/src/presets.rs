//! Toast motion presets
//!
//! Enter and exit keyframes for toasts. The default motion slides along the
//! vertical axis away from the anchored screen edge; the named presets move
//! in a fixed direction regardless of the edge.
//!
//! | track          | enter from      | exit to        |
//! |----------------|-----------------|----------------|
//! | vertical(top)  | (0, -80)        | (0, -130)      |
//! | vertical(bot.) | (0, 80)         | (0, 130)       |
//! | slide-down     | (0, -80)        | (0, -130)      |
//! | slide-up       | (0, 80)         | (0, 130)       |
//! | slide-left     | (1000, 0)       | (300, 0)       |
//! | slide-right    | (-1000, 0)      | (-300, 0)      |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toastline_core::{ToastlineError, Transform};

use crate::easing::Easing;
use crate::keyframe::KeyframeAnimation;

/// Enter animation duration
pub const ENTER_DURATION_MS: u32 = 350;
/// Exit animation duration
pub const EXIT_DURATION_MS: u32 = 800;

/// Vertical distance travelled by vertical enter motion
pub const ENTER_DISTANCE: f32 = 80.0;
/// Vertical distance travelled by vertical exit motion
pub const EXIT_DISTANCE: f32 = 130.0;
/// Horizontal distance travelled by horizontal enter motion
pub const ENTER_SLIDE_DISTANCE: f32 = 1000.0;
/// Horizontal distance travelled by horizontal exit motion
pub const EXIT_SLIDE_DISTANCE: f32 = 300.0;

const ENTER_SCALE: f32 = 0.6;
const ENTER_OPACITY: f32 = 0.5;
const EXIT_SCALE: f32 = 0.5;
/// Exit frames sit one pixel back so exiting toasts render under entering ones
const EXIT_DEPTH: f32 = -1.0;

/// The screen edge a toast stack hugs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl VerticalEdge {
    /// Edge named by an anchor token: anything containing `top` is the top edge
    pub fn from_token(token: &str) -> Self {
        if token.contains("top") {
            VerticalEdge::Top
        } else {
            VerticalEdge::Bottom
        }
    }

    /// Sign aligning vertical motion with the edge (+1 top, -1 bottom)
    pub fn factor(self) -> f32 {
        match self {
            VerticalEdge::Top => 1.0,
            VerticalEdge::Bottom => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerticalEdge::Top => "top",
            VerticalEdge::Bottom => "bottom",
        }
    }
}

/// Named entrance/exit direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionPreset {
    SlideDown,
    SlideUp,
    SlideLeft,
    SlideRight,
}

impl MotionPreset {
    pub const ALL: [MotionPreset; 4] = [
        MotionPreset::SlideDown,
        MotionPreset::SlideUp,
        MotionPreset::SlideLeft,
        MotionPreset::SlideRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MotionPreset::SlideDown => "slide-down",
            MotionPreset::SlideUp => "slide-up",
            MotionPreset::SlideLeft => "slide-left",
            MotionPreset::SlideRight => "slide-right",
        }
    }

    /// Check if the preset moves along the horizontal axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, MotionPreset::SlideLeft | MotionPreset::SlideRight)
    }
}

impl FromStr for MotionPreset {
    type Err = ToastlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| ToastlineError::InvalidMotionPreset(s.to_string()))
    }
}

impl fmt::Display for MotionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a toast is arriving or leaving
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    Enter,
    Exit,
}

impl MotionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionPhase::Enter => "enter",
            MotionPhase::Exit => "exit",
        }
    }
}

/// Direction source for a toast's motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionTrack {
    /// Default vertical slide, direction tied to the anchored edge
    Vertical(VerticalEdge),
    /// Fixed direction independent of the anchored edge
    Preset(MotionPreset),
}

impl MotionTrack {
    /// Pick the track for an edge and an optional preset
    pub fn resolve(edge: VerticalEdge, preset: Option<MotionPreset>) -> Self {
        match preset {
            Some(preset) => MotionTrack::Preset(preset),
            None => MotionTrack::Vertical(edge),
        }
    }

    /// Translation `(x, y)` the enter motion starts from
    pub fn enter_offset(self) -> (f32, f32) {
        match self {
            MotionTrack::Vertical(edge) => (0.0, edge.factor() * -ENTER_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideDown) => (0.0, -ENTER_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideUp) => (0.0, ENTER_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideLeft) => (ENTER_SLIDE_DISTANCE, 0.0),
            MotionTrack::Preset(MotionPreset::SlideRight) => (-ENTER_SLIDE_DISTANCE, 0.0),
        }
    }

    /// Translation `(x, y)` the exit motion ends at
    pub fn exit_offset(self) -> (f32, f32) {
        match self {
            MotionTrack::Vertical(edge) => (0.0, edge.factor() * -EXIT_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideDown) => (0.0, -EXIT_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideUp) => (0.0, EXIT_DISTANCE),
            MotionTrack::Preset(MotionPreset::SlideLeft) => (EXIT_SLIDE_DISTANCE, 0.0),
            MotionTrack::Preset(MotionPreset::SlideRight) => (-EXIT_SLIDE_DISTANCE, 0.0),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            MotionTrack::Vertical(edge) => edge.as_str(),
            MotionTrack::Preset(preset) => preset.as_str(),
        }
    }
}

/// Parameter tuple identifying one generated keyframe animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionKey {
    pub phase: MotionPhase,
    pub track: MotionTrack,
}

impl MotionKey {
    pub fn new(phase: MotionPhase, track: MotionTrack) -> Self {
        Self { phase, track }
    }

    /// Stable `@keyframes` name, e.g. `tl-enter-top` or `tl-exit-slide-left`
    pub fn name(&self) -> String {
        format!("tl-{}-{}", self.phase.as_str(), self.track.as_str())
    }

    /// Generate the animation for this key
    pub fn animation(&self) -> KeyframeAnimation {
        match self.phase {
            MotionPhase::Enter => enter_animation(self.track),
            MotionPhase::Exit => exit_animation(self.track),
        }
    }
}

/// Enter motion: scaled down and half transparent, off-axis, to rest
pub fn enter_animation(track: MotionTrack) -> KeyframeAnimation {
    let (x, y) = track.enter_offset();
    let key = MotionKey::new(MotionPhase::Enter, track);
    KeyframeAnimation::new(key.name(), ENTER_DURATION_MS, Easing::TOAST_ENTER)
        .keyframe(
            0.0,
            Transform::translate3d(x, y, 0.0).scale(ENTER_SCALE),
            ENTER_OPACITY,
        )
        .keyframe(1.0, Transform::identity(), 1.0)
        .forwards()
}

/// Exit motion: from rest to half scale, transparent, off-axis
pub fn exit_animation(track: MotionTrack) -> KeyframeAnimation {
    let (x, y) = track.exit_offset();
    let key = MotionKey::new(MotionPhase::Exit, track);
    KeyframeAnimation::new(key.name(), EXIT_DURATION_MS, Easing::TOAST_EXIT)
        .keyframe(0.0, Transform::translate3d(0.0, 0.0, EXIT_DEPTH), 1.0)
        .keyframe(
            1.0,
            Transform::translate3d(x, y, EXIT_DEPTH).scale(EXIT_SCALE),
            0.0,
        )
        .forwards()
}
