//! Enter/exit motion styles
//!
//! Maps a toast's anchor, visibility and optional preset to the keyframe
//! animation its bar plays. The keyframes themselves come from
//! `toastline_animation`; this module only decides which one applies and
//! what else the bar style needs while it plays.

use toastline_animation::{MotionKey, MotionPhase, MotionPreset, MotionTrack};

use crate::element_style::{style, ElementStyle, PointerEvents};
use crate::position::ToastPosition;

/// Keyframe parameter tuple for a toast
pub fn motion_key(position: ToastPosition, visible: bool, preset: Option<MotionPreset>) -> MotionKey {
    let phase = if visible {
        MotionPhase::Enter
    } else {
        MotionPhase::Exit
    };
    MotionKey::new(phase, MotionTrack::resolve(position.edge(), preset))
}

/// Bar style playing the animation for `key`
///
/// Exiting bars stop taking input so a dismissed toast never swallows a
/// click meant for whatever is underneath.
pub fn animation_style(key: MotionKey) -> ElementStyle {
    let base = style().animation(key.animation());
    match key.phase {
        MotionPhase::Enter => base,
        MotionPhase::Exit => base.pointer_events(PointerEvents::None),
    }
}

/// Animation style for a measured toast
pub fn derive_animation_style(
    position: ToastPosition,
    visible: bool,
    preset: Option<MotionPreset>,
) -> ElementStyle {
    animation_style(motion_key(position, visible, preset))
}

/// Style for a bar whose height is not known yet
///
/// The bar is laid out but invisible, so it can be measured without
/// flashing at the wrong stack offset.
pub fn unmeasured_style() -> ElementStyle {
    style().transparent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toastline_animation::FillMode;
    use toastline_core::Transform;

    #[test]
    fn test_visible_plays_enter() {
        let s = derive_animation_style(ToastPosition::TopCenter, true, None);
        let anim = s.animation.unwrap();
        assert_eq!(anim.name, "tl-enter-top");
        assert_eq!(anim.duration_ms, 350);
        assert_eq!(anim.fill_mode, FillMode::Forwards);
        assert_eq!(anim.last().unwrap().transform, Transform::identity());
        assert_eq!(anim.last().unwrap().opacity, 1.0);
        assert!(s.pointer_events.is_none());
    }

    #[test]
    fn test_hidden_plays_exit_without_input() {
        for position in ToastPosition::ALL {
            let s = derive_animation_style(position, false, None);
            let anim = s.animation.as_ref().unwrap();
            assert_eq!(anim.duration_ms, 800);
            assert_eq!(anim.last().unwrap().opacity, 0.0);
            assert_eq!(s.pointer_events, Some(PointerEvents::None));
        }
    }

    #[test]
    fn test_default_motion_moves_away_from_edge() {
        let top = derive_animation_style(ToastPosition::TopLeft, true, None);
        assert_eq!(
            top.animation.unwrap().first().unwrap().transform.translation(),
            (0.0, -80.0, 0.0)
        );

        let bottom = derive_animation_style(ToastPosition::BottomRight, false, None);
        assert_eq!(
            bottom.animation.unwrap().last().unwrap().transform.translation(),
            (0.0, 130.0, -1.0)
        );
    }

    #[test]
    fn test_bottom_left_slide_left_exit() {
        let s = derive_animation_style(
            ToastPosition::BottomLeft,
            false,
            Some(MotionPreset::SlideLeft),
        );
        let anim = s.animation.as_ref().unwrap();
        let end = anim.last().unwrap();
        assert_eq!(end.transform.to_css(), "translate3d(300px,0,-1px) scale(.5)");
        assert_eq!(end.opacity, 0.0);
        assert_eq!(
            anim.css_shorthand(),
            "tl-exit-slide-left 0.8s cubic-bezier(.06,.71,.55,1) forwards"
        );
        assert_eq!(s.pointer_events, Some(PointerEvents::None));
    }

    #[test]
    fn test_preset_key_ignores_edge() {
        let a = motion_key(ToastPosition::TopCenter, true, Some(MotionPreset::SlideUp));
        let b = motion_key(ToastPosition::BottomCenter, true, Some(MotionPreset::SlideUp));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmeasured_is_transparent() {
        let s = unmeasured_style();
        assert_eq!(s.opacity, Some(0.0));
        assert!(s.animation.is_none());
    }
}
