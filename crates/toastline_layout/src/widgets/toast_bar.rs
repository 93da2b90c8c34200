//! Toast bar
//!
//! Renders one toast at its place in a stack and measures it once it has
//! been painted.
//!
//! The rendered tree has two layers:
//!
//! ```text
//! div.tl-toast            positioning layer: fixed, flex, no pointer events,
//! │                       translated by the stack offset
//! └─ div.tl-toast-bar     the visible bar: enter/exit animation, caller style
//!    ├─ icon slot         (optional)
//!    └─ div.tl-toast-message  role / aria-live passthrough
//! ```
//!
//! # Measurement
//!
//! Reading geometry while a frame is being built returns stale values, so
//! [`ToastBar::mount`] never measures synchronously. It queues a single
//! after-paint task on the host's [`FrameQueue`]; when the host commits the
//! frame, the task reads the bar's height from the surface and hands it to
//! the `on_height` callback. Re-rendering a mounted bar never queues another
//! read. Unmounting drops the mount's liveness token, which turns a still
//! queued read into a no-op.

use toastline_animation::{KeyframeRegistry, KeyframeState, MotionKey, ENTER_DURATION_MS};
use toastline_core::{FrameQueue, LivenessToken};

use crate::element::{div, Element};
use crate::element_style::{style, ElementStyle, PointerEvents};
use crate::motion::{animation_style, motion_key, unmeasured_style};
use crate::position::{derive_position_style, ToastPosition};
use crate::surface::{NodeId, RenderSurface};
use crate::widgets::indicator::resolve_icon;
use crate::widgets::toast::Toast;

/// Stacking order of the positioning layer while the toast is visible
pub const DEFAULT_Z_INDEX: i32 = 9999;

/// Class of the measured bar element
pub const BAR_CLASS: &str = "tl-toast-bar";

/// Static rules for the bar, message and default indicators
pub const TOAST_STYLESHEET: &str = r#".tl-toast-bar {
  display: flex;
  align-items: center;
  background: #fff;
  color: #363636;
  line-height: 1.3;
  will-change: transform;
  box-shadow: 0 3px 10px rgba(0, 0, 0, 0.1), 0 3px 3px rgba(0, 0, 0, 0.05);
  max-width: 350px;
  margin: 16px;
  pointer-events: auto;
  padding: 8px 10px;
  border-radius: 8px;
}
.tl-toast-message {
  display: flex;
  justify-content: center;
  margin: 4px 10px;
  color: inherit;
  flex: 1;
}
.tl-indicator {
  position: relative;
  display: flex;
  justify-content: center;
  align-items: center;
  min-width: 20px;
  min-height: 20px;
}
.tl-loader {
  width: 12px;
  height: 12px;
  box-sizing: border-box;
  border: 2px solid;
  border-radius: 100%;
  border-right-color: currentColor !important;
  animation: tl-rotate 1s linear infinite;
}
.tl-status {
  position: absolute;
}
.tl-checkmark,
.tl-error-mark {
  position: relative;
  width: 20px;
  height: 20px;
  border-radius: 10px;
  opacity: 0;
  transform: scale(0);
  animation: tl-mark-in .3s cubic-bezier(.175,.885,.32,1.275) forwards;
  animation-delay: 100ms;
}
.tl-checkmark::after {
  content: '';
  box-sizing: border-box;
  position: absolute;
  left: 6px;
  bottom: 6px;
  width: 6px;
  height: 10px;
  border-right: 2px solid currentColor;
  border-bottom: 2px solid currentColor;
  transform: rotate(45deg);
}
.tl-error-mark::before,
.tl-error-mark::after {
  content: '';
  position: absolute;
  top: 9px;
  left: 4px;
  width: 12px;
  height: 2px;
  border-radius: 3px;
  background: currentColor;
  transform: rotate(45deg);
}
.tl-error-mark::before {
  transform: rotate(-45deg);
}
.tl-animated-icon {
  position: relative;
  transform: scale(.6);
  opacity: .4;
  min-width: 20px;
  animation: tl-mark-in .3s .12s cubic-bezier(.175,.885,.32,1.275) forwards;
}
@keyframes tl-rotate {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}
@keyframes tl-mark-in {
  from { transform: scale(.6); opacity: .4; }
  to { transform: scale(1); opacity: 1; }
}"#;

/// Component stylesheet: static rules plus every registered motion keyframe
pub fn stylesheet(keyframes: &KeyframeRegistry) -> String {
    if keyframes.is_empty() {
        return TOAST_STYLESHEET.to_string();
    }
    format!("{}\n{}", TOAST_STYLESHEET, keyframes.stylesheet())
}

/// Where a mounted toast is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Waiting for the first measurement, rendered transparent
    Unmeasured,
    /// Playing the enter animation
    Entering,
    /// Enter animation finished
    Visible,
    /// Playing the exit animation until the caller removes it
    Exiting,
}

/// A toast at a given anchor and stack offset
#[derive(Clone, Debug)]
pub struct ToastBar {
    pub toast: Toast,
    pub position: ToastPosition,
    /// Distance from the anchored edge in pixels
    pub offset: f32,
    pub z_index: i32,
}

impl ToastBar {
    pub fn new(toast: Toast, position: ToastPosition) -> Self {
        Self {
            toast,
            position,
            offset: 0.0,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Placement of the positioning layer
    pub fn position_style(&self) -> ElementStyle {
        derive_position_style(self.position, self.offset)
    }

    /// Keyframe parameters, `None` until the toast is measured
    pub fn motion_key(&self) -> Option<MotionKey> {
        self.toast
            .is_measured()
            .then(|| motion_key(self.position, self.toast.visible, self.toast.animation))
    }

    /// Motion part of the bar style
    pub fn animation_style(&self) -> ElementStyle {
        match self.motion_key() {
            Some(key) => animation_style(key),
            None => unmeasured_style(),
        }
    }

    /// Lifecycle phase, `elapsed_ms` after the current animation started
    pub fn phase(&self, elapsed_ms: f32) -> ToastPhase {
        if !self.toast.is_measured() {
            ToastPhase::Unmeasured
        } else if !self.toast.visible {
            ToastPhase::Exiting
        } else if elapsed_ms < ENTER_DURATION_MS as f32 {
            ToastPhase::Entering
        } else {
            ToastPhase::Visible
        }
    }

    /// Animated bar state `elapsed_ms` after the current animation started
    ///
    /// For hosts that drive motion themselves instead of handing keyframes to
    /// a CSS engine. Unmeasured bars report no animation state.
    pub fn sample(&self, elapsed_ms: f32) -> Option<KeyframeState> {
        self.motion_key()?.animation().sample(elapsed_ms)
    }

    /// Build the element tree, registering the keyframes it references
    pub fn render(&self, keyframes: &mut KeyframeRegistry) -> Element {
        let toast = &self.toast;

        if let Some(key) = self.motion_key() {
            keyframes.register(key);
        }

        let layer = if toast.visible {
            style().flex().z_index(self.z_index)
        } else {
            style().flex()
        };
        let layer_style = layer
            .pointer_events(PointerEvents::None)
            .merge(&self.position_style());

        let bar_style = style()
            .pointer_events(PointerEvents::Initial)
            .merge(&self.animation_style())
            .merge(&toast.style);

        let message = div()
            .class("tl-toast-message")
            .attr("role", toast.role.as_str())
            .attr("aria-live", toast.aria_live.as_str())
            .child(toast.resolve_message().into_element());

        let bar = div()
            .class(BAR_CLASS)
            .class_opt(toast.class_name.as_deref())
            .style(bar_style)
            .child_opt(resolve_icon(toast).render())
            .child(message);

        div()
            .key(toast.id.to_string())
            .class("tl-toast")
            .style(layer_style)
            .child(bar)
    }

    /// Attach to `surface` and queue the one height read for this mount
    pub fn mount<S, F>(
        self,
        surface: &mut S,
        frames: &mut FrameQueue<S>,
        keyframes: &mut KeyframeRegistry,
        on_height: F,
    ) -> MountedToastBar
    where
        S: RenderSurface + 'static,
        F: FnOnce(f32) + 'static,
    {
        let node = surface.attach(self.render(keyframes));
        let token = LivenessToken::new();
        let id = self.toast.id;

        tracing::debug!(%id, position = %self.position, offset = self.offset, "mounted toast bar");

        frames.after_paint(token.guard(), move |surface: &mut S| {
            match surface.bounding_height(node, BAR_CLASS) {
                Some(height) => {
                    tracing::debug!(%id, height, "measured toast bar");
                    on_height(height);
                }
                None => {
                    tracing::debug!(%id, "toast bar gone before measurement");
                }
            }
        });

        MountedToastBar {
            bar: self,
            node,
            token,
        }
    }
}

/// A toast bar attached to a surface
#[derive(Debug)]
pub struct MountedToastBar {
    bar: ToastBar,
    node: NodeId,
    /// Keeps the queued measurement alive; dropped on unmount
    token: LivenessToken,
}

impl MountedToastBar {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn bar(&self) -> &ToastBar {
        &self.bar
    }

    pub fn toast(&self) -> &Toast {
        &self.bar.toast
    }

    /// Re-render with a new snapshot or offset
    ///
    /// Returns false if the surface no longer holds the node.
    pub fn update<S: RenderSurface>(
        &mut self,
        bar: ToastBar,
        surface: &mut S,
        keyframes: &mut KeyframeRegistry,
    ) -> bool {
        self.bar = bar;
        surface.replace(self.node, self.bar.render(keyframes))
    }

    /// Detach from the surface, cancelling a pending measurement
    pub fn unmount<S: RenderSurface>(self, surface: &mut S) -> Option<Element> {
        let MountedToastBar { bar, node, token } = self;
        drop(token);
        tracing::debug!(id = %bar.toast.id, "unmounted toast bar");
        surface.detach(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;
    use crate::widgets::toast::{ToastId, ToastType};
    use std::cell::RefCell;
    use std::rc::Rc;
    use toastline_animation::MotionPreset;
    use toastline_core::Transform;

    fn surface() -> HeadlessSurface {
        HeadlessSurface::with_measurer(|_: &Element| 40.0)
    }

    fn recorder() -> (Rc<RefCell<Vec<f32>>>, impl FnOnce(f32) + 'static) {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        (reports, move |h: f32| sink.borrow_mut().push(h))
    }

    fn bar_of(el: &Element) -> &Element {
        el.find_by_class(BAR_CLASS).unwrap()
    }

    #[test]
    fn test_unmeasured_renders_transparent() {
        let mut keyframes = KeyframeRegistry::new();
        for visible in [true, false] {
            let toast = Toast::new(ToastId(1), "hi")
                .visible(visible)
                .animation(MotionPreset::SlideUp);
            let el = ToastBar::new(toast, ToastPosition::TopCenter).render(&mut keyframes);
            let bar = bar_of(&el);
            assert_eq!(bar.style.opacity, Some(0.0));
            assert!(bar.style.animation.is_none());
        }
        assert!(keyframes.is_empty());
    }

    #[test]
    fn test_top_right_scenario() {
        let mut keyframes = KeyframeRegistry::new();
        let toast = Toast::new(ToastId(1), "Saved").height(40.0);
        let el = ToastBar::new(toast, ToastPosition::TopRight)
            .offset(60.0)
            .render(&mut keyframes);

        assert_eq!(el.style.top, Some(0.0));
        assert_eq!(el.style.right, Some(0.0));
        assert!(el.style.left.is_none());
        assert_eq!(el.style.transform, Some(Transform::translate_y(60.0)));
        assert_eq!(el.style.z_index, Some(9999));
        assert_eq!(el.style.pointer_events, Some(PointerEvents::None));

        let bar = bar_of(&el);
        let anim = bar.style.animation.as_ref().unwrap();
        assert_eq!(anim.name, "tl-enter-top");
        assert_eq!(anim.duration_ms, 350);
        // Starts above its resting place and moves down
        assert_eq!(anim.first().unwrap().transform.translation().1, -80.0);
        assert_eq!(bar.style.pointer_events, Some(PointerEvents::Initial));
        assert_eq!(keyframes.len(), 1);
    }

    #[test]
    fn test_bottom_left_slide_left_exit_scenario() {
        let mut keyframes = KeyframeRegistry::new();
        let toast = Toast::new(ToastId(2), "Bye")
            .height(50.0)
            .visible(false)
            .animation(MotionPreset::SlideLeft);
        let el = ToastBar::new(toast, ToastPosition::BottomLeft)
            .offset(20.0)
            .render(&mut keyframes);

        assert_eq!(el.style.transform, Some(Transform::translate_y(-20.0)));
        assert!(el.style.z_index.is_none());

        let bar = bar_of(&el);
        assert_eq!(bar.style.pointer_events, Some(PointerEvents::None));
        let anim = bar.style.animation.as_ref().unwrap();
        assert_eq!(anim.duration_ms, 800);
        let end = anim.last().unwrap();
        assert_eq!(end.transform.to_css(), "translate3d(300px,0,-1px) scale(.5)");
        assert_eq!(end.opacity, 0.0);
    }

    #[test]
    fn test_caller_style_and_class_win() {
        let mut keyframes = KeyframeRegistry::new();
        let toast = Toast::new(ToastId(1), "hi")
            .height(40.0)
            .class_name("mine")
            .style(style().opacity(0.5).pointer_events(PointerEvents::Auto));
        let el = ToastBar::new(toast, ToastPosition::TopCenter).render(&mut keyframes);
        let bar = bar_of(&el);
        assert!(bar.has_class("mine"));
        assert_eq!(bar.style.opacity, Some(0.5));
        assert_eq!(bar.style.pointer_events, Some(PointerEvents::Auto));
        assert!(bar.style.animation.is_some());
    }

    #[test]
    fn test_message_region() {
        let mut keyframes = KeyframeRegistry::new();
        let toast = Toast::computed(ToastId(3), |t: &Toast| format!("{} left", t.id.0).into())
            .role("alert")
            .aria_live("assertive");
        let el = ToastBar::new(toast, ToastPosition::TopCenter).render(&mut keyframes);
        let message = el.find_by_class("tl-toast-message").unwrap();
        assert_eq!(message.text_content(), "3 left");
        assert_eq!(message.attribute("role"), Some("alert"));
        assert_eq!(message.attribute("aria-live"), Some("assertive"));
    }

    #[test]
    fn test_icon_precedes_message() {
        let mut keyframes = KeyframeRegistry::new();
        let toast = Toast::new(ToastId(1), "done").toast_type(ToastType::Success);
        let el = ToastBar::new(toast, ToastPosition::TopCenter).render(&mut keyframes);
        let bar = bar_of(&el);
        assert_eq!(bar.children.len(), 2);
        assert!(bar.children[0].has_class("tl-indicator"));
        assert!(bar.children[1].has_class("tl-toast-message"));

        let toast = Toast::new(ToastId(1), "plain");
        let el = ToastBar::new(toast, ToastPosition::TopCenter).render(&mut keyframes);
        assert_eq!(bar_of(&el).children.len(), 1);
    }

    #[test]
    fn test_height_reported_once_after_paint() {
        let mut surface = surface();
        let mut frames = FrameQueue::new();
        let mut keyframes = KeyframeRegistry::new();
        let (reports, on_height) = recorder();

        let bar = ToastBar::new(Toast::new(ToastId(1), "hi"), ToastPosition::TopCenter);
        let mounted = bar.mount(&mut surface, &mut frames, &mut keyframes, on_height);

        // Nothing is read during render
        assert!(reports.borrow().is_empty());
        assert_eq!(frames.pending_count(), 1);

        frames.commit_frame(&mut surface);
        assert_eq!(*reports.borrow(), vec![40.0]);

        frames.commit_frame(&mut surface);
        assert_eq!(reports.borrow().len(), 1);
        assert!(surface.is_attached(mounted.node()));
    }

    #[test]
    fn test_update_never_remeasures() {
        let mut surface = surface();
        let mut frames = FrameQueue::new();
        let mut keyframes = KeyframeRegistry::new();
        let (reports, on_height) = recorder();

        let toast = Toast::new(ToastId(1), "hi");
        let mut mounted = ToastBar::new(toast.clone(), ToastPosition::TopCenter).mount(
            &mut surface,
            &mut frames,
            &mut keyframes,
            on_height,
        );
        frames.commit_frame(&mut surface);

        let measured = ToastBar::new(toast.height(40.0), ToastPosition::TopCenter).offset(48.0);
        assert!(mounted.update(measured, &mut surface, &mut keyframes));
        assert_eq!(frames.pending_count(), 0);
        assert_eq!(reports.borrow().len(), 1);

        let el = surface.get(mounted.node()).unwrap();
        assert_eq!(el.style.transform, Some(Transform::translate_y(48.0)));
        assert!(bar_of(el).style.animation.is_some());
    }

    #[test]
    fn test_no_report_after_unmount() {
        let mut surface = surface();
        let mut frames = FrameQueue::new();
        let mut keyframes = KeyframeRegistry::new();
        let (reports, on_height) = recorder();

        let mounted = ToastBar::new(Toast::new(ToastId(1), "hi"), ToastPosition::TopCenter)
            .mount(&mut surface, &mut frames, &mut keyframes, on_height);
        assert!(mounted.unmount(&mut surface).is_some());

        assert_eq!(frames.commit_frame(&mut surface), 0);
        assert!(reports.borrow().is_empty());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_detached_node_is_not_measured() {
        let mut surface = surface();
        let mut frames = FrameQueue::new();
        let mut keyframes = KeyframeRegistry::new();
        let (reports, on_height) = recorder();

        let mounted = ToastBar::new(Toast::new(ToastId(1), "hi"), ToastPosition::TopCenter)
            .mount(&mut surface, &mut frames, &mut keyframes, on_height);
        surface.detach(mounted.node());

        frames.commit_frame(&mut surface);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_phases() {
        let bar = ToastBar::new(Toast::new(ToastId(1), "hi"), ToastPosition::TopCenter);
        assert_eq!(bar.phase(0.0), ToastPhase::Unmeasured);
        assert!(bar.sample(0.0).is_none());

        let bar = ToastBar::new(bar.toast.height(40.0), ToastPosition::TopCenter);
        assert_eq!(bar.phase(100.0), ToastPhase::Entering);
        assert_eq!(bar.phase(350.0), ToastPhase::Visible);
        assert_eq!(bar.sample(1000.0).unwrap().opacity, 1.0);

        let bar = ToastBar::new(bar.toast.visible(false), ToastPosition::TopCenter);
        assert_eq!(bar.phase(0.0), ToastPhase::Exiting);
        assert_eq!(bar.sample(800.0).unwrap().opacity, 0.0);
    }

    #[test]
    fn test_stylesheet_includes_registered_keyframes() {
        let mut keyframes = KeyframeRegistry::new();
        assert_eq!(stylesheet(&keyframes), TOAST_STYLESHEET);

        let toast = Toast::new(ToastId(1), "hi").height(40.0);
        ToastBar::new(toast.clone(), ToastPosition::BottomCenter).render(&mut keyframes);
        ToastBar::new(toast, ToastPosition::BottomRight).render(&mut keyframes);

        let css = stylesheet(&keyframes);
        assert!(css.starts_with(".tl-toast-bar {"));
        assert_eq!(css.matches("@keyframes tl-enter-bottom").count(), 1);
    }
}
