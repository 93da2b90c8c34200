//! Keyframe registry
//!
//! Generated keyframe animations are identified by their parameter tuple
//! ([`MotionKey`]). The registry stores each distinct tuple once and renders
//! every registered definition as a stylesheet, so any number of toasts
//! sharing a motion share one `@keyframes` rule.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::keyframe::KeyframeAnimation;
use crate::presets::MotionKey;

new_key_type! {
    /// Handle to a registered keyframe animation
    pub struct KeyframeId;
}

/// Deduplicating store of generated keyframe animations
#[derive(Default)]
pub struct KeyframeRegistry {
    definitions: SlotMap<KeyframeId, KeyframeAnimation>,
    index: FxHashMap<MotionKey, KeyframeId>,
}

impl KeyframeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the animation for `key`, generating it on first use
    pub fn register(&mut self, key: MotionKey) -> KeyframeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let animation = key.animation();
        tracing::trace!(name = %animation.name, "registering keyframes");
        let id = self.definitions.insert(animation);
        self.index.insert(key, id);
        id
    }

    /// Look up a key without registering it
    pub fn lookup(&self, key: &MotionKey) -> Option<KeyframeId> {
        self.index.get(key).copied()
    }

    pub fn get(&self, id: KeyframeId) -> Option<&KeyframeAnimation> {
        self.definitions.get(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All registered `@keyframes` rules, in registration order
    pub fn stylesheet(&self) -> String {
        let mut rules: Vec<_> = self.definitions.iter().collect();
        rules.sort_by_key(|(id, _)| *id);
        rules
            .into_iter()
            .map(|(_, animation)| animation.css_rule())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop every registered definition
    pub fn clear(&mut self) {
        // A fresh map keeps ids increasing in registration order
        self.definitions = SlotMap::with_key();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{MotionPhase, MotionPreset, MotionTrack, VerticalEdge};

    fn key(phase: MotionPhase, track: MotionTrack) -> MotionKey {
        MotionKey::new(phase, track)
    }

    #[test]
    fn test_register_dedups_by_key() {
        let mut registry = KeyframeRegistry::new();
        let top = MotionTrack::Vertical(VerticalEdge::Top);

        let a = registry.register(key(MotionPhase::Enter, top));
        let b = registry.register(key(MotionPhase::Enter, top));
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);

        let c = registry.register(key(MotionPhase::Exit, top));
        assert_ne!(a, c);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_does_not_register() {
        let mut registry = KeyframeRegistry::new();
        let k = key(
            MotionPhase::Enter,
            MotionTrack::Preset(MotionPreset::SlideUp),
        );
        assert!(registry.lookup(&k).is_none());
        assert!(registry.is_empty());

        let id = registry.register(k);
        assert_eq!(registry.lookup(&k), Some(id));
        assert_eq!(registry.get(id).unwrap().name, "tl-enter-slide-up");
    }

    #[test]
    fn test_stylesheet_lists_each_rule_once() {
        let mut registry = KeyframeRegistry::new();
        let bottom = MotionTrack::Vertical(VerticalEdge::Bottom);
        registry.register(key(MotionPhase::Enter, bottom));
        registry.register(key(MotionPhase::Exit, bottom));
        registry.register(key(MotionPhase::Enter, bottom));

        let css = registry.stylesheet();
        assert_eq!(css.matches("@keyframes tl-enter-bottom").count(), 1);
        assert_eq!(css.matches("@keyframes tl-exit-bottom").count(), 1);
        assert!(css.find("tl-enter-bottom") < css.find("tl-exit-bottom"));
    }

    #[test]
    fn test_clear() {
        let mut registry = KeyframeRegistry::new();
        registry.register(key(
            MotionPhase::Exit,
            MotionTrack::Vertical(VerticalEdge::Top),
        ));
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.stylesheet(), "");
    }
}
