//! Toast stack coordinator
//!
//! The `Toaster` owns the mounted toast bars of a screen and keeps them from
//! overlapping. The caller hands it the current list of toast snapshots,
//! newest first, on every store update; the toaster mounts new toasts,
//! re-renders existing ones at their new offsets and unmounts the ones that
//! disappeared.
//!
//! Offsets depend on measured heights, which arrive one frame after mount.
//! Each report is recorded and raises the restack flag; the caller checks
//! [`Toaster::take_restack`] after committing a frame and syncs again so the
//! siblings move to make room.
//!
//! Dismissal timers and the exit-then-remove delay belong to the caller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use toastline_animation::KeyframeRegistry;
use toastline_core::FrameQueue;

use crate::config::ToasterConfig;
use crate::element_style::ElementStyle;
use crate::position::ToastPosition;
use crate::surface::RenderSurface;
use crate::widgets::toast::{Toast, ToastId};
use crate::widgets::toast_bar::{stylesheet, MountedToastBar, ToastBar};

type HeightMap = Rc<RefCell<FxHashMap<ToastId, f32>>>;

pub struct Toaster {
    config: ToasterConfig,
    keyframes: KeyframeRegistry,
    mounted: IndexMap<ToastId, MountedToastBar>,
    heights: HeightMap,
    restack: Rc<Cell<bool>>,
}

impl Toaster {
    pub fn new(config: ToasterConfig) -> Self {
        Self {
            config,
            keyframes: KeyframeRegistry::new(),
            mounted: IndexMap::new(),
            heights: Rc::new(RefCell::new(FxHashMap::default())),
            restack: Rc::new(Cell::new(false)),
        }
    }

    pub fn config(&self) -> &ToasterConfig {
        &self.config
    }

    pub fn keyframes(&self) -> &KeyframeRegistry {
        &self.keyframes
    }

    /// Stylesheet covering every bar rendered so far
    pub fn stylesheet(&self) -> String {
        stylesheet(&self.keyframes)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    pub fn is_mounted(&self, id: ToastId) -> bool {
        self.mounted.contains_key(&id)
    }

    pub fn mounted(&self, id: ToastId) -> Option<&MountedToastBar> {
        self.mounted.get(&id)
    }

    /// Last height reported for a toast
    pub fn height_of(&self, id: ToastId) -> Option<f32> {
        self.heights.borrow().get(&id).copied()
    }

    /// Check and clear whether a height arrived since the last call
    pub fn take_restack(&self) -> bool {
        self.restack.replace(false)
    }

    /// Bring the mounted bars in line with `toasts`
    ///
    /// Snapshots without a height pick up the one recorded for their id, so
    /// callers do not have to feed measurements back into their store.
    pub fn sync<S>(&mut self, toasts: &[Toast], surface: &mut S, frames: &mut FrameQueue<S>)
    where
        S: RenderSurface + 'static,
    {
        let snapshots = self.with_recorded_heights(toasts);

        let stale: Vec<ToastId> = self
            .mounted
            .keys()
            .filter(|id| !snapshots.iter().any(|t| t.id == **id))
            .copied()
            .collect();
        for id in stale {
            if let Some(mounted) = self.mounted.shift_remove(&id) {
                mounted.unmount(surface);
            }
            self.heights.borrow_mut().remove(&id);
        }

        for snapshot in &snapshots {
            let offset = self.offset_in(&snapshots, snapshot);
            let position = snapshot.effective_position(self.config.position);
            let bar = ToastBar::new(snapshot.clone(), position)
                .offset(offset)
                .z_index(self.config.z_index);

            match self.mounted.get_mut(&snapshot.id) {
                Some(mounted) => {
                    if !mounted.update(bar, surface, &mut self.keyframes) {
                        tracing::warn!(id = %snapshot.id, "toast bar node missing from surface");
                    }
                }
                None => {
                    let on_height = self.height_recorder(snapshot.id);
                    let mounted = bar.mount(surface, frames, &mut self.keyframes, on_height);
                    self.mounted.insert(snapshot.id, mounted);
                }
            }
        }

        tracing::trace!(mounted = self.mounted.len(), "synced toaster");
    }

    /// Unmount every bar
    pub fn clear<S: RenderSurface>(&mut self, surface: &mut S) {
        for (_, mounted) in self.mounted.drain(..) {
            mounted.unmount(surface);
        }
        self.heights.borrow_mut().clear();
        self.restack.set(false);
    }

    /// Stack offset of toast `id` among `toasts`
    ///
    /// Returns 0 for ids that are not listed.
    pub fn offset_for(&self, id: ToastId, toasts: &[Toast]) -> f32 {
        let snapshots = self.with_recorded_heights(toasts);
        snapshots
            .iter()
            .find(|t| t.id == id)
            .map_or(0.0, |target| self.offset_in(&snapshots, target))
    }

    /// Style of the positioning layer toast `id` would get
    pub fn position_style_for(&self, id: ToastId, toasts: &[Toast]) -> Option<ElementStyle> {
        let toast = toasts.iter().find(|t| t.id == id)?;
        let bar = ToastBar::new(toast.clone(), toast.effective_position(self.config.position))
            .offset(self.offset_for(id, toasts));
        Some(bar.position_style())
    }

    fn with_recorded_heights(&self, toasts: &[Toast]) -> Vec<Toast> {
        let heights = self.heights.borrow();
        toasts
            .iter()
            .map(|toast| match (toast.height, heights.get(&toast.id)) {
                (None, Some(&height)) => toast.clone().height(height),
                _ => toast.clone(),
            })
            .collect()
    }

    /// Sum of `height + gutter` over the visible, measured toasts stacked
    /// ahead of `target` at the same anchor
    fn offset_in(&self, toasts: &[Toast], target: &Toast) -> f32 {
        let position = self.effective_position(target);
        let relevant: Vec<&Toast> = toasts
            .iter()
            .filter(|t| self.effective_position(t) == position && t.is_measured())
            .collect();

        let Some(index) = relevant.iter().position(|t| t.id == target.id) else {
            return 0.0;
        };
        let before = relevant[..index].iter().filter(|t| t.visible).count();

        let visible: Vec<&Toast> = relevant.into_iter().filter(|t| t.visible).collect();
        let ahead: &[&Toast] = if self.config.reverse_order {
            visible.get(before + 1..).unwrap_or(&[])
        } else {
            &visible[..before]
        };

        ahead
            .iter()
            .map(|t| t.height.unwrap_or(0.0) + self.config.gutter)
            .sum()
    }

    fn effective_position(&self, toast: &Toast) -> ToastPosition {
        toast.effective_position(self.config.position)
    }

    fn height_recorder(&self, id: ToastId) -> impl FnOnce(f32) + 'static {
        let heights = Rc::clone(&self.heights);
        let restack = Rc::clone(&self.restack);
        move |height| {
            heights.borrow_mut().insert(id, height);
            restack.set(true);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(ToasterConfig::default())
    }
}
