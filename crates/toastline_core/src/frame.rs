//! After-paint task queue
//!
//! Some work must not happen while a frame is being built: reading layout
//! during render returns stale (often zero) geometry. `FrameQueue` holds
//! single-shot tasks that the host runs by calling [`FrameQueue::commit_frame`]
//! once the frame has been painted.
//!
//! Every task is paired with a [`LivenessGuard`]. The guard is a weak
//! reference to a [`LivenessToken`] owned by whatever scheduled the task;
//! dropping the token turns the task into a no-op.
//!
//! # Example
//!
//! ```rust
//! use toastline_core::frame::{FrameQueue, LivenessToken};
//!
//! let mut frames: FrameQueue<Vec<String>> = FrameQueue::new();
//! let token = LivenessToken::new();
//!
//! frames.after_paint(token.guard(), |log: &mut Vec<String>| {
//!     log.push("measured".to_string())
//! });
//!
//! let mut log = Vec::new();
//! frames.commit_frame(&mut log);
//! assert_eq!(log, vec!["measured"]);
//! ```

use std::rc::{Rc, Weak};

/// Owner side of a liveness check
///
/// Held by a mounted component for as long as it is mounted.
#[derive(Debug, Default)]
pub struct LivenessToken(Rc<()>);

impl LivenessToken {
    pub fn new() -> Self {
        Self(Rc::new(()))
    }

    /// Create a guard observing this token
    pub fn guard(&self) -> LivenessGuard {
        LivenessGuard(Rc::downgrade(&self.0))
    }
}

/// Observer side of a liveness check
#[derive(Clone, Debug)]
pub struct LivenessGuard(Weak<()>);

impl LivenessGuard {
    /// Check if the owning token still exists
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

struct QueuedTask<C> {
    guard: LivenessGuard,
    task: Box<dyn FnOnce(&mut C)>,
}

/// Queue of single-shot tasks run after the next painted frame
pub struct FrameQueue<C> {
    pending: Vec<QueuedTask<C>>,
    frame: u64,
}

impl<C> FrameQueue<C> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            frame: 0,
        }
    }

    /// Queue a task to run after the next frame is painted
    pub fn after_paint<F>(&mut self, guard: LivenessGuard, task: F)
    where
        F: FnOnce(&mut C) + 'static,
    {
        self.pending.push(QueuedTask {
            guard,
            task: Box::new(task),
        });
    }

    /// Number of tasks waiting for the next frame
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of frames committed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Signal that a frame has been painted and run the queued tasks
    ///
    /// Tasks queued while this runs are deferred to the following frame.
    /// Returns the number of tasks that actually ran.
    pub fn commit_frame(&mut self, cx: &mut C) -> usize {
        self.frame += 1;
        let tasks = std::mem::take(&mut self.pending);
        let mut ran = 0;

        for queued in tasks {
            if queued.guard.is_alive() {
                (queued.task)(cx);
                ran += 1;
            } else {
                tracing::trace!(frame = self.frame, "skipping after-paint task for dropped owner");
            }
        }

        ran
    }
}

impl<C> Default for FrameQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
