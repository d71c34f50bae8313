//! Library load status shared between the loader and the game thread.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bitflags::bitflags;
use parking_lot::Mutex;

bitflags! {
    /// Options accepted when linking an external asset file.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LibLoadOptions: u16 {
        /// Also convert the file's actions/animation data.
        const LOAD_ACTIONS = 1;
        /// Log per-step conversion details.
        const VERBOSE      = 2;
        /// Allow scripts stored in the file to run.
        const LOAD_SCRIPTS = 4;
        /// Convert on a worker pool and merge later.
        const ASYNC        = 8;
    }
}

/// Progress and outcome of one library link.
#[derive(Debug)]
pub struct LibLoadStatus {
    path: String,
    options: LibLoadOptions,
    /// Scene the converted content is merged into.
    merge_target: Option<String>,
    /// Converted scenes waiting to be merged into `merge_target`.
    pending_scenes: Vec<String>,
    progress: f32,
    finished: bool,
    error: Option<String>,
    started: Instant,
    load_time: Option<Duration>,
}

/// Shared handle to a status; the loader writes, the caller polls.
pub type LibLoadHandle = Arc<Mutex<LibLoadStatus>>;

impl LibLoadStatus {
    pub fn new(path: impl Into<String>, options: LibLoadOptions) -> Self {
        Self {
            path: path.into(),
            options,
            merge_target: None,
            pending_scenes: Vec::new(),
            progress: 0.0,
            finished: false,
            error: None,
            started: Instant::now(),
            load_time: None,
        }
    }

    /// Wraps the status in a shareable handle.
    #[must_use]
    pub fn into_handle(self) -> LibLoadHandle {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn with_merge_target(mut self, scene: impl Into<String>) -> Self {
        self.merge_target = Some(scene.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> LibLoadOptions {
        self.options
    }

    #[inline]
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.options.contains(LibLoadOptions::ASYNC)
    }

    #[inline]
    #[must_use]
    pub fn merge_target(&self) -> Option<&str> {
        self.merge_target.as_deref()
    }

    pub fn add_pending_scene(&mut self, scene: impl Into<String>) {
        self.pending_scenes.push(scene.into());
    }

    #[must_use]
    pub fn pending_scenes(&self) -> &[String] {
        &self.pending_scenes
    }

    pub fn take_pending_scenes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_scenes)
    }

    /// Load progress in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Message of a failed link.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks the load complete and records how long it took.
    pub fn finish(&mut self) {
        self.progress = 1.0;
        self.finished = true;
        self.load_time = Some(self.started.elapsed());
    }

    /// Marks the load failed. A failed load is finished but merges nothing.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.error = Some(reason.into());
        self.pending_scenes.clear();
        self.finish();
    }

    /// Wall time from creation to [`finish`](Self::finish).
    #[must_use]
    pub fn load_time(&self) -> Option<Duration> {
        self.load_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        let mut status = LibLoadStatus::new("//props.blend", LibLoadOptions::empty());
        status.set_progress(1.7);
        assert_eq!(status.progress(), 1.0);
        status.set_progress(-2.0);
        assert_eq!(status.progress(), 0.0);
    }

    #[test]
    fn test_fail_finishes_and_drops_scenes() {
        let mut status = LibLoadStatus::new("//props.blend", LibLoadOptions::ASYNC);
        status.add_pending_scene("SCProps");
        status.fail("not a blend file");

        assert!(status.is_finished());
        assert!(status.pending_scenes().is_empty());
        assert_eq!(status.error(), Some("not a blend file"));
        assert!(status.load_time().is_some());
    }
}
