//! Deferred scene merges.
//!
//! Asynchronous library loads convert their scenes on worker threads, but
//! merging into a live scene must happen on the game thread. Workers push
//! their status here when conversion is done; the game thread drains the
//! queue once per frame, or all at once when finalizing.

use parking_lot::Mutex;

use crate::converter::status::{LibLoadHandle, LibLoadStatus};

#[derive(Debug, Default)]
pub struct MergeQueue {
    pending: Mutex<Vec<LibLoadHandle>>,
}

impl MergeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a load whose scenes are converted and ready to merge.
    pub fn push(&self, status: LibLoadHandle) {
        log::debug!("Queued library '{}' for merge", status.lock().path());
        self.pending.lock().push(status);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Merges every queued load and marks it finished.
    ///
    /// `merge` receives the merge target and one converted scene at a time.
    /// Failed loads are logged and skipped without stopping the drain.
    /// Returns the number of loads merged successfully.
    pub fn merge_pending<F>(&self, mut merge: F) -> usize
    where
        F: FnMut(Option<&str>, &str),
    {
        // Take the queue first so workers can keep pushing while we merge.
        let drained = std::mem::take(&mut *self.pending.lock());
        let mut merged = 0;

        for handle in drained {
            let mut status = handle.lock();
            if let Some(reason) = status.error() {
                log::warn!("Skipping merge of library '{}': {reason}", status.path());
                continue;
            }

            merge_status(&mut status, &mut merge);
            merged += 1;
        }

        merged
    }
}

fn merge_status<F>(status: &mut LibLoadStatus, merge: &mut F)
where
    F: FnMut(Option<&str>, &str),
{
    let scenes = status.take_pending_scenes();
    for scene in &scenes {
        merge(status.merge_target(), scene);
    }
    log::debug!(
        "Merged {} scene(s) from library '{}'",
        scenes.len(),
        status.path()
    );
    status.finish();
}
