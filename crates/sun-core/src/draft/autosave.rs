//! Debounced autosave of the wizard draft.
//!
//! Each edit reschedules a single pending write. The write fires once the
//! quiet period passes without another edit, and it is dropped if cancelled
//! first. Cancellation is guaranteed: once [`Autosaver::cancel`] returns, the
//! cancelled write can no longer reach storage, even if its timer already
//! fired on another worker thread.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use jiff::Timestamp;
use log::{debug, error, trace};
use tokio::task::{self, JoinHandle};

use super::DraftStore;
use crate::models::Blueprint;

/// Bookkeeping shared between the autosaver and its timer task.
#[derive(Debug, Default)]
struct SaveState {
    /// Generation of the only write still allowed to land
    generation: u64,
    /// Generation of the last write that reached storage
    written: u64,
    last_saved: Option<Timestamp>,
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    snapshot: Blueprint,
    handle: JoinHandle<()>,
}

/// Cancellable, debounced writer for a [`DraftStore`].
#[derive(Debug)]
pub struct Autosaver {
    drafts: DraftStore,
    quiet: Duration,
    armed: bool,
    pending: Option<Pending>,
    state: Arc<Mutex<SaveState>>,
}

fn lock(state: &Mutex<SaveState>) -> MutexGuard<'_, SaveState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stamps `lastUpdated` and writes the snapshot. Caller holds the state lock.
fn write(drafts: &DraftStore, mut snapshot: Blueprint, state: &mut SaveState, generation: u64) {
    let now = Timestamp::now();
    snapshot.meta.last_updated = now;
    if drafts.save(&snapshot) {
        state.written = generation;
        state.last_saved = Some(now);
    }
}

impl Autosaver {
    /// Creates a disarmed autosaver; nothing is written until [`arm`] is
    /// called.
    ///
    /// [`arm`]: Autosaver::arm
    pub fn new(drafts: DraftStore, quiet: Duration) -> Self {
        Self {
            drafts,
            quiet,
            armed: false,
            pending: None,
            state: Arc::new(Mutex::new(SaveState::default())),
        }
    }

    /// Allows writes. The wizard arms the autosaver once the initial draft
    /// load has finished, so defaults never overwrite an unrestored draft.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Replaces any pending write with one for `snapshot`.
    ///
    /// Must be called within a tokio runtime. Returns `false` (and schedules
    /// nothing) while disarmed.
    pub fn schedule(&mut self, snapshot: Blueprint) -> bool {
        if !self.armed {
            trace!("Autosave skipped: initial load not finished");
            return false;
        }

        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.generation
        };
        if let Some(previous) = self.pending.take() {
            previous.handle.abort();
        }

        let drafts = self.drafts.clone();
        let state = Arc::clone(&self.state);
        let quiet = self.quiet;
        let task_snapshot = snapshot.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // The generation check and the write share one lock hold, so a
            // cancel that wins the lock first always suppresses the write.
            let saved = task::spawn_blocking(move || {
                let mut state = lock(&state);
                if state.generation != generation {
                    return;
                }
                debug!("Autosaving wizard draft");
                write(&drafts, task_snapshot, &mut state, generation);
            })
            .await;
            if let Err(e) = saved {
                error!("Autosave task failed: {e}");
            }
        });

        self.pending = Some(Pending {
            generation,
            snapshot,
            handle,
        });
        true
    }

    /// Drops the pending write, if any. Returns whether one was still
    /// waiting to land.
    pub fn cancel(&mut self) -> bool {
        let mut state = lock(&self.state);
        state.generation += 1;
        match self.pending.take() {
            Some(pending) => {
                pending.handle.abort();
                state.written != pending.generation
            }
            None => false,
        }
    }

    /// Writes the pending snapshot now instead of waiting for the timer.
    /// Returns whether a write happened.
    pub async fn flush(&mut self) -> bool {
        let Some(Pending {
            generation,
            snapshot,
            handle,
        }) = self.pending.take()
        else {
            return false;
        };
        handle.abort();

        let drafts = self.drafts.clone();
        let state = Arc::clone(&self.state);
        let flushed = task::spawn_blocking(move || {
            let mut state = lock(&state);
            if state.written == generation {
                return false;
            }
            state.generation += 1;
            write(&drafts, snapshot, &mut state, generation);
            state.written == generation
        })
        .await;

        flushed.unwrap_or_else(|e| {
            error!("Autosave flush failed: {e}");
            false
        })
    }

    /// Whether a scheduled write has not reached storage yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| lock(&self.state).written != p.generation)
    }

    /// When the last autosave write landed.
    pub fn last_saved(&self) -> Option<Timestamp> {
        lock(&self.state).last_saved
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        draft::{KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY},
        models::BlueprintEdit,
    };

    const QUIET: Duration = Duration::from_secs(2);

    fn autosaver() -> (DraftStore, Autosaver) {
        let drafts = DraftStore::new(Arc::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
        let mut saver = Autosaver::new(drafts.clone(), QUIET);
        saver.arm();
        (drafts, saver)
    }

    fn named(name: &str) -> Blueprint {
        let mut blueprint = Blueprint::default();
        blueprint.apply(BlueprintEdit::ProjectName(name.to_string()));
        blueprint
    }

    /// Lets spawned timer tasks observe the advanced clock.
    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    /// Waits for the pending write to come back from the blocking pool.
    async fn until_saved(saver: &Autosaver) {
        for _ in 0..1000 {
            if !saver.is_pending() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("autosave never landed");
    }

    /// Records which thread performed each write.
    #[derive(Default)]
    struct ThreadRecordingStore {
        inner: MemoryStore,
        writers: std::sync::Mutex<Vec<std::thread::ThreadId>>,
    }

    impl KeyValueStore for ThreadRecordingStore {
        fn get(&self, key: &str) -> crate::Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> crate::Result<()> {
            self.writers.lock().unwrap().push(std::thread::current().id());
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> crate::Result<()> {
            self.inner.remove(key)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_waits_for_quiet_period() {
        let (drafts, mut saver) = autosaver();
        assert!(saver.schedule(named("Alpha")));

        tokio::time::sleep(QUIET - Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(drafts.load(), None);
        assert!(saver.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        until_saved(&saver).await;
        assert_eq!(drafts.load().unwrap().identity.project_name, "Alpha");
        assert!(!saver.is_pending());
        assert!(saver.last_saved().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_coalesce_into_last_snapshot() {
        let (drafts, mut saver) = autosaver();
        saver.schedule(named("A"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.schedule(named("AB"));
        tokio::time::sleep(Duration::from_secs(1)).await;
        saver.schedule(named("ABC"));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        settle().await;
        assert_eq!(drafts.load(), None, "no write inside the quiet window");

        tokio::time::sleep(Duration::from_secs(1)).await;
        until_saved(&saver).await;
        assert_eq!(drafts.load().unwrap().identity.project_name, "ABC");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_write() {
        let (drafts, mut saver) = autosaver();
        saver.schedule(named("Doomed"));
        assert!(saver.cancel());

        tokio::time::sleep(QUIET * 2).await;
        settle().await;
        assert_eq!(drafts.load(), None);
        assert!(!saver.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_autosaver_never_writes() {
        let drafts = DraftStore::new(Arc::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
        let mut saver = Autosaver::new(drafts.clone(), QUIET);
        assert!(!saver.schedule(named("Early")));

        tokio::time::sleep(QUIET * 2).await;
        settle().await;
        assert_eq!(drafts.load(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_writes_immediately_once() {
        let (drafts, mut saver) = autosaver();
        saver.schedule(named("Now"));

        assert!(saver.flush().await);
        assert_eq!(drafts.load().unwrap().identity.project_name, "Now");
        assert!(!saver.flush().await);

        drafts.clear();
        tokio::time::sleep(QUIET * 2).await;
        settle().await;
        assert_eq!(drafts.load(), None, "flushed timer must not fire again");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_after_timer_fired_is_noop() {
        let (drafts, mut saver) = autosaver();
        saver.schedule(named("Fired"));
        tokio::time::sleep(QUIET + Duration::from_millis(10)).await;
        until_saved(&saver).await;
        drafts.clear();

        assert!(!saver.flush().await);
        assert_eq!(drafts.load(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_write() {
        let (drafts, mut saver) = autosaver();
        saver.schedule(named("Torn down"));
        drop(saver);

        tokio::time::sleep(QUIET * 2).await;
        settle().await;
        assert_eq!(drafts.load(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_stamps_last_updated() {
        let (drafts, mut saver) = autosaver();
        let mut snapshot = named("Stamped");
        snapshot.meta.last_updated = Timestamp::UNIX_EPOCH;
        saver.schedule(snapshot);

        saver.flush().await;
        let stored = drafts.load().unwrap();
        assert_ne!(stored.meta.last_updated, Timestamp::UNIX_EPOCH);
        assert_eq!(Some(stored.meta.last_updated), saver.last_saved());
    }

    #[tokio::test(start_paused = true)]
    async fn test_writes_run_off_the_async_thread() {
        let store = Arc::new(ThreadRecordingStore::default());
        let drafts = DraftStore::new(store.clone(), DEFAULT_STORAGE_KEY);
        let mut saver = Autosaver::new(drafts, QUIET);
        saver.arm();
        let runtime_thread = std::thread::current().id();

        saver.schedule(named("Timer"));
        tokio::time::sleep(QUIET + Duration::from_millis(1)).await;
        until_saved(&saver).await;

        saver.schedule(named("Flushed"));
        assert!(saver.flush().await);

        let writers = store.writers.lock().unwrap();
        assert_eq!(writers.len(), 2);
        assert!(writers.iter().all(|id| *id != runtime_thread));
    }
}
