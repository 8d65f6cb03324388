//! Scheduled backups of a journal store

use crate::application::JournalStore;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

/// Runs `JournalStore::backup` on a background thread at a fixed interval.
///
/// Failures are logged and the next tick tries again. The thread stops when
/// [`BackupScheduler::stop`] is called or the scheduler is dropped.
pub struct BackupScheduler {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl BackupScheduler {
    /// Start backing up `store` to `target` every `interval`. The first
    /// backup happens one interval after start.
    pub fn start(store: Arc<JournalStore>, target: PathBuf, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            info!(
                "backup scheduler started: {} every {:?}",
                target.display(),
                interval
            );
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => run_backup(&store, &target),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            info!("backup scheduler stopped");
        });

        BackupScheduler {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Signal the background thread and wait for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Block the caller for as long as the scheduler runs.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread with `Disconnected`.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for BackupScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_backup(store: &JournalStore, target: &std::path::Path) {
    match store.backup(target) {
        Ok(count) => info!("backed up {} entries to {}", count, target.display()),
        Err(e) => warn!("backup to {} failed: {}", target.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tempfile::TempDir;

    fn wait_for(path: &std::path::Path, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if path.exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        path.exists()
    }

    #[test]
    fn test_scheduler_writes_backups() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(JournalStore::load(temp.path().join("journal.json")).unwrap());
        store.add("scheduled", vec!["t".to_string()]).unwrap();
        let target = temp.path().join("backup.json");

        let scheduler =
            BackupScheduler::start(Arc::clone(&store), target.clone(), Duration::from_millis(20));
        assert!(wait_for(&target, Duration::from_secs(5)));
        scheduler.stop();

        let restored = JournalStore::load(&target).unwrap();
        assert_eq!(restored.all(), store.all());
    }

    #[test]
    fn test_stop_before_first_tick_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(JournalStore::load(temp.path().join("journal.json")).unwrap());
        let target = temp.path().join("backup.json");

        let scheduler = BackupScheduler::start(store, target.clone(), Duration::from_secs(3600));
        scheduler.stop();

        assert!(!target.exists());
    }

    #[test]
    fn test_failures_do_not_stop_the_scheduler() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.json");
        let store = Arc::new(JournalStore::load(&path).unwrap());
        store.add("x", vec![]).unwrap();

        // Backing up onto the storage file is rejected every tick.
        let scheduler =
            BackupScheduler::start(Arc::clone(&store), path.clone(), Duration::from_millis(10));
        thread::sleep(Duration::from_millis(50));
        drop(scheduler);

        assert_eq!(JournalStore::load(&path).unwrap().len(), 1);
    }
}
