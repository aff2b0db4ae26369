//! Background update check.
//!
//! The check runs on its own thread while the main pipeline works. The
//! caller collects the answer at the end with a bounded wait, so a slow
//! network never delays the run by more than that wait.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::{UpdateChecker, UpdateInfo};

/// Longest time [`BackgroundCheck::result`] blocks by default.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(3500);

/// Handle to an in-flight update check.
pub struct BackgroundCheck {
    slot: Arc<Mutex<Option<UpdateInfo>>>,
    done: Option<Receiver<()>>,
}

impl BackgroundCheck {
    /// Start checking on a background thread.
    pub fn spawn(checker: UpdateChecker) -> Self {
        let slot = Arc::new(Mutex::new(None));
        let (tx, rx) = mpsc::channel();

        let thread_slot = Arc::clone(&slot);
        let spawned = thread::Builder::new()
            .name("update-check".to_string())
            .spawn(move || {
                let info = checker.check();
                if let Ok(mut slot) = thread_slot.lock() {
                    *slot = info;
                }
                let _ = tx.send(());
            });

        match spawned {
            Ok(_) => Self {
                slot,
                done: Some(rx),
            },
            Err(e) => {
                tracing::debug!("Could not start update check: {}", e);
                Self::disabled()
            }
        }
    }

    /// A check that never reports anything.
    pub fn disabled() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            done: None,
        }
    }

    /// Wait up to `wait` for the check, then return whatever it produced.
    pub fn result(self, wait: Duration) -> Option<UpdateInfo> {
        let done = self.done?;

        if done.recv_timeout(wait).is_err() {
            tracing::debug!("Update check did not finish in time");
        }

        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use httpmock::prelude::*;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn disabled_reports_nothing() {
        assert!(BackgroundCheck::disabled().result(DEFAULT_WAIT).is_none());
    }

    #[test]
    fn collects_result() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest");
            then.status(200).body(r#"{"tag_name": "v99.0.0"}"#);
        });
        let temp = TempDir::new().unwrap();
        let checker = UpdateChecker::new(CacheStore::new(temp.path()), Duration::from_secs(60))
            .with_releases_url(server.url("/latest"));

        let info = BackgroundCheck::spawn(checker).result(DEFAULT_WAIT).unwrap();

        assert_eq!(info.latest, "99.0.0");
        assert!(info.update_available);
    }

    #[test]
    fn slow_check_is_abandoned() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest");
            then.status(200)
                .delay(Duration::from_secs(2))
                .body(r#"{"tag_name": "v99.0.0"}"#);
        });
        let temp = TempDir::new().unwrap();
        let checker = UpdateChecker::new(CacheStore::new(temp.path()), Duration::from_secs(60))
            .with_releases_url(server.url("/latest"));

        let started = Instant::now();
        let result = BackgroundCheck::spawn(checker).result(Duration::from_millis(100));

        assert!(result.is_none());
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
