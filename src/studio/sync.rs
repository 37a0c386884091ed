// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::model::ProjectState;
use crate::store::{ProjectStorage, PROJECT_STORAGE_KEY};

/// Quiet period after the last snapshot change before a durable write fires.
pub(crate) const SAVE_DEBOUNCE: Duration = Duration::from_millis(1500);

/// How long the `Saved` status stays visible before reverting to `Idle`.
pub(crate) const SAVED_STATUS_HOLD: Duration = Duration::from_millis(2000);

/// Tri-state autosave indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

/// Debounced writer of the current snapshot to durable storage.
///
/// A burst of snapshot changes collapses into a single write: each change
/// aborts the outstanding timer and starts a new one, so only the last
/// snapshot of the burst is ever written. The timer handle itself is owned by
/// the studio's locked state, which keeps it single-owner.
pub(crate) struct PersistenceSync {
    storage: Arc<dyn ProjectStorage>,
    status: watch::Sender<SaveStatus>,
    last_error: Mutex<Option<String>>,
}

impl PersistenceSync {
    pub(crate) fn new(storage: Arc<dyn ProjectStorage>) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            storage,
            status,
            last_error: Mutex::new(None),
        }
    }

    pub(crate) fn status(&self) -> SaveStatus {
        *self.status.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    pub(crate) fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .expect("save error lock poisoned")
            .clone()
    }

    /// Aborts `previous` (if any) and starts a fresh quiet-period timer for
    /// `snapshot`. Returns the new timer handle for the caller to own.
    ///
    /// The snapshot captured here is the latest by construction: any later
    /// change goes through `schedule` again and aborts this timer first.
    pub(crate) fn schedule(
        sync: &Arc<Self>,
        snapshot: ProjectState,
        previous: Option<JoinHandle<()>>,
    ) -> JoinHandle<()> {
        if let Some(handle) = previous {
            handle.abort();
        }
        sync.status.send_replace(SaveStatus::Saving);

        let sync = Arc::clone(sync);
        tokio::spawn(async move {
            tokio::time::sleep(SAVE_DEBOUNCE).await;
            match sync.write(&snapshot) {
                Ok(()) => {
                    sync.record_error(None);
                    sync.status.send_replace(SaveStatus::Saved);
                    tokio::time::sleep(SAVED_STATUS_HOLD).await;
                    sync.status.send_replace(SaveStatus::Idle);
                }
                Err(message) => {
                    // Never report Saved for a write that did not happen.
                    sync.record_error(Some(message));
                    sync.status.send_replace(SaveStatus::Idle);
                }
            }
        })
    }

    /// Aborts the outstanding timer (if any) and parks the status at `Idle`.
    /// Used when the cursor returns to the pristine snapshot and on project
    /// reset.
    pub(crate) fn cancel(&self, previous: Option<JoinHandle<()>>) {
        if let Some(handle) = previous {
            handle.abort();
        }
        self.status.send_replace(SaveStatus::Idle);
    }

    fn write(&self, snapshot: &ProjectState) -> Result<(), String> {
        let payload = serde_json::to_string(snapshot).map_err(|err| err.to_string())?;
        self.storage
            .set(PROJECT_STORAGE_KEY, &payload)
            .map_err(|err| err.to_string())
    }

    fn record_error(&self, message: Option<String>) {
        *self.last_error.lock().expect("save error lock poisoned") = message;
    }
}
