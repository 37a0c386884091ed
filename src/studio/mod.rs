// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The studio core: history, mutation intents, the single generation slot,
//! and debounced persistence, behind one outward surface.
//!
//! All mutable state sits behind a single async mutex. Every user intent and
//! the generation settlement path lock it before touching history, so a user
//! edit and a late-settling generation can never interleave inside a push.
//! The two suspension points (the awaited collaborator call and the debounce
//! timer) hold no lock.

mod active;
mod generate;
mod sync;

use std::fmt;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::history::History;
use crate::model::{starter_first_file_content, starter_project, ProjectState};
use crate::service::{
    CancelToken, ExplanationService, GenerateError, GenerationService, ServiceError,
};
use crate::store::{ProjectStorage, StorageError, PROJECT_STORAGE_KEY};

use active::resolve_active_file;
use sync::PersistenceSync;

pub use generate::GenerationState;
pub use sync::SaveStatus;

/// User-visible failures of the studio surface. None of these mutate history.
#[derive(Debug)]
pub enum StudioError {
    /// A generation was requested with an empty prompt.
    EmptyPrompt,
    /// A generation was requested while another one is pending.
    GenerationBusy,
    /// An add-file intent collided with an existing path.
    DuplicateFile { path: String },
    /// An explanation was requested for a path absent from the current
    /// snapshot.
    UnknownFile { path: String },
    Generation(ServiceError),
    Explanation(ServiceError),
    Storage(StorageError),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrompt => f.write_str("prompt must not be empty"),
            Self::GenerationBusy => f.write_str("a generation request is already pending"),
            Self::DuplicateFile { path } => write!(f, "file already exists: {path:?}"),
            Self::UnknownFile { path } => write!(f, "no such file in the current project: {path:?}"),
            Self::Generation(source) => write!(f, "generation failed: {source}"),
            Self::Explanation(source) => write!(f, "explanation failed: {source}"),
            Self::Storage(source) => write!(f, "storage failed: {source}"),
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generation(source) | Self::Explanation(source) => Some(source),
            Self::Storage(source) => Some(source),
            _ => None,
        }
    }
}

struct CoreState {
    history: History,
    active_file: String,
    /// Token of the single in-flight generation; `Some` exactly while one is
    /// pending.
    pending_generation: Option<CancelToken>,
    /// Single-owner handle of the outstanding debounce timer.
    save_timer: Option<JoinHandle<()>>,
}

struct StudioInner {
    generation: Arc<dyn GenerationService>,
    explanation: Arc<dyn ExplanationService>,
    storage: Arc<dyn ProjectStorage>,
    sync: Arc<PersistenceSync>,
    generation_state: watch::Sender<GenerationState>,
    state: Mutex<CoreState>,
}

/// Handle to the project-state engine. Cheap to clone; all clones share the
/// same state.
#[derive(Clone)]
pub struct Studio {
    inner: Arc<StudioInner>,
}

impl Studio {
    /// Opens a studio against its collaborators, restoring the last persisted
    /// snapshot or falling back to the built-in starter project when the slot
    /// is absent, unreadable, or malformed.
    ///
    /// The restored (or starter) snapshot occupies cursor 0 and is never
    /// itself persisted again.
    pub fn open(
        storage: Arc<dyn ProjectStorage>,
        generation: Arc<dyn GenerationService>,
        explanation: Arc<dyn ExplanationService>,
    ) -> Self {
        let initial = load_initial(&*storage);
        let active_file = resolve_active_file(initial.files(), "");
        let (generation_state, _) = watch::channel(GenerationState::Idle);

        Self {
            inner: Arc::new(StudioInner {
                generation,
                explanation,
                sync: Arc::new(PersistenceSync::new(Arc::clone(&storage))),
                storage,
                generation_state,
                state: Mutex::new(CoreState {
                    history: History::new(initial),
                    active_file,
                    pending_generation: None,
                    save_timer: None,
                }),
            }),
        }
    }

    // --- generation ------------------------------------------------------

    /// Sends `prompt` to the generation collaborator and, on success, commits
    /// the returned file set as a new history entry.
    ///
    /// At most one request may be pending; the UI is expected to disable
    /// input while one runs, but the check here is enforced regardless. A
    /// request cancelled via [`Studio::stop_generation`] settles without
    /// pushing, even when the collaborator call itself succeeded in the
    /// interim, and reports `Ok` because stopping is a user action rather
    /// than an error.
    pub async fn generate(&self, prompt: &str) -> Result<(), StudioError> {
        let prompt = prompt.trim().to_owned();

        let (token, existing) = {
            let mut state = self.inner.state.lock().await;
            if prompt.is_empty() {
                return Err(StudioError::EmptyPrompt);
            }
            if state.pending_generation.is_some() {
                return Err(StudioError::GenerationBusy);
            }

            let token = CancelToken::new();
            state.pending_generation = Some(token.clone());
            let existing = has_generated(&state)
                .then(|| state.history.current().files().to_vec());
            self.inner
                .generation_state
                .send_replace(GenerationState::Pending);
            (token, existing)
        };

        // Suspension point: no lock held while the collaborator runs.
        let result = self
            .inner
            .generation
            .generate(&prompt, existing.as_deref(), token.clone())
            .await;

        let mut state = self.inner.state.lock().await;
        state.pending_generation = None;

        if token.is_cancelled() {
            // The result is discarded unconditionally, success included.
            self.inner
                .generation_state
                .send_replace(GenerationState::Cancelled);
            return Ok(());
        }

        match result {
            Ok(files) => {
                let mut next = state.history.current().clone();
                next.set_files(files);
                self.commit(&mut state, next);
                self.inner
                    .generation_state
                    .send_replace(GenerationState::Succeeded);
                Ok(())
            }
            Err(GenerateError::Cancelled) => {
                self.inner
                    .generation_state
                    .send_replace(GenerationState::Cancelled);
                Ok(())
            }
            Err(GenerateError::Service(err)) => {
                self.inner
                    .generation_state
                    .send_replace(GenerationState::Failed(err.message().to_owned()));
                Err(StudioError::Generation(err))
            }
        }
    }

    /// Marks the pending generation (if any) cancelled. Settlement still goes
    /// through the resolution path in [`Studio::generate`].
    pub async fn stop_generation(&self) {
        let state = self.inner.state.lock().await;
        if let Some(token) = state.pending_generation.as_ref() {
            token.cancel();
        }
    }

    // --- mutation intents -------------------------------------------------

    /// Replaces the content of an existing file and commits the result.
    ///
    /// Calling this for a path absent from the current snapshot is a
    /// programming error: the UI only offers edits on existing files. It is
    /// asserted in debug builds and a no-op in release builds.
    pub async fn edit_file(&self, path: &str, content: impl Into<String>) {
        let content = content.into();
        let mut state = self.inner.state.lock().await;

        let mut next = state.history.current().clone();
        let replaced = next.set_file_content(path, content);
        debug_assert!(replaced, "edit_file called for unknown path {path:?}");
        if !replaced {
            return;
        }
        self.commit(&mut state, next);
    }

    /// Appends a new empty file and makes it the active file.
    ///
    /// Fails with [`StudioError::DuplicateFile`] when the path already
    /// exists; the snapshot list is left unchanged in that case.
    pub async fn add_file(&self, path: &str) -> Result<(), StudioError> {
        let mut state = self.inner.state.lock().await;

        if state.history.current().has_file(path) {
            return Err(StudioError::DuplicateFile {
                path: path.to_owned(),
            });
        }

        let mut next = state.history.current().clone();
        next.append_file(crate::model::ProjectFile::empty(path));
        self.commit(&mut state, next);
        // Forced override of the resolver's keep-previous default.
        state.active_file = path.to_owned();
        Ok(())
    }

    /// Replaces the project name and description, leaving the files untouched.
    pub async fn update_metadata(&self, name: impl Into<String>, description: Option<String>) {
        let name = name.into();
        let mut state = self.inner.state.lock().await;

        let mut next = state.history.current().clone();
        next.set_metadata(name, description);
        self.commit(&mut state, next);
    }

    // --- history navigation -----------------------------------------------

    /// Steps back one snapshot. Returns whether the cursor moved; stepping
    /// past the start is a silent no-op.
    pub async fn undo(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if !state.history.undo() {
            return false;
        }
        self.after_cursor_move(&mut state);
        true
    }

    /// Steps forward one snapshot. Returns whether the cursor moved; stepping
    /// past the end is a silent no-op.
    pub async fn redo(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if !state.history.redo() {
            return false;
        }
        self.after_cursor_move(&mut state);
        true
    }

    /// Resets to a fresh starter project and clears the durable slot.
    ///
    /// A still-pending generation is cancelled so its late settlement cannot
    /// push onto the fresh history.
    pub async fn new_project(&self) -> Result<(), StudioError> {
        let mut state = self.inner.state.lock().await;

        if let Some(token) = state.pending_generation.as_ref() {
            token.cancel();
        }
        self.inner
            .storage
            .remove(PROJECT_STORAGE_KEY)
            .map_err(StudioError::Storage)?;
        self.inner.sync.cancel(state.save_timer.take());

        state.history = History::new(starter_project());
        state.active_file = resolve_active_file(state.history.current().files(), "");
        Ok(())
    }

    // --- explanation ------------------------------------------------------

    /// Asks the explanation collaborator to describe the file at `path`.
    /// Failures surface as errors and never touch history.
    pub async fn explain_file(&self, path: &str) -> Result<String, StudioError> {
        let code = {
            let state = self.inner.state.lock().await;
            let file = state
                .history
                .current()
                .file(path)
                .ok_or_else(|| StudioError::UnknownFile {
                    path: path.to_owned(),
                })?;
            file.content().to_owned()
        };

        self.inner
            .explanation
            .explain(&code, path)
            .await
            .map_err(StudioError::Explanation)
    }

    // --- observers --------------------------------------------------------

    pub async fn current(&self) -> ProjectState {
        self.inner.state.lock().await.history.current().clone()
    }

    pub async fn can_undo(&self) -> bool {
        self.inner.state.lock().await.history.can_undo()
    }

    pub async fn can_redo(&self) -> bool {
        self.inner.state.lock().await.history.can_redo()
    }

    pub async fn active_file(&self) -> String {
        self.inner.state.lock().await.active_file.clone()
    }

    /// Selects a file in the editor. A path absent from the current snapshot
    /// is ignored; the resolver re-derives a valid selection on the next
    /// file-set change anyway.
    pub async fn set_active_file(&self, path: &str) {
        let mut state = self.inner.state.lock().await;
        if state.history.current().has_file(path) {
            state.active_file = path.to_owned();
        }
    }

    /// Whether the project carries user-visible generated content, i.e.
    /// whether the next generation request is an edit of the current files
    /// rather than a from-scratch build.
    pub async fn has_generated(&self) -> bool {
        has_generated(&*self.inner.state.lock().await)
    }

    pub fn save_status(&self) -> SaveStatus {
        self.inner.sync.status()
    }

    pub fn subscribe_save_status(&self) -> watch::Receiver<SaveStatus> {
        self.inner.sync.subscribe()
    }

    /// The most recent durable-write failure, if the last write attempt
    /// failed. Cleared by the next successful write.
    pub fn last_save_error(&self) -> Option<String> {
        self.inner.sync.last_error()
    }

    pub fn generation_state(&self) -> GenerationState {
        self.inner.generation_state.borrow().clone()
    }

    pub fn subscribe_generation_state(&self) -> watch::Receiver<GenerationState> {
        self.inner.generation_state.subscribe()
    }

    // --- internals --------------------------------------------------------

    fn commit(&self, state: &mut CoreState, snapshot: ProjectState) {
        state.history.push(snapshot);
        state.active_file =
            resolve_active_file(state.history.current().files(), &state.active_file);
        self.schedule_save(state);
    }

    fn after_cursor_move(&self, state: &mut CoreState) {
        state.active_file =
            resolve_active_file(state.history.current().files(), &state.active_file);
        self.schedule_save(state);
    }

    fn schedule_save(&self, state: &mut CoreState) {
        // The pristine snapshot at cursor 0 is never persisted.
        if state.history.cursor() < 1 {
            self.inner.sync.cancel(state.save_timer.take());
            return;
        }
        let snapshot = state.history.current().clone();
        state.save_timer = Some(PersistenceSync::schedule(
            &self.inner.sync,
            snapshot,
            state.save_timer.take(),
        ));
    }
}

fn has_generated(state: &CoreState) -> bool {
    if state.history.len() > 1 {
        return true;
    }
    let current = state.history.current();
    current.files().first().map(|file| file.content()) != Some(starter_first_file_content())
}

fn load_initial(storage: &dyn ProjectStorage) -> ProjectState {
    match storage.get(PROJECT_STORAGE_KEY) {
        Ok(Some(payload)) => {
            serde_json::from_str(&payload).unwrap_or_else(|_| starter_project())
        }
        Ok(None) | Err(_) => starter_project(),
    }
}
