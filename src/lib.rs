// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — project-state core for a prompt-driven web app studio.
//!
//! The crate owns the part of the studio where ordering and consistency
//! matter: a branch-truncating undo/redo history of immutable project
//! snapshots, a single cancellable in-flight generation request, and a
//! debounced autosave writer. Rendering, packaging, and the actual prompt
//! plumbing live outside, behind the collaborator traits in [`service`] and
//! [`store`].

pub mod history;
pub mod model;
pub mod service;
pub mod store;
pub mod studio;

pub use history::History;
pub use model::{ProjectFile, ProjectState};
pub use studio::{GenerationState, SaveStatus, Studio, StudioError};

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
