// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: project files, snapshots, and the starter project.

mod file;
mod project;
mod starter;

pub use file::ProjectFile;
pub use project::ProjectState;
pub use starter::{starter_files, starter_project, DEFAULT_PROJECT_NAME};

pub(crate) use starter::starter_first_file_content;
