// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Durable key-value storage behind the persistence sync.
//!
//! The contract mirrors a browser localStorage slot: synchronous get/set/
//! remove on string keys. The core talks to it only through the
//! `ProjectStorage` trait so tests and embedders can swap in-memory fakes
//! for the file-backed default.

mod kv;

pub use kv::{FileStorage, MemoryStorage, ProjectStorage, StorageError, WriteDurability};

/// The fixed key the studio persists the current project under.
pub const PROJECT_STORAGE_KEY: &str = "galatea-project";
