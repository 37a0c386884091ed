// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One file inside a project snapshot.
///
/// The path is the sole identity key; there is no separate file id. Paths are
/// plain strings as produced by the generation collaborator (e.g. `App.tsx`,
/// `components/Button.tsx`) and are unique within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    path: String,
    content: String,
}

impl ProjectFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// An empty file, as created by the add-file intent.
    pub fn empty(path: impl Into<String>) -> Self {
        Self::new(path, "")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFile;

    #[test]
    fn empty_file_has_no_content() {
        let file = ProjectFile::empty("notes.txt");
        assert_eq!(file.path(), "notes.txt");
        assert_eq!(file.content(), "");
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let file = ProjectFile::new("App.tsx", "export default null;");
        let json = serde_json::to_value(&file).expect("serialize");
        assert_eq!(json["path"], "App.tsx");
        assert_eq!(json["content"], "export default null;");
    }
}
