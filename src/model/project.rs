// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::file::ProjectFile;

/// One immutable, complete representation of the project at a point in
/// history: the full file set plus project metadata.
///
/// Snapshots are never edited in place once committed to history; every
/// mutation clones the current snapshot, adjusts the clone, and pushes it as
/// a new entry. File order is preserved across mutations except for explicit
/// additions, which append.
///
/// The serialized form matches the durable-storage payload: camelCase field
/// names, description omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    files: Vec<ProjectFile>,
    project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project_description: Option<String>,
}

impl ProjectState {
    pub fn new(
        files: Vec<ProjectFile>,
        project_name: impl Into<String>,
        project_description: Option<String>,
    ) -> Self {
        Self {
            files,
            project_name: project_name.into(),
            project_description,
        }
    }

    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|file| file.path() == path)
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.file(path).is_some()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_description(&self) -> Option<&str> {
        self.project_description.as_deref()
    }

    /// Replaces the file set wholesale, keeping the metadata. Used by the
    /// generation success path.
    pub fn set_files(&mut self, files: Vec<ProjectFile>) {
        self.files = files;
    }

    /// Replaces the content of the file at `path`. Returns false when no file
    /// matches; the snapshot is left untouched in that case.
    pub fn set_file_content(&mut self, path: &str, content: impl Into<String>) -> bool {
        match self.files.iter_mut().find(|file| file.path() == path) {
            Some(file) => {
                file.set_content(content);
                true
            }
            None => false,
        }
    }

    /// Appends a file; the caller is responsible for the duplicate-path check.
    pub fn append_file(&mut self, file: ProjectFile) {
        self.files.push(file);
    }

    pub fn set_metadata(&mut self, name: impl Into<String>, description: Option<String>) {
        self.project_name = name.into();
        self.project_description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectFile, ProjectState};

    fn snapshot() -> ProjectState {
        ProjectState::new(
            vec![
                ProjectFile::new("index.html", "<html></html>"),
                ProjectFile::new("App.tsx", "export default null;"),
            ],
            "Demo",
            None,
        )
    }

    #[test]
    fn set_file_content_replaces_only_the_matching_file() {
        let mut state = snapshot();
        assert!(state.set_file_content("App.tsx", "changed"));
        assert_eq!(state.file("App.tsx").expect("file").content(), "changed");
        assert_eq!(
            state.file("index.html").expect("file").content(),
            "<html></html>"
        );
    }

    #[test]
    fn set_file_content_on_unknown_path_leaves_snapshot_untouched() {
        let mut state = snapshot();
        let before = state.clone();
        assert!(!state.set_file_content("missing.ts", "nope"));
        assert_eq!(state, before);
    }

    #[test]
    fn append_preserves_existing_file_order() {
        let mut state = snapshot();
        state.append_file(ProjectFile::empty("styles.css"));
        let paths: Vec<&str> = state.files().iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["index.html", "App.tsx", "styles.css"]);
    }

    #[test]
    fn serializes_to_camel_case_and_omits_absent_description() {
        let state = snapshot();
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["projectName"], "Demo");
        assert!(json.get("projectDescription").is_none());
        assert_eq!(json["files"][1]["path"], "App.tsx");
    }

    #[test]
    fn deserializes_payload_with_description() {
        let raw = r#"{
            "files": [{"path": "App.tsx", "content": ""}],
            "projectName": "Todo App",
            "projectDescription": "A list of things"
        }"#;
        let state: ProjectState = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(state.project_name(), "Todo App");
        assert_eq!(state.project_description(), Some("A list of things"));
        assert_eq!(state.files().len(), 1);
    }
}
