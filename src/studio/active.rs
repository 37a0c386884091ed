// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ProjectFile;

/// Case-insensitive substring the resolver prefers when picking a fresh
/// active file: the primary application file of the generated stack.
const ENTRY_POINT_HINT: &str = "app.tsx";

/// Derives the active file path for a (possibly new) file set.
///
/// - A previous path that still names an existing file is kept.
/// - Otherwise the first entry-point match wins, then the first file.
/// - An empty file set yields an empty path.
///
/// The one exception, forcing a freshly added file active, is handled by the
/// add-file intent itself rather than here.
pub(crate) fn resolve_active_file(files: &[ProjectFile], previous: &str) -> String {
    if !previous.is_empty() && files.iter().any(|file| file.path() == previous) {
        return previous.to_owned();
    }

    files
        .iter()
        .find(|file| file.path().to_lowercase().contains(ENTRY_POINT_HINT))
        .or_else(|| files.first())
        .map(|file| file.path().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::resolve_active_file;
    use crate::model::ProjectFile;

    fn files(paths: &[&str]) -> Vec<ProjectFile> {
        paths.iter().map(|path| ProjectFile::empty(*path)).collect()
    }

    #[test]
    fn keeps_a_previous_path_that_still_exists() {
        let files = files(&["index.html", "App.tsx", "styles.css"]);
        assert_eq!(resolve_active_file(&files, "styles.css"), "styles.css");
    }

    #[rstest]
    #[case(&["index.html", "App.tsx"], "App.tsx")]
    #[case(&["index.html", "src/app.tsx"], "src/app.tsx")]
    #[case(&["index.html", "MyApp.tsx", "other.ts"], "MyApp.tsx")]
    #[case(&["index.html", "main.ts"], "index.html")]
    fn falls_back_to_entry_point_then_first_file(
        #[case] paths: &[&str],
        #[case] expected: &str,
    ) {
        let files = files(paths);
        assert_eq!(resolve_active_file(&files, "gone.tsx"), expected);
    }

    #[test]
    fn empty_file_set_yields_an_empty_path() {
        assert_eq!(resolve_active_file(&[], "App.tsx"), "");
    }

    #[test]
    fn empty_previous_path_is_not_treated_as_existing() {
        let files = files(&["index.html"]);
        assert_eq!(resolve_active_file(&files, ""), "index.html");
    }
}
