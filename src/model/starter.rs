// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in default project.
//!
//! This is the snapshot a fresh session starts from when durable storage has
//! nothing to offer. It is deliberately a working placeholder app so the
//! preview surface has something to show before the first generation.

use super::file::ProjectFile;
use super::project::ProjectState;

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

const STARTER_PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Preview</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <script src="https://unpkg.com/@babel/standalone/babel.min.js"></script>
</head>
<body class="bg-gray-100">
    <div id="root"></div>
    <script type="text/babel">
        const App = () => {
            return (
                <div className="min-h-screen bg-gray-800 flex flex-col items-center justify-center text-white p-4">
                    <h1 className="text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-500 text-transparent bg-clip-text">Welcome to Galatea</h1>
                    <p className="text-xl text-gray-300">Enter a prompt above and click 'Generate' to create your app.</p>
                </div>
            );
        };

        const container = document.getElementById('root');
        const root = ReactDOM.createRoot(container);
        root.render(<App />);
    </script>
</body>
</html>"#;

const STARTER_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated App</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
    <div id="root"></div>
    <script type="module" src="index.tsx"></script>
</body>
</html>"#;

const STARTER_APP_TSX: &str = r#"import React from 'react';

const App = () => {
  return (
    <div className="min-h-screen bg-gray-800 flex flex-col items-center justify-center text-white p-4">
        <h1 className="text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-500 text-transparent bg-clip-text">Welcome to Galatea</h1>
        <p className="text-xl text-gray-300">This is a placeholder for your generated app.</p>
    </div>
  );
};

export default App;
"#;

const STARTER_INDEX_TSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';

const rootElement = document.getElementById('root');
if (!rootElement) {
  throw new Error("Could not find root element to mount to");
}

const root = ReactDOM.createRoot(rootElement);
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);"#;

pub fn starter_files() -> Vec<ProjectFile> {
    vec![
        ProjectFile::new("preview.html", STARTER_PREVIEW_HTML),
        ProjectFile::new("index.html", STARTER_INDEX_HTML),
        ProjectFile::new("App.tsx", STARTER_APP_TSX),
        ProjectFile::new("index.tsx", STARTER_INDEX_TSX),
    ]
}

pub fn starter_project() -> ProjectState {
    ProjectState::new(starter_files(), DEFAULT_PROJECT_NAME, None)
}

/// Content of the starter file set's first file. Comparing against this is
/// how the studio decides whether the project still is the untouched
/// placeholder (see `Studio::has_generated`).
pub(crate) fn starter_first_file_content() -> &'static str {
    STARTER_PREVIEW_HTML
}

#[cfg(test)]
mod tests {
    use super::{starter_first_file_content, starter_project, DEFAULT_PROJECT_NAME};

    #[test]
    fn starter_project_has_the_four_scaffold_files() {
        let project = starter_project();
        let paths: Vec<&str> = project.files().iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["preview.html", "index.html", "App.tsx", "index.tsx"]);
        assert_eq!(project.project_name(), DEFAULT_PROJECT_NAME);
        assert_eq!(project.project_description(), None);
    }

    #[test]
    fn first_file_content_matches_the_preview_scaffold() {
        let project = starter_project();
        assert_eq!(
            project.files()[0].content(),
            starter_first_file_content()
        );
    }
}
