use super::input::AppTextArea;
use std::collections::HashMap;

pub const IMPORT_PLACEHOLDER: &str = "https://github.com/username/repository";
pub const DOCS_PLACEHOLDER: &str = "Enter documentation...";

/// One row of the file tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: &'static str,
    pub depth: usize,
    pub is_dir: bool,
}

const fn dir(name: &'static str, depth: usize) -> TreeEntry {
    TreeEntry {
        name,
        depth,
        is_dir: true,
    }
}

const fn file(name: &'static str, depth: usize) -> TreeEntry {
    TreeEntry {
        name,
        depth,
        is_dir: false,
    }
}

pub const TREE: [TreeEntry; 11] = [
    dir("src", 0),
    dir("components", 1),
    file("Button.tsx", 2),
    file("Modal.tsx", 2),
    dir("utils", 1),
    file("helpers.ts", 2),
    file("api.ts", 2),
    file("App.tsx", 1),
    file("index.tsx", 1),
    file("package.json", 0),
    file("README.md", 0),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Enter a GitHub repository URL")]
    Empty,
    #[error("Not a GitHub repository URL: {0}")]
    NotGithub(String),
}

/// Parses `https://github.com/<owner>/<repo>` (scheme optional, `.git` and a
/// trailing slash allowed) into `owner/repo`.
pub fn parse_github_url(url: &str) -> Result<String, ImportError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ImportError::Empty);
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let parts: Vec<&str> = rest
        .strip_prefix("github.com/")
        .map(|path| path.trim_end_matches('/').split('/').collect())
        .unwrap_or_default();
    match parts.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            let repo = repo.strip_suffix(".git").unwrap_or(*repo);
            Ok(format!("{owner}/{repo}"))
        }
        _ => Err(ImportError::NotGithub(url.to_string())),
    }
}

#[derive(Debug)]
pub struct ExplorerState {
    /// Index into the files of [`TREE`], directories skipped.
    pub selected: usize,
    pub repositories: Vec<String>,
    docs: HashMap<&'static str, String>,

    // --- Import Repository ---
    pub import_open: bool,
    pub import_url: AppTextArea,
    pub import_error: Option<ImportError>,

    // --- Edit Documentation ---
    pub docs_open: bool,
    pub docs_input: AppTextArea,
}

impl Default for ExplorerState {
    fn default() -> Self {
        let mut docs = HashMap::new();
        docs.insert(
            "Button.tsx",
            "A reusable button component with multiple variants and hover effects.".to_string(),
        );
        Self {
            selected: 0,
            repositories: vec!["frontend-app".to_string()],
            docs,
            import_open: false,
            import_url: AppTextArea::with_placeholder(IMPORT_PLACEHOLDER),
            import_error: None,
            docs_open: false,
            docs_input: AppTextArea::with_placeholder(DOCS_PLACEHOLDER),
        }
    }
}

impl ExplorerState {
    pub fn files() -> impl Iterator<Item = &'static TreeEntry> {
        TREE.iter().filter(|e| !e.is_dir)
    }

    #[must_use]
    pub fn selected_file(&self) -> &'static str {
        Self::files()
            .nth(self.selected)
            .map_or("Button.tsx", |e| e.name)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Self::files().count();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Self::files().count() - 1);
    }

    #[must_use]
    pub fn doc(&self, name: &str) -> Option<&str> {
        self.docs.get(name).map(String::as_str)
    }

    pub fn open_import(&mut self) {
        self.import_open = true;
        self.import_url = AppTextArea::with_placeholder(IMPORT_PLACEHOLDER);
        self.import_error = None;
    }

    /// Adds the repository behind the typed URL. The modal stays open on error.
    pub fn submit_import(&mut self) -> Result<String, ImportError> {
        let repo = parse_github_url(&self.import_url.value()).inspect_err(|e| {
            self.import_error = Some(e.clone());
        })?;
        if !self.repositories.contains(&repo) {
            self.repositories.push(repo.clone());
        }
        self.import_open = false;
        self.import_error = None;
        Ok(repo)
    }

    /// Opens the editor on the selected file's current documentation.
    pub fn open_docs(&mut self) {
        let current = self.doc(self.selected_file()).unwrap_or_default().to_string();
        self.docs_input = AppTextArea::with_text(DOCS_PLACEHOLDER, current);
        self.docs_open = true;
    }

    pub fn save_docs(&mut self) -> &'static str {
        let name = self.selected_file();
        let text = self.docs_input.value();
        if text.is_empty() {
            self.docs.remove(name);
        } else {
            self.docs.insert(name, text);
        }
        self.docs_open = false;
        name
    }

    pub fn generate_docs(&mut self) -> &'static str {
        let name = self.selected_file();
        let stem = name.split('.').next().unwrap_or(name);
        self.docs.insert(
            name,
            format!("{stem}: generated summary of the exports in {name} and where they are used."),
        );
        name
    }

    pub fn close_modals(&mut self) {
        self.import_open = false;
        self.docs_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_into(area: &mut AppTextArea, text: &str) {
        for c in text.chars() {
            area.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_parse_github_url() {
        assert_eq!(
            parse_github_url("https://github.com/rust-lang/rust"),
            Ok("rust-lang/rust".to_string())
        );
        assert_eq!(
            parse_github_url("github.com/tokio-rs/tokio.git/"),
            Ok("tokio-rs/tokio".to_string())
        );
        assert_eq!(parse_github_url("   "), Err(ImportError::Empty));
        assert!(matches!(
            parse_github_url("https://gitlab.com/a/b"),
            Err(ImportError::NotGithub(_))
        ));
        assert!(matches!(
            parse_github_url("https://github.com/only-owner"),
            Err(ImportError::NotGithub(_))
        ));
    }

    #[test]
    fn test_selection_skips_directories_and_wraps() {
        let mut explorer = ExplorerState::default();
        assert_eq!(explorer.selected_file(), "Button.tsx");
        explorer.select_next();
        assert_eq!(explorer.selected_file(), "Modal.tsx");
        explorer.select_next();
        assert_eq!(explorer.selected_file(), "helpers.ts");

        let mut explorer = ExplorerState::default();
        explorer.select_prev();
        assert_eq!(explorer.selected_file(), "README.md");
    }

    #[test]
    fn test_bad_import_keeps_modal_open() {
        let mut explorer = ExplorerState::default();
        explorer.open_import();
        type_into(&mut explorer.import_url, "not a url");
        assert!(explorer.submit_import().is_err());
        assert!(explorer.import_open);
        assert!(explorer.import_error.is_some());

        explorer.open_import();
        assert_eq!(explorer.import_error, None);
        type_into(&mut explorer.import_url, "https://github.com/acme/widgets");
        assert_eq!(explorer.submit_import(), Ok("acme/widgets".to_string()));
        assert!(!explorer.import_open);
        assert!(explorer.repositories.contains(&"acme/widgets".to_string()));
    }

    #[test]
    fn test_edit_docs_starts_from_current_text() {
        let mut explorer = ExplorerState::default();
        explorer.open_docs();
        assert!(explorer.docs_input.value().starts_with("A reusable button"));

        explorer.select_next();
        explorer.open_docs();
        assert_eq!(explorer.docs_input.value(), "");
        type_into(&mut explorer.docs_input, "Dialog wrapper");
        assert_eq!(explorer.save_docs(), "Modal.tsx");
        assert_eq!(explorer.doc("Modal.tsx"), Some("Dialog wrapper"));
        assert!(!explorer.docs_open);
    }

    #[test]
    fn test_generate_docs_fills_selected_file() {
        let mut explorer = ExplorerState::default();
        explorer.select_prev();
        assert_eq!(explorer.doc("README.md"), None);
        assert_eq!(explorer.generate_docs(), "README.md");
        assert!(explorer.doc("README.md").unwrap().contains("README.md"));
    }
}
