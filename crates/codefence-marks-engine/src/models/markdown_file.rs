use relative_path::{RelativePath, RelativePathBuf};

/// A markdown file addressed relative to the scanned root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
}

impl MarkdownFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        self.relative_path
            .file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
    }

    /// Relative path without the `.md` extension, for titles and list entries.
    pub fn display_path(&self) -> &str {
        let path = self.relative_path.as_str();
        path.strip_suffix(".md").unwrap_or(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
