use crate::document::TextDocument;
use crate::models::MarkdownFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read a markdown file into a scannable document
pub fn load_document(relative_path: &RelativePath, root: &Path) -> Result<TextDocument, IoError> {
    let content = read_file(relative_path, root)?;
    Ok(TextDocument::new(&content))
}

/// Scan for markdown files under `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidPath("directory not found".to_string()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Resolve a CLI input (a single file or a directory) to a root directory and
/// the markdown files beneath it, relative to that root.
pub fn collect_markdown_files(input: &Path) -> Result<(PathBuf, Vec<MarkdownFile>), IoError> {
    validate_path(input)?;

    if input.is_file() {
        let root = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| IoError::InvalidPath(input.display().to_string()))?;
        return Ok((root, vec![MarkdownFile::new(RelativePathBuf::from(name))]));
    }

    let files = scan_markdown_files(input)?
        .iter()
        .filter_map(|path| path.strip_prefix(input).ok())
        .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
        .map(MarkdownFile::new)
        .collect();
    Ok((input.to_path_buf(), files))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_path(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::InvalidPath(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineSource;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_scan_and_load_files() {
        // Given a directory with markdown files
        let dir = create_test_dir();
        create_test_file(&dir, "test1.md", "```example-good\nx\n```");
        create_test_file(&dir, "test2.md", "plain");

        // When scanning for files
        let files = scan_markdown_files(dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test1.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test2.md"));
    }

    #[test]
    fn test_handle_missing_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("directory not found"));
    }

    #[test]
    fn test_scan_nested_directories_ignores_other_files() {
        // Given nested folders and non-markdown files
        let dir = create_test_dir();
        create_test_file(&dir, "root.md", "# Root");
        create_test_file(&dir, "image.png", "fake image data");
        let sub_dir = dir.path().join("guides");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested").unwrap();

        // When collecting relative markdown files
        let (root, files) = collect_markdown_files(dir.path()).unwrap();

        // Then only markdown files come back, relative to the root
        assert_eq!(root, dir.path());
        let paths: Vec<_> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(paths, vec!["guides/nested.md", "root.md"]);
    }

    #[test]
    fn test_collect_single_file() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "single.md", "```\n```");

        let (root, files) = collect_markdown_files(&path).unwrap();

        assert_eq!(root, dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].display_name(), "single");
    }

    #[test]
    fn test_validate_path_not_exists() {
        let result = validate_path(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidPath(_))));
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = create_test_dir();
        let result = read_file(RelativePath::new("nonexistent.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_document_lines() {
        let dir = create_test_dir();
        create_test_file(&dir, "doc.md", "```example-bad\r\nbad()\r\n```\r\n");

        let doc = load_document(RelativePath::new("doc.md"), dir.path()).unwrap();

        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line_text(0), "```example-bad");
        assert_eq!(doc.line_text(2), "```");
    }
}
