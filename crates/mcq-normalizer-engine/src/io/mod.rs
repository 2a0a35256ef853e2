use crate::models::SourceDocument;
use crate::output::NormalizedDocument;
use crate::pipeline::DocumentSource;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a plain-text file as a document with one paragraph per line.
pub fn read_text_document(path: &Path) -> Result<SourceDocument, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(SourceDocument::from_lines(content.lines()))
}

/// Write a normalized document as plain text
pub fn write_text_document(path: &Path, doc: &NormalizedDocument) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, doc.render_text()).map_err(IoError::Io)
}

/// A plain-text file used as a [`DocumentSource`].
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for TextFile {
    type Error = IoError;

    fn load(&self) -> Result<SourceDocument, Self::Error> {
        read_text_document(&self.path)
    }
}
