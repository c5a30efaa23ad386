//! Document file supplied for upload

use super::result::Result;
use std::path::Path;

/// Content type used when none is declared and the extension is unknown
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A named blob with its declared media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    name: String,
    content_type: String,
    data: Vec<u8>,
}

impl DocumentFile {
    /// Wraps in-memory content
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Reads a file from disk
    ///
    /// Without an explicit `content_type` the type is derived from the file
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `EpdError::Io` if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>, content_type: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = content_type
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(path).to_string());

        tracing::debug!(
            file = %path.display(),
            content_type = %content_type,
            size = data.len(),
            "Read document file"
        );

        Ok(Self {
            name,
            content_type,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => OCTET_STREAM,
    }
}
