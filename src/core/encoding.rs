//! Binary payload encoding
//!
//! Document content travels base64 encoded (standard alphabet, padded) in
//! `Binary.data`. Encoding runs on the blocking pool so large files do not
//! stall the runtime.

use crate::domain::errors::EpdError;
use crate::domain::file::DocumentFile;
use crate::domain::result::Result;
use crate::fhir::resources::Binary;
use base64::{engine::general_purpose, Engine as _};

/// Encodes the file content for a `Binary` resource
///
/// # Errors
///
/// Returns `EpdError::Encoding` if the file is empty or the worker fails.
pub async fn encode_file(file: &DocumentFile) -> Result<String> {
    if file.is_empty() {
        return Err(EpdError::Encoding(format!("File is empty: {}", file.name())));
    }

    let data = file.data().to_vec();
    let encoded = tokio::task::spawn_blocking(move || general_purpose::STANDARD.encode(data))
        .await
        .map_err(|e| EpdError::Encoding(format!("Problem converting file: {e}")))?;

    if encoded.is_empty() {
        return Err(EpdError::Encoding(format!("File is empty: {}", file.name())));
    }

    tracing::debug!(
        file = file.name(),
        size = file.len(),
        encoded_size = encoded.len(),
        "Encoded document content"
    );
    Ok(encoded)
}

/// Decodes the content carried by a `Binary` resource
///
/// # Errors
///
/// Returns `EpdError::Encoding` if the resource has no data or the data is
/// not valid base64.
pub fn decode_binary(binary: &Binary) -> Result<Vec<u8>> {
    let data = binary
        .data
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| EpdError::Encoding("Binary resource carries no data".to_string()))?;
    general_purpose::STANDARD
        .decode(data)
        .map_err(|e| EpdError::Encoding(format!("Invalid base64 content: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encode_decode_preserves_bytes() {
        let content: Vec<u8> = (0..=255).collect();
        let file = DocumentFile::new("all-bytes.bin", "application/octet-stream", content.clone());

        let encoded = encode_file(&file).await.unwrap();
        let binary = Binary {
            id: None,
            content_type: file.content_type().to_string(),
            data: Some(encoded),
        };
        assert_eq!(decode_binary(&binary).unwrap(), content);
    }

    #[tokio::test]
    async fn test_encode_known_value() {
        let file = DocumentFile::new("a.txt", "text/plain", b"hello".to_vec());
        assert_eq!(encode_file(&file).await.unwrap(), "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_encode_empty_file_rejected() {
        let file = DocumentFile::new("empty.txt", "text/plain", Vec::new());
        let err = encode_file(&file).await.unwrap_err();
        assert!(matches!(err, EpdError::Encoding(_)));
        assert!(err.to_string().contains("empty.txt"));
    }

    #[test]
    fn test_decode_without_data() {
        let binary = Binary::default();
        assert!(matches!(decode_binary(&binary), Err(EpdError::Encoding(_))));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let binary = Binary {
            data: Some("not base64!".to_string()),
            ..Default::default()
        };
        assert!(matches!(decode_binary(&binary), Err(EpdError::Encoding(_))));
    }
}
