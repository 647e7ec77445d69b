// src/result/blob.rs

/// Raw bytes tagged with a MIME type.
///
/// An untyped blob has an empty `mime_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>, mime_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.map(normalize_mime).unwrap_or_default(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lossy UTF-8 view of the bytes.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// MIME types are ASCII-lowercased; anything with non-printable-ASCII
/// characters is treated as untyped.
fn normalize_mime(mime: &str) -> String {
    if mime.chars().all(|c| (' '..='~').contains(&c)) {
        mime.to_ascii_lowercase()
    } else {
        String::new()
    }
}
