use serde::Serialize;

/// Confirmation returned after a successful CSV upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// Records created for previously unseen identifiers
    pub inserted: usize,
    /// Existing records whose fields were overwritten
    pub updated: usize,
}
