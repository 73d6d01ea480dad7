//! Upload response models matching the front-end contract.
//!
//! Field names are deliberately lowercase single words (`originalname`, not
//! `originalName`) to match what the front-end expects.

use serde::{Deserialize, Serialize};

/// Metadata for a single stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Generated on-disk filename
    pub filename: String,
    /// Client-supplied filename, recorded verbatim but never used on disk
    pub originalname: String,
    /// File size in bytes
    pub size: u64,
    /// Path to the stored file, relative to the working directory
    pub path: String,
}

/// Response body for POST /upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub files: Vec<UploadedFile>,
}

/// Response body for GET /images.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub success: bool,
    pub images: Vec<String>,
}
