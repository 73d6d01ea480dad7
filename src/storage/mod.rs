//! Local-disk storage for uploaded images.
//!
//! Owns the upload directory, the accepted-type filter, and the unique
//! filename scheme. Client-supplied filenames are only ever used to extract
//! an extension; the stored name is always generated here.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::errors::AppError;

/// Maximum size of a single uploaded file (5 MiB).
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Maximum number of files accepted per upload request.
pub const MAX_FILES_PER_REQUEST: usize = 10;

/// Request body cap for the upload route: ten files at the per-file limit
/// plus multipart framing overhead.
pub const MAX_REQUEST_BODY: usize = 64 * 1024 * 1024;

/// File extensions accepted for upload and listing.
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Create the upload directory if it doesn't exist.
pub async fn ensure_upload_dir(dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Extract the lowercased extension from a filename, if any.
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Whether the extension is an accepted image extension.
pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext)
}

/// Whether the content type is an accepted image MIME type.
///
/// Both this and the extension check must pass for a file to be accepted.
pub fn is_allowed_mime(content_type: &str) -> bool {
    content_type
        .strip_prefix("image/")
        .is_some_and(|subtype| subtype == "jpg" || is_allowed_extension(subtype))
}

/// Generate a unique on-disk filename: `<field>-<unix millis>-<suffix>.<ext>`.
///
/// The caller must have validated the extension; an extension-less original
/// name yields a bare suffix with no trailing dot.
pub fn unique_filename(field: &str, original: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    match extension_of(original) {
        Some(ext) => format!("{}-{}-{}.{}", field, millis, &suffix[..8], ext),
        None => format!("{}-{}-{}", field, millis, &suffix[..8]),
    }
}

/// A file persisted to the upload directory.
#[derive(Debug)]
pub struct StoredFile {
    pub size: u64,
    pub path: PathBuf,
}

/// Write file contents under the upload directory.
pub async fn write_file(dir: &Path, filename: &str, data: &[u8]) -> Result<StoredFile, AppError> {
    let path = dir.join(filename);
    tokio::fs::write(&path, data).await?;
    Ok(StoredFile {
        size: data.len() as u64,
        path,
    })
}

/// List image files in the upload directory, filtered by extension.
pub async fn list_images(dir: &Path) -> Result<Vec<String>, AppError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if extension_of(&name).is_some_and(|ext| is_allowed_extension(&ext)) {
            images.push(name);
        }
    }

    // read_dir order is platform-dependent
    images.sort();
    Ok(images)
}
