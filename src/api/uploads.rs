//! Image upload and listing endpoints.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::{AppError, AppErrorWithMessage};
use crate::models::{ImagesResponse, UploadResponse, UploadedFile};
use crate::storage;
use crate::AppState;

/// POST /upload - Store multipart image uploads on disk.
///
/// Accepts up to [`storage::MAX_FILES_PER_REQUEST`] files in the `images`
/// field, each at most [`storage::MAX_FILE_SIZE`] bytes and of an accepted
/// image type. Files stored before a failing file remain on disk.
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppErrorWithMessage> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await.map_err(AppError::from)? {
        // Non-file form fields are ignored
        let Some(originalname) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let field_name = field.name().unwrap_or_default().to_string();
        if field_name != "images" {
            return Err(AppError::Validation(format!("Unexpected field: {}", field_name)).into());
        }

        if files.len() >= storage::MAX_FILES_PER_REQUEST {
            return Err(AppError::Validation(format!(
                "Too many files. Maximum is {}",
                storage::MAX_FILES_PER_REQUEST
            ))
            .into());
        }

        // Both the extension and the MIME type must look like an image
        let extension_ok = storage::extension_of(&originalname)
            .is_some_and(|ext| storage::is_allowed_extension(&ext));
        let mime_ok = field
            .content_type()
            .is_some_and(storage::is_allowed_mime);
        if !extension_ok || !mime_ok {
            return Err(AppError::UnsupportedFileType.into());
        }

        let data = read_field_capped(&mut field, storage::MAX_FILE_SIZE).await?;

        let filename = storage::unique_filename(&field_name, &originalname);
        let stored = storage::write_file(&state.config.upload_dir, &filename, &data)
            .await
            .map_err(|e| e.with_message("Error uploading files"))?;

        tracing::debug!(filename = %filename, size = stored.size, "stored uploaded image");

        files.push(UploadedFile {
            filename,
            originalname,
            size: stored.size,
            path: stored.path.display().to_string(),
        });
    }

    if files.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()).into());
    }

    Ok(Json(UploadResponse {
        success: true,
        message: "Files uploaded successfully".to_string(),
        files,
    }))
}

/// Read a multipart field into memory, failing once it exceeds `cap` bytes.
async fn read_field_capped(
    field: &mut axum::extract::multipart::Field<'_>,
    cap: usize,
) -> Result<Vec<u8>, AppErrorWithMessage> {
    let mut data = Vec::new();

    while let Some(chunk) = field.chunk().await.map_err(AppError::from)? {
        if data.len() + chunk.len() > cap {
            // Drain the rest of the field so the client can finish writing
            // the request body before it sees the 400.
            while field.chunk().await.map_err(AppError::from)?.is_some() {}
            return Err(AppError::FileTooLarge.into());
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

/// GET /images - List uploaded images by extension.
pub async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<ImagesResponse>, AppErrorWithMessage> {
    let images = storage::list_images(&state.config.upload_dir)
        .await
        .map_err(|e| e.with_message("Error reading upload directory"))?;

    Ok(Json(ImagesResponse {
        success: true,
        images,
    }))
}
