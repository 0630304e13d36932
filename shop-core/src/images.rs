//! Image embedding
//!
//! Products, carousel entries and content pages store their image as an
//! embeddable string. This reads an uploaded file into a
//! `data:<mime>;base64,` URL in one shot; on any failure nothing partial
//! is stored and the caller aborts the triggering form submission.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shared::error::ErrorCode;
use shared::{AppError, AppResult};
use std::path::Path;

/// Read an image file and embed it as a data URL
pub fn read_as_data_url(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path).map_err(|err| {
        AppError::with_message(ErrorCode::ImageReadError, err.to_string())
            .with_detail("path", path.display().to_string())
    })?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
