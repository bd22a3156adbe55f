//! Multipart upload reading shared by document and chat routes

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::{AppError, Result};

/// An uploaded file plus any plain text fields sent alongside it
pub(crate) struct Upload {
    pub file_name: String,
    pub data: Vec<u8>,
    pub fields: HashMap<String, String>,
}

/// Read a multipart body carrying a `file` (or `document`) field
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<Upload> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read upload: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" || name == "document" {
            let file_name = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "upload.pdf".to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

            tracing::debug!("Received '{}' ({} bytes)", file_name, data.len());
            file = Some((file_name, data.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read field {}: {}", name, e)))?;
            fields.insert(name, value);
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    Ok(Upload {
        file_name,
        data,
        fields,
    })
}
