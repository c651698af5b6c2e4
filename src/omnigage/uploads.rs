use std::path::Path;

use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};

use crate::{
    info,
    omnigage::{ApiError, OmnigageClient},
    success,
    types::{UploadRequest, UploadSlotAttributes, UploadSlotResponse},
    utils,
};

/// Uploads a recording and returns the id of the `uploads` instance.
///
/// The API does not accept the file itself. Instead it hands out an upload
/// slot carrying a presigned storage URL plus the form fields and headers
/// that URL expects:
///
/// 1. validate the file and work out its MIME type
/// 2. `POST uploads` with name, MIME type and size
/// 3. `POST` a multipart form with the file to `request-url`
///
/// The returned id is what voice templates reference in their `upload`
/// relationship.
///
/// # Errors
///
/// - [`ApiError::FileNotFound`] if `path` is not a file
/// - [`ApiError::UnsupportedMedia`] for anything but `.wav` / `.mp3`
/// - [`ApiError::StorageUpload`] if storage answers with anything but 204
pub async fn upload(client: &OmnigageClient, path: &Path) -> Result<String, ApiError> {
    if !path.is_file() {
        return Err(ApiError::FileNotFound(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| ApiError::UnsupportedMedia(path.display().to_string()))?;
    let mime_type =
        utils::mime_type(&file_name).ok_or_else(|| ApiError::UnsupportedMedia(file_name.clone()))?;
    let size = async_fs::metadata(path).await?.len();

    let request = UploadRequest {
        name: file_name.clone(),
        mime_type: mime_type.to_string(),
        size,
    };
    let response = client.post("uploads", &request).await?;
    let slot: UploadSlotResponse = serde_json::from_value(response)?;

    info!("Upload ID: {}", slot.data.id);

    let bytes = async_fs::read(path).await?;
    let form = multipart_form(&slot.data.attributes, &file_name, mime_type, bytes)?;

    let pb = utils::spinner(format!("Uploading {}...", file_name));
    let result = post_to_storage(client.http(), &slot.data.attributes, form).await;
    pb.finish_and_clear();
    result?;

    success!("Successfully uploaded file.");
    Ok(slot.data.id)
}

/// Builds the storage form: the presigned form data in the order given,
/// the `Content-Type` field the signature covers, then the file itself.
/// Storage ignores any field after `file`, so it must come last.
pub fn multipart_form(
    attributes: &UploadSlotAttributes,
    file_name: &str,
    mime_type: &str,
    bytes: Vec<u8>,
) -> Result<Form, ApiError> {
    let mut form = Form::new();

    for entry in attributes.request_form_data.iter().flatten() {
        for (key, value) in entry {
            form = form.text(key.clone(), utils::value_to_string(value));
        }
    }

    form = form.text("Content-Type", mime_type.to_string());

    let file = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime_type)?;

    Ok(form.part("file", file))
}

async fn post_to_storage(
    http: &Client,
    attributes: &UploadSlotAttributes,
    form: Form,
) -> Result<(), ApiError> {
    let mut request = http.post(&attributes.request_url);

    for entry in attributes.request_headers.iter().flatten() {
        for (key, value) in entry {
            request = request.header(key.as_str(), utils::value_to_string(value));
        }
    }

    let response = request.multipart(form).send().await?;
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::StorageUpload { status, body })
}
