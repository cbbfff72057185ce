//! Create, update, delete and upload actions shared by every managed
//! resource.

use axum::{
    Form,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use tracing::warn;

use crate::forms::FormData;
use crate::services::{ActionOutcome, ActionResult, ManagedResource, messages};
use crate::state::AppState;
use crate::storage::ImageFile;

/// Multipart field holding the uploaded image.
pub const FILE_FIELD: &str = "file";

/// Largest accepted upload body (10 MiB).
pub const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub async fn create<R: ManagedResource>(
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> ActionResult {
    state.crud::<R>().create(&form).await
}

pub async fn update<R: ManagedResource>(
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> ActionResult {
    state.crud::<R>().update(&form).await
}

pub async fn delete<R: ManagedResource>(
    State(state): State<AppState>,
    Form(form): Form<FormData>,
) -> ActionResult {
    state.crud::<R>().delete(&form).await
}

/// Upload an image and answer with its public URL.
pub async fn upload<R: ManagedResource>(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ActionResult {
    match read_file(&mut multipart).await {
        Ok(file) => state.crud::<R>().upload_image(file).await,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(error = %e, resource = R::LABEL, limit = UPLOAD_BODY_LIMIT, "Upload too large");
            ActionResult::failure(ActionOutcome::FileTooLarge, messages::FILE_TOO_LARGE)
        }
        Err(e) => {
            warn!(error = %e, resource = R::LABEL, "Unreadable upload body");
            ActionResult::failure(ActionOutcome::MissingFile, messages::NO_FILE)
        }
    }
}

/// The first `file` field of a multipart body.
async fn read_file(multipart: &mut Multipart) -> Result<Option<ImageFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await?;
        return Ok(Some(ImageFile {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}
