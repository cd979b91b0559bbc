//! Sheet form submission extractor.
//!
//! The sheet page posts one form to both `/download` and `/upload`. Browsers
//! send it as `multipart/form-data` (it carries the file input), but plain
//! `application/x-www-form-urlencoded` posts are accepted as well. Any other
//! body is treated as a submission with no fields.

use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use sheetkeeper_domain::FormData;

use super::http::ApiError;

/// Name of the file input carrying an uploaded sheet.
pub const UPLOAD_FIELD: &str = "upload";

/// Text inputs and optional uploaded file of one sheet form post.
#[derive(Debug, Default)]
pub struct SheetSubmission {
    pub form: FormData,
    pub upload: Option<Bytes>,
}

impl<S> FromRequest<S> for SheetSubmission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            read_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            Ok(Self {
                form: FormData::from(fields),
                upload: None,
            })
        } else {
            Ok(Self::default())
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<SheetSubmission, ApiError> {
    let mut submission = SheetSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == UPLOAD_FIELD {
            // Browsers send an empty part with a blank filename when no file was chosen
            let no_file_chosen = field.file_name().map_or(true, str::is_empty);
            let bytes = field.bytes().await.map_err(bad_multipart)?;
            if submission.upload.is_none() && !(no_file_chosen && bytes.is_empty()) {
                submission.upload = Some(bytes);
            }
        } else {
            let value = field.text().await.map_err(bad_multipart)?;
            submission.form.push(name, value);
        }
    }

    Ok(submission)
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(e.to_string())
}
