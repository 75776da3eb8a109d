use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quezt_core::contact::{self, SubmissionReply};

/// POST /api/contact — validate a contact form submission
///
/// Always answers with one of 200, 400 or 500; the body is never routed
/// through `AppError` so its shape stays fixed.
pub async fn submit(body: Result<Bytes, BytesRejection>) -> Response {
    let reply = match body {
        Ok(raw) => contact::handle(&raw),
        Err(rejection) => {
            tracing::error!(error = %rejection, "contact form body could not be read");
            let io = std::io::Error::other(rejection.body_text());
            SubmissionReply::Failed(io.into())
        }
    };

    match &reply {
        SubmissionReply::Accepted(s) => tracing::info!(
            name = %s.name,
            email = %s.email,
            company = s.company.as_deref().unwrap_or(""),
            message = %s.message,
            "contact form submission"
        ),
        SubmissionReply::Rejected(reason) => {
            tracing::debug!(reason = reason.message(), "contact form rejected")
        }
        SubmissionReply::Failed(e) => tracing::error!(error = %e, "contact form error"),
    }

    let status =
        StatusCode::from_u16(reply.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body())).into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn call(raw: &'static [u8]) -> (StatusCode, serde_json::Value) {
        let response = submit(Ok(Bytes::from_static(raw))).await;
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn valid_submission_returns_200() {
        let (status, json) =
            call(br#"{"name":"Ann","email":"ann@x.com","company":"Acme","message":"Hi"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], contact::CONFIRMATION_MESSAGE);
    }

    #[tokio::test]
    async fn missing_fields_returns_400() {
        let (status, json) = call(br#"{"name":"Ann"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "error": "Missing required fields" }));
    }

    #[tokio::test]
    async fn garbage_returns_500() {
        let (status, json) = call(b"\x00not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
    }
}
