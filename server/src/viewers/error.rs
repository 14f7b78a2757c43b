//! Viewer Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sohosai_common::BureauCode;
use uuid::Uuid;

use super::types::ViewerGrant;
use crate::directory::DirectoryError;

/// A persisted grant list that breaks the viewer set invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerSetError {
    #[error("ALL cannot be combined with other viewer grants")]
    AllNotExclusive,

    #[error("Duplicate viewer grant: {0:?}")]
    Duplicate(ViewerGrant),
}

/// Audience resolution failures.
///
/// Unknown bureaus and members are referential integrity failures: the grant
/// points at something the directory does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudienceError {
    #[error("Viewer grant references unknown bureau {0}")]
    UnknownBureau(BureauCode),

    #[error("Viewer grant references unknown member {0}")]
    UnknownMember(Uuid),

    #[error("Member directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

impl AudienceError {
    #[must_use]
    pub const fn is_referential_integrity(&self) -> bool {
        matches!(self, Self::UnknownBureau(_) | Self::UnknownMember(_))
    }
}

impl From<DirectoryError> for AudienceError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::UnknownBureau(code) => Self::UnknownBureau(code),
            DirectoryError::Unavailable(reason) => Self::DirectoryUnavailable(reason),
        }
    }
}

impl IntoResponse for AudienceError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::UnknownBureau(_) | Self::UnknownMember(_) => {
                (StatusCode::CONFLICT, "referential_integrity")
            }
            Self::DirectoryUnavailable(reason) => {
                tracing::error!(%reason, "Member directory unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "directory_unavailable")
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_member_is_conflict() {
        let id = Uuid::new_v4();
        let response = AudienceError::UnknownMember(id).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"], "referential_integrity");
        assert!(body["message"].as_str().unwrap().contains(&id.to_string()));
    }

    #[tokio::test]
    async fn test_unavailable_directory_is_503() {
        let response = AudienceError::DirectoryUnavailable("timeout".into()).into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "directory_unavailable");
    }

    #[test]
    fn test_directory_error_conversion() {
        let code = BureauCode::new("FINANCE").unwrap();
        let err = AudienceError::from(DirectoryError::UnknownBureau(code.clone()));
        assert_eq!(err, AudienceError::UnknownBureau(code));
        assert!(err.is_referential_integrity());

        let err = AudienceError::from(DirectoryError::Unavailable("down".into()));
        assert!(!err.is_referential_integrity());
        assert!(err.to_string().contains("down"));
    }
}
