//! Path parameter extractors
//!
//! Resource paths carry one UUID, or two for a resource nested under another.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// The UUID of a single-parameter path such as `/stamps/:stamp_id`
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        parse_id(&raw).map(IdPath)
    }
}

/// The two UUIDs of a nested path such as `/messages/:message_id/stamps/:stamp_id`
#[derive(Debug, Clone, Copy)]
pub struct IdPairPath(pub Uuid, pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPairPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((outer, inner)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(IdPairPath(parse_id(&outer)?, parse_id(&inner)?))
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid id format: {raw}")))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        Router::new().route(
            "/messages/:message_id/stamps/:stamp_id",
            get(|IdPairPath(message_id, stamp_id): IdPairPath| async move {
                format!("{message_id}/{stamp_id}")
            }),
        )
    }

    #[tokio::test]
    async fn test_pair_path_parses_both_ids() {
        let (message_id, stamp_id) = (Uuid::new_v4(), Uuid::new_v4());
        let uri = format!("/messages/{message_id}/stamps/{stamp_id}");
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pair_path_rejects_bad_inner_id() {
        let uri = format!("/messages/{}/stamps/not-a-uuid", Uuid::new_v4());
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
