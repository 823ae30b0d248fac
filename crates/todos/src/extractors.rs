//! Axum extractor for the caller's identity.
//!
//! The bearer token has already been verified by the API gateway authorizer.
//! Here it is only decoded to read the `sub` claim.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use todos_core::auth::{bearer_token, user_id_from_token, AuthError};

/// Owner id of the authenticated caller. Returns 401 if absent or unreadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)
            .and_then(|value| {
                value
                    .to_str()
                    .map_err(|_| AuthError::InvalidToken("non-ASCII header".to_string()))
            })
            .map_err(unauthorized)?;

        let user_id = bearer_token(header_value)
            .and_then(user_id_from_token)
            .map_err(unauthorized)?;

        Ok(AuthenticatedUser(user_id))
    }
}

fn unauthorized(err: AuthError) -> (StatusCode, String) {
    tracing::warn!(error = %err, "rejected request");
    (StatusCode::UNAUTHORIZED, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    // {"sub":"u1"}
    const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ1MSJ9.c2ln";

    async fn extract(request: Request<()>) -> Result<AuthenticatedUser, (StatusCode, String)> {
        let (mut parts, _) = request.into_parts();
        AuthenticatedUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_sub_claim() {
        let request = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {TOKEN}"))
            .body(())
            .unwrap();

        let user = extract(request).await.unwrap();

        assert_eq!(user, AuthenticatedUser("u1".to_string()));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let request = Request::builder().body(()).unwrap();

        let (status, message) = extract(request).await.unwrap_err();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "missing bearer token");
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer not-a-jwt")
            .body(())
            .unwrap();

        let (status, _) = extract(request).await.unwrap_err();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
