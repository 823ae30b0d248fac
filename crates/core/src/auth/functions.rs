use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use super::AuthError;

/// Claims read from the token payload.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively; surrounding whitespace is ignored.
pub fn bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header_value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingToken)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Read the owner identity (`sub` claim) from a JWT.
///
/// The token signature has already been verified by the API gateway
/// authorizer, so only the payload segment is decoded here.
pub fn user_id_from_token(token: &str) -> Result<String, AuthError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => {
            return Err(AuthError::InvalidToken(
                "expected three dot-separated segments".to_string(),
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    match claims.sub {
        Some(sub) if !sub.trim().is_empty() => Ok(sub),
        _ => Err(AuthError::MissingClaim("sub".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn bearer_token_strips_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token("bearer   abc ").unwrap(), "abc");
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic dXNlcg=="), Err(AuthError::MissingToken));
        assert_eq!(bearer_token("Bearer"), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(""), Err(AuthError::MissingToken));
    }

    #[test]
    fn user_id_from_token_reads_sub() {
        let token = token_with_payload(r#"{"sub":"google-oauth2|1234","iat":1}"#);
        assert_eq!(user_id_from_token(&token).unwrap(), "google-oauth2|1234");
    }

    #[test]
    fn user_id_from_token_requires_sub() {
        let token = token_with_payload(r#"{"iat":1}"#);
        assert_eq!(
            user_id_from_token(&token),
            Err(AuthError::MissingClaim("sub".to_string()))
        );
    }

    #[test]
    fn user_id_from_token_rejects_malformed_tokens() {
        assert!(matches!(
            user_id_from_token("not-a-jwt"),
            Err(AuthError::InvalidToken(_))
        ));
        assert!(matches!(
            user_id_from_token("a.!!!.c"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
