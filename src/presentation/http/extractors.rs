// src/presentation/http/extractors.rs
use crate::application::{dto::Actor, error::ApplicationError};
use crate::domain::user::{Role, UserId};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

use super::error::HttpError;

/// Headers the upstream auth middleware attaches after verifying the token.
/// Their contents are trusted here; token mechanics are out of scope.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

#[derive(Debug, Clone)]
pub struct Authenticated(pub Actor);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers)
            .map(Self)
            .map_err(HttpError::from_error)
    }
}

fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApplicationError> {
    let raw_id = header_value(headers, ACTOR_ID_HEADER)?;
    let id = raw_id
        .parse::<i64>()
        .ok()
        .and_then(|id| UserId::new(id).ok())
        .ok_or_else(|| {
            ApplicationError::unauthorized(format!("invalid actor id '{raw_id}'"))
        })?;

    let raw_role = header_value(headers, ACTOR_ROLE_HEADER)?;
    let role = raw_role
        .parse::<Role>()
        .map_err(|_| ApplicationError::unauthorized(format!("unknown actor role '{raw_role}'")))?;

    Ok(Actor::new(id, role))
}

fn header_value(headers: &HeaderMap, name: &str) -> Result<String, ApplicationError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| ApplicationError::unauthorized(format!("missing {name} header")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(id: &str, role: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(ACTOR_ID_HEADER, id.parse().unwrap());
        map.insert(ACTOR_ROLE_HEADER, role.parse().unwrap());
        map
    }

    #[test]
    fn parses_actor_from_headers() {
        let actor = actor_from_headers(&headers("7", "adsManager")).unwrap();
        assert_eq!(i64::from(actor.id), 7);
        assert_eq!(actor.role, Role::AdsManager);
    }

    #[test]
    fn missing_identity_is_unauthorized() {
        let err = actor_from_headers(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = actor_from_headers(&headers("7", "superuser")).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = actor_from_headers(&headers("seven", "admin")).unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
