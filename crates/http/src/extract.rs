//! Request extractors that run shelf validation before a handler sees input

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use shelf_validation::{parse_int_param, Validator};

use crate::error::AppError;

/// JSON body validated and coerced by the router's [`Validator`].
///
/// The validator is taken from router state, so any state `S` that can
/// produce an `Arc<Validator>` works.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    Arc<Validator>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        let validator = Arc::<Validator>::from_ref(state);
        let value = validator.validate::<T>(&raw)?;

        Ok(Self(value))
    }
}

/// Single `id` path segment parsed as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(parse_int_param("id", &raw)?))
    }
}
