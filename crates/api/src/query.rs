//! Shared query parameter types for API handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use catalog_core::include::ResponseShape;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppError;

/// The `?include=` flag accepted by every movie endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeParams {
    /// Render related records nested instead of by reference.
    /// `0`, `false`, `no`, `off` and the empty string count as unset.
    pub include: Option<String>,
}

/// The response shape requested by the current request.
///
/// Parsed once from `?include=` and handed to the representation layer:
///
/// ```ignore
/// async fn get_movie(Shape(shape): Shape, ..) -> AppResult<Json<MovieRepresentation>> { .. }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shape(pub ResponseShape);

impl<S> FromRequestParts<S> for Shape
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IncludeParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Shape(ResponseShape::from_include(params.include.as_deref())))
    }
}

/// Parse query parameters, rejecting with the standard 400 error body.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(QueryParams(params))
    }
}
