use axum::{
    async_trait,
    extract::{
        rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::api::errors::ApiError;
use crate::domain::pagination::Page;

/// JSON body extractor that rejects with the API error envelope
///
/// Syntactically broken bodies and missing content types are Bad Request;
/// well-formed JSON of the wrong shape is Unprocessable.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::unprocessable(e.body_text())),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// `?page=N` extractor
///
/// Never rejects: absent, malformed or non-positive values select page 1.
#[derive(Debug, Clone, Copy)]
pub struct PageParam(pub Page);

#[async_trait]
impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| Page::parse(q.page.as_deref()))
            .unwrap_or_default();

        Ok(PageParam(page))
    }
}

/// Integer path id extractor
///
/// A path segment that is not an integer cannot name a resource, so it is
/// reported as Not Found.
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        Ok(IdPath(id))
    }
}
