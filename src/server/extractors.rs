//! Custom extractors for the HTTP server.

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, header::COOKIE, request::Parts},
    Form,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::AppError;
use crate::session::parse_session_cookie;

use super::AppState;

/// Extractor for `MessagePack` request bodies.
///
/// This extractor deserializes the request body from `MessagePack` format.
/// It accepts both `application/msgpack` and `application/x-msgpack` content
/// types, and bodies without a content type.
pub struct MsgPackExtractor<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for MsgPackExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.contains("msgpack") && !content_type.is_empty() {
            return Err(AppError::InvalidBody(format!(
                "expected application/msgpack, got {content_type}"
            )));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(format!("failed to read request body: {e}")))?;

        rmp_serde::from_slice(&bytes)
            .map(MsgPackExtractor)
            .map_err(|e| AppError::InvalidBody(format!("failed to deserialize MessagePack: {e}")))
    }
}

/// URL-encoded form body whose rejections are reported as [`AppError`]
pub struct FormExtractor<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(value)| FormExtractor(value))
            .map_err(|e| AppError::InvalidBody(format!("failed to read form: {}", e.body_text())))
    }
}

/// Session id from the request's cookie, if present and well-formed
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie(pub Option<Uuid>);

#[async_trait]
impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let name = &state.config.session.cookie_name;
        let id = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| parse_session_cookie(header, name));

        Ok(SessionCookie(id))
    }
}
