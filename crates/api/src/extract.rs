//! Extractors whose rejections render as the standard JSON error body.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use serde::Deserialize;
use trivia_core::pagination::parse_page;

use crate::error::AppError;

/// `axum::Json` with rejections mapped through [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections mapped through [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with rejections mapped through [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `?page=` query parameter.
///
/// Kept as a raw string so a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested 1-based page number.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}
