//! API client core for the blog service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for every
//! endpoint the blog app consumes (posts, categories, comments, likes,
//! search, auth), turning raw responses into domain records or a
//! user-facing error message.
//!
//! # Design
//! - `BlogClient` is stateless: `build_*` produces a request, `parse_*`
//!   consumes a response, and the I/O in between is someone else's job.
//! - `BlogRepository` glues the two halves to a `Transport`; `UreqTransport`
//!   is the bundled blocking implementation.
//! - Credentials are passed per call. A blank token fails with
//!   `ApiError::Unauthorized` before a request exists.
//! - Failed responses are translated by `classify`, an ordered table of
//!   matchers per status code.
//! - Wire shapes (`wire`) are kept apart from domain records (`types`);
//!   `mapper` converts between them.

pub mod auth;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod like;
pub mod mapper;
pub mod messages;
pub mod repository;
pub mod resource;
pub mod transport;
pub mod types;
pub mod upload;
pub mod wire;

pub use auth::AuthToken;
pub use classify::classify;
pub use client::BlogClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use like::infer_liked;
pub use repository::BlogRepository;
pub use resource::Resource;
pub use transport::{Transport, UreqTransport};
pub use types::{
    Category, Comment, LikeStatus, NewPost, Post, PostUpdate, Registration, SearchResult, Session,
    User,
};
pub use upload::{PhotoRejection, PhotoUpload};
