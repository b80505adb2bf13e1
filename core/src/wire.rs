//! Response shapes exactly as the blog API sends them.
//!
//! These mirror the server's camelCase JSON and are only ever consumed by
//! `mapper`, which reshapes them into the domain types in `types`. Fields the
//! server sometimes omits are defaulted rather than failing the whole parse.

use serde::{Deserialize, Serialize};

/// The `{success, message, data}` wrapper around every response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// One entry of a validation envelope's `data` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationError {
    pub msg: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// The trimmed-down author object embedded in posts and comments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorySummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Prisma-style relation counters (`_count`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Counts {
    #[serde(rename = "Like", default)]
    pub likes: u32,
    #[serde(rename = "Comment", default)]
    pub comments: u32,
    #[serde(rename = "Post", default)]
    pub posts: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(rename = "_count", default)]
    pub count: Counts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
}

/// A post as returned by list, create, update and delete endpoints. The
/// detail endpoint additionally fills `comments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
    #[serde(default)]
    pub category: Option<CategorySummary>,
    #[serde(rename = "_count", default)]
    pub count: Counts,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub users: Vec<UserResponse>,
    #[serde(default)]
    pub categories: Vec<CategoryResponse>,
    #[serde(default)]
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub fullname: &'a str,
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub content: &'a str,
}
