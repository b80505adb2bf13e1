//! Domain records handed to the app, plus the inputs operations accept.
//!
//! # Design
//! Every record is a flat value built fresh from one response and owned by
//! the caller afterwards. Referential integrity between records is the
//! server's business; nothing here cross-checks ids.

use serde::{Deserialize, Serialize};

use crate::auth::AuthToken;
use crate::upload::PhotoUpload;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub post_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub post_id: String,
    pub author_id: String,
    /// Display name of the author.
    pub author_name: String,
    pub author_username: String,
    pub author_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub slug: String,
    /// Display name of the author.
    pub author: String,
    pub author_id: String,
    pub author_username: String,
    pub author_image: Option<String>,
    /// Display name of the category.
    pub category: String,
    pub category_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub likes: u32,
    pub comment_count: u32,
    pub is_liked: bool,
    /// Only filled by the post detail endpoint.
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.categories.is_empty() && self.posts.is_empty()
    }
}

/// An authenticated session: the bearer token and the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: AuthToken,
    pub user: User,
}

/// Outcome of a toggle-like call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus {
    pub liked: bool,
}

/// Input for creating a post. A photo is mandatory.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub photo: PhotoUpload,
}

/// Input for updating a post. Omitting `photo` keeps the current image.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub photo: Option<PhotoUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}
