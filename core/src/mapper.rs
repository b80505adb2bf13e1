//! Reshape wire responses into domain records.

use chrono::DateTime;

use crate::types::{Category, Comment, Post, SearchResult, User};
use crate::wire::{
    AuthorSummary, CategoryResponse, CommentResponse, PostResponse, SearchResponse, UserResponse,
};

/// The server sends `""` for "no image"; the app wants `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn user(raw: UserResponse) -> User {
    User {
        id: raw.id,
        username: raw.username,
        fullname: raw.fullname,
        email: raw.email,
        image: non_empty(raw.image),
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

pub fn category(raw: CategoryResponse) -> Category {
    Category {
        id: raw.id,
        name: raw.name,
        post_count: raw.count.posts,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

pub fn comment(raw: CommentResponse) -> Comment {
    let author = raw.author.unwrap_or_default();
    Comment {
        id: raw.id,
        content: raw.content,
        post_id: raw.post_id,
        author_id: if raw.author_id.is_empty() {
            author.id
        } else {
            raw.author_id
        },
        author_name: author.fullname,
        author_username: author.username,
        author_image: non_empty(author.image),
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

pub fn post(raw: PostResponse) -> Post {
    let AuthorSummary {
        id: author_id,
        username: author_username,
        fullname: author_name,
        image: author_image,
    } = raw.author.unwrap_or_default();
    let category = raw.category.unwrap_or_default();

    Post {
        id: raw.id,
        title: raw.title,
        content: raw.content,
        image: non_empty(raw.image),
        slug: raw.slug,
        author: author_name,
        author_id: if raw.author_id.is_empty() {
            author_id
        } else {
            raw.author_id
        },
        author_username,
        author_image: non_empty(author_image),
        category: category.name,
        category_id: if raw.category_id.is_empty() {
            category.id
        } else {
            raw.category_id
        },
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        likes: raw.count.likes,
        comment_count: raw.count.comments,
        is_liked: raw.is_liked,
        comments: raw.comments.into_iter().map(comment).collect(),
    }
}

pub fn posts(raw: Vec<PostResponse>) -> Vec<Post> {
    raw.into_iter().map(post).collect()
}

pub fn search(raw: SearchResponse) -> SearchResult {
    SearchResult {
        users: raw.users.into_iter().map(user).collect(),
        categories: raw.categories.into_iter().map(category).collect(),
        posts: posts(raw.posts),
    }
}

/// Milliseconds since the epoch for an RFC 3339 timestamp, `None` when it
/// does not parse.
pub fn timestamp_millis(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Stable sort, newest `created_at` first; unparseable timestamps last.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_cached_key(|p| std::cmp::Reverse(timestamp_millis(&p.created_at)));
}
