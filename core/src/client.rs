//! Stateless HTTP request builder and response parser for the blog API.
//!
//! # Design
//! `BlogClient` holds only configuration and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; the
//! caller performs the round-trip in between. Authenticated builders take the
//! bearer token explicitly and refuse a blank one before anything else, so an
//! unauthenticated call never reaches the network.
//!
//! Parsers apply the same policy everywhere: a non-2xx status goes through
//! the classifier, a 2xx envelope with `success: false` surfaces the server's
//! message (or a per-operation default), and a successful envelope is mapped
//! into domain records.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthToken;
use crate::classify::classify;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::like::resolve_liked;
use crate::mapper;
use crate::messages;
use crate::types::{
    Category, Comment, LikeStatus, NewPost, Post, PostUpdate, Registration, SearchResult, Session,
    User,
};
use crate::upload::{MultipartForm, PhotoUpload, PHOTO_FIELD};
use crate::wire::{
    ApiEnvelope, CategoryResponse, CommentResponse, CreateCommentRequest, LoginRequest,
    LoginResponse, PostResponse, RegisterRequest, SearchResponse, UserResponse,
};

/// Synchronous, stateless client for the blog API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    home_posts_limit: usize,
    max_image_bytes: u64,
}

impl BlogClient {
    /// Client for `base_url` with default limits.
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            home_posts_limit: config.home_posts_limit,
            max_image_bytes: config.max_image_bytes,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn home_posts_limit(&self) -> usize {
        self.home_posts_limit
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    pub fn build_login(&self, username: &str, password: &str) -> Result<HttpRequest, ApiError> {
        let body = LoginRequest {
            username: username.trim(),
            password,
        };
        json_request(HttpMethod::Post, self.url("/auth/login"), Vec::new(), &body)
    }

    pub fn build_register(&self, input: &Registration) -> Result<HttpRequest, ApiError> {
        let body = RegisterRequest {
            fullname: input.fullname.trim(),
            email: input.email.trim(),
            username: input.username.trim(),
            password: &input.password,
            confirm_password: &input.confirm_password,
        };
        json_request(HttpMethod::Post, self.url("/auth/register"), Vec::new(), &body)
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<Session, ApiError> {
        let data: LoginResponse = read_data(&response, messages::FAILED_LOGIN)?;
        Ok(Session {
            token: AuthToken::new(data.access_token),
            user: mapper::user(data.user),
        })
    }

    pub fn parse_register(&self, response: HttpResponse) -> Result<User, ApiError> {
        let data: UserResponse = read_data(&response, messages::FAILED_REGISTER)?;
        Ok(mapper::user(data))
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    /// `GET /posts`. Shared by the full list, the home feed and the count.
    pub fn build_list_posts(&self, token: &AuthToken) -> Result<HttpRequest, ApiError> {
        get_request(token, self.url("/posts"))
    }

    pub fn build_posts_by_author(
        &self,
        token: &AuthToken,
        author_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        get_request(token, self.url(&format!("/users/{}/posts", segment(author_id))))
    }

    pub fn build_posts_by_category(
        &self,
        token: &AuthToken,
        category_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        get_request(
            token,
            self.url(&format!("/categories/{}/posts", segment(category_id))),
        )
    }

    pub fn build_get_post(&self, token: &AuthToken, post_id: &str) -> Result<HttpRequest, ApiError> {
        get_request(token, self.url(&format!("/posts/{}", segment(post_id))))
    }

    pub fn build_create_post(
        &self,
        token: &AuthToken,
        input: &NewPost,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        input.photo.validate(self.max_image_bytes)?;
        Ok(self.post_form(
            HttpMethod::Post,
            self.url("/posts"),
            auth,
            [&input.title, &input.content, &input.category_id],
            Some(&input.photo),
        ))
    }

    /// Multipart `PUT /posts/{id}`; the photo part is only sent when
    /// replacing the image.
    pub fn build_update_post(
        &self,
        token: &AuthToken,
        post_id: &str,
        input: &PostUpdate,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        if let Some(photo) = &input.photo {
            photo.validate_replacement(self.max_image_bytes)?;
        }
        Ok(self.post_form(
            HttpMethod::Put,
            self.url(&format!("/posts/{}", segment(post_id))),
            auth,
            [&input.title, &input.content, &input.category_id],
            input.photo.as_ref(),
        ))
    }

    fn post_form(
        &self,
        method: HttpMethod,
        path: String,
        auth: (String, String),
        [title, content, category_id]: [&String; 3],
        photo: Option<&PhotoUpload>,
    ) -> HttpRequest {
        let mut form = MultipartForm::new()
            .text("title", title)
            .text("content", content)
            .text("categoryId", category_id);
        if let Some(photo) = photo {
            form = form.file(PHOTO_FIELD, photo);
        }
        let (content_type, body) = form.finish();
        HttpRequest {
            method,
            path,
            headers: vec![auth, ("content-type".to_string(), content_type)],
            body: Some(body),
        }
    }

    pub fn build_delete_post(
        &self,
        token: &AuthToken,
        post_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.url(&format!("/posts/{}", segment(post_id))),
            headers: vec![auth],
            body: None,
        })
    }

    /// Newest first.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        parse_sorted_posts(&response, messages::FAILED_LOAD_POSTS)
    }

    /// Newest first, truncated to the configured home feed size.
    pub fn parse_home_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        let mut posts = parse_sorted_posts(&response, messages::FAILED_LOAD_POSTS)?;
        posts.truncate(self.home_posts_limit);
        Ok(posts)
    }

    pub fn parse_posts_count(&self, response: HttpResponse) -> Result<usize, ApiError> {
        let data: Vec<Value> = read_data(&response, messages::FAILED_LOAD_POSTS)?;
        Ok(data.len())
    }

    pub fn parse_posts_by_author(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        parse_sorted_posts(&response, messages::FAILED_LOAD_AUTHOR_POSTS)
    }

    pub fn parse_posts_by_category(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        parse_sorted_posts(&response, messages::FAILED_LOAD_CATEGORY_POSTS)
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let data: PostResponse = read_data(&response, messages::POST_NOT_FOUND)?;
        Ok(mapper::post(data))
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let data: PostResponse = read_data(&response, messages::FAILED_CREATE_POST)?;
        Ok(mapper::post(data))
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let data: PostResponse = read_data(&response, messages::FAILED_UPDATE_POST)?;
        Ok(mapper::post(data))
    }

    /// The server echoes the deleted post.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        let data: PostResponse = read_data(&response, messages::FAILED_DELETE_POST)?;
        Ok(mapper::post(data))
    }

    // -----------------------------------------------------------------------
    // Categories & search
    // -----------------------------------------------------------------------

    pub fn build_list_categories(&self, token: &AuthToken) -> Result<HttpRequest, ApiError> {
        get_request(token, self.url("/categories"))
    }

    pub fn parse_list_categories(&self, response: HttpResponse) -> Result<Vec<Category>, ApiError> {
        let data: Vec<CategoryResponse> = read_data(&response, messages::FAILED_LOAD_CATEGORIES)?;
        Ok(data.into_iter().map(mapper::category).collect())
    }

    /// A blank keyword is rejected locally, after the token check.
    pub fn build_search(&self, token: &AuthToken, keyword: &str) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ApiError::InvalidInput(messages::KEYWORD_EMPTY.to_string()));
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: self.url(&format!("/search?keyword={}", urlencoding::encode(keyword))),
            headers: vec![auth],
            body: None,
        })
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<SearchResult, ApiError> {
        let data: SearchResponse = read_data(&response, messages::FAILED_SEARCH)?;
        Ok(mapper::search(data))
    }

    // -----------------------------------------------------------------------
    // Comments & likes
    // -----------------------------------------------------------------------

    pub fn build_create_comment(
        &self,
        token: &AuthToken,
        post_id: &str,
        content: &str,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        let body = CreateCommentRequest {
            content: content.trim(),
        };
        json_request(
            HttpMethod::Post,
            self.url(&format!("/posts/{}/comments", segment(post_id))),
            vec![auth],
            &body,
        )
    }

    pub fn build_delete_comment(
        &self,
        token: &AuthToken,
        comment_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.url(&format!("/comments/{}", segment(comment_id))),
            headers: vec![auth],
            body: None,
        })
    }

    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        let data: CommentResponse = read_data(&response, messages::FAILED_CREATE_COMMENT)?;
        Ok(mapper::comment(data))
    }

    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        let data: CommentResponse = read_data(&response, messages::FAILED_DELETE_COMMENT)?;
        Ok(mapper::comment(data))
    }

    pub fn build_toggle_like(
        &self,
        token: &AuthToken,
        post_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        let auth = token.authorization_header()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(&format!("/posts/{}/likes", segment(post_id))),
            headers: vec![auth],
            body: None,
        })
    }

    /// Unlike the other parsers, a missing `data` is meaningful here: the
    /// server drops the payload when a like is removed.
    pub fn parse_toggle_like(&self, response: HttpResponse) -> Result<LikeStatus, ApiError> {
        let envelope: ApiEnvelope<Value> = read_envelope(&response)?;
        if !envelope.success {
            return Err(rejected(envelope.message, messages::FAILED_TOGGLE_LIKE));
        }
        let explicit = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("liked"))
            .and_then(Value::as_bool);
        let has_data = envelope.data.is_some();
        Ok(LikeStatus {
            liked: resolve_liked(explicit, &envelope.message, has_data),
        })
    }
}

/// Percent-encode a single path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn get_request(token: &AuthToken, path: String) -> Result<HttpRequest, ApiError> {
    let auth = token.authorization_header()?;
    Ok(HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: vec![auth],
        body: None,
    })
}

fn json_request<B: Serialize>(
    method: HttpMethod,
    path: String,
    mut headers: Vec<(String, String)>,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
    headers.push(("content-type".to_string(), "application/json".to_string()));
    Ok(HttpRequest {
        method,
        path,
        headers,
        body: Some(body),
    })
}

fn rejected(message: String, fallback: &str) -> ApiError {
    let message = message.trim();
    if message.is_empty() {
        ApiError::Rejected(fallback.to_string())
    } else {
        ApiError::Rejected(message.to_string())
    }
}

/// Classify non-2xx statuses, then decode the envelope.
fn read_envelope<D: DeserializeOwned>(response: &HttpResponse) -> Result<ApiEnvelope<D>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            message: classify(response.status, &response.body),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Decode the envelope and insist on `success: true` with a payload.
fn read_data<D: DeserializeOwned>(response: &HttpResponse, fallback: &str) -> Result<D, ApiError> {
    let envelope: ApiEnvelope<D> = read_envelope(response)?;
    if !envelope.success {
        return Err(rejected(envelope.message, fallback));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Deserialization("response has no data".to_string()))
}

fn parse_sorted_posts(response: &HttpResponse, fallback: &str) -> Result<Vec<Post>, ApiError> {
    let data: Vec<PostResponse> = read_data(response, fallback)?;
    let mut posts = mapper::posts(data);
    mapper::sort_newest_first(&mut posts);
    Ok(posts)
}
