//! Blog operations end to end: build, send, parse.
//!
//! `BlogRepository` pairs a `BlogClient` with a `Transport`. Every call is an
//! independent request/response with no retries and no shared mutable state;
//! concurrent calls are unordered, as on the server.

use tracing::{debug, warn};

use crate::auth::AuthToken;
use crate::client::BlogClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    Category, Comment, LikeStatus, NewPost, Post, PostUpdate, Registration, SearchResult, Session,
    User,
};

#[derive(Debug, Clone)]
pub struct BlogRepository<T> {
    client: BlogClient,
    transport: T,
}

impl BlogRepository<UreqTransport> {
    /// Repository over the bundled ureq transport.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(BlogClient::from_config(config), UreqTransport::new(config))
    }
}

impl<T: Transport> BlogRepository<T> {
    pub fn new(client: BlogClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &BlogClient {
        &self.client
    }

    /// Build, send and parse one call, logging failures with their
    /// user-facing message.
    fn call<R>(
        &self,
        operation: &'static str,
        build: impl FnOnce(&BlogClient) -> Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&BlogClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result = build(&self.client)
            .and_then(|request| self.send(operation, request))
            .and_then(|response| parse(&self.client, response));
        if let Err(err) = &result {
            warn!(operation, status = ?err.status(), error = %err, "blog api call failed");
        }
        result
    }

    fn send(&self, operation: &'static str, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(operation, method = request.method.as_str(), path = %request.path, "sending request");
        let response = self
            .transport
            .execute(request)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        debug!(operation, status = response.status, "received response");
        Ok(response)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        self.call(
            "login",
            |c| c.build_login(username, password),
            BlogClient::parse_login,
        )
    }

    pub fn register(&self, input: &Registration) -> Result<User, ApiError> {
        self.call("register", |c| c.build_register(input), BlogClient::parse_register)
    }

    /// All posts, newest first.
    pub fn get_all_posts(&self, token: &AuthToken) -> Result<Vec<Post>, ApiError> {
        self.call(
            "get_all_posts",
            |c| c.build_list_posts(token),
            BlogClient::parse_list_posts,
        )
    }

    /// The newest posts, capped at the configured home feed size.
    pub fn get_posts_for_home(&self, token: &AuthToken) -> Result<Vec<Post>, ApiError> {
        self.call(
            "get_posts_for_home",
            |c| c.build_list_posts(token),
            BlogClient::parse_home_posts,
        )
    }

    pub fn get_total_posts_count(&self, token: &AuthToken) -> Result<usize, ApiError> {
        self.call(
            "get_total_posts_count",
            |c| c.build_list_posts(token),
            BlogClient::parse_posts_count,
        )
    }

    pub fn get_posts_by_author(
        &self,
        token: &AuthToken,
        author_id: &str,
    ) -> Result<Vec<Post>, ApiError> {
        self.call(
            "get_posts_by_author",
            |c| c.build_posts_by_author(token, author_id),
            BlogClient::parse_posts_by_author,
        )
    }

    pub fn get_posts_by_category(
        &self,
        token: &AuthToken,
        category_id: &str,
    ) -> Result<Vec<Post>, ApiError> {
        self.call(
            "get_posts_by_category",
            |c| c.build_posts_by_category(token, category_id),
            BlogClient::parse_posts_by_category,
        )
    }

    pub fn get_post(&self, token: &AuthToken, post_id: &str) -> Result<Post, ApiError> {
        self.call(
            "get_post",
            |c| c.build_get_post(token, post_id),
            BlogClient::parse_get_post,
        )
    }

    pub fn search(&self, token: &AuthToken, keyword: &str) -> Result<SearchResult, ApiError> {
        self.call(
            "search",
            |c| c.build_search(token, keyword),
            BlogClient::parse_search,
        )
    }

    pub fn get_categories(&self, token: &AuthToken) -> Result<Vec<Category>, ApiError> {
        self.call(
            "get_categories",
            |c| c.build_list_categories(token),
            BlogClient::parse_list_categories,
        )
    }

    pub fn create_post(&self, token: &AuthToken, input: &NewPost) -> Result<Post, ApiError> {
        self.call(
            "create_post",
            |c| c.build_create_post(token, input),
            BlogClient::parse_create_post,
        )
    }

    pub fn update_post(
        &self,
        token: &AuthToken,
        post_id: &str,
        input: &PostUpdate,
    ) -> Result<Post, ApiError> {
        self.call(
            "update_post",
            |c| c.build_update_post(token, post_id, input),
            BlogClient::parse_update_post,
        )
    }

    pub fn delete_post(&self, token: &AuthToken, post_id: &str) -> Result<Post, ApiError> {
        self.call(
            "delete_post",
            |c| c.build_delete_post(token, post_id),
            BlogClient::parse_delete_post,
        )
    }

    pub fn create_comment(
        &self,
        token: &AuthToken,
        post_id: &str,
        content: &str,
    ) -> Result<Comment, ApiError> {
        self.call(
            "create_comment",
            |c| c.build_create_comment(token, post_id, content),
            BlogClient::parse_create_comment,
        )
    }

    pub fn delete_comment(&self, token: &AuthToken, comment_id: &str) -> Result<Comment, ApiError> {
        self.call(
            "delete_comment",
            |c| c.build_delete_comment(token, comment_id),
            BlogClient::parse_delete_comment,
        )
    }

    pub fn toggle_like(&self, token: &AuthToken, post_id: &str) -> Result<LikeStatus, ApiError> {
        self.call(
            "toggle_like",
            |c| c.build_toggle_like(token, post_id),
            BlogClient::parse_toggle_like,
        )
    }
}
