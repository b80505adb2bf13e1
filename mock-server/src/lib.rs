//! In-memory stand-in for the blog REST API.
//!
//! Serves the same routes, envelope (`{success, message, data}`) and error
//! bodies as the production backend so the client core can be exercised end
//! to end. State lives in one `RwLock`ed `Store` seeded with a demo account
//! and two categories.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "password123";
pub const CATEGORY_TECH: &str = "cat-tech";
pub const CATEGORY_SCIENCE: &str = "cat-science";

pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Clone, Debug)]
struct UserRecord {
    id: String,
    username: String,
    fullname: String,
    email: String,
    password: String,
    image: String,
    created_at: String,
    updated_at: String,
}

#[derive(Clone, Debug)]
struct CategoryRecord {
    id: String,
    name: String,
    created_at: String,
    updated_at: String,
}

#[derive(Clone, Debug)]
struct PostRecord {
    id: String,
    title: String,
    content: String,
    image: String,
    slug: String,
    author_id: String,
    category_id: String,
    created_at: String,
    updated_at: String,
}

#[derive(Clone, Debug)]
struct CommentRecord {
    id: String,
    content: String,
    post_id: String,
    author_id: String,
    created_at: String,
    updated_at: String,
}

#[derive(Clone, Debug)]
struct LikeRecord {
    id: String,
    user_id: String,
    post_id: String,
    created_at: String,
}

/// Everything the server knows. Collections are `Vec`s so list endpoints
/// answer in insertion order, oldest first.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<UserRecord>,
    sessions: HashMap<String, String>,
    categories: Vec<CategoryRecord>,
    posts: Vec<PostRecord>,
    comments: Vec<CommentRecord>,
    likes: Vec<LikeRecord>,
    last_stamp: Option<DateTime<Utc>>,
}

impl Store {
    pub fn seeded() -> Self {
        let mut store = Store::default();
        let now = store.next_timestamp();
        store.users.push(UserRecord {
            id: Uuid::new_v4().to_string(),
            username: DEMO_USERNAME.to_string(),
            fullname: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            password: DEMO_PASSWORD.to_string(),
            image: String::new(),
            created_at: now.clone(),
            updated_at: now.clone(),
        });
        for (id, name) in [(CATEGORY_TECH, "Teknologi"), (CATEGORY_SCIENCE, "Sains")] {
            store.categories.push(CategoryRecord {
                id: id.to_string(),
                name: name.to_string(),
                created_at: now.clone(),
                updated_at: now.clone(),
            });
        }
        store
    }

    /// Add an account on top of whatever is already seeded.
    pub fn with_user(mut self, username: &str, password: &str, fullname: &str) -> Self {
        let now = self.next_timestamp();
        self.users.push(UserRecord {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            fullname: fullname.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
            image: String::new(),
            created_at: now.clone(),
            updated_at: now,
        });
        self
    }

    /// Strictly increasing RFC 3339 timestamps with millisecond precision,
    /// so records created back to back still order deterministically.
    /// The clock is truncated to the rendered precision before comparing.
    fn next_timestamp(&mut self) -> String {
        let now = Utc::now().trunc_subsecs(3);
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::milliseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn user(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    fn category(&self, id: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn post(&self, id: &str) -> Option<&PostRecord> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn user_view(&self, user: &UserRecord) -> Value {
        json!({
            "id": user.id,
            "username": user.username,
            "fullname": user.fullname,
            "email": user.email,
            "image": user.image,
            "createdAt": user.created_at,
            "updatedAt": user.updated_at,
        })
    }

    fn author_view(&self, user_id: &str) -> Value {
        match self.user(user_id) {
            Some(user) => json!({
                "id": user.id,
                "username": user.username,
                "fullname": user.fullname,
                "image": user.image,
            }),
            None => Value::Null,
        }
    }

    fn category_view(&self, category: &CategoryRecord) -> Value {
        let posts = self
            .posts
            .iter()
            .filter(|p| p.category_id == category.id)
            .count();
        json!({
            "id": category.id,
            "name": category.name,
            "createdAt": category.created_at,
            "updatedAt": category.updated_at,
            "_count": { "Post": posts },
        })
    }

    fn comment_view(&self, comment: &CommentRecord) -> Value {
        json!({
            "id": comment.id,
            "content": comment.content,
            "postId": comment.post_id,
            "authorId": comment.author_id,
            "createdAt": comment.created_at,
            "updatedAt": comment.updated_at,
            "author": self.author_view(&comment.author_id),
        })
    }

    fn post_view(&self, post: &PostRecord, viewer: &str, with_comments: bool) -> Value {
        let likes = self.likes.iter().filter(|l| l.post_id == post.id).count();
        let comments: Vec<&CommentRecord> =
            self.comments.iter().filter(|c| c.post_id == post.id).collect();
        let is_liked = self
            .likes
            .iter()
            .any(|l| l.post_id == post.id && l.user_id == viewer);
        let category = self
            .category(&post.category_id)
            .map(|c| json!({ "id": c.id, "name": c.name }))
            .unwrap_or(Value::Null);

        let mut view = json!({
            "id": post.id,
            "title": post.title,
            "content": post.content,
            "image": post.image,
            "slug": post.slug,
            "authorId": post.author_id,
            "categoryId": post.category_id,
            "createdAt": post.created_at,
            "updatedAt": post.updated_at,
            "author": self.author_view(&post.author_id),
            "category": category,
            "_count": { "Like": likes, "Comment": comments.len() },
            "isLiked": is_liked,
        });
        if with_comments {
            view["comments"] = comments.iter().map(|c| self.comment_view(c)).collect();
        }
        view
    }

    fn post_views<'a>(&self, posts: impl Iterator<Item = &'a PostRecord>, viewer: &str) -> Value {
        posts.map(|p| self.post_view(p, viewer, false)).collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_store(Store::seeded())
}

pub fn app_with_store(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{id}/comments", post(create_comment))
        .route("/posts/{id}/likes", post(toggle_like))
        .route("/comments/{id}", delete(delete_comment))
        .route("/users/{id}/posts", get(posts_by_author))
        .route("/categories", get(list_categories))
        .route("/categories/{id}/posts", get(posts_by_category))
        .route("/search", get(search));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES + 1024 * 1024))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// ---------------------------------------------------------------------------
// Envelope helpers
// ---------------------------------------------------------------------------

type ApiResult = Result<Response, Response>;

fn respond(status: StatusCode, success: bool, message: &str, data: Value) -> Response {
    (
        status,
        Json(json!({ "success": success, "message": message, "data": data })),
    )
        .into_response()
}

fn ok(status: StatusCode, message: &str, data: Value) -> ApiResult {
    Ok(respond(status, true, message, data))
}

fn fail(status: StatusCode, message: &str) -> Response {
    respond(status, false, message, Value::Null)
}

/// 400 with a validation envelope listing each offending field.
fn invalid(errors: &[(&str, String)]) -> Response {
    let data = errors
        .iter()
        .map(|(path, msg)| json!({ "type": "field", "msg": msg, "path": path, "location": "body" }))
        .collect();
    respond(StatusCode::BAD_REQUEST, false, "Validation error", data)
}

fn authenticate(headers: &HeaderMap, store: &Store) -> Result<String, Response> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .and_then(|token| store.sessions.get(token))
        .cloned()
        .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Token tidak valid atau sudah kedaluwarsa"))
}

fn required(body: &Value, field: &str, errors: &mut Vec<(&'static str, String)>, path: &'static str) -> String {
    let value = body
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    if value.is_empty() {
        errors.push((path, format!("{field} wajib diisi")));
    }
    value
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

async fn login(State(db): State<Db>, Json(body): Json<Value>) -> ApiResult {
    let mut errors = Vec::new();
    let username = required(&body, "username", &mut errors, "username");
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
    if password.is_empty() {
        errors.push(("password", "password wajib diisi".to_string()));
    }
    if !errors.is_empty() {
        return Err(invalid(&errors));
    }

    let mut store = db.write().await;
    let user = store
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .cloned()
        .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Username atau password salah"))?;

    let token = Uuid::new_v4().simple().to_string();
    store.sessions.insert(token.clone(), user.id.clone());
    info!(username = %user.username, "user logged in");
    ok(
        StatusCode::OK,
        "Login berhasil",
        json!({ "accessToken": token, "user": store.user_view(&user) }),
    )
}

async fn register(State(db): State<Db>, Json(body): Json<Value>) -> ApiResult {
    let mut errors = Vec::new();
    let fullname = required(&body, "fullname", &mut errors, "fullname");
    let email = required(&body, "email", &mut errors, "email");
    let username = required(&body, "username", &mut errors, "username");
    let password = required(&body, "password", &mut errors, "password");
    let confirm = body
        .get("confirm_password")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if !password.is_empty() && confirm != password {
        errors.push(("confirm_password", "Konfirmasi password tidak cocok".to_string()));
    }
    if !errors.is_empty() {
        return Err(invalid(&errors));
    }

    let mut store = db.write().await;
    if store.users.iter().any(|u| u.username == username) {
        return Err(respond(
            StatusCode::UNPROCESSABLE_ENTITY,
            false,
            "Validation error",
            json!([{ "msg": "Username sudah digunakan", "path": "username" }]),
        ));
    }

    let now = store.next_timestamp();
    let user = UserRecord {
        id: Uuid::new_v4().to_string(),
        username,
        fullname,
        email,
        password,
        image: String::new(),
        created_at: now.clone(),
        updated_at: now,
    };
    store.users.push(user.clone());
    info!(username = %user.username, "user registered");
    ok(StatusCode::CREATED, "Registrasi berhasil", store.user_view(&user))
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

async fn list_posts(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let store = db.read().await;
    let viewer = authenticate(&headers, &store)?;
    ok(
        StatusCode::OK,
        "Berhasil mengambil semua post",
        store.post_views(store.posts.iter(), &viewer),
    )
}

async fn posts_by_author(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(author_id): Path<String>,
) -> ApiResult {
    let store = db.read().await;
    let viewer = authenticate(&headers, &store)?;
    if store.user(&author_id).is_none() {
        return Err(fail(StatusCode::NOT_FOUND, "User tidak ditemukan"));
    }
    let posts = store.posts.iter().filter(|p| p.author_id == author_id);
    ok(
        StatusCode::OK,
        "Berhasil mengambil post user",
        store.post_views(posts, &viewer),
    )
}

async fn posts_by_category(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(category_id): Path<String>,
) -> ApiResult {
    let store = db.read().await;
    let viewer = authenticate(&headers, &store)?;
    if store.category(&category_id).is_none() {
        return Err(fail(StatusCode::NOT_FOUND, "Kategori tidak ditemukan"));
    }
    let posts = store.posts.iter().filter(|p| p.category_id == category_id);
    ok(
        StatusCode::OK,
        "Berhasil mengambil post kategori",
        store.post_views(posts, &viewer),
    )
}

async fn get_post(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> ApiResult {
    let store = db.read().await;
    let viewer = authenticate(&headers, &store)?;
    let post = store
        .post(&id)
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"))?;
    ok(
        StatusCode::OK,
        "Berhasil mengambil post",
        store.post_view(post, &viewer, true),
    )
}

#[derive(Debug, Default)]
struct PostForm {
    title: String,
    content: String,
    category_id: String,
    photo: Option<(String, usize)>,
}

async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, Response> {
    let mut form = PostForm::default();
    let reject = |e: axum::extract::multipart::MultipartError| fail(e.status(), &e.body_text());
    while let Some(field) = multipart.next_field().await.map_err(reject)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(reject)?;
                form.photo = Some((file_name, bytes.len()));
            }
            "title" => form.title = field.text().await.map_err(reject)?.trim().to_string(),
            "content" => form.content = field.text().await.map_err(reject)?.trim().to_string(),
            "categoryId" => {
                form.category_id = field.text().await.map_err(reject)?.trim().to_string()
            }
            _ => {}
        }
    }
    Ok(form)
}

/// Checks shared by create and update. Returns the stored image path for a
/// new photo, if one was sent.
fn check_post_form(store: &Store, form: &PostForm, photo_required: bool) -> Result<Option<String>, Response> {
    let mut errors = Vec::new();
    if form.title.is_empty() {
        errors.push(("title", "title wajib diisi".to_string()));
    }
    if form.content.is_empty() {
        errors.push(("content", "content wajib diisi".to_string()));
    }
    if form.category_id.is_empty() {
        errors.push(("categoryId", "categoryId wajib diisi".to_string()));
    }
    if photo_required && form.photo.is_none() {
        errors.push(("photo", "photo wajib diisi".to_string()));
    }
    if !errors.is_empty() {
        return Err(invalid(&errors));
    }
    if store.category(&form.category_id).is_none() {
        return Err(fail(StatusCode::BAD_REQUEST, "Kategori tidak ditemukan"));
    }

    let Some((file_name, len)) = &form.photo else {
        return Ok(None);
    };
    let ext = std::path::Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_PHOTO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(fail(StatusCode::BAD_REQUEST, "File type not allowed"));
    }
    if *len == 0 {
        return Err(invalid(&[("photo", "photo wajib diisi".to_string())]));
    }
    if *len > MAX_PHOTO_BYTES {
        return Err(fail(StatusCode::PAYLOAD_TOO_LARGE, "File too large"));
    }
    Ok(Some(format!("/uploads/{}.{ext}", Uuid::new_v4().simple())))
}

async fn create_post(State(db): State<Db>, headers: HeaderMap, multipart: Multipart) -> ApiResult {
    let author_id = authenticate(&headers, &*db.read().await)?;
    let form = read_post_form(multipart).await?;
    let mut store = db.write().await;
    let image = check_post_form(&store, &form, true)?.unwrap_or_default();

    let now = store.next_timestamp();
    let post = PostRecord {
        id: Uuid::new_v4().to_string(),
        slug: slugify(&form.title),
        title: form.title,
        content: form.content,
        image,
        author_id: author_id.clone(),
        category_id: form.category_id,
        created_at: now.clone(),
        updated_at: now,
    };
    store.posts.push(post.clone());
    info!(post_id = %post.id, "post created");
    ok(
        StatusCode::CREATED,
        "Post berhasil dibuat",
        store.post_view(&post, &author_id, false),
    )
}

async fn update_post(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult {
    let viewer = authenticate(&headers, &*db.read().await)?;
    let form = read_post_form(multipart).await?;
    let mut store = db.write().await;
    let existing = store
        .post(&id)
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"))?;
    if existing.author_id != viewer {
        return Err(fail(StatusCode::FORBIDDEN, "Anda bukan pemilik post ini"));
    }
    let image = check_post_form(&store, &form, false)?;

    let now = store.next_timestamp();
    let Some(post) = store.posts.iter_mut().find(|p| p.id == id) else {
        return Err(fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"));
    };
    post.slug = slugify(&form.title);
    post.title = form.title;
    post.content = form.content;
    post.category_id = form.category_id;
    if let Some(image) = image {
        post.image = image;
    }
    post.updated_at = now;
    let post = post.clone();
    info!(post_id = %post.id, "post updated");
    ok(
        StatusCode::OK,
        "Post berhasil diperbarui",
        store.post_view(&post, &viewer, false),
    )
}

async fn delete_post(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> ApiResult {
    let mut store = db.write().await;
    let viewer = authenticate(&headers, &store)?;
    let post = store
        .post(&id)
        .cloned()
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"))?;
    if post.author_id != viewer {
        return Err(fail(StatusCode::FORBIDDEN, "Anda bukan pemilik post ini"));
    }
    let view = store.post_view(&post, &viewer, false);
    store.posts.retain(|p| p.id != id);
    store.comments.retain(|c| c.post_id != id);
    store.likes.retain(|l| l.post_id != id);
    info!(post_id = %id, "post deleted");
    ok(StatusCode::OK, "Post berhasil dihapus", view)
}

// ---------------------------------------------------------------------------
// Categories & search
// ---------------------------------------------------------------------------

async fn list_categories(State(db): State<Db>, headers: HeaderMap) -> ApiResult {
    let store = db.read().await;
    authenticate(&headers, &store)?;
    let data = store
        .categories
        .iter()
        .map(|c| store.category_view(c))
        .collect();
    ok(StatusCode::OK, "Berhasil mengambil kategori", data)
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    keyword: String,
}

async fn search(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> ApiResult {
    let store = db.read().await;
    let viewer = authenticate(&headers, &store)?;
    let keyword = query.keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(fail(StatusCode::BAD_REQUEST, "Keyword pencarian wajib diisi"));
    }

    let users: Vec<Value> = store
        .users
        .iter()
        .filter(|u| {
            u.username.to_lowercase().contains(&keyword)
                || u.fullname.to_lowercase().contains(&keyword)
        })
        .map(|u| store.user_view(u))
        .collect();
    let categories: Vec<Value> = store
        .categories
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&keyword))
        .map(|c| store.category_view(c))
        .collect();
    let posts = store.post_views(
        store.posts.iter().filter(|p| {
            p.title.to_lowercase().contains(&keyword) || p.content.to_lowercase().contains(&keyword)
        }),
        &viewer,
    );

    ok(
        StatusCode::OK,
        "Pencarian berhasil",
        json!({ "users": users, "categories": categories, "posts": posts }),
    )
}

// ---------------------------------------------------------------------------
// Comments & likes
// ---------------------------------------------------------------------------

async fn create_comment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(post_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut store = db.write().await;
    let author_id = authenticate(&headers, &store)?;
    let mut errors = Vec::new();
    let content = required(&body, "content", &mut errors, "content");
    if !errors.is_empty() {
        return Err(invalid(&errors));
    }
    if store.post(&post_id).is_none() {
        return Err(fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"));
    }

    let now = store.next_timestamp();
    let comment = CommentRecord {
        id: Uuid::new_v4().to_string(),
        content,
        post_id,
        author_id,
        created_at: now.clone(),
        updated_at: now,
    };
    store.comments.push(comment.clone());
    info!(comment_id = %comment.id, post_id = %comment.post_id, "comment created");
    ok(
        StatusCode::CREATED,
        "Komentar berhasil dibuat",
        store.comment_view(&comment),
    )
}

async fn delete_comment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult {
    let mut store = db.write().await;
    let viewer = authenticate(&headers, &store)?;
    let comment = store
        .comments
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Komentar tidak ditemukan"))?;
    let post_owner = store.post(&comment.post_id).map(|p| p.author_id.as_str());
    if comment.author_id != viewer && post_owner != Some(viewer.as_str()) {
        return Err(fail(StatusCode::FORBIDDEN, "Anda tidak berhak menghapus komentar ini"));
    }
    let view = store.comment_view(&comment);
    store.comments.retain(|c| c.id != id);
    info!(comment_id = %id, "comment deleted");
    ok(StatusCode::OK, "Komentar berhasil dihapus", view)
}

/// Toggle semantics with the production server's wording: adding answers
/// 201 with the like record, removing answers 200 with `data: null`.
async fn toggle_like(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(post_id): Path<String>,
) -> ApiResult {
    let mut store = db.write().await;
    let user_id = authenticate(&headers, &store)?;
    if store.post(&post_id).is_none() {
        return Err(fail(StatusCode::NOT_FOUND, "Post tidak ditemukan"));
    }

    let before = store.likes.len();
    store
        .likes
        .retain(|l| !(l.post_id == post_id && l.user_id == user_id));
    if store.likes.len() != before {
        info!(post_id = %post_id, "like removed");
        return ok(StatusCode::OK, "Like berhasil dihapus", Value::Null);
    }

    let like = LikeRecord {
        id: Uuid::new_v4().to_string(),
        user_id,
        post_id,
        created_at: store.next_timestamp(),
    };
    let data = json!({
        "id": like.id,
        "userId": like.user_id,
        "postId": like.post_id,
        "createdAt": like.created_at,
    });
    info!(post_id = %like.post_id, "like added");
    store.likes.push(like);
    ok(StatusCode::CREATED, "Like berhasil ditambahkan", data)
}
