//! `BlogRepository` over a scripted in-process transport.
//!
//! The transport counts calls and replays a canned response, which makes it
//! possible to assert that credential checks happen before any I/O.

use std::cell::{Cell, RefCell};
use std::fmt;

use blog_core::{
    ApiError, AuthToken, BlogClient, BlogRepository, Category, ClientConfig, HttpMethod, HttpRequest,
    HttpResponse, NewPost, PhotoUpload, PostUpdate, Registration, Resource, Transport,
};

#[derive(Debug)]
struct Unreachable;

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection refused")
    }
}

/// Replays `response` (or fails when it is `None`) and records every request.
struct CountingTransport {
    calls: Cell<usize>,
    last: RefCell<Option<HttpRequest>>,
    response: Option<HttpResponse>,
}

impl CountingTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
            response: Some(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }),
        }
    }

    fn offline() -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
            response: None,
        }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for CountingTransport {
    type Error = Unreachable;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(request);
        self.response.clone().ok_or(Unreachable)
    }
}

fn repo(transport: &CountingTransport) -> BlogRepository<&CountingTransport> {
    BlogRepository::new(BlogClient::new("http://blog.test/api"), transport)
}

fn photo() -> PhotoUpload {
    PhotoUpload::new("cover.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0])
}

fn post_json(id: &str, created_at: &str) -> String {
    format!(
        r#"{{"id":"{id}","title":"Post {id}","content":"isi","image":"","slug":"post-{id}","authorId":"u1","categoryId":"c1","createdAt":"{created_at}","updatedAt":"{created_at}","author":{{"id":"u1","username":"demo","fullname":"Demo User","image":""}},"category":{{"id":"c1","name":"Teknologi"}},"_count":{{"Like":0,"Comment":0}}}}"#
    )
}

fn posts_body(count: usize) -> String {
    let posts: Vec<String> = (0..count)
        .map(|i| post_json(&format!("p{i}"), &format!("2024-01-{:02}T08:00:00.000Z", i + 1)))
        .collect();
    format!(r#"{{"success":true,"message":"ok","data":[{}]}}"#, posts.join(","))
}

#[test]
fn blank_token_never_reaches_the_transport() {
    let transport = CountingTransport::replying(200, r#"{"success":true,"message":"","data":[]}"#);
    let repo = repo(&transport);
    let token = AuthToken::new("   ");
    let update = PostUpdate {
        title: "t".to_string(),
        content: "c".to_string(),
        category_id: "c1".to_string(),
        photo: None,
    };
    let new_post = NewPost {
        title: "t".to_string(),
        content: "c".to_string(),
        category_id: "c1".to_string(),
        photo: photo(),
    };

    let results: Vec<(&str, ApiError)> = vec![
        ("get_all_posts", repo.get_all_posts(&token).unwrap_err()),
        ("get_posts_for_home", repo.get_posts_for_home(&token).unwrap_err()),
        ("get_total_posts_count", repo.get_total_posts_count(&token).unwrap_err()),
        ("get_posts_by_author", repo.get_posts_by_author(&token, "u1").unwrap_err()),
        ("get_posts_by_category", repo.get_posts_by_category(&token, "c1").unwrap_err()),
        ("get_post", repo.get_post(&token, "p1").unwrap_err()),
        ("search", repo.search(&token, "rust").unwrap_err()),
        ("get_categories", repo.get_categories(&token).unwrap_err()),
        ("create_post", repo.create_post(&token, &new_post).unwrap_err()),
        ("update_post", repo.update_post(&token, "p1", &update).unwrap_err()),
        ("delete_post", repo.delete_post(&token, "p1").unwrap_err()),
        ("create_comment", repo.create_comment(&token, "p1", "hi").unwrap_err()),
        ("delete_comment", repo.delete_comment(&token, "c1").unwrap_err()),
        ("toggle_like", repo.toggle_like(&token, "p1").unwrap_err()),
    ];

    for (operation, err) in results {
        assert_eq!(err, ApiError::Unauthorized, "{operation}");
        assert_eq!(err.to_string(), "Sesi berakhir. Silakan login kembali.");
    }
    assert_eq!(transport.calls(), 0);
}

#[test]
fn invalid_local_input_never_reaches_the_transport() {
    let transport = CountingTransport::replying(200, "{}");
    let repo = repo(&transport);
    let token = AuthToken::new("tok");

    let err = repo.search(&token, "   ").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let bad = NewPost {
        title: "t".to_string(),
        content: "c".to_string(),
        category_id: "c1".to_string(),
        photo: PhotoUpload::new("anim.gif", vec![1, 2, 3]),
    };
    let err = repo.create_post(&token, &bad).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    assert_eq!(transport.calls(), 0);
}

#[test]
fn transport_failure_is_network_error() {
    let transport = CountingTransport::offline();
    let repo = repo(&transport);

    let err = repo.get_categories(&AuthToken::new("tok")).unwrap_err();
    assert_eq!(err, ApiError::Network("connection refused".to_string()));
    assert_eq!(err.to_string(), "Kesalahan jaringan: connection refused");
    assert_eq!(transport.calls(), 1);
}

#[test]
fn requests_carry_bearer_token() {
    let transport = CountingTransport::replying(200, &posts_body(0));
    let repo = repo(&transport);

    repo.get_all_posts(&AuthToken::new(" tok-9 ")).unwrap();
    let last = transport.last.borrow();
    let request = last.as_ref().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path, "http://blog.test/api/posts");
    assert_eq!(request.header("Authorization"), Some("Bearer tok-9"));
}

#[test]
fn all_posts_are_sorted_newest_first() {
    let transport = CountingTransport::replying(200, &posts_body(4));
    let repo = repo(&transport);

    let posts = repo.get_all_posts(&AuthToken::new("tok")).unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p3", "p2", "p1", "p0"]);
}

#[test]
fn home_feed_is_truncated_to_limit() {
    let transport = CountingTransport::replying(200, &posts_body(15));
    let repo = repo(&transport);
    let token = AuthToken::new("tok");

    let home = repo.get_posts_for_home(&token).unwrap();
    assert_eq!(home.len(), 10);
    assert_eq!(home[0].id, "p14");
    assert_eq!(home[9].id, "p5");

    assert_eq!(repo.get_total_posts_count(&token).unwrap(), 15);
}

#[test]
fn home_feed_limit_follows_config() {
    let transport = CountingTransport::replying(200, &posts_body(6));
    let config = ClientConfig {
        base_url: "http://blog.test/api".to_string(),
        home_posts_limit: 3,
        ..ClientConfig::default()
    };
    let repo = BlogRepository::new(BlogClient::from_config(&config), &transport);

    let home = repo.get_posts_for_home(&AuthToken::new("tok")).unwrap();
    let ids: Vec<&str> = home.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p5", "p4", "p3"]);
}

#[test]
fn server_status_is_classified() {
    let body = r#"{"success":false,"message":"Validation error","data":[{"msg":"Username sudah digunakan","path":"username"}]}"#;
    let transport = CountingTransport::replying(422, body);
    let repo = repo(&transport);

    let err = repo
        .register(&Registration {
            fullname: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            username: "demo".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Validasi gagal: Username sudah digunakan");
}

#[test]
fn expired_session_is_reported_as_unauthorized() {
    let transport = CountingTransport::replying(401, r#"{"success":false,"message":"jwt expired"}"#);
    let repo = repo(&transport);

    let err = repo.get_post(&AuthToken::new("stale"), "p1").unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Sesi berakhir. Silakan login kembali.");
}

#[test]
fn toggle_like_reports_new_state() {
    let transport = CountingTransport::replying(200, r#"{"success":true,"message":"Like berhasil dihapus","data":null}"#);
    let repo = repo(&transport);

    let status = repo.toggle_like(&AuthToken::new("tok"), "p1").unwrap();
    assert!(!status.liked);
    let last = transport.last.borrow();
    assert_eq!(last.as_ref().unwrap().path, "http://blog.test/api/posts/p1/likes");
}

#[test]
fn results_fold_into_resource() {
    let transport = CountingTransport::replying(200, r#"{"success":true,"message":"ok","data":[{"id":"c1","name":"Teknologi","createdAt":"","updatedAt":"","_count":{"Post":4}}]}"#);
    let repo = repo(&transport);

    let loaded: Resource<Vec<Category>> = repo.get_categories(&AuthToken::new("tok")).into();
    assert_eq!(loaded.value().map(Vec::len), Some(1));
    assert_eq!(loaded.value().unwrap()[0].post_count, 4);

    let failed: Resource<Vec<Category>> = repo.get_categories(&AuthToken::empty()).into();
    assert_eq!(failed.error_message(), Some("Sesi berakhir. Silakan login kembali."));
}
