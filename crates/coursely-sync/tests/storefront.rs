//! Session, cart, and feedback flows against an in-process fake backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use coursely_client::{ApiError, ClientConfig, FileUpload};
use coursely_core::{CartItem, Price, ProfileUpdate, Registration, Role, User};
use coursely_sync::{CartSnapshot, SessionState, Storefront};

// =============================================================================
// Fake backend
// =============================================================================

#[derive(Default)]
struct Backend {
    users: Mutex<HashMap<i64, Value>>,
    passwords: Mutex<HashMap<String, (String, i64)>>,
    current: Mutex<Option<i64>>,
    carts: Mutex<HashMap<i64, Vec<Value>>>,
    comments: Mutex<Vec<Value>>,
    ratings: Mutex<Vec<Value>>,
    next_line_id: AtomicI64,
    fail_items: AtomicBool,
    fail_logout: AtomicBool,
    slow_items_once: AtomicBool,
    slow_current_user_once: AtomicBool,
    checkout_hits: AtomicUsize,
    comment_posts: AtomicUsize,
}

type Shared = Arc<Backend>;

/// Delay of a response held back to arrive after newer state.
const SLOW_RESPONSE: Duration = Duration::from_millis(300);

impl Backend {
    fn seeded() -> Self {
        let backend = Backend {
            next_line_id: AtomicI64::new(7),
            ..Default::default()
        };
        for (id, name, email, password) in [(1, "A", "a@b.com", "secret1"), (2, "B", "b@b.com", "secret2")] {
            backend.users.lock().unwrap().insert(
                id,
                json!({"id": id, "name": name, "email": email, "role": "student"}),
            );
            backend
                .passwords
                .lock()
                .unwrap()
                .insert(email.to_string(), (password.to_string(), id));
        }
        backend
    }

    fn current_user(&self) -> Option<Value> {
        let id = (*self.current.lock().unwrap())?;
        self.users.lock().unwrap().get(&id).cloned()
    }
}

fn rejected(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn unauthenticated() -> Response {
    rejected(StatusCode::UNAUTHORIZED, "Not authenticated")
}

async fn login(State(backend): State<Shared>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();
    let found = backend.passwords.lock().unwrap().get(&email).cloned();

    match found {
        Some((expected, id)) if expected == password => {
            *backend.current.lock().unwrap() = Some(id);
            let user = backend.users.lock().unwrap()[&id].clone();
            (
                [(header::SET_COOKIE, format!("session={}; Path=/", id))],
                Json(json!({ "user": user })),
            )
                .into_response()
        }
        _ => rejected(StatusCode::UNAUTHORIZED, "Invalid email or password"),
    }
}

async fn register(State(backend): State<Shared>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if backend.passwords.lock().unwrap().contains_key(&email) {
        return rejected(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let id = 3;
    let user = json!({"id": id, "name": body["name"], "email": email, "role": body["role"]});
    backend.users.lock().unwrap().insert(id, user.clone());
    backend.passwords.lock().unwrap().insert(
        email,
        (body["password"].as_str().unwrap_or_default().to_string(), id),
    );
    *backend.current.lock().unwrap() = Some(id);
    (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
}

async fn logout(State(backend): State<Shared>) -> Response {
    if backend.fail_logout.load(Ordering::SeqCst) {
        return (StatusCode::BAD_GATEWAY, [(header::CONTENT_TYPE, "text/html")], "<h1>502</h1>")
            .into_response();
    }
    *backend.current.lock().unwrap() = None;
    Json(json!({"message": "Logged out"})).into_response()
}

async fn current_user(State(backend): State<Shared>) -> Response {
    let user = backend.current_user();
    if backend.slow_current_user_once.swap(false, Ordering::SeqCst) {
        tokio::time::sleep(SLOW_RESPONSE).await;
    }
    match user {
        Some(user) => Json(json!({ "user": user })).into_response(),
        None => unauthenticated(),
    }
}

async fn update_profile(State(backend): State<Shared>, Json(body): Json<Value>) -> Response {
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    if let Some(user) = backend.users.lock().unwrap().get_mut(&id) {
        user["name"] = body["name"].clone();
    }
    Json(json!({"message": "Profile updated"})).into_response()
}

async fn upload_avatar(State(backend): State<Shared>, mut multipart: Multipart) -> Response {
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let mut url = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("avatar") {
            url = Some(format!("/uploads/{}", field.file_name().unwrap_or("x")));
        }
    }
    let Some(url) = url else {
        return rejected(StatusCode::BAD_REQUEST, "No file uploaded");
    };
    if let Some(user) = backend.users.lock().unwrap().get_mut(&id) {
        user["avatar"] = json!(url);
    }
    Json(json!({ "avatar_url": url })).into_response()
}

async fn cart_items(State(backend): State<Shared>) -> Response {
    if backend.fail_items.load(Ordering::SeqCst) {
        return rejected(StatusCode::INTERNAL_SERVER_ERROR, "Cart service unavailable");
    }
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let items = backend.carts.lock().unwrap().get(&id).cloned().unwrap_or_default();
    if backend.slow_items_once.swap(false, Ordering::SeqCst) {
        tokio::time::sleep(SLOW_RESPONSE).await;
    }
    Json(json!({ "items": items })).into_response()
}

async fn cart_count(State(backend): State<Shared>) -> Response {
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let count = backend.carts.lock().unwrap().get(&id).map(Vec::len).unwrap_or(0);
    Json(json!({ "count": count })).into_response()
}

async fn add_to_cart(State(backend): State<Shared>, Json(body): Json<Value>) -> Response {
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let course_id = body["course_id"].as_i64().unwrap_or_default();
    let mut carts = backend.carts.lock().unwrap();
    let cart = carts.entry(id).or_default();
    if cart.iter().any(|line| line["course_id"] == course_id) {
        return rejected(StatusCode::BAD_REQUEST, "Course already in cart");
    }
    let line_id = backend.next_line_id.fetch_add(1, Ordering::SeqCst);
    cart.push(json!({
        "id": line_id,
        "course_id": course_id,
        "course_title": "X",
        "course_price": 100000
    }));
    Json(json!("Added to cart")).into_response()
}

async fn remove_from_cart(State(backend): State<Shared>, Json(body): Json<Value>) -> Response {
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let course_id = body["course_id"].as_i64().unwrap_or_default();
    if let Some(cart) = backend.carts.lock().unwrap().get_mut(&id) {
        cart.retain(|line| line["course_id"] != course_id);
    }
    Json(json!({"message": "Removed from cart"})).into_response()
}

async fn checkout(State(backend): State<Shared>) -> Response {
    backend.checkout_hits.fetch_add(1, Ordering::SeqCst);
    let Some(id) = *backend.current.lock().unwrap() else {
        return unauthenticated();
    };
    let mut carts = backend.carts.lock().unwrap();
    let cart = carts.entry(id).or_default();
    if cart.is_empty() {
        return rejected(StatusCode::BAD_REQUEST, "Cart is empty");
    }
    cart.clear();
    Json(json!({"message": "Payment successful"})).into_response()
}

async fn list_comments(State(backend): State<Shared>, Path(_course): Path<i64>) -> Json<Value> {
    Json(json!({ "comments": backend.comments.lock().unwrap().clone() }))
}

async fn add_comment(
    State(backend): State<Shared>,
    Path(_course): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    backend.comment_posts.fetch_add(1, Ordering::SeqCst);
    let Some(user) = backend.current_user() else {
        return unauthenticated();
    };
    let mut comments = backend.comments.lock().unwrap();
    let id = comments.len() as i64 + 1;
    comments.push(json!({
        "id": id,
        "user_name": user["name"],
        "user_avatar": null,
        "comment": body["comment"],
        "created_at": "2024-03-01 10:15:00"
    }));
    Json(json!({"message": "Comment added"})).into_response()
}

async fn list_ratings(State(backend): State<Shared>, Path(_course): Path<i64>) -> Json<Value> {
    Json(json!({ "ratings": backend.ratings.lock().unwrap().clone() }))
}

async fn add_rating(
    State(backend): State<Shared>,
    Path(_course): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let Some(user) = backend.current_user() else {
        return unauthenticated();
    };
    let rating = body["rating"].as_i64().unwrap_or_default();
    if !(1..=5).contains(&rating) {
        return rejected(StatusCode::BAD_REQUEST, "Rating must be between 1 and 5");
    }
    let mut ratings = backend.ratings.lock().unwrap();
    ratings.retain(|r| r["user_name"] != user["name"]);
    let id = ratings.len() as i64 + 1;
    ratings.push(json!({
        "id": id,
        "user_name": user["name"],
        "rating": rating,
        "created_at": "2024-03-01T10:15:00Z"
    }));
    Json(json!({"message": "Rating added"})).into_response()
}

async fn spawn_backend() -> (String, Shared) {
    let backend: Shared = Arc::new(Backend::seeded());
    let app = Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/api/user/current", get(current_user))
        .route("/api/profile", axum::routing::put(update_profile))
        .route("/api/upload/avatar", post(upload_avatar))
        .route("/api/cart", get(cart_items).post(add_to_cart).delete(remove_from_cart))
        .route("/api/cart/count", get(cart_count))
        .route("/api/cart/checkout", post(checkout))
        .route("/api/courses/{id}/comments", get(list_comments).post(add_comment))
        .route("/api/courses/{id}/ratings", get(list_ratings).post(add_rating))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

async fn storefront() -> (Storefront, Shared) {
    let (base_url, backend) = spawn_backend().await;
    let storefront = Storefront::start(&ClientConfig::with_base_url(base_url))
        .await
        .unwrap();
    (storefront, backend)
}

async fn wait_for_cart(storefront: &Storefront, pred: impl FnMut(&CartSnapshot) -> bool) -> CartSnapshot {
    let mut rx = storefront.cart().subscribe();
    let snapshot = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(pred))
        .await
        .expect("cart did not settle")
        .expect("cart channel closed")
        .clone();
    snapshot
}

fn line(id: i64, course_id: i64) -> CartItem {
    CartItem {
        id,
        course_id,
        course_title: "X".into(),
        course_price: Price::from_som(100_000),
        course_image: None,
    }
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn probe_without_session_is_anonymous() {
    let (storefront, _backend) = storefront().await;

    assert_eq!(storefront.session().state(), SessionState::Anonymous);
    assert!(matches!(
        storefront.session().last_probe_error(),
        Some(ApiError::BackendRejected { status: 401, .. })
    ));
    assert_eq!(storefront.cart().snapshot(), CartSnapshot::default());
}

#[tokio::test]
async fn probe_against_unreachable_backend_is_anonymous() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let storefront = Storefront::start(&ClientConfig::with_base_url(format!("http://{}", addr)))
        .await
        .unwrap();

    assert_eq!(storefront.session().state(), SessionState::Anonymous);
    let err = storefront.session().last_probe_error().unwrap();
    assert!(matches!(err, ApiError::NetworkUnreachable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn session_starts_resolving_before_probe() {
    let (base_url, _backend) = spawn_backend().await;
    let storefront = Storefront::new(&ClientConfig::with_base_url(base_url)).unwrap();

    assert_eq!(storefront.session().state(), SessionState::Resolving);
    assert!(!storefront.session().is_authenticated());

    storefront.session().start().await;
    assert_eq!(storefront.session().resolved().await, SessionState::Anonymous);
}

#[tokio::test]
async fn stale_current_user_after_login_is_discarded() {
    let (base_url, backend) = spawn_backend().await;
    let storefront = Storefront::new(&ClientConfig::with_base_url(base_url)).unwrap();
    backend.slow_current_user_once.store(true, Ordering::SeqCst);

    let (probed, user) = tokio::join!(storefront.session().start(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        storefront.session().login("a@b.com", "secret1").await.unwrap()
    });

    assert_eq!(probed, SessionState::Authenticated(user.clone()));
    assert_eq!(storefront.session().state(), SessionState::Authenticated(user));
    assert_eq!(storefront.session().last_probe_error(), None);
}

#[tokio::test]
async fn login_clears_last_probe_error() {
    let (storefront, _backend) = storefront().await;
    assert!(storefront.session().last_probe_error().is_some());

    storefront.session().login("a@b.com", "secret1").await.unwrap();
    assert_eq!(storefront.session().last_probe_error(), None);
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let (storefront, _backend) = storefront().await;

    let err = storefront.session().login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert_eq!(storefront.session().state(), SessionState::Anonymous);
}

#[tokio::test]
async fn register_signs_in_new_user() {
    let (storefront, _backend) = storefront().await;

    let user = storefront
        .session()
        .register(&Registration {
            name: "C".into(),
            email: "c@b.com".into(),
            password: "secret3".into(),
            role: Role::Instructor,
        })
        .await
        .unwrap();

    assert_eq!(user.role, Role::Instructor);
    assert_eq!(storefront.session().user(), Some(user));
    assert_eq!(storefront.session().refresh().await.user_id(), Some(3));
}

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let (storefront, backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    backend.fail_logout.store(true, Ordering::SeqCst);
    storefront.session().logout().await;

    assert_eq!(storefront.session().state(), SessionState::Anonymous);
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn login_then_add_to_cart() {
    let (storefront, _backend) = storefront().await;

    let user = storefront.session().login("a@b.com", "secret1").await.unwrap();
    assert_eq!(
        user,
        User {
            id: 1,
            name: "A".into(),
            email: "a@b.com".into(),
            role: Role::Student,
            avatar: None,
        }
    );

    let snapshot = storefront.cart().add(42).await.unwrap();
    assert_eq!(snapshot.items, vec![line(7, 42)]);
    assert_eq!(snapshot.count, 1);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.total(), Price::from_som(100_000));
    assert_eq!(storefront.cart().count(), 1);
}

#[tokio::test]
async fn failed_write_propagates_without_refresh() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    let err = storefront.cart().add(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Course already in cart");
    assert_eq!(storefront.cart().items(), vec![line(7, 42)]);
}

#[tokio::test]
async fn failed_items_fetch_still_yields_count() {
    let (storefront, backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    backend.fail_items.store(true, Ordering::SeqCst);
    let snapshot = storefront.cart().refresh().await;

    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.count, 1);
}

#[tokio::test]
async fn remove_refetches_cart() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();
    storefront.cart().add(43).await.unwrap();

    let snapshot = storefront.cart().remove(42).await.unwrap();
    assert_eq!(snapshot.items, vec![line(8, 43)]);
    assert_eq!(snapshot.count, 1);
}

#[tokio::test]
async fn logout_empties_cart() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    storefront.session().logout().await;

    let snapshot = wait_for_cart(&storefront, |s| *s == CartSnapshot::default()).await;
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.count, 0);
}

#[tokio::test]
async fn switching_users_shows_the_new_users_cart() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    storefront.session().logout().await;
    storefront.session().login("b@b.com", "secret2").await.unwrap();
    storefront.cart().add(99).await.unwrap();

    let snapshot = wait_for_cart(&storefront, |s| !s.loading && s.count == 1).await;
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].course_id, 99);
}

#[tokio::test]
async fn refresh_outlived_by_user_switch_is_discarded() {
    let (storefront, backend) = storefront().await;
    backend.carts.lock().unwrap().insert(
        2,
        vec![json!({"id": 20, "course_id": 99, "course_title": "X", "course_price": 100000})],
    );
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    backend.slow_items_once.store(true, Ordering::SeqCst);
    let (returned, ()) = tokio::join!(storefront.cart().refresh(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        storefront.session().logout().await;
        storefront.session().login("b@b.com", "secret2").await.unwrap();
    });

    let settled = wait_for_cart(&storefront, |s| !s.loading && s.contains(99)).await;
    assert_eq!(settled.items, vec![line(20, 99)]);
    assert!(!returned.contains(42));
    assert!(!storefront.cart().snapshot().contains(42));
}

#[tokio::test]
async fn login_triggers_cart_refresh() {
    let (storefront, backend) = storefront().await;
    backend
        .carts
        .lock()
        .unwrap()
        .insert(1, vec![json!({"id": 5, "course_id": 10, "course_title": "X", "course_price": "100000.00"})]);

    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let snapshot = wait_for_cart(&storefront, |s| !s.loading && s.count == 1).await;
    assert_eq!(snapshot.items, vec![line(5, 10)]);
}

#[tokio::test]
async fn checkout_on_empty_cart_still_calls_backend() {
    let (storefront, backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let err = storefront.cart().checkout().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::BackendRejected {
            status: 400,
            message: "Cart is empty".into()
        }
    );
    assert_eq!(backend.checkout_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn checkout_refreshes_to_backend_state() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    let snapshot = storefront.cart().checkout().await.unwrap();
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn clear_discards_local_cart() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();
    storefront.cart().add(42).await.unwrap();

    storefront.cart().clear();
    assert_eq!(storefront.cart().snapshot(), CartSnapshot::default());
}

// =============================================================================
// Feedback
// =============================================================================

#[tokio::test]
async fn comment_requires_session() {
    let (storefront, backend) = storefront().await;

    let err = storefront.feedback().post_comment(42, "Great").await.unwrap_err();
    assert_eq!(err, ApiError::AuthRequired);
    assert_eq!(backend.comment_posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn blank_comment_is_rejected_locally() {
    let (storefront, backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let err = storefront.feedback().post_comment(42, "   ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.comment_posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn posted_comment_is_trimmed_and_listed() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let comments = storefront
        .feedback()
        .post_comment(42, "  Juda foydali kurs  ")
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment, "Juda foydali kurs");
    assert_eq!(comments[0].user_name, "A");
    assert!(comments[0].created_at_utc().is_some());
}

#[tokio::test]
async fn out_of_range_rating_surfaces_backend_error() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let err = storefront.feedback().rate(42, 6).await.unwrap_err();
    assert_eq!(err.to_string(), "Rating must be between 1 and 5");
}

#[tokio::test]
async fn rating_updates_summary_and_own_rating() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let ratings = storefront.feedback().rate(42, 4).await.unwrap();
    assert_eq!(ratings.own, Some(4));
    assert_eq!(ratings.summary.total, 1);
    assert_eq!(ratings.summary.average_label(), "4.0");

    storefront.session().logout().await;
    let ratings = storefront.feedback().ratings(42).await.unwrap();
    assert_eq!(ratings.own, None);
    assert_eq!(ratings.ratings.len(), 1);
}

// =============================================================================
// Profile
// =============================================================================

#[tokio::test]
async fn profile_update_refreshes_session_user() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let update = ProfileUpdate {
        name: "Aziza".into(),
        ..Default::default()
    };
    storefront.update_profile(&update).await.unwrap();

    assert_eq!(storefront.session().user().unwrap().name, "Aziza");
}

#[tokio::test]
async fn avatar_upload_refreshes_session_user() {
    let (storefront, _backend) = storefront().await;
    storefront.session().login("a@b.com", "secret1").await.unwrap();

    let upload = FileUpload::from_bytes("me.png", "image/png", vec![1, 2, 3]);
    let response = storefront.upload_avatar(upload).await.unwrap();

    assert_eq!(response.avatar_url, "/uploads/me.png");
    assert_eq!(
        storefront.session().user().unwrap().avatar.as_deref(),
        Some("/uploads/me.png")
    );
    storefront.shutdown();
}
