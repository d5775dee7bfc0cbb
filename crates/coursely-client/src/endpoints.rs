//! # Backend Endpoints
//!
//! One thin method per backend route. No business logic lives here.
//!
//! ```text
//! ┌──────────────────────┬────────┬──────────────────────────────┐
//! │ Method               │ Verb   │ Path                         │
//! ├──────────────────────┼────────┼──────────────────────────────┤
//! │ register             │ POST   │ /register                    │
//! │ login                │ POST   │ /login                       │
//! │ logout               │ POST   │ /logout                      │
//! │ current_user         │ GET    │ /api/user/current            │
//! │ profile              │ GET    │ /api/profile                 │
//! │ update_profile       │ PUT    │ /api/profile                 │
//! │ upload_avatar        │ POST   │ /api/upload/avatar           │
//! │ list_courses         │ GET    │ /api/courses?search=&category│
//! │ course               │ GET    │ /api/courses/{id}            │
//! │ course_comments      │ GET    │ /api/courses/{id}/comments   │
//! │ add_course_comment   │ POST   │ /api/courses/{id}/comments   │
//! │ course_ratings       │ GET    │ /api/courses/{id}/ratings    │
//! │ add_course_rating    │ POST   │ /api/courses/{id}/ratings    │
//! │ cart                 │ GET    │ /api/cart                    │
//! │ cart_count           │ GET    │ /api/cart/count              │
//! │ add_to_cart          │ POST   │ /api/cart                    │
//! │ remove_from_cart     │ DELETE │ /api/cart                    │
//! │ checkout             │ POST   │ /api/cart/checkout           │
//! │ create_course        │ POST   │ /instructor/courses/new      │
//! │ upload_video         │ POST   │ /api/upload/video            │
//! └──────────────────────┴────────┴──────────────────────────────┘
//! ```

use coursely_core::{
    AvatarUpload, CartItem, Comment, Course, CourseId, CourseQuery, Credentials, NewCourse,
    Profile, ProfileUpdate, Rating, Registration, User,
};
use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::client::{ApiClient, RequestBody};
use crate::error::{ApiError, ApiResult};
use crate::upload::FileUpload;

// =============================================================================
// Response Envelopes
// =============================================================================

/// Generic acknowledgement for writes whose body the storefront ignores.
///
/// Any JSON body is accepted. `message` is filled from a bare string body or
/// from a string `message` field of an object body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for Ack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = match Value::deserialize(deserializer)? {
            Value::String(text) => Some(text),
            Value::Object(mut fields) => match fields.remove("message") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            _ => None,
        };
        Ok(Ack { message })
    }
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrentUser {
    Wrapped { user: User },
    Bare(User),
}

impl From<CurrentUser> for User {
    fn from(current: CurrentUser) -> Self {
        match current {
            CurrentUser::Wrapped { user } | CurrentUser::Bare(user) => user,
        }
    }
}

#[derive(Deserialize)]
struct CartEnvelope {
    #[serde(default)]
    items: Vec<CartItem>,
}

#[derive(Deserialize)]
struct CountEnvelope {
    #[serde(default)]
    count: i64,
}

#[derive(Deserialize)]
struct CommentsEnvelope {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct RatingsEnvelope {
    #[serde(default)]
    ratings: Vec<Rating>,
}

// =============================================================================
// Endpoints
// =============================================================================

impl ApiClient {
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::GET, endpoint, RequestBody::Empty).await
    }

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------

    /// Creates an account. The backend signs the new user in.
    pub async fn register(&self, registration: &Registration) -> ApiResult<User> {
        let response: AuthResponse = self
            .request(Method::POST, "/register", RequestBody::json(registration)?)
            .await?;
        Ok(response.user)
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        let response: AuthResponse = self
            .request(Method::POST, "/login", RequestBody::json(credentials)?)
            .await?;
        Ok(response.user)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        let _: Ack = self.request(Method::POST, "/logout", RequestBody::Empty).await?;
        Ok(())
    }

    /// Session probe. Accepts a bare user or a `{user}` envelope.
    pub async fn current_user(&self) -> ApiResult<User> {
        let current: CurrentUser = self.get("/api/user/current").await?;
        Ok(current.into())
    }

    // -------------------------------------------------------------------------
    // Profile
    // -------------------------------------------------------------------------

    pub async fn profile(&self) -> ApiResult<Profile> {
        self.get("/api/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Ack> {
        self.request(Method::PUT, "/api/profile", RequestBody::json(update)?)
            .await
    }

    /// Uploads `file` as the `avatar` field.
    pub async fn upload_avatar(&self, file: FileUpload) -> ApiResult<AvatarUpload> {
        let form = file.into_form("avatar")?;
        self.request(Method::POST, "/api/upload/avatar", RequestBody::Multipart(form))
            .await
    }

    // -------------------------------------------------------------------------
    // Courses
    // -------------------------------------------------------------------------

    /// Lists catalogue courses. A non-array body yields an empty list.
    pub async fn list_courses(&self, query: &CourseQuery) -> ApiResult<Vec<Course>> {
        let mut endpoint = String::from("/api/courses");
        let pairs = query.pairs();
        if !pairs.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            endpoint.push('?');
            endpoint.push_str(&encoded);
        }

        match self.get::<Value>(&endpoint).await? {
            Value::Array(items) => serde_json::from_value(Value::Array(items))
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn course(&self, id: CourseId) -> ApiResult<Course> {
        self.get(&format!("/api/courses/{}", id)).await
    }

    pub async fn course_comments(&self, id: CourseId) -> ApiResult<Vec<Comment>> {
        let envelope: CommentsEnvelope = self.get(&format!("/api/courses/{}/comments", id)).await?;
        Ok(envelope.comments)
    }

    pub async fn add_course_comment(&self, id: CourseId, comment: &str) -> ApiResult<Ack> {
        self.request(
            Method::POST,
            &format!("/api/courses/{}/comments", id),
            RequestBody::Json(json!({ "comment": comment })),
        )
        .await
    }

    pub async fn course_ratings(&self, id: CourseId) -> ApiResult<Vec<Rating>> {
        let envelope: RatingsEnvelope = self.get(&format!("/api/courses/{}/ratings", id)).await?;
        Ok(envelope.ratings)
    }

    /// Submits a star rating. The value is sent unmodified.
    pub async fn add_course_rating(&self, id: CourseId, rating: i32) -> ApiResult<Ack> {
        self.request(
            Method::POST,
            &format!("/api/courses/{}/ratings", id),
            RequestBody::Json(json!({ "rating": rating })),
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub async fn cart(&self) -> ApiResult<Vec<CartItem>> {
        let envelope: CartEnvelope = self.get("/api/cart").await?;
        Ok(envelope.items)
    }

    pub async fn cart_count(&self) -> ApiResult<i64> {
        let envelope: CountEnvelope = self.get("/api/cart/count").await?;
        Ok(envelope.count)
    }

    pub async fn add_to_cart(&self, course_id: CourseId) -> ApiResult<Ack> {
        self.request(
            Method::POST,
            "/api/cart",
            RequestBody::Json(json!({ "course_id": course_id })),
        )
        .await
    }

    pub async fn remove_from_cart(&self, course_id: CourseId) -> ApiResult<Ack> {
        self.request(
            Method::DELETE,
            "/api/cart",
            RequestBody::Json(json!({ "course_id": course_id })),
        )
        .await
    }

    pub async fn checkout(&self) -> ApiResult<Ack> {
        self.request(Method::POST, "/api/cart/checkout", RequestBody::Empty)
            .await
    }

    // -------------------------------------------------------------------------
    // Instructor
    // -------------------------------------------------------------------------

    pub async fn create_course(&self, course: &NewCourse) -> ApiResult<Value> {
        self.request(Method::POST, "/instructor/courses/new", RequestBody::json(course)?)
            .await
    }

    /// Uploads `file` as the `video` field.
    pub async fn upload_video(&self, file: FileUpload) -> ApiResult<Value> {
        let form = file.into_form("video")?;
        self.request(Method::POST, "/api/upload/video", RequestBody::Multipart(form))
            .await
    }
}
