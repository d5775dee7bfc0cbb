//! # Domain Types
//!
//! Wire types exchanged with the course marketplace backend.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │     Course      │   │    CartItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name, email    │   │  title, price   │   │  course_id      │       │
//! │  │  role           │   │  level, lessons │   │  course_price   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Profile     │   │     Comment     │   │     Rating      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  User + bio,    │   │  user_name      │   │  user_name      │       │
//! │  │  phone, website │   │  comment        │   │  rating (1-5)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records are owned by the backend. The storefront only reads them,
//! or sends the request payloads defined at the bottom of this file.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Price;

/// Backend identifier for users.
pub type UserId = i64;

/// Backend identifier for courses.
pub type CourseId = i64;

// =============================================================================
// Users
// =============================================================================

/// Account role chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Buys and takes courses.
    #[default]
    Student,
    /// Publishes courses.
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Instructor => write!(f, "instructor"),
        }
    }
}

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Backend user id.
    #[ts(type = "number")]
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Login email.
    pub email: String,

    /// Account role.
    pub role: Role,

    /// Avatar URL, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The editable profile of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    #[ts(type = "number")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Response of the avatar upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AvatarUpload {
    pub avatar_url: String,
}

// =============================================================================
// Courses
// =============================================================================

/// Difficulty level of a course.
///
/// Unknown levels are preserved verbatim in [`Level::Other`] so they can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

/// Badge colouring for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl Level {
    /// Localized label shown on course cards and the course page.
    pub fn label(&self) -> &str {
        match self {
            Level::Beginner => "Boshlang'ich",
            Level::Intermediate => "O'rta",
            Level::Advanced => "Yuqori",
            Level::Other(raw) => raw,
        }
    }

    /// Badge tone for the level.
    pub fn tone(&self) -> LevelTone {
        match self {
            Level::Beginner => LevelTone::Green,
            Level::Intermediate => LevelTone::Yellow,
            Level::Advanced => LevelTone::Red,
            Level::Other(_) => LevelTone::Neutral,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Other(raw) => raw,
        }
    }
}

impl From<String> for Level {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Other(raw),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lesson inside a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lesson {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub is_free: bool,
}

/// A course as listed in the catalogue or shown on its detail page.
///
/// Catalogue entries omit `instructor_bio` and `lessons`; those default to
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Course {
    #[ts(type = "number")]
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor_name: String,
    #[serde(default)]
    pub instructor_bio: String,
    pub price: Price,
    #[serde(default)]
    pub duration: String,
    #[ts(type = "string")]
    pub level: Level,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    #[ts(type = "number")]
    pub students_count: i64,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Number of lessons in the course.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Lessons that can be watched without buying the course.
    pub fn free_lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(|lesson| lesson.is_free)
    }
}

/// Catalogue search parameters.
///
/// Empty values are dropped, and the pseudo-category `all` means
/// "no category filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl CourseQuery {
    /// Creates an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    /// Sets the category filter; `all` clears it.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty() && category != "all").then_some(category);
        self
    }

    /// Query-string pairs in wire order (`search`, then `category`).
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category));
        }
        pairs
    }
}

// =============================================================================
// Cart
// =============================================================================

/// One line of the current user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Cart line id.
    #[ts(type = "number")]
    pub id: i64,

    /// Course in the cart.
    #[ts(type = "number")]
    pub course_id: CourseId,

    /// Course title at the time of the fetch.
    pub course_title: String,

    /// Course price at the time of the fetch.
    pub course_price: Price,

    /// Course cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_image: Option<String>,
}

/// Sum of the prices of `items`.
pub fn cart_total(items: &[CartItem]) -> Price {
    items.iter().map(|item| item.course_price).sum()
}

// =============================================================================
// Comments & Ratings
// =============================================================================

/// A comment on a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comment {
    #[ts(type = "number")]
    pub id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub comment: String,
    pub created_at: String,
}

impl Comment {
    /// Parsed `created_at`, if the backend sent a recognizable timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// A star rating on a course.
///
/// `rating` is whatever the backend stored; the storefront does not range
/// check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    #[ts(type = "number")]
    pub id: i64,
    pub user_name: String,
    pub rating: i32,
    pub created_at: String,
}

impl Rating {
    /// Parsed `created_at`, if the backend sent a recognizable timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parses RFC 3339 timestamps, falling back to naive SQL timestamps in UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Login form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Profile fields the user may edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileUpdate {
    pub name: String,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        ProfileUpdate {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            website: profile.website.clone(),
        }
    }
}

/// Payload for the instructor "new course" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub duration: String,
    #[ts(type = "string")]
    pub level: Level,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
