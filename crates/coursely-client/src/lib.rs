//! # coursely-client: Backend HTTP Client
//!
//! Normalizes every call the storefront makes to the course marketplace
//! backend: attaches the session cookie, serializes JSON bodies, classifies
//! failures, and decodes JSON responses.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │     coursely-sync (SessionManager, CartManager, CourseFeedback)         │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ coursely-client (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  client   │  │ endpoints │  │   error   │  │  config   │  │   │
//! │  │   │  request  │  │ 20 routes │  │  ApiError │  │  TOML+env │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │  reqwest + cookie jar                  │
//! │                                ▼                                        │
//! │                    Course marketplace REST backend                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use coursely_client::{ApiClient, ClientConfig};
//! use coursely_core::CourseQuery;
//!
//! # async fn run() -> coursely_client::ApiResult<()> {
//! let api = ApiClient::new(&ClientConfig::load_or_default(None))?;
//! let courses = api.list_courses(&CourseQuery::new().category("Design")).await?;
//! println!("{} courses", courses.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod upload;

pub use client::{ApiClient, RequestBody};
pub use config::{ClientConfig, Environment};
pub use endpoints::Ack;
pub use error::{ApiError, ApiResult, ErrorKind, Recovery, UserAction};
pub use upload::FileUpload;

pub use reqwest::Method;
