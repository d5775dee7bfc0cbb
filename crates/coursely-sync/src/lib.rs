//! # coursely-sync: Session and Cart State for the Storefront
//!
//! Keeps the storefront's client-side beliefs (who is signed in, what is
//! in their cart) in step with the backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                         Screens (web UI)                                │
//! │                              │ snapshots ▲                              │
//! │                              ▼           │                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                ★ coursely-sync (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   Storefront (context.rs)                                       │   │
//! │  │     ├── SessionManager  (session.rs)   Resolving/Auth/Anonymous │   │
//! │  │     ├── CartManager     (cart.rs)      follows the session      │   │
//! │  │     └── CourseFeedback  (feedback.rs)  comments and ratings     │   │
//! │  │                                                                 │   │
//! │  │   Generation (generation.rs)  stale-result guard                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                ▼                                        │
//! │                       coursely-client (ApiClient)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use coursely_client::ClientConfig;
//! use coursely_sync::Storefront;
//!
//! # async fn run() -> coursely_client::ApiResult<()> {
//! coursely_sync::telemetry::init_tracing();
//!
//! let storefront = Storefront::start(&ClientConfig::load_or_default(None)).await?;
//! if storefront.session().is_authenticated() {
//!     let cart = storefront.cart().add(42).await?;
//!     println!("{} in cart, total {}", cart.count, cart.total());
//! }
//! storefront.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod context;
pub mod feedback;
pub mod generation;
pub mod session;
pub mod telemetry;

pub use cart::{CartManager, CartSnapshot};
pub use context::Storefront;
pub use feedback::{CourseFeedback, CourseRatings};
pub use generation::Generation;
pub use session::{SessionManager, SessionState};
