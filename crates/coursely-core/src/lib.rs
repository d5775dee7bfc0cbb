//! # coursely-core: Pure Domain Model for the Coursely Storefront
//!
//! This crate holds every type that crosses the wire between the storefront
//! and the course marketplace backend, plus the small amount of pure
//! presentation logic the screens share (prices, level labels, rating
//! summaries, form checks).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Coursely Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (web UI)                             │   │
//! │  │   Catalogue ──► Course page ──► Cart ──► Checkout ──► Profile   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / operations                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        coursely-sync (Session + Cart managers, Storefront)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        coursely-client (ApiClient, error classification)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coursely-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ratings  │  │ validation│  │   │
//! │  │   │  Course   │  │   Price   │  │  Summary  │  │   forms   │  │   │
//! │  │   │ CartItem  │  │  so'm fmt │  │  buckets  │  │  drafts   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (User, Course, CartItem, Comment, Rating, ...)
//! - [`money`] - `Price` in whole so'm with localized formatting
//! - [`ratings`] - Average / star distribution for the rating widget
//! - [`error`] - Validation error type
//! - [`validation`] - Registration and comment form checks
//!
//! ## Example Usage
//!
//! ```rust
//! use coursely_core::money::Price;
//!
//! let price = Price::from_som(100_000);
//! assert_eq!(price.format(), "100\u{a0}000 so'm");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod ratings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreResult, ValidationError};
pub use money::Price;
pub use ratings::{RatingSummary, StarBucket};
pub use types::*;
pub use validation::{comment_text, RegistrationForm};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Currency suffix appended to formatted prices.
pub const CURRENCY_SUFFIX: &str = "so'm";

/// Categories offered by the catalogue filter, in display order.
pub const CATEGORIES: [&str; 8] = [
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Design",
    "Business",
    "Marketing",
    "Photography",
    "Music",
];
