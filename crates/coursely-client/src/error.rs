//! # API Error Types
//!
//! Every failure the storefront can observe while talking to the backend.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Error pages    │  │   Responses     │  │     Transport           │ │
//! │  │  (HTML / text)  │  │   (JSON)        │  │                         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  NotFound       │  │  BackendRejected│  │  NetworkUnreachable     │ │
//! │  │  ServerError    │  │  InvalidResponse│  │                         │ │
//! │  │  AuthRequired   │  │                 │  │                         │ │
//! │  │  UnexpectedCT   │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │  Local input    │  │  Configuration  │                              │
//! │  │                 │  │                 │                              │
//! │  │  Validation     │  │  InvalidConfig  │                              │
//! │  │  Upload         │  │  InvalidUrl     │                              │
//! │  │  Serialization  │  │  ConfigLoad/Save│                              │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The client never recovers from these. It classifies and returns them;
//! the session and cart managers decide what to swallow.

use coursely_core::ValidationError;
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A classified backend, transport, or local failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // =========================================================================
    // Error Pages (HTML / plain-text bodies)
    // =========================================================================
    /// 404 with an HTML body.
    #[error("API endpoint not found")]
    NotFound,

    /// 5xx with an HTML body.
    #[error("Server error occurred")]
    ServerError,

    /// 401 or 403 with an HTML body, or a protected action without a session.
    #[error("Authentication required")]
    AuthRequired,

    /// Any other status with an HTML body.
    #[error("Server returned HTML instead of JSON (Status: {status})")]
    UnexpectedContentType { status: u16 },

    // =========================================================================
    // JSON Responses
    // =========================================================================
    /// A success body that is not valid JSON for the expected shape.
    #[error("Invalid JSON response from server")]
    InvalidResponse(String),

    /// A non-2xx response. `message` is the body's `error` field, or the
    /// status text when there is none.
    #[error("{message}")]
    BackendRejected { status: u16, message: String },

    // =========================================================================
    // Transport
    // =========================================================================
    /// DNS failure, refused connection, or timeout.
    #[error("Network error: Unable to connect to server")]
    NetworkUnreachable(String),

    // =========================================================================
    // Local Errors
    // =========================================================================
    /// Form input rejected before any request was sent.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Failed to read or attach an upload.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Failed to serialize a request body.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Invalid backend URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    ServerError,
    AuthRequired,
    UnexpectedContentType,
    InvalidResponse,
    NetworkUnreachable,
    BackendRejected,
    Validation,
    Local,
    Configuration,
}

impl ErrorKind {
    /// Stable code for logs and UI state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::ServerError => "server-error",
            ErrorKind::AuthRequired => "auth-required",
            ErrorKind::UnexpectedContentType => "unexpected-content-type",
            ErrorKind::InvalidResponse => "invalid-response",
            ErrorKind::NetworkUnreachable => "network-unreachable",
            ErrorKind::BackendRejected => "backend-rejected",
            ErrorKind::Validation => "validation",
            ErrorKind::Local => "local",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the UI should offer after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Transient; show a retry affordance.
    Retry,
    /// Prompt the user to sign in.
    SignIn,
    /// Show the message and let the user dismiss it.
    Dismiss,
}

/// The user action that failed, used to pick a fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Login,
    Register,
    AddToCart,
    RemoveFromCart,
    Checkout,
    Comment,
    Rate,
    UpdateProfile,
    UploadAvatar,
    LoadCourses,
    LoadProfile,
}

impl UserAction {
    /// Localized generic message for the action.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            UserAction::Login => "Kirish jarayonida xatolik yuz berdi",
            UserAction::Register => "Ro'yxatdan o'tish jarayonida xatolik yuz berdi",
            UserAction::AddToCart => "Kursni savatga qo'shishda xatolik yuz berdi",
            UserAction::RemoveFromCart => "Kursni o'chirishda xatolik yuz berdi",
            UserAction::Checkout => "To'lovda xatolik yuz berdi",
            UserAction::Comment => "Izoh qo'shishda xatolik yuz berdi",
            UserAction::Rate => "Baho berishda xatolik yuz berdi",
            UserAction::UpdateProfile => "Profilni yangilashda xatolik yuz berdi",
            UserAction::UploadAvatar => "Avatarni yuklashda xatolik yuz berdi",
            UserAction::LoadCourses => "Kurslarni yuklashda xatolik yuz berdi",
            UserAction::LoadProfile => "Profil ma'lumotlarini yuklashda xatolik yuz berdi",
        }
    }
}

impl ApiError {
    /// Returns the taxonomy code of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::ServerError => ErrorKind::ServerError,
            ApiError::AuthRequired => ErrorKind::AuthRequired,
            ApiError::UnexpectedContentType { .. } => ErrorKind::UnexpectedContentType,
            ApiError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            ApiError::BackendRejected { .. } => ErrorKind::BackendRejected,
            ApiError::NetworkUnreachable(_) => ErrorKind::NetworkUnreachable,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Upload(_) | ApiError::Serialization(_) => ErrorKind::Local,
            ApiError::InvalidConfig(_)
            | ApiError::InvalidUrl(_)
            | ApiError::ConfigLoadFailed(_)
            | ApiError::ConfigSaveFailed(_) => ErrorKind::Configuration,
        }
    }

    /// Returns true if the same request may succeed when retried.
    ///
    /// ## Retryable Errors
    /// - Network failures
    /// - 5xx error pages and 5xx JSON rejections
    /// - Error pages with an unexpected status (usually a proxy)
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::NetworkUnreachable(_)
            | ApiError::ServerError
            | ApiError::UnexpectedContentType { .. } => true,
            ApiError::BackendRejected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns true if the user must sign in before retrying.
    pub fn requires_sign_in(&self) -> bool {
        match self {
            ApiError::AuthRequired => true,
            ApiError::BackendRejected { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Maps the error to the affordance the UI should render.
    pub fn recovery(&self) -> Recovery {
        if self.requires_sign_in() {
            Recovery::SignIn
        } else if self.is_retryable() {
            Recovery::Retry
        } else {
            Recovery::Dismiss
        }
    }

    /// Message to show after `action` failed.
    ///
    /// Backend rejections and local validation failures are shown as-is;
    /// everything else gets the action's localized fallback.
    pub fn user_message(&self, action: UserAction) -> String {
        match self {
            ApiError::BackendRejected { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Validation(err) => err.to_string(),
            _ => action.fallback_message().to_string(),
        }
    }
}
