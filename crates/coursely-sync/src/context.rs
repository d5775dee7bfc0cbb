//! # Storefront Context
//!
//! The explicit application context every screen is handed. It owns one
//! API client, one session, one cart, and the feedback service, and tears
//! them down together.
//!
//! ```text
//! ┌───────────────────────────── Storefront ─────────────────────────────┐
//! │                                                                       │
//! │   ApiClient ◄──────────┬───────────────┬───────────────┐              │
//! │       ▲                │               │               │              │
//! │       │         SessionManager ──watch──► CartManager   CourseFeedback│
//! │       │                │                                ▲             │
//! │       │                └────────────watch───────────────┘             │
//! │   update_profile / upload_avatar ──► session.refresh()                │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```

use coursely_client::{Ack, ApiClient, ApiResult, ClientConfig, FileUpload};
use coursely_core::{AvatarUpload, ProfileUpdate};
use tracing::info;

use crate::cart::CartManager;
use crate::feedback::CourseFeedback;
use crate::session::SessionManager;

/// Top-level context for the storefront screens.
pub struct Storefront {
    api: ApiClient,
    session: SessionManager,
    cart: CartManager,
    feedback: CourseFeedback,
}

impl Storefront {
    /// Wires the managers together without probing the session.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let api = ApiClient::new(config)?;
        let session = SessionManager::new(api.clone());
        let cart = CartManager::new(api.clone(), session.subscribe());
        let feedback = CourseFeedback::new(api.clone(), session.subscribe());

        Ok(Storefront {
            api,
            session,
            cart,
            feedback,
        })
    }

    /// Wires the managers together and runs the initial session probe.
    pub async fn start(config: &ClientConfig) -> ApiResult<Self> {
        let storefront = Self::new(config)?;
        let state = storefront.session.start().await;
        info!(authenticated = state.is_authenticated(), "Storefront started");
        Ok(storefront)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn feedback(&self) -> &CourseFeedback {
        &self.feedback
    }

    /// Saves profile edits, then re-reads the session user from the backend.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Ack> {
        let ack = self.api.update_profile(update).await?;
        self.session.refresh().await;
        Ok(ack)
    }

    /// Uploads a new avatar, then re-reads the session user from the backend.
    pub async fn upload_avatar(&self, file: FileUpload) -> ApiResult<AvatarUpload> {
        let upload = self.api.upload_avatar(file).await?;
        self.session.refresh().await;
        Ok(upload)
    }

    /// Stops background work. The storefront is unusable afterwards.
    pub fn shutdown(&self) {
        self.cart.shutdown();
        info!("Storefront shut down");
    }
}
