//! # Cart Manager
//!
//! Holds the signed-in user's cart and keeps it in step with the session.
//!
//! ## Synchronization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SessionManager ──watch──► session watcher task                         │
//! │                              │                                          │
//! │                              ├─ no user       → clear()                 │
//! │                              └─ new user id   → refresh()               │
//! │                                                                         │
//! │  refresh():                                                             │
//! │    stamp = generation.next()                                            │
//! │    ┌── GET /api/cart ───────┐                                           │
//! │    │                        ├─ join ─► apply if stamp is latest and     │
//! │    └── GET /api/cart/count ─┘          the session user is unchanged    │
//! │    (each fetch fails on its own: items → [], count → 0)                 │
//! │                                                                         │
//! │  add / remove / checkout:                                               │
//! │    write ──?──► refresh()      (no optimistic local edits)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use coursely_client::{ApiClient, ApiResult};
use coursely_core::{cart_total, CartItem, CourseId, Price, UserId};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::generation::Generation;
use crate::session::SessionState;

// =============================================================================
// Cart Snapshot
// =============================================================================

/// The cart as last fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Lines in backend order.
    pub items: Vec<CartItem>,
    /// Backend-reported count. Not derived from `items`.
    pub count: i64,
    /// True while a refresh is in flight.
    pub loading: bool,
}

impl CartSnapshot {
    pub fn total(&self) -> Price {
        cart_total(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.count == 0
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.items.iter().any(|item| item.course_id == course_id)
    }
}

// =============================================================================
// Shared Sync State
// =============================================================================

/// The part of the manager shared with the watcher and refresh tasks.
#[derive(Clone)]
struct CartSync {
    api: ApiClient,
    state_tx: Arc<watch::Sender<CartSnapshot>>,
    session_rx: watch::Receiver<SessionState>,
    generation: Arc<Generation>,
}

impl CartSync {
    fn session_user_id(&self) -> Option<UserId> {
        self.session_rx.borrow().user_id()
    }

    async fn refresh(&self) -> CartSnapshot {
        let Some(user_id) = self.session_user_id() else {
            self.clear();
            return CartSnapshot::default();
        };

        let mut stamp = 0;
        self.state_tx.send_modify(|snapshot| {
            stamp = self.generation.next();
            snapshot.loading = true;
        });
        debug!(user_id, stamp, "Refreshing cart");

        let (items, count) = tokio::join!(self.api.cart(), self.api.cart_count());

        let items = items.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to fetch cart items");
            Vec::new()
        });
        let count = count.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to fetch cart count");
            0
        });

        let snapshot = CartSnapshot {
            items,
            count,
            loading: false,
        };

        // Checked under the channel lock so a concurrent clear() cannot be
        // overwritten.
        let applied = self.state_tx.send_if_modified(|current| {
            if !self.generation.is_current(stamp) || self.session_user_id() != Some(user_id) {
                return false;
            }
            *current = snapshot.clone();
            true
        });

        if !applied {
            debug!(stamp, "Discarding stale cart refresh");
            return self.settled().await;
        }
        snapshot
    }

    /// Waits for whichever refresh superseded ours.
    async fn settled(&self) -> CartSnapshot {
        let mut rx = self.state_tx.subscribe();
        let snapshot = match rx.wait_for(|snapshot| !snapshot.loading).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.state_tx.borrow().clone(),
        };
        snapshot
    }

    fn clear(&self) {
        self.state_tx.send_if_modified(|snapshot| {
            self.generation.next();
            let changed = *snapshot != CartSnapshot::default();
            *snapshot = CartSnapshot::default();
            changed
        });
    }
}

/// Reacts to session identity changes until aborted.
async fn watch_session(sync: CartSync, mut session_rx: watch::Receiver<SessionState>) {
    let mut current: Option<UserId> = None;

    loop {
        let user_id = session_rx.borrow_and_update().user_id();

        if user_id != current {
            current = user_id;
            match user_id {
                None => {
                    debug!("Session ended, clearing cart");
                    sync.clear();
                }
                Some(id) => {
                    debug!(user_id = id, "Session user changed, refreshing cart");
                    let sync = sync.clone();
                    tokio::spawn(async move {
                        sync.refresh().await;
                    });
                }
            }
        }

        if session_rx.changed().await.is_err() {
            debug!("Session channel closed, cart watcher exiting");
            break;
        }
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// Owns the cart state and the session watcher task.
///
/// Must be created inside a Tokio runtime. Dropping the manager stops the
/// watcher.
pub struct CartManager {
    sync: CartSync,
    watcher: JoinHandle<()>,
}

impl CartManager {
    /// Creates an empty cart that follows `session_rx`.
    pub fn new(api: ApiClient, session_rx: watch::Receiver<SessionState>) -> Self {
        let (state_tx, _) = watch::channel(CartSnapshot::default());

        let sync = CartSync {
            api,
            state_tx: Arc::new(state_tx),
            session_rx: session_rx.clone(),
            generation: Arc::new(Generation::new()),
        };

        let watcher = tokio::spawn(watch_session(sync.clone(), session_rx));

        CartManager { sync, watcher }
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.sync.state_tx.borrow().clone()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.sync.state_tx.borrow().items.clone()
    }

    pub fn count(&self) -> i64 {
        self.sync.state_tx.borrow().count
    }

    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.sync.state_tx.subscribe()
    }

    /// Re-fetches items and count. Clears instead when nobody is signed in.
    pub async fn refresh(&self) -> CartSnapshot {
        self.sync.refresh().await
    }

    /// Adds a course, then re-fetches the whole cart.
    pub async fn add(&self, course_id: CourseId) -> ApiResult<CartSnapshot> {
        self.sync.api.add_to_cart(course_id).await?;
        info!(course_id, "Course added to cart");
        Ok(self.refresh().await)
    }

    /// Removes a course, then re-fetches the whole cart.
    pub async fn remove(&self, course_id: CourseId) -> ApiResult<CartSnapshot> {
        self.sync.api.remove_from_cart(course_id).await?;
        info!(course_id, "Course removed from cart");
        Ok(self.refresh().await)
    }

    /// Checks out, then re-fetches the whole cart.
    ///
    /// An empty cart is still sent; the backend decides whether that is an
    /// error.
    pub async fn checkout(&self) -> ApiResult<CartSnapshot> {
        self.sync.api.checkout().await?;
        info!("Checkout completed");
        Ok(self.refresh().await)
    }

    /// Empties the local cart and discards any refresh in flight.
    pub fn clear(&self) {
        self.sync.clear();
    }

    /// Stops following the session.
    pub fn shutdown(&self) {
        self.watcher.abort();
    }
}

impl Drop for CartManager {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
