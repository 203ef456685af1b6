//! Session-stored order state.
//!
//! The whole order draft (cart, delivery choice, quote, address) is one
//! serialized snapshot under a single session key. Handlers load the
//! snapshot, apply one mutation, and store the result; a concurrent request
//! committing later simply wins.

use cialu_core::OrderDraft;
use tower_sessions::Session;

/// Session keys for storefront data.
pub mod session_keys {
    /// Key for the order draft snapshot.
    pub const ORDER_DRAFT: &str = "order_draft";
}

/// Load the order draft from the session, or a fresh one.
pub async fn load_draft(session: &Session) -> OrderDraft {
    session
        .get::<OrderDraft>(session_keys::ORDER_DRAFT)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the order draft snapshot in the session.
///
/// # Errors
///
/// Returns the session store error if the insert fails.
pub async fn store_draft(
    session: &Session,
    draft: &OrderDraft,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::ORDER_DRAFT, draft).await
}
