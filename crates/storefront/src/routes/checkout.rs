//! Checkout route handler.
//!
//! There is no payment flow here. Checkout composes the order summary and
//! hands the customer over to WhatsApp with the message pre-filled.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use cialu_core::checkout::compose_order_message;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::load_draft;
use crate::services::whatsapp;
use crate::state::AppState;

/// Redirect to the WhatsApp deep link with the composed order message.
///
/// A draft that is not ready (empty cart, no delivery choice, shipping
/// without a quote) goes back to the cart page instead.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let draft = load_draft(&session).await;

    // Readiness and composition check the same preconditions, so a compose
    // failure can only happen if the draft changed between the two calls.
    // Either way the answer is the same: back to the cart.
    if !draft.is_checkout_ready() {
        return Ok(Redirect::to("/cart"));
    }
    let Ok(message) = compose_order_message(&draft) else {
        return Ok(Redirect::to("/cart"));
    };

    let url = whatsapp::checkout_url(&state.config().whatsapp_number, &message);

    Ok(Redirect::to(&url))
}
