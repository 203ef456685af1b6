//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /health                   - Health check
//!
//! # Products
//! GET  /products                 - Collection grid
//! GET  /products/{id}            - Product detail
//! GET  /products/{id}/quick-view - Detail overlay fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                     - Cart page
//! POST /cart/add                 - Add to cart (returns a notice, triggers cart-updated)
//! POST /cart/update              - Set line quantity (returns cart_items fragment)
//! POST /cart/remove              - Remove line (returns cart_items fragment)
//! POST /cart/clear               - Empty the cart (returns cart_items fragment)
//! GET  /cart/count               - Cart count badge (fragment)
//! POST /cart/delivery            - Choose ship vs pickup (returns cart_items fragment)
//! POST /cart/address             - Store the free-text street address
//! POST /cart/shipping            - CEP lookup and quote (returns cart_items fragment)
//!
//! # Checkout
//! GET  /checkout                 - Redirect to the WhatsApp deep link
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/quick-view", get(products::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/delivery", post(cart::set_delivery))
        .route("/address", post(cart::set_address))
        .route("/shipping", post(cart::shipping))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(checkout::checkout))
}
