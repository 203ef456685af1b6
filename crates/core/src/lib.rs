//! CIALU Core - Storefront domain logic.
//!
//! This crate contains the business logic of the CIALU storefront with no I/O:
//! no HTTP clients, no sessions, no rendering. Everything here is testable
//! without a running server.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed product catalog seeded at load time
//! - [`cart`] - Cart lines keyed by `(product id, size)` and their totals
//! - [`delivery`] - Delivery choice, postal codes, and the flat fee table
//! - [`checkout`] - The order draft state object and the WhatsApp message composer
//! - [`types`] - Type-safe IDs and BRL price formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use catalog::{Catalog, Product};
pub use checkout::{CheckoutError, OrderDraft, compose_order_message};
pub use delivery::{DeliveryChoice, PostalCode, PostalCodeError, ShippingQuote, shipping_fee};
pub use types::*;
