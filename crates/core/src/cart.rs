//! Shopping cart.
//!
//! A cart is an ordered collection of lines keyed by `(product id, size)`:
//! the same product in two sizes makes two distinct lines, while adding the
//! same `(id, size)` pair again increments the existing line. Each line keeps
//! a snapshot of the product taken at add time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::types::ProductId;

/// Validation errors when mutating the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Add attempted without choosing a size.
    #[error("no size selected")]
    SizeNotSelected,

    /// Add attempted with a size the product is not cut in.
    #[error("size {0} not available for this product")]
    SizeUnavailable(String),
}

/// One `(product, size, quantity)` entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at add time.
    pub product: Product,
    pub size: String,
    /// Always >= 1; a line whose quantity would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add a product in the given size.
    ///
    /// Increments the matching `(id, size)` line if one exists, otherwise
    /// appends a new line. A quantity of 0 is treated as 1, matching the
    /// stepper minimum in the product overlay. There is no upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::SizeNotSelected`] for an empty size and
    /// [`CartError::SizeUnavailable`] for a size the product does not offer.
    /// The cart is unchanged on error.
    pub fn add(&mut self, product: &Product, size: &str, quantity: u32) -> Result<(), CartError> {
        if size.is_empty() {
            return Err(CartError::SizeNotSelected);
        }
        if !product.sizes.iter().any(|s| s == size) {
            return Err(CartError::SizeUnavailable(size.to_string()));
        }

        let quantity = quantity.max(1);
        if let Some(line) = self.line_mut(product.id, size) {
            // Quantities have no upper bound, so merging saturates like
            // set_quantity does instead of overflowing.
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                size: size.to_string(),
                quantity,
            });
        }
        Ok(())
    }

    /// Set a line's quantity exactly; a quantity <= 0 removes the line.
    ///
    /// No-op if no matching line exists.
    pub fn set_quantity(&mut self, id: ProductId, size: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id, size);
            return;
        }
        if let Some(line) = self.line_mut(id, size) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the matching line; no-op if absent.
    pub fn remove(&mut self, id: ProductId, size: &str) {
        self.lines
            .retain(|line| !(line.product.id == id && line.size == size));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines, used for the badge count.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    fn line_mut(&mut self, id: ProductId, size: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == id && line.size == size)
    }
}
