//! Order draft state and the WhatsApp message composer.
//!
//! The draft is the single state object the session stores: cart, delivery
//! choice, shipping quote, and free-text address. Handlers load the stored
//! snapshot, apply one mutation, and store the new snapshot, which keeps this
//! logic testable without any rendering surface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::delivery::{DeliveryChoice, ShippingQuote};
use crate::types::price::brl_amount;

/// Why a checkout cannot proceed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("no delivery choice selected")]
    DeliveryNotChosen,

    #[error("shipping selected but no quote present")]
    MissingQuote,
}

/// Everything the session knows about the order being assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub cart: Cart,
    pub delivery: DeliveryChoice,
    /// Present only after a successful CEP lookup. A later lookup overwrites
    /// an earlier one (last writer wins; there is no request fencing).
    pub quote: Option<ShippingQuote>,
    /// Free-text street address, only meaningful when shipping.
    pub address: String,
}

impl OrderDraft {
    /// Switch the delivery choice.
    ///
    /// Choosing pickup clears the quote and address so no stale shipping data
    /// can leak into a pickup order.
    pub fn set_delivery(&mut self, choice: DeliveryChoice) {
        self.delivery = choice;
        if choice == DeliveryChoice::Pickup {
            self.quote = None;
            self.address.clear();
        }
    }

    /// Store a freshly resolved quote.
    pub fn set_quote(&mut self, quote: ShippingQuote) {
        self.quote = Some(quote);
    }

    /// The fee that applies to the total: only when shipping with a quote.
    #[must_use]
    pub fn shipping_fee(&self) -> Option<Decimal> {
        match self.delivery {
            DeliveryChoice::Ship => self.quote.as_ref().map(|q| q.fee),
            DeliveryChoice::Unset | DeliveryChoice::Pickup => None,
        }
    }

    /// Cart total plus the shipping fee when it applies.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total_price() + self.shipping_fee().unwrap_or_default()
    }

    /// Whether the checkout action is allowed.
    ///
    /// Requires a non-empty cart, a delivery choice, and - when shipping - a
    /// resolved quote. The checkout button is rendered disabled otherwise.
    #[must_use]
    pub fn is_checkout_ready(&self) -> bool {
        !self.cart.is_empty()
            && match self.delivery {
                DeliveryChoice::Unset => false,
                DeliveryChoice::Ship => self.quote.is_some(),
                DeliveryChoice::Pickup => true,
            }
    }
}

/// Compose the order summary sent through the WhatsApp deep link.
///
/// One block per cart line, a divider, the shipping details or pickup notice,
/// another divider, and the total. Amounts use the comma decimal separator.
///
/// # Errors
///
/// Returns a [`CheckoutError`] when the draft does not satisfy the checkout
/// preconditions; callers are expected to have checked
/// [`OrderDraft::is_checkout_ready`] already.
pub fn compose_order_message(draft: &OrderDraft) -> Result<String, CheckoutError> {
    if draft.cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let delivery_block = match draft.delivery {
        DeliveryChoice::Unset => return Err(CheckoutError::DeliveryNotChosen),
        DeliveryChoice::Pickup => "\n*Opção:* Retirar em loja\n".to_string(),
        DeliveryChoice::Ship => {
            let quote = draft.quote.as_ref().ok_or(CheckoutError::MissingQuote)?;
            let address = if draft.address.is_empty() {
                "Não informado"
            } else {
                draft.address.as_str()
            };
            format!(
                "\n*CEP:* {}\n*Local:* {} - {}\n*Endereço completo:* {}\n*Valor do Frete:* R${}\n",
                quote.postal_code,
                quote.locality,
                quote.region,
                address,
                brl_amount(quote.fee),
            )
        }
    };

    let products = draft
        .cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "- {}\n*Tamanho:* {} \n*Quantidade:* {} \n*Valor:* R${}",
                line.product.name,
                line.size,
                line.quantity,
                brl_amount(line.line_total()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let total_line = if draft.delivery == DeliveryChoice::Ship {
        format!("*Valor total com frete:* R${}", brl_amount(draft.total()))
    } else {
        format!("*Valor total:* R${}", brl_amount(draft.total()))
    };

    Ok(format!(
        "Olá! Gostaria de finalizar minha compra:\n\n*Produtos:*\n{products}\n---------------------------------{delivery_block}\n---------------------------------\n{total_line}"
    ))
}
