//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The whole order draft lives in the session; every handler loads the stored
//! snapshot, applies one mutation, and stores the new snapshot. Validation
//! failures are rendered inline as transient notices and leave the draft
//! untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use cialu_core::{CartError, DeliveryChoice, OrderDraft, PostalCode, ProductId, ShippingQuote, price};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session::{load_draft, store_draft};
use crate::services::cep::CepError;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub size: String,
    pub quantity: u32,
    pub line_total: String,
}

/// A transient notice rendered above the cart totals.
#[derive(Clone)]
pub struct NoticeView {
    pub message: String,
    pub error: bool,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub subtotal: String,
    /// Formatted fee, present only when shipping with a resolved quote.
    pub shipping_fee: Option<String>,
    pub total: String,
    pub delivery_ship: bool,
    pub delivery_pickup: bool,
    /// Formatted postal code of the stored quote.
    pub postal_code: Option<String>,
    /// "Locality - UF" of the stored quote.
    pub destination: Option<String>,
    pub address: String,
    pub checkout_ready: bool,
    pub notice: Option<NoticeView>,
}

impl CartView {
    fn from_draft(draft: &OrderDraft) -> Self {
        let items = draft
            .cart
            .lines()
            .iter()
            .map(|line| CartItemView {
                id: line.product.id.as_i32(),
                name: line.product.name.clone(),
                description: line.product.description.clone(),
                image: line.product.image.clone(),
                size: line.size.clone(),
                quantity: line.quantity,
                line_total: price::brl(line.line_total()),
            })
            .collect();

        Self {
            items,
            item_count: draft.cart.total_items(),
            subtotal: price::brl(draft.cart.total_price()),
            shipping_fee: draft.shipping_fee().map(price::brl),
            total: price::brl(draft.total()),
            delivery_ship: draft.delivery == DeliveryChoice::Ship,
            delivery_pickup: draft.delivery == DeliveryChoice::Pickup,
            postal_code: draft.quote.as_ref().map(|q| q.postal_code.to_string()),
            destination: draft
                .quote
                .as_ref()
                .map(|q| format!("{} - {}", q.locality, q.region)),
            address: draft.address.clone(),
            checkout_ready: draft.is_checkout_ready(),
            notice: None,
        }
    }

    fn with_notice(draft: &OrderDraft, message: String, error: bool) -> Self {
        let mut view = Self::from_draft(draft);
        view.notice = Some(NoticeView { message, error });
        view
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    #[serde(default)]
    pub size: String,
    pub quantity: Option<u32>,
}

/// Update cart line form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub size: String,
    pub quantity: i64,
}

/// Remove cart line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
    pub size: String,
}

/// Delivery choice form data.
#[derive(Debug, Deserialize)]
pub struct DeliveryForm {
    pub choice: String,
}

/// Street address form data.
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub address: String,
}

/// CEP lookup form data.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    #[serde(default)]
    pub postal_code: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Transient notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub notice: NoticeView,
}

/// Cart items fragment with the `cart-updated` trigger attached.
fn cart_fragment(draft: &OrderDraft, notice: Option<(String, bool)>) -> Response {
    let cart = match notice {
        Some((message, error)) => CartView::with_notice(draft, message, error),
        None => CartView::from_draft(draft),
    };
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let draft = load_draft(&session).await;
    Ok(CartShowTemplate {
        cart: CartView::from_draft(&draft),
    })
}

/// Add an item to the cart (HTMX).
///
/// Returns a confirmation notice with a trigger to refresh the count badge.
/// A missing size aborts with an error notice and leaves the cart unchanged.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let Some(product) = state.catalog().get(ProductId::new(form.product_id)) else {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            NoticeTemplate {
                notice: NoticeView {
                    message: "Produto não encontrado.".to_string(),
                    error: true,
                },
            },
        )
            .into_response());
    };

    let mut draft = load_draft(&session).await;
    let quantity = form.quantity.unwrap_or(1);

    if let Err(e) = draft.cart.add(product, &form.size, quantity) {
        let message = match e {
            CartError::SizeNotSelected => {
                "Selecione um tamanho. Escolha o tamanho antes de adicionar ao carrinho."
            }
            CartError::SizeUnavailable(_) => "Tamanho indisponível para este produto.",
        };
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            NoticeTemplate {
                notice: NoticeView {
                    message: message.to_string(),
                    error: true,
                },
            },
        )
            .into_response());
    }

    store_draft(&session, &draft).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        NoticeTemplate {
            notice: NoticeView {
                message: format!("Adicionado ao carrinho: {} ({})", product.name, form.size),
                error: false,
            },
        },
    )
        .into_response())
}

/// Set a cart line's quantity (HTMX). Zero or negative removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let mut draft = load_draft(&session).await;
    draft
        .cart
        .set_quantity(ProductId::new(form.product_id), &form.size, form.quantity);
    store_draft(&session, &draft).await?;
    Ok(cart_fragment(&draft, None))
}

/// Remove a cart line (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut draft = load_draft(&session).await;
    draft.cart.remove(ProductId::new(form.product_id), &form.size);
    store_draft(&session, &draft).await?;
    Ok(cart_fragment(&draft, None))
}

/// Empty the cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let mut draft = load_draft(&session).await;
    draft.cart.clear();
    store_draft(&session, &draft).await?;
    Ok(cart_fragment(&draft, None))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let draft = load_draft(&session).await;
    Ok(CartCountTemplate {
        count: draft.cart.total_items(),
    })
}

/// Choose between shipping and pickup (HTMX).
///
/// Choosing pickup clears the postal code, quote, and address so no stale
/// shipping data leaks into a pickup order.
#[instrument(skip(session))]
pub async fn set_delivery(session: Session, Form(form): Form<DeliveryForm>) -> Result<Response> {
    let choice = match form.choice.as_str() {
        "ship" => DeliveryChoice::Ship,
        "pickup" => DeliveryChoice::Pickup,
        other => {
            return Err(crate::error::AppError::BadRequest(format!(
                "unknown delivery choice: {other}"
            )));
        }
    };

    let mut draft = load_draft(&session).await;
    draft.set_delivery(choice);
    store_draft(&session, &draft).await?;
    Ok(cart_fragment(&draft, None))
}

/// Store the free-text street address.
#[instrument(skip(session))]
pub async fn set_address(session: Session, Form(form): Form<AddressForm>) -> Result<StatusCode> {
    let mut draft = load_draft(&session).await;
    draft.address = form.address;
    store_draft(&session, &draft).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a CEP into a shipping quote (HTMX).
///
/// Failures leave the previously stored quote untouched: a malformed CEP and
/// an unknown CEP each surface their own notice, and transport or parse
/// failures surface a generic retry-later notice.
#[instrument(skip(state, session))]
pub async fn shipping(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ShippingForm>,
) -> Result<Response> {
    let mut draft = load_draft(&session).await;

    let Ok(postal_code) = PostalCode::parse(&form.postal_code) else {
        return Ok(cart_fragment(
            &draft,
            Some((
                "CEP inválido. Digite um CEP com 8 dígitos.".to_string(),
                true,
            )),
        ));
    };

    let address = match state.lookup().lookup(postal_code.digits()).await {
        Ok(address) => address,
        Err(CepError::NotFound(_)) => {
            return Ok(cart_fragment(
                &draft,
                Some((
                    "CEP não encontrado. Verifique o CEP digitado.".to_string(),
                    true,
                )),
            ));
        }
        Err(e) => {
            tracing::warn!(error = %e, "CEP lookup failed");
            return Ok(cart_fragment(
                &draft,
                Some((
                    "Erro ao buscar CEP. Tente novamente mais tarde.".to_string(),
                    true,
                )),
            ));
        }
    };

    let confirmation = format!(
        "Frete calculado: Local - {} - {}",
        address.locality, address.region
    );
    draft.set_quote(ShippingQuote::new(
        postal_code,
        address.region,
        address.locality,
    ));
    store_draft(&session, &draft).await?;

    Ok(cart_fragment(&draft, Some((confirmation, false))))
}
