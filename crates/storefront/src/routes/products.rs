//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use cialu_core::{Product, ProductId, price};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub badge: Option<String>,
    pub sizes: Vec<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: price::brl(product.price),
            image: product.image.clone(),
            badge: product.badge.clone(),
            sizes: product.sizes.clone(),
        }
    }
}

/// Collection grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Detail overlay fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: ProductView,
}

/// Display the collection grid.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.catalog().all().iter().map(ProductView::from).collect();
    ProductsIndexTemplate { products }
}

/// Display the product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ProductShowTemplate> {
    let product = lookup_product(&state, id)?;
    Ok(ProductShowTemplate { product })
}

/// Display the detail overlay fragment (for HTMX).
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<QuickViewTemplate> {
    let product = lookup_product(&state, id)?;
    Ok(QuickViewTemplate { product })
}

fn lookup_product(state: &AppState, id: i32) -> Result<ProductView> {
    state
        .catalog()
        .get(ProductId::new(id))
        .map(ProductView::from)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
