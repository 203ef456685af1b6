//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Products for the "Favoritos da Semana" section.
    pub featured_products: Vec<ProductView>,
    /// The full collection grid.
    pub products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured_products = state.catalog().featured().map(ProductView::from).collect();
    let products = state.catalog().all().iter().map(ProductView::from).collect();

    HomeTemplate {
        featured_products,
        products,
    }
}
