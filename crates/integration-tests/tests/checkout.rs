//! Integration tests for the WhatsApp checkout redirect.
//!
//! The test client does not follow redirects, so every assertion here is on
//! the status code and `Location` header of the `/checkout` response.

use cialu_integration_tests::TestApp;
use reqwest::StatusCode;

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .expect("missing Location header")
        .to_str()
        .expect("non-ASCII Location header")
}

#[tokio::test]
async fn test_empty_cart_goes_back_to_cart_page() {
    let app = TestApp::spawn().await;

    let resp = app.get("/checkout").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cart");
}

#[tokio::test]
async fn test_missing_delivery_choice_goes_back_to_cart_page() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;

    let resp = app.get("/checkout").await;
    assert_eq!(location(&resp), "/cart");
}

#[tokio::test]
async fn test_shipping_without_quote_goes_back_to_cart_page() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;
    app.post_form("/cart/delivery", &[("choice", "ship")]).await;

    let resp = app.get("/checkout").await;
    assert_eq!(location(&resp), "/cart");
}

#[tokio::test]
async fn test_shipping_order_redirects_to_whatsapp() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;
    app.post_form("/cart/delivery", &[("choice", "ship")]).await;
    app.post_form("/cart/shipping", &[("postal_code", "01310-100")])
        .await;
    app.post_form("/cart/address", &[("address", "Rua das Flores, 123")])
        .await;

    let resp = app.get("/checkout").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let url = location(&resp);
    assert!(url.starts_with("https://wa.me/5547996224032?text="));

    // Greeting, product block, shipping block, and total, URL-encoded
    assert!(url.contains("Ol%C3%A1%21%20Gostaria%20de%20finalizar%20minha%20compra%3A"));
    assert!(url.contains("Vestido%20Elegante%20Preto"));
    assert!(url.contains("%2ACEP%3A%2A%2001310-100"));
    assert!(url.contains("S%C3%A3o%20Paulo%20-%20SP"));
    assert!(url.contains("Rua%20das%20Flores%2C%20123"));
    assert!(url.contains("%2AValor%20do%20Frete%3A%2A%20R%2425%2C00"));
    // 299,90 + 25,00
    assert!(url.contains("%2AValor%20total%20com%20frete%3A%2A%20R%24324%2C90"));
}

#[tokio::test]
async fn test_shipping_order_without_address_says_not_informed() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;
    app.post_form("/cart/delivery", &[("choice", "ship")]).await;
    app.post_form("/cart/shipping", &[("postal_code", "01310100")])
        .await;

    let resp = app.get("/checkout").await;
    let url = location(&resp);
    assert!(url.contains("N%C3%A3o%20informado"));
}

#[tokio::test]
async fn test_pickup_order_redirects_to_whatsapp() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;
    app.post_form("/cart/delivery", &[("choice", "pickup")])
        .await;

    let resp = app.get("/checkout").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let url = location(&resp);
    assert!(url.starts_with("https://wa.me/5547996224032?text="));
    assert!(url.contains("%2AOp%C3%A7%C3%A3o%3A%2A%20Retirar%20em%20loja"));
    // No shipping block, and the total carries no fee
    assert!(!url.contains("%2ACEP%3A%2A"));
    assert!(url.contains("%2AValor%20total%3A%2A%20R%24299%2C90"));
}

#[tokio::test]
async fn test_checkout_button_disabled_until_ready() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;

    let body = app.get("/cart").await.text().await.unwrap();
    assert!(body.contains("disabled"));

    app.post_form("/cart/delivery", &[("choice", "pickup")])
        .await;
    let body = app.get("/cart").await.text().await.unwrap();
    assert!(body.contains("href=\"/checkout\""));
}
