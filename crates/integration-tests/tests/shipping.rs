//! Integration tests for delivery choice and CEP-based shipping quotes.
//!
//! The fake lookup resolves a handful of fixed CEPs; see the support crate
//! for the mapping.

use cialu_integration_tests::{CEP_NOT_FOUND, CEP_UNREACHABLE, TestApp};
use reqwest::StatusCode;

/// Put one item in the cart and choose shipping.
async fn shipping_cart(app: &TestApp) {
    app.add_to_cart("1", "M", "1").await;
    let resp = app.post_form("/cart/delivery", &[("choice", "ship")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_quote_for_sp_cep() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    let resp = app
        .post_form("/cart/shipping", &[("postal_code", "01310-100")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Frete calculado: Local - São Paulo - SP"));
    assert!(body.contains("Destino: São Paulo - SP"));
    // SP fee
    assert!(body.contains("R$ 25,00"));
    // 299,90 + 25,00
    assert!(body.contains("R$ 324,90"));
}

#[tokio::test]
async fn test_quote_for_unlisted_region_uses_default_fee() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    // DF is not in the fee table
    let resp = app
        .post_form("/cart/shipping", &[("postal_code", "70040010")])
        .await;
    let body = resp.text().await.unwrap();

    assert!(body.contains("Frete calculado: Local - Brasília - DF"));
    assert!(body.contains("R$ 22,00"));
}

#[tokio::test]
async fn test_cep_digits_are_extracted_from_noisy_input() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    let resp = app
        .post_form("/cart/shipping", &[("postal_code", " 01.310-100 ")])
        .await;
    let body = resp.text().await.unwrap();
    assert!(body.contains("Frete calculado: Local - São Paulo - SP"));
}

#[tokio::test]
async fn test_short_cep_is_rejected_and_keeps_previous_quote() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    app.post_form("/cart/shipping", &[("postal_code", "01310100")])
        .await;

    let resp = app.post_form("/cart/shipping", &[("postal_code", "123")]).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("CEP inválido. Digite um CEP com 8 dígitos."));
    // Previous quote still applies
    assert!(body.contains("Destino: São Paulo - SP"));
    assert!(body.contains("R$ 25,00"));
}

#[tokio::test]
async fn test_unknown_cep_reports_not_found() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    let resp = app
        .post_form("/cart/shipping", &[("postal_code", CEP_NOT_FOUND)])
        .await;
    let body = resp.text().await.unwrap();
    assert!(body.contains("CEP não encontrado. Verifique o CEP digitado."));
}

#[tokio::test]
async fn test_lookup_outage_reports_retry_later() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    let resp = app
        .post_form("/cart/shipping", &[("postal_code", CEP_UNREACHABLE)])
        .await;
    let body = resp.text().await.unwrap();
    assert!(body.contains("Erro ao buscar CEP. Tente novamente mais tarde."));
}

#[tokio::test]
async fn test_new_quote_replaces_previous_one() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    app.post_form("/cart/shipping", &[("postal_code", "01310100")])
        .await;
    let resp = app
        .post_form("/cart/shipping", &[("postal_code", "20040020")])
        .await;
    let body = resp.text().await.unwrap();

    assert!(body.contains("Destino: Rio de Janeiro - RJ"));
    assert!(!body.contains("Destino: São Paulo - SP"));
    // RJ fee replaces the SP fee
    assert!(body.contains("R$ 40,00"));
    assert!(!body.contains("R$ 25,00"));
}

#[tokio::test]
async fn test_switching_to_pickup_clears_shipping_state() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    app.post_form("/cart/shipping", &[("postal_code", "01310100")])
        .await;
    app.post_form("/cart/address", &[("address", "Rua das Flores, 123")])
        .await;

    let resp = app
        .post_form("/cart/delivery", &[("choice", "pickup")])
        .await;
    let body = resp.text().await.unwrap();

    assert!(!body.contains("Destino:"));
    assert!(!body.contains("R$ 25,00"));
    // Total falls back to the cart subtotal
    assert!(body.contains("R$ 299,90"));
}

#[tokio::test]
async fn test_unknown_delivery_choice_is_bad_request() {
    let app = TestApp::spawn().await;
    app.add_to_cart("1", "M", "1").await;

    let resp = app
        .post_form("/cart/delivery", &[("choice", "teleport")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_address_update_returns_no_content() {
    let app = TestApp::spawn().await;
    shipping_cart(&app).await;

    let resp = app
        .post_form("/cart/address", &[("address", "Rua das Flores, 123")])
        .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = app.get("/cart").await.text().await.unwrap();
    assert!(body.contains("Rua das Flores, 123"));
}
