// src/tests/router_tests/pages_tests.rs

use super::{body_string, get, post_json};
use crate::router::handle;
use crate::store::ListingStore;
use serde_json::json;

#[test]
fn home_page_renders() {
    let store = ListingStore::new();

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("PaLevel"));
    assert!(body.contains("Find Your Room"));
    assert!(body.contains("Landlords: Add Your Property"));
}

#[test]
fn home_page_shows_created_listings() {
    let store = ListingStore::new();

    let req = post_json(
        "/api/listings",
        &json!({
            "name": "Kalundu Flat",
            "location": "Lusaka",
            "price": "850",
            "contact": "0977000000"
        }),
    );
    handle(req, &store).unwrap();

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("Kalundu Flat"));
    assert!(body.contains("ZMW 850"));
    assert!(!body.contains("No listings yet"));
}

#[test]
fn test_page_says_backend_running() {
    let store = ListingStore::new();

    let resp = handle(get("/test"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("PaLevel Backend Running"));
}
