//! API integration tests
//!
//! These run against a live server (`cargo run`) with a migrated database
//! and one seeded administrator account. Admin credentials come from
//! `LIBRARIUM_ADMIN_EMAIL` / `LIBRARIUM_ADMIN_PASSWORD`.
//!
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080";

/// Unique suffix so repeated runs don't collide on emails or ISBNs
fn unique_suffix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_millis() as u64
}

fn admin_credentials() -> (String, String) {
    (
        std::env::var("LIBRARIUM_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@librarium.local".to_string()),
        std::env::var("LIBRARIUM_ADMIN_PASSWORD").unwrap_or_else(|_| "admin-password".to_string()),
    )
}

/// Register a fresh user and return (email, password)
async fn register_user(client: &Client, tag: &str) -> (String, String) {
    let email = format!("{}-{}@example.com", tag, unique_suffix());
    let password = "secret-password".to_string();

    let response = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({
            "email": email,
            "name": "Integration Tester",
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(response.status(), 201);

    (email, password)
}

async fn login(client: &Client, email: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["access_token"]
        .as_str()
        .expect("No access token in response")
        .to_string()
}

async fn admin_token(client: &Client) -> String {
    let (email, password) = admin_credentials();
    login(client, &email, &password).await
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_then_duplicate_email_conflicts() {
    let client = Client::new();
    let (email, _) = register_user(&client, "dup").await;

    // Exact duplicate
    let response = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({ "email": email, "name": "Other", "password": "password6" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Case-folded duplicate
    let response = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({ "email": email.to_uppercase(), "name": "Other", "password": "password6" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_register_rejects_invalid_input() {
    let client = Client::new();

    // Email without @
    let response = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({ "email": "not-an-email", "name": "X", "password": "password6" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Password under 6 characters
    let response = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({ "email": "short@example.com", "name": "X", "password": "five5" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_login_returns_usable_token() {
    let client = Client::new();
    let (email, password) = register_user(&client, "login").await;

    let response = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["is_admin"], false);
    assert!(body["user"]["password"].is_null());

    // The token authenticates protected routes
    let token = body["access_token"].as_str().unwrap();
    let response = client
        .get(format!("{}/user/rental-history", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_login_failure_does_not_leak_user_existence() {
    let client = Client::new();
    let (email, _) = register_user(&client, "leak").await;

    let wrong_password = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(wrong_password.status(), 401);
    let wrong_password: Value = wrong_password.json().await.unwrap();

    let unknown_email = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({ "email": "nobody-here@example.com", "password": "whatever1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(unknown_email.status(), 401);
    let unknown_email: Value = unknown_email.json().await.unwrap();

    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[tokio::test]
#[ignore]
async fn test_refresh_issues_fresh_access_token() {
    let client = Client::new();
    let (email, password) = register_user(&client, "refresh").await;

    let response = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.unwrap();
    let refresh_token = body["refresh_token"].as_str().unwrap();

    let response = client
        .post(format!("{}/user/refresh", BASE_URL))
        .json(&json!({ "refresh_token": refresh_token }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let access_token = body["access_token"].as_str().expect("No access token");

    let response = client
        .get(format!("{}/user/rental-history", BASE_URL))
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // An access token must not pass as a refresh token
    let response = client
        .post(format!("{}/user/refresh", BASE_URL))
        .json(&json!({ "refresh_token": access_token }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_update_profile() {
    let client = Client::new();
    let (email, password) = register_user(&client, "profile").await;
    let token = login(&client, &email, &password).await;

    let response = client
        .put(format!("{}/user/profile", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Renamed Reader" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Renamed Reader");

    // Blank names are rejected
    let response = client
        .put(format!("{}/user/profile", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_missing_and_invalid_tokens() {
    let client = Client::new();

    let response = client
        .get(format!("{}/user/rental-history", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let response = client
        .get(format!("{}/user/rental-history", BASE_URL))
        .header("Authorization", "Bearer not-a-real-token")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_book_list_pagination() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/list?page=0", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/book/list?page=1&page_size=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["current"], 1);
    assert!(body["last_page"].is_number());
    assert!(body["total"].is_number());
    assert!(body["books"].is_array());
    assert!(body["books"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_admin_routes_require_admin_claim() {
    let client = Client::new();
    let (email, password) = register_user(&client, "notadmin").await;
    let token = login(&client, &email, &password).await;

    let response = client
        .post(format!("{}/admin/author", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Should Fail" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_search_requires_keyword() {
    let client = Client::new();

    let response = client
        .get(format!("{}/search/author", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

/// End-to-end catalog and rental walk-through: admin sets up author,
/// publisher and book; one user rents it; a second user can neither rent it
/// nor return it; the owner returns it exactly once.
#[tokio::test]
#[ignore]
async fn test_catalog_and_rental_lifecycle() {
    let client = Client::new();
    let admin = admin_token(&client).await;

    // Keep the ISBN in the 13-digit range while staying unique per run
    let isbn = format!("978{:010}", unique_suffix() % 10_000_000_000);

    // Author
    let response = client
        .post(format!("{}/admin/author", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin))
        .json(&json!({ "name": "A1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.unwrap();

    // Publisher
    let response = client
        .post(format!("{}/admin/publisher", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin))
        .json(&json!({ "name": "P1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let publisher: Value = response.json().await.unwrap();

    // Book
    let response = client
        .post(format!("{}/admin/book", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin))
        .json(&json!({
            "isbn": isbn,
            "title": "Integration Testing in Depth",
            "author_id": author["id"],
            "publisher_id": publisher["id"],
            "publication_year": 2024,
            "publication_month": 6
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Duplicate ISBN conflicts
    let response = client
        .post(format!("{}/admin/book", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin))
        .json(&json!({
            "isbn": isbn,
            "title": "Duplicate",
            "author_id": author["id"],
            "publisher_id": publisher["id"],
            "publication_year": 2024,
            "publication_month": 6
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Detail is denormalized with author and publisher names
    let response = client
        .get(format!("{}/book/detail/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let detail: Value = response.json().await.unwrap();
    assert_eq!(detail["isbn"], isbn);
    assert_eq!(detail["author"]["name"], "A1");
    assert_eq!(detail["publisher"]["name"], "P1");

    // The author search finds A1
    let response = client
        .get(format!("{}/search/author?keyword=A1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let found: Value = response.json().await.unwrap();
    assert!(found["authors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"] == author["id"]));

    // First user rents the book
    let (email1, password1) = register_user(&client, "renter1").await;
    let token1 = login(&client, &email1, &password1).await;

    let response = client
        .post(format!("{}/book/rental", BASE_URL))
        .header("Authorization", format!("Bearer {}", token1))
        .json(&json!({ "book_isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let rental: Value = response.json().await.unwrap();

    // Due date is 7 days after checkout
    let checkout = rental["checkout_date"].as_str().unwrap();
    let due = rental["due_date"].as_str().unwrap();
    let checkout: chrono::DateTime<chrono::Utc> = checkout.parse().unwrap();
    let due: chrono::DateTime<chrono::Utc> = due.parse().unwrap();
    assert_eq!(due - checkout, chrono::Duration::days(7));

    // Second user cannot rent the same book while it is on loan
    let (email2, password2) = register_user(&client, "renter2").await;
    let token2 = login(&client, &email2, &password2).await;

    let response = client
        .post(format!("{}/book/rental", BASE_URL))
        .header("Authorization", format!("Bearer {}", token2))
        .json(&json!({ "book_isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // ...nor return someone else's rental
    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .header("Authorization", format!("Bearer {}", token2))
        .json(&json!({ "rental_id": rental["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Owner returns it
    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .header("Authorization", format!("Bearer {}", token1))
        .json(&json!({ "rental_id": rental["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let returned: Value = response.json().await.unwrap();
    assert!(returned["returned_date"].is_string());

    // A second return of the same rental conflicts
    let response = client
        .post(format!("{}/book/return", BASE_URL))
        .header("Authorization", format!("Bearer {}", token1))
        .json(&json!({ "rental_id": rental["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // After the return, the book can be rented again
    let response = client
        .post(format!("{}/book/rental", BASE_URL))
        .header("Authorization", format!("Bearer {}", token2))
        .json(&json!({ "book_isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // The first user's history contains the closed rental
    let response = client
        .get(format!("{}/user/rental-history", BASE_URL))
        .header("Authorization", format!("Bearer {}", token1))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let history: Value = response.json().await.unwrap();
    let entry = history["history"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == rental["id"])
        .expect("Rental missing from history");
    assert_eq!(entry["book"]["isbn"], isbn);
    assert!(entry["returned_date"].is_string());
}
