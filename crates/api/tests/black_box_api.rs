use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use synergy_api::app::build_app_with;
use synergy_api::app::services::build_in_memory_services;
use synergy_api::credentials::EnvCredentials;
use synergy_core::Month;
use synergy_infra::RevenueStore;

struct TestServer {
    base_url: String,
    revenue: Arc<dyn RevenueStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        // Keep a handle on the revenue store to seed and inspect the ledger.
        let services = build_in_memory_services(EnvCredentials::new(
            "operator@example.com",
            "test-secret",
        ));
        let revenue = services.revenue.clone();
        let app = build_app_with(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            revenue,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// Mutations answer with 303s; keep them visible instead of following them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn sign_in(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{}/login", base_url))
        .json(&json!({ "email": "operator@example.com", "password": "test-secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let cookie = res
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("login did not set a session cookie")
        .to_str()
        .unwrap();
    cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .expect("unexpected session cookie shape")
        .to_string()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let srv = TestServer::spawn().await;

    let res = client()
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;

    let res = client()
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "operator@example.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials.");
}

#[tokio::test]
async fn login_sets_a_session_cookie() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "operator@example.com", "password": "test-secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[reqwest::header::LOCATION], "/dashboard");

    let cookie = res
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session="));

    // The cookie alone is enough for the protected routes.
    let res = client
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .header(reqwest::header::COOKIE, cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn invoice_flow_moves_the_ledger() {
    let srv = TestServer::spawn().await;
    let client = client();
    let token = sign_in(&client, &srv.base_url).await;

    srv.revenue.write_bucket(Month::Mar, 1000).await.unwrap();

    let res = client
        .post(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "customerId": "c1",
            "project": "Website redesign",
            "amount": "50.00",
            "status": "paid",
            "date": "2024-03-05"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[reqwest::header::LOCATION],
        "/dashboard/invoices"
    );

    let res = client
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["customer_id"], "c1");
    assert_eq!(items[0]["amount_cents"], 5000);
    assert_eq!(items[0]["status"], "paid");

    // The March bucket gained the invoice's full amount.
    let res = client
        .get(format!("{}/dashboard/revenue", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let march = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|bucket| bucket["month"] == "Mar")
        .unwrap()
        .clone();
    assert_eq!(march["revenue_cents"], 6000);
}

#[tokio::test]
async fn invalid_invoice_reports_field_errors() {
    let srv = TestServer::spawn().await;
    let client = client();
    let token = sign_in(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "project": "Website redesign",
            "amount": "50.00",
            "status": "paid",
            "date": "2024-03-05"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Missing Fields. Failed to Create Invoice.");
    assert_eq!(body["errors"]["customerId"][0], "Please select a customer.");

    let res = client
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_an_invoice_empties_the_listing() {
    let srv = TestServer::spawn().await;
    let client = client();
    let token = sign_in(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "customerId": "c1",
            "project": "Audit",
            "amount": "120.00",
            "status": "pending",
            "date": "2024-01-10"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = client
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["items"][0]["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/dashboard/invoices/{}/delete", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/dashboard/invoices", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn customer_flow_creates_and_validates() {
    let srv = TestServer::spawn().await;
    let client = client();
    let token = sign_in(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "name": "Lee Robinson", "email": "lee@robinson.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[reqwest::header::LOCATION],
        "/dashboard/customers"
    );

    let res = client
        .get(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Lee Robinson");
    assert_eq!(items[0]["image_url"], "/customers/user.png");

    let res = client
        .post(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "email": "no-name@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["errors"]["customer_name"][0],
        "Please enter a valid customer name."
    );
}

#[tokio::test]
async fn deleting_a_customer_leaves_the_customer_listing_stale() {
    let srv = TestServer::spawn().await;
    let client = client();
    let token = sign_in(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "name": "Lee Robinson", "email": "lee@robinson.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    // Render the customer listing once so the cache holds it.
    let res = client
        .get(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["items"][0]["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/dashboard/customers/{}/delete", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Deleting a customer only refreshes the invoice listing, so the
    // customer listing keeps serving its cached rendering, row included.
    let res = client
        .get(format!("{}/dashboard/customers", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}
