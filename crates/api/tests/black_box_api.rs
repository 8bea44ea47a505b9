use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but zero simulated delay and an ephemeral port.
        let app = showroom_api::app::build_app(Duration::ZERO).expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn valid_draft() -> serde_json::Value {
    json!({
        "name": "Oak Bookshelf",
        "description": "Five shelves, solid oak",
        "price_cents": 89_900,
        "images": ["bookshelf_front.png", "bookshelf_side.png"],
        "model_url": "bookshelf.glb",
        "rating": 4.5,
        "reviews": 12,
    })
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_returns_all_seeds_in_order() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);

    let ids: Vec<u64> = items.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(items[0]["name"], "Luxe Lounge Chair");
    assert_eq!(items[2]["name"], "Sofa");
}

#[tokio::test]
async fn get_by_id_returns_the_matching_record() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/products?id=2", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Elegant Dining Table");
    assert_eq!(body["rating"], 4.9);
    assert_eq!(body["reviews"], 89);
    // The AR collaborator bundle rides along with the record.
    assert_eq!(body["ar"]["model_url"], "/coffee_grinder.glb");
    assert_eq!(body["ar"]["auto_rotate"], true);
}

#[tokio::test]
async fn absent_id_is_a_structured_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/products?id=99", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn malformed_id_is_a_bad_request() {
    let srv = TestServer::spawn().await;

    for bad in ["chair", "0", "-3"] {
        let res = reqwest::get(format!("{}/products?id={}", srv.base_url, bad))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "id={bad}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_id", "id={bad}");
    }
}

#[tokio::test]
async fn accepted_draft_is_echoed_but_never_stored() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&valid_draft())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product added successfully");
    assert_eq!(body["product"]["name"], "Oak Bookshelf");
    assert_eq!(body["product"]["rating"], 4.5);

    // No durability: the catalog still holds exactly the seed list.
    let res = reqwest::get(format!("{}/products", srv.base_url)).await.unwrap();
    let list: serde_json::Value = res.json().await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn incomplete_draft_is_rejected_with_a_message() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut draft = valid_draft();
    draft["images"] = json!([]);

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&draft)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut draft = valid_draft();
    draft["rating"] = json!(6.2);

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&draft)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
