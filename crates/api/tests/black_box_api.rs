use burgerstream_infra::{seed::seed_catalog, Services};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: Services) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = burgerstream_api::app::build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}{}", addr, burgerstream_api::app::API_PREFIX);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn empty() -> Self {
        Self::spawn(Services::in_memory()).await
    }

    async fn seeded() -> Self {
        let services = Services::in_memory();
        seed_catalog(&services).unwrap();
        Self::spawn(services).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_json(client: &reqwest::Client, url: String, body: Value) -> (StatusCode, Value) {
    let res = client.post(url).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn put_json(client: &reqwest::Client, url: String, body: Value) -> (StatusCode, Value) {
    let res = client.put(url).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn get_json(client: &reqwest::Client, url: String) -> (StatusCode, Value) {
    let res = client.get(url).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn delete(client: &reqwest::Client, url: String) -> (StatusCode, Value) {
    let res = client.delete(url).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_outside_the_api_prefix() {
    let srv = TestServer::empty().await;
    let root = srv.base_url.replace(burgerstream_api::app::API_PREFIX, "");

    let res = reqwest::get(format!("{}/health", root)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn burger_create_get_update_delete() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (status, created) = post_json(
        &client,
        srv.url("/menu/burgers"),
        json!({ "name": "Classic Burger", "base_price": 7500 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "burger");
    assert_eq!(created["base_price"], 7500);
    let id = id_of(&created);

    let (status, fetched) = get_json(&client, srv.url(&format!("/menu/burgers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Classic Burger");

    let (status, updated) = put_json(
        &client,
        srv.url(&format!("/menu/burgers/{id}")),
        json!({ "name": "Vegan Classic", "basePrice": 8000, "isVegan": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["vegan"], true);
    assert_eq!(updated["lactose_free"], true);
    assert_eq!(updated["chicken"], false);

    let (status, body) = delete(&client, srv.url(&format!("/menu/burgers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, body) = get_json(&client, srv.url(&format!("/menu/burgers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn burger_without_name_is_rejected() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        srv.url("/menu/burgers"),
        json!({ "name": "", "base_price": 7500 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("must have a name"));
}

#[tokio::test]
async fn malformed_path_id_is_bad_request() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, srv.url("/menu/burgers/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn vegan_and_chicken_filter_is_empty() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(
        &client,
        srv.url("/menu/burgers?vegan=true&chicken=true&lactoseFree=false"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());

    let (_, body) = get_json(&client, srv.url("/menu/burgers?vegan=true")).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Vegan Delight");

    let (_, body) = get_json(&client, srv.url("/menu/burgers")).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn seeded_catalog_is_listed() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (_, items) = get_json(&client, srv.url("/menu/items")).await;
    assert_eq!(items["items"].as_array().unwrap().len(), 6);

    let (_, sizes) = get_json(&client, srv.url("/menu/sizes")).await;
    assert_eq!(sizes["items"].as_array().unwrap().len(), 3);

    let (_, drinks) = get_json(&client, srv.url("/menu/drinks?carbonated=true&lactoseFree=true")).await;
    let drinks = drinks["items"].as_array().unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0]["name"], "Cola");

    let (_, sides) = get_json(&client, srv.url("/menu/sides?shareable=true")).await;
    assert_eq!(sides["items"].as_array().unwrap().len(), 1);

    let (_, orders) = get_json(&client, srv.url("/orders")).await;
    let orders = orders["items"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["order_end_price"], 10000);
}

#[tokio::test]
async fn removing_unassociated_size_leaves_drink_unchanged() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (_, drink) = post_json(
        &client,
        srv.url("/menu/drinks"),
        json!({ "name": "Cola", "base_price": 2000, "carbonated": true }),
    )
    .await;
    let drink_id = id_of(&drink);

    for label in ["Small", "Medium", "Large"] {
        let (status, size) = post_json(
            &client,
            srv.url("/menu/sizes"),
            json!({ "label": "Cold Beverage", "size_label": label, "extra_price": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = put_json(
            &client,
            srv.url(&format!("/menu/drinks/{drink_id}/sizes/{}", id_of(&size))),
            json!(null),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, stray) = post_json(
        &client,
        srv.url("/menu/sizes"),
        json!({ "label": "Fries Pack", "sizeLabel": "Large", "extraPrice": 1000 }),
    )
    .await;

    let res = client
        .delete(srv.url(&format!("/menu/drinks/{drink_id}/sizes/{}", id_of(&stray))))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["size_option_ids"].as_array().unwrap().len(), 3);

    let (_, sizes) = get_json(&client, srv.url(&format!("/menu/drinks/{drink_id}/sizes"))).await;
    assert_eq!(sizes["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn bulk_assignment_with_empty_list_is_rejected() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (_, sizes) = get_json(&client, srv.url("/menu/sizes")).await;
    let size_id = sizes["items"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = put_json(
        &client,
        srv.url(&format!("/menu/sizes/{size_id}/assign/drinks")),
        json!([]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_argument");
    assert_eq!(body["message"], "At least one drink must be provided");
}

#[tokio::test]
async fn bulk_assignment_attaches_size_to_sides() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (_, size) = post_json(
        &client,
        srv.url("/menu/sizes"),
        json!({ "label": "Fries Pack", "size_label": "Small", "extra_price": 0 }),
    )
    .await;
    let size_id = id_of(&size);
    let (_, sides) = get_json(&client, srv.url("/menu/sides")).await;
    let side_ids: Vec<String> = sides["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(id_of)
        .collect();

    let (status, body) = put_json(
        &client,
        srv.url(&format!("/menu/sizes/{size_id}/assign/sides")),
        json!(side_ids),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], size_id.as_str());

    for side_id in side_ids {
        let (_, side) = get_json(&client, srv.url(&format!("/menu/sides/{side_id}"))).await;
        assert!(side["size_option_ids"]
            .as_array()
            .unwrap()
            .iter()
            .any(|id| id == size_id.as_str()));
    }
}

#[tokio::test]
async fn order_lifecycle_and_cascade() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let (_, burgers) = get_json(&client, srv.url("/menu/burgers")).await;
    let burger_id = burgers["items"][0]["id"].as_str().unwrap().to_string();

    let (status, order) = post_json(
        &client,
        srv.url("/orders"),
        json!({
            "customer_name": "Jane Roe",
            "customer_email": "jane@example.com",
            "items": [
                { "menu_item_id": burger_id, "amount": 1, "item_end_price": 3000 },
                { "menu_item_id": burger_id, "amount": 2, "item_end_price": 7000 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["order_end_price"], 10000);
    let order_id = id_of(&order);

    let (_, items) = get_json(&client, srv.url(&format!("/orders/{order_id}/items"))).await;
    let items = items["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["id"].is_string()));
    assert!(items.iter().all(|i| i["order_id"] == order_id.as_str()));

    let (status, updated) = put_json(
        &client,
        srv.url(&format!("/orders/{order_id}")),
        json!({ "customerName": "Jane Doe", "customerEmail": "jane.doe@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["customer_name"], "Jane Doe");
    assert_eq!(updated["date"], order["date"]);
    assert_eq!(updated["order_items"], order["order_items"]);

    let (status, _) = delete(&client, srv.url(&format!("/orders/{order_id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_json(&client, srv.url(&format!("/orders/{order_id}/items"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, orders) = get_json(&client, srv.url("/orders")).await;
    assert_eq!(orders["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn order_without_items_is_invalid() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        srv.url("/orders"),
        json!({ "customer_name": "John Doe", "customer_email": "john@example.com", "items": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_order");
    assert_eq!(body["message"], "Cannot create order with no items.");
}

#[tokio::test]
async fn order_with_unknown_menu_item_is_not_found() {
    let srv = TestServer::empty().await;
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        srv.url("/orders"),
        json!({
            "customer_name": "John Doe",
            "customer_email": "john@example.com",
            "items": [{ "menu_item_id": burgerstream_core::MenuItemId::new().to_string(), "item_end_price": 100 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("does not exist"));
}
