//! Over-the-wire tests: a real listener on an ephemeral port.

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use waitline_api_http::{HttpServer, HttpServerConfig};
use waitline_core::application::QueueService;
use waitline_core::port::id_provider::RandomIdProvider;
use waitline_core::port::time_provider::SystemTimeProvider;
use waitline_infra_memory::InMemoryQueueRepository;

struct TestServer {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

async fn start_server() -> TestServer {
    let service = Arc::new(QueueService::new(
        Arc::new(InMemoryQueueRepository::new()),
        Arc::new(RandomIdProvider),
        Arc::new(SystemTimeProvider),
    ));
    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let (addr, server): (SocketAddr, _) = HttpServer::new(config, service).bind().await.unwrap();
    let (shutdown, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(async move {
        let _ = rx.await;
    }));

    TestServer {
        base_url: format!("http://{}", addr),
        shutdown,
        handle,
    }
}

async fn post(client: &reqwest::Client, url: String, body: Value) -> (u16, Value) {
    let response = client.post(url).json(&body).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_clinic_over_http() {
    let server = start_server().await;
    let client = reqwest::Client::new();
    let base = &server.base_url;

    let (status, clinic) = post(
        &client,
        format!("{}/api/create_queue", base),
        json!({"name": "Clinic"}),
    )
    .await;
    assert_eq!(status, 200);
    let queue_id = clinic["id"].as_str().unwrap().to_string();

    let (_, alice) = post(
        &client,
        format!("{}/api/join_queue", base),
        json!({"queueId": queue_id, "name": "Alice"}),
    )
    .await;
    let (_, bob) = post(
        &client,
        format!("{}/api/join_queue", base),
        json!({"queueId": queue_id, "name": "Bob", "contactInfo": "bob@example.com"}),
    )
    .await;
    assert_eq!(alice["success"], true);
    assert_eq!(bob["person"]["contactInfo"], "bob@example.com");

    let next_url = format!("{}/api/call_next/{}", base, queue_id);
    let (status, next) = post(&client, next_url.clone(), json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(next["name"], "Alice");

    let (status, removed) = post(
        &client,
        format!("{}/api/remove_person", base),
        json!({"queueId": queue_id, "personId": alice["person"]["id"]}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(removed["success"], true);

    let (_, next) = post(&client, next_url, json!({})).await;
    assert_eq!(next["name"], "Bob");

    let end_url = format!("{}/api/end_queue/{}", base, queue_id);
    let (status, _) = post(&client, end_url, json!({})).await;
    assert_eq!(status, 200);

    let (status, carol) = post(
        &client,
        format!("{}/api/join_queue", base),
        json!({"queueId": queue_id, "name": "Carol"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(
        carol,
        json!({"success": false, "error": "Queue not found or inactive"})
    );

    let queue: Value = client
        .get(format!("{}/api/get_queue/{}", base, queue_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(queue["isActive"], false);
    assert_eq!(queue["people"].as_array().unwrap().len(), 1);

    server.shutdown.send(()).unwrap();
    server.handle.await.unwrap().unwrap();
}
