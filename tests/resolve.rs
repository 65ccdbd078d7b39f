//! Tests for the DNS diagnostic route.

mod common;

use mesh_demo::services::client;

#[tokio::test]
async fn test_resolve_known_name_reports_success() {
    let client_addr = common::spawn_service(client::router(common::state("CLIENT"))).await;

    let response = reqwest::get(format!("http://{client_addr}/resolve-ip/localhost"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Success");
    assert_eq!(body["hostname"], "localhost");

    let ip = body["resolved_ip"].as_str().unwrap();
    assert!(ip.parse::<std::net::IpAddr>().is_ok(), "not an address: {ip}");
}

#[tokio::test]
async fn test_resolve_failure_is_still_a_200() {
    let client_addr = common::spawn_service(client::router(common::state("CLIENT"))).await;

    let response = reqwest::get(format!(
        "http://{client_addr}/resolve-ip/no-such-host.invalid"
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Failed");
    assert_eq!(body["hostname"], "no-such-host.invalid");
    assert!(body.get("resolved_ip").is_none());
    assert!(body["error"].as_str().unwrap().contains("resolution failed"));
}
