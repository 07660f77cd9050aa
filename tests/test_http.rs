mod common;
pub use common::*;

use reqwest::{header::ORIGIN, Client, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn get_stations() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .get(format!("{base_url}/api/tickets/stations"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stations = response.json::<Vec<String>>().await.unwrap();

    assert_eq!(stations, vec!["Amsterdam", "Brussels", "London", "Paris"]);
}

#[tokio::test]
async fn ticket_lifecycle() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    // purchase ticket
    // the first ticket lands in section A seat 1
    let response = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Paris", "ada@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = response.json::<Value>().await.unwrap();
    let ticket_id = ticket["id"].as_str().unwrap().to_string();
    assert_eq!(ticket["section"], "A");
    assert_eq!(ticket["seatNumber"], 1);
    assert_eq!(ticket["price"], 20.0);

    // fetch ticket by id
    let response = client
        .get(format!("{base_url}/api/tickets/{ticket_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let found = response.json::<Value>().await.unwrap();
    assert_eq!(found, ticket);

    // move ticket to B5
    let response = client
        .put(format!(
            "{base_url}/api/tickets/{ticket_id}/seat?section=B&seatNumber=5"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["ticket"]["section"], "B");
    assert_eq!(body["ticket"]["seatNumber"], 5);
    assert_eq!(body["ticket"]["price"], 20.0);

    // section A is empty, section B contains the ticket
    let response = client
        .get(format!("{base_url}/api/tickets/section/A"))
        .send()
        .await
        .unwrap();
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["count"], 0);

    let response = client
        .get(format!("{base_url}/api/tickets/section/B"))
        .send()
        .await
        .unwrap();
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["tickets"][0]["id"], ticket_id.as_str());

    // remove ticket
    let response = client
        .delete(format!("{base_url}/api/tickets/{ticket_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ticket no longer exists
    let response = client
        .get(format!("{base_url}/api/tickets/{ticket_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn purchase_duplicate_route_conflict() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let first = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Paris", "ada@example.com"))
        .send()
        .await
        .unwrap();
    let duplicate = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Paris", "ada@example.com"))
        .send()
        .await
        .unwrap();
    let other_route = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Amsterdam", "ada@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    let body = duplicate.json::<Value>().await.unwrap();
    assert_eq!(body["type"], "DUPLICATE_TICKET");
    assert_eq!(other_route.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn purchase_unknown_route() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Berlin", "ada@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["type"], "INVALID_INPUT");
}

#[tokio::test]
async fn purchase_when_train_full() {
    let base_url = spawn_application(2).await;
    let client = Client::new();

    let mut placements = Vec::new();
    for i in 0..4 {
        let response = client
            .post(format!("{base_url}/api/tickets"))
            .json(&purchase_body("Paris", "Brussels", &format!("{i}@example.com")))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let ticket = response.json::<Value>().await.unwrap();
        placements.push((
            ticket["section"].as_str().unwrap().to_string(),
            ticket["seatNumber"].as_u64().unwrap(),
        ));
    }

    let response = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("Paris", "Brussels", "late@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(
        placements,
        vec![
            ("A".to_string(), 1),
            ("B".to_string(), 1),
            ("A".to_string(), 2),
            ("B".to_string(), 2),
        ]
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["type"], "OPERATION_FAILED");
}

#[tokio::test]
async fn remove_unknown_ticket_twice() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    for _ in 0..2 {
        let response = client
            .delete(format!("{base_url}/api/tickets/unknown-ticket"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn modify_seat_invalid_input() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .post(format!("{base_url}/api/tickets"))
        .json(&purchase_body("London", "Paris", "ada@example.com"))
        .send()
        .await
        .unwrap();
    let ticket = response.json::<Value>().await.unwrap();
    let ticket_id = ticket["id"].as_str().unwrap();

    for query in ["section=C&seatNumber=1", "section=A&seatNumber=0", "section=A&seatNumber=51"] {
        let response = client
            .put(format!("{base_url}/api/tickets/{ticket_id}/seat?{query}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
    }
}

#[tokio::test]
async fn modify_seat_occupied_conflict() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let mut ids = Vec::new();
    for email in ["1@example.com", "2@example.com"] {
        let response = client
            .post(format!("{base_url}/api/tickets"))
            .json(&purchase_body("London", "Paris", email))
            .send()
            .await
            .unwrap();
        let ticket = response.json::<Value>().await.unwrap();
        ids.push(ticket["id"].as_str().unwrap().to_string());
    }

    // first ticket sits at A1
    let response = client
        .put(format!(
            "{base_url}/api/tickets/{}/seat?section=A&seatNumber=1",
            ids[1]
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let response = client
        .get(format!("{base_url}/api/tickets/{}", ids[1]))
        .send()
        .await
        .unwrap();
    let ticket = response.json::<Value>().await.unwrap();
    assert_eq!(ticket["section"], "B");
    assert_eq!(ticket["seatNumber"], 1);
}

#[tokio::test]
async fn get_section_invalid() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .get(format!("{base_url}/api/tickets/section/a"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .get(format!("{base_url}/api/tickets/stations"))
        .header(ORIGIN, "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn get_non_existent_uri() {
    let base_url = spawn_application(50).await;
    let client = Client::new();

    let response = client
        .get(format!("{base_url}/this-uri-does-not-exist"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
