mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::TestApp;

fn priced_activity(cost: u32) -> Value {
    json!({
        "id": "6f1c2a8e-4a55-4a53-9d0e-2b7e6c9b1f00",
        "type": "sea cruise",
        "name": "Sunset Cruise",
        "description": "Sail along the coast.",
        "location": "Lisbon Marina",
        "startTime": "16:00",
        "endTime": "19:00",
        "isRelaxation": false,
        "bookingUrl": "https://example.com/book/6f1c2a8e-4a55-4a53-9d0e-2b7e6c9b1f00",
        "cost": cost,
        "currency": "EUR",
        "alternatives": [{
            "id": "0b3f0a8e-1111-4a53-9d0e-2b7e6c9b1f00",
            "name": "Public Ferry Alternative",
            "description": "Save 40%.",
            "cost": 180,
            "savingsPercentage": 40
        }]
    })
}

#[actix_rt::test]
async fn test_cheaper_alternatives() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities/alternatives")
        .set_json(&priced_activity(300))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let alternatives = body.as_array().unwrap();
    assert!((1..=2).contains(&alternatives.len()));
    for alternative in alternatives {
        let cost = alternative["cost"].as_u64().unwrap();
        let savings = alternative["savingsPercentage"].as_u64().unwrap();
        assert!(cost > 0 && cost < 300);
        assert!((20..50).contains(&savings));
    }
}

#[actix_rt::test]
async fn test_cheap_activity_has_no_alternatives() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities/alternatives")
        .set_json(&priced_activity(20))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_replace_with_alternative() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities/replace")
        .set_json(&json!({
            "activity": priced_activity(300),
            "alternativeId": "0b3f0a8e-1111-4a53-9d0e-2b7e6c9b1f00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "6f1c2a8e-4a55-4a53-9d0e-2b7e6c9b1f00");
    assert_eq!(body["name"], "Public Ferry Alternative");
    assert_eq!(body["cost"], 180);
    assert_eq!(body["startTime"], "16:00");
    assert_eq!(body["location"], "Lisbon Marina");
    assert_eq!(
        body["bookingUrl"],
        "https://example.com/book/6f1c2a8e-4a55-4a53-9d0e-2b7e6c9b1f00"
    );
    assert_eq!(body["alternatives"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_replace_unknown_alternative() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/activities/replace")
        .set_json(&json!({
            "activity": priced_activity(300),
            "alternativeId": "00000000-0000-0000-0000-000000000000"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
