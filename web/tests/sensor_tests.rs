//! Live sensor feed tests
//!
//! - With a failing backend every poll appends one simulated reading and the
//!   window never holds more than the last 10
//! - A working backend replaces the window with its readings
//! - Opening the page fresh discards the previous window

mod common;

use common::*;
use serde_json::{json, Value};
use shared::SENSOR_WINDOW_SIZE;

fn readings_of(body: &Value) -> &Vec<Value> {
    body["data"].as_array().expect("data array")
}

#[tokio::test]
async fn test_simulated_window_is_capped() {
    let app = app(&dead_backend().await);
    let cookie = open_session(&app).await;

    for poll in 1..=15 {
        let body = body_json(send(&app, get_request("/api/sensors", Some(&cookie))).await).await;
        assert_eq!(body["simulated"], true);
        let readings = readings_of(&body);
        assert_eq!(readings.len(), poll.min(SENSOR_WINDOW_SIZE));

        for r in readings {
            let temperature = r["temperature"].as_f64().unwrap();
            let ph = r["ph"].as_f64().unwrap();
            assert!((25.0..30.0).contains(&temperature));
            assert!((6.0..7.0).contains(&ph));
        }
    }
}

#[tokio::test]
async fn test_backend_readings_replace_window() {
    let batch: Vec<Value> = (0..12)
        .map(|i| {
            json!({
                "timestamp": format!("10:00:{:02}", i),
                "temperature": 30.0,
                "humidity": 50.0,
                "moisture": 40.0,
                "ph": 6.8
            })
        })
        .collect();

    let mut backend = FakeBackend::predicting(json!({}));
    backend.sensors = Some(json!({ "data": batch }));
    let app = app(&backend.spawn().await);
    let cookie = open_session(&app).await;

    let body = body_json(send(&app, get_request("/api/sensors", Some(&cookie))).await).await;
    assert_eq!(body["simulated"], false);
    let readings = readings_of(&body);
    assert_eq!(readings.len(), SENSOR_WINDOW_SIZE);
    assert_eq!(readings[0]["timestamp"], "10:00:02");
    assert_eq!(readings[9]["timestamp"], "10:00:11");
}

#[tokio::test]
async fn test_sensor_page_refresh_and_reset() {
    let app = app(&dead_backend().await);
    let cookie = open_session(&app).await;

    let html = body_text(send(&app, get_request("/sensor", Some(&cookie))).await).await;
    assert!(html.contains("content=\"5;url=/sensor?poll=1\""));
    assert!(html.contains("data-readings=\"1\""));
    assert!(html.contains("simulated data"));

    for _ in 0..3 {
        send(&app, get_request("/sensor?poll=1", Some(&cookie))).await;
    }
    let html = body_text(send(&app, get_request("/sensor?poll=1", Some(&cookie))).await).await;
    assert!(html.contains("data-readings=\"5\""));

    // navigating to the page again starts over
    let html = body_text(send(&app, get_request("/sensor", Some(&cookie))).await).await;
    assert!(html.contains("data-readings=\"1\""));
}
