use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::FixedClock;
use crate::tests::fixtures::records::{at, next_day_at};

struct Harness {
    app: Router,
    clock: Arc<FixedClock>,
}

impl Harness {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::put(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn start_call(&self, description: &str, technician: &str) -> String {
        let (status, json) = self
            .post(
                "/calls",
                json!({
                    "type": "MAINTENANCE_CALL",
                    "description": description,
                    "location": "Line 3",
                    "technician": technician
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json["record_id"].as_str().unwrap().to_string()
    }
}

#[fixture]
fn harness() -> Harness {
    let clock = Arc::new(FixedClock::new(at("06:00")));
    let state = AppState::new(Arc::new(InMemoryRecordStore::new()), clock.clone(), 5);
    Harness {
        app: router(state),
        clock,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_track_a_day_shift_from_first_call_to_dashboard(harness: Harness) {
    let jam = harness.start_call("Conveyor jam", "jdv").await;
    harness.clock.set(at("07:00"));
    let sensor = harness.start_call("Sensor fault", "kl").await;

    harness.clock.set(at("07:10"));
    let (status, ended) = harness
        .post("/calls/end", json!({"resolution": "Cleared", "caused_downtime": true}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ended["id"], jam.as_str());

    harness.clock.set(at("08:00"));
    let (status, _) = harness
        .post("/calls/end", json!({"record_id": sensor, "end_time_of_day": "07:40"}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, dashboard) = harness.get("/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["active_calls"], 0);
    assert_eq!(dashboard["total_records"], 2);
    assert_eq!(dashboard["downtime_incidents"], 1);
    // (70 + 40) / 2
    assert_eq!(dashboard["mean_time_to_repair"], "55m");
    let recent: Vec<&str> = dashboard["recent_completed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(recent, vec![sensor.as_str(), jam.as_str()]);

    let (_, timeline) = harness.get("/timeline").await;
    assert_eq!(timeline["shift"], "day");
    assert_eq!(timeline["segments"][0]["record_id"], jam.as_str());
    assert_eq!(timeline["segments"][0]["time_label"], "06:00 AM - 07:10 AM");
    let left = timeline["segments"][1]["left_percent"].as_f64().unwrap();
    assert!((left - 2.0 / 12.0 * 100.0).abs() < 1e-9);
}

#[rstest]
#[tokio::test]
async fn it_should_correct_a_completed_record_without_reopening_it(harness: Harness) {
    let id = harness.start_call("Hydraulic leak", "ab").await;
    harness.clock.set(at("06:30"));
    harness.post("/calls/end", json!({})).await;

    let mut edit = json!({
        "type": "PROACTIVE",
        "start_time": at("05:45").to_rfc3339(),
        "end_time": at("06:30").to_rfc3339(),
        "description": "Hydraulic leak at press",
        "location": "Press 1",
        "technician": "AB",
        "actual_issue": "Worn seal",
        "parts_used": ["seal kit"]
    });
    let (status, edited) = harness.put(&format!("/records/{id}"), edit.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["type"], "PROACTIVE");
    assert_eq!(edited["created_at"], at("06:00").to_rfc3339());

    let (_, dashboard) = harness.get("/dashboard").await;
    assert_eq!(dashboard["mean_time_to_repair"], "45m");

    edit["end_time"] = Value::Null;
    let (status, json) = harness.put(&format!("/records/{id}"), edit).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("cannot be reopened"));
}

#[rstest]
#[tokio::test]
async fn it_should_keep_a_night_call_on_the_night_axis_past_midnight(harness: Harness) {
    harness.clock.set(at("23:00"));
    harness.start_call("Oven alarm", "np").await;
    harness.clock.set(next_day_at("02:00"));

    let (_, timeline) = harness.get("/timeline").await;
    assert_eq!(timeline["shift"], "night");
    let segment = &timeline["segments"][0];
    assert_eq!(segment["active"], true);
    assert_eq!(segment["time_label"], "11:00 PM - now");
    assert!((segment["left_percent"].as_f64().unwrap() - 50.0).abs() < 1e-9);
    assert!((segment["width_percent"].as_f64().unwrap() - 25.0).abs() < 1e-9);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_incomplete_call_without_storing_it(harness: Harness) {
    let (status, json) = harness
        .post(
            "/calls",
            json!({"type": "PROJECT", "description": "", "location": "", "technician": ""}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Description is required");

    let (_, active) = harness.get("/records/active").await;
    assert_eq!(active, json!([]));
}
