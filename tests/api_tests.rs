//! End-to-end tests for the homepage and the course catalog REST API.

#![allow(clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

mod common;

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use common::spawn_app;

struct Api {
    addr: SocketAddr,
    http: Client,
}

impl Api {
    async fn start() -> Self {
        Self {
            addr: spawn_app().await,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.http.get(self.url(path)).send().await.expect("GET");
        let status = resp.status();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .http
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("POST");
        let status = resp.status();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .http
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("PATCH");
        let status = resp.status();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    async fn delete(&self, path: &str) -> StatusCode {
        self.http
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE")
            .status()
    }

    async fn create_course(&self, title: &str) -> String {
        let (status, body) = self
            .post(
                "/api/v1/courses",
                json!({"title": title, "description": "d", "instructor": "staff"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().expect("course id").to_string()
    }

    async fn enroll(&self, course_id: &str, student: &str) -> (StatusCode, Value) {
        self.post(
            &format!("/api/v1/courses/{course_id}/enroll"),
            json!({"student": student}),
        )
        .await
    }
}

#[tokio::test]
async fn homepage_is_served_as_html() {
    let api = Api::start().await;
    let resp = api.http.get(api.url("/home")).send().await.expect("GET");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("<header>"));
    assert!(body.contains("<h1>Welcome to Next-curl</h1>"));
    assert!(body.contains("<p>This is the homepage of the Next-curl educational platform.</p>"));
}

#[tokio::test]
async fn health_reports_version_and_connections() {
    let api = Api::start().await;
    let (status, body) = api.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["active_connections"], 0);
}

#[tokio::test]
async fn course_lifecycle() {
    let api = Api::start().await;
    let id = api.create_course("Rust 101").await;

    let (status, body) = api.get(&format!("/api/v1/courses/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Rust 101");
    assert_eq!(body["lessons"], json!([]));

    let (status, body) = api
        .patch(
            &format!("/api/v1/courses/{id}"),
            json!({"title": "Rust 102"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Rust 102");
    assert_eq!(body["instructor"], "staff");

    assert_eq!(
        api.delete(&format!("/api/v1/courses/{id}")).await,
        StatusCode::NO_CONTENT
    );
    let (status, body) = api.get(&format!("/api/v1/courses/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn invalid_course_is_rejected_with_error_body() {
    let api = Api::start().await;
    let (status, body) = api
        .post(
            "/api/v1/courses",
            json!({"title": "   ", "instructor": "staff"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
    assert!(
        body["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("title"))
    );
}

#[tokio::test]
async fn list_courses_paginates() {
    let api = Api::start().await;
    for i in 0..5 {
        api.create_course(&format!("course {i}")).await;
    }
    let (status, body) = api.get("/api/v1/courses?page=2&per_page=2").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|c| c["title"].as_str())
        .collect();
    assert_eq!(titles, ["course 2", "course 3"]);
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["total_pages"], 3);
}

#[tokio::test]
async fn lessons_are_listed_in_order() {
    let api = Api::start().await;
    let course = api.create_course("Algebra").await;
    for (title, order) in [("groups", 3), ("sets", 1), ("functions", 2)] {
        let (status, _) = api
            .post(
                "/api/v1/lessons",
                json!({"course_id": course, "title": title, "content": "...", "order": order}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, detail) = api.get(&format!("/api/v1/courses/{course}")).await;
    let titles: Vec<&str> = detail["lessons"]
        .as_array()
        .expect("lessons array")
        .iter()
        .filter_map(|l| l["title"].as_str())
        .collect();
    assert_eq!(titles, ["sets", "functions", "groups"]);

    let (status, listed) = api
        .get(&format!("/api/v1/lessons?course_id={course}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn lesson_for_unknown_course_is_not_found() {
    let api = Api::start().await;
    let (status, body) = api
        .post(
            "/api/v1/lessons",
            json!({"course_id": uuid::Uuid::new_v4(), "title": "orphan"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn lesson_update_and_delete() {
    let api = Api::start().await;
    let course = api.create_course("Chemistry").await;
    let (_, lesson) = api
        .post(
            "/api/v1/lessons",
            json!({"course_id": course, "title": "atoms"}),
        )
        .await;
    let lesson_id = lesson["id"].as_str().expect("lesson id").to_string();
    assert_eq!(lesson["order"], 0);

    let (status, updated) = api
        .patch(
            &format!("/api/v1/lessons/{lesson_id}"),
            json!({"order": 4, "content": "protons"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"], 4);
    assert_eq!(updated["title"], "atoms");

    assert_eq!(
        api.delete(&format!("/api/v1/lessons/{lesson_id}")).await,
        StatusCode::NO_CONTENT
    );
    let (status, body) = api.get(&format!("/api/v1/lessons/{lesson_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2002);
}

#[tokio::test]
async fn enrolling_twice_is_rejected() {
    let api = Api::start().await;
    let course = api.create_course("Biology").await;

    let (status, body) = api.enroll(&course, "grace").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["student"], "grace");
    assert_eq!(body["course_id"], course.as_str());

    let (status, body) = api.enroll(&course, "grace").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1002);
    assert_eq!(
        body["error"]["message"],
        "You are already enrolled in this course."
    );

    let (_, listed) = api.get("/api/v1/enrollments?student=grace").await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn deleting_a_course_drops_its_enrollments() {
    let api = Api::start().await;
    let course = api.create_course("History").await;
    let (status, _) = api.enroll(&course, "linus").await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(
        api.delete(&format!("/api/v1/courses/{course}")).await,
        StatusCode::NO_CONTENT
    );
    let (_, listed) = api.get("/api/v1/enrollments").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn recommendations_favour_popular_unenrolled_courses() {
    let api = Api::start().await;
    let popular = api.create_course("Popular").await;
    let runner_up = api.create_course("Runner-up").await;
    let _niche = api.create_course("Niche").await;
    let mine = api.create_course("Mine").await;

    for s in ["a", "b", "c", "d"] {
        api.enroll(&popular, s).await;
    }
    for s in ["a", "b", "c"] {
        api.enroll(&runner_up, s).await;
    }
    api.enroll(&mine, "me").await;

    let (status, body) = api.get("/api/v1/students/me/recommendations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"], "me");
    let recs = body["recommendations"].as_array().expect("recommendations");
    let titles: Vec<&str> = recs
        .iter()
        .filter_map(|r| r["course"]["title"].as_str())
        .collect();
    assert_eq!(titles, ["Popular", "Runner-up"]);
    assert_eq!(recs[0]["enrollment_count"], 4);
}

#[tokio::test]
async fn new_student_without_courses_gets_empty_recommendations() {
    let api = Api::start().await;
    let (status, body) = api.get("/api/v1/students/nobody/recommendations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendations"], json!([]));
}
