use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use colored::Colorize;
use http::{Method, Request, Response, StatusCode};
use hyper::Body;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use hyper_fast_logger::server::logger::{create_logger, LogWriter, LoggerOptions, MethodStyle, RequestTiming};
use hyper_fast_logger::server::{handle_request, ApiError, Hooks, HttpRequest, HttpResponse, HttpRoute, Service};

#[derive(Clone, Default)]
struct CapturedLines(Arc<Mutex<Vec<String>>>);

impl CapturedLines {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl LogWriter for CapturedLines {
    fn write(&self, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}

#[derive(Serialize, Deserialize)]
struct Greeting {
    name: String,
}

struct TestService;

#[async_trait]
impl Service for TestService {
    async fn api_handler<'a>(
        &'a self,
        body: Body,
        route: &HttpRoute<'a>,
        path: &[&str],
    ) -> Result<Response<Body>, ApiError> {
        match path {
            ["test-path"] => HttpResponse::json(&json!({ "message": "ok" })),
            ["greet"] if matches!(route.method, &Method::POST) => {
                let greeting: Greeting = HttpRequest::value(body).await?;
                let message = format!("hello {}", greeting.name);
                HttpResponse::api(StatusCode::OK, &message, &greeting)
            }
            ["quiet"] => HttpResponse::api(StatusCode::OK, "", &json!(null)),
            ["socket"] => HttpResponse::ok(Body::empty()),
            ["missing"] => Err(ApiError::NotFound("not found".to_string())),
            ["boom"] => Err(ApiError::InternalServerError(anyhow::anyhow!("database unavailable"))),
            _ => HttpResponse::not_found(route.path),
        }
    }
}

fn remote_addr() -> SocketAddr {
    "10.0.0.7:51000".parse().unwrap()
}

fn strip_ansi(line: &str) -> String {
    Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(line, "").to_string()
}

async fn send(hooks: Hooks, req: Request<Body>) -> Response<Body> {
    colored::control::set_override(true);

    handle_request(req, remote_addr(), Arc::new(TestService), Arc::new(hooks))
        .await
        .expect("handle_request returned an error")
}

async fn send_logged(options: LoggerOptions, req: Request<Body>) -> (Response<Body>, Vec<String>) {
    let captured = CapturedLines::default();
    let hooks = Hooks::new().use_plugin(create_logger(options.writer(captured.clone())));

    let response = send(hooks, req).await;
    (response, captured.lines())
}

#[tokio::test]
async fn logs_status_method_path_and_duration() {
    let req = Request::get("http://localhost/test-path").body(Body::empty()).unwrap();
    let (response, lines) = send_logged(LoggerOptions::new(), req).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(lines.len(), 1);

    let line = strip_ansi(&lines[0]);
    assert!(line.contains("(200)"), "{}", line);
    assert!(line.contains("GET /test-path"), "{}", line);
    assert!(Regex::new(r"\(\d+(\.\d+)?(µs|ms|s)\)").unwrap().is_match(&line), "{}", line);
    assert!(!line.contains('|'), "{}", line);
}

#[tokio::test]
async fn each_method_uses_only_its_own_color() {
    let methods = ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"];
    let styles = [
        MethodStyle::Blue,
        MethodStyle::Green,
        MethodStyle::Yellow,
        MethodStyle::Red,
        MethodStyle::Magenta,
        MethodStyle::Cyan,
        MethodStyle::Gray,
    ];

    for method in methods {
        let req = Request::builder()
            .method(method)
            .uri("/test-path")
            .body(Body::empty())
            .unwrap();
        let (_, lines) = send_logged(LoggerOptions::new(), req).await;
        assert_eq!(lines.len(), 1);

        let expected = MethodStyle::for_method(method).unwrap();
        for style in styles {
            let painted = style.paint(method).to_string();
            assert_eq!(lines[0].contains(&painted), style == expected, "{} / {:?}", method, style);
        }
    }
}

#[tokio::test]
async fn forwarded_ip_is_logged_only_when_enabled() {
    let forwarded = || {
        Request::get("/test-path")
            .header("X-Forwarded-For", "127.0.0.1")
            .body(Body::empty())
            .unwrap()
    };

    let (_, lines) = send_logged(LoggerOptions::new().log_ip(true), forwarded()).await;
    assert!(strip_ansi(&lines[0]).starts_with("[127.0.0.1] (200) "));

    let (_, lines) = send_logged(LoggerOptions::new(), forwarded()).await;
    assert!(!strip_ansi(&lines[0]).contains("[127.0.0.1]"));

    let bare = Request::get("/test-path").body(Body::empty()).unwrap();
    let (_, lines) = send_logged(LoggerOptions::new().log_ip(true), bare).await;
    assert!(!strip_ansi(&lines[0]).contains('['));
}

#[tokio::test]
async fn websocket_upgrade_logs_single_opened_line() {
    let req = Request::get("/socket")
        .header("Upgrade", "websocket")
        .body(Body::empty())
        .unwrap();
    let (_, lines) = send_logged(LoggerOptions::new(), req).await;

    assert_eq!(
        lines,
        vec![format!("({}) /socket | Websocket connection opened", "WS".green())]
    );
}

#[tokio::test]
async fn handler_message_is_appended() {
    let req = Request::post("/greet")
        .body(Body::from(r#"{"name":"ada"}"#))
        .unwrap();
    let (response, lines) = send_logged(LoggerOptions::new(), req).await;

    assert_eq!(response.status(), StatusCode::OK);
    let line = strip_ansi(&lines[0]);
    assert!(line.starts_with("(200) POST /greet ("), "{}", line);
    assert!(line.ends_with(") | hello ada"), "{}", line);
}

#[tokio::test]
async fn empty_handler_message_is_dropped() {
    let req = Request::get("/quiet").body(Body::empty()).unwrap();
    let (_, lines) = send_logged(LoggerOptions::new(), req).await;

    let line = strip_ansi(&lines[0]);
    assert!(line.starts_with("(200) GET /quiet ("), "{}", line);
    assert!(line.ends_with(") "), "{}", line);
    assert!(!line.contains('|'), "{}", line);
}

#[tokio::test]
async fn not_found_error_logs_status_segments() {
    let req = Request::get("/missing").body(Body::empty()).unwrap();
    let (response, lines) = send_logged(LoggerOptions::new().log_ip(true), req).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(lines.len(), 1);

    let line = strip_ansi(&lines[0]);
    assert!(line.starts_with("GET /missing Error 404 | Status: 404 not found ("), "{}", line);
}

#[tokio::test]
async fn error_without_status_omits_status_segments() {
    let req = Request::delete("/boom").body(Body::empty()).unwrap();
    let (response, lines) = send_logged(LoggerOptions::new(), req).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let line = strip_ansi(&lines[0]);
    assert!(line.starts_with("DELETE /boom Error  database unavailable ("), "{}", line);
    assert!(!line.contains("Status:"), "{}", line);
}

#[tokio::test]
async fn bad_request_body_reaches_error_hook() {
    let req = Request::post("/greet").body(Body::from("not json")).unwrap();
    let (response, lines) = send_logged(LoggerOptions::new(), req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(strip_ansi(&lines[0]).contains("Error 400 | Status: 400"));
}

#[tokio::test]
async fn timing_is_visible_to_later_hooks() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_after = seen.clone();

    let hooks = Hooks::new()
        .use_plugin(create_logger(LoggerOptions::new().writer(|_: &str| {})))
        .on_after_handle(move |ctx, response| {
            seen_after
                .lock()
                .unwrap()
                .push((ctx.store.get::<RequestTiming>().is_some(), response.status));
        });

    let req = Request::get("/test-path").body(Body::empty()).unwrap();
    send(hooks, req).await;

    assert_eq!(*seen.lock().unwrap(), vec![(true, Some(200))]);
}

#[tokio::test]
async fn requests_do_not_share_stores() {
    let hooks = Hooks::new().on_request(|ctx| {
        assert!(ctx.store.get::<RequestTiming>().is_none());
        ctx.store.insert(RequestTiming::now());
    });
    let hooks = Arc::new(hooks);
    colored::control::set_override(true);

    for _ in 0..2 {
        let req = Request::get("/test-path").body(Body::empty()).unwrap();
        handle_request(req, remote_addr(), Arc::new(TestService), hooks.clone())
            .await
            .unwrap();
    }
}
