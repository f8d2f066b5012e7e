use async_trait::async_trait;
use http::{Response, StatusCode};
use hyper::Body;
use serde::{Deserialize, Serialize};

use hyper_fast_logger::server::{ApiError, Hooks, HttpRequest, HttpResponse, HttpRoute, Service};
use hyper_fast_logger::server::{ServiceBuilder, start_http_server};
use hyper_fast_logger::server::logger::{create_logger, log_socket_message, LoggerOptions};
#[cfg(feature = "settings")]
use hyper_fast_logger::server::utils::load_config;
#[cfg(feature = "access_log")]
use hyper_fast_logger::server::utils::setup_logging;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), anyhow::Error> {
    #[cfg(feature = "settings")]
    load_config("demos/config", "dev")?;

    #[cfg(feature = "access_log")]
    setup_logging("demos/config/log4rs.yml")?;

    #[cfg(feature = "settings")]
    let options = LoggerOptions::from_settings()?;
    #[cfg(not(feature = "settings"))]
    let options = LoggerOptions::new().log_ip(true);

    let hooks = Hooks::new().use_plugin(create_logger(options));

    start_http_server("127.0.0.1:6464", ExampleServiceBuilder {}, hooks).await
}

pub struct ExampleService {}

pub struct ExampleServiceBuilder {}

#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    message: String,
    number: i64,
}

#[async_trait]
impl ServiceBuilder<ExampleService> for ExampleServiceBuilder {
    async fn build(self) -> anyhow::Result<ExampleService> {
        Ok(ExampleService {})
    }
}

#[async_trait]
impl Service for ExampleService {
    async fn api_handler<'a>(
        &'a self,
        body: Body,
        route: &HttpRoute<'a>,
        path: &[&str],
    ) -> Result<Response<Body>, ApiError> {
        match path {
            ["test"] if matches!(route.method, &http::Method::GET) => {
                HttpResponse::string("GET::/test - test passed".to_string())
            }
            ["chat"] if matches!(route.method, &http::Method::POST) => self.post_chat(body).await,
            ["admin"] => Err(ApiError::Forbidden("admins only".to_string())),
            _ => Err(ApiError::NotFound(format!("no route for {}", route.path))),
        }
    }
}

impl ExampleService {
    // Stands in for a socket frame handler: echoes the payload back.
    pub async fn post_chat(&self, body: Body) -> Result<Response<Body>, ApiError> {
        let chat: ChatMessage = HttpRequest::value(body).await?;
        log_socket_message(serde_json::to_value(&chat).map_err(anyhow::Error::from)?);

        HttpResponse::api(StatusCode::OK, "message received", &chat)
    }
}
