use std::sync::atomic::AtomicBool;

use async_trait::async_trait;
use http::Response;
use hyper::Body;

use crate::server::{ApiError, HttpRoute};

lazy_static! {
    pub static ref SHUTDOWN: AtomicBool = AtomicBool::new(false);
}

#[async_trait]
pub trait ServiceBuilder<T: Service>: Send + Sync {
    async fn build(self) -> anyhow::Result<T>;
}

#[async_trait]
pub trait Service: Send + Sync {
    async fn api_handler<'a>(
        &'a self,
        body: Body,
        route: &HttpRoute<'a>,
        path: &[&str],
    ) -> Result<Response<Body>, ApiError>;
}
