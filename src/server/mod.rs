use hyper::Body;
use hyper::Response;

pub use api_response::ApiResponse;
pub use error::ApiError;
pub use hooks::{Hooks, Plugin, RequestContext};
pub use http_request::HttpRequest;
pub use http_response::HttpResponse;
pub use http_route::HttpRoute;
pub use http_server::{handle_request, start_http_server};
pub use service::{Service, ServiceBuilder, SHUTDOWN};

pub type ApiResult<R> = Result<R, ApiError>;
pub type HttpResult = Result<Response<Body>, ApiError>;

pub mod logger;

mod api_response;
mod commons;
mod error;
mod hooks;
mod http_request;
mod http_response;
mod http_route;
mod http_server;
mod service;

#[cfg(feature = "settings")]
pub mod settings;

pub mod utils;
