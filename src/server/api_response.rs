use http::Response;
use hyper::Body;
use serde::{Deserialize, Serialize};

/// What a handler reported about its own response.
///
/// Both fields are optional: the request logger only prints the segments that
/// are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn new(status: Option<u16>, message: Option<String>) -> ApiResponse {
        ApiResponse { status, message }
    }

    /// Prefers the payload a handler attached via `HttpResponse::api`, falling
    /// back to the bare HTTP status.
    pub fn from_response(response: &Response<Body>) -> ApiResponse {
        match response.extensions().get::<ApiResponse>() {
            Some(api_response) => api_response.clone(),
            None => ApiResponse {
                status: Some(response.status().as_u16()),
                message: None,
            },
        }
    }
}
