use anyhow::Context;
use http::{header, Response};
use http::StatusCode;
use hyper::Body;
use serde::Serialize;

use crate::server::{ApiResponse, HttpResult};
use crate::server::commons::get_hostname_header;

pub struct HttpResponse;

impl HttpResponse {
    pub fn internal_server_error(error: anyhow::Error) -> HttpResult {
        let body = Body::from(format!("Error in serving request ==> {:?}", error));

        HttpResponse::build_response(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    pub fn not_found(reason: &str) -> HttpResult {
        let body = Body::from(format!("Not found: {}", reason));

        HttpResponse::build_response(StatusCode::NOT_FOUND, body)
    }

    pub fn forbidden(reason: &str) -> HttpResult {
        let body = Body::from(format!("Forbidden: {}", reason));

        HttpResponse::build_response(StatusCode::FORBIDDEN, body)
    }

    pub fn bad_request(error: anyhow::Error) -> HttpResult {
        let body = Body::from(format!("Bad Request: {:?}", error));

        HttpResponse::build_response(StatusCode::BAD_REQUEST, body)
    }

    pub fn no_content(reason: &str) -> HttpResult {
        let body = Body::from(format!("No Content: {}", reason));

        HttpResponse::build_response(StatusCode::NO_CONTENT, body)
    }

    fn build_response(code: StatusCode, body: Body) -> HttpResult {
        let response = Response::builder()
            .status(code)
            .header(header::HOST, get_hostname_header().clone())
            .body(body)
            .with_context(|| "Error in building HttpResponse")?;

        Ok(response)
    }

    pub fn ok(body: Body) -> HttpResult {
        HttpResponse::build_response(StatusCode::OK, body)
    }

    pub fn string(body: String) -> HttpResult {
        HttpResponse::build_response(StatusCode::OK, Body::from(body))
    }

    pub fn json<S>(body: &S) -> HttpResult
        where
            S: Serialize,
    {
        let body = serde_json::to_vec(body).with_context(|| "Error in serialising")?;
        let body = Body::from(body);

        let response = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::HOST, get_hostname_header().clone())
            .body(body)
            .with_context(|| "Error in building HttpResponse")?;

        Ok(response)
    }

    /// JSON envelope `{status, message, data}`. The status and message are also
    /// attached to the response so lifecycle hooks can see them.
    pub fn api<S>(code: StatusCode, message: &str, data: &S) -> HttpResult
        where
            S: Serialize,
    {
        let body = serde_json::to_vec(&serde_json::json!({
            "status": code.as_u16(),
            "message": message,
            "data": data,
        }))
        .with_context(|| "Error in serialising")?;

        let mut response = Response::builder()
            .status(code)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::HOST, get_hostname_header().clone())
            .body(Body::from(body))
            .with_context(|| "Error in building HttpResponse")?;

        response.extensions_mut().insert(ApiResponse::new(
            Some(code.as_u16()),
            Some(message.to_string()),
        ));

        Ok(response)
    }
}
