use std::borrow::Cow;
use std::net::SocketAddr;

use http::{Method, Request, Uri};
use hyper::Body;

pub struct HttpRoute<'a> {
    pub req: &'a Request<Body>,
    pub method: &'a Method,
    pub uri: &'a Uri,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub remote_addr: SocketAddr,
}

impl<'a> HttpRoute<'a> {
    pub fn new(req: &'a Request<Body>, remote_addr: SocketAddr) -> HttpRoute<'a> {
        HttpRoute {
            req,
            method: req.method(),
            uri: req.uri(),
            path: req.uri().path(),
            query: req.uri().query(),
            remote_addr,
        }
    }

    /// Header value as text; missing or non-visible-ASCII values read as `None`.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.req
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// Header value with any obs-text bytes replaced by U+FFFD.
    pub fn header_lossy(&self, name: &str) -> Option<Cow<'a, str>> {
        self.req
            .headers()
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}
