use std::mem;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use http::Request;
use hyper::Body;
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
#[allow(unused_imports)]
use log::{debug, error, info, warn};

use crate::server::{ApiResponse, HttpResult, Hooks, RequestContext, Service, ServiceBuilder, SHUTDOWN};

use super::HttpRoute;

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    info!("Installing server shutdown signal");

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
        return;
    }

    SHUTDOWN.store(true, std::sync::atomic::Ordering::Relaxed);

    warn!("Received server shutdown signal");
}

/// Runs one request through the lifecycle hooks and the service.
///
/// Every request gets its own `RequestContext`, so hook state never leaks across
/// requests. A service error is reported to the error hooks and then rendered as
/// a response.
pub async fn handle_request<App>(
    mut req: Request<Body>,
    remote_addr: SocketAddr,
    app: Arc<App>,
    hooks: Arc<Hooks>,
) -> HttpResult
    where
        App: 'static + Service,
{
    let req_body = mem::replace(req.body_mut(), Body::empty());
    let mut ctx = RequestContext::new(HttpRoute::new(&req, remote_addr));

    hooks.run_request(&mut ctx);

    let path = ctx.route.path;
    let parts: Vec<_> = path
        .split("/")
        .filter(|part| !part.is_empty())
        .collect();

    hooks.run_before_handle(&mut ctx);

    let response = app.api_handler(req_body, &ctx.route, &parts).await;

    match response {
        Ok(response) => {
            hooks.run_after_handle(&mut ctx, &ApiResponse::from_response(&response));
            Ok(response)
        }
        Err(err) => {
            debug!("Request to {} failed: {}", path, err);
            hooks.run_error(&mut ctx, &err);
            err.into()
        }
    }
}

pub async fn start_http_server<App, AppBuilder>(
    addr: &str,
    app_builder: AppBuilder,
    hooks: Hooks,
) -> anyhow::Result<()>
    where
        App: 'static + Service,
        AppBuilder: 'static + ServiceBuilder<App>,
{
    info!("Starting server at addr: {}", addr);

    let addr = addr
        .parse::<SocketAddr>()
        .with_context(|| format!("Parsing node addr '{}' as SocketAddr", addr))?;

    let app = app_builder
        .build()
        .await
        .with_context(|| "Error in building app")?;
    let app = Arc::new(app);
    let hooks = Arc::new(hooks);

    let make_svc = make_service_fn(move |transport: &AddrStream| {
        let remote_addr = transport.remote_addr();
        debug!("Accepted connection from {}", remote_addr);

        let app = app.clone();
        let hooks = hooks.clone();

        async move {
            Ok::<_, anyhow::Error>(service_fn(move |req| {
                // Clone again to ensure that client outlives this closure.
                handle_request(req, remote_addr, app.clone(), hooks.clone())
            }))
        }
    });

    let server = hyper::Server::try_bind(&addr)
        .with_context(|| "Error in binding to address")?
        .http1_keepalive(true)
        .http1_preserve_header_case(true)
        .http1_title_case_headers(true)
        .serve(make_svc);

    let graceful = server.with_graceful_shutdown(shutdown_signal());

    info!("Started server");

    graceful.await.with_context(|| "Error in starting server")
}
