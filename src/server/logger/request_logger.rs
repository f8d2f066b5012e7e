use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use http::header;

use crate::server::{ApiError, ApiResponse, Hooks, HttpRoute, Plugin, RequestContext};

use super::duration::format_duration;
use super::method_color::colorize_method;
use super::writer::{LogWriter, StdoutWriter};

const FORWARDED_FOR: &str = "X-Forwarded-For";

/// Instant a request's duration is measured from. Lives in the request store.
#[derive(Clone, Copy, Debug)]
pub struct RequestTiming {
    pub start: Instant,
}

impl RequestTiming {
    pub fn now() -> RequestTiming {
        RequestTiming { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[derive(Clone)]
pub struct LoggerOptions {
    /// Prefix lines with the `X-Forwarded-For` address when the header is set.
    pub log_ip: bool,
    pub writer: Arc<dyn LogWriter>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        LoggerOptions {
            log_ip: false,
            writer: Arc::new(StdoutWriter),
        }
    }
}

impl LoggerOptions {
    pub fn new() -> LoggerOptions {
        LoggerOptions::default()
    }

    pub fn log_ip(mut self, log_ip: bool) -> LoggerOptions {
        self.log_ip = log_ip;
        self
    }

    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> LoggerOptions {
        self.writer = Arc::new(writer);
        self
    }

    /// Reads `request_logger.log_ip` and `request_logger.writer` (`stdout` or `log`)
    /// from the global settings. Missing keys keep their defaults.
    #[cfg(feature = "settings")]
    pub fn from_settings() -> anyhow::Result<LoggerOptions> {
        use super::writer::AccessLogWriter;
        use crate::server::settings::settings;

        let settings = settings().read();

        let log_ip = settings
            .get::<bool>("request_logger.log_ip")
            .unwrap_or(false);

        let writer: Arc<dyn LogWriter> = match settings.get::<String>("request_logger.writer") {
            Ok(name) => match name.as_str() {
                "stdout" => Arc::new(StdoutWriter),
                "log" => Arc::new(AccessLogWriter),
                other => anyhow::bail!("Unknown request_logger.writer '{}'", other),
            },
            Err(_) => Arc::new(StdoutWriter),
        };

        Ok(LoggerOptions { log_ip, writer })
    }
}

/// Writes one colorized line per request through the configured writer.
pub struct RequestLogger {
    options: LoggerOptions,
}

pub fn create_logger(options: LoggerOptions) -> RequestLogger {
    RequestLogger { options }
}

impl RequestLogger {
    fn record_start(ctx: &mut RequestContext<'_>) {
        ctx.store.insert(RequestTiming::now());
    }

    // Missing timing means a hook was skipped; report zero rather than fail the request.
    fn elapsed(ctx: &RequestContext<'_>) -> Duration {
        ctx.store
            .get::<RequestTiming>()
            .map(RequestTiming::elapsed)
            .unwrap_or(Duration::ZERO)
    }

    fn log_response(&self, ctx: &RequestContext<'_>, response: &ApiResponse) {
        let line = if is_websocket_upgrade(&ctx.route) {
            format_upgrade_line(ctx.route.path)
        } else {
            self.format_response_line(&ctx.route, response, RequestLogger::elapsed(ctx))
        };

        self.options.writer.write(&line);
    }

    fn log_error(&self, ctx: &RequestContext<'_>, error: &ApiError) {
        let line = format_error_line(&ctx.route, error, RequestLogger::elapsed(ctx));

        self.options.writer.write(&line);
    }

    /// `[ip] (status) METHOD path (duration) | message`. Status and message are
    /// always joined, so an absent one leaves a double space behind.
    pub fn format_response_line(
        &self,
        route: &HttpRoute<'_>,
        response: &ApiResponse,
        elapsed: Duration,
    ) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(6);

        if self.options.log_ip {
            if let Some(ip) = route.header_lossy(FORWARDED_FOR).filter(|ip| !ip.is_empty()) {
                segments.push(format!("[{}]", ip.cyan()));
            }
        }

        segments.push(match response.status {
            Some(status) => format!("({})", status.to_string().green()),
            None => String::new(),
        });

        segments.push(colorize_method(route.method.as_str()));
        segments.push(route.path.to_string());
        segments.push(format_duration(elapsed));

        segments.push(match response.message.as_deref() {
            Some(message) if !message.is_empty() => format!("| {}", message),
            _ => String::new(),
        });

        segments.join(" ")
    }
}

impl Plugin for RequestLogger {
    fn register(self, hooks: Hooks) -> Hooks {
        let logger = Arc::new(self);
        let error_logger = logger.clone();

        hooks
            .on_request(RequestLogger::record_start)
            .on_before_handle(RequestLogger::record_start)
            .on_after_handle(move |ctx, response| logger.log_response(ctx, response))
            .on_error(move |ctx, error| error_logger.log_error(ctx, error))
    }
}

fn is_websocket_upgrade(route: &HttpRoute<'_>) -> bool {
    route.header(header::UPGRADE.as_str()) == Some("websocket")
}

fn format_upgrade_line(path: &str) -> String {
    format!("({}) {} | Websocket connection opened", "WS".green(), path)
}

/// `METHOD path Error status | Status: status message (duration)`; both status
/// segments are dropped when the error has none.
fn format_error_line(route: &HttpRoute<'_>, error: &ApiError, elapsed: Duration) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(7);

    segments.push(colorize_method(route.method.as_str()).red().to_string());
    segments.push(route.path.to_string());
    segments.push("Error".red().to_string());

    let status = error.status();
    if let Some(status) = status {
        segments.push(status.to_string());
    }

    segments.push(match status {
        Some(status) => format!("| Status: {}", status.to_string().red()),
        None => String::new(),
    });

    segments.push(error.message());
    segments.push(format_duration(elapsed));

    segments.join(" ")
}
