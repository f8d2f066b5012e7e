//! Colorized one-line request logging.
//!
//! [`create_logger`] builds a [`RequestLogger`] that plugs into [`Hooks`]:
//!
//! ```no_run
//! use hyper_fast_logger::server::Hooks;
//! use hyper_fast_logger::server::logger::{create_logger, LoggerOptions};
//!
//! let hooks = Hooks::new().use_plugin(create_logger(LoggerOptions::new().log_ip(true)));
//! ```
//!
//! [`log_socket_message`] is independent of any logger and always prints to stdout.
//!
//! [`Hooks`]: crate::server::Hooks

pub use duration::{format_duration, DurationUnit};
pub use method_color::{colorize_method, MethodStyle};
pub use request_logger::{create_logger, LoggerOptions, RequestLogger, RequestTiming};
pub use socket::{format_socket_message, log_socket_message, SocketMessage};
pub use writer::{AccessLogWriter, LogWriter, StdoutWriter};

mod duration;
mod method_color;
mod request_logger;
mod socket;
mod writer;
