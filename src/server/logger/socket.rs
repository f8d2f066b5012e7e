use std::io::Write;

use colored::Colorize;
use serde_json::Value;

/// A single WebSocket payload as received by a handler.
#[derive(Clone, Debug, PartialEq)]
pub enum SocketMessage {
    Text(String),
    Structured(Value),
}

impl From<&str> for SocketMessage {
    fn from(text: &str) -> Self {
        SocketMessage::Text(text.to_string())
    }
}

impl From<String> for SocketMessage {
    fn from(text: String) -> Self {
        SocketMessage::Text(text)
    }
}

impl From<Value> for SocketMessage {
    fn from(value: Value) -> Self {
        SocketMessage::Structured(value)
    }
}

/// `(WS) | <content>`, structured payloads pretty-printed with two-space indents.
pub fn format_socket_message(message: &SocketMessage) -> String {
    let content = match message {
        SocketMessage::Text(text) => text.clone(),
        SocketMessage::Structured(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    };

    format!("({}) | {}", "WS".green(), content)
}

/// Prints one payload line to stdout. This never goes through a logger's writer.
pub fn log_socket_message<M: Into<SocketMessage>>(message: M) {
    let line = format_socket_message(&message.into());
    let _ = writeln!(std::io::stdout().lock(), "{}", line);
}
