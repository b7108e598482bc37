pub mod client;
pub mod error;
pub mod transport;

pub use client::{ChatRequest, CompletionClient, Message, Role};
pub use error::{CompletionError, CompletionErrorKind, Result};
pub use transport::{HttpReply, HttpTransport, Transport};
