//! EchoSummarize Core Library
//!
//! Submits YouTube URLs to a summarization service and reveals the returned
//! summary one character at a time.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod render;
pub mod reveal;
pub mod types;
pub mod typewriter;

// Re-export commonly used items at crate root
pub use client::SummaryClient;
pub use config::{ClientConfig, ConfigError, RevealConfig};
pub use error::{Result, SummarizeError};
pub use page::{
    PageOptions, RequestId, StaleResponsePolicy, SubmitButton, SubmitLabel, SubmitTicket,
    SummaryPage,
};
pub use render::{RenderedText, split_lines};
pub use types::{FALLBACK_MESSAGE, SummarizeRequest, SummarizeResponse, SummaryResult};
pub use typewriter::{RevealPhase, Typewriter};
