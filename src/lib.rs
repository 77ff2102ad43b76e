//! copydesk - a client-side console for AI-assisted social-media copy.
//!
//! The console drives three independent request/response workflows
//! against a local generation backend:
//! 1. Write: generate platform-specific copy from a topic, tone preset
//!    and optional agent/search modes.
//! 2. Vision: upload an image and get descriptive analysis back.
//! 3. Brainstorm: turn a rough idea into suggested angles.
//!
//! Vision and brainstorm output can be promoted into the write
//! workflow's topic field, which also switches focus back to the write
//! view. A fourth screen uploads brand-knowledge documents for
//! ingestion.
//!
//! # Architecture
//!
//! - [`console::Console`] owns one [`workflow::WorkflowSlice`] per
//!   workflow plus the active-view selector.
//! - [`clients::BackendClient`] is the HTTP gateway (reqwest); the
//!   [`clients::CopyGateway`] trait is the seam tests fake out.
//! - All state is session-scoped; nothing persists across runs.
//!
//! # Example
//!
//! ```no_run
//! use copydesk::clients::BackendClient;
//! use copydesk::console::Console;
//! use copydesk::core::config::AppConfig;
//! use copydesk::core::models::{Platform, Style};
//!
//! #[tokio::main]
//! async fn main() {
//!     copydesk::setup_logging();
//!
//!     let gateway = BackendClient::new(&AppConfig::from_env());
//!     let mut console = Console::new();
//!
//!     console.write.input.topic = "介紹我們新推出的 AI 咖啡機".to_string();
//!     console.write.input.platform = Platform::Instagram;
//!     console.write.input.style = Style::Humorous;
//!     console.submit_write(&gateway).await;
//!
//!     if let Some(result) = &console.write.result {
//!         println!("{}", result.content);
//!     } else if let Some(error) = &console.write.last_error {
//!         eprintln!("{error}");
//!     }
//! }
//! ```

// Module declarations
pub mod clients;
pub mod console;
pub mod core;
pub mod errors;
pub mod workflow;

/// Configure structured logging for the console process.
///
/// Call once at startup, before any workflow submission.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
