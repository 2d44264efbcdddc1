//! Conversation UI Module (MVVM Standard)
//!
//! Structure:
//! - ports.rs: seams injected into the view model (HTTP, display, browser)
//! - view_model.rs: Conversation with its Idle/Busy phase machine
//! - model.rs: HttpChatApi over gloo-net
//! - browser.rs: BrowserPlatform (confirm, download, clock)
//! - view.rs: ConversationPage component and its signal-backed render target

mod browser;
mod error;
mod model;
mod ports;
mod view;
mod view_model;

pub use browser::BrowserPlatform;
pub use error::ChatError;
pub use model::HttpChatApi;
pub use ports::{ChatApi, ExportArtifact, Platform, RenderTarget};
pub use view::{ConversationPage, SignalTarget};
pub use view_model::{Conversation, Operation, Phase, ResetOutcome, SendOutcome};
