//! Event Handlers
//!
//! - keyboard: user keyboard input, dialogs first, then per-screen keys
//! - api: responses arriving from the background API worker

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;
