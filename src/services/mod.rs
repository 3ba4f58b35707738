//! External Services
//!
//! Background work that talks to the search service. The UI thread never
//! awaits a network call; it sends an `ApiRequest` and drains
//! `ApiResponse`s each frame.

pub mod api;

pub use api::{ApiRequest, ApiResponse};
