//! HTTP implementation of the portal's REST API.
//!
//! # Module Structure
//!
//! - `dto`: Response envelopes as sent by the server
//! - `http_client`: `HttpPortalClient`, the reqwest-backed `PortalApi`

mod dto;
pub mod http_client;

pub use http_client::HttpPortalClient;
