//! Scandash client: typed HTTP access to the scan service.
mod api;
mod error;
mod handle;

pub use api::{ApiClient, StartReply};
pub use error::ClientError;
pub use handle::{ClientCommand, ClientEvent, ClientHandle};
