pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod extract;
pub mod request_id;
pub mod search;
pub mod wikipedia;

pub use config::Config;
pub use error::SearchError;
pub use extract::extract_short_description;
pub use request_id::RequestId;
pub use search::{SearchHandler, SearchResult};
