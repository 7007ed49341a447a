pub mod admin;
pub mod api;
pub mod auth;
pub mod bidding;
pub mod config;
pub mod context;
pub mod error;
pub mod feedback;
pub mod listing;
pub mod profile;
pub mod query;
pub mod seller;
pub mod session;

pub use context::AppContext;
pub use error::{ClientError, Result};
