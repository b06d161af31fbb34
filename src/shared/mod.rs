/// Shared utilities used across layers
pub mod api_token;
pub mod error;
pub mod result;

pub use api_token::ApiToken;
pub use result::Result;
