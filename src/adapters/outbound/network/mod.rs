/// Network adapters for external API calls
mod http;
mod snyk_client;

pub use http::{HttpMethod, RetryPolicy};
pub use snyk_client::{SnykClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
