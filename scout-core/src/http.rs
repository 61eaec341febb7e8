//! Shared HTTP client utilities
//!
//! This module provides a shared, lazily-initialized HTTP client for all API calls.
//! Using a single client allows connection pooling and avoids resource duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for API requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Global HTTP client for API calls
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// This client has a 60-second timeout, suitable for chat completions
/// against the Perplexity API.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("casescout/0.1")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
