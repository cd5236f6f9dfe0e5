//! Service-specific tests
//!
//! Each service has its own test file; HTTP collaborators run against a
//! local `wiremock` server.


// Common test utilities for services
#[cfg(test)]
pub mod common {
    use url::Url;

    /// Parse a URL that is known to be valid in tests
    pub fn url(s: &str) -> Url {
        Url::parse(s).expect("valid test URL")
    }
}
