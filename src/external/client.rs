use std::sync::LazyLock;
use std::time::Duration;

/// Global HTTP client instance with optimized configuration
///
/// This client is initialized lazily on first access and reused across the
/// application, so repeated dispatches share pooled TCP connections and DNS
/// cache. Per-request timeouts are applied at the call site from
/// `WebhookConfig`; the values here are outer bounds.
///
/// # Features
/// - **Connection pooling**: Reuses TCP connections across dispatches
/// - **HTTP/2**: Adaptive window sizing and keep-alive
/// - **Compression**: gzip and deflate response decoding
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // HTTP/2 settings
        .http2_adaptive_window(true)
        .http2_keep_alive_interval(Duration::from_secs(10))
        .http2_keep_alive_timeout(Duration::from_secs(20))
        // Compression
        .gzip(true)
        .deflate(true)
        // Security
        .https_only(false)
        .use_rustls_tls()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
