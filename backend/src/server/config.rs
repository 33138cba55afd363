//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) mail_to: String,
    pub(crate) mail_from: String,
}

impl ServerConfig {
    /// Construct a server configuration from resolved settings.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        mail_to: impl Into<String>,
        mail_from: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr,
            mail_to: mail_to.into(),
            mail_from: mail_from.into(),
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
