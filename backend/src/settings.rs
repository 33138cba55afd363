//! Application settings loaded via OrthoConfig.
//!
//! Values merge from CLI arguments, `CITY_INFO_*` environment variables and an
//! optional configuration file.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAIL_TO: &str = "admin@mycompany.com";
const DEFAULT_MAIL_FROM: &str = "noreply@mycompany.com";

/// Runtime configuration for the HTTP server and mail notifications.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CITY_INFO")]
pub struct AppSettings {
    /// Interface address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Recipient of deletion notifications.
    pub mail_to: Option<String>,
    /// Sender of deletion notifications.
    pub mail_from: Option<String>,
}

impl AppSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the notification recipient.
    pub fn mail_to(&self) -> &str {
        self.mail_to.as_deref().unwrap_or(DEFAULT_MAIL_TO)
    }

    /// Return the notification sender.
    pub fn mail_from(&self) -> &str {
        self.mail_from.as_deref().unwrap_or(DEFAULT_MAIL_FROM)
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
