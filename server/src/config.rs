//! Environment-driven service configuration.

/// Listen address and static asset settings, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory served to the companion front end for non-API paths.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: read_string("CARDROOM_HOST", "0.0.0.0"),
            port: read_port(),
            static_dir: read_string("CARDROOM_STATIC_DIR", "public"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_string(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|raw| !raw.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// CARDROOM_PORT wins over the generic PORT used by most hosting platforms.
fn read_port() -> u16 {
    for key in ["CARDROOM_PORT", "PORT"] {
        if let Some(port) = std::env::var(key)
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
        {
            return port;
        }
    }
    8000
}
