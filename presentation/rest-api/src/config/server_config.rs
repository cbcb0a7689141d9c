use tracing::warn;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Address the catalog HTTP listener binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080; unparsable values fall back)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("SERVICE_IP")
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());

        let port = match lookup("SERVICE_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(port = %raw, "Invalid SERVICE_PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { ip, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_read_ip_and_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_IP" => Some("0.0.0.0".to_string()),
            "SERVICE_PORT" => Some(" 5000 ".to_string()),
            _ => None,
        });

        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn should_fall_back_on_invalid_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_PORT" => Some("http".to_string()),
            _ => None,
        });

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
