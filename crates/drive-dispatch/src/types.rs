use serde::{Deserialize, Serialize};

/// Where the drive-control server listens. Read-only after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9999
}

fn default_path() -> String {
    "/json".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl EndpointConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let endpoint = EndpointConfig::default();
        assert_eq!(endpoint.url(), "http://localhost:9999/json");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let endpoint: EndpointConfig = serde_json::from_str(r#"{"host":"robot.local"}"#).unwrap();
        assert_eq!(endpoint.host, "robot.local");
        assert_eq!(endpoint.port, 9999);
        assert_eq!(endpoint.path, "/json");
    }
}
