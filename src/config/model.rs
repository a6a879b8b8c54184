use serde::Deserialize;

/// Service configuration. Every field has a default, so running without a
/// config file is fine.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the status endpoint binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Deadline for a single probe attempt, in seconds. Applies to the
    /// HEAD attempt and the GET fallback separately.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-agent sent with every outbound probe request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; siteprobe/1.0)".to_string()
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.contains("siteprobe"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
                    listen_addr: 0.0.0.0:9100
                    timeout_seconds: 5
                    "#;

        let config: Config = serde_yaml::from_str(yaml).expect("Invalid YAML");
        assert_eq!(config.listen_addr, "0.0.0.0:9100");
        assert_eq!(config.timeout_seconds, 5);
        // unset fields fall back to defaults
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("Invalid YAML");
        assert_eq!(config.timeout_seconds, 10);
    }
}
