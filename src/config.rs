use anyhow::{Context, Result};

const DEFAULT_QR_GROUP_IMAGE_URL: &str =
    "https://image.17ai.eu.org/file/文档类/1769572100878_加入群聊二维码.png";
const DEFAULT_QR_PERSONAL_IMAGE_URL: &str =
    "https://image.17ai.eu.org/file/文档类/1769571990970_单人二维码.png";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Mail relay
    pub relay_endpoint: String,
    pub contact_target_email: String,
    pub relay_timeout_secs: u64,

    // Contact methods
    pub contact_mailto: String,
    pub qr_group_image_url: String,
    pub qr_personal_image_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let contact_target_email = std::env::var("CONTACT_TARGET_EMAIL")
            .context("CONTACT_TARGET_EMAIL not set")?;

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Mail relay
            relay_endpoint: std::env::var("RELAY_ENDPOINT")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://formsubmit.co/ajax".to_string()),
            relay_timeout_secs: std::env::var("RELAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),

            // The mailto address defaults to the relay mailbox
            contact_mailto: std::env::var("CONTACT_MAILTO")
                .unwrap_or_else(|_| contact_target_email.clone()),
            contact_target_email,

            // QR images; blank values keep the hosted defaults
            qr_group_image_url: non_empty_var("QR_GROUP_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_QR_GROUP_IMAGE_URL.to_string()),
            qr_personal_image_url: non_empty_var("QR_PERSONAL_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_QR_PERSONAL_IMAGE_URL.to_string()),
        })
    }

    /// Full relay URL the contact form posts to.
    pub fn relay_url(&self) -> String {
        format!("{}/{}", self.relay_endpoint, self.contact_target_email)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "PORT",
        "RELAY_ENDPOINT",
        "CONTACT_TARGET_EMAIL",
        "RELAY_TIMEOUT_SECS",
        "CONTACT_MAILTO",
        "QR_GROUP_IMAGE_URL",
        "QR_PERSONAL_IMAGE_URL",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_target_email() {
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("CONTACT_TARGET_EMAIL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("CONTACT_TARGET_EMAIL", "team@example.com");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.relay_endpoint, "https://formsubmit.co/ajax");
        assert_eq!(config.relay_timeout_secs, 15);
        assert_eq!(config.contact_mailto, "team@example.com");
        assert_eq!(config.qr_group_image_url, DEFAULT_QR_GROUP_IMAGE_URL);
        assert_eq!(config.qr_personal_image_url, DEFAULT_QR_PERSONAL_IMAGE_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("CONTACT_TARGET_EMAIL", "team@example.com");
        std::env::set_var("PORT", "3000");
        std::env::set_var("RELAY_ENDPOINT", "http://localhost:9999/ajax/");
        std::env::set_var("RELAY_TIMEOUT_SECS", "5");
        std::env::set_var("CONTACT_MAILTO", "hello@example.com");
        std::env::set_var("QR_GROUP_IMAGE_URL", "https://img.example.com/group.png");
        std::env::set_var("QR_PERSONAL_IMAGE_URL", "   ");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.port, 3000);
        assert_eq!(config.relay_endpoint, "http://localhost:9999/ajax");
        assert_eq!(config.relay_timeout_secs, 5);
        assert_eq!(config.contact_mailto, "hello@example.com");
        assert_eq!(config.qr_group_image_url, "https://img.example.com/group.png");
        assert_eq!(config.qr_personal_image_url, DEFAULT_QR_PERSONAL_IMAGE_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        clear_env();
        std::env::set_var("CONTACT_TARGET_EMAIL", "team@example.com");
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_relay_url() {
        clear_env();
        std::env::set_var("CONTACT_TARGET_EMAIL", "team@example.com");

        let config = Config::from_env().expect("Should load");
        assert_eq!(
            config.relay_url(),
            "https://formsubmit.co/ajax/team@example.com"
        );

        clear_env();
    }
}
