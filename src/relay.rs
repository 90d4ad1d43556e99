use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::contact::{validate_email, ContactMessage, SubmissionError};

pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Routing identifiers and limits for the email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub newsletter_template_id: Option<String>,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RELAY_URL.to_string(),
            service_id: "service_kl22txf".to_string(),
            template_id: "template_9qw7gcm".to_string(),
            public_key: "8RqRlvuPNrSj7OJHN".to_string(),
            private_key: None,
            newsletter_template_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(val) = non_empty("PORTFOLIO_RELAY_URL") {
            config.url = val;
        }
        if let Some(val) = non_empty("PORTFOLIO_RELAY_SERVICE_ID") {
            config.service_id = val;
        }
        if let Some(val) = non_empty("PORTFOLIO_RELAY_TEMPLATE_ID") {
            config.template_id = val;
        }
        if let Some(val) = non_empty("PORTFOLIO_RELAY_PUBLIC_KEY") {
            config.public_key = val;
        }
        config.private_key = non_empty("PORTFOLIO_RELAY_PRIVATE_KEY");
        config.newsletter_template_id = non_empty("PORTFOLIO_NEWSLETTER_TEMPLATE_ID");
        if let Some(secs) = non_empty("PORTFOLIO_RELAY_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }
}

#[derive(Serialize)]
struct RelayRequest<'a, P> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: P,
}

#[derive(Serialize)]
struct ContactParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct NewsletterParams<'a> {
    subscriber_email: &'a str,
}

/// Sends form submissions to the relay. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
    client: Client,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub async fn send_contact(&self, msg: &ContactMessage) -> Result<(), SubmissionError> {
        msg.validate().map_err(SubmissionError::Invalid)?;
        let params = ContactParams {
            from_name: &msg.name,
            from_email: &msg.email,
            message: &msg.message,
        };
        self.dispatch(&self.config.template_id, params).await
    }

    pub async fn subscribe(&self, email: &str) -> Result<(), SubmissionError> {
        validate_email(email).map_err(SubmissionError::Invalid)?;
        let template_id = self
            .config
            .newsletter_template_id
            .as_deref()
            .ok_or(SubmissionError::Unavailable)?;
        let params = NewsletterParams {
            subscriber_email: email,
        };
        self.dispatch(template_id, params).await
    }

    async fn dispatch<P: Serialize>(
        &self,
        template_id: &str,
        params: P,
    ) -> Result<(), SubmissionError> {
        let body = RelayRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };
        debug!(template_id, "dispatching to relay");

        let res = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(template_id, "relay timed out after {:?}", self.config.timeout);
                    SubmissionError::Timeout
                } else {
                    warn!(template_id, error = %e, "couldn't reach relay");
                    SubmissionError::Network(e.to_string())
                }
            })?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(template_id, status = status.as_u16(), "relay rejected message");
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn config_for(server: &MockServer) -> RelayConfig {
        RelayConfig {
            url: server.url("/api/v1.0/email/send"),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pub".to_string(),
            private_key: None,
            newsletter_template_id: Some("news".to_string()),
            timeout: Duration::from_millis(300),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi!".to_string(),
        }
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let empty = RelayConfig::from_lookup(|_| None);
        assert_eq!(empty, RelayConfig::default());
        assert_eq!(empty.timeout, Duration::from_secs(15));

        let vars = HashMap::from([
            ("PORTFOLIO_RELAY_URL", "http://localhost:9/send"),
            ("PORTFOLIO_RELAY_SERVICE_ID", "service_x"),
            ("PORTFOLIO_RELAY_PRIVATE_KEY", "secret"),
            ("PORTFOLIO_NEWSLETTER_TEMPLATE_ID", " "),
            ("PORTFOLIO_RELAY_TIMEOUT_SECS", "3"),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.url, "http://localhost:9/send");
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, RelayConfig::default().template_id);
        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.newsletter_template_id, None);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_timeout_is_ignored() {
        let config = RelayConfig::from_lookup(|k| {
            (k == "PORTFOLIO_RELAY_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[tokio::test]
    async fn test_send_contact_posts_routing_and_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1.0/email/send")
                    .json_body(json!({
                        "service_id": "svc",
                        "template_id": "tpl",
                        "user_id": "pub",
                        "template_params": {
                            "from_name": "Ada",
                            "from_email": "ada@example.com",
                            "message": "Hi!"
                        }
                    }));
                then.status(200).body("OK");
            })
            .await;

        let relay = RelayClient::new(config_for(&server)).unwrap();
        assert_eq!(relay.send_contact(&message()).await, Ok(()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_private_key_is_sent_as_access_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .json_body_partial(r#"{ "accessToken": "secret" }"#);
                then.status(200);
            })
            .await;

        let mut config = config_for(&server);
        config.private_key = Some("secret".to_string());
        let relay = RelayClient::new(config).unwrap();
        assert_eq!(relay.send_contact(&message()).await, Ok(()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_maps_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(400).body("The user_id parameter is required");
            })
            .await;

        let relay = RelayClient::new(config_for(&server)).unwrap();
        assert_eq!(
            relay.send_contact(&message()).await,
            Err(SubmissionError::Rejected { status: 400 })
        );
    }

    #[tokio::test]
    async fn test_slow_relay_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).delay(Duration::from_secs(2));
            })
            .await;

        let relay = RelayClient::new(config_for(&server)).unwrap();
        assert_eq!(
            relay.send_contact(&message()).await,
            Err(SubmissionError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_network_error() {
        let config = RelayConfig {
            url: "http://127.0.0.1:1/send".to_string(),
            timeout: Duration::from_secs(2),
            ..RelayConfig::default()
        };
        let relay = RelayClient::new(config).unwrap();
        let res = relay.send_contact(&message()).await;
        assert!(matches!(res, Err(SubmissionError::Network(_))), "{res:?}");
    }

    #[tokio::test]
    async fn test_invalid_message_never_reaches_relay() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200);
            })
            .await;

        let relay = RelayClient::new(config_for(&server)).unwrap();
        let mut msg = message();
        msg.email = "not-an-email".to_string();
        assert!(matches!(
            relay.send_contact(&msg).await,
            Err(SubmissionError::Invalid(_))
        ));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_newsletter_uses_its_template() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).json_body_partial(
                    r#"{ "template_id": "news", "template_params": { "subscriber_email": "reader@example.com" } }"#,
                );
                then.status(200);
            })
            .await;

        let relay = RelayClient::new(config_for(&server)).unwrap();
        assert_eq!(relay.subscribe("reader@example.com").await, Ok(()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_newsletter_without_template_is_unavailable() {
        let server = MockServer::start_async().await;
        let mut config = config_for(&server);
        config.newsletter_template_id = None;
        let relay = RelayClient::new(config).unwrap();
        assert_eq!(
            relay.subscribe("reader@example.com").await,
            Err(SubmissionError::Unavailable)
        );
    }
}
