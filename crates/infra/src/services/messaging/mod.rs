use crate::config::MessagingConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use tracing::error;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Error payload reported by the messaging gateway for a failed send.
/// Stored serialized in the notification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayError {
    pub code: Option<i64>,
    pub message: String,
}

impl GatewayError {
    /// The error payload serialized as text, for the notification log.
    pub fn as_log_detail(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "Gateway error {}: {}", code, self.message),
            None => write!(f, "Gateway error: {}", self.message),
        }
    }
}

/// Outbound WhatsApp messaging. One implementation talks to the Twilio
/// REST API, the in-memory one records sends for tests.
#[async_trait::async_trait]
pub trait IMessagingGateway: Send + Sync {
    /// Send a WhatsApp text message to `phone_number` (international
    /// format). Returns the gateway's error payload on failure.
    async fn send_message(&self, phone_number: &str, body: &str) -> Result<(), GatewayError>;
}

pub struct TwilioWhatsAppGateway {
    http: Client,
    account_sid: String,
    auth_token: String,
    sender_number: String,
}

impl fmt::Debug for TwilioWhatsAppGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioWhatsAppGateway")
            .field("account_sid", &self.account_sid)
            .finish_non_exhaustive()
    }
}

impl TwilioWhatsAppGateway {
    pub fn new(config: &MessagingConfig) -> Self {
        Self {
            http: Client::new(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            sender_number: config.sender_number.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    code: Option<i64>,
    message: Option<String>,
}

#[async_trait::async_trait]
impl IMessagingGateway for TwilioWhatsAppGateway {
    async fn send_message(&self, phone_number: &str, body: &str) -> Result<(), GatewayError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        );
        let params = [
            ("From", format!("whatsapp:{}", self.sender_number)),
            ("To", format!("whatsapp:{}", phone_number)),
            ("Body", body.to_string()),
        ];

        let res = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Request to messaging gateway failed: {:?}", e);
                GatewayError {
                    code: None,
                    message: format!("Request to messaging gateway failed: {}", e),
                }
            })?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let err = match res.json::<TwilioErrorResponse>().await {
            Ok(payload) => GatewayError {
                code: payload.code,
                message: payload
                    .message
                    .unwrap_or_else(|| format!("Gateway responded with status {}", status)),
            },
            Err(_) => GatewayError {
                code: None,
                message: format!("Gateway responded with status {}", status),
            },
        };
        error!("Messaging gateway rejected message: {:?}", err);
        Err(err)
    }
}

/// Records sends instead of performing them. A failure payload can be
/// installed to exercise error paths.
pub struct InMemoryMessagingGateway {
    sent: Mutex<Vec<(String, String)>>,
    fail_with: Mutex<Option<GatewayError>>,
}

impl InMemoryMessagingGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// A gateway that rejects every send with a canned error payload.
    pub fn failing() -> Self {
        let gateway = Self::new();
        gateway.set_failure(Some(GatewayError {
            code: Some(63016),
            message: "Failed to send message".into(),
        }));
        gateway
    }

    pub fn set_failure(&self, failure: Option<GatewayError>) {
        *self.fail_with.lock().unwrap() = failure;
    }

    /// Messages delivered so far as (recipient, body) pairs.
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMessagingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMessagingGateway for InMemoryMessagingGateway {
    async fn send_message(&self, phone_number: &str, body: &str) -> Result<(), GatewayError> {
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent
            .lock()
            .unwrap()
            .push((phone_number.to_string(), body.to_string()));
        Ok(())
    }
}
