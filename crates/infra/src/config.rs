use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Credentials for the WhatsApp messaging gateway. `None` when the
    /// environment does not carry the full group.
    pub messaging: Option<MessagingConfig>,
}

/// Credential group for the Twilio WhatsApp gateway, read from the
/// process environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagingConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number in international format, without the `whatsapp:`
    /// prefix.
    pub sender_number: String,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let messaging = match (
            std::env::var("TWILIO_ACCOUNT_SID"),
            std::env::var("TWILIO_AUTH_TOKEN"),
            std::env::var("TWILIO_WHATSAPP_FROM"),
        ) {
            (Ok(account_sid), Ok(auth_token), Ok(sender_number)) => Some(MessagingConfig {
                account_sid,
                auth_token,
                sender_number,
            }),
            _ => {
                info!(
                    "Messaging gateway credentials are not fully configured. \
                     WhatsApp dispatch endpoints will report a server configuration error."
                );
                None
            }
        };

        Self { port, messaging }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
