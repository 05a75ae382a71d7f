use async_trait::async_trait;
use thiserror::Error;

use crate::config::Credentials;

// Twilio's free-text error messages can echo the recipient number, so
// only the numeric code is kept.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider rejected message (HTTP {status}, code {})", code_text(.code))]
    Rejected { status: u16, code: Option<i64> },
    #[error("unexpected provider response: {0}")]
    BadResponse(String),
}

fn code_text(code: &Option<i64>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct OutgoingSms<'a> {
    pub to: &'a str,
    pub from: &'a str,
    pub body: &'a str,
}

#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Returns the provider's message id.
    async fn send(&self, creds: &Credentials, sms: OutgoingSms<'_>) -> Result<String, ProviderError>;
}

pub fn mask_phone(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() <= 5 {
        return "*".repeat(chars.len());
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    match chars[0] {
        '+' => format!("+{}{}", "*".repeat(chars.len() - 5), tail),
        _ => format!("{}{}", "*".repeat(chars.len() - 4), tail),
    }
}
