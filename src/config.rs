use std::env;

pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
pub const PHONE_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";
pub const API_BASE_VAR: &str = "TWILIO_API_BASE";
pub const PORT_VAR: &str = "SMS_DEMO_PORT";

pub const DEFAULT_API_BASE: &str = "https://api.twilio.com";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl Credentials {
    // Unset and empty values both count as missing.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Some(Self {
            account_sid: get(ACCOUNT_SID_VAR)?,
            auth_token: get(AUTH_TOKEN_VAR)?,
            from_number: get(PHONE_NUMBER_VAR)?,
        })
    }
}

#[derive(Clone, Debug)]
pub enum CredentialSource {
    // Read on every call, never cached.
    Env,
    #[cfg(test)]
    Fixed(Option<Credentials>),
}

impl CredentialSource {
    pub fn load(&self) -> Option<Credentials> {
        match self {
            CredentialSource::Env => Credentials::from_lookup(|key| env::var(key).ok()),
            #[cfg(test)]
            CredentialSource::Fixed(creds) => creds.clone(),
        }
    }
}

pub fn api_base() -> String {
    env::var(API_BASE_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn port() -> u16 {
    env::var(PORT_VAR)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
