use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::provider::{OutgoingSms, ProviderError, SmsProvider};

#[derive(Clone, Debug)]
pub struct TwilioClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateMessage<'a> {
    #[serde(rename = "To")]
    to: &'a str,
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "Body")]
    body: &'a str,
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
}

impl TwilioClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn messages_url(&self, account_sid: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            account_sid
        )
    }
}

#[async_trait]
impl SmsProvider for TwilioClient {
    async fn send(&self, creds: &Credentials, sms: OutgoingSms<'_>) -> Result<String, ProviderError> {
        let url = self.messages_url(&creds.account_sid);
        debug!("POST {}", url);

        let res = self
            .http
            .post(&url)
            .basic_auth(&creds.account_sid, Some(&creds.auth_token))
            .form(&CreateMessage {
                to: sms.to,
                from: sms.from,
                body: sms.body,
            })
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            let code = serde_json::from_str::<TwilioErrorBody>(&text)
                .ok()
                .and_then(|b| b.code);
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                code,
            });
        }

        serde_json::from_str::<MessageResource>(&text)
            .map(|m| m.sid)
            .map_err(|e| ProviderError::BadResponse(e.to_string()))
    }
}
