use serde::Deserialize;
use url::Url;

use crate::form::FormFields;

pub mod form;

/// Client for the contact relay's `POST /api/send-email` endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: base_url.join("/api/send-email")?,
        })
    }

    /// Issue the single submission request. The response body is parsed
    /// regardless of the http status: rejections arrive as
    /// `{"success": false, ...}` with a 4xx/5xx status.
    pub async fn send(&self, fields: &FormFields) -> anyhow::Result<SendEmailResponse> {
        self.http
            .post(self.endpoint.clone())
            .json(fields)
            .send()
            .await?
            .json()
            .await
            .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
