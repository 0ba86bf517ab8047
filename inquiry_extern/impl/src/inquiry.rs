use std::sync::Arc;

use inquiry_extern_contracts::inquiry::{InquiryApiService, InquiryApiSubmitError};
use inquiry_models::submission::Submission;
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

pub const INQUIRIES_ENDPOINT: &str =
    "https://my-json-server.typicode.com/tundeojediran/contacts-api-server/inquiries";

#[derive(Debug, Clone)]
pub struct InquiryApiServiceImpl {
    config: InquiryApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct InquiryApiServiceConfig {
    endpoint: Arc<Url>,
}

impl InquiryApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| INQUIRIES_ENDPOINT.parse().unwrap())
                .into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl InquiryApiServiceImpl {
    pub fn new(config: InquiryApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl InquiryApiService for InquiryApiServiceImpl {
    #[instrument(skip_all, fields(id = %submission.id, endpoint = %self.config.endpoint))]
    async fn submit(
        &self,
        submission: Submission,
    ) -> Result<serde_json::Value, InquiryApiSubmitError> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(&submission)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        debug!(%status, "received response");
        if !status.is_success() {
            return Err(InquiryApiSubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| anyhow::Error::from(err).into())
    }
}
