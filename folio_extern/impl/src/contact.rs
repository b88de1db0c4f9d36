use std::sync::Arc;

use folio_di::Build;
use folio_extern_contracts::contact::{ContactApiError, ContactApiRequest, ContactApiService};
use folio_utils::trace_instrument;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    /// Url of the relay's `POST /api/contact` route.
    pub endpoint: Arc<Url>,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> Self {
        Self {
            config,
            client: Default::default(),
        }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[trace_instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn submit(&self, request: &ContactApiRequest) -> Result<(), ContactApiError> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(request)
            .send()
            .await
            .map_err(|err| ContactApiError::Network(err.into()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactApiError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
