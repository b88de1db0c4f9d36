use std::future::Future;

use serde::Serialize;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post a contact submission to the relay endpoint.
    fn submit(
        &self,
        request: &ContactApiRequest,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

/// The json body accepted by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactApiRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("The relay responded with status {status}.")]
    Rejected { status: u16 },
    #[error("Failed to reach the relay: {0}")]
    Network(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        request: ContactApiRequest,
        result: Result<(), ContactApiError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
