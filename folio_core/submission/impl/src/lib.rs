use folio_core_submission_contracts::{
    Acknowledgment, ContactForm, SubmissionFeatureService, SubmissionSubmitError,
};
use folio_di::Build;
use folio_extern_contracts::contact::{ContactApiError, ContactApiRequest, ContactApiService};
use folio_utils::trace_instrument;
use tracing::{error, info};

#[derive(Debug, Clone, Build)]
pub struct SubmissionFeatureServiceImpl<ContactApi> {
    contact_api: ContactApi,
}

impl<ContactApi> SubmissionFeatureService for SubmissionFeatureServiceImpl<ContactApi>
where
    ContactApi: ContactApiService,
{
    #[trace_instrument(skip(self))]
    async fn submit(
        &self,
        form: &mut ContactForm,
    ) -> Result<Acknowledgment, SubmissionSubmitError> {
        if let Some(field) = form.missing_field() {
            return Err(SubmissionSubmitError::MissingField(field));
        }

        let request = ContactApiRequest {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        };

        match self.contact_api.submit(&request).await {
            Ok(()) => {
                info!("contact message submitted");
                form.clear();
                Ok(Acknowledgment::Sent)
            }
            Err(ContactApiError::Rejected { status }) => {
                error!(status, "relay rejected contact message");
                Ok(Acknowledgment::Failed)
            }
            Err(ContactApiError::Network(err)) => {
                error!("failed to reach relay: {err:#}");
                Ok(Acknowledgment::Failed)
            }
        }
    }
}
