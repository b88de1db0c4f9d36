use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use folio_core_contact_contracts::{
    rate_limit::ContactRateLimitService, ContactFeatureService, ContactSendMessageError,
};
use folio_di::Build;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use folio_templates_contracts::{
    ContactMessageHtmlTemplate, ContactMessageTextTemplate, TemplateService,
};
use folio_utils::trace_instrument;
use tracing::{error, info, warn};

pub mod rate_limit;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email, Template, RateLimit> {
    email: Email,
    template: Template,
    rate_limit: RateLimit,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Mailbox receiving every contact message.
    pub email: Arc<EmailAddressWithName>,
}

impl<EmailS, Template, RateLimit> ContactFeatureService
    for ContactFeatureServiceImpl<EmailS, Template, RateLimit>
where
    EmailS: EmailService,
    Template: TemplateService,
    RateLimit: ContactRateLimitService,
{
    #[trace_instrument(skip(self, submission))]
    async fn send_message(
        &self,
        client: IpAddr,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let email = self.build_email(submission)?;

        if !self.rate_limit.acquire(client).await {
            warn!(%client, "rejecting contact message, rate limit exceeded");
            return Err(ContactSendMessageError::RateLimited);
        }

        match self.email.send(email).await {
            Ok(true) => {
                info!(%client, "relayed contact message");
                Ok(())
            }
            Ok(false) => {
                error!(%client, "smtp server did not accept contact message");
                Err(ContactSendMessageError::Send)
            }
            Err(err) => {
                error!(%client, "failed to send contact message: {err:#}");
                Err(ContactSendMessageError::Send)
            }
        }
    }
}

impl<EmailS, Template, RateLimit> ContactFeatureServiceImpl<EmailS, Template, RateLimit>
where
    Template: TemplateService,
{
    fn build_email(&self, submission: ContactSubmission) -> anyhow::Result<Email> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let text = self
            .template
            .render(&ContactMessageTextTemplate {
                name: (*name).clone(),
                email: email.as_str().into(),
                message: (*message).clone(),
            })
            .context("Failed to render plain text body")?;

        let html = self
            .template
            .render(&ContactMessageHtmlTemplate {
                name: (*name).clone(),
                email: email.as_str().into(),
                message: (*message).clone(),
            })
            .context("Failed to render html body")?;

        Ok(Email {
            recipient: (*self.config.email).clone(),
            subject: format!("New message from {}", *name),
            body: EmailBody::Alternative { text, html },
            reply_to: Some(email.with_name(name.into_inner())),
        })
    }
}
