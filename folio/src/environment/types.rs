use folio_core_contact_impl::{rate_limit::ContactRateLimitServiceImpl, ContactFeatureServiceImpl};
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_core_submission_impl::SubmissionFeatureServiceImpl;
use folio_email_impl::EmailServiceImpl;
use folio_extern_impl::contact::ContactApiServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<Email, Template, ContactRateLimit>;
pub type ContactRateLimit = ContactRateLimitServiceImpl<Time>;

pub type SubmissionFeature = SubmissionFeatureServiceImpl<ContactApi>;
