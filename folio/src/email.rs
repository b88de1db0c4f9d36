use anyhow::{bail, Context};
use folio_config::EmailConfig;
use folio_email_impl::{EmailServiceImpl, SmtpCredentials};

/// Connect to the SMTP server
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let credentials = match (&config.smtp_username, &config.smtp_password) {
        (Some(username), Some(password)) => Some(SmtpCredentials {
            username: username.clone(),
            password: password.clone(),
        }),
        (None, None) => None,
        _ => bail!("SMTP username and password must be set together"),
    };

    EmailServiceImpl::new(&config.smtp_url, config.from.clone(), credentials)
        .await
        .context("Failed to connect to SMTP server")
}
