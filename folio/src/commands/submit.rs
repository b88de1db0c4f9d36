use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_core_submission_contracts::{Acknowledgment, ContactForm, SubmissionFeatureService};
use folio_di::Provide;
use url::Url;

use crate::environment::{types::SubmissionFeature, ConfigProvider};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Your name
    #[arg(long)]
    pub name: String,
    /// The email address the reply should go to
    #[arg(long)]
    pub email: String,
    /// The message to send
    #[arg(long)]
    pub message: String,
    /// Override the relay endpoint from the config
    #[arg(long)]
    pub endpoint: Option<Url>,
}

impl SubmitCommand {
    pub async fn invoke(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(endpoint) = self.endpoint {
            config.client.endpoint = endpoint;
        }

        let mut provider = ConfigProvider::new(&config)?;
        let submission: SubmissionFeature = provider.provide();

        let mut form = ContactForm {
            name: self.name,
            email: self.email,
            message: self.message,
        };

        let acknowledgment = submission.submit(&mut form).await?;
        println!("{}", acknowledgment.message());

        if acknowledgment == Acknowledgment::Failed {
            bail!("The relay did not accept the message");
        }

        Ok(())
    }
}
