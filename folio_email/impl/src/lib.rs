use anyhow::anyhow;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::{email_address::EmailAddressWithName, Sensitive};
use folio_utils::{trace_instrument, Apply};
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: Sensitive<String>,
}

impl EmailServiceImpl {
    pub async fn new(
        url: &str,
        from: EmailAddressWithName,
        credentials: Option<SmtpCredentials>,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .apply_map(credentials, |builder, credentials| {
                builder.credentials(Credentials::new(
                    credentials.username,
                    credentials.password.0,
                ))
            })
            .build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new("smtp://dummy", "dummy@example.com".parse().unwrap(), None)
            .await
            .unwrap()
    }
}

impl EmailService for EmailServiceImpl {
    #[trace_instrument(skip(self))]
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    let builder = Message::builder()
        .from(from.0.clone())
        .to(email.recipient.0)
        .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
        .subject(email.subject);

    let message = match email.body {
        EmailBody::Text(body) => builder.header(header::ContentType::TEXT_PLAIN).body(body)?,
        EmailBody::Alternative { text, html } => {
            builder.multipart(MultiPart::alternative_plain_html(text, html))?
        }
    };

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from() -> EmailAddressWithName {
        "Portfolio <owner@example.com>".parse().unwrap()
    }

    fn format(message: Message) -> String {
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn text_message() {
        // Act
        let message = build_message(
            &from(),
            Email {
                recipient: "owner@example.com".parse().unwrap(),
                subject: "The Subject".into(),
                body: EmailBody::Text("Hello World!".into()),
                reply_to: None,
            },
        )
        .unwrap();

        // Assert
        let formatted = format(message);
        assert!(formatted.contains("From: Portfolio <owner@example.com>"));
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Subject: The Subject"));
        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(!formatted.contains("Reply-To:"));
        assert!(formatted.contains("Hello World!"));
    }

    #[test]
    fn alternative_message_with_reply_to() {
        // Act
        let message = build_message(
            &from(),
            Email {
                recipient: "owner@example.com".parse().unwrap(),
                subject: "New message from Ana".into(),
                body: EmailBody::Alternative {
                    text: "Hello".into(),
                    html: "<p>Hello</p>".into(),
                },
                reply_to: Some("ana@example.com".parse().unwrap()),
            },
        )
        .unwrap();

        // Assert
        let formatted = format(message);
        assert!(formatted.contains("Reply-To: ana@example.com"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("text/plain"));
        assert!(formatted.contains("text/html"));
        assert!(formatted.contains("<p>Hello</p>"));
    }
}
