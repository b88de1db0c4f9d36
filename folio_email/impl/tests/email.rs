use std::time::{Duration, Instant};

use anyhow::Context;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_email_impl::EmailServiceImpl;
use folio_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a running smtp4dev instance (SMTP4DEV_URL)"]
async fn send_email() {
    let client = setup().await;

    let result = client
        .email
        .send(Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "New message from Ana".into(),
            body: EmailBody::Alternative {
                text: "Hello".into(),
                html: "<p>Hello</p>".into(),
            },
            reply_to: Some("Ana <ana@example.com>".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(result);

    let mail = client.wait_for_mail().await;
    assert_eq!(mail.from, client.from.0.email.as_ref());
    assert_eq!(mail.to, "owner@example.com");
    assert_eq!(mail.subject, "New message from Ana");

    let details = client.fetch_email_details(mail.id).await;
    assert!(details.plain_text);
    assert!(details.html);
    let reply_to = details
        .headers
        .into_iter()
        .find(|h| h.name == "Reply-To")
        .unwrap();
    assert_eq!(reply_to.value, "Ana <ana@example.com>");
}

#[tokio::test]
#[ignore = "requires a running smtp4dev instance (SMTP4DEV_URL)"]
async fn ping() {
    let client = setup().await;

    client.email.ping().await.unwrap();
}

struct TestClient {
    email: EmailServiceImpl,
    from: EmailAddressWithName,
    smtp4dev_url: Url,
}

impl TestClient {
    async fn reset(&self) {
        reqwest::Client::new()
            .delete(self.smtp4dev_url.join("api/Messages/*").unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    async fn wait_for_mail(&self) -> EmailSummary {
        let now = Instant::now();
        while now.elapsed() < Duration::from_secs(2) {
            let mut mailbox = self.fetch_mailbox().await;
            if let Some(mail) = mailbox.pop() {
                return mail;
            }
        }
        panic!("No email received");
    }

    async fn fetch_mailbox(&self) -> Vec<EmailSummary> {
        self.get(self.smtp4dev_url.join("api/Messages").unwrap())
            .await
            .json::<PaginationResponse<_>>()
            .await
            .unwrap()
            .results
    }

    async fn fetch_email_details(&self, id: Uuid) -> EmailDetails {
        self.get(
            self.smtp4dev_url
                .join(&format!("api/Messages/{id}"))
                .unwrap(),
        )
        .await
        .json()
        .await
        .unwrap()
    }

    async fn get(&self, url: Url) -> reqwest::Response {
        reqwest::Client::new()
            .get(url)
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
    }
}

async fn setup() -> TestClient {
    let config = folio_config::load().unwrap();

    let email = EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone(), None)
        .await
        .unwrap();

    let smtp4dev_url = std::env::var("SMTP4DEV_URL")
        .context("Failed to read SMTP4DEV_URL environment variable")
        .unwrap()
        .parse()
        .context("Failed to parse SMTP4DEV_URL environment variable")
        .unwrap();

    let client = TestClient {
        email,
        from: config.email.from,
        smtp4dev_url,
    };

    client.reset().await;

    client
}

#[derive(Debug, Deserialize)]
struct PaginationResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EmailSummary {
    id: Uuid,
    from: String,
    to: String,
    subject: String,
}

#[derive(Debug, Deserialize)]
struct EmailDetails {
    headers: Vec<EmailHeader>,
    #[serde(rename = "hasPlainTextBody")]
    plain_text: bool,
    #[serde(rename = "hasHtmlBody")]
    html: bool,
}

#[derive(Debug, Deserialize)]
struct EmailHeader {
    name: String,
    value: String,
}
