use anyhow::anyhow;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::email_address::EmailAddress;
use lettre::{
    message::{header, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let from = match email.from_name {
            Some(name) => self.from.clone().with_name(name),
            None => self.from.clone().into(),
        };

        let mut builder = Message::builder()
            .from(from.0)
            .to(email.recipient.0)
            .subject(email.subject);
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }

        let message = match email.body {
            EmailBody::Plain(text) => builder.header(header::ContentType::TEXT_PLAIN).body(text)?,
            EmailBody::Alternative { text, html } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))?
            }
        };

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_headers() {
        let sut = EmailServiceImpl::new("smtp://localhost:25", from())
            .await
            .unwrap();

        let message = sut
            .build_message(Email {
                recipient: "inbox@example.com".parse().unwrap(),
                subject: "Hello".into(),
                body: EmailBody::Plain("Hi!".into()),
                reply_to: Some("jane.doe@example.de".parse().unwrap()),
                from_name: Some("Jane Doe via Contact Form".into()),
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        let header = |name: &str| {
            formatted
                .lines()
                .find(|line| line.starts_with(name))
                .unwrap_or_else(|| panic!("missing {name} header in {formatted}"))
                .to_owned()
        };
        assert!(header("From:").contains("Jane Doe via Contact Form"));
        assert!(header("From:").contains("portfolio@example.com"));
        assert!(header("To:").contains("inbox@example.com"));
        assert!(header("Reply-To:").contains("jane.doe@example.de"));
        assert_eq!(header("Subject:"), "Subject: Hello");
    }

    #[tokio::test]
    async fn message_alternative_body() {
        let sut = EmailServiceImpl::new("smtp://localhost:25", from())
            .await
            .unwrap();

        let message = sut
            .build_message(Email {
                recipient: "inbox@example.com".parse().unwrap(),
                subject: "Hello".into(),
                body: EmailBody::Alternative {
                    text: "plain part".into(),
                    html: "<p>html part</p>".into(),
                },
                reply_to: None,
                from_name: None,
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("plain part"));
        assert!(formatted.contains("<p>html part</p>"));
    }

    fn from() -> EmailAddress {
        "portfolio@example.com".parse().unwrap()
    }
}
