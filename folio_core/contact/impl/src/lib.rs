use std::sync::Arc;

use folio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::{contact::ContactMessage, email_address::EmailAddress};
use folio_templates_contracts::{ContactMessageTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Destination mailbox for incoming contact messages.
    pub email: Arc<EmailAddress>,
}

impl<EmailS, TemplateS> ContactFeatureServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS, config: ContactFeatureConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactFeatureService for ContactFeatureServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let name = (*message.author.name).clone();

        let rendered = self.template.render(&ContactMessageTemplate {
            name: name.clone(),
            email: message.author.email.to_string(),
            subject: (*message.subject).clone(),
            message: (*message.content).clone(),
        })?;

        let email = Email {
            recipient: (*self.config.email).clone().into(),
            subject: format!("New contact from {}: {}", name, *message.subject),
            body: EmailBody::Alternative {
                text: rendered.text,
                html: rendered.html,
            },
            reply_to: Some(message.author.email.with_name(name.clone())),
            from_name: Some(format!("{name} via Contact Form")),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}
