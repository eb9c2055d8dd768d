use anyhow::bail;
use clap::Subcommand;
use folio_client::{
    form::{ContactForm, FormField, SubmitResult},
    ContactClient,
};
use folio_models::contact::ContactReason;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a message through a running relay
    Send {
        /// Base url of the relay, e.g. http://localhost:8000
        #[arg(long)]
        endpoint: Url,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// Reason for contact: job, project, question or other
        #[arg(long, default_value_t)]
        reason: ContactReason,
    },
}

impl ContactCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                endpoint,
                name,
                email,
                subject,
                message,
                reason,
            } => send(endpoint, name, email, subject, message, reason).await,
        }
    }
}

async fn send(
    endpoint: Url,
    name: String,
    email: String,
    subject: String,
    message: String,
    reason: ContactReason,
) -> anyhow::Result<()> {
    let client = ContactClient::new(&endpoint)?;

    let mut form = ContactForm::new();
    form.set_field(FormField::Name, name);
    form.set_field(FormField::Email, email);
    form.set_field(FormField::Subject, subject);
    form.set_field(FormField::Message, message);
    form.set_reason(reason);

    match form.submit(&client).await {
        SubmitResult::Sent => {
            println!("Message sent! Thank you for reaching out.");
            Ok(())
        }
        SubmitResult::Invalid => {
            for (field, error) in form.errors() {
                eprintln!("{field:?}: {error}");
            }
            bail!("Invalid form input");
        }
        SubmitResult::Failed { alert } => bail!("{alert}"),
        SubmitResult::InFlight => unreachable!(),
    }
}
