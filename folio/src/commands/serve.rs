use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use folio_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use folio_email_contracts::EmailService;
use folio_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let contact = ContactFeatureServiceImpl::new(
        email.clone(),
        TemplateServiceImpl::new(),
        ContactFeatureConfig {
            email: Arc::new(config.contact.email.clone()),
        },
    );

    let health = HealthFeatureServiceImpl::new(
        email,
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    RestServer::new(health, contact)
        .serve(config.http.host, config.http.port)
        .await
}
