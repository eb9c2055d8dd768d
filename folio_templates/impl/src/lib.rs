use std::sync::Arc;

use folio_templates_contracts::{RenderedEmail, Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, html, text) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.html"), html).unwrap();
            tera.add_raw_template(&format!("{name}.txt"), text).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<RenderedEmail> {
        let context = tera::Context::from_serialize(template)?;

        Ok(RenderedEmail {
            html: self.state.0.render(&format!("{}.html", T::NAME), &context)?,
            text: self.state.0.render(&format!("{}.txt", T::NAME), &context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::ContactMessageTemplate;

    use super::*;

    #[test]
    fn contact_message() {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut
            .render(&ContactMessageTemplate {
                name: "Jane Doe".into(),
                email: "jane.doe@example.com".into(),
                subject: "Collaboration".into(),
                message: "Hello there!".into(),
            })
            .unwrap();

        // Assert
        assert!(result.html.contains("<strong>Name:</strong> Jane Doe"));
        assert!(result
            .html
            .contains("<a href=\"mailto:jane.doe@example.com\">jane.doe@example.com</a>"));
        assert!(result.html.contains("<strong>Subject:</strong> Collaboration"));
        assert!(result.html.contains("Hello there!"));
        assert!(result.text.contains("Name: Jane Doe"));
        assert!(result.text.contains("Email: jane.doe@example.com"));
        assert!(result.text.contains("Subject: Collaboration"));
        assert!(result.text.contains("Hello there!"));
    }

    #[test]
    fn contact_message_escapes_html() {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut
            .render(&ContactMessageTemplate {
                name: "<script>alert(1)</script>".into(),
                email: "jane.doe@example.com".into(),
                subject: "hi".into(),
                message: "a & b".into(),
            })
            .unwrap();

        // Assert
        assert!(!result.html.contains("<script>"));
        assert!(result.html.contains("&lt;script&gt;"));
        assert!(result.html.contains("a &amp; b"));
        // The plaintext part is not html and must stay verbatim.
        assert!(result.text.contains("a & b"));
    }
}
