use std::sync::Arc;

use folio_di::Build;
use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use folio_utils::trace_instrument;
use tera::Tera;

#[derive(Debug, Clone, Default, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        let (name, template) = BASE_TEMPLATE;
        tera.add_raw_template(name, template).unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    #[trace_instrument(skip_all, fields(template = T::NAME))]
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::{ContactMessageHtmlTemplate, ContactMessageTextTemplate};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> TemplateServiceImpl {
        TemplateServiceImpl {
            state: Default::default(),
        }
    }

    #[test]
    fn contact_message_html() {
        // Act
        let result = sut()
            .render(&ContactMessageHtmlTemplate {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "Hello".into(),
            })
            .unwrap();

        // Assert
        assert!(result.contains("<title>New message from Ana</title>"));
        assert!(result.contains("<p><b>Name:</b> Ana</p>"));
        assert!(result.contains("<p><b>Email:</b> ana@example.com</p>"));
        assert!(result.contains("<p><b>Message:</b><br/>Hello</p>"));
    }

    #[test]
    fn contact_message_html_escapes_markup() {
        // Act
        let result = sut()
            .render(&ContactMessageHtmlTemplate {
                name: "<i>Mallory</i>".into(),
                email: "mallory@example.com".into(),
                message: "<script>alert(1)</script>".into(),
            })
            .unwrap();

        // Assert
        assert!(!result.contains("<script>"));
        assert!(!result.contains("<i>Mallory</i>"));
        assert!(result.contains("&lt;script&gt;alert(1)"));
        assert!(result.contains("&lt;i&gt;Mallory"));
    }

    #[test]
    fn contact_message_html_keeps_line_breaks() {
        // Act
        let result = sut()
            .render(&ContactMessageHtmlTemplate {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "first\nsecond".into(),
            })
            .unwrap();

        // Assert
        assert!(result.contains("first<br>second"));
    }

    #[test]
    fn contact_message_text() {
        // Act
        let result = sut()
            .render(&ContactMessageTextTemplate {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "<b>Hello</b>".into(),
            })
            .unwrap();

        // Assert
        assert_eq!(
            result.trim_end(),
            "Name: Ana\nEmail: ana@example.com\n\nMessage:\n<b>Hello</b>"
        );
    }
}
