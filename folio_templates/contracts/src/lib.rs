use folio_assets::templates;
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// A template and the data required to render it.
///
/// Templates whose name ends in `.html` are rendered with HTML escaping
/// enabled for every interpolated value.
pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", templates::BASE_HTML);

macro_rules! templates {
    ($( $ident:ident ( $name:literal, $source:expr ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $name;
                const TEMPLATE: &'static str = $source;
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactMessageHtmlTemplate("contact_message.html", templates::CONTACT_MESSAGE_HTML),
    ContactMessageTextTemplate("contact_message.txt", templates::CONTACT_MESSAGE_TXT),
}

/// HTML body of the email relayed for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageHtmlTemplate {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Plain text body of the email relayed for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageTextTemplate {
    pub name: String,
    pub email: String,
    pub message: String,
}
