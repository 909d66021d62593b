//! The search results component.

use minijinja::{context, AutoEscape, Environment, Value};
use serde::Serialize;

use crate::error::RenderError;

/// Per-result template used when none is configured.
pub const DEFAULT_ITEM_TEMPLATE: &str = "<p>{{ title }}</p>";

/// Message shown when a query matches nothing.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "Sorry no search results found";

const ITEM_TEMPLATE: &str = "result-item";
const LIST_TEMPLATE: &str = "results-list";

const LIST_SOURCE: &str = r##"<ul id="static-search-results">
{%- for item in items %}
  <li class="result-item">{{ item }}</li>
{%- else %}
  <li><p id="no-results-found">{{ message|escape }}</p></li>
{%- endfor %}
{%- if show_logo %}
  <li id="static-search-logo"><p>Search provided by <a href="#">static search</a></p></li>
{%- endif %}
</ul>"##;

/// Renders matched records into the results list.
///
/// Each record is rendered with the item template, record fields available as
/// variables. Field values are inserted as they are, so marker markup such as
/// `<mark>` reaches the page intact. The no-results message is escaped.
///
/// # Example
///
/// ```
/// use glean_core::Record;
/// use glean_render::ResultsRenderer;
///
/// let renderer = ResultsRenderer::builder()
///     .item_template(r#"<a href="{{ url }}">{{ title }}</a>"#)
///     .show_logo(false)
///     .build()
///     .unwrap();
///
/// let records = vec![Record::new().with("title", "Eleventy").with("url", "/e/")];
/// let html = renderer.render(&records).unwrap();
/// assert!(html.contains(r#"<li class="result-item"><a href="/e/">Eleventy</a></li>"#));
/// ```
pub struct ResultsRenderer {
    env: Environment<'static>,
    no_results_message: String,
    show_logo: bool,
}

/// Builder for [`ResultsRenderer`].
#[derive(Debug, Clone)]
pub struct ResultsRendererBuilder {
    item_template: String,
    no_results_message: String,
    show_logo: bool,
}

impl Default for ResultsRendererBuilder {
    fn default() -> Self {
        Self {
            item_template: DEFAULT_ITEM_TEMPLATE.to_string(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            show_logo: true,
        }
    }
}

impl ResultsRendererBuilder {
    /// Template rendered once per matched record.
    pub fn item_template(mut self, source: impl Into<String>) -> Self {
        self.item_template = source.into();
        self
    }

    pub fn no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Append the "Search provided by" footer item.
    pub fn show_logo(mut self, show: bool) -> Self {
        self.show_logo = show;
        self
    }

    /// Compiles the templates.
    ///
    /// Fails with [`RenderError::TemplateError`] if the item template does not
    /// parse.
    pub fn build(self) -> Result<ResultsRenderer, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(LIST_TEMPLATE, LIST_SOURCE)?;
        env.add_template_owned(ITEM_TEMPLATE, self.item_template)?;

        Ok(ResultsRenderer {
            env,
            no_results_message: self.no_results_message,
            show_logo: self.show_logo,
        })
    }
}

impl ResultsRenderer {
    pub fn builder() -> ResultsRendererBuilder {
        ResultsRendererBuilder::default()
    }

    pub fn no_results_message(&self) -> &str {
        &self.no_results_message
    }

    pub fn shows_logo(&self) -> bool {
        self.show_logo
    }

    /// Renders one record with the item template.
    pub fn render_item<T: Serialize + ?Sized>(&self, item: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(ITEM_TEMPLATE)?;
        Ok(tmpl.render(Value::from_serialize(item))?)
    }

    /// Renders the whole results list.
    ///
    /// An empty slice renders the no-results item instead of result items.
    pub fn render<T: Serialize>(&self, items: &[T]) -> Result<String, RenderError> {
        let rendered = items
            .iter()
            .map(|item| self.render_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(items = rendered.len(), "rendering search results");

        let list = self.env.get_template(LIST_TEMPLATE)?;
        Ok(list.render(context! {
            items => rendered,
            message => self.no_results_message.as_str(),
            show_logo => self.show_logo,
        })?)
    }
}

impl std::fmt::Debug for ResultsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultsRenderer")
            .field("no_results_message", &self.no_results_message)
            .field("show_logo", &self.show_logo)
            .finish()
    }
}
