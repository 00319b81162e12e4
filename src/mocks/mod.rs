//! Mock implementations for testing.
//!
//! Provides an in-memory [`TemplateRenderer`] that records every call.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::rendering::{Layout, RenderError, TemplateRenderer};

/// Placeholder in a layout template replaced by the rendered body.
pub const INNER_CONTENT: &str = "{{inner_content}}";

/// A recorded render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    /// View passed to the renderer.
    pub view: String,
    /// Template file passed to the renderer.
    pub template: String,
    /// Layout passed to the renderer.
    pub layout: Option<Layout>,
}

/// In-memory renderer keyed by `(view, template)`.
///
/// Templates substitute `{{key}}` with the matching top-level assign. When a
/// layout is given, the layout template must also be registered and its
/// `{{inner_content}}` placeholder receives the rendered body.
#[derive(Debug, Default)]
pub struct StaticRenderer {
    templates: HashMap<(String, String), String>,
    calls: Mutex<Vec<RenderCall>>,
}

impl StaticRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template.
    pub fn with_template(
        mut self,
        view: impl Into<String>,
        template: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.templates
            .insert((view.into(), template.into()), source.into());
        self
    }

    /// Returns the recorded calls.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lookup(&self, view: &str, template: &str) -> Result<&str, RenderError> {
        self.templates
            .get(&(view.to_string(), template.to_string()))
            .map(String::as_str)
            .ok_or_else(|| RenderError::TemplateNotFound {
                template: format!("{}/{}", view, template),
            })
    }
}

fn substitute(source: &str, assigns: &Value) -> String {
    let Some(map) = assigns.as_object() else {
        return source.to_string();
    };
    map.iter().fold(source.to_string(), |acc, (key, value)| {
        let replacement = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        acc.replace(&format!("{{{{{}}}}}", key), &replacement)
    })
}

impl TemplateRenderer for StaticRenderer {
    fn render(
        &self,
        view: &str,
        template: &str,
        assigns: &Value,
        layout: Option<&Layout>,
    ) -> Result<String, RenderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RenderCall {
                view: view.to_string(),
                template: template.to_string(),
                layout: layout.cloned(),
            });

        let body = substitute(self.lookup(view, template)?, assigns);
        match layout {
            Some(layout) => {
                let wrapper = substitute(self.lookup(&layout.view, &layout.template)?, assigns);
                Ok(wrapper.replace(INNER_CONTENT, &body))
            }
            None => Ok(body),
        }
    }
}
