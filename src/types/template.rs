//! Template references accepted by `Email::put_template`.

use serde::{Deserialize, Serialize};

/// A reference to a server-stored template.
///
/// All variants normalize to the bare template identifier via
/// [`TemplateRef::into_id`]; the variant only records where the id came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateRef {
    /// A bare template identifier.
    Raw(String),
    /// A legacy (substitution-based) template.
    Legacy {
        /// Template identifier.
        id: String,
    },
    /// A dynamic (handlebars-based) template, ids usually start with `d-`.
    Dynamic {
        /// Template identifier.
        id: String,
    },
}

impl TemplateRef {
    /// Legacy template reference.
    pub fn legacy(id: impl Into<String>) -> Self {
        Self::Legacy { id: id.into() }
    }

    /// Dynamic template reference.
    pub fn dynamic(id: impl Into<String>) -> Self {
        Self::Dynamic { id: id.into() }
    }

    /// Borrow the template identifier.
    pub fn id(&self) -> &str {
        match self {
            TemplateRef::Raw(id) => id,
            TemplateRef::Legacy { id } | TemplateRef::Dynamic { id } => id,
        }
    }

    /// Normalize to the template identifier.
    pub fn into_id(self) -> String {
        match self {
            TemplateRef::Raw(id) => id,
            TemplateRef::Legacy { id } | TemplateRef::Dynamic { id } => id,
        }
    }
}

impl From<String> for TemplateRef {
    fn from(id: String) -> Self {
        Self::Raw(id)
    }
}

impl From<&str> for TemplateRef {
    fn from(id: &str) -> Self {
        Self::Raw(id.to_string())
    }
}
