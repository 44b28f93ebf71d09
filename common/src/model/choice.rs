use serde::{Deserialize, Serialize};

/// A selectable `(label, api identifier)` pair offered by the metadata store.
///
/// Modules and module fields both surface as `Choice`s in the editor. Only the
/// pair the user picks is persisted (inside the template snapshot); the option
/// lists themselves are fetched again on every edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Human readable label, e.g. `"Deals"` or `"Portal Password"`.
    #[serde(default)]
    pub label: String,
    /// API identifier used by the host, e.g. `"Deals"` or `"Portal_Password"`.
    #[serde(default)]
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Builds a choice from an api identifier alone, reusing it as the label.
    pub fn from_api(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Returns `options` without the entry whose api identifier equals `excluded`.
///
/// Used to keep the password and folder selectors mutually exclusive: each one
/// offers every text field except the one chosen in the other selector.
pub fn exclude<'a>(options: &'a [Choice], excluded: Option<&Choice>) -> Vec<&'a Choice> {
    options
        .iter()
        .filter(|option| excluded.is_none_or(|other| other.value != option.value))
        .collect()
}
