use std::collections::BTreeMap;

use crate::model::choice::Choice;
use crate::model::requirement::Requirement;

/// Form inputs that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    TemplateName,
    ModuleName,
    PasswordField,
    WorkdriveFolder,
    /// Shared by all requirement name inputs.
    FieldNames,
}

impl FormField {
    pub fn key(self) -> &'static str {
        match self {
            FormField::TemplateName => "templateName",
            FormField::ModuleName => "moduleName",
            FormField::PasswordField => "passwordField",
            FormField::WorkdriveFolder => "workdriveFolder",
            FormField::FieldNames => "fieldNames",
        }
    }

    fn message(self) -> &'static str {
        match self {
            FormField::TemplateName => "Template name is required",
            FormField::ModuleName => "Module is required",
            FormField::PasswordField => "Password field is required",
            FormField::WorkdriveFolder => "Workdrive folder ID field is required",
            FormField::FieldNames => "Every document needs a name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    fn flag(&mut self, field: FormField) {
        self.0.insert(field, field.message());
    }
}

/// Checks a form and returns every rule it breaks.
pub fn validate(
    template_name: &str,
    module: Option<&Choice>,
    password_field: Option<&Choice>,
    folder_field: Option<&Choice>,
    requirements: &[Requirement],
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if template_name.trim().is_empty() {
        errors.flag(FormField::TemplateName);
    }
    if module.is_none_or(Choice::is_blank) {
        errors.flag(FormField::ModuleName);
    }
    if password_field.is_none_or(Choice::is_blank) {
        errors.flag(FormField::PasswordField);
    }
    if folder_field.is_none_or(Choice::is_blank) {
        errors.flag(FormField::WorkdriveFolder);
    }
    if !requirements.iter().all(Requirement::has_name) {
        errors.flag(FormField::FieldNames);
    }
    errors
}
