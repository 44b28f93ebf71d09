//! Document requirement rows embedded in a template.
//!
//! A `Requirement` describes one document an applicant has to upload: its
//! name, whether it is required, which file extensions are accepted and how
//! many copies may be uploaded. Rows only exist inside a template; their
//! identity is a per-session token used to address rows while editing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locally generated row identity. Regenerated every time a template is
/// loaded into the editor, so it is never meaningful across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequirementId(String);

impl RequirementId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn fixed(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a document must be provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Necessity {
    #[default]
    Required,
    Optional,
}

impl Necessity {
    pub const ALL: [Necessity; 2] = [Necessity::Required, Necessity::Optional];

    pub fn as_str(self) -> &'static str {
        match self {
            Necessity::Required => "Required",
            Necessity::Optional => "Optional",
        }
    }

    /// Lenient parse: anything but `"Optional"` reads as `Required`.
    pub fn parse_lenient(value: &str) -> Self {
        if value.eq_ignore_ascii_case("optional") {
            Necessity::Optional
        } else {
            Necessity::Required
        }
    }
}

/// File extension tags an upload slot can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "JPG")]
    Jpg,
    #[serde(rename = "JPEG")]
    Jpeg,
    #[serde(rename = "HEIC")]
    Heic,
    #[serde(rename = "WebP")]
    WebP,
    #[serde(rename = "GIF")]
    Gif,
    #[serde(rename = "TIFF")]
    Tiff,
    #[serde(rename = "DOC")]
    Doc,
    #[serde(rename = "DOCX")]
    Docx,
    #[serde(rename = "XLS")]
    Xls,
    #[serde(rename = "XLSX")]
    Xlsx,
    #[serde(rename = "PPT")]
    Ppt,
    #[serde(rename = "PPTX")]
    Pptx,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "CSV")]
    Csv,
}

impl FileType {
    /// The fixed vocabulary, in display order.
    pub const ALL: [FileType; 16] = [
        FileType::Pdf,
        FileType::Png,
        FileType::Jpg,
        FileType::Jpeg,
        FileType::Heic,
        FileType::WebP,
        FileType::Gif,
        FileType::Tiff,
        FileType::Doc,
        FileType::Docx,
        FileType::Xls,
        FileType::Xlsx,
        FileType::Ppt,
        FileType::Pptx,
        FileType::Txt,
        FileType::Csv,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Png => "PNG",
            FileType::Jpg => "JPG",
            FileType::Jpeg => "JPEG",
            FileType::Heic => "HEIC",
            FileType::WebP => "WebP",
            FileType::Gif => "GIF",
            FileType::Tiff => "TIFF",
            FileType::Doc => "DOC",
            FileType::Docx => "DOCX",
            FileType::Xls => "XLS",
            FileType::Xlsx => "XLSX",
            FileType::Ppt => "PPT",
            FileType::Pptx => "PPTX",
            FileType::Txt => "TXT",
            FileType::Csv => "CSV",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('.');
        FileType::ALL
            .into_iter()
            .find(|file_type| file_type.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown file type tag `{s}`"))
    }
}

/// One document row of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub id: RequirementId,
    pub name: String,
    pub checked: bool,
    pub necessity: Necessity,
    pub file_types: BTreeSet<FileType>,
    pub upload_count: u32,
}

impl Requirement {
    /// A fresh row with default values and a newly generated identity.
    pub fn new() -> Self {
        Self {
            id: RequirementId::generate(),
            name: String::new(),
            checked: true,
            necessity: Necessity::Required,
            file_types: BTreeSet::new(),
            upload_count: 1,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Applies a single attribute change. The identity is never touched.
    pub fn apply(&mut self, edit: RequirementEdit) {
        match edit {
            RequirementEdit::Name(name) => self.name = name,
            RequirementEdit::Checked(checked) => self.checked = checked,
            RequirementEdit::Necessity(necessity) => self.necessity = necessity,
            RequirementEdit::ToggleFileType(file_type) => {
                if !self.file_types.remove(&file_type) {
                    self.file_types.insert(file_type);
                }
            }
            RequirementEdit::FileTypes(file_types) => self.file_types = file_types,
            RequirementEdit::UploadCount(count) => self.upload_count = clamp_upload_count(count),
        }
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::new()
    }
}

/// Upload counts below one are raised to one.
pub fn clamp_upload_count(count: i64) -> u32 {
    count.clamp(1, u32::MAX as i64) as u32
}

/// A single in-place change to a requirement row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementEdit {
    Name(String),
    Checked(bool),
    Necessity(Necessity),
    ToggleFileType(FileType),
    FileTypes(BTreeSet<FileType>),
    UploadCount(i64),
}

impl RequirementEdit {
    pub fn touches_name(&self) -> bool {
        matches!(self, RequirementEdit::Name(_))
    }
}
