//! Presentation logic of the template list: columns, cell formatting and the
//! delete confirmation flow.

use chrono::DateTime;

use crate::error::StoreError;
use crate::model::template::{fields, TemplateRecord};

/// Shown for absent cells.
pub const PLACEHOLDER: &str = "—";

/// Shown when there is nothing to list (or nothing loaded yet).
pub const EMPTY_MESSAGE: &str = "No Records Found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub key: &'static str,
}

pub const COLUMNS: [Column; 6] = [
    Column { label: "Name", key: fields::NAME },
    Column { label: "Module", key: fields::MODULE },
    Column { label: "Status", key: fields::STATUS },
    Column { label: "Password Field", key: fields::PASSWORD_FIELD },
    Column { label: "Workdrive Folder ID Field", key: fields::FOLDER_FIELD },
    Column { label: "Modified Time", key: fields::MODIFIED_TIME },
];

/// Columns rendered after the data columns (the row actions).
pub const ACTION_COLUMNS: usize = 1;

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableBody<'a> {
    Rows(&'a [TemplateRecord]),
    /// A single row with `message` spanning `colspan` columns.
    Empty {
        message: &'static str,
        colspan: usize,
    },
}

/// Rows to render for `templates`, which is `None` until the first load.
pub fn table_body(templates: Option<&[TemplateRecord]>) -> TableBody<'_> {
    match templates {
        Some(records) if !records.is_empty() => TableBody::Rows(records),
        _ => TableBody::Empty {
            message: EMPTY_MESSAGE,
            colspan: COLUMNS.len() + ACTION_COLUMNS,
        },
    }
}

/// Cell text for `column` of `record`.
pub fn format_cell(record: &TemplateRecord, column: &Column) -> String {
    match record.text(column.key) {
        Some(raw) if column.key == fields::MODIFIED_TIME => format_modified_time(&raw),
        Some(text) => text,
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats a host timestamp as `01 May 2024, 10:20 am`, keeping the offset
/// the host sent (the CRM user's time zone). Unparsable input is returned as is.
pub fn format_modified_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time.format("%d %b %Y, %I:%M %P").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// State of the delete confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfirmation {
    target: Option<TemplateRecord>,
    busy: bool,
    error: Option<String>,
}

impl DeleteConfirmation {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn target(&self) -> Option<&TemplateRecord> {
        self.target.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Name shown in the confirmation prompt.
    pub fn target_name(&self) -> String {
        self.target
            .as_ref()
            .and_then(TemplateRecord::name)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Asks for confirmation before deleting `record`. Ignored while a delete
    /// is in flight.
    pub fn request(&mut self, record: TemplateRecord) {
        if self.busy {
            return;
        }
        self.target = Some(record);
        self.error = None;
    }

    /// Closes the dialog unless a delete is in flight.
    pub fn dismiss(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.target = None;
        self.error = None;
        true
    }

    /// Starts the delete; returns the record id to delete. `None` when nothing
    /// is selected or a delete is already running.
    pub fn confirm(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let id = self.target.as_ref()?.id.clone();
        self.busy = true;
        self.error = None;
        Some(id)
    }

    /// Outcome of the delete call. Returns `true` when the list must be
    /// refreshed.
    pub fn finished(&mut self, result: Result<(), StoreError>) -> bool {
        if !self.busy {
            return false;
        }
        self.busy = false;
        match result {
            Ok(()) => {
                self.target = None;
                true
            }
            Err(e) => {
                log::error!("failed to delete template: {}", e);
                self.error = Some(format!("The template could not be deleted: {}", e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> TemplateRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_cells_render_placeholder() {
        let rec = record(json!({"id": "1", "Name": "Visa", "Status": null}));

        let cells: Vec<String> = COLUMNS.iter().map(|c| format_cell(&rec, c)).collect();

        assert_eq!(cells, vec!["Visa", "—", "—", "—", "—", "—"]);
    }

    #[test]
    fn unloaded_and_empty_collections_show_one_spanning_row() {
        let expected = TableBody::Empty {
            message: "No Records Found.",
            colspan: 7,
        };

        assert_eq!(table_body(None), expected);
        assert_eq!(table_body(Some(&[][..])), expected);
    }

    #[test]
    fn loaded_collection_renders_its_records() {
        let records = vec![
            record(json!({"id": "1", "Name": "Visa"})),
            record(json!({"id": "2", "Name": "Loan"})),
        ];

        match table_body(Some(records.as_slice())) {
            TableBody::Rows(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1].id, "2");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn modified_time_is_formatted_in_host_offset() {
        assert_eq!(
            format_modified_time("2024-05-01T22:05:09+02:00"),
            "01 May 2024, 10:05 pm"
        );
        assert_eq!(
            format_modified_time("2024-11-30T09:15:00-05:00"),
            "30 Nov 2024, 09:15 am"
        );
        assert_eq!(format_modified_time("yesterday"), "yesterday");
    }

    #[test]
    fn confirmed_delete_refreshes_exactly_once() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(record(json!({"id": "42", "Name": "Visa"})));
        assert_eq!(dialog.target_name(), "Visa");

        assert_eq!(dialog.confirm(), Some("42".to_string()));
        assert!(dialog.is_busy());
        assert_eq!(dialog.confirm(), None);
        assert!(!dialog.dismiss());

        assert!(dialog.finished(Ok(())));
        assert!(!dialog.is_open());
        assert!(!dialog.finished(Ok(())));
    }

    #[test]
    fn failed_delete_keeps_dialog_open_with_error() {
        let mut dialog = DeleteConfirmation::default();
        dialog.request(record(json!({"id": "42"})));
        dialog.confirm();

        let refresh = dialog.finished(Err(StoreError::Host("network".into())));

        assert!(!refresh);
        assert!(dialog.is_open());
        assert!(!dialog.is_busy());
        assert!(dialog.error().unwrap().contains("network"));
        assert!(dialog.dismiss());
        assert!(!dialog.is_open());
    }
}
