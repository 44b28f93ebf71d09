//! Navigation shell state: the active page, the host initialization flag and
//! the loaded template collection.

use crate::error::StoreError;
use crate::model::template::TemplateRecord;

/// Heading shown at the top of the sidebar.
pub const APP_TITLE: &str = "Document Templates";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Dashboard,
    #[default]
    Templates,
    Admins,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Templates, Page::Admins];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Templates => "Templates",
            Page::Admins => "Admins",
        }
    }

    /// Subtitle shown under the page heading.
    pub fn description(self) -> &'static str {
        match self {
            Page::Dashboard => "Overview and key metrics will appear here.",
            Page::Templates => "Manage your document checklist templates here.",
            Page::Admins => "Manage admin users and permissions here.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shell {
    page: Page,
    initialized: bool,
    templates: Option<Vec<TemplateRecord>>,
    load_error: Option<String>,
}

impl Shell {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn navigate(&mut self, page: Page) -> bool {
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Whether the host signalled that data calls may start.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Records the host's page-load signal. Returns `true` only the first
    /// time, which is when the initial load must start.
    pub fn mark_initialized(&mut self) -> bool {
        !std::mem::replace(&mut self.initialized, true)
    }

    /// `None` until the first load finished.
    pub fn templates(&self) -> Option<&[TemplateRecord]> {
        self.templates.as_deref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// A failed reload keeps the previously loaded collection.
    pub fn templates_loaded(&mut self, result: Result<Vec<TemplateRecord>, StoreError>) {
        match result {
            Ok(templates) => {
                self.templates = Some(templates);
                self.load_error = None;
            }
            Err(e) => {
                log::error!("failed to load templates: {}", e);
                self.load_error = Some(format!("Templates could not be loaded: {}", e));
            }
        }
    }
}
