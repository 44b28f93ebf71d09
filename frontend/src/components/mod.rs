pub mod modal;
pub mod placeholder;
pub mod sidebar;
pub mod template_editor;
pub mod templates;
