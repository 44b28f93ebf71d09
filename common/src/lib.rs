//! Domain crate of the document checklist templates widget.
//!
//! Everything that does not need a browser lives here: the template model,
//! the editor state machine, list formatting, navigation state, the host
//! capability traits and the template service built on them.

pub mod config;
pub mod editor;
pub mod error;
pub mod listing;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod service;
pub mod store;
