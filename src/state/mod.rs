/// State management module
///
/// This module handles all collage state, including:
/// - Shared data structures (data.rs)
/// - The document and its copy-on-write collections (document.rs)
/// - Display references for uploaded blobs (display.rs)
/// - Layout settings (settings.rs)
/// - Filter presets (filter.rs)
/// - Grid drag-and-drop reordering (reorder.rs)
/// - Layer editing and dragging (edit.rs)

pub mod data;
pub mod display;
pub mod document;
pub mod edit;
pub mod filter;
pub mod reorder;
pub mod settings;
