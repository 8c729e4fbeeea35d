//! Profile Projector — pure mapping from an upstream profile record to the
//! render-ready page model and the structured-data object.
//!
//! Everything here is stateless and side-effect free: the same record and
//! options always project to the same output, so each helper can be computed
//! in any order within a request.

pub mod format;
pub mod page_model;
pub mod sections;
pub mod structured_data;

pub use page_model::PageModel;
pub use structured_data::{to_structured_data, StructuredData};

/// Threshold for showing the Languages section. Both policies shipped in
/// earlier page variants; the divergence is now an explicit option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageVisibility {
    /// Show the section for one or more languages.
    Any,
    /// Hide the section unless more than one language is listed.
    #[default]
    Several,
}

/// Configuration for the projection rules that differed between observed
/// page variants. One unified projector, divergences as options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectorOptions {
    /// Show the about header block even when `summary` is absent.
    pub always_show_about: bool,
    pub language_visibility: LanguageVisibility,
    /// Render proficiency meter bars, not just the text label.
    pub show_proficiency_meter: bool,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        ProjectorOptions {
            always_show_about: false,
            language_visibility: LanguageVisibility::Several,
            show_proficiency_meter: true,
        }
    }
}
