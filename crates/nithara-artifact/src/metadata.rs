//! Share-sheet metadata

use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Report";
const DEFAULT_TEXT: &str = "Calculation Report";

/// Title and description displayed by share surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub title: String,
    pub description: Option<String>,
}

impl ExportMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Title as shown on a share sheet. Blank titles fall back to a
    /// generic label rather than an empty dialog header.
    pub fn share_title(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            DEFAULT_TITLE
        } else {
            trimmed
        }
    }

    /// Body text for the share sheet.
    pub fn share_text(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_TEXT,
        }
    }
}

impl Default for ExportMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
