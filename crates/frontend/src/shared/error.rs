use thiserror::Error;

/// Failure while starting the widget.
///
/// Any of these replaces the whole widget with a single error card.
/// Image load failures are not listed here: they only hide the map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("cannot resolve assets base from {page_url}: {reason}")]
    Locate { page_url: String, reason: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Fetch { status: u16 },
    #[error("{0}")]
    Parse(String),
}

impl WidgetError {
    /// Text shown inside the widget container
    pub fn user_message(&self) -> String {
        format!("Failed to load PFT data ({}).", self)
    }
}

impl From<contracts::domain::pft::DatasetError> for WidgetError {
    fn from(err: contracts::domain::pft::DatasetError) -> Self {
        WidgetError::Parse(err.to_string())
    }
}
