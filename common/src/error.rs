use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    /// The key matched neither a chapter number nor a slug.
    #[error("no chapter matches '{0}' (try `tour list`)")]
    UnknownChapter(String),
    #[error("no chapters were selected")]
    EmptySelection,
    /// A chapter could not finish its demonstration.
    #[error("chapter '{chapter}' failed: {reason}")]
    Chapter {
        chapter: &'static str,
        reason: String,
    },
}

impl TourError {
    pub fn chapter(chapter: &'static str, reason: impl ToString) -> Self {
        Self::Chapter {
            chapter,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
