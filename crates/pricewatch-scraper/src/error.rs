use thiserror::Error;

/// Faults raised by a navigable-document capability.
///
/// These are the "unexpected fault" class: the extraction pipeline catches
/// them at its boundary and converts the invocation to a skip, never letting
/// them abort sibling invocations.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("document evaluation failed for {selector}: {reason}")]
    Evaluation { selector: String, reason: String },
}
