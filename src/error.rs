use thiserror::Error;

/// Failure causes for one identity generation attempt.
///
/// The adapter reports every cause to its caller as the single opaque
/// [`IdentityError::Generation`] variant; the concrete cause is logged at the
/// failure site and survives as `source()` for diagnostics.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation endpoint returned status {code}: {body}")]
    BadStatus { code: u16, body: String },

    #[error("model response contained no generated text")]
    EmptyResponse,

    #[error("no JSON object found in generated text: {preview}")]
    NoJsonObject { preview: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parsed JSON contains none of the expected identity keys")]
    UnusableRecord,

    #[error("unknown {kind} label: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("configuration error: {0}")]
    Config(String),

    /// The one failure callers of the adapter see, regardless of cause.
    #[error("could not generate identity")]
    Generation(#[source] Box<IdentityError>),
}

impl IdentityError {
    /// Create a non-success status error with a truncated body capture.
    pub fn bad_status(code: u16, body: &str) -> Self {
        Self::BadStatus {
            code,
            body: truncate_for_display(body, 500),
        }
    }

    /// Create an extraction error carrying a preview of the offending text.
    pub fn no_json_object(raw: &str) -> Self {
        Self::NoJsonObject {
            preview: truncate_for_display(raw, 200),
        }
    }

    /// Collapse any cause into the opaque generation failure.
    ///
    /// Already-collapsed errors pass through unchanged so the chain never
    /// nests two `Generation` layers.
    pub fn into_generation(self) -> Self {
        match self {
            already @ Self::Generation(_) => already,
            cause => Self::Generation(Box::new(cause)),
        }
    }
}

fn truncate_for_display(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        let mut end = max_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} total chars]", &text[..end], text.len())
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
