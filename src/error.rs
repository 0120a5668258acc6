use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[display(fmt = "Malformed payload at `{}`: {}", path, reason)]
    MalformedPayload { path: String, reason: String },
    #[display(fmt = "Notification can only be compared with another notification")]
    InvalidComparison,
}

impl ObjectError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPayload { path: path.into(), reason: reason.into() }
    }
}

impl std::error::Error for ObjectError {
    fn description(&self) -> &str {
        match self {
            Self::MalformedPayload { .. } => "Required key is absent or has the wrong shape",
            Self::InvalidComparison => "Compared a notification with a non-notification value",
        }
    }
}

impl From<serde_json::Error> for ObjectError {
    fn from(value: serde_json::Error) -> Self {
        // serde_json reports the offending key inside the message
        ObjectError::malformed("$", value.to_string())
    }
}
