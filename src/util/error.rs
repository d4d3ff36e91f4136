/// Error type for geokit-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeokitError {
    /// Latitude or longitude is outside the WGS84 range.
    ///
    /// The message lists every violated bound, separated by spaces.
    InvalidCoordinate(String),
    /// Failed to serialize bounding boxes to GeoJSON.
    SerializationError(String),
}

impl GeokitError {
    /// Returns a copy of this error with `context` prepended to its message.
    ///
    /// Used by [`distance`](crate::distance) to say which endpoint was rejected.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            GeokitError::InvalidCoordinate(msg) => {
                GeokitError::InvalidCoordinate(format!("{}: {}", context, msg))
            }
            GeokitError::SerializationError(msg) => {
                GeokitError::SerializationError(format!("{}: {}", context, msg))
            }
        }
    }

    /// The bare message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            GeokitError::InvalidCoordinate(msg) | GeokitError::SerializationError(msg) => msg,
        }
    }
}

impl std::fmt::Display for GeokitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeokitError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            GeokitError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GeokitError {}
