use std::fmt;

/// Rejected geometry for an entity, structure or camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Width or height is zero or negative.
    NonPositiveSize { width: f32, height: f32 },
    /// A coordinate or size is NaN or infinite.
    NonFinite { x: f32, y: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonPositiveSize { width, height } => {
                write!(f, "size must be positive, got {width}x{height}")
            }
            GeometryError::NonFinite { x, y } => {
                write!(f, "value is not finite: ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors raised while loading a level description.
#[derive(Debug)]
pub enum LevelError {
    /// The document is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// A body in the level has unusable geometry.
    Geometry { what: String, source: GeometryError },
    /// A world or viewport setting is out of range.
    InvalidConfig(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Json(e) => write!(f, "level JSON error: {e}"),
            LevelError::Geometry { what, source } => write!(f, "{what}: {source}"),
            LevelError::InvalidConfig(msg) => write!(f, "invalid level config: {msg}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Json(e) => Some(e),
            LevelError::Geometry { source, .. } => Some(source),
            LevelError::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e)
    }
}
