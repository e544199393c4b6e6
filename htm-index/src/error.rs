use htm_core::GeometryError;
use thiserror::Error;

pub type IndexResult<T> = Result<T, IndexError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexError {
    #[error("Geometry error: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Invalid mesh id '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("Depth {depth} out of range (maximum {max})")]
    DepthOutOfRange { depth: u32, max: u32 },

    #[error("{operation} called before Cover::run")]
    NotRun { operation: String },

    #[error("Markup {markup} cannot be selected from a cover")]
    UnsupportedMarkup { markup: String },
}

impl IndexError {
    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn depth_out_of_range(depth: u32, max: u32) -> Self {
        Self::DepthOutOfRange { depth, max }
    }

    pub fn not_run(operation: impl Into<String>) -> Self {
        Self::NotRun {
            operation: operation.into(),
        }
    }

    pub fn unsupported_markup(markup: impl std::fmt::Display) -> Self {
        Self::UnsupportedMarkup {
            markup: markup.to_string(),
        }
    }
}
