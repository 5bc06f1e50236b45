use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::ErrorExt;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for skupair
///
/// Every variant is terminal for a run: the pipeline stops and nothing is
/// written to the destination.
#[derive(Error, Debug)]
pub enum SkuPairError {
    #[error("[E{code:04}] Read error: {message}")]
    Read {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Write error: {message}")]
    Write {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error(
        "[E{code:04}] Requested {requested} pairs but only {available} are available",
        code = ErrorCode::RANGE_TOTAL_EXCEEDS_PAIRS
    )]
    OutOfRange { requested: usize, available: usize },

    #[error(
        "[E{code:04}] Order '{order_id}' at row {row} was already seen at row {first_row}",
        code = ErrorCode::GROUPING_NOT_CONTIGUOUS
    )]
    Grouping {
        order_id: String,
        first_row: usize,
        row: usize,
    },
}

impl SkuPairError {
    /// Create a read error with default code
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            code: ErrorCode::READ_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a read error with specific code and path
    pub fn read_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Read {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a write error with default code
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            code: ErrorCode::WRITE_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a write error with specific code and path
    pub fn write_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Write {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OutOfRange {
            requested,
            available,
        }
    }

    /// Add a source error to this error
    ///
    /// Variants without a source slot are returned unchanged.
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Read { source: src, .. }
            | Self::Write { source: src, .. }
            | Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::OutOfRange { .. } | Self::Grouping { .. } => {}
        }
        self
    }

    /// Attach the file the error refers to
    pub fn with_path(mut self, file: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Read { path, .. } | Self::Write { path, .. } => {
                *path = Some(file.into());
            }
            _ => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Read { .. } => 3,
            Self::Write { .. } => 4,
            Self::OutOfRange { .. } => 5,
            Self::Grouping { .. } => 6,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Read { code, .. } | Self::Write { code, .. } | Self::Config { code, .. } => *code,
            Self::OutOfRange { .. } => ErrorCode::RANGE_TOTAL_EXCEEDS_PAIRS,
            Self::Grouping { .. } => ErrorCode::GROUPING_NOT_CONTIGUOUS,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { message, path, .. } => match path {
                Some(p) => format!("Could not read {}: {}", p.display(), message),
                None => format!("Could not read input: {}", message),
            },
            Self::Write { message, path, .. } => match path {
                Some(p) => format!("Could not write {}: {}", p.display(), message),
                None => format!("Could not write output: {}", message),
            },
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::OutOfRange {
                requested,
                available,
            } => format!(
                "Asked for the top {} pairs, but the input only produced {}. \
                 Lower the total or omit it to write up to the default 100.",
                requested, available
            ),
            Self::Grouping {
                order_id,
                first_row,
                row,
            } => format!(
                "Rows for order '{}' are not contiguous (rows {} and {}). \
                 Sort the input by order id first.",
                order_id, first_row, row
            ),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            out.push_str(&format!("\n  caused by: {}", cause));
            current = std::error::Error::source(cause);
        }
        out
    }
}

/// Type alias for Results using SkuPairError
pub type Result<T> = std::result::Result<T, SkuPairError>;

impl From<csv::Error> for SkuPairError {
    fn from(err: csv::Error) -> Self {
        let code = match err.kind() {
            csv::ErrorKind::Io(io) => helpers::read_code_for(io),
            _ => ErrorCode::READ_PARSE_ERROR,
        };
        SkuPairError::read_with_code(code, "Failed to parse tabular input", None).with_source(err)
    }
}

impl From<toml::de::Error> for SkuPairError {
    fn from(err: toml::de::Error) -> Self {
        SkuPairError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}
