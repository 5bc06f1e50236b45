use super::{ErrorCode, SkuPairError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    fn to_read_error(self, code: u16, path: &Path) -> Result<T, SkuPairError>;
    fn to_write_error(self, code: u16, path: &Path) -> Result<T, SkuPairError>;
    fn to_config_error(self, message: impl Into<String>) -> Result<T, SkuPairError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_read_error(self, code: u16, path: &Path) -> Result<T, SkuPairError> {
        self.map_err(|e| {
            SkuPairError::read_with_code(code, describe(code), Some(path.to_path_buf()))
                .with_source(e)
        })
    }

    fn to_write_error(self, code: u16, path: &Path) -> Result<T, SkuPairError> {
        self.map_err(|e| {
            SkuPairError::write_with_code(code, describe(code), Some(path.to_path_buf()))
                .with_source(e)
        })
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, SkuPairError> {
        self.map_err(|e| {
            SkuPairError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, message).with_source(e)
        })
    }
}

fn describe(code: u16) -> &'static str {
    super::describe_error_code(code)
}

/// Map an I/O failure opening the input to the matching read code
pub fn read_code_for(err: &std::io::Error) -> u16 {
    match err.kind() {
        std::io::ErrorKind::NotFound => ErrorCode::READ_NOT_FOUND,
        std::io::ErrorKind::PermissionDenied => ErrorCode::READ_PERMISSION_DENIED,
        _ => ErrorCode::READ_GENERIC,
    }
}
