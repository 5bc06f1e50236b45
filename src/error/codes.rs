/// Error code registry for skupair
///
/// Error codes are organized by category:
/// - 1000-1999: Read errors (row source)
/// - 2000-2999: Write errors (row sink)
/// - 3000-3999: Configuration errors
/// - 4000-4999: Range errors (requested more pairs than exist)
/// - 5000-5999: Grouping errors (order rows not contiguous)
pub struct ErrorCode;

impl ErrorCode {
    // Read errors (1000-1999)
    pub const READ_GENERIC: u16 = 1000;
    pub const READ_NOT_FOUND: u16 = 1001;
    pub const READ_PERMISSION_DENIED: u16 = 1002;
    pub const READ_PARSE_ERROR: u16 = 1003;
    pub const READ_MALFORMED_ROW: u16 = 1004;

    // Write errors (2000-2999)
    pub const WRITE_GENERIC: u16 = 2000;
    pub const WRITE_CREATE_FAILED: u16 = 2001;
    pub const WRITE_ROW_FAILED: u16 = 2002;
    pub const WRITE_PERSIST_FAILED: u16 = 2003;
    pub const WRITE_SERIALIZATION_ERROR: u16 = 2004;

    // Configuration errors (3000-3999)
    pub const CONFIG_GENERIC: u16 = 3000;
    pub const CONFIG_NOT_FOUND: u16 = 3001;
    pub const CONFIG_INVALID_TOML: u16 = 3002;
    pub const CONFIG_INVALID_VALUE: u16 = 3003;

    // Range errors (4000-4999)
    pub const RANGE_TOTAL_EXCEEDS_PAIRS: u16 = 4000;

    // Grouping errors (5000-5999)
    pub const GROUPING_NOT_CONTIGUOUS: u16 = 5000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic read error",
        1001 => "Input file not found",
        1002 => "Permission denied reading input",
        1003 => "Input could not be parsed",
        1004 => "Input row has fewer than two cells",

        2000 => "Generic write error",
        2001 => "Output file could not be created",
        2002 => "Output row could not be written",
        2003 => "Output file could not be persisted",
        2004 => "Output could not be serialized",

        3000 => "Generic configuration error",
        3001 => "Configuration file not found",
        3002 => "Invalid TOML syntax in configuration",
        3003 => "Invalid value in configuration",

        4000 => "Requested more pairs than the input produced",

        5000 => "Order rows are not grouped contiguously",

        _ => "Unknown error code",
    }
}
