// path constants
pub const PATH_SEPARATOR: char = '/';
pub const DEFAULT_FIELD_SEPARATOR: &str = ".";

// record constants
pub const DEFAULT_ID_FIELD: &str = "id";
pub const DEFAULT_TIMESTAMP_FIELD: &str = "lut";

// auto id constants
pub const AUTO_ID_LENGTH: usize = 20;
pub const AUTO_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
