// Server defaults
pub const DEFAULT_SERVER_PORT: &str = "8080";
pub const DEFAULT_VERBOSITY: &str = "info";

// Storage ids are handed out sequentially by the in-memory store, starting here
pub const FIRST_STORAGE_ID: u64 = 1;
