// src/config/consts.rs

// Input
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FILES: &[&str] = &["data1.html", "data2.html", "data3.html"];
pub const INPUT_EXTS: &[&str] = &["html", "htm"];

// Report markup
pub const TABLE_CLASSES: &[&str] = &["table", "table-bordered", "table-center"];
pub const HIGHLIGHT_BGCOLOR: &str = "FFA0A0";

// Augmentation
pub const HEADER_LABEL: &str = "C";
pub const HEADER_FILLER: &str = "-";

// Result paragraph
pub const FALLBACK_RESULT: &str = "The last row contains negative elements: \
    the objective function is unbounded, there is no optimal solution.";

// Export
pub const DEFAULT_OUT_DIR: &str = "extracted_tables";
pub const TABLE_FILE_INFIX: &str = "_table_";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
