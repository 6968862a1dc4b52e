pub mod formatter;

pub use formatter::{format_bindings, print_scan_report};
