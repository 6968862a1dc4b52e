pub mod init;
pub mod patterns;
pub mod scan;

pub use init::init_command;
pub use patterns::patterns_command;
pub use scan::scan_command;
