pub mod kind;
pub mod names;
pub mod table;

pub use kind::PatternKind;
pub use names::{extract_names, is_reserved};
pub use table::PatternTable;
