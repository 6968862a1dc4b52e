pub mod binding;
pub mod origin;
pub mod position;
pub mod scope;

// Re-export commonly used types
pub use binding::Binding;
pub use origin::Origin;
pub use position::Position;
pub use scope::{Bindings, ScopeFrame};
