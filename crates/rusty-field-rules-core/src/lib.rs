//! Field Rules Core
//!
//! Pure Rust predicates behind every field rule. Nothing here touches a host page:
//! each function takes the raw value(s) and answers a question about them.
//! Used by the rule evaluator and by the WASM bindings.

pub mod date;
pub mod email;
pub mod file;
pub mod markup;
pub mod numeric;
pub mod password;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all predicates
pub use date::*;
pub use email::*;
pub use file::*;
pub use markup::*;
pub use numeric::*;
pub use password::*;
pub use string::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
