//! # rusty-field-rules
//!
//! Field Rule Evaluator for form pages: each rule reads one or more fields through a
//! host-provided accessor, checks a predicate, and on failure reports a message to a
//! host-provided notifier. Every rule returns a [`Verdict`] carrying the pass/fail
//! flag together with the message and the field it targets.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_field_rules::{Evaluator, LengthBounds, MemoryHost};
//!
//! let host = MemoryHost::new()
//!     .with_value("P1_PASSWORD", "Abcdef1!")
//!     .with_value("P1_CONFIRM", "Abcdef1?");
//!
//! let eval = Evaluator::new(&host, &host);
//! assert!(eval.password_strength("P1_PASSWORD").is_pass());
//! assert!(eval.length("P1_PASSWORD", LengthBounds::new(8, 64)).is_pass());
//!
//! let verdict = eval.fields_match("P1_PASSWORD", "P1_CONFIRM", None);
//! assert!(!verdict.is_pass());
//! assert_eq!(verdict.target.as_ref().map(|f| f.as_str()), Some("P1_CONFIRM"));
//! ```
//!
//! ## Architecture
//!
//! - [`host`] - the two capabilities a page must provide ([`FieldAccessor`], [`Notifier`])
//! - [`evaluator`] - one operation per rule kind
//! - [`rules`] - declarative [`RuleSpec`] lists loaded from TOML or JSON
//! - [`config`] - messages, default allow-lists and display behaviour
//! - [`memory`] - an in-memory host for tests and snapshot evaluation
//!
//! The predicates themselves live in `rusty-field-rules-core` and are re-exported as
//! [`predicates`].

pub mod config;
pub mod evaluator;
pub mod field;
pub mod host;
pub mod memory;
pub mod rules;
pub mod verdict;

pub use rusty_field_rules_core as predicates;

pub use config::EvaluatorConfig;
pub use evaluator::{Evaluator, LengthBounds};
pub use field::{FieldRef, FileSelection};
pub use host::{FieldAccessor, Notifier};
pub use memory::{HostSnapshot, MemoryHost, Notification};
pub use rules::{RuleSet, RuleSpec};
pub use verdict::{ValidationFailure, Verdict};
