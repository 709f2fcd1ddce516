//! # fieldcheck Validator
//!
//! Validation engine for fieldcheck rule sets. This crate checks plain
//! key-value input against a [`RuleSet`](fieldcheck_core::RuleSet):
//!
//! - Optional coercion of input values to each rule's type
//! - Type checks for `integer`, `number`, `string` and `boolean`
//! - `required`, `min`, `max` and `pattern` constraints
//! - Localized, per-field overridable error messages
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{FieldError, RuleBuilder, RuleSetBuilder};
//! use fieldcheck_validator::{Record, Validator, Value};
//!
//! let rules = RuleSetBuilder::new()
//!     .field("name", RuleBuilder::string().min(2).max(10).build())
//!     .field("age", RuleBuilder::integer().min(22).max(100).optional().build())
//!     .build();
//!
//! let mut input = Record::new();
//! input.insert("name".to_string(), Value::from("lord of the sea"));
//! input.insert("age".to_string(), Value::from(17));
//!
//! let errors = Validator::new()
//!     .validate(&mut input, &rules, None)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(
//!     errors,
//!     vec![
//!         FieldError::new("name", "name length must be less than 10"),
//!         FieldError::new("age", "age must be greater than 22"),
//!     ]
//! );
//! ```

pub mod checkers;
pub mod coerce;
mod engine;
mod error;
pub mod resolver;
pub mod translations;
mod value;

pub use engine::*;
pub use error::*;
pub use resolver::{FieldContext, MessageResolver};
pub use translations::{TemplateKey, Translations};
pub use value::*;
