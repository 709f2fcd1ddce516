//! # fieldcheck Core
//!
//! Core data structures and types for the fieldcheck validation engine.
//!
//! This crate provides the building blocks for declaring validation rules. A rule
//! set maps field names to rules; each rule names the expected type of a field
//! and the constraints the field's value must satisfy.
//!
//! ## Key Concepts
//!
//! - **Rule**: The validation contract for one field (type, `required`, bounds, pattern)
//! - **RuleSet**: Ordered mapping of field names to rules; order is validation order
//! - **MessageOverrides**: Per-field replacement templates for error messages
//! - **FieldError**: One reported validation failure
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{FieldType, RuleBuilder, RuleSetBuilder};
//!
//! let rules = RuleSetBuilder::new()
//!     .field("name", RuleBuilder::string().min(2).max(10).build())
//!     .field("age", RuleBuilder::integer().min(22).max(100).optional().build())
//!     .build();
//!
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules.get("age").map(|r| r.field_type()), Some(FieldType::Integer));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod messages;
pub mod outcome;
pub mod rule;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use messages::*;
pub use outcome::*;
pub use rule::*;
