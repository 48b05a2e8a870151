//! Intermediate representation for the mimicry component generator.
//!
//! # Architecture
//!
//! ```text
//! source tree → mimicry-parser (walk + resolve) → mimicry-ir → mimicry-codegen
//! ```
//!
//! The parser accumulates one [`TypeRecord`] per directive-annotated struct
//! across the whole tree, resolves its [`GenOptions`], and hands the records
//! to the emitters read-only. The IR also carries the textual rendering
//! helpers ([`FieldList`]) the template substitution keys on, so that the
//! parser and the emitters agree on one representation of argument lists.

mod field;
mod method;
mod options;
mod record;

pub use field::{Field, FieldList, replace_scoped_names};
pub use method::MethodSig;
pub use options::GenOptions;
pub use record::{ConstructorRef, TypeRecord};
