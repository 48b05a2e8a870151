//! Source-tree walker and IR accumulator.
//!
//! This crate turns a directory tree of annotated source into the resolved
//! [`TypeRecord`](mimicry_ir::TypeRecord) set the code generator consumes:
//!
//! 1. [`Parser::parse`] walks every package directory, parses each file and
//!    folds struct, impl and use declarations into a shared record map.
//! 2. [`Parser::resolve`] drops records never claimed by a
//!    `generate::components` directive, validates structural invariants and
//!    fills unset options from convention defaults.
//!
//! All failures are fatal to the run and surface as [`Error`] diagnostics.

mod directives;
mod error;
mod fields;
mod parser;
mod resolve;
mod source;

pub use directives::{parse_directives, parse_tags};
pub use error::{Error, Result};
pub use fields::{clean_type, split_grouped};
pub use parser::Parser;
pub use source::{SourceFile, doc_text};
