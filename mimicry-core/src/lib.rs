//! Core utilities shared across the mimicry workspace: string casing helpers
//! and the generated-file writer with its marker/import handling.

mod file;
mod utils;

pub use file::{Emitter, GENERATED_MARKER, write_file};
pub use utils::{to_camel, to_pascal_case, to_title};
