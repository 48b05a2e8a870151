//! The per-type generation record.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{Field, FieldList, GenOptions, MethodSig};

/// Explicit link from a component to its parameter-conversion constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRef {
    /// Verbatim self-type text of the `impl` block, e.g. `Params<T>`.
    pub params_type: String,
    /// The conversion method name (`convert` by convention).
    pub fn_name: String,
    /// File the constructor was declared in.
    pub file: PathBuf,
}

/// Everything the generator accumulates for one directive-annotated type.
///
/// Created the first time any declaration mentions the type name, mutated as
/// further files of the same package are walked, then resolved exactly once
/// and read-only for all emission stages.
#[derive(Debug, Clone, Default)]
pub struct TypeRecord {
    pub name: String,
    pub package_name: String,
    pub package_folder: PathBuf,
    /// File carrying the directive-annotated struct declaration.
    pub source_file: PathBuf,

    pub constructor: Option<ConstructorRef>,
    /// The struct's own fields; those with mock hints are dependency slots.
    pub fields: FieldList,
    /// Exported methods in declaration order.
    pub methods: Vec<MethodSig>,
    pub generics: FieldList,

    /// Import paths the generated sections must carry.
    pub required_imports: BTreeSet<String>,
    /// Package-local type names that need qualification when emitted into
    /// another package.
    pub scoped_names: BTreeSet<String>,

    pub options: GenOptions,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Dependency slots: struct fields carrying a mock binding.
    pub fn dependencies(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.has_mock())
    }

    /// Whether the paired constructor was discovered during the walk.
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Record discovery metadata when the directive-annotated declaration is
    /// seen.
    pub fn claim(&mut self, package_name: &str, package_folder: &Path, source_file: &Path) {
        self.package_name = package_name.to_string();
        self.package_folder = package_folder.to_path_buf();
        self.source_file = source_file.to_path_buf();
        self.options.generate = true;
    }
}
