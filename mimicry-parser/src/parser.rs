//! Directory walker and IR accumulator.
//!
//! Walks every package directory under a root, parses each source file once,
//! and folds declarations into a shared map of [`TypeRecord`]s keyed by type
//! name. Records are created on demand by whichever declaration is seen
//! first, so a method `impl` block may land before the struct it extends.
//! Only the `generate::components` directive marks a record for generation;
//! unclaimed records are dropped at resolution.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use mimicry_ir::{ConstructorRef, MethodSig, TypeRecord};
use walkdir::{DirEntry, WalkDir};

use crate::{
    directives::parse_directives,
    error::{Error, Result},
    fields::{clean_type, generic_params, normalize_method, normalize_named_fields},
    source::{SourceFile, doc_text},
};

/// The name a parameter-conversion constructor must carry.
const CONSTRUCTOR_FN: &str = "convert";

/// Walk context for one file, threaded explicitly through every handler.
struct FileContext<'a> {
    package_name: &'a str,
    package_folder: &'a Path,
}

pub struct Parser {
    root: PathBuf,
    pub(crate) records: IndexMap<String, TypeRecord>,
    /// Type names declared per package folder, for qualifying emitted
    /// fragments that cross package boundaries.
    pub(crate) package_decls: HashMap<PathBuf, BTreeSet<String>>,
}

impl Parser {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            records: IndexMap::new(),
            package_decls: HashMap::new(),
        }
    }

    /// Walk the whole tree under the root, depth-first in name order, and
    /// accumulate records from every package directory.
    pub fn parse(&mut self) -> Result<()> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !skip_entry(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                Error::io(e.into(), &path)
            })?;
            if entry.file_type().is_dir() {
                self.parse_dir(entry.path())?;
            }
        }
        Ok(())
    }

    /// Parse every source file directly inside one package directory.
    fn parse_dir(&mut self, dir: &Path) -> Result<()> {
        let package_folder = std::path::absolute(dir).map_err(|e| Error::io(e, dir))?;
        let package_name = package_folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ctx = FileContext {
            package_name: &package_name,
            package_folder: &package_folder,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(e, dir))? {
            let entry = entry.map_err(|e| Error::io(e, dir))?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if path.is_file() && name.ends_with(".rs") && !name.ends_with("_test.rs") {
                files.push(path);
            }
        }
        files.sort();

        for file in files {
            self.parse_file(&file, &ctx)?;
        }
        Ok(())
    }

    fn parse_file(&mut self, path: &Path, ctx: &FileContext<'_>) -> Result<()> {
        let src = SourceFile::read(path)?;

        let mut imports = Vec::new();
        let mut touched = BTreeSet::new();

        for item in &src.ast.items {
            match item {
                syn::Item::Use(item_use) => {
                    let text = src.extract(item_use);
                    let text = text.strip_prefix("use ").unwrap_or(text);
                    let text = text.strip_suffix(';').unwrap_or(text);
                    imports.push(text.trim().to_string());
                }
                syn::Item::Struct(item) => {
                    self.declare(ctx, item.ident.to_string());
                    self.handle_struct(&src, item, ctx, &mut touched)?;
                }
                syn::Item::Enum(item) => {
                    self.declare(ctx, item.ident.to_string());
                }
                syn::Item::Type(item) => {
                    self.declare(ctx, item.ident.to_string());
                }
                syn::Item::Impl(item) => {
                    self.handle_impl(&src, item, &mut touched)?;
                }
                _ => {}
            }
        }

        for name in touched {
            if let Some(record) = self.records.get_mut(&name) {
                record.required_imports.extend(imports.iter().cloned());
            }
        }
        Ok(())
    }

    fn declare(&mut self, ctx: &FileContext<'_>, name: String) {
        self.package_decls
            .entry(ctx.package_folder.to_path_buf())
            .or_default()
            .insert(name);
    }

    /// A struct declaration claims its record only when the generation
    /// directive appears in its leading documentation.
    fn handle_struct(
        &mut self,
        src: &SourceFile,
        item: &syn::ItemStruct,
        ctx: &FileContext<'_>,
        touched: &mut BTreeSet<String>,
    ) -> Result<()> {
        let directives = parse_directives(&doc_text(&item.attrs));
        if directives.get("generate").map(String::as_str) != Some("components") {
            return Ok(());
        }

        let name = item.ident.to_string();
        let fields = match &item.fields {
            syn::Fields::Named(named) => normalize_named_fields(src, named)?,
            _ => Default::default(),
        };
        let generics = generic_params(src, &item.generics);

        let record = self
            .records
            .entry(name.clone())
            .or_insert_with(|| TypeRecord::new(&name));
        record.claim(ctx.package_name, ctx.package_folder, &src.path);
        record.fields = fields;
        record.generics = generics;

        let options = &mut record.options;
        for (key, value) in &directives {
            match key.as_str() {
                "interfaceName" => options.interface_name = value.clone(),
                "interfaceFolder" => options.interface_folder = PathBuf::from(value),
                "interfaceFile" => options.interface_file = PathBuf::from(value),
                "mockFolder" => options.mock_folder = PathBuf::from(value),
                "mockFile" => options.mock_file = value.clone(),
                "config" => options.config_path = value.clone(),
                "blackbox" => options.blackbox = value == "true",
                _ => {}
            }
        }

        touched.insert(name);
        Ok(())
    }

    /// Inherent impl blocks contribute exported methods, and the one
    /// conversion method links a parameter struct to its component.
    fn handle_impl(
        &mut self,
        src: &SourceFile,
        item: &syn::ItemImpl,
        touched: &mut BTreeSet<String>,
    ) -> Result<()> {
        if item.trait_.is_some() {
            return Ok(());
        }
        let self_ty_text = src.extract(&*item.self_ty).to_string();
        let self_name = clean_type(&self_ty_text).to_string();

        for impl_item in &item.items {
            let syn::ImplItem::Fn(func) = impl_item else {
                continue;
            };
            if !matches!(func.vis, syn::Visibility::Public(_)) {
                continue;
            }

            let method = normalize_method(src, &func.sig)?;
            if let Some(target) = constructor_target(&func.sig, &method, &self_name) {
                let record = self
                    .records
                    .entry(target.clone())
                    .or_insert_with(|| TypeRecord::new(&target));
                record.constructor = Some(ConstructorRef {
                    params_type: self_ty_text.clone(),
                    fn_name: CONSTRUCTOR_FN.to_string(),
                    file: src.path.clone(),
                });
                touched.insert(target);
            } else {
                self.records
                    .entry(self_name.clone())
                    .or_insert_with(|| TypeRecord::new(&self_name))
                    .methods
                    .push(method);
                touched.insert(self_name.clone());
            }
        }
        Ok(())
    }
}

/// A `convert` method consuming `self` and returning exactly one type other
/// than its own is the parameter-conversion constructor for that type.
fn constructor_target(sig: &syn::Signature, method: &MethodSig, self_name: &str) -> Option<String> {
    if sig.ident != CONSTRUCTOR_FN {
        return None;
    }
    let receiver = sig.receiver()?;
    if receiver.reference.is_some() {
        return None;
    }
    if method.returns.len() != 1 {
        return None;
    }
    let target = clean_type(&method.returns.0[0].ty);
    (target != self_name).then(|| target.to_string())
}

fn skip_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir()
        && (name == "tests" || name == "target" || name.ends_with("_test"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn parse_tree(files: &[(&str, &str)]) -> Parser {
        let dir = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let mut parser = Parser::new(dir.path());
        parser.parse().unwrap();
        // TempDir is dropped here; records keep owned paths.
        parser
    }

    const WIDGET: &str = r#"
/// A widget.
///
/// generate::components
pub struct Widget {
    /// pkg:"-"
    helper: sub::Helper,
    count: usize,
}

pub struct WidgetParams {
    pub count: usize,
}

impl WidgetParams {
    pub fn convert(self) -> Widget {
        Widget { helper: sub::Helper::new(), count: self.count }
    }
}

impl Widget {
    pub fn chance(&self, s: Source) -> bool {
        s.roll() < self.count
    }

    fn hidden(&self) {}
}
"#;

    #[test]
    fn test_directive_claims_record() {
        let parser = parse_tree(&[("widgets/widget.rs", WIDGET)]);
        let record = &parser.records["Widget"];

        assert!(record.options.generate);
        assert_eq!(record.package_name, "widgets");
        assert_eq!(record.fields.0[0].mock_pkg, "sub_mocks");
        assert_eq!(record.methods.len(), 1);
        assert_eq!(record.methods[0].name, "chance");
    }

    #[test]
    fn test_constructor_linked_not_treated_as_method() {
        let parser = parse_tree(&[("widgets/widget.rs", WIDGET)]);
        let record = &parser.records["Widget"];

        let ctor = record.constructor.as_ref().unwrap();
        assert_eq!(ctor.params_type, "WidgetParams");
        assert_eq!(ctor.fn_name, "convert");
        assert!(!parser.records.contains_key("WidgetParams"));
    }

    #[test]
    fn test_undirected_struct_not_claimed() {
        let parser = parse_tree(&[(
            "widgets/plain.rs",
            "pub struct Plain { n: usize }\nimpl Plain { pub fn n(&self) -> usize { self.n } }\n",
        )]);
        // Methods create the record on demand, but nothing claims it.
        assert!(!parser.records["Plain"].options.generate);
    }

    #[test]
    fn test_methods_merge_across_files_in_order() {
        let parser = parse_tree(&[
            ("widgets/widget.rs", WIDGET),
            (
                "widgets/widget_extra.rs",
                "impl Widget {\n    pub fn reset(&mut self) {}\n}\n",
            ),
        ]);
        let names: Vec<_> = parser.records["Widget"]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["chance", "reset"]);
    }

    #[test]
    fn test_test_files_and_dirs_skipped() {
        let parser = parse_tree(&[
            ("widgets/widget.rs", WIDGET),
            (
                "widgets/widget_test.rs",
                "impl Widget { pub fn only_in_tests(&self) {} }\n",
            ),
            (
                "widgets_test/other.rs",
                "/// generate::components\npub struct Ghost {}\n",
            ),
            (
                "tests/integration.rs",
                "/// generate::components\npub struct Ghost2 {}\n",
            ),
        ]);
        assert_eq!(parser.records["Widget"].methods.len(), 1);
        assert!(!parser.records.contains_key("Ghost"));
        assert!(!parser.records.contains_key("Ghost2"));
    }

    #[test]
    fn test_imports_attached_to_touched_records() {
        let parser = parse_tree(&[(
            "widgets/widget.rs",
            &format!("use std::fmt::Debug;\n{WIDGET}"),
        )]);
        assert!(
            parser.records["Widget"]
                .required_imports
                .contains("std::fmt::Debug")
        );
    }

    #[test]
    fn test_package_declarations_collected() {
        let parser = parse_tree(&[("widgets/widget.rs", WIDGET)]);
        let decls = parser
            .package_decls
            .values()
            .find(|set| set.contains("Widget"))
            .unwrap();
        assert!(decls.contains("WidgetParams"));
    }
}
