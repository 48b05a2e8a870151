//! Full-pipeline scenario: walk, resolve and emit for one annotated package.
//!
//! The external mock tool is not exercised here; the stages around it are.

use std::{fs, path::Path};

use mimicry_codegen::{emit_interface, emit_scaffold, extend_mock};
use mimicry_core::Emitter;
use mimicry_parser::Parser;
use tempfile::TempDir;

// The component struct is lowercase by convention; the title-cased default
// interface name is then collision-free.
const WIDGET: &str = r#"
/// generate::components
pub struct widget {
    /// pkg:"-"
    helper: sub::Helper,
    threshold: usize,
}

pub struct Params {
    pub threshold: usize,
}

impl Params {
    pub fn convert(self) -> widget {
        widget {
            helper: sub::Helper::new(),
            threshold: self.threshold,
        }
    }
}

impl widget {
    pub fn chance(&self, s: Source) -> bool {
        self.helper.roll(s) < self.threshold
    }
}
"#;

fn generate(root: &Path) {
    let mut parser = Parser::new(root);
    parser.parse().unwrap();
    let records = parser.resolve().unwrap();

    let mut emitter = Emitter::new();
    for record in &records {
        emit_interface(&mut emitter, record).unwrap();
    }
    for record in &records {
        extend_mock(&mut emitter, record).unwrap();
    }
    for record in &records {
        emit_scaffold(&mut emitter, record).unwrap();
    }
}

#[test]
fn test_widget_scenario_produces_all_artifacts() {
    let dir = TempDir::new().unwrap();
    let package = dir.path().join("widgets");
    fs::create_dir_all(&package).unwrap();
    fs::write(package.join("widget.rs"), WIDGET).unwrap();

    generate(dir.path());

    // Interface and shim land in the declaring file.
    let source = fs::read_to_string(package.join("widget.rs")).unwrap();
    assert!(source.contains("pub trait Widget {"));
    assert!(source.contains("    fn chance(&self, s: Source) -> bool;"));
    assert!(source.contains("impl Widget for widget {"));
    assert!(source.contains("pub fn new(p: Params) -> impl Widget {"));

    // Extended mock carries the chance expectation chain and combinators.
    let mock = fs::read_to_string(
        package.join("widgets_mocks").join("widget.rs"),
    )
    .unwrap();
    assert!(mock.contains("pub struct WidgetExpecterChain<M> {"));
    assert!(mock.contains("pub fn chance(self, s: harness::Arg) -> WidgetChanceChain<M> {"));
    assert!(mock.contains("pub fn run(self,"));
    assert!(mock.contains("pub fn returning(self,"));
    assert!(mock.contains("pub fn run_and_return(self,"));

    // Scaffold exposes a mock accessor for the helper dependency.
    let scaffold = fs::read_to_string(package.join("widget_test.rs")).unwrap();
    assert!(scaffold.contains("fn mock_helper() -> sub_mocks::HelperExpecterChain<Mocks> {"));
    assert!(scaffold.contains("fn build_mocks() -> (impl Widget, Mocks) {"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let package = dir.path().join("widgets");
    fs::create_dir_all(&package).unwrap();
    fs::write(package.join("widget.rs"), WIDGET).unwrap();

    generate(dir.path());
    let source = fs::read_to_string(package.join("widget.rs")).unwrap();
    let scaffold = fs::read_to_string(package.join("widget_test.rs")).unwrap();

    generate(dir.path());
    assert_eq!(
        fs::read_to_string(package.join("widget.rs")).unwrap(),
        source
    );
    assert_eq!(
        fs::read_to_string(package.join("widget_test.rs")).unwrap(),
        scaffold
    );
}

#[test]
fn test_missing_constructor_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let package = dir.path().join("widgets");
    fs::create_dir_all(&package).unwrap();
    fs::write(
        package.join("widget.rs"),
        "/// generate::components\npub struct Widget {}\n",
    )
    .unwrap();

    let mut parser = Parser::new(dir.path());
    parser.parse().unwrap();
    assert!(parser.resolve().is_err());

    // Resolution failed before emission, so the tree is untouched.
    assert!(!package.join("widget_test.rs").exists());
    assert!(!package.join("widgets_mocks").exists());
    let source = fs::read_to_string(package.join("widget.rs")).unwrap();
    assert!(!source.contains("DO NOT EDIT"));
}
