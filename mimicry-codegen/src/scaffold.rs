//! Test-scaffold emission.

use eyre::{Result, eyre};
use mimicry_core::Emitter;
use mimicry_ir::TypeRecord;

use crate::templates::{self, bulk_replace};

/// Emit the test skeleton beside the component: a parameter-initializer
/// stub, the mocks holder, a builder wiring both, and one expectation-chain
/// accessor per dependency field.
///
/// The file name ends in `_test.rs`, which keeps it out of later walks.
pub fn emit_scaffold(emitter: &mut Emitter, record: &TypeRecord) -> Result<()> {
    let options = &record.options;
    let constructor = record
        .constructor
        .as_ref()
        .ok_or_else(|| eyre!("unresolved record {} reached emission", record.name))?;

    // Black-box scaffolds address the component through its package.
    let params_path = if options.blackbox {
        format!("{}::{}", record.package_name, constructor.params_type)
    } else {
        constructor.params_type.clone()
    };
    let interface_path = if options.blackbox || options.interface_package != record.package_name {
        format!("{}::{}", options.interface_package, options.interface_name)
    } else {
        options.interface_name.clone()
    };
    let component_path = if options.blackbox {
        format!("{}::", record.package_name)
    } else {
        String::new()
    };

    let mut text = bulk_replace(templates::INIT_PARAMS, &[("ParamsPath", params_path.as_str())]);

    let mut mock_fields = Vec::new();
    let mut mock_inits = Vec::new();
    let mut accessors = String::new();
    for field in record.dependencies() {
        mock_fields.push(format!(
            "    pub {}: {}::{},",
            field.name, field.mock_pkg, field.mock_type
        ));
        mock_inits.push(format!(
            "        {}: {}::{}(),",
            field.name, field.mock_pkg, field.mock_new
        ));
        accessors.push_str(&bulk_replace(
            templates::GET_MOCK_FIELD,
            &[
                ("FieldName", field.name.as_str()),
                ("MockPackage", field.mock_pkg.as_str()),
                ("MockType", field.mock_type.as_str()),
            ],
        ));
    }

    text.push_str(&bulk_replace(
        templates::MOCKS_STRUCT,
        &[("MockFields", mock_fields.join("\n").as_str())],
    ));
    text.push_str(&bulk_replace(
        templates::BUILD_MOCKS,
        &[
            ("InterfacePath", interface_path.as_str()),
            ("ComponentPath", component_path.as_str()),
            ("MockInits", mock_inits.join("\n").as_str()),
        ],
    ));
    text.push_str(&accessors);

    let stem = options.mock_file.trim_end_matches(".rs");
    let path = record.package_folder.join(format!("{stem}_test.rs"));

    let mut imports = record.required_imports.clone();
    imports.insert("mimicry_harness as harness".to_string());
    emitter.write_generated(&path, &imports, &text)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mimicry_ir::{ConstructorRef, Field};
    use tempfile::TempDir;

    use super::*;

    fn helper_field() -> Field {
        Field {
            name: "helper".to_string(),
            ty: "sub::Helper".to_string(),
            mock_pkg: "sub_mocks".to_string(),
            mock_new: "NewHelper".to_string(),
            mock_type: "Helper".to_string(),
        }
    }

    fn widget_record(dir: &TempDir) -> TypeRecord {
        let mut record = TypeRecord::new("Widget");
        record.package_name = "widgets".to_string();
        record.package_folder = dir.path().to_path_buf();
        record.constructor = Some(ConstructorRef {
            params_type: "WidgetParams".to_string(),
            fn_name: "convert".to_string(),
            file: dir.path().join("widget.rs"),
        });
        record.fields = mimicry_ir::FieldList(vec![
            helper_field(),
            Field::new("threshold", "usize"),
        ]);
        record.options.interface_name = "Chancer".to_string();
        record.options.interface_package = "widgets".to_string();
        record.options.mock_file = "chancer.rs".to_string();
        record
    }

    #[test]
    fn test_scaffold_shapes() {
        let dir = TempDir::new().unwrap();
        let record = widget_record(&dir);

        let mut emitter = Emitter::new();
        emit_scaffold(&mut emitter, &record).unwrap();

        let text = fs::read_to_string(dir.path().join("chancer_test.rs")).unwrap();
        assert!(text.contains("use mimicry_harness as harness;"));
        assert!(text.contains("fn init_params() -> WidgetParams {"));
        assert!(text.contains("    pub helper: sub_mocks::Helper,"));
        // Plain fields never become mock slots.
        assert!(!text.contains("threshold"));
        assert!(text.contains("fn build_mocks() -> (impl Chancer, Mocks) {"));
        assert!(text.contains("        helper: sub_mocks::NewHelper(),"));
        assert!(text.contains("    (new(params), mocks)"));
        assert!(text.contains("fn mock_helper() -> sub_mocks::HelperExpecterChain<Mocks> {"));
        assert!(text.contains("sub_mocks::expecter_chain(harness::fetch(|m: &mut Mocks| &mut m.helper))"));
    }

    #[test]
    fn test_blackbox_scaffold_qualifies_through_the_package() {
        let dir = TempDir::new().unwrap();
        let mut record = widget_record(&dir);
        record.options.blackbox = true;

        let mut emitter = Emitter::new();
        emit_scaffold(&mut emitter, &record).unwrap();

        let text = fs::read_to_string(dir.path().join("chancer_test.rs")).unwrap();
        assert!(text.contains("fn init_params() -> widgets::WidgetParams {"));
        assert!(text.contains("fn build_mocks() -> (impl widgets::Chancer, Mocks) {"));
        assert!(text.contains("    (widgets::new(params), mocks)"));
    }
}
