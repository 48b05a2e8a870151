//! Expectation-chain extension of generated mock files.

use eyre::Result;
use mimicry_core::{Emitter, to_pascal_case};
use mimicry_ir::{TypeRecord, replace_scoped_names};

use crate::templates::{self, bulk_replace};

/// Append the expecter-chain block and one chain block per method, in
/// declaration order, to the component's generated mock file.
pub fn extend_mock(emitter: &mut Emitter, record: &TypeRecord) -> Result<()> {
    let (generic_short, _) = record.generics.generics(false);
    let (generic_short_append, generic_long_append) = record.generics.generics(true);
    let interface_name = record.options.interface_name.as_str();

    let mut text = bulk_replace(
        templates::EXPECTER_CHAIN,
        &[
            ("InterfaceName", interface_name),
            ("GenericShort", generic_short.as_str()),
            ("GenericShortAppend", generic_short_append.as_str()),
            ("GenericLongAppend", generic_long_append.as_str()),
        ],
    );

    for method in &record.methods {
        let method_type = to_pascal_case(&method.name);

        // Closure signatures cross into the mock package, so package-local
        // type names must be qualified.
        let arg_types = qualify(&method.args.as_types(false), record);
        // The return clause already leads with a space; no padding needed.
        let returns_types = replace_scoped_names(
            &method.returns.return_clause(),
            &record.package_name,
            &record.scoped_names,
        );

        let args_short = method.args.as_params();
        let args_any = method.args.as_any();
        let args_short_pointer = method.args.add_pointers(&args_short, true);

        // Returns are unnamed in the IR; positional bindings keep the
        // combinator signatures valid.
        let returns = method.returns.indexed("r");
        let returns_args = qualify(&returns.as_args(false), record);
        let returns_short = returns.as_params();
        let pointer_args = returns.add_pointers(&returns.as_args(false), false);
        let returns_args_pointer = qualify(&pointer_args, record);
        let returns_short_pointer = returns.add_pointers(&returns_short, false);

        text.push_str(&bulk_replace(
            templates::CHAIN,
            &[
                ("InterfaceName", interface_name),
                ("MethodType", method_type.as_str()),
                ("Method", method.name.as_str()),
                ("ArgsAny", args_any.as_str()),
                ("ArgTypes", arg_types.as_str()),
                ("ArgsShort", args_short.as_str()),
                ("ArgsShortPointer", args_short_pointer.as_str()),
                ("ReturnsArgs", returns_args.as_str()),
                ("ReturnsShort", returns_short.as_str()),
                ("ReturnsTypes", returns_types.as_str()),
                ("ReturnsArgsPointer", returns_args_pointer.as_str()),
                ("ReturnsShortPointer", returns_short_pointer.as_str()),
                ("GenericShort", generic_short.as_str()),
                ("GenericShortAppend", generic_short_append.as_str()),
                ("GenericLongAppend", generic_long_append.as_str()),
            ],
        ));
    }

    let mut imports = record.required_imports.clone();
    imports.insert("mimicry_harness as harness".to_string());

    let path = record.options.mock_folder.join(&record.options.mock_file);
    emitter.write_generated(&path, &imports, &text)
}

/// Qualify package-local names in a rendered fragment. Replacement keys off
/// a leading space, so pad and trim around it.
fn qualify(fragment: &str, record: &TypeRecord) -> String {
    let padded = format!(" {fragment}");
    replace_scoped_names(&padded, &record.package_name, &record.scoped_names)
        .trim_start()
        .to_string()
}
