//! Interface and constructor-shim emission.

use eyre::{Result, eyre};
use mimicry_core::Emitter;
use mimicry_ir::{MethodSig, TypeRecord};

use crate::templates::{self, bulk_replace};

/// Emit the component's capability-set trait, the delegating implementation,
/// and the `new` shim.
///
/// The trait lands in the resolved interface file; the implementation and
/// shim always land in the file declaring the component, so the conversion
/// constructor stays in scope unqualified.
pub fn emit_interface(emitter: &mut Emitter, record: &TypeRecord) -> Result<()> {
    let (generic_short, generic_long) = record.generics.generics(false);
    let options = &record.options;

    let methods = record
        .methods
        .iter()
        .map(trait_method)
        .collect::<Vec<_>>()
        .join("\n");
    let trait_text = bulk_replace(
        templates::INTERFACE,
        &[
            ("InterfaceName", options.interface_name.as_str()),
            ("GenericLong", &generic_long),
            ("Methods", &methods),
        ],
    );
    emitter.write_generated(&options.interface_file, &record.required_imports, &trait_text)?;

    // Qualify the trait when it was emitted into another package.
    let interface_path = if options.interface_package != record.package_name {
        format!("{}::{}", options.interface_package, options.interface_name)
    } else {
        options.interface_name.clone()
    };

    let impl_methods = record
        .methods
        .iter()
        .map(impl_method)
        .collect::<Vec<_>>()
        .join("\n");
    let impl_text = bulk_replace(
        templates::IMPL,
        &[
            ("Interface", interface_path.as_str()),
            ("TypeName", &record.name),
            ("GenericShort", &generic_short),
            ("GenericLong", &generic_long),
            ("Methods", &impl_methods),
        ],
    );

    let constructor = record
        .constructor
        .as_ref()
        .ok_or_else(|| eyre!("unresolved record {} reached emission", record.name))?;
    let new_text = bulk_replace(
        templates::NEW,
        &[
            ("Interface", interface_path.as_str()),
            ("Params", &constructor.params_type),
            ("Convert", &constructor.fn_name),
            ("GenericShort", &generic_short),
            ("GenericLong", &generic_long),
        ],
    );

    let shim = format!("{impl_text}{new_text}");
    emitter.write_generated(&record.source_file, &record.required_imports, &shim)
}

fn method_pairs(method: &MethodSig) -> [(&'static str, String); 4] {
    let args = method.args.as_args(false);
    let args = if args.is_empty() {
        args
    } else {
        format!(", {args}")
    };
    [
        ("Method", method.name.clone()),
        ("Receiver", method.receiver_token().to_string()),
        ("Args", args),
        ("Returns", method.returns.return_clause()),
    ]
}

fn trait_method(method: &MethodSig) -> String {
    let pairs = method_pairs(method);
    let pairs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
    bulk_replace(templates::METHOD, &pairs)
}

fn impl_method(method: &MethodSig) -> String {
    let pairs = method_pairs(method);
    let mut pairs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let short = method.args.as_params();
    pairs.push(("ArgsShort", &short));
    bulk_replace(templates::IMPL_METHOD, &pairs)
}
