//! Signature normalization.
//!
//! Converts raw struct fields and method signatures into the IR's uniform
//! [`FieldList`] form. Type text is always extracted verbatim (pointer,
//! reference and generic decorations included); [`clean_type`] strips the
//! leading decoration only for keying and comparison.

use std::path::Path;

use mimicry_ir::{Field, FieldList, MethodSig};

use crate::{
    directives::parse_tags,
    error::{Error, Result},
    source::SourceFile,
};

/// Strip a leading `&`/`&mut `/`*` and any generic suffix, for keying on the
/// "clean" type name.
pub fn clean_type(t: &str) -> &str {
    let t = t.trim();
    let t = match t.find('<') {
        Some(index) => &t[..index],
        None => t,
    };
    let t = t.strip_prefix("&mut ").unwrap_or(t);
    let t = t.strip_prefix('&').unwrap_or(t);
    let t = t.strip_prefix("*const ").unwrap_or(t);
    let t = t.strip_prefix("*mut ").unwrap_or(t);
    t.trim()
}

/// Split a grouped, parenthesized declaration body on its top-level commas
/// and classify each piece.
///
/// A piece of the shape `name: type` is a parameter; a bare piece in return
/// position synthesizes its own name from the type; a bare name in parameter
/// position reuses the nearest type to its right (a trailing type applies to
/// all preceding bare names, hence the right-to-left scan).
pub fn split_grouped(type_string: &str) -> FieldList {
    let flattened = type_string.replace('\n', " ");
    let pieces = split_top_level(&flattened);
    let is_return = !pieces.iter().any(|p| p.contains(": "));

    let mut fields: Vec<Field> = Vec::new();
    for piece in pieces.iter().rev() {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        if is_return {
            fields.insert(0, Field::new(piece, piece));
        } else if let Some((name, ty)) = piece.split_once(": ") {
            fields.insert(0, Field::new(name.trim(), ty.trim()));
        } else {
            let ty = fields.first().map(|f| f.ty.clone()).unwrap_or_default();
            fields.insert(0, Field::new(piece, ty));
        }
    }
    FieldList(fields)
}

/// Split on commas not nested inside `()`, `[]` or `<>`.
fn split_top_level(s: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in s.chars() {
        match c {
            '(' | '[' | '<' => depth += 1,
            ')' | ']' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    if !current.trim().is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Apply `pkg`/`new`/`type` tags found in a field's verbatim text, then run
/// auto-inference for `pkg:"-"`.
pub fn apply_mock_tags(field: &mut Field, raw_text: &str, file: &Path) -> Result<()> {
    let tags = parse_tags(raw_text);
    if let Some(pkg) = tags.get("pkg") {
        field.mock_pkg = pkg.clone();
    }
    if let Some(new) = tags.get("new") {
        field.mock_new = new.clone();
    }
    if let Some(ty) = tags.get("type") {
        field.mock_type = ty.clone();
    }

    if field.mock_pkg == "-" {
        let clean = clean_type(&field.ty);
        let mut parts = clean.splitn(2, "::");
        let package = parts.next().unwrap_or_default();
        let type_name = parts.next().unwrap_or_default();
        if package.is_empty() || type_name.is_empty() {
            return Err(Box::new(Error::MockInference {
                field: field.name.clone(),
                ty: field.ty.clone(),
                file: file.to_path_buf(),
            }));
        }
        field.mock_pkg = format!("{package}_mocks");
        field.mock_type = type_name.to_string();
        field.mock_new = format!("New{type_name}");
    }

    Ok(())
}

/// Normalize a struct's named fields, tags included.
pub fn normalize_named_fields(src: &SourceFile, fields: &syn::FieldsNamed) -> Result<FieldList> {
    let mut out = Vec::with_capacity(fields.named.len());
    for (index, raw) in fields.named.iter().enumerate() {
        let name = match &raw.ident {
            Some(ident) => ident.to_string(),
            None => format!("_a{index}"),
        };
        let mut field = Field::new(name, src.extract(&raw.ty));
        apply_mock_tags(&mut field, src.extract(raw), &src.path)?;
        out.push(field);
    }
    Ok(FieldList(out))
}

/// Normalize one method signature into the IR form.
pub fn normalize_method(src: &SourceFile, sig: &syn::Signature) -> Result<MethodSig> {
    let receiver = sig
        .receiver()
        .map(|r| Field::new("self", src.extract(r)))
        .unwrap_or_default();

    let mut args = Vec::new();
    let mut index = 0usize;
    for input in &sig.inputs {
        let syn::FnArg::Typed(pat_type) = input else {
            continue;
        };
        let name = match &*pat_type.pat {
            syn::Pat::Ident(pat) => pat.ident.to_string(),
            _ => format!("_a{index}"),
        };
        let mut field = Field::new(name, src.extract(&pat_type.ty));
        apply_mock_tags(&mut field, src.extract(pat_type), &src.path)?;
        args.push(field);
        index += 1;
    }

    Ok(MethodSig {
        name: sig.ident.to_string(),
        receiver,
        args: FieldList(args),
        returns: normalize_returns(src, sig),
    })
}

/// Normalize a return declaration. A non-empty tuple is the grouped, unnamed
/// form: its parenthesized text is re-split and each type synthesizes its own
/// field name.
pub fn normalize_returns(src: &SourceFile, sig: &syn::Signature) -> FieldList {
    match &sig.output {
        syn::ReturnType::Default => FieldList::default(),
        syn::ReturnType::Type(_, ty) => match &**ty {
            syn::Type::Tuple(tuple) if tuple.elems.is_empty() => FieldList::default(),
            syn::Type::Tuple(_) => {
                let text = src.extract(ty);
                let inner = text
                    .trim()
                    .strip_prefix('(')
                    .and_then(|t| t.strip_suffix(')'))
                    .unwrap_or(text);
                split_grouped(inner)
            }
            _ => {
                let text = src.extract(ty);
                FieldList(vec![Field::new(text, text)])
            }
        },
    }
}

/// Normalize generic type parameters to `name`/`bounds` fields. Lifetimes and
/// const parameters are not threaded through generated declarations.
pub fn generic_params(src: &SourceFile, generics: &syn::Generics) -> FieldList {
    let mut out = Vec::new();
    for param in &generics.params {
        if let syn::GenericParam::Type(ty_param) = param {
            let bounds = ty_param
                .bounds
                .iter()
                .map(|bound| src.extract(bound).to_string())
                .collect::<Vec<_>>()
                .join(" + ");
            out.push(Field::new(ty_param.ident.to_string(), bounds));
        }
    }
    FieldList(out)
}
