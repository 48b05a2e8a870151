//! Source text indexing.
//!
//! A [`SourceFile`] pairs a parsed syntax tree with the exact original file
//! text. Fragments are always extracted by slicing the original buffer at a
//! node's byte span, never re-printed from the tree, so original formatting
//! and comments survive verbatim in everything the generator copies out.

use std::{fs, path::PathBuf};

use syn::spanned::Spanned;

use crate::error::{Error, Result};

/// A parsed source file plus its raw text.
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub ast: syn::File,
}

impl SourceFile {
    /// Read and parse a file. I/O and syntax failures are fatal to the run.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|e| Error::io(e, &path))?;
        let ast = syn::parse_file(&text).map_err(|e| Error::parse(e, &text, &path))?;
        Ok(Self { path, text, ast })
    }

    /// The literal substring spanning `node`, unmodified.
    pub fn extract<T: Spanned>(&self, node: &T) -> &str {
        let range = node.span().byte_range();
        &self.text[range]
    }
}

/// Concatenate the doc-comment lines attached to an item.
pub fn doc_text(attrs: &[syn::Attribute]) -> String {
    let mut out = String::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let syn::Expr::Lit(expr) = &nv.value {
                if let syn::Lit::Str(lit) = &expr.lit {
                    out.push_str(&lit.value());
                    out.push('\n');
                }
            }
        }
    }
    out
}
