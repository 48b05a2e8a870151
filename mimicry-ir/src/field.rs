//! Fields and ordered field lists.
//!
//! A [`Field`] is one parameter, return value, or dependency slot; a
//! [`FieldList`] is the uniform ordered form every raw declaration is
//! normalized into. The list carries the textual renderings the emitters
//! substitute into templates: `name: Type` pairs, bare names, bare types,
//! harness matcher arguments, generic parameter lists, and the
//! pointer-argument rewrites used by the expecter-chain combinators.

use std::collections::BTreeSet;

/// One parameter, return value, or dependency slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Verbatim type text as extracted from the source file.
    pub ty: String,

    /// Mock-binding hints, populated from `pkg:"…"`, `new:"…"` and
    /// `type:"…"` tags or inferred from `pkg:"-"`.
    pub mock_pkg: String,
    pub mock_new: String,
    pub mock_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Whether this field names a mock binding (it is a dependency slot).
    pub fn has_mock(&self) -> bool {
        !self.mock_pkg.is_empty()
    }
}

/// An ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(pub Vec<Field>);

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    /// Render as `name: Type, …`, parenthesized when requested and more than
    /// one field is present.
    pub fn as_args(&self, parens: bool) -> String {
        let joined = self
            .0
            .iter()
            .map(|f| format!("{}: {}", f.name, f.ty))
            .collect::<Vec<_>>()
            .join(", ");
        if parens && self.0.len() > 1 {
            format!("({joined})")
        } else {
            joined
        }
    }

    /// Render as `name, …`.
    pub fn as_params(&self) -> String {
        self.0
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render as `Type, …`, parenthesized when requested and more than one
    /// field is present.
    pub fn as_types(&self, parens: bool) -> String {
        let joined = self
            .0
            .iter()
            .map(|f| f.ty.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if parens && self.0.len() > 1 {
            format!("({joined})")
        } else {
            joined
        }
    }

    /// Render as `name: harness::Arg, …` for expecter entry points that take
    /// loosely-typed matchers.
    pub fn as_any(&self) -> String {
        self.0
            .iter()
            .map(|f| format!("{}: harness::Arg", f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render a `-> …` clause: empty for no returns, bare for one, a tuple
    /// for several.
    pub fn return_clause(&self) -> String {
        if self.0.is_empty() {
            String::new()
        } else {
            format!(" -> {}", self.as_types(true))
        }
    }

    /// Generic-parameter renderings as `(short, long)`: `<T>` / `<T: Bound>`,
    /// or in append form `, T` / `, T: Bound` for splicing after an existing
    /// parameter.
    pub fn generics(&self, append: bool) -> (String, String) {
        if self.0.is_empty() {
            return (String::new(), String::new());
        }

        let short = self.as_params();
        let long = self
            .0
            .iter()
            .map(|f| {
                if f.ty.is_empty() {
                    f.name.clone()
                } else {
                    format!("{}: {}", f.name, f.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        if append {
            (format!(", {short}"), format!(", {long}"))
        } else {
            (format!("<{short}>"), format!("<{long}>"))
        }
    }

    /// A copy of this list with positional names `{prefix}0, {prefix}1, …`,
    /// used to bind otherwise-unnamed return values.
    pub fn indexed(&self, prefix: &str) -> FieldList {
        FieldList(
            self.0
                .iter()
                .enumerate()
                .map(|(i, f)| Field::new(format!("{prefix}{i}"), f.ty.clone()))
                .collect(),
        )
    }

    /// Rewrite a rendering of this list into its pointer-argument variant.
    ///
    /// `name: Type` pairs become `name: &Type`; bare names become `*name`,
    /// or `harness::deref::<Type>(name)` when the call site takes matcher
    /// arguments.
    pub fn add_pointers(&self, s: &str, as_any: bool) -> String {
        if s.is_empty() {
            return String::new();
        }

        split_rendered(s)
            .into_iter()
            .enumerate()
            .map(|(i, piece)| {
                if let Some((name, ty)) = piece.split_once(": ") {
                    format!("{name}: &{ty}")
                } else if as_any {
                    let ty = self.0.get(i).map(|f| f.ty.as_str()).unwrap_or_default();
                    format!("harness::deref::<{ty}>({piece})")
                } else {
                    format!("*{piece}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split a rendered list on commas not nested inside `()`, `[]` or `<>`, so
/// a type like `Vec<(u8, u8)>` stays one piece.
fn split_rendered(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' | '<' => depth += 1,
            ')' | ']' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(s[start..].trim());
    pieces
}

impl FromIterator<Field> for FieldList {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Qualify package-local type names in a rendered fragment with their
/// package path, for fragments emitted outside the package that declared
/// them.
pub fn replace_scoped_names(s: &str, package: &str, names: &BTreeSet<String>) -> String {
    let mut out = s.to_string();
    for name in names {
        out = out.replace(&format!(" {name}"), &format!(" {package}::{name}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(fields: &[(&str, &str)]) -> FieldList {
        fields.iter().map(|(n, t)| Field::new(*n, *t)).collect()
    }

    #[test]
    fn test_as_args() {
        let fields = list(&[("s", "Source"), ("n", "usize")]);
        assert_eq!(fields.as_args(false), "s: Source, n: usize");
        assert_eq!(fields.as_args(true), "(s: Source, n: usize)");
        // A single field is never parenthesized.
        assert_eq!(list(&[("s", "Source")]).as_args(true), "s: Source");
    }

    #[test]
    fn test_as_params_and_types() {
        let fields = list(&[("s", "Source"), ("n", "usize")]);
        assert_eq!(fields.as_params(), "s, n");
        assert_eq!(fields.as_types(true), "(Source, usize)");
        assert_eq!(fields.as_types(false), "Source, usize");
    }

    #[test]
    fn test_return_clause() {
        assert_eq!(list(&[]).return_clause(), "");
        assert_eq!(list(&[("bool", "bool")]).return_clause(), " -> bool");
        assert_eq!(
            list(&[("bool", "bool"), ("usize", "usize")]).return_clause(),
            " -> (bool, usize)"
        );
    }

    #[test]
    fn test_generics() {
        let generics = list(&[("T", "Clone"), ("U", "")]);
        assert_eq!(
            generics.generics(false),
            ("<T, U>".to_string(), "<T: Clone, U>".to_string())
        );
        assert_eq!(
            generics.generics(true),
            (", T, U".to_string(), ", T: Clone, U".to_string())
        );
        assert_eq!(list(&[]).generics(false), (String::new(), String::new()));
    }

    #[test]
    fn test_indexed() {
        let returns = list(&[("bool", "bool"), ("usize", "usize")]);
        let indexed = returns.indexed("r");
        assert_eq!(indexed.as_args(false), "r0: bool, r1: usize");
        assert_eq!(indexed.as_params(), "r0, r1");
    }

    #[test]
    fn test_add_pointers() {
        let returns = list(&[("bool", "bool")]).indexed("r");
        assert_eq!(
            returns.add_pointers(&returns.as_args(false), false),
            "r0: &bool"
        );
        assert_eq!(returns.add_pointers(&returns.as_params(), false), "*r0");

        let args = list(&[("s", "Source")]);
        assert_eq!(
            args.add_pointers(&args.as_params(), true),
            "harness::deref::<Source>(s)"
        );
        assert_eq!(args.add_pointers("", false), "");
    }

    #[test]
    fn test_add_pointers_keeps_nested_tuple_types_whole() {
        let returns =
            list(&[("Vec<(u8, u8)>", "Vec<(u8, u8)>"), ("usize", "usize")]).indexed("r");
        assert_eq!(
            returns.add_pointers(&returns.as_args(false), false),
            "r0: &Vec<(u8, u8)>, r1: &usize"
        );
        assert_eq!(returns.add_pointers(&returns.as_params(), false), "*r0, *r1");
    }

    #[test]
    fn test_replace_scoped_names() {
        let names: BTreeSet<String> = ["Params".to_string(), "Gadget".to_string()].into();
        assert_eq!(
            replace_scoped_names("p: Params, g: Gadget", "widgets", &names),
            "p: widgets::Params, g: widgets::Gadget"
        );
    }
}
