//! Emission templates.
//!
//! Templates are plain strings with `{{Placeholder}}` slots filled by
//! [`bulk_replace`]. They describe generated source text only; nothing in
//! this crate compiles them.

mod chain;
mod interface;
mod scaffold;

pub use chain::{CHAIN, EXPECTER_CHAIN};
pub use interface::{IMPL, IMPL_METHOD, INTERFACE, METHOD, NEW};
pub use scaffold::{BUILD_MOCKS, GET_MOCK_FIELD, INIT_PARAMS, MOCKS_STRUCT};

/// Replace every `{{Key}}` slot with its paired value.
pub fn bulk_replace(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut content = template.to_string();
    for (key, value) in pairs {
        content = content.replace(&format!("{{{{{key}}}}}"), value);
    }
    content
}
