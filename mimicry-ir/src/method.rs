//! Method signatures bound to a generation-eligible type.

use crate::{Field, FieldList};

/// One exported method of a component, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSig {
    pub name: String,
    /// The receiver slot; its type text decides the `self` form.
    pub receiver: Field,
    pub args: FieldList,
    pub returns: FieldList,
}

impl MethodSig {
    /// The `self` token for a trait method line.
    pub fn receiver_token(&self) -> &'static str {
        if self.receiver.ty.starts_with("&mut") {
            "&mut self"
        } else if self.receiver.ty.starts_with('&') {
            "&self"
        } else {
            "self"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiver_token() {
        let mut m = MethodSig {
            receiver: Field::new("self", "&Gadget"),
            ..MethodSig::default()
        };
        assert_eq!(m.receiver_token(), "&self");

        m.receiver.ty = "&mut Gadget".to_string();
        assert_eq!(m.receiver_token(), "&mut self");

        m.receiver.ty = "Gadget".to_string();
        assert_eq!(m.receiver_token(), "self");
    }
}
