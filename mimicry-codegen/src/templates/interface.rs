//! Capability-set declaration and constructor shim.

/// The trait covering a component's exported methods.
pub const INTERFACE: &str = "
pub trait {{InterfaceName}}{{GenericLong}} {
{{Methods}}
}
";

/// One trait method line.
pub const METHOD: &str = "    fn {{Method}}({{Receiver}}{{Args}}){{Returns}};";

/// Delegating implementation binding the component to its trait. Inherent
/// methods win name resolution, so each body calls straight back into the
/// component.
pub const IMPL: &str = "
impl{{GenericLong}} {{Interface}}{{GenericShort}} for {{TypeName}}{{GenericShort}} {
{{Methods}}
}
";

pub const IMPL_METHOD: &str = "    fn {{Method}}({{Receiver}}{{Args}}){{Returns}} {
        self.{{Method}}({{ArgsShort}})
    }";

/// Constructor shim from the parameter struct to the capability set.
pub const NEW: &str = "
pub fn new{{GenericLong}}(p: {{Params}}) -> impl {{Interface}}{{GenericShort}} {
    p.{{Convert}}()
}
";
