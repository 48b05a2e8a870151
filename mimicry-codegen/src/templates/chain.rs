//! Expectation-chain extension appended to each generated mock file.
//!
//! A chain is a deferred lookup: it holds a `harness::Fetch` that, applied to
//! a mocks holder, digs out the call registration to configure. Combinators
//! wrap the fetch so a whole expectation can be described before any mock
//! exists, then replayed against the holder the harness builds.

/// Entry point: adapts a mock-fetching closure into the chain form.
pub const EXPECTER_CHAIN: &str = "
pub struct {{InterfaceName}}ExpecterChain<M{{GenericLongAppend}}> {
    fetch: harness::Fetch<M, {{InterfaceName}}Expecter{{GenericShort}}>,
}

pub fn expecter_chain<M{{GenericLongAppend}}>(
    fetch: harness::Fetch<M, {{InterfaceName}}{{GenericShort}}>,
) -> {{InterfaceName}}ExpecterChain<M{{GenericShortAppend}}> {
    {{InterfaceName}}ExpecterChain {
        fetch: harness::extend(fetch, |mock| mock.expecter()),
    }
}
";

/// Per-method block: the chain type, its two expecter entry points, and the
/// four call combinators.
pub const CHAIN: &str = "
pub struct {{InterfaceName}}{{MethodType}}Chain<M{{GenericLongAppend}}> {
    fetch: harness::Fetch<M, {{InterfaceName}}{{MethodType}}Call{{GenericShort}}>,
}

impl<M{{GenericLongAppend}}> {{InterfaceName}}ExpecterChain<M{{GenericShortAppend}}> {
    pub fn {{Method}}(self, {{ArgsAny}}) -> {{InterfaceName}}{{MethodType}}Chain<M{{GenericShortAppend}}> {
        {{InterfaceName}}{{MethodType}}Chain {
            fetch: harness::extend(self.fetch, move |expecter| expecter.{{Method}}({{ArgsShort}})),
        }
    }

    pub fn {{Method}}_p(self, {{ArgsAny}}) -> {{InterfaceName}}{{MethodType}}Chain<M{{GenericShortAppend}}> {
        {{InterfaceName}}{{MethodType}}Chain {
            fetch: harness::extend(self.fetch, move |expecter| expecter.{{Method}}({{ArgsShortPointer}})),
        }
    }
}

impl<M{{GenericLongAppend}}> {{InterfaceName}}{{MethodType}}Chain<M{{GenericShortAppend}}> {
    pub fn run(self, run: impl FnMut({{ArgTypes}}) + 'static) -> Self {
        Self {
            fetch: harness::extend(self.fetch, move |call| call.run(run)),
        }
    }

    pub fn returning(self, {{ReturnsArgs}}) -> Self {
        Self {
            fetch: harness::extend(self.fetch, move |call| call.returning({{ReturnsShort}})),
        }
    }

    pub fn run_and_return(self, run: impl FnMut({{ArgTypes}}){{ReturnsTypes}} + 'static) -> Self {
        Self {
            fetch: harness::extend(self.fetch, move |call| call.run_and_return(run)),
        }
    }

    pub fn returning_p(self, {{ReturnsArgsPointer}}) -> Self {
        Self {
            fetch: harness::extend(self.fetch, move |call| call.returning({{ReturnsShortPointer}})),
        }
    }
}
";
