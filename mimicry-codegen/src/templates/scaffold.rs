//! Test scaffold skeleton. Stubs only; test bodies are written by hand
//! against the harness library.

/// Parameter-initializer stub the test author fills in.
pub const INIT_PARAMS: &str = "
fn init_params() -> {{ParamsPath}} {
    {{ParamsPath}}::default()
}
";

/// Holder for every mocked dependency of the component under test.
pub const MOCKS_STRUCT: &str = "
pub struct Mocks {
{{MockFields}}
}
";

/// Builds the component and its mocks holder from one parameter set.
pub const BUILD_MOCKS: &str = "
fn build_mocks() -> (impl {{InterfacePath}}, Mocks) {
    let params = init_params();
    let mocks = Mocks {
{{MockInits}}
    };
    ({{ComponentPath}}new(params), mocks)
}
";

/// Accessor exposing one dependency's expectation-chain entry point.
pub const GET_MOCK_FIELD: &str = "
fn mock_{{FieldName}}() -> {{MockPackage}}::{{MockType}}ExpecterChain<Mocks> {
    {{MockPackage}}::expecter_chain(harness::fetch(|m: &mut Mocks| &mut m.{{FieldName}}))
}
";
