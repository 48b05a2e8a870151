//! Emission stages of the component generator.
//!
//! Each stage consumes resolved [`TypeRecord`](mimicry_ir::TypeRecord)s and
//! runs across the whole generation set before the next stage starts:
//!
//! 1. [`emit_interface`]: capability-set trait, delegating impl, `new` shim.
//! 2. [`invoke_mock_tool`]: one external `mimic` call per component.
//! 3. [`extend_mock`]: expectation-chain blocks appended to each mock file.
//! 4. [`emit_scaffold`]: test skeleton beside the component.
//!
//! Stages 1, 3 and 4 share one [`Emitter`](mimicry_core::Emitter) per run so
//! writes into the same file accumulate under a single generated section.

mod extend;
mod interface;
mod mock_tool;
mod scaffold;
mod templates;
mod workdir;

pub use extend::extend_mock;
pub use interface::emit_interface;
pub use mock_tool::{MOCK_TOOL, invoke_mock_tool};
pub use scaffold::emit_scaffold;
pub use workdir::WorkingDir;
