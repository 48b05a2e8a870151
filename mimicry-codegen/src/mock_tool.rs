//! External mock-tool invocation.
//!
//! The mock implementation itself comes from the `mimic` binary, invoked
//! once per component with the resolved options. Its output streams pass
//! through untouched so tool diagnostics reach the caller verbatim. The call
//! runs from the interface folder, restored afterwards even when the tool
//! fails.

use std::process::{Command, Stdio};

use eyre::{Result, bail};
use mimicry_ir::TypeRecord;

use crate::workdir::WorkingDir;

pub const MOCK_TOOL: &str = "mimic";

pub fn invoke_mock_tool(record: &TypeRecord) -> Result<()> {
    let options = &record.options;
    let _workdir = WorkingDir::change(&options.interface_folder)?;

    let status = Command::new(MOCK_TOOL)
        .arg("--name")
        .arg(&options.interface_name)
        .arg("--filename")
        .arg(&options.mock_file)
        .arg("--output")
        .arg(&options.mock_folder)
        .arg("--outpkg")
        .arg(&options.mock_package)
        .arg("--config")
        .arg(&options.config_path)
        .arg("--with-expecter")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => bail!(
            "'{MOCK_TOOL}' exited with {status} while mocking interface {}",
            options.interface_name
        ),
        Err(e) => bail!("failed to run '{MOCK_TOOL}' for interface {}: {e}", options.interface_name),
    }
}
