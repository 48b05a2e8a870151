use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use mimicry_codegen::{emit_interface, emit_scaffold, extend_mock, invoke_mock_tool};
use mimicry_core::Emitter;

/// Extension trait for exiting on parser errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mimicry_parser::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "mimicry")]
#[command(version)]
#[command(about = "Generate component interfaces, mocks and test scaffolds")]
pub(crate) struct Cli {
    /// Root directory to scan for generation directives
    pub directory: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let mut parser = mimicry_parser::Parser::new(&self.directory);
        parser.parse().unwrap_or_exit();
        let records = parser.resolve().unwrap_or_exit();

        // Strictly staged: every interface exists before the first tool
        // call, and every mock file exists before the first extension.
        let mut emitter = Emitter::new();
        for record in &records {
            emit_interface(&mut emitter, record)?;
        }
        for record in &records {
            invoke_mock_tool(record)?;
        }
        for record in &records {
            extend_mock(&mut emitter, record)?;
        }
        for record in &records {
            emit_scaffold(&mut emitter, record)?;
        }

        println!("Generated {} component(s)", records.len());
        for record in &records {
            println!(
                "  {} -> {} ({})",
                record.name,
                record.options.interface_name,
                record.options.mock_folder.join(&record.options.mock_file).display()
            );
        }
        Ok(())
    }
}
