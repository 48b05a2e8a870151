//! Option resolution.
//!
//! Runs exactly once, after the walk: drops unclaimed records, validates the
//! structural invariants, and fills every unset option from its convention
//! default. Records come out in discovery order and are read-only from here
//! on.

use std::path::{Path, PathBuf};

use mimicry_core::{to_camel, to_title};
use mimicry_ir::TypeRecord;

use crate::{
    error::{Error, Result},
    parser::Parser,
};

/// Default config file handed to the external mock tool.
const DEFAULT_CONFIG: &str = ".mimic.yml";

impl Parser {
    /// Consume the walk state and produce the resolved generation set.
    pub fn resolve(mut self) -> Result<Vec<TypeRecord>> {
        self.records.retain(|_, record| record.options.generate);

        let mut records: Vec<TypeRecord> = self.records.into_values().collect();
        for record in &mut records {
            if let Some(decls) = self.package_decls.get(&record.package_folder) {
                record.scoped_names = decls.clone();
            }
            resolve_record(record)?;
        }
        Ok(records)
    }
}

fn resolve_record(record: &mut TypeRecord) -> Result<()> {
    if !record.has_constructor() {
        return Err(Box::new(Error::MissingConstructor {
            type_name: record.name.clone(),
            file: record.source_file.clone(),
        }));
    }

    let options = &mut record.options;

    if options.interface_name.is_empty() {
        options.interface_name = to_title(&record.name);
    }
    if options.interface_name == record.name {
        return Err(Box::new(Error::InterfaceCollision {
            type_name: record.name.clone(),
            file: record.source_file.clone(),
        }));
    }

    if options.interface_folder.as_os_str().is_empty() {
        options.interface_folder = record.package_folder.clone();
    } else {
        options.interface_folder = absolutize(&options.interface_folder, &record.source_file)?;
    }
    options.interface_package = base_name(&options.interface_folder);

    if options.interface_file.as_os_str().is_empty() {
        options.interface_file = if options.interface_folder == record.package_folder {
            record.source_file.clone()
        } else {
            options.interface_folder.join("interface.rs")
        };
    } else if options.interface_file.is_relative() {
        options.interface_file = options.interface_folder.join(&options.interface_file);
    }

    if options.mock_folder.as_os_str().is_empty() {
        let base = base_name(&options.interface_folder);
        options.mock_folder = options.interface_folder.join(format!("{base}_mocks"));
    } else {
        options.mock_folder = absolutize(&options.mock_folder, &record.source_file)?;
    }
    options.mock_package = base_name(&options.mock_folder);

    if options.mock_file.is_empty() {
        options.mock_file = format!("{}.rs", to_camel(&options.interface_name));
    }

    if options.config_path.is_empty() {
        options.config_path = DEFAULT_CONFIG.to_string();
    }

    Ok(())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn absolutize(path: &Path, context: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io(e, context))
}
