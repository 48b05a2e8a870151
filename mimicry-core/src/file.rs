//! Generated-file writing.
//!
//! Every file that receives generated code carries a marker line; everything
//! below the marker belongs to the generator and is replaced wholesale on the
//! next run, while the human-authored text above it is retained byte for
//! byte. Import lines are merged: a `use` already present in the retained
//! text (or already emitted this run) is not written again.

use std::{
    collections::{BTreeSet, HashMap},
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Marker separating human-authored code from the generated section.
pub const GENERATED_MARKER: &str = "// Code below was generated by mimicry. DO NOT EDIT.";

/// Write a complete file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Writer for generated sections, scoped to one generation run.
///
/// The first write to a path truncates any generated section left over from a
/// previous run (everything from the marker on) and starts a fresh one; later
/// writes to the same path append to it. Running the generator twice over an
/// unchanged tree therefore produces byte-identical files.
#[derive(Default)]
pub struct Emitter {
    /// Files touched this run, with the imports already present in each.
    touched: HashMap<PathBuf, BTreeSet<String>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `content` to the generated section of `path`, first writing any
    /// of `imports` not already present as `use` lines.
    pub fn write_generated(
        &mut self,
        path: &Path,
        imports: &BTreeSet<String>,
        content: &str,
    ) -> Result<()> {
        if !self.touched.contains_key(path) {
            self.start_section(path)?;
        }

        let seen = self
            .touched
            .get_mut(path)
            .expect("section started for path");

        let mut section = String::new();
        for import in imports {
            if seen.insert(import.clone()) {
                section.push_str("use ");
                section.push_str(import);
                section.push_str(";\n");
            }
        }
        section.push_str(content);

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("failed to open '{}'", path.display()))?;
        file.write_all(section.as_bytes())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }

    /// Truncate any previous generated section and write a fresh marker.
    fn start_section(&mut self, path: &Path) -> Result<()> {
        let existing = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("failed to read '{}'", path.display()));
            }
        };

        let mut retained = match existing.find(GENERATED_MARKER) {
            Some(index) => existing[..index].to_string(),
            None => existing,
        };
        if !retained.is_empty() && !retained.ends_with('\n') {
            retained.push('\n');
        }

        let seen = collect_uses(&retained);

        retained.push_str(GENERATED_MARKER);
        retained.push('\n');
        write_file(path, &retained)?;

        self.touched.insert(path.to_path_buf(), seen);
        Ok(())
    }
}

/// Collect the import paths of all `use …;` lines in `text`.
fn collect_uses(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix("use ")?;
            let rest = rest.strip_suffix(';')?;
            Some(rest.trim().to_string())
        })
        .collect()
}
