//! Per-type generation options.

use std::path::PathBuf;

/// Resolved output configuration for one component.
///
/// Directive values land here as the walk sees them; the resolve phase fills
/// every unset field from its computed default. After resolution every
/// non-boolean field is non-empty and `interface_name` differs from the
/// component's type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenOptions {
    /// Set by the `generate::components` directive; records that never see
    /// it are dropped before resolution.
    pub generate: bool,

    pub interface_name: String,
    pub interface_folder: PathBuf,
    pub interface_package: String,
    pub interface_file: PathBuf,

    pub mock_folder: PathBuf,
    pub mock_package: String,
    pub mock_file: String,

    /// Config file handed to the external mock tool.
    pub config_path: String,

    /// Whether the scaffold addresses the component through its package
    /// (black-box) or with local names.
    pub blackbox: bool,
}
