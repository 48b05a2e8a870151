use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parser operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(mimicry::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        #[source]
        source: syn::Error,
    },

    #[error("struct {type_name} in '{file}' does not have a paired constructor")]
    #[diagnostic(
        code(mimicry::missing_constructor),
        help(
            "add `impl {{Params}} {{ pub fn convert(self) -> {type_name} {{ .. }} }}` in the same package"
        )
    )]
    MissingConstructor { type_name: String, file: PathBuf },

    #[error("struct {type_name} in '{file}' has the same interface name")]
    #[diagnostic(
        code(mimicry::interface_collision),
        help("set `interfaceName::<Name>` to a name that differs from the struct itself")
    )]
    InterfaceCollision { type_name: String, file: PathBuf },

    #[error("bad type '{ty}' for auto mock inference on field '{field}'")]
    #[diagnostic(
        code(mimicry::mock_inference),
        help("`pkg:\"-\"` requires a package-qualified type such as `subpkg::Helper`")
    )]
    MockInference {
        field: String,
        ty: String,
        file: PathBuf,
    },
}

impl Error {
    /// Create a parse error from a syn error, labelling the failing span.
    pub fn parse(source: syn::Error, src: &str, path: &Path) -> Box<Self> {
        let range = source.span().byte_range();
        let span = if range.end <= src.len() {
            Some(SourceSpan::new(range.start.into(), range.len()))
        } else {
            None
        };
        Box::new(Error::Parse {
            path: path.to_path_buf(),
            src: NamedSource::new(path.to_string_lossy(), src.to_string()),
            span,
            source,
        })
    }

    pub fn io(source: std::io::Error, path: &Path) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
