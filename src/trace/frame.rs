//! A single resolved call frame and its compact rendering.

use core::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// One logical call frame.
///
/// `function` is the demangled path without the hash suffix, for example
/// `my_app::handlers::create_user` or `<my_app::Repo as my_app::Store>::load`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub function: String,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl Frame {
    pub fn new(
        function: impl Into<String>,
        file: Option<impl Into<PathBuf>>,
        line: Option<u32>,
    ) -> Self {
        Self { function: function.into(), file: file.map(Into::into), line }
    }

    /// Last `::` component of the function path, ignoring trailing generic
    /// arguments such as `::<alloc::string::String>`.
    pub fn short_function(&self) -> &str {
        let path = strip_generic_args(&self.function);
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Crate the frame's code belongs to; see [`crate_name`].
    pub fn crate_name(&self) -> &str {
        crate_name(&self.function)
    }

    /// Last component of the source path.
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_deref().and_then(Path::file_name).and_then(|name| name.to_str())
    }

    /// Directory holding the source file, used as the package name.
    pub fn package(&self) -> Option<&str> {
        self.file
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }
}

/// Removes one trailing `::<..>` group from a demangled path.
fn strip_generic_args(function: &str) -> &str {
    if !function.ends_with('>') {
        return function;
    }
    let mut depth = 0usize;
    for (idx, c) in function.char_indices().rev() {
        match c {
            // `->` inside `fn() -> T` arguments does not open a group
            '>' if function[..idx].ends_with('-') => {},
            '>' => depth += 1,
            '<' => {
                depth -= 1;
                if depth == 0 {
                    return function[..idx].strip_suffix("::").unwrap_or(function);
                }
            },
            _ => {},
        }
    }
    function
}

/// Leading crate identifier of a demangled function path.
///
/// For trait impls `<Type as Trait>::method` this is the crate of `Type`.
/// Generic parameters and primitive self types yield their own name (`F`,
/// `str`) or an empty string, which never matches a real crate.
pub fn crate_name(function: &str) -> &str {
    let path = function.trim_start_matches(['<', '&', '*']);
    let path = path
        .strip_prefix("mut ")
        .or_else(|| path.strip_prefix("const "))
        .or_else(|| path.strip_prefix("dyn "))
        .unwrap_or(path);
    let end = path.find(|c: char| !(c.is_alphanumeric() || c == '_')).unwrap_or(path.len());
    &path[..end]
}

/// Renders `package/file:function():line`.
impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = self.package() {
            write!(f, "{package}/")?;
        }
        write!(
            f,
            "{}:{}():{}",
            self.file_name().unwrap_or("?"),
            self.short_function(),
            self.line.unwrap_or(0)
        )
    }
}
