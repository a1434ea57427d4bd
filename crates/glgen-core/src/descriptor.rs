//! Native type occurrences as handed over by the registry loader.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names the native API uses for `void`.
pub const VOID_NAMES: &[&str] = &["void", "GLvoid"];

/// One occurrence of a native type in a parameter or return position.
///
/// Built once per occurrence and never mutated. `raw_declaration` is the
/// verbatim C text the descriptor was derived from; it is carried for
/// diagnostics and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    #[serde(default)]
    pointer_depth: usize,
    #[serde(default)]
    raw_declaration: String,
}

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        pointer_depth: usize,
        raw_declaration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pointer_depth,
            raw_declaration: raw_declaration.into(),
        }
    }

    /// A value type whose declaration is just its name.
    pub fn value(name: impl Into<String>) -> Self {
        let name = name.into();
        let raw_declaration = name.clone();
        Self::new(name, 0, raw_declaration)
    }

    /// Base name without pointer modifiers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared indirection levels. Zero means a value type.
    pub fn pointer_depth(&self) -> usize {
        self.pointer_depth
    }

    pub fn raw_declaration(&self) -> &str {
        &self.raw_declaration
    }

    /// Whether the base name is one of the `void` spellings, at any depth.
    pub fn has_void_name(&self) -> bool {
        VOID_NAMES.contains(&self.name.as_str())
    }

    /// The bare `void` type: a void name with no indirection.
    pub fn is_void(&self) -> bool {
        self.has_void_name() && self.pointer_depth == 0
    }

    /// One `*` per indirection level.
    pub fn pointers(&self) -> String {
        "*".repeat(self.pointer_depth)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} [{}]",
            self.name,
            self.pointers(),
            self.raw_declaration
        )
    }
}

/// A native type alias recorded by the loader.
///
/// Purely informational: classification never consults typedefs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(default)]
    pub raw_declaration: String,
}

impl Typedef {
    pub fn new(name: impl Into<String>, raw_declaration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_declaration: raw_declaration.into(),
        }
    }
}

impl fmt::Display for Typedef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.raw_declaration)
    }
}
