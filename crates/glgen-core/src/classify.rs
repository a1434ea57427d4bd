//! Native type name → target primitive classification.
//!
//! The mapping is a static table sorted by native name and searched with
//! binary search. Pointer depth is applied after the lookup, so the table
//! only ever holds base names.

use crate::TypeDescriptor;

/// Target primitive category of a native base type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Bool,
    /// Signed platform word (`int`), used for offsets and sizes.
    Int,
    /// Unsigned address-sized scalar (`uintptr`).
    Uintptr,
    /// Opaque pointer (`unsafe.Pointer`).
    Pointer,
    /// The bare `void` type.
    Void,
    /// Not in the table; rendered through the native name.
    Unmapped,
}

impl Category {
    /// Target-language spelling, if the category has one of its own.
    pub fn target_name(self) -> Option<&'static str> {
        match self {
            Self::Int8 => Some("int8"),
            Self::Uint8 => Some("uint8"),
            Self::Int16 => Some("int16"),
            Self::Uint16 => Some("uint16"),
            Self::Int32 => Some("int32"),
            Self::Uint32 => Some("uint32"),
            Self::Int64 => Some("int64"),
            Self::Uint64 => Some("uint64"),
            Self::Float32 => Some("float32"),
            Self::Float64 => Some("float64"),
            Self::Bool => Some("bool"),
            Self::Int => Some("int"),
            Self::Uintptr => Some("uintptr"),
            Self::Pointer => Some("unsafe.Pointer"),
            Self::Void | Self::Unmapped => None,
        }
    }
}

/// Result of classifying one descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TargetType {
    /// Bare `void`. Has no target representation.
    Void,
    /// `void *` (depth 1) or `void **` (depth 2): an untyped buffer address.
    Buffer { depth: usize },
    /// A table entry with `indirection` pointer levels on top.
    Mapped { category: Category, indirection: usize },
    /// Unknown name; falls back to the native type.
    Unmapped { indirection: usize },
}

impl TargetType {
    pub fn category(self) -> Category {
        match self {
            Self::Void => Category::Void,
            Self::Buffer { .. } => Category::Uintptr,
            Self::Mapped { category, .. } => category,
            Self::Unmapped { .. } => Category::Unmapped,
        }
    }

    /// Pointer levels applied to the category in the target language.
    ///
    /// `void *` is itself the address scalar, so a buffer contributes one
    /// level less than its native depth.
    pub fn indirection(self) -> usize {
        match self {
            Self::Void => 0,
            Self::Buffer { depth } => depth - 1,
            Self::Mapped { indirection, .. } | Self::Unmapped { indirection } => indirection,
        }
    }

    pub fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_mapped(self) -> bool {
        !matches!(self, Self::Unmapped { .. })
    }
}

/// Callback pointer type. Always an opaque pointer, whatever its depth.
pub const DEBUG_PROC: &str = "GLDEBUGPROC";

/// Base name table. Must stay sorted by name.
pub(crate) const TYPE_TABLE: &[(&str, Category)] = &[
    ("GLbitfield", Category::Uint32),
    ("GLboolean", Category::Bool),
    ("GLbyte", Category::Int8),
    ("GLchar", Category::Int8),
    ("GLcharARB", Category::Int8),
    ("GLclampd", Category::Float64),
    ("GLclampf", Category::Float32),
    ("GLclampx", Category::Int32),
    ("GLdouble", Category::Float64),
    ("GLeglImageOES", Category::Uintptr),
    ("GLenum", Category::Uint32),
    ("GLfixed", Category::Int32),
    ("GLfloat", Category::Float32),
    // No 16-bit float in the target language: pass the bit pattern through.
    ("GLhalf", Category::Uint16),
    ("GLhalfNV", Category::Uint16),
    ("GLhandleARB", Category::Uintptr),
    ("GLint", Category::Int32),
    ("GLint64", Category::Int64),
    ("GLint64EXT", Category::Int64),
    ("GLintptr", Category::Int),
    ("GLintptrARB", Category::Int),
    ("GLshort", Category::Int16),
    ("GLsizei", Category::Int32),
    ("GLsizeiptr", Category::Int),
    ("GLsizeiptrARB", Category::Int),
    ("GLsync", Category::Pointer),
    ("GLubyte", Category::Uint8),
    ("GLuint", Category::Uint32),
    ("GLuint64", Category::Uint64),
    ("GLuint64EXT", Category::Uint64),
    ("GLushort", Category::Uint16),
    ("GLvdpauSurfaceNV", Category::Uintptr),
];

/// Look up a base name in the static table.
pub fn lookup(name: &str) -> Option<Category> {
    TYPE_TABLE
        .binary_search_by_key(&name, |&(key, _)| key)
        .ok()
        .map(|idx| TYPE_TABLE[idx].1)
}

/// Every base name the table knows, in table order.
pub fn known_names() -> impl Iterator<Item = &'static str> {
    TYPE_TABLE.iter().map(|&(name, _)| name)
}

/// Classify a descriptor.
pub fn classify(descriptor: &TypeDescriptor) -> TargetType {
    let depth = descriptor.pointer_depth();

    if descriptor.has_void_name() {
        return match depth {
            0 => TargetType::Void,
            1 | 2 => TargetType::Buffer { depth },
            _ => TargetType::Unmapped { indirection: depth },
        };
    }

    if descriptor.name() == DEBUG_PROC {
        return TargetType::Mapped {
            category: Category::Pointer,
            indirection: 0,
        };
    }

    match lookup(descriptor.name()) {
        Some(category) => TargetType::Mapped {
            category,
            indirection: depth,
        },
        None => TargetType::Unmapped { indirection: depth },
    }
}
