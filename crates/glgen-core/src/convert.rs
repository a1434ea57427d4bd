//! Target type rendering and conversion expression synthesis.
//!
//! Every function here is pure string synthesis. Unknown native types never
//! fail: they fall back to a literal cast through the native name and the
//! result is marked unverified so the driver can warn about it.

use std::fmt;

use tracing::debug;

use crate::{Category, Config, TargetType, TypeDescriptor, classify};

const UNSAFE_POINTER: &str = "unsafe.Pointer";
const ADDRESS: &str = "uintptr";

/// A synthesized conversion expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub expr: String,
    /// `false` when the expression is a best-effort fallback for a type
    /// without a known mapping.
    pub verified: bool,
}

impl Conversion {
    fn verified(expr: String) -> Self {
        Self {
            expr,
            verified: true,
        }
    }

    fn unverified(expr: String) -> Self {
        Self {
            expr,
            verified: false,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

/// `(T)(var)` at depth 0, `(**T)(unsafe.Pointer(var))` otherwise.
fn reinterpret(ty: &str, depth: usize, var: &str) -> String {
    if depth == 0 {
        format!("({ty})({var})")
    } else {
        format!("({}{ty})({UNSAFE_POINTER}({var}))", "*".repeat(depth))
    }
}

impl Config {
    /// Target-language spelling of a descriptor, or `None` for bare `void`.
    pub fn target_type(&self, descriptor: &TypeDescriptor) -> Option<String> {
        let target = classify(descriptor);
        let pointers = "*".repeat(target.indirection());
        match target {
            TargetType::Void => None,
            TargetType::Unmapped { .. } => Some(format!(
                "{pointers}{}",
                self.native_name(descriptor.name())
            )),
            TargetType::Buffer { .. } | TargetType::Mapped { .. } => target
                .category()
                .target_name()
                .map(|name| format!("{pointers}{name}")),
        }
    }

    /// Expression converting `var` from its target representation to the
    /// native one.
    pub fn to_native(&self, descriptor: &TypeDescriptor, var: &str) -> Conversion {
        let native = self.native_name(descriptor.name());
        let depth = descriptor.pointer_depth();

        match classify(descriptor) {
            TargetType::Void => Conversion::unverified(var.to_string()),
            TargetType::Buffer { depth: 1 } => {
                Conversion::verified(format!("{UNSAFE_POINTER}({var})"))
            }
            TargetType::Buffer { .. } => Conversion::verified(format!(
                "(*{UNSAFE_POINTER})({UNSAFE_POINTER}({var}))"
            )),
            TargetType::Mapped {
                category: Category::Bool,
                indirection: 0,
            } => Conversion::verified(format!("({native})({}({var}))", self.bool_encoder)),
            TargetType::Mapped { .. } => Conversion::verified(reinterpret(&native, depth, var)),
            TargetType::Unmapped { .. } => {
                debug!(
                    native = descriptor.raw_declaration(),
                    "no target mapping, casting through native name"
                );
                Conversion::unverified(reinterpret(&native, depth, var))
            }
        }
    }

    /// Expression converting `var` from its native representation to the
    /// target one.
    pub fn to_target(&self, descriptor: &TypeDescriptor, var: &str) -> Conversion {
        let target = classify(descriptor);

        match target {
            TargetType::Void => Conversion::unverified(var.to_string()),
            TargetType::Buffer { depth: 1 } => Conversion::verified(format!("{ADDRESS}({var})")),
            TargetType::Buffer { .. } => {
                Conversion::verified(format!("(*{ADDRESS})({UNSAFE_POINTER}({var}))"))
            }
            TargetType::Mapped {
                category: Category::Bool,
                indirection: 0,
            } => Conversion::verified(format!("{var} == {}", self.true_sentinel)),
            TargetType::Mapped {
                category,
                indirection,
            } => {
                let name = category.target_name().unwrap_or(UNSAFE_POINTER);
                Conversion::verified(reinterpret(name, indirection, var))
            }
            TargetType::Unmapped { indirection } => {
                debug!(
                    native = descriptor.raw_declaration(),
                    "no target mapping, keeping native type"
                );
                let native = self.native_name(descriptor.name());
                Conversion::unverified(reinterpret(&native, indirection, var))
            }
        }
    }
}

/// Target-language spelling under the default configuration.
pub fn target_type(descriptor: &TypeDescriptor) -> Option<String> {
    Config::shared().target_type(descriptor)
}

/// Target → native conversion under the default configuration.
pub fn to_native(descriptor: &TypeDescriptor, var: &str) -> Conversion {
    Config::shared().to_native(descriptor, var)
}

/// Native → target conversion under the default configuration.
pub fn to_target(descriptor: &TypeDescriptor, var: &str) -> Conversion {
    Config::shared().to_target(descriptor, var)
}
