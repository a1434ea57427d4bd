//! API-family prefix stripping for generated identifiers.

use crate::Config;

/// Strip an API-family prefix under the default configuration.
///
/// ```
/// use glgen_core::trim_api_prefix;
/// assert_eq!(trim_api_prefix("glDrawArrays"), "DrawArrays");
/// assert_eq!(trim_api_prefix("GL_TEXTURE_2D"), "TEXTURE_2D");
/// assert_eq!(trim_api_prefix("gl3w"), "gl3w");
/// ```
pub fn trim_api_prefix(name: &str) -> &str {
    Config::shared().trim_api_prefix(name)
}

/// Condition the remainder of a name must meet before a prefix is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Function style (`glDrawArrays`): the rest starts with an uppercase letter.
    UppercaseStart,
    /// Constant style (`GL_TEXTURE_2D`): the rest is non-empty and does not
    /// start with a digit, so the result is still a valid identifier.
    NoLeadingDigit,
}

impl Guard {
    pub fn accepts(self, rest: &str) -> bool {
        let Some(first) = rest.chars().next() else {
            return false;
        };
        match self {
            Self::UppercaseStart => first.is_ascii_uppercase(),
            Self::NoLeadingDigit => !first.is_ascii_digit(),
        }
    }
}

/// A literal, case-sensitive prefix and its guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    pub guard: Guard,
}

/// Ordered prefix rules. The first rule whose prefix matches decides the
/// outcome; later rules are never consulted for that name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixRules {
    rules: Vec<PrefixRule>,
}

impl Default for PrefixRules {
    fn default() -> Self {
        Self::gl()
    }
}

impl PrefixRules {
    /// No rules: every name is returned unchanged.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// OpenGL family: GL, GLX, WGL and EGL in function and constant style.
    ///
    /// `glX` precedes `gl` so `glXSwapBuffers` loses the whole prefix.
    pub fn gl() -> Self {
        Self::empty()
            .rule("wgl", Guard::UppercaseStart)
            .rule("egl", Guard::UppercaseStart)
            .rule("glX", Guard::UppercaseStart)
            .rule("gl", Guard::UppercaseStart)
            .rule("WGL_", Guard::NoLeadingDigit)
            .rule("EGL_", Guard::NoLeadingDigit)
            .rule("GLX_", Guard::NoLeadingDigit)
            .rule("GL_", Guard::NoLeadingDigit)
    }

    /// Append a rule after the existing ones.
    pub fn rule(mut self, prefix: impl Into<String>, guard: Guard) -> Self {
        self.rules.push(PrefixRule {
            prefix: prefix.into(),
            guard,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Strip the first matching prefix if its guard accepts the remainder.
    pub fn trim<'a>(&self, name: &'a str) -> &'a str {
        let Some(rule) = self.rules.iter().find(|r| name.starts_with(&r.prefix)) else {
            return name;
        };
        let rest = &name[rule.prefix.len()..];
        if rule.guard.accepts(rest) { rest } else { name }
    }
}
