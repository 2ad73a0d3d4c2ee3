//! Static context used to validate `break`, `continue` and `return`.
//!
//! The parser tracks three things while descending:
//! - [`ParseContext`] flags: inside a loop body, inside a function body
//! - every enclosing `:label` (targets for `break label`)
//! - labels attached to `for`/`while` (targets for `continue label`)
//!
//! Entering a function body starts from a clean slate: control flow never
//! crosses a function boundary.

/// Context flags for parsing.
///
/// Multiple flags can be combined with [`ParseContext::with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    /// Top-level code.
    pub const NONE: Self = Self(0);

    /// Inside a loop body. Makes unlabeled `break`/`continue` valid.
    pub const IN_LOOP: Self = Self(1 << 0);

    /// Inside a function body. Makes `return` valid.
    pub const IN_FUNCTION: Self = Self(1 << 1);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_loop(self) -> bool {
        self.has(Self::IN_LOOP)
    }

    #[inline]
    pub const fn in_function(self) -> bool {
        self.has(Self::IN_FUNCTION)
    }
}

/// Labels visible at the current parse position.
#[derive(Clone, Debug, Default)]
pub struct LabelScope {
    /// Every enclosing label, innermost last.
    labels: Vec<String>,
    /// Labels attached to loops, innermost last.
    loop_labels: Vec<String>,
}

impl LabelScope {
    pub fn push(&mut self, name: &str, is_loop: bool) {
        self.labels.push(name.to_string());
        if is_loop {
            self.loop_labels.push(name.to_string());
        }
    }

    pub fn pop(&mut self, is_loop: bool) {
        self.labels.pop();
        if is_loop {
            self.loop_labels.pop();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.loop_labels.is_empty()
    }

    /// Whether `break name` has a target.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Whether `continue name` has a target.
    pub fn has_loop_label(&self, name: &str) -> bool {
        self.loop_labels.iter().any(|l| l == name)
    }
}
