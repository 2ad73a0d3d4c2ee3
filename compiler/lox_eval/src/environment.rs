//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope frame; frames link to their
//! parent, so a chain runs from the innermost block out to the globals.
//! Closures keep their defining frame alive by holding a handle to it.
//!
//! A binding is either initialized with a value or declared without one
//! (`var x;`). Reading a declared-but-unassigned binding is an error, which
//! is why `Uninitialized` is tracked separately from `nil`.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::value::Value;

/// Why a lookup or assignment failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No frame in the chain declares the name.
    Undefined,
    /// The nearest declaration has no value yet.
    Uninitialized,
}

/// Single-threaded shared, mutable cell.
///
/// All scope allocations go through [`LocalScope::new`]. Not `Send`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone)]
enum Binding {
    Uninitialized,
    Bound(Value),
}

/// One frame of bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<Environment>,
}

/// Handle to a scope frame. Cloning shares the frame.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A root frame with no parent (the globals).
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A new empty frame whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    /// Bind `name` in this frame. `None` declares it without a value.
    ///
    /// Redefining a name in the same frame overwrites it.
    pub fn define(&self, name: &str, value: Option<Value>) {
        trace!(name, initialized = value.is_some(), "define");
        let binding = value.map_or(Binding::Uninitialized, Binding::Bound);
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.to_string(), binding);
    }

    /// Read `name` from the nearest frame that declares it.
    pub fn get(&self, name: &str) -> Result<Value, LookupError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let scope = frame.scope.borrow();
                match scope.bindings.get(name) {
                    Some(Binding::Bound(value)) => return Ok(value.clone()),
                    Some(Binding::Uninitialized) => return Err(LookupError::Uninitialized),
                    None => scope.parent.clone(),
                }
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(LookupError::Undefined),
            }
        }
    }

    /// Overwrite `name` in the nearest frame that declares it.
    ///
    /// Never creates a binding; an uninitialized declaration counts.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), LookupError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let mut scope = frame.scope.borrow_mut();
                if let Some(binding) = scope.bindings.get_mut(name) {
                    trace!(name, "assign");
                    *binding = Binding::Bound(value);
                    return Ok(());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(LookupError::Undefined),
            }
        }
    }

    /// Whether this frame (not its parents) declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.scope.borrow().bindings.is_empty()
    }

    /// `name = value` for each binding of this frame, sorted by name.
    pub fn dump(&self) -> String {
        let scope = self.scope.borrow();
        if scope.bindings.is_empty() {
            return "[Empty Environment]".to_string();
        }

        let mut entries: Vec<(&String, &Binding)> = scope.bindings.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        entries
            .into_iter()
            .map(|(name, binding)| match binding {
                Binding::Bound(value) => format!("{name} = {value}"),
                Binding::Uninitialized => format!("{name} = <uninitialized>"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows this frame's names only; frames can be cyclic through closures.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
