use std::{cell::RefCell, rc::Rc};

use crate::interpreter::value::core::Value;

#[derive(Debug, Default)]
struct Scope {
    bindings: Vec<(String, Value)>,
    parent:   Option<Env>,
}

/// A scope in the environment chain.
///
/// Each scope holds an ordered list of name/value bindings and an optional
/// parent. Handles are cheap to clone and share the same scope, so a call
/// scope can stay linked to its caller while the caller keeps mutating it.
///
/// # Example
/// ```
/// use tora::interpreter::{environment::Env, value::core::Value};
///
/// let root = Env::root();
/// root.define("a", Value::Numeric(1.0), false);
///
/// let call = root.child();
/// call.define("a", Value::Numeric(2.0), false);
/// assert_eq!(root.lookup("a", true), Some(Value::Numeric(2.0)));
///
/// call.define("a", Value::Numeric(3.0), true);
/// assert_eq!(root.lookup("a", true), Some(Value::Numeric(2.0)));
/// assert_eq!(call.lookup("a", false), Some(Value::Numeric(3.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env(Rc<RefCell<Scope>>);

impl Env {
    /// Creates the root scope of a program.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: Vec::new(),
                                          parent:   Some(self.clone()), })))
    }

    /// Binds `name` to `value`.
    ///
    /// With `local_only` unset, the nearest scope in the chain that already
    /// binds `name` is updated. With `local_only` set, only this scope is
    /// searched. When no binding is found a new one is appended to this
    /// scope, never to an ancestor.
    pub fn define(&self, name: &str, value: Value, local_only: bool) {
        let mut current = Some(self.clone());

        while let Some(env) = current {
            {
                let mut scope = env.0.borrow_mut();
                if let Some(slot) = scope.bindings.iter_mut().find(|(n, _)| n == name) {
                    slot.1 = value;
                    return;
                }
            }
            if local_only {
                break;
            }
            current = env.0.borrow().parent.clone();
        }

        self.0.borrow_mut().bindings.push((name.to_string(), value));
    }

    /// Looks `name` up in this scope and, if `search_parent` is set, in its
    /// ancestors. The first binding found wins.
    ///
    /// # Returns
    /// `None` if the name is not bound, which is not an error at this level.
    #[must_use]
    pub fn lookup(&self, name: &str, search_parent: bool) -> Option<Value> {
        let mut current = Some(self.clone());

        while let Some(env) = current {
            let scope = env.0.borrow();
            if let Some((_, value)) = scope.bindings.iter().find(|(n, _)| n == name) {
                return Some(value.clone());
            }
            if !search_parent {
                return None;
            }
            current = scope.parent.clone();
        }
        None
    }

    /// Number of scopes from this one up to the root, inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.0.borrow().parent.clone();
        while let Some(env) = current {
            depth += 1;
            current = env.0.borrow().parent.clone();
        }
        depth
    }
}
