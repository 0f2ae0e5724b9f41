//! Variable storage for the interpreter.
//!
//! There are exactly two kinds of scope and they never nest: the global
//! [`Environment`] seen by top-level statements, and the one- or
//! two-binding scope of a lambda body. A lambda cannot read globals.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::value::{NumberValue, Value};

/// Globals written by `var`, in program order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or rebind `name`.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Scope for evaluating a top-level expression.
    pub fn scope(&self) -> Scope<'_> {
        Scope::Globals(self)
    }

    pub fn into_values(self) -> FxHashMap<String, Value> {
        self.values
    }
}

/// Where an identifier is resolved.
#[derive(Clone, Debug)]
pub enum Scope<'a> {
    Globals(&'a Environment),
    /// Lambda parameters. Later bindings shadow earlier ones.
    Lambda(SmallVec<[(&'a str, NumberValue); 2]>),
}

impl Scope<'_> {
    pub fn lookup(&self, name: &str) -> Option<Value> {
        match self {
            Scope::Globals(env) => env.get(name).cloned(),
            Scope::Lambda(bindings) => bindings
                .iter()
                .rev()
                .find(|(n, _)| *n == name)
                .map(|&(_, v)| Value::Number(v)),
        }
    }
}

#[cfg(test)]
mod tests;
