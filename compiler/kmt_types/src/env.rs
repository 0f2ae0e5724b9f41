//! Name resolution scopes for the binder.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{NumberType, Type};

/// Where identifiers are looked up.
///
/// Top-level statements see the globals. A lambda body sees only its own
/// parameters; globals are deliberately invisible there.
pub(crate) enum TypeEnv<'a> {
    Globals(&'a FxHashMap<String, Type>),
    Lambda(SmallVec<[(&'a str, NumberType); 2]>),
}

impl<'a> TypeEnv<'a> {
    /// Scope for `map(seq, param -> body)`.
    pub(crate) fn map_lambda(param: &'a str, element: NumberType) -> Self {
        let mut bindings = SmallVec::new();
        bindings.push((param, element));
        TypeEnv::Lambda(bindings)
    }

    /// Scope for `reduce(seq, n, acc elem -> body)`.
    ///
    /// If both parameters share a name, the element binding wins.
    pub(crate) fn reduce_lambda(
        accumulator: &'a str,
        accumulator_ty: NumberType,
        element: &'a str,
        element_ty: NumberType,
    ) -> Self {
        let mut bindings = SmallVec::new();
        bindings.push((accumulator, accumulator_ty));
        bindings.push((element, element_ty));
        TypeEnv::Lambda(bindings)
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<Type> {
        match self {
            TypeEnv::Globals(globals) => globals.get(name).copied(),
            TypeEnv::Lambda(bindings) => bindings
                .iter()
                .rev()
                .find(|(n, _)| *n == name)
                .map(|&(_, ty)| Type::Number(ty)),
        }
    }
}
