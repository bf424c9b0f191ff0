use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

/// Name resolution for code generation.
///
/// Each name maps to a stack of bindings and the top of the stack is the
/// visible one. Inner bindings shadow outer ones until they are popped.
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    bindings: HashMap<String, Vec<V>>,
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        SymbolTable {
            bindings: HashMap::new(),
        }
    }
}

impl<V> SymbolTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: V) {
        self.bindings.entry(name.into()).or_default().push(value);
    }

    /// Removes the innermost binding of `name`, exposing the one below it.
    pub fn pop(&mut self, name: &str) -> Option<V> {
        let stack = self.bindings.get_mut(name)?;
        let value = stack.pop();
        if stack.is_empty() {
            self.bindings.remove(name);
        }
        value
    }

    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.bindings.get(name).and_then(|stack| stack.last())
    }

    /// Number of live bindings for `name`.
    pub fn depth(&self, name: &str) -> usize {
        self.bindings.get(name).map_or(0, Vec::len)
    }

    /// Opens a scope. Everything bound through the returned guard is popped
    /// when it is dropped.
    pub fn scope(&mut self) -> Scope<'_, V> {
        Scope {
            table: self,
            names: vec![],
        }
    }
}

/// Drop guard over a `SymbolTable`.
///
/// The guard dereferences to the table, so lookups and nested scopes go
/// through it. Bindings pushed directly on the table through the guard are
/// not tracked; only `bind` is undone on drop.
pub struct Scope<'a, V> {
    table: &'a mut SymbolTable<V>,
    names: Vec<String>,
}

impl<V> Scope<'_, V> {
    pub fn bind(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        self.table.push(name.clone(), value);
        self.names.push(name);
    }
}

impl<V> Deref for Scope<'_, V> {
    type Target = SymbolTable<V>;

    fn deref(&self) -> &Self::Target {
        self.table
    }
}

impl<V> DerefMut for Scope<'_, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.table
    }
}

impl<V> Drop for Scope<'_, V> {
    fn drop(&mut self) {
        while let Some(name) = self.names.pop() {
            self.table.pop(&name);
        }
    }
}
