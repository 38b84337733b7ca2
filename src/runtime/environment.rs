use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lexer::Token;
use crate::parser::{BindingKind, DeclaredType};
use crate::runtime::Value;

/// Handle to a scope frame in the environment arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// A named storage slot with fixed mutability and declared type
///
/// Only `value` ever changes after creation, and only for `let` bindings.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Declaring keyword, fixed for the binding's lifetime
    pub keyword: BindingKind,
    /// Declared static type, fixed for the binding's lifetime
    pub declared_type: DeclaredType,
    /// Current runtime value (`Value::Null` until first initialized)
    pub value: Value,
}

/// Environment for variable scoping
///
/// Scopes live in an arena of frames indexed by [`ScopeId`]; each frame
/// records its enclosing frame's handle. The interpreter threads the
/// current handle through its calls, so an error propagating out of a
/// block leaves the caller's handle untouched. Frames follow strict
/// stack discipline because nothing in the language captures scopes.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

/// Single scope frame in the arena
#[derive(Debug)]
struct Scope {
    /// Bindings declared in this frame
    bindings: HashMap<String, Declaration>,
    /// Handle of the enclosing frame (None for the global frame)
    enclosing: Option<ScopeId>,
}

impl Environment {
    /// Creates a new environment holding only the global scope
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope {
                bindings: HashMap::new(),
                enclosing: None,
            }],
        }
    }

    /// Handle of the global scope
    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Pushes a new frame enclosed by `enclosing` and returns its handle
    pub fn begin_scope(&mut self, enclosing: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            enclosing: Some(enclosing),
        });
        id
    }

    /// Discards `scope` and every frame pushed after it
    ///
    /// Must be called on every exit path of the block that began the
    /// scope, the error path included.
    pub fn end_scope(&mut self, scope: ScopeId) {
        debug_assert!(scope.0 > 0, "the global scope is never discarded");
        self.scopes.truncate(scope.0);
    }

    /// Declares a binding in the given frame only
    ///
    /// A repeated `add` for the same name in the same frame overwrites;
    /// a matching name in an enclosing frame is shadowed, never mutated.
    pub fn add(
        &mut self,
        scope: ScopeId,
        name: String,
        keyword: BindingKind,
        declared_type: DeclaredType,
        value: Value,
    ) {
        self.scopes[scope.0].bindings.insert(
            name,
            Declaration {
                keyword,
                declared_type,
                value,
            },
        );
    }

    /// Gets the value of a binding, searching outward from `scope`
    pub fn get(&self, scope: ScopeId, name: &Token) -> Result<Value> {
        let mut cursor = Some(scope);
        while let Some(id) = cursor {
            let frame = &self.scopes[id.0];
            if let Some(declaration) = frame.bindings.get(&name.lexeme) {
                return Ok(declaration.value.clone());
            }
            cursor = frame.enclosing;
        }

        Err(Error::interpret("Variable not found", name.clone()))
    }

    /// Reassigns an existing binding, searching outward from `scope`
    ///
    /// Constants reject the write; `let` bindings check the new value
    /// against the declared type before replacing the old one in place.
    pub fn assign(&mut self, scope: ScopeId, name: &Token, value: Value) -> Result<()> {
        let mut cursor = Some(scope);
        let mut found = None;
        while let Some(id) = cursor {
            let frame = &self.scopes[id.0];
            if frame.bindings.contains_key(&name.lexeme) {
                found = Some(id);
                break;
            }
            cursor = frame.enclosing;
        }

        let Some(id) = found else {
            return Err(Error::interpret(
                format!("Undefined variable '{}'.", name.lexeme),
                name.clone(),
            ));
        };

        let Some(declaration) = self.scopes[id.0].bindings.get_mut(&name.lexeme) else {
            return Err(Error::interpret("Variable not found", name.clone()));
        };

        if declaration.keyword == BindingKind::Const {
            return Err(Error::interpret("Constant cannot be changed", name.clone()));
        }

        check_declared_type(declaration.declared_type, &value, name)?;
        declaration.value = value;
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a runtime value against a binding's declared type
///
/// Used identically at declaration time (when an initializer is present)
/// and at reassignment time.
pub fn check_declared_type(declared: DeclaredType, value: &Value, name: &Token) -> Result<()> {
    let ok = match declared {
        DeclaredType::Boolean => matches!(value, Value::Bool(_)),
        DeclaredType::Number => matches!(value, Value::Number(_)),
        DeclaredType::String => matches!(value, Value::Str(_)),
    };
    if ok {
        Ok(())
    } else {
        Err(Error::interpret(
            format!("Expected a {}", declared.keyword()),
            name.clone(),
        ))
    }
}
