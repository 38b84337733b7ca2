use std::io::Write;

use crate::error::{Error, Result};
use crate::lexer::TokenKind;
use crate::parser::{Expression, Statement};
use crate::runtime::environment::{check_declared_type, Environment, ScopeId};
use crate::runtime::Value;

/// Tree-walking interpreter for Typelet
///
/// Execution is a synchronous pre-order walk: statements execute by
/// kind-based dispatch, expressions evaluate to [`Value`]s by the same
/// discipline. The current scope handle is threaded through every call;
/// print output goes to the writer supplied to [`Interpreter::interpret`].
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Creates a new interpreter with an empty global scope
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
        }
    }

    /// Executes a statement list against the global scope
    ///
    /// The first error halts execution at the point of failure;
    /// statements already executed keep their effects.
    pub fn interpret(&mut self, statements: &[Statement], out: &mut dyn Write) -> Result<()> {
        let global = self.env.global();
        for statement in statements {
            self.execute(statement, global, out)?;
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Statement, scope: ScopeId, out: &mut dyn Write) -> Result<()> {
        match statement {
            Statement::Expression(expression) => {
                self.evaluate(expression, scope)?;
                Ok(())
            }

            Statement::Print(expression) => {
                let value = self.evaluate(expression, scope)?;
                writeln!(out, "{}", value)?;
                Ok(())
            }

            Statement::Variable {
                name,
                initializer,
                declared_type,
                keyword,
            } => {
                // A declaration without an initializer binds the absent
                // value and skips the declared-type check entirely; a
                // later reassignment is still strictly checked.
                let value = match initializer {
                    None => Value::Null,
                    Some(expression) => {
                        let value = self.evaluate(expression, scope)?;
                        check_declared_type(*declared_type, &value, name)?;
                        value
                    }
                };
                self.env
                    .add(scope, name.lexeme.clone(), *keyword, *declared_type, value);
                Ok(())
            }

            Statement::Block(statements) => self.execute_block(statements, scope, out),

            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                // No scope of its own: a bare non-block branch executes
                // directly in the enclosing scope.
                if self.evaluate(condition, scope)?.is_truthy() {
                    self.execute(then_branch, scope, out)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, scope, out)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn execute_block(
        &mut self,
        statements: &[Statement],
        enclosing: ScopeId,
        out: &mut dyn Write,
    ) -> Result<()> {
        let scope = self.env.begin_scope(enclosing);
        let result = statements
            .iter()
            .try_for_each(|statement| self.execute(statement, scope, out));
        // Runs on the error path too; the caller keeps its own handle
        self.env.end_scope(scope);
        result
    }

    fn evaluate(&mut self, expression: &Expression, scope: ScopeId) -> Result<Value> {
        match expression {
            Expression::NumberLiteral(n) => Ok(Value::Number(*n)),
            Expression::StringLiteral(s) => Ok(Value::Str(s.clone())),
            Expression::BoolLiteral(b) => Ok(Value::Bool(*b)),

            Expression::Grouping(inner) => self.evaluate(inner, scope),

            Expression::Unary { operator, operand } => {
                let value = self.evaluate(operand, scope)?;
                match value.as_number() {
                    Some(n) => Ok(Value::Number(-n)),
                    None => Err(Error::interpret(
                        "Operand must be a number.",
                        operator.clone(),
                    )),
                }
            }

            Expression::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, scope)?;
                let right = self.evaluate(right, scope)?;

                // `+` is the one operator with a non-numeric path:
                // anything that is not number + number concatenates the
                // textual forms of both sides, booleans and null included.
                if operator.kind == TokenKind::Plus {
                    return Ok(match (left.as_number(), right.as_number()) {
                        (Some(a), Some(b)) => Value::Number(a + b),
                        _ => Value::Str(format!("{}{}", left, right)),
                    });
                }

                let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
                    return Err(Error::interpret(
                        "Operands must be numbers.",
                        operator.clone(),
                    ));
                };

                match operator.kind {
                    TokenKind::Greater => Ok(Value::Bool(a > b)),
                    TokenKind::GreaterEqual => Ok(Value::Bool(a >= b)),
                    TokenKind::Less => Ok(Value::Bool(a < b)),
                    TokenKind::LessEqual => Ok(Value::Bool(a <= b)),
                    TokenKind::Minus => Ok(Value::Number(a - b)),
                    TokenKind::Slash => Ok(Value::Number(a / b)),
                    TokenKind::Star => Ok(Value::Number(a * b)),
                    // The parser only builds Binary nodes for the
                    // operators above
                    _ => Err(Error::interpret(
                        format!("Unknown binary operator '{}'.", operator.lexeme),
                        operator.clone(),
                    )),
                }
            }

            Expression::Variable(name) => self.env.get(scope, name),

            Expression::Assignment { name, value } => {
                let value = self.evaluate(value, scope)?;
                self.env.assign(scope, name, value.clone())?;
                Ok(value)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
