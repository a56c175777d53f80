//! # Parsing formulas
//!
//! Formulas are flat strings over single uppercase ASCII literals, the connectives
//! `¬`, `∧`, `∨`, `⇒` and `⇔`, and parentheses. `Expression::parse` turns such a
//! string into an expression tree together with a `LiteralSet` — the literals of the
//! formula in order of first appearance:
//!
//! ```rust
//! use biodivine_lib_truth_table::{Connective, Expression};
//!
//! let (expression, literals) = Expression::parse("A∧C∨B∧C");
//! assert_eq!(vec!['A', 'C', 'B'], literals.literals());
//!
//! // There is no operator precedence. Chained binary connectives fold strictly to
//! // the left, so this tree is ((A∧C)∨B)∧C:
//! assert_eq!(Some(Connective::Conjunction), expression.connective());
//! assert_eq!("A∧C∨B∧C", expression.to_string());
//! ```
//!
//! Negation applies to exactly one atomic unit — the next literal, bracketed group,
//! or nested negation — and keeps that unit in the right slot of its node:
//!
//! ```rust
//! use biodivine_lib_truth_table::{Connective, Expression, Operand};
//!
//! let (expression, _) = Expression::parse("¬(A∨B)");
//! assert_eq!(Some(Connective::Negation), expression.connective());
//! assert_eq!(None, expression.left());
//! match expression.right() {
//!     Some(Operand::SubExpression(inner)) => assert!(inner.is_bracketed()),
//!     _ => panic!("Expected a bracketed group."),
//! }
//! ```
//!
//! Parsing never fails. Unrecognized characters are skipped, and a group that is
//! never closed simply extends to the end of the text (the condition is reported
//! through the `log` facade):
//!
//! ```rust
//! use biodivine_lib_truth_table::Expression;
//!
//! let (expression, _) = Expression::parse("(A∨B");
//! assert!(expression.is_bracketed());
//! assert_eq!("(A∨B)", expression.to_string());
//! ```
