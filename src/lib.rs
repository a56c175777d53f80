//! # Biodivine/LibTruthTable
//!
//! This crate provides a small toolkit for propositional logic: it parses plain-text
//! formulas into explicit expression trees and evaluates them over every assignment of
//! their literals to produce complete truth tables.
//!
//! The formula alphabet is intentionally minimal: literals are single uppercase ASCII
//! letters, connectives are `¬`, `∧`, `∨`, `⇒` and `⇔`, and parentheses group
//! sub-formulas. The parser mirrors the way formulas are typed left-to-right: there is
//! **no operator precedence**. Chained binary connectives fold strictly to the left
//! (`A∧B∨C` is `(A∧B)∨C`) and only parentheses and negation override this grouping.
//!
//! Malformed input never aborts a build. Unrecognized characters are skipped, an
//! unclosed bracket extends its group to the end of the text, and incomplete nodes
//! evaluate to `false`; such conditions are reported through the `log` facade, so a
//! caller always receives a structurally valid table.
//!
//! ```rust
//! use biodivine_lib_truth_table::{Expression, TruthTable};
//!
//! let (expression, literals) = Expression::parse("(A∧B)⇒¬C");
//! let table = TruthTable::new(&expression, &literals);
//!
//! assert_eq!(vec!["(A", "∧", "B)", "⇒", "¬", "C"], *table.header());
//! assert_eq!(3, table.main_column());
//! assert_eq!(8, table.rows().len());
//! for row in table.rows() {
//!     assert_eq!(table.header().len(), row.len());
//! }
//! ```
//!

use fxhash::FxHashMap;

pub mod op_function;
pub mod tutorial;

/// **(internal)** Implementation of the `Connective` symbol catalogue.
mod _impl_connective;

/// **(internal)** Implementation of the `Expression` tree, including the evaluator.
mod _impl_expression;

/// **(internal)** The formula parser, including bracket matching.
mod _impl_parser;

/// **(internal)** Implementation of the `LiteralSet`.
mod _impl_literal_set;

/// **(internal)** Implementation of `Valuation` and `ValuationIterator`.
mod _impl_valuation;

/// **(internal)** Implementation of the `AssignmentContext`.
mod _impl_assignment_context;

/// **(internal)** Implementation of the `TruthTable` assembler.
mod _impl_truth_table;

/// **(internal)** Several complex test scenarios for whole truth tables.
#[cfg(test)]
mod _test_truth_table;

/// **(internal)** The bracket glyph that opens a group in a formula and is re-inserted
/// in front of a bracketed sub-expression when a table header is rendered.
const OPEN_BRACKET: char = '(';

/// **(internal)** The bracket glyph closing a group.
const CLOSE_BRACKET: char = ')';

/// One of the recognized operator symbols of the formula alphabet.
///
/// `Negation` is the only unary connective: its operand sits in the *right* slot of an
/// `Expression` node and the left slot stays empty. All other connectives are binary.
/// The corresponding truth functions live in the `op_function` module.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Connective {
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
}

/// Anything that can occupy a child slot of an `Expression`: a literal name, or a
/// nested sub-expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Literal(char),
    SubExpression(Box<Expression>),
}

/// A node of a parsed formula tree.
///
/// A node owns up to two child operands and the connective applied to them. Children
/// are exclusively owned, so the tree has no sharing and no cycles. The `bracketed`
/// flag remembers whether the node was written inside an explicit parenthesis group in
/// the source text; it affects rendering only, never evaluation.
///
/// A node whose connective is `Negation` has no left child. A node without any
/// connective is a bare passthrough produced from degenerate input; it evaluates
/// to `false`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Expression {
    left: Option<Operand>,
    right: Option<Operand>,
    connective: Option<Connective>,
    bracketed: bool,
}

/// The set of literal names encountered during one parse, in order of first
/// appearance, together with a name→index map into assignment vectors.
///
/// The ordering is load-bearing: it fixes the column order of the generated
/// valuations. A `LiteralSet` is a value returned by the parser and threaded
/// explicitly into table construction, so independent builds cannot corrupt each
/// other.
#[derive(Clone, Debug, Default)]
pub struct LiteralSet {
    literals: Vec<char>,
    index_mapping: FxHashMap<char, usize>,
}

/// Exactly describes one assignment of boolean values to the literals of a
/// `LiteralSet` — one row of a truth-table build.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Valuation(Vec<bool>);

/// Exhaustively iterates over all valuations of a certain number of literals,
/// starting from the all-`true` assignment.
///
/// Be aware of the exponential number of iterations!
#[derive(Clone)]
pub struct ValuationIterator(Option<Valuation>);

/// A pairing of one `Valuation` with the `LiteralSet` that fixes its name→index
/// mapping; everything the evaluator needs to resolve literal names.
#[derive(Clone, Copy)]
pub struct AssignmentContext<'a> {
    literals: &'a LiteralSet,
    valuation: &'a Valuation,
}

/// A complete truth table of one formula: a header row of rendered tokens, one row of
/// boolean values per valuation (column-aligned with the header), and the index of the
/// main column — the one holding the value of the outermost connective.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    header: Vec<String>,
    rows: Vec<Vec<bool>>,
    main_column: usize,
}
