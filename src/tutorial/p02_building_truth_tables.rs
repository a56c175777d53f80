//! # Building truth tables
//!
//! `TruthTable::new` (or the `TruthTable::from_formula` shortcut) evaluates an
//! expression in every valuation of its literals. The header and the value rows are
//! produced by the same traversal of the tree, so every header token owns exactly one
//! value column, and brackets from the source text are re-inserted around the tokens
//! of the sub-expression they grouped. `main_column` points at the column of the
//! outermost connective — the overall truth value of the formula.
//!
//! ```rust
//! use biodivine_lib_truth_table::TruthTable;
//!
//! let table = TruthTable::from_formula("¬A∨B");
//! assert_eq!(vec!["¬", "A", "∨", "B"], *table.header());
//! assert_eq!(2, table.main_column());
//! assert_eq!(
//!     "¬ A ∨ B\n\
//!      0 1 1 1\n\
//!      0 1 0 0\n\
//!      1 0 1 1\n\
//!      1 0 1 0\n",
//!     table.to_string()
//! );
//! ```
//!
//! The first literal of the formula is the slowest-changing one and `true` sorts
//! before `false`; the valuations themselves are available through
//! `LiteralSet::valuations`:
//!
//! ```rust
//! use biodivine_lib_truth_table::Expression;
//!
//! let (_, literals) = Expression::parse("A⇒B");
//! let all: Vec<String> = literals.valuations().map(|v| v.to_string()).collect();
//! assert_eq!(vec!["[1,1]", "[1,0]", "[0,1]", "[0,0]"], all);
//! ```
