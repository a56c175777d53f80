//!
//! Here, we have a small toolbox for randomized testing of the whole parse→table
//! pipeline, together with a few full-table scenarios.
//!
//! We generate a random tree of connectives, render it to formula text (binary
//! nodes are always bracketed, so the text parses back into exactly the generated
//! shape regardless of the parser's left-to-right folding) and then check that the
//! main column of the built table matches an independent evaluation of the tree in
//! every valuation. To get predictable test cases, we use a predefined set of
//! randomness seeds.

use crate::op_function;
use crate::{Connective, Expression, TruthTable};
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashMap;

#[derive(Debug)]
enum FormulaTree {
    Leaf(char),
    Not(Box<FormulaTree>),
    Binary(Connective, Box<FormulaTree>, Box<FormulaTree>),
}

impl FormulaTree {
    /// Create a new random tree of at most the given height over literals `A..=F`.
    fn new_random(height: u8, rand: &mut StdRng) -> FormulaTree {
        if height == 0 || rand.next_u32() % 8 == 0 {
            let name = (b'A' + (rand.next_u32() % 6) as u8) as char;
            return FormulaTree::Leaf(name);
        }
        if rand.next_u32() % 4 == 0 {
            return FormulaTree::Not(Box::new(FormulaTree::new_random(height - 1, rand)));
        }
        let connective = match rand.next_u32() % 4 {
            0 => Connective::Conjunction,
            1 => Connective::Disjunction,
            2 => Connective::Implication,
            _ => Connective::Biconditional,
        };
        let left = FormulaTree::new_random(height - 1, rand);
        let right = FormulaTree::new_random(height - 1, rand);
        FormulaTree::Binary(connective, Box::new(left), Box::new(right))
    }

    /// Render the tree as formula text.
    fn to_text(&self) -> String {
        match self {
            FormulaTree::Leaf(name) => name.to_string(),
            FormulaTree::Not(inner) => format!("¬{}", inner.to_text()),
            FormulaTree::Binary(connective, left, right) => format!(
                "({}{}{})",
                left.to_text(),
                connective.symbol(),
                right.to_text()
            ),
        }
    }

    /// Evaluate the tree directly against a name→value map.
    fn eval(&self, values: &HashMap<char, bool>) -> bool {
        match self {
            FormulaTree::Leaf(name) => values[name],
            FormulaTree::Not(inner) => op_function::negation(false, inner.eval(values)),
            FormulaTree::Binary(connective, left, right) => {
                connective.apply(left.eval(values), right.eval(values))
            }
        }
    }
}

#[test]
fn truth_table_complex_formula() {
    let table = TruthTable::from_formula("¬(A∧B)∨¬C");
    assert_eq!(
        vec!["¬", "(A", "∧", "B)", "∨", "¬", "C"],
        *table.header()
    );
    assert_eq!(4, table.main_column());
    assert_eq!(8, table.rows().len());

    let (_, literals) = Expression::parse("¬(A∧B)∨¬C");
    for (row, valuation) in table.rows().iter().zip(literals.valuations()) {
        let (a, b, c) = (valuation.value(0), valuation.value(1), valuation.value(2));
        let conjunction = op_function::conjunction(a, b);
        let first_negation = op_function::negation(false, conjunction);
        let second_negation = op_function::negation(false, c);
        let disjunction = op_function::disjunction(first_negation, second_negation);
        let expected = vec![
            first_negation,
            a,
            conjunction,
            b,
            disjunction,
            second_negation,
            c,
        ];
        assert_eq!(&expected, row);
    }
}

#[test]
fn truth_table_header_matches_formula_text() {
    let text = "¬(A∧B)∨¬C";
    let table = TruthTable::from_formula(text);
    assert_eq!(text, table.header().concat());
}

#[test]
fn truth_table_builds_are_idempotent() {
    let text = "¬(A∧B)∨(C⇔¬D)";
    let first = TruthTable::from_formula(text);
    let second = TruthTable::from_formula(text);
    assert_eq!(first, second);
}

#[test]
fn truth_table_random_formulas() {
    for seed in 0..10 {
        let mut rand = StdRng::seed_from_u64(seed);
        let tree = FormulaTree::new_random(3, &mut rand);
        let text = tree.to_text();
        let (expression, literals) = Expression::parse(&text);
        let table = TruthTable::new(&expression, &literals);

        assert_eq!(1 << literals.num_literals(), table.rows().len());
        for (row, valuation) in table.rows().iter().zip(literals.valuations()) {
            assert_eq!(table.header().len(), row.len());
            let values: HashMap<char, bool> = literals
                .literals()
                .iter()
                .enumerate()
                .map(|(i, name)| (*name, valuation.value(i)))
                .collect();
            assert_eq!(tree.eval(&values), row[table.main_column()]);
        }
    }
}
