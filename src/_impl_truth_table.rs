use super::{
    AssignmentContext, Expression, LiteralSet, Operand, TruthTable, CLOSE_BRACKET, OPEN_BRACKET,
};
use std::fmt::{Display, Error, Formatter};

impl TruthTable {
    /// Build the complete truth table of `expression` over the literals in `literals`
    /// (normally the pair returned by `Expression::parse`).
    ///
    /// The header and every value row are produced by the same traversal of the tree,
    /// so values align with header tokens column for column.
    pub fn new(expression: &Expression, literals: &LiteralSet) -> TruthTable {
        let mut header = Vec::new();
        let mut main_column = 0;
        emit_header(expression, true, &mut header, &mut main_column);
        let mut rows = Vec::new();
        for valuation in literals.valuations() {
            let context = AssignmentContext::new(literals, &valuation);
            let mut row = Vec::with_capacity(header.len());
            emit_row(expression, &context, &mut row);
            rows.push(row);
        }
        TruthTable {
            header,
            rows,
            main_column,
        }
    }

    /// Parse `text` and build its truth table in one step.
    ///
    /// ```rust
    /// use biodivine_lib_truth_table::TruthTable;
    ///
    /// let table = TruthTable::from_formula("A⇒B");
    /// assert_eq!(vec!["A", "⇒", "B"], *table.header());
    /// assert_eq!(1, table.main_column());
    /// ```
    pub fn from_formula(text: &str) -> TruthTable {
        let (expression, literals) = Expression::parse(text);
        TruthTable::new(&expression, &literals)
    }

    /// The header tokens, one per column: literal names and connective symbols, with
    /// bracket glyphs fused onto the first and last token of every bracketed
    /// sub-expression.
    pub fn header(&self) -> &Vec<String> {
        &self.header
    }

    /// The value rows, one per valuation, aligned column for column with the header.
    pub fn rows(&self) -> &Vec<Vec<bool>> {
        &self.rows
    }

    /// The index of the column holding the value of the outermost connective — the
    /// overall truth value of the formula.
    pub fn main_column(&self) -> usize {
        self.main_column
    }
}

/// **(internal)** Emit the header tokens of `expression`: left sub-traversal, the
/// connective, right sub-traversal. A negation node has no left operand, so its
/// symbol comes out right before the operand it negates. The sub-sequence of a
/// bracketed node is decorated with bracket glyphs on its first and last token.
fn emit_header(
    expression: &Expression,
    root: bool,
    tokens: &mut Vec<String>,
    main_column: &mut usize,
) {
    let first = tokens.len();
    if let Some(left) = expression.left() {
        emit_header_operand(left, tokens, main_column);
    }
    if let Some(connective) = expression.connective() {
        tokens.push(connective.symbol().to_string());
    }
    if root {
        // The last token emitted so far belongs to the outermost connective (or to
        // a bare literal when the formula has no connective at all).
        *main_column = tokens.len().saturating_sub(1);
    }
    if let Some(right) = expression.right() {
        emit_header_operand(right, tokens, main_column);
    }
    if expression.is_bracketed() && tokens.len() > first {
        tokens[first].insert(0, OPEN_BRACKET);
        if let Some(last) = tokens.last_mut() {
            last.push(CLOSE_BRACKET);
        }
    }
}

fn emit_header_operand(operand: &Operand, tokens: &mut Vec<String>, main_column: &mut usize) {
    match operand {
        Operand::Literal(name) => tokens.push(name.to_string()),
        Operand::SubExpression(inner) => emit_header(inner, false, tokens, main_column),
    }
}

/// **(internal)** Emit one row of values using the same traversal shape as
/// `emit_header`: a literal position takes the assigned value, a connective position
/// takes the evaluation of the sub-tree rooted at that connective.
fn emit_row(expression: &Expression, context: &AssignmentContext, row: &mut Vec<bool>) {
    if let Some(left) = expression.left() {
        emit_row_operand(left, context, row);
    }
    if expression.connective().is_some() {
        row.push(expression.eval_in(context));
    }
    if let Some(right) = expression.right() {
        emit_row_operand(right, context, row);
    }
}

fn emit_row_operand(operand: &Operand, context: &AssignmentContext, row: &mut Vec<bool>) {
    match operand {
        Operand::Literal(name) => row.push(context.value_of(*name)),
        Operand::SubExpression(inner) => emit_row(inner, context, row),
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for (i, token) in self.header.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                let width = self
                    .header
                    .get(i)
                    .map(|token| token.chars().count())
                    .unwrap_or(1);
                write!(f, "{:>width$}", if *value { 1 } else { 0 }, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{op_function, Expression, TruthTable};

    #[test]
    fn table_implication() {
        let table = TruthTable::from_formula("A⇒B");
        assert_eq!(vec!["A", "⇒", "B"], *table.header());
        assert_eq!(1, table.main_column());
        assert_eq!(4, table.rows().len());
        let expected = vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![false, true, true],
            vec![false, true, false],
        ];
        assert_eq!(expected, *table.rows());
    }

    #[test]
    fn table_negation() {
        let table = TruthTable::from_formula("¬A");
        assert_eq!(vec!["¬", "A"], *table.header());
        assert_eq!(0, table.main_column());
        assert_eq!(vec![vec![false, true], vec![true, false]], *table.rows());
    }

    #[test]
    fn table_bracket_decoration() {
        let table = TruthTable::from_formula("¬(A∧B)");
        assert_eq!(vec!["¬", "(A", "∧", "B)"], *table.header());
        assert_eq!(0, table.main_column());
        for row in table.rows() {
            assert_eq!(table.header().len(), row.len());
        }
    }

    #[test]
    fn table_single_literal() {
        let table = TruthTable::from_formula("A");
        assert_eq!(vec!["A"], *table.header());
        assert_eq!(0, table.main_column());
        assert_eq!(vec![vec![true], vec![false]], *table.rows());
    }

    #[test]
    fn table_main_column_values() {
        let table = TruthTable::from_formula("(A∨B)⇔C");
        assert_eq!(vec!["(A", "∨", "B)", "⇔", "C"], *table.header());
        assert_eq!(3, table.main_column());

        let (_, literals) = Expression::parse("(A∨B)⇔C");
        for (row, valuation) in table.rows().iter().zip(literals.valuations()) {
            let expected = op_function::biconditional(
                op_function::disjunction(valuation.value(0), valuation.value(1)),
                valuation.value(2),
            );
            assert_eq!(expected, row[table.main_column()]);
        }
    }

    #[test]
    fn table_malformed_trailing_connective() {
        // A missing operand evaluates to false instead of failing the build.
        let table = TruthTable::from_formula("A∧");
        assert_eq!(vec!["A", "∧"], *table.header());
        assert_eq!(
            vec![vec![true, false], vec![false, false]],
            *table.rows()
        );
    }

    #[test]
    fn table_empty_formula() {
        let table = TruthTable::from_formula("");
        assert!(table.header().is_empty());
        assert_eq!(1, table.rows().len());
        assert!(table.rows()[0].is_empty());
    }

    #[test]
    fn table_print() {
        let expected = "A ∧ B\n1 1 1\n1 0 0\n0 0 1\n0 0 0\n";
        assert_eq!(expected, TruthTable::from_formula("A∧B").to_string());
    }
}
