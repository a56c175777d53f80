use super::{Connective, Expression, LiteralSet, Operand, CLOSE_BRACKET, OPEN_BRACKET};
use log::warn;

/// **(internal)** Scanning mode of the parser routine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseMode {
    /// Consume the whole input slice.
    Full,
    /// Stop as soon as one atomic unit is attached: a literal, one fully bracketed
    /// group, or a nested negation. Used for the operand of `¬`.
    FirstUnit,
}

/// Methods for parsing expressions from text.
impl Expression {
    /// Parse `text` into an expression tree, together with the set of literals the
    /// formula uses (in order of first appearance).
    ///
    /// Parsing never fails: whitespace and unrecognized characters are skipped, an
    /// unmatched opening bracket extends its group to the end of the text, and other
    /// malformed fragments degrade into nodes that evaluate to `false`.
    ///
    /// There is no precedence between connectives. Chained binary connectives fold
    /// strictly to the left, so `A∧C∨B∧C` parses as `((A∧C)∨B)∧C`.
    ///
    /// ```rust
    /// use biodivine_lib_truth_table::{Connective, Expression};
    ///
    /// let (expression, literals) = Expression::parse("¬A∨B");
    /// assert_eq!(Some(Connective::Disjunction), expression.connective());
    /// assert_eq!(vec!['A', 'B'], literals.literals());
    /// ```
    pub fn parse(text: &str) -> (Expression, LiteralSet) {
        let chars: Vec<char> = text.chars().collect();
        let mut literals = LiteralSet::default();
        let (node, _) = parse_group(&chars, ParseMode::Full, &mut literals);
        let expression = match node.into_operand() {
            Some(Operand::SubExpression(inner)) => *inner,
            Some(operand) => Expression::of_operand(operand),
            None => Expression::default(),
        };
        (expression, literals)
    }
}

/// **(internal)** One pass of the linear scan. Returns the parsed node together with
/// the number of characters of `chars` it consumed, so a caller in the middle of its
/// own scan can advance past the sub-parse.
fn parse_group(chars: &[char], mode: ParseMode, literals: &mut LiteralSet) -> (Expression, usize) {
    let mut node = Expression::default();
    let mut pending: Option<Connective> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if let Some(connective) = Connective::from_symbol(c) {
            if connective == Connective::Negation {
                let (unit, consumed) = parse_group(&chars[i + 1..], ParseMode::FirstUnit, literals);
                let negated = Expression::negation_of(unit.into_operand());
                let operand = Operand::SubExpression(Box::new(negated));
                attach_operand(&mut node, Some(operand), &mut pending);
                if mode == ParseMode::FirstUnit {
                    return (node, i + 1 + consumed);
                }
                i += consumed;
            } else if mode == ParseMode::Full {
                // The first connective of the scope applies immediately, later ones
                // are deferred until the operand that follows them arrives.
                if node.connective.is_none() {
                    node.connective = Some(connective);
                } else {
                    pending = Some(connective);
                }
            }
            // A binary connective cannot start an atomic unit; skipped in
            // `FirstUnit` mode.
        } else if c == OPEN_BRACKET {
            let close = matching_bracket(chars, i);
            let (mut group, _) = parse_group(&chars[i + 1..close], ParseMode::Full, literals);
            group.bracketed = true;
            if mode == ParseMode::FirstUnit {
                // The group is the unit itself, not a new child.
                return (group, close + 1);
            }
            attach_operand(&mut node, group.into_operand(), &mut pending);
            i = close;
        } else if is_literal(c) {
            literals.insert(c);
            attach_operand(&mut node, Some(Operand::Literal(c)), &mut pending);
            if mode == ParseMode::FirstUnit {
                return (node, i + 1);
            }
        }
        i += 1;
    }
    (node, chars.len())
}

/// **(internal)** The "attach child" rule of the scan. Children fill `left` and then
/// `right` in encounter order; a third operand promotes the whole node into its own
/// left child, and the connective recorded just before that operand takes over. This
/// is what makes chains of binary connectives fold to the left.
fn attach_operand(
    node: &mut Expression,
    operand: Option<Operand>,
    pending: &mut Option<Connective>,
) {
    let operand = match operand {
        Some(operand) => operand,
        None => return,
    };
    if node.left.is_none() {
        node.left = Some(operand);
    } else if node.right.is_none() {
        node.right = Some(operand);
        if pending.is_some() {
            node.connective = pending.take();
        }
    } else {
        let connective = node.connective;
        let folded = std::mem::take(node);
        node.left = Some(Operand::SubExpression(Box::new(folded)));
        node.right = Some(operand);
        node.connective = pending.take().or(connective);
    }
}

/// **(internal)** Given the position of an opening bracket, find the index of its
/// matching closing bracket. When the bracket is never closed, the group is taken to
/// extend to the end of the input and `chars.len()` is returned.
fn matching_bracket(chars: &[char], open: usize) -> usize {
    let mut depth = 0;
    for (i, c) in chars.iter().enumerate().skip(open + 1) {
        if *c == OPEN_BRACKET {
            depth += 1;
        } else if *c == CLOSE_BRACKET {
            if depth == 0 {
                return i;
            }
            depth -= 1;
        }
    }
    warn!("No closing bracket found; the group extends to the end of the formula.");
    chars.len()
}

/// **(internal)** Literal names are single uppercase ASCII letters.
fn is_literal(c: char) -> bool {
    c.is_ascii_uppercase()
}
