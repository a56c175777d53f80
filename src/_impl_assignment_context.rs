use super::{AssignmentContext, LiteralSet, Valuation};
use log::debug;

impl<'a> AssignmentContext<'a> {
    /// Pair one valuation with the literal set that fixes its name→index mapping.
    pub fn new(literals: &'a LiteralSet, valuation: &'a Valuation) -> AssignmentContext<'a> {
        AssignmentContext {
            literals,
            valuation,
        }
    }

    /// The value assigned to the literal `name`. A name that is not covered by this
    /// assignment resolves to `false` and the condition is reported.
    pub fn value_of(&self, name: char) -> bool {
        match self.literals.index_of(name) {
            Some(index) if index < self.valuation.num_literals() => self.valuation.value(index),
            _ => {
                debug!(
                    "Literal {} is not covered by this assignment; resolving to false.",
                    name
                );
                false
            }
        }
    }
}
