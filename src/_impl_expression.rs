use super::{AssignmentContext, Connective, Expression, Operand, CLOSE_BRACKET, OPEN_BRACKET};
use log::debug;
use std::fmt::{Display, Error, Formatter};

/// Basic accessors and internal constructors.
impl Expression {
    /// The operand in the left slot, if any. A negation node has no left operand.
    pub fn left(&self) -> Option<&Operand> {
        self.left.as_ref()
    }

    /// The operand in the right slot, if any.
    pub fn right(&self) -> Option<&Operand> {
        self.right.as_ref()
    }

    /// The connective applied by this node, or `None` for a bare passthrough node
    /// produced from degenerate input.
    pub fn connective(&self) -> Option<Connective> {
        self.connective
    }

    /// True when this node was written inside an explicit parenthesis group.
    pub fn is_bracketed(&self) -> bool {
        self.bracketed
    }

    /// **(internal)** A passthrough node holding a single operand.
    pub(crate) fn of_operand(operand: Operand) -> Expression {
        Expression {
            left: Some(operand),
            ..Default::default()
        }
    }

    /// **(internal)** A negation node; the operand (if any) occupies the right slot.
    pub(crate) fn negation_of(operand: Option<Operand>) -> Expression {
        Expression {
            left: None,
            right: operand,
            connective: Some(Connective::Negation),
            bracketed: false,
        }
    }

    /// **(internal)** Collapse this node into an operand: a node that has a
    /// connective becomes a sub-expression, a bare passthrough node is elided in
    /// favour of its single operand (the bracket flag survives where possible), and
    /// an empty node disappears.
    pub(crate) fn into_operand(self) -> Option<Operand> {
        if self.connective.is_some() {
            return Some(Operand::SubExpression(Box::new(self)));
        }
        match self.left {
            Some(Operand::SubExpression(mut inner)) => {
                inner.bracketed = inner.bracketed || self.bracketed;
                Some(Operand::SubExpression(inner))
            }
            operand => operand,
        }
    }
}

/// Methods for evaluating expressions against one assignment of their literals.
impl Expression {
    /// Evaluate this expression in the given `AssignmentContext`.
    ///
    /// Absent operands resolve to `false`, and a node that never received a
    /// connective evaluates to `false`; both conditions are reported through the
    /// `log` facade instead of failing the build.
    pub fn eval_in(&self, context: &AssignmentContext) -> bool {
        let connective = match self.connective {
            Some(connective) => connective,
            None => {
                debug!("Evaluating a node without a connective; falling back to false.");
                return false;
            }
        };
        let left = eval_operand(&self.left, context);
        let right = eval_operand(&self.right, context);
        connective.apply(left, right)
    }
}

/// **(internal)** Resolve one child slot: literals through the context, nested
/// expressions recursively, absent operands as `false`.
fn eval_operand(operand: &Option<Operand>, context: &AssignmentContext) -> bool {
    match operand {
        None => false,
        Some(Operand::Literal(name)) => context.value_of(*name),
        Some(Operand::SubExpression(inner)) => inner.eval_in(context),
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.bracketed {
            write!(f, "{}", OPEN_BRACKET)?;
        }
        if let Some(left) = &self.left {
            write!(f, "{}", left)?;
        }
        if let Some(connective) = self.connective {
            write!(f, "{}", connective)?;
        }
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        if self.bracketed {
            write!(f, "{}", CLOSE_BRACKET)?;
        }
        Ok(())
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Operand::Literal(name) => write!(f, "{}", name),
            Operand::SubExpression(inner) => write!(f, "{}", inner),
        }
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::parse(value).0
    }
}
