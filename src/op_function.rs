//! Contains the truth functions of the recognized connectives. `Connective::apply`
//! dispatches into this module, but the functions can also be used on their own.

/// Truth function of $\neg y$.
///
/// Negation is unary: it has no left operand, so the first argument is ignored.
pub fn negation(_left: bool, right: bool) -> bool {
    !right
}

/// Truth function of $x \land y$.
pub fn conjunction(left: bool, right: bool) -> bool {
    left && right
}

/// Truth function of $x \lor y$.
pub fn disjunction(left: bool, right: bool) -> bool {
    left || right
}

/// Truth function of $x \Rightarrow y$.
pub fn implication(left: bool, right: bool) -> bool {
    !left || right
}

/// Truth function of $x \Leftrightarrow y$.
pub fn biconditional(left: bool, right: bool) -> bool {
    left == right
}
