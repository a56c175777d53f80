use super::{LiteralSet, ValuationIterator};

impl LiteralSet {
    /// Create a literal set from the given names. The names keep their order of
    /// first appearance; duplicates are ignored.
    pub fn new(names: &[char]) -> LiteralSet {
        let mut set = LiteralSet::default();
        for name in names {
            set.insert(*name);
        }
        set
    }

    /// **(internal)** Register a literal. Re-registering is a no-op, so the position
    /// of a name is fixed by its first appearance.
    pub(crate) fn insert(&mut self, name: char) {
        if !self.index_mapping.contains_key(&name) {
            self.index_mapping.insert(name, self.literals.len());
            self.literals.push(name);
        }
    }

    /// The number of literals in this set.
    pub fn num_literals(&self) -> usize {
        self.literals.len()
    }

    /// The literal names, in order of first appearance. This order fixes the column
    /// order of the valuations produced by `valuations`.
    pub fn literals(&self) -> &[char] {
        &self.literals
    }

    /// The position of `name` in valuation vectors, or `None` when the name is not
    /// part of this set.
    pub fn index_of(&self, name: char) -> Option<usize> {
        self.index_mapping.get(&name).cloned()
    }

    /// An iterator over all `2^n` valuations of this set, starting from the
    /// all-`true` assignment. The first literal changes slowest and the last literal
    /// alternates with every valuation.
    pub fn valuations(&self) -> ValuationIterator {
        ValuationIterator::new(self.num_literals())
    }
}
