use super::{Valuation, ValuationIterator};
use std::fmt::{Display, Error, Formatter};

impl Valuation {
    /// Create a new valuation from a vector of values, one per literal.
    pub fn new(values: Vec<bool>) -> Valuation {
        Valuation(values)
    }

    /// Create a valuation with all literals set to true.
    pub fn all_true(num_literals: usize) -> Valuation {
        Valuation(vec![true; num_literals])
    }

    /// Get the value at a literal position (as assigned by a `LiteralSet`).
    pub fn value(&self, index: usize) -> bool {
        self.0[index]
    }

    /// The number of literals this valuation assigns.
    pub fn num_literals(&self) -> usize {
        self.0.len()
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// **(internal)** "Decrement" this valuation if possible. Interpret the valuation
    /// as a bit-vector with the last position least significant and subtract one.
    /// Stepping from all-`true` down to all-`false` visits every valuation, with
    /// `true` preceding `false` in every position.
    pub(crate) fn next(&self) -> Option<Valuation> {
        let mut next_vec = self.0.clone();
        let mut borrow = true; // initially, we want to decrement
        for bit in next_vec.iter_mut().rev() {
            let new_value = *bit ^ borrow;
            let new_borrow = !*bit && borrow;
            *bit = new_value;
            borrow = new_borrow;
            if !new_borrow {
                break;
            } // if there is no borrow, we can just break
        }

        if borrow {
            None
        } else {
            Some(Valuation(next_vec))
        }
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", if self.0[0] { 1 } else { 0 })?;
            for i in 1..self.0.len() {
                write!(f, ",{}", if self.0[i] { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl ValuationIterator {
    /// Create a new iterator over the valuations of `num_literals` literals, starting
    /// from the all-`true` valuation.
    pub fn new(num_literals: usize) -> ValuationIterator {
        ValuationIterator(Some(Valuation::all_true(num_literals)))
    }
}

impl Iterator for ValuationIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.0 {
            let ret = valuation.clone();
            let next = valuation.next();
            self.0 = next;
            Some(ret)
        } else {
            None
        }
    }
}
