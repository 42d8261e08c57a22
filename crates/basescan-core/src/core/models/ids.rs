use super::atom::Atom;
use std::fmt;

/// Identifies a residue within a structure by chain and sequence number.
///
/// Keys are totally ordered (chain first, then sequence number) so that
/// unordered residue pairs can be normalized to a canonical orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    /// The identifier of the chain the residue belongs to.
    pub chain_id: String,
    /// The residue sequence number.
    pub res_id: isize,
}

impl ResidueKey {
    pub fn new(chain_id: &str, res_id: isize) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            res_id,
        }
    }

    /// Builds the key of the residue an atom belongs to, or `None` when the
    /// atom has no defined residue id.
    pub fn of_atom(atom: &Atom) -> Option<Self> {
        atom.res_id.map(|res_id| Self {
            chain_id: atom.chain_id.clone(),
            res_id,
        })
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain_id, self.res_id)
    }
}

/// An unordered pair of residues, used both for proximity candidates and for
/// accepted base pairs.
///
/// The two keys are stored in canonical order, so `(a, b)` and `(b, a)`
/// construct the same value and the pair can be used directly for
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePair {
    pub first: ResidueKey,
    pub second: ResidueKey,
}

impl BasePair {
    pub fn new(a: ResidueKey, b: ResidueKey) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}
