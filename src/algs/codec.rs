//! Simplicial-set codec: valid flags <-> label permutations.
//!
//! Encoding reads the labels a flag introduces level by level: the single
//! label of the level-0 simplex, then at each higher level the one label not
//! in the level below, and finally the one ground label the facet misses.
//! Decoding looks up, for each level `d`, the simplex spanned by the first
//! `d + 1` labels.

use crate::algs::flags::Flag;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;
use crate::topology::simplex::{Label, Simplex};
use crate::topology::simplicial_set::SimplicialSet;

/// Encode a valid flag as its ordered label sequence.
pub fn flag_to_simplicial_set(
    complex: &ReferenceComplex,
    flag: &[usize],
) -> Result<SimplicialSet, FlagError> {
    let mismatch = |detail: String| FlagError::EncodingMismatch {
        flag: Flag::from(flag.to_vec()),
        detail,
    };
    if flag.len() != complex.level_count() {
        return Err(mismatch(format!(
            "flag has {} entries, complex has {} levels",
            flag.len(),
            complex.level_count()
        )));
    }

    let mut sequence: Vec<Label> = Vec::with_capacity(complex.label_count());
    let mut previous = Simplex::default();
    for (d, &i) in flag.iter().enumerate() {
        let simplex = complex
            .simplex(d, i)
            .ok_or_else(|| mismatch(format!("no simplex {i} at level {d}")))?;
        if !previous.is_subset_of(simplex) {
            return Err(mismatch(format!(
                "level {d} simplex {simplex} does not contain {previous}"
            )));
        }
        let new_label = exactly_one(simplex.difference(&previous))
            .ok_or_else(|| mismatch(format!("level {d} adds other than one label")))?;
        sequence.push(new_label);
        previous = simplex.clone();
    }

    let ground = Simplex::new(complex.ground_labels());
    let last = exactly_one(ground.difference(&previous))
        .ok_or_else(|| mismatch("top face misses other than one ground label".into()))?;
    sequence.push(last);

    SimplicialSet::new(sequence)
        .ok_or_else(|| mismatch("labels are not a permutation of the ground set".into()))
}

/// Decode a label sequence into the flag whose level-`d` simplex is spanned by
/// its first `d + 1` labels.
pub fn simplicial_set_to_flag(
    complex: &ReferenceComplex,
    sequence: &SimplicialSet,
) -> Result<Flag, FlagError> {
    if sequence.len() != complex.label_count() {
        return Err(FlagError::EncodingMismatch {
            flag: Flag::default(),
            detail: format!(
                "sequence {sequence:?} has {} labels, ground set has {}",
                sequence.len(),
                complex.label_count()
            ),
        });
    }
    let mut indices = Vec::with_capacity(complex.level_count());
    for d in 0..complex.level_count() {
        let face = sequence.prefix_simplex(d);
        match complex.position(d, &face) {
            Some(i) => indices.push(i),
            None => {
                return Err(FlagError::EncodingMismatch {
                    flag: Flag::from(indices),
                    detail: format!("simplex {face} of sequence {sequence:?} is not at level {d}"),
                });
            }
        }
    }
    Ok(Flag::from(indices))
}

fn exactly_one<I: Iterator<Item = Label>>(mut iter: I) -> Option<Label> {
    let first = iter.next()?;
    iter.next().is_none().then_some(first)
}
