//! Orientation groups for flags, with small, copyable representations.

use core::fmt::{Debug, Formatter};

/// A group with a cheap, copyable element type.
///
/// `O::default()` is the identity.
pub trait Orientation: Copy + Default + Debug + 'static {
    fn compose(a: Self, b: Self) -> Self;
    fn inverse(a: Self) -> Self;
}

/// Parity of a flag's permutation; flips on every switch.
///
/// Group C₂: compose is XOR and every element is its own inverse.
/// `Sign(true)` is odd.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
pub struct Sign(pub bool);

impl Sign {
    pub const EVEN: Sign = Sign(false);
    pub const ODD: Sign = Sign(true);

    #[inline]
    pub fn is_odd(self) -> bool {
        self.0
    }
}

impl Debug for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Sign").field(&self.0).finish()
    }
}

impl Orientation for Sign {
    #[inline]
    fn compose(a: Self, b: Self) -> Self {
        Sign(a.0 ^ b.0)
    }
    #[inline]
    fn inverse(a: Self) -> Self {
        a
    }
}

/// Accumulate a sequence of orientation steps along a path, left-to-right.
/// Returns the total orientation from the seed to the end of the path.
/// Identity is `O::default()`.
#[inline]
pub fn accumulate_path<O, I>(path: I) -> O
where
    O: Orientation,
    I: IntoIterator<Item = O>,
{
    path.into_iter()
        .fold(O::default(), |acc, step| O::compose(acc, step))
}
