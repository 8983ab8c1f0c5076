use std::fmt::Debug;
use std::hash::Hash;

/// A point in an abstract search space.
///
/// The search core only ever compares and hashes states; it places no other
/// constraint on them. A state may be a grid coordinate, a string id, a
/// puzzle configuration, or anything else the caller can copy around.
pub trait State: Copy + Clone + Debug + PartialEq + Eq + Hash {}

impl<T> State for T where T: Copy + Clone + Debug + PartialEq + Eq + Hash {}
