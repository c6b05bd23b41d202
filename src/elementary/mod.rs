//! The exchange/insertion family: O(1) extra memory, quadratic typical cost,
//! one file per sort.

pub(crate) mod binary_insertion;
pub(crate) mod brick;
pub(crate) mod bubble;
pub(crate) mod cocktail;
pub(crate) mod comb;
pub(crate) mod gnome;
pub(crate) mod insertion;
pub(crate) mod pancake;
pub(crate) mod selection;
pub(crate) mod shell;
