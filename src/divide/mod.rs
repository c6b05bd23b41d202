//! Divide-and-conquer family: merge, quick, bitonic and the block hybrid.

pub(crate) mod bitonic;
pub(crate) mod block;
pub(crate) mod merge;
pub(crate) mod quick;
