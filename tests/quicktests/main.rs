//! Property tests against the public `OrderedTree` API.

#[macro_use]
extern crate quickcheck_macros;

mod properties;
