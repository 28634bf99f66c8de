#[macro_use]
extern crate quickcheck_macros;

mod generate;
mod same;
mod shape;
mod walk;

pub(crate) use shape::{SamePair, Shaped};
