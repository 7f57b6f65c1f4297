//! Core types for the plang frontend: source spans and the concrete syntax tree

#![no_std]

extern crate alloc;

mod basic;
mod cst;
mod location;

pub use basic::*;
pub use cst::*;
pub use location::*;
