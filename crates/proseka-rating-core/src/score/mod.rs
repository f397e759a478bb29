//! Score-related types.
//!
//! This module contains types for representing a play's judgements:
//! - `Judge` - judgement counts (PERFECT, GREAT, GOOD, BAD, MISS)
//! - `Field` - names of every validated input, used in error messages

mod field;
mod judge;

pub use field::*;
pub use judge::*;
