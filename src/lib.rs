//! Exact fraction calculator.
//!
//! Reads a count of cases, then one `a_num a_den b_num b_den op` line per case,
//! and prints each result as a reduced fraction. See [`processor::run`].

pub mod evaluator;
pub mod fraction;
pub mod parser;
pub mod processor;
pub mod state;
pub mod tokenizer;

pub use fraction::{Fraction, FractionError};
pub use tokenizer::Operator;
