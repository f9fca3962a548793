//! ordtree-util - test input generation for ordtree
//!
//! Seeded random numbers and insert / erase operation traces, so a
//! failing randomized run can be replayed from its seed.

pub mod fuzzer;
pub mod trace;

pub use fuzzer::Fuzzer;
pub use trace::{Op, TraceBuilder};
