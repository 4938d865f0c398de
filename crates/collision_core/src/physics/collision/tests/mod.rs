//! Cross-shape tests
//!
//! Checks that hold across every pair rather than for one predicate:
//! symmetry of reverse pairs, self hits, the exists gate, translation
//! invariance and agreement between equivalent formulations.

mod scenarios;
