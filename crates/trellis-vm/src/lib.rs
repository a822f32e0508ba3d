#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Streaming matcher for trellis automata.
//!
//! A [`Matcher`] simulates every pattern of an automaton at once, one input
//! character at a time, without backtracking. It keeps one partial match per
//! candidate start position and commits to an answer only once no remaining
//! partial match could outrank it.

pub mod engine;

pub use engine::Matcher;
