//! Concrete games used to verify and benchmark the engines.

pub mod dag;
