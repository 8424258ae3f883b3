//! Theme Module
//!
//! Light Keep-style color scheme and frame styles.

pub mod colors;
pub mod styles;
