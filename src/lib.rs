#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod runtime;
pub mod tools;

pub use error::*;
