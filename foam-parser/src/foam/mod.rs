//! Main module for foam outline functionality

pub mod ast;
pub mod document;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
