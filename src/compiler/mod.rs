//! Code generation module for the compiler.
//!
//! This module contains the backend-independent code generator that walks
//! a parsed `Module`. It handles:
//!
//! - Scoped name resolution through binding stacks
//! - The two-pass module driver (declare everything, then lower bodies)
//! - Expression lowering through the `Backend` trait
//! - An LLVM backend, behind the `llvm` feature

pub mod compiler;
pub mod expr;
#[cfg(feature = "llvm")]
pub mod llvm;
pub mod scope;
