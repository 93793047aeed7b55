//! SQL AST, conversion to SQL text and parameters, and helpers for building ASTs.

pub mod sql;
