//! Type definitions of a SQL AST representation, its conversion to a SQL string,
//! and helpers for building ASTs.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
