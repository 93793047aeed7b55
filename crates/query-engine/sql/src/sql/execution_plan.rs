//! Describe the SQL execution plan.

use super::ast;
use super::string;

/// Definition of an execution plan to be run against the database.
#[derive(Debug)]
pub struct ExecutionPlan {
    /// the schema and relation the plan reads from, for logging
    pub root_relation: String,
    pub query: ast::Select,
}

impl ExecutionPlan {
    /// Extract the query component as SQL.
    pub fn query_sql(&self) -> string::SQL {
        select_to_sql(&self.query)
    }
}

/// Convert a select to SQL.
pub fn select_to_sql(select: &ast::Select) -> string::SQL {
    let mut sql = string::SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Convert a schema statement to SQL.
pub fn schema_statement_to_sql(statement: &ast::SchemaStatement) -> string::SQL {
    let mut sql = string::SQL::new();
    statement.to_sql(&mut sql);
    sql
}
