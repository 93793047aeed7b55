//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy {
        columns: vec![],
        direction: OrderByDirection::Asc,
    }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// SELECTs //

/// Build a simple select * with the rest empty.
pub fn star_select(from: From) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// A reference to a table in a schema.
pub fn table_reference(schema: impl Into<String>, table: impl Into<String>) -> TableReference {
    TableReference::DBTable {
        schema: SchemaName(schema.into()),
        table: TableName(table.into()),
    }
}
