//! Type definitions of a SQL AST representation.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<SelectItem>),
    SelectStar,
}

/// A single entry of a select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    Star,
    Column(ColumnName),
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a table or view
    Table { reference: TableReference },
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause. The direction is written once after the column list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub columns: Vec<ColumnName>,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// LIMIT and OFFSET clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// all of the expressions hold; rendered as one parenthesized group
    And(Vec<Expression>),
    /// any of the expressions holds; rendered as one parenthesized group
    Or(Vec<Expression>),
    Not(Box<Expression>),
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    Cast {
        expression: Box<Expression>,
        r#type: ScalarType,
    },
    ColumnReference(ColumnName),
    Value(Value),
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    /// `!=`
    NotEquals,
    /// `<>`
    NotEqualsAnsi,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    CaseInsensitiveLike,
}

/// A database type used in a cast, spelled as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType(pub String);

/// A literal or parameterized value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// bound as a statement parameter
    String(String),
    Bool(bool),
}

/// A reference to a table or view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableReference {
    /// refers to a db table object name
    DBTable {
        schema: SchemaName,
        table: TableName,
    },
}

/// Name of a schema
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaName(pub String);

/// Name of a table or view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// Name of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// Statements that manage schemas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatement {
    /// CREATE SCHEMA IF NOT EXISTS
    Create(SchemaName),
    /// DROP SCHEMA IF EXISTS ... CASCADE
    Drop(SchemaName),
}
