//! Errors for query translation. Every variant is a fault in the client's request.

use query_engine_metadata::metadata::ComparisonOperator;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("No arguments provided for querying the database.")]
    EmptyRequest,
    #[error("The request body could not be read: {0}")]
    MalformedRequest(String),
    #[error("The '{0}' argument is required.")]
    MissingArgument(&'static str),
    #[error("Invalid {kind} name '{name}'. Names must start with a letter or underscore, contain only letters, digits, underscores or '$', and be at most 63 characters long.")]
    InvalidIdentifier { kind: &'static str, name: String },
    #[error("At least one field must be requested.")]
    NoFields,
    #[error("Invalid order_type '{0}' provided. Must be asc or desc.")]
    InvalidOrderType(String),
    #[error("The '{argument}' argument must not be negative, got {value}.")]
    NegativeArgument { argument: &'static str, value: i64 },
    #[error("The filter could not be read: {0}")]
    MalformedFilter(String),
    #[error("No operator specified for column '{column}'.")]
    MissingLeafOperator { column: String },
    #[error("No value specified for column '{column}'.")]
    MissingLeafValue { column: String },
    #[error("Operator '{operator}' is not supported for column '{column}'. Supported operators are: {}.", ComparisonOperator::supported_names().join(", "))]
    UnsupportedOperator { column: String, operator: String },
    #[error("The value for column '{column}' must be a string, number or boolean.")]
    InvalidLeafValue { column: String },
    #[error("There was neither a logical node nor an expression node provided.")]
    MissingLogicalOperator,
    #[error("No child nodes specified for logical node '{operator}'.")]
    MissingChildren { operator: String },
    #[error("Logical operator '{0}' is not supported. Supported operators are: not, and, or.")]
    UnsupportedLogicalOperator(String),
    #[error("For a logical not condition exactly one subexpression must be provided, got {found}.")]
    NotArity { found: usize },
    #[error("At least two subexpressions must be provided for a logical {operator}, got {found}.")]
    TooFewChildren { operator: &'static str, found: usize },
    #[error("The filter is nested more than {max_depth} levels deep.")]
    FilterTooDeep { max_depth: usize },
    #[error("The filter contains more than {max_nodes} nodes.")]
    FilterTooLarge { max_nodes: usize },
}
