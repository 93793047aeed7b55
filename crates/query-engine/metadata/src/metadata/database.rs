//! Catalog information about a relation, and the comparison operators the engine supports.

use enum_iterator::Sequence;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The comparison operators a filter leaf may use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
pub enum ComparisonOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    LessThanOrEqualTo,
    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "<>")]
    NotEqualsAnsi,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "ilike")]
    CaseInsensitiveLike,
}

impl ComparisonOperator {
    /// The name of the operator as written by clients.
    pub fn name(self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThanOrEqualTo => "<=",
            ComparisonOperator::GreaterThanOrEqualTo => ">=",
            ComparisonOperator::NotEquals => "!=",
            ComparisonOperator::NotEqualsAnsi => "<>",
            ComparisonOperator::Like => "like",
            ComparisonOperator::CaseInsensitiveLike => "ilike",
        }
    }

    /// Look an operator up by its client name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<ComparisonOperator> {
        enum_iterator::all::<ComparisonOperator>()
            .find(|operator| operator.name().eq_ignore_ascii_case(name))
    }

    /// Pattern operators compare text, so their argument is never cast to the column type.
    pub fn is_pattern_match(self) -> bool {
        matches!(
            self,
            ComparisonOperator::Like | ComparisonOperator::CaseInsensitiveLike
        )
    }

    /// All supported operator names, for error messages.
    pub fn supported_names() -> Vec<&'static str> {
        enum_iterator::all::<ComparisonOperator>()
            .map(ComparisonOperator::name)
            .collect()
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A database type, spelled the way `format_type` reports it,
/// e.g. `integer` or `timestamp without time zone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let TypeName(name) = self;
        write!(f, "{name}")
    }
}

/// Information about a database column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub type_name: TypeName,
}

/// Information about a table or view, as found in the catalog.
/// A relation that does not exist has no columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationInfo {
    pub schema_name: String,
    pub relation_name: String,
    pub columns: IndexMap<String, ColumnInfo>,
}

impl RelationInfo {
    pub fn new(schema_name: impl Into<String>, relation_name: impl Into<String>) -> Self {
        RelationInfo {
            schema_name: schema_name.into(),
            relation_name: relation_name.into(),
            columns: IndexMap::new(),
        }
    }

    /// Add a column, keeping catalog order.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        self.columns.insert(
            name.clone(),
            ColumnInfo {
                name,
                type_name: TypeName(type_name.into()),
            },
        );
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }
}
