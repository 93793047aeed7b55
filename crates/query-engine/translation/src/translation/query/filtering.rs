//! Parse client filter trees and translate them to boolean SQL expressions.

use serde_json::{Map, Value};

use pgrest_configuration::FilterLimits;
use query_engine_metadata::metadata::{ComparisonOperator, RelationInfo};
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::validate_identifier;

/// A validated filter tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    /// Compare a column against a value.
    Leaf {
        column: String,
        operator: ComparisonOperator,
        value: String,
    },
    /// Combine subexpressions.
    Logical {
        operator: LogicalOperator,
        children: Vec<FilterNode>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    Not,
    And,
    Or,
}

impl LogicalOperator {
    fn from_name(name: &str) -> Option<LogicalOperator> {
        match name.to_ascii_lowercase().as_str() {
            "not" => Some(LogicalOperator::Not),
            "and" => Some(LogicalOperator::And),
            "or" => Some(LogicalOperator::Or),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            LogicalOperator::Not => "not",
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

/// Parse the `filter` argument of a request.
///
/// `null`, `""` and `{}` mean "no filter". Anything else must be a well formed
/// filter tree within the configured limits.
pub fn parse_filter(value: &Value, limits: &FilterLimits) -> Result<Option<FilterNode>, Error> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        _ => {
            check_limits(value, limits)?;
            parse_node(value).map(Some)
        }
    }
}

/// Check the size of a filter tree without recursing, so that hostile input
/// is rejected before the recursive parser sees it.
fn check_limits(root: &Value, limits: &FilterLimits) -> Result<(), Error> {
    let mut stack = vec![(root, 1usize)];
    let mut nodes = 0usize;

    while let Some((node, depth)) = stack.pop() {
        nodes += 1;
        if depth > limits.max_depth {
            return Err(Error::FilterTooDeep {
                max_depth: limits.max_depth,
            });
        }
        if nodes > limits.max_nodes {
            return Err(Error::FilterTooLarge {
                max_nodes: limits.max_nodes,
            });
        }
        if let Value::Object(fields) = node {
            if fields.contains_key("column") {
                continue;
            }
            if let Some(Value::Array(children)) = children_of(fields) {
                stack.extend(children.iter().map(|child| (child, depth + 1)));
            }
        }
    }
    Ok(())
}

/// Clients have historically sent `childs`; both spellings are accepted.
fn children_of(fields: &Map<String, Value>) -> Option<&Value> {
    fields.get("children").or_else(|| fields.get("childs"))
}

fn parse_node(value: &Value) -> Result<FilterNode, Error> {
    let Value::Object(fields) = value else {
        return Err(Error::MalformedFilter(format!(
            "expected a filter node object, got {value}"
        )));
    };

    match fields.get("column") {
        Some(column) => parse_leaf(column, fields),
        None => parse_logical(fields),
    }
}

fn parse_leaf(column: &Value, fields: &Map<String, Value>) -> Result<FilterNode, Error> {
    let Value::String(column) = column else {
        return Err(Error::MalformedFilter(format!(
            "the column of a filter node must be a string, got {column}"
        )));
    };
    let column = column.clone();
    validate_identifier("column", &column)?;

    let operator = match fields.get("operator") {
        None | Some(Value::Null) => return Err(Error::MissingLeafOperator { column }),
        Some(Value::String(name)) => {
            ComparisonOperator::from_name(name).ok_or_else(|| Error::UnsupportedOperator {
                column: column.clone(),
                operator: name.clone(),
            })?
        }
        Some(other) => {
            return Err(Error::UnsupportedOperator {
                column,
                operator: other.to_string(),
            })
        }
    };

    let value = match fields.get("value") {
        None | Some(Value::Null) => return Err(Error::MissingLeafValue { column }),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(_) | Value::Object(_)) => {
            return Err(Error::InvalidLeafValue { column })
        }
    };

    Ok(FilterNode::Leaf {
        column,
        operator,
        value,
    })
}

fn parse_logical(fields: &Map<String, Value>) -> Result<FilterNode, Error> {
    let name = match fields.get("operator") {
        None | Some(Value::Null) => return Err(Error::MissingLogicalOperator),
        Some(Value::String(name)) => name.clone(),
        Some(other) => return Err(Error::UnsupportedLogicalOperator(other.to_string())),
    };

    let children = match children_of(fields) {
        None | Some(Value::Null) => return Err(Error::MissingChildren { operator: name }),
        Some(Value::Array(children)) => children,
        Some(other) => {
            return Err(Error::MalformedFilter(format!(
                "the children of a logical node must be a list, got {other}"
            )))
        }
    };

    let operator =
        LogicalOperator::from_name(&name).ok_or(Error::UnsupportedLogicalOperator(name))?;

    match operator {
        LogicalOperator::Not if children.len() != 1 => Err(Error::NotArity {
            found: children.len(),
        }),
        LogicalOperator::And | LogicalOperator::Or if children.len() < 2 => {
            Err(Error::TooFewChildren {
                operator: operator.name(),
                found: children.len(),
            })
        }
        _ => Ok(FilterNode::Logical {
            operator,
            children: children
                .iter()
                .map(parse_node)
                .collect::<Result<Vec<_>, _>>()?,
        }),
    }
}

/// Translate a filter tree to a boolean expression over the given relation.
///
/// Values are always bound parameters. When the catalog knows the column, the
/// parameter of a comparison is cast to the column's type.
pub fn translate_expression(relation: &RelationInfo, node: &FilterNode) -> sql::ast::Expression {
    match node {
        FilterNode::Leaf {
            column,
            operator,
            value,
        } => {
            let parameter = sql::ast::Expression::Value(sql::ast::Value::String(value.clone()));
            let right = match relation.column(column) {
                Some(info) if !operator.is_pattern_match() => sql::ast::Expression::Cast {
                    expression: Box::new(parameter),
                    r#type: sql::ast::ScalarType(info.type_name.0.clone()),
                },
                _ => parameter,
            };
            sql::ast::Expression::BinaryOperation {
                left: Box::new(sql::ast::Expression::ColumnReference(
                    sql::ast::ColumnName(column.clone()),
                )),
                operator: translate_operator(*operator),
                right: Box::new(right),
            }
        }
        FilterNode::Logical { operator, children } => {
            let mut expressions = children
                .iter()
                .map(|child| translate_expression(relation, child));
            match operator {
                LogicalOperator::Not => match expressions.next() {
                    Some(expression) => sql::ast::Expression::Not(Box::new(expression)),
                    None => sql::helpers::true_expr(),
                },
                LogicalOperator::And => sql::ast::Expression::And(expressions.collect()),
                LogicalOperator::Or => sql::ast::Expression::Or(expressions.collect()),
            }
        }
    }
}

fn translate_operator(operator: ComparisonOperator) -> sql::ast::BinaryOperator {
    match operator {
        ComparisonOperator::Equals => sql::ast::BinaryOperator::Equals,
        ComparisonOperator::LessThan => sql::ast::BinaryOperator::LessThan,
        ComparisonOperator::GreaterThan => sql::ast::BinaryOperator::GreaterThan,
        ComparisonOperator::LessThanOrEqualTo => sql::ast::BinaryOperator::LessThanOrEqualTo,
        ComparisonOperator::GreaterThanOrEqualTo => {
            sql::ast::BinaryOperator::GreaterThanOrEqualTo
        }
        ComparisonOperator::NotEquals => sql::ast::BinaryOperator::NotEquals,
        ComparisonOperator::NotEqualsAnsi => sql::ast::BinaryOperator::NotEqualsAnsi,
        ComparisonOperator::Like => sql::ast::BinaryOperator::Like,
        ComparisonOperator::CaseInsensitiveLike => sql::ast::BinaryOperator::CaseInsensitiveLike,
    }
}

/// Render a filter tree on its own: the predicate text and its bound parameters.
pub fn compile(relation: &RelationInfo, node: &FilterNode) -> sql::string::SQL {
    let mut sql = sql::string::SQL::new();
    translate_expression(relation, node).to_sql(&mut sql);
    sql
}
