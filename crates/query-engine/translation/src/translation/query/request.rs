//! Normalize the body of a select request into a [`QuerySpec`].

use serde::Deserialize;

use pgrest_configuration::FilterLimits;

use super::filtering::{parse_filter, FilterNode};
use super::sorting::OrderType;
use crate::translation::error::Error;
use crate::translation::helpers::validate_identifier;

const DEFAULT_LIMIT: i64 = 100;
const STAR: &str = "*";

/// The body of a select request, as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    pub schema: Option<String>,
    pub relation: Option<String>,
    pub fields: Option<Fields>,
    pub filter: Option<serde_json::Value>,
    pub order_fields: Option<Fields>,
    pub order_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A list of column names, or a single name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Fields {
    One(String),
    Many(Vec<String>),
}

/// A fully validated select request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub schema: String,
    pub relation: String,
    /// Column names, or `*`.
    pub fields: Vec<String>,
    pub filter: Option<FilterNode>,
    pub order_fields: Vec<String>,
    pub order_type: OrderType,
    pub limit: u32,
    pub offset: u64,
}

/// Parse and normalize a raw request body.
pub fn normalize(body: &[u8], max_results: u32, limits: &FilterLimits) -> Result<QuerySpec, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyRequest);
    }
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|err| Error::MalformedRequest(err.to_string()))?;
    match &value {
        serde_json::Value::Null => return Err(Error::EmptyRequest),
        serde_json::Value::Object(fields) if fields.is_empty() => return Err(Error::EmptyRequest),
        serde_json::Value::Object(_) => {}
        other => {
            return Err(Error::MalformedRequest(format!(
                "expected a JSON object, got {other}"
            )))
        }
    }
    let request: QueryRequest =
        serde_json::from_value(value).map_err(|err| Error::MalformedRequest(err.to_string()))?;
    normalize_request(request, max_results, limits)
}

/// Apply defaults and validate every argument of a request.
pub fn normalize_request(
    request: QueryRequest,
    max_results: u32,
    limits: &FilterLimits,
) -> Result<QuerySpec, Error> {
    let schema = request.schema.ok_or(Error::MissingArgument("schema"))?;
    validate_identifier("schema", &schema)?;
    let relation = request.relation.ok_or(Error::MissingArgument("relation"))?;
    validate_identifier("relation", &relation)?;

    let fields = match request.fields {
        None => vec![STAR.to_string()],
        Some(Fields::One(field)) => vec![field],
        Some(Fields::Many(fields)) => fields,
    };
    if fields.is_empty() {
        return Err(Error::NoFields);
    }
    for field in fields.iter().filter(|field| field.as_str() != STAR) {
        validate_identifier("field", field)?;
    }

    let order_fields = match request.order_fields {
        None => vec![],
        Some(Fields::One(field)) if field.is_empty() => vec![],
        Some(Fields::One(field)) => vec![field],
        Some(Fields::Many(fields)) => fields,
    };
    for field in &order_fields {
        validate_identifier("order field", field)?;
    }

    let order_type = match request.order_type {
        None => OrderType::default(),
        Some(order_type) => OrderType::parse(&order_type)?,
    };

    let filter = match &request.filter {
        None => None,
        Some(filter) => parse_filter(filter, limits)?,
    };

    let limit = non_negative("limit", request.limit.unwrap_or(DEFAULT_LIMIT))?;
    let limit = u32::try_from(limit).unwrap_or(u32::MAX).min(max_results);
    let offset = non_negative("offset", request.offset.unwrap_or(0))?;

    Ok(QuerySpec {
        schema,
        relation,
        fields,
        filter,
        order_fields,
        order_type,
        limit,
        offset,
    })
}

fn non_negative(argument: &'static str, value: i64) -> Result<u64, Error> {
    u64::try_from(value).map_err(|_| Error::NegativeArgument { argument, value })
}
