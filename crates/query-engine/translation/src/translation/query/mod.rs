//! Translate a normalized select request into an execution plan.

pub mod filtering;
pub mod request;
pub mod sorting;

use query_engine_metadata::metadata::RelationInfo;
use query_engine_sql::sql;

use request::QuerySpec;

/// Translate a request into a single SELECT over the requested relation.
///
/// Identifiers were validated when the request was normalized. The relation's
/// catalog entry is only used to type filter parameters; it may be empty.
pub fn translate(relation: &RelationInfo, spec: &QuerySpec) -> sql::execution_plan::ExecutionPlan {
    let from = sql::ast::From::Table {
        reference: sql::helpers::table_reference(spec.schema.as_str(), spec.relation.as_str()),
    };

    let mut select = sql::helpers::star_select(from);

    select.select_list = translate_fields(&spec.fields);

    if let Some(filter) = &spec.filter {
        select.where_ = sql::ast::Where(filtering::translate_expression(relation, filter));
    }

    select.order_by = sorting::translate_order_by(&spec.order_fields, spec.order_type);

    select.limit = sql::ast::Limit {
        limit: Some(spec.limit),
        offset: Some(spec.offset),
    };

    tracing::debug!(
        schema = %spec.schema,
        relation = %spec.relation,
        "translated select request"
    );

    sql::execution_plan::ExecutionPlan {
        root_relation: format!("{}.{}", spec.schema, spec.relation),
        query: select,
    }
}

fn translate_fields(fields: &[String]) -> sql::ast::SelectList {
    if fields.iter().all(|field| field == "*") {
        sql::ast::SelectList::SelectStar
    } else {
        sql::ast::SelectList::SelectList(
            fields
                .iter()
                .map(|field| {
                    if field == "*" {
                        sql::ast::SelectItem::Star
                    } else {
                        sql::ast::SelectItem::Column(sql::ast::ColumnName(field.clone()))
                    }
                })
                .collect(),
        )
    }
}
