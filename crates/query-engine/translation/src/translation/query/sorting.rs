//! Translate the ordering arguments of a request into an ORDER BY clause.

use query_engine_sql::sql;

use crate::translation::error::Error;

/// The requested sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderType {
    #[default]
    Asc,
    Desc,
}

impl OrderType {
    /// Parse `asc` or `desc`, ignoring ASCII case.
    pub fn parse(order_type: &str) -> Result<OrderType, Error> {
        if order_type.eq_ignore_ascii_case("asc") {
            Ok(OrderType::Asc)
        } else if order_type.eq_ignore_ascii_case("desc") {
            Ok(OrderType::Desc)
        } else {
            Err(Error::InvalidOrderType(order_type.to_string()))
        }
    }
}

/// Build the ORDER BY clause from already validated column names. No columns
/// means no ordering; otherwise the direction applies to the column list as a
/// whole.
pub fn translate_order_by(order_fields: &[String], order_type: OrderType) -> sql::ast::OrderBy {
    sql::ast::OrderBy {
        columns: order_fields
            .iter()
            .map(|field| sql::ast::ColumnName(field.clone()))
            .collect(),
        direction: match order_type {
            OrderType::Asc => sql::ast::OrderByDirection::Asc,
            OrderType::Desc => sql::ast::OrderByDirection::Desc,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(order_by: &sql::ast::OrderBy) -> String {
        let mut sql = sql::string::SQL::new();
        order_by.to_sql(&mut sql);
        sql.sql
    }

    #[test]
    fn order_type_is_case_insensitive() {
        assert_eq!(OrderType::parse("ASC"), Ok(OrderType::Asc));
        assert_eq!(OrderType::parse("Desc"), Ok(OrderType::Desc));
        assert_eq!(
            OrderType::parse("sideways"),
            Err(Error::InvalidOrderType("sideways".to_string()))
        );
    }

    #[test]
    fn no_fields_means_no_clause() {
        let order_by = translate_order_by(&[], OrderType::Desc);
        assert_eq!(render(&order_by), "");
    }

    #[test]
    fn direction_follows_the_column_list() {
        let fields = vec!["manufacturer".to_string(), "id".to_string()];
        let order_by = translate_order_by(&fields, OrderType::Desc);
        assert_eq!(render(&order_by), r#" ORDER BY "manufacturer", "id" DESC"#);
    }
}
