//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::*;

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, item) in select_list.iter().enumerate() {
                    item.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl SelectItem {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectItem::Star => sql.append_syntax("*"),
            SelectItem::Column(column) => column.to_sql(sql),
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match &self {
            From::Table { reference } => reference.to_sql(sql),
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::And(expressions) => {
                expressions_to_sql(sql, expressions, " AND ");
            }
            Expression::Or(expressions) => {
                expressions_to_sql(sql, expressions, " OR ");
            }
            Expression::Not(expr) => {
                sql.append_syntax("NOT ");
                expr.to_sql(sql);
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Cast { expression, r#type } => {
                sql.append_syntax("CAST(");
                expression.to_sql(sql);
                sql.append_syntax(" AS ");
                r#type.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

fn expressions_to_sql(sql: &mut SQL, expressions: &[Expression], separator: &str) {
    sql.append_syntax("(");
    for (index, expression) in expressions.iter().enumerate() {
        expression.to_sql(sql);
        if index < (expressions.len() - 1) {
            sql.append_syntax(separator);
        }
    }
    sql.append_syntax(")");
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::NotEquals => sql.append_syntax(" != "),
            BinaryOperator::NotEqualsAnsi => sql.append_syntax(" <> "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
            BinaryOperator::CaseInsensitiveLike => sql.append_syntax(" ILIKE "),
        }
    }
}

impl ScalarType {
    /// The type name comes from the database catalog, never from a request.
    pub fn to_sql(&self, sql: &mut SQL) {
        let ScalarType(name) = self;
        sql.append_syntax(name);
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::String(s) => sql.append_param(Param::String(s.clone())),
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.columns.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, column) in self.columns.iter().enumerate() {
                column.to_sql(sql);
                if index < (self.columns.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
            self.direction.to_sql(sql);
        }
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(format!("{limit}").as_str());
        }
        if let Some(offset) = self.offset {
            sql.append_syntax(" OFFSET ");
            sql.append_syntax(format!("{offset}").as_str());
        }
    }
}

// names
impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            TableReference::DBTable { schema, table } => {
                schema.to_sql(sql);
                sql.append_syntax(".");
                table.to_sql(sql);
            }
        }
    }
}

impl SchemaName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl SchemaStatement {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SchemaStatement::Create(schema) => {
                sql.append_syntax("CREATE SCHEMA IF NOT EXISTS ");
                schema.to_sql(sql);
            }
            SchemaStatement::Drop(schema) => {
                sql.append_syntax("DROP SCHEMA IF EXISTS ");
                schema.to_sql(sql);
                sql.append_syntax(" CASCADE");
            }
        }
    }
}
