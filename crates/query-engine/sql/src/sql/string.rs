//! Type definitions of a low-level SQL string representation.

/// A SQL string with the parameters that have to be bound to its `$n` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A literal string
    String(String),
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
        }
    }

    /// Append SQL syntax that we control.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a double-quoted identifier. Embedded quotes are doubled.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push('"');
        self.sql.push_str(&identifier.replace('"', "\"\""));
        self.sql.push('"');
    }

    /// Append a placeholder for a parameter and record the parameter.
    pub fn append_param(&mut self, param: Param) {
        self.params.push(param);
        self.sql.push_str(format!("${}", self.params.len()).as_str());
    }
}
