//! SQL dialects: SQLite (executed in-process) and MySQL (rendered scripts).

use super::{ColumnDef, ColumnType, SqlValue, TableDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    MySql,
}

impl Dialect {
    pub fn quote(&self, ident: &str) -> String {
        match self {
            Self::Sqlite => format!("\"{}\"", ident.replace('"', "\"\"")),
            Self::MySql => format!("`{}`", ident.replace('`', "``")),
        }
    }

    fn column_type(&self, ty: ColumnType) -> String {
        match (self, ty) {
            (Self::Sqlite, ColumnType::Integer | ColumnType::Boolean) => "INTEGER".to_string(),
            (Self::Sqlite, ColumnType::Real) => "REAL".to_string(),
            // STRICT tables have no date type; timestamps are stored as
            // `YYYY-MM-DD HH:MM:SS` text.
            (Self::Sqlite, ColumnType::Timestamp | ColumnType::Varchar(_) | ColumnType::Text) => {
                "TEXT".to_string()
            }
            (Self::MySql, ColumnType::Integer) => "INT".to_string(),
            (Self::MySql, ColumnType::Real) => "DOUBLE".to_string(),
            (Self::MySql, ColumnType::Boolean) => "BOOLEAN".to_string(),
            (Self::MySql, ColumnType::Timestamp) => "DATETIME".to_string(),
            (Self::MySql, ColumnType::Varchar(len)) => format!("VARCHAR({len})"),
            (Self::MySql, ColumnType::Text) => "TEXT".to_string(),
        }
    }

    fn column_definition(&self, column: &ColumnDef) -> String {
        let name = self.quote(column.name);
        let ty = self.column_type(column.ty);
        match (self, column.primary_key) {
            (Self::Sqlite, true) => format!("{name} {ty} PRIMARY KEY AUTOINCREMENT"),
            (Self::MySql, true) => format!("{name} {ty} NOT NULL AUTO_INCREMENT"),
            (_, false) if column.nullable => format!("{name} {ty}"),
            (_, false) => format!("{name} {ty} NOT NULL"),
        }
    }

    /// `CREATE TABLE` statement, terminated by `;`.
    pub fn create_table(&self, table: &TableDef) -> String {
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();

        if *self == Self::MySql {
            lines.push(format!("PRIMARY KEY ({})", self.quote(table.primary_key().name)));
        }
        for (column, fk) in table.foreign_keys() {
            lines.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                self.quote(column.name),
                self.quote(fk.table),
                self.quote(fk.column)
            ));
        }

        let suffix = match self {
            Self::Sqlite => " STRICT",
            Self::MySql => " ENGINE=InnoDB",
        };
        format!(
            "CREATE TABLE {} (\n    {}\n){suffix};",
            self.quote(table.name),
            lines.join(",\n    ")
        )
    }

    pub fn drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", self.quote(table))
    }

    /// Parameterized single-row insert (`?1, ?2, ...`), for SQLite binding.
    pub fn insert_statement(&self, table: &TableDef) -> String {
        let columns: Vec<String> = table.columns.iter().map(|c| self.quote(c.name)).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.quote(table.name),
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// Multi-row insert with inline literals. Returns `None` for no rows.
    pub fn insert_literals(&self, table: &TableDef, rows: &[Vec<SqlValue>]) -> Option<String> {
        if rows.is_empty() {
            return None;
        }
        let columns: Vec<String> = table.columns.iter().map(|c| self.quote(c.name)).collect();
        let tuples: Vec<String> = rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| self.literal(v)).collect();
                format!("({})", cells.join(", "))
            })
            .collect();
        Some(format!(
            "INSERT INTO {} ({}) VALUES\n    {};",
            self.quote(table.name),
            columns.join(", "),
            tuples.join(",\n    ")
        ))
    }

    /// Render a value as an SQL literal.
    pub fn literal(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Integer(v) => v.to_string(),
            // `{:?}` keeps a fractional part, so reals stay reals.
            SqlValue::Real(v) => format!("{v:?}"),
            SqlValue::Boolean(v) => match (self, v) {
                (Self::MySql, true) => "TRUE".to_string(),
                (Self::MySql, false) => "FALSE".to_string(),
                (Self::Sqlite, true) => "1".to_string(),
                (Self::Sqlite, false) => "0".to_string(),
            },
            SqlValue::Text(s) => self.string_literal(s),
            SqlValue::Timestamp(ts) => self.string_literal(&SqlValue::format_timestamp(ts)),
        }
    }

    fn string_literal(&self, s: &str) -> String {
        let escaped = match self {
            Self::Sqlite => s.replace('\'', "''"),
            // MySQL treats backslash as an escape character by default.
            Self::MySql => s.replace('\\', "\\\\").replace('\'', "''"),
        };
        format!("'{escaped}'")
    }
}
