use chrono::NaiveDate;

/// A literal destined for an `INSERT` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Render the value in the MySQL literal syntax.
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(value) => if *value { "1" } else { "0" }.to_string(),
            SqlValue::Int(value) => value.to_string(),
            SqlValue::Text(value) => quote_text(value),
            // Date-only literal; DATETIME columns take midnight.
            SqlValue::Date(value) => format!("'{}'", value.format("%Y-%m-%d")),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            SqlValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

/// Double every single quote so the text can sit inside a `'...'` literal.
pub fn escape_text(value: &str) -> String {
    value.replace('\'', "''")
}

/// Reverse of [`escape_text`].
pub fn unescape_text(value: &str) -> String {
    value.replace("''", "'")
}

pub fn quote_text(value: &str) -> String {
    format!("'{}'", escape_text(value))
}

/// Parse a quoted literal produced by [`quote_text`] back into its text.
///
/// Returns `None` when the input is not a well-formed single-quoted literal.
pub fn parse_text_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars().peekable();
    let mut out = String::with_capacity(inner.len());
    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(ch);
    }
    Some(out)
}
