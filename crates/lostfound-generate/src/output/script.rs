use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::value::SqlValue;

/// Marker closing every script.
pub const END_MARKER: &str = "-- END OF SCRIPT";

/// Render rows as `(v1, v2), (v3, v4)` joined by `separator`.
pub fn render_value_list(rows: &[Vec<SqlValue>], separator: &str) -> String {
    rows.iter()
        .map(|row| {
            let values: Vec<String> = row.iter().map(SqlValue::to_sql).collect();
            format!("({})", values.join(", "))
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// One multi-row insert, one row per line.
///
/// A table without rows yields a comment, since `VALUES` must not be empty.
pub fn render_insert(table: &str, columns: &[&str], rows: &[Vec<SqlValue>]) -> String {
    if rows.is_empty() {
        return format!("-- no rows generated for {table}");
    }
    format!(
        "INSERT INTO {} ({}) VALUES \n{};",
        table,
        columns.join(", "),
        render_value_list(rows, ",\n")
    )
}

/// Accumulates script sections, each followed by a newline.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    buffer: String,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Re-enable FK checks and close with the end marker.
    pub fn finish(mut self) -> String {
        self.buffer.push_str("SET FOREIGN_KEY_CHECKS = 1;\n");
        self.buffer.push_str(END_MARKER);
        self.buffer
    }
}

/// Size and digest of a written script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStats {
    pub bytes_written: u64,
    pub sha256: String,
}

/// Write the script, creating missing parent directories.
pub fn write_script(path: &Path, script: &str) -> std::io::Result<ScriptStats> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let mut writer = HashingWriter::new(BufWriter::new(File::create(path)?));
    writer.write_all(script.as_bytes())?;
    writer.flush()?;
    Ok(writer.finish())
}

pub fn script_digest(script: &str) -> String {
    hex::encode(Sha256::digest(script.as_bytes()))
}

struct HashingWriter<W: Write> {
    inner: W,
    bytes: u64,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> ScriptStats {
        ScriptStats {
            bytes_written: self.bytes,
            sha256: hex::encode(self.hasher.finalize()),
        }
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.hasher.update(&buf[..size]);
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_puts_one_row_per_line() {
        let rows = vec![
            vec![SqlValue::Int(1), SqlValue::text("Keys")],
            vec![SqlValue::Int(2), SqlValue::text("Pet's collar")],
        ];
        assert_eq!(
            render_insert("ItemTags", &["ItemID", "TagName"], &rows),
            "INSERT INTO ItemTags (ItemID, TagName) VALUES \n(1, 'Keys'),\n(2, 'Pet''s collar');"
        );
    }

    #[test]
    fn empty_insert_becomes_comment() {
        assert_eq!(
            render_insert("ItemTags", &["ItemID", "TagName"], &[]),
            "-- no rows generated for ItemTags"
        );
    }

    #[test]
    fn builder_closes_script() {
        let mut builder = ScriptBuilder::new();
        builder.section("USE CommunityTrackerDB;");
        assert_eq!(
            builder.finish(),
            "USE CommunityTrackerDB;\nSET FOREIGN_KEY_CHECKS = 1;\n-- END OF SCRIPT"
        );
    }

    #[test]
    fn written_digest_matches_in_memory_digest() {
        let dir = std::env::temp_dir().join(format!("lostfound_script_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("seed.sql");
        let script = "SELECT 1;\n-- END OF SCRIPT";

        let stats = write_script(&path, script).expect("write script");
        assert_eq!(stats.bytes_written, script.len() as u64);
        assert_eq!(stats.sha256, script_digest(script));
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), script);

        std::fs::remove_dir_all(&dir).ok();
    }
}
