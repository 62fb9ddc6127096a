use crate::error::BoletimError;
use crate::model::ExtractedItem;
use crate::store::{ItemStore, StoreSummary};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// SQLite-backed item store.
///
/// Decimals are stored as TEXT so monetary values round-trip exactly.
/// Delete and insert run as separate statements, mirroring the
/// delete-then-insert contract; the bulk insert itself is transactional.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, BoletimError> {
        Self::from_connection(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> Result<Self, BoletimError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, BoletimError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS solicitation_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                week TEXT NOT NULL,
                solicitation TEXT NOT NULL,
                seq INTEGER NOT NULL,
                product_code TEXT NOT NULL,
                quantity TEXT NOT NULL,
                unit_value TEXT NOT NULL,
                total_value TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_items_week ON solicitation_items(week)",
            [],
        )?;

        Ok(SqliteStore { conn })
    }

    /// Number of items currently stored under a week label.
    pub fn week_item_count(&self, week_label: &str) -> Result<usize, BoletimError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM solicitation_items WHERE week = ?1",
            params![week_label],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

impl ItemStore for SqliteStore {
    fn delete_week(&mut self, week_label: &str) -> Result<(), BoletimError> {
        self.conn.execute(
            "DELETE FROM solicitation_items WHERE week = ?1",
            params![week_label],
        )?;
        Ok(())
    }

    fn insert_batch(
        &mut self,
        week_label: &str,
        items: &[ExtractedItem],
    ) -> Result<(), BoletimError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO solicitation_items
                    (week, solicitation, seq, product_code, quantity, unit_value, total_value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for item in items {
                stmt.execute(params![
                    week_label,
                    item.solicitation_number,
                    item.sequence,
                    item.product_code,
                    item.quantity.to_string(),
                    item.unit_value.to_string(),
                    item.total_value.to_string(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn aggregate_summary(&self) -> Result<StoreSummary, BoletimError> {
        let mut stmt = self
            .conn
            .prepare("SELECT solicitation, total_value FROM solicitation_items")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut total_item_count = 0usize;
        let mut total_value = Decimal::ZERO;
        let mut solicitations: HashSet<String> = HashSet::new();
        for row in rows {
            let (solicitation, stored_total) = row?;
            total_item_count += 1;
            total_value += Decimal::from_str(&stored_total).map_err(|e| {
                BoletimError::Store(format!("total_value '{stored_total}': {e}"))
            })?;
            solicitations.insert(solicitation);
        }

        Ok(StoreSummary {
            total_item_count,
            total_value,
            distinct_solicitation_count: solicitations.len(),
        })
    }
}
