use crate::types::Exchange;
use rusqlite::{params, Connection};
use std::path::PathBuf;

const APP_NAME: &str = "hey";
const RESPONSE_SAMPLE_CHARS: usize = 400;

fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

pub fn get_db_path() -> PathBuf {
    get_data_dir().join("history.db")
}

pub fn init_db(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS exchanges (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            input TEXT,
            action TEXT,
            parameters TEXT,
            confidence REAL,
            executed INTEGER,
            succeeded INTEGER,
            response_sample TEXT,
            timestamp INTEGER
        )",
        [],
    )?;
    Ok(())
}

pub fn save_exchange(
    conn: &Connection,
    input: &str,
    action: &str,
    parameters: &[(String, String)],
    confidence: f64,
    executed: bool,
    succeeded: bool,
    response: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs() as i64;
    let parameters_json = serde_json::to_string(parameters)?;
    let sample: String = response.chars().take(RESPONSE_SAMPLE_CHARS).collect();

    conn.execute(
        "INSERT INTO exchanges (input, action, parameters, confidence, executed, succeeded, response_sample, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            input,
            action,
            parameters_json,
            confidence,
            executed as i32,
            succeeded as i32,
            sample,
            now
        ],
    )?;
    Ok(())
}

pub fn recent_exchanges(
    conn: &Connection,
    limit: usize,
) -> Result<Vec<Exchange>, Box<dyn std::error::Error>> {
    let mut stmt = conn.prepare(
        "SELECT input, action, parameters, confidence, executed, succeeded
         FROM exchanges ORDER BY timestamp DESC, id DESC LIMIT ?1",
    )?;

    let entries = stmt
        .query_map(params![limit as i64], |row| {
            let parameters_json: String = row.get(2)?;
            let parameters: Vec<(String, String)> =
                serde_json::from_str(&parameters_json).unwrap_or_default();
            Ok(Exchange {
                input: row.get(0)?,
                action: row.get(1)?,
                parameters,
                confidence: row.get(3)?,
                executed: row.get::<_, i32>(4)? != 0,
                succeeded: row.get::<_, i32>(5)? != 0,
            })
        })?
        .filter_map(|r| r.ok())
        .collect();

    Ok(entries)
}

pub fn exchange_count(conn: &Connection) -> u32 {
    conn.query_row("SELECT COUNT(*) FROM exchanges", [], |row| row.get(0))
        .unwrap_or(0)
}

pub fn action_counts(conn: &Connection) -> Result<Vec<(String, u32)>, Box<dyn std::error::Error>> {
    let mut stmt = conn.prepare(
        "SELECT action, COUNT(*) FROM exchanges
         WHERE action != '' GROUP BY action ORDER BY COUNT(*) DESC, action",
    )?;

    let counts = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(counts)
}

pub fn clear_history(conn: &Connection) -> Result<usize, Box<dyn std::error::Error>> {
    let removed = conn.execute("DELETE FROM exchanges", [])?;
    Ok(removed)
}
