use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

/// Color used for an operation name in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "resume" => Colour::Green,
        "pause" => Colour::Yellow,
        "delete" | "session_remove" | "session_clear" => Colour::Red,
        "reset" => Colour::Cyan,
        "export" => Colour::Blue,
        "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("session_") => Colour::Green,
        _ => Colour::White,
    }
}

/// Visible width of a string that may contain ANSI sequences.
fn visible_len(re: &Regex, s: &str) -> usize {
    re.replace_all(s, "").chars().count()
}

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    /// Rows of the internal `log` table, optionally restricted to one
    /// operation, oldest first.
    pub fn load(pool: &mut DbPool, operation: Option<&str>) -> AppResult<Vec<LogRow>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log
             WHERE ?1 IS NULL OR operation = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([operation], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(pool: &mut DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries = Self::load(pool, operation)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| {
            crate::errors::AppError::Other(format!("invalid ANSI pattern: {e}"))
        })?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let op = color_for_operation(&e.operation).paint(e.operation.as_str());
                if e.target.is_empty() {
                    op.to_string()
                } else {
                    format!("{op} ({})", e.target)
                }
            })
            .collect();

        let op_w = labels
            .iter()
            .map(|l| visible_len(&ansi, l))
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels.iter()) {
            let padding = " ".repeat(op_w.saturating_sub(visible_len(&ansi, label)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                label,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
