use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "success": true, "message": message }))?
            );
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a collection; `line` renders one row in text mode
pub fn output_rows<T: Serialize>(
    output_format: OutputFormat,
    rows: &[T],
    empty_message: &str,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Text if rows.is_empty() => {
            println!("{}", empty_message);
        }
        OutputFormat::Text => {
            for row in rows {
                println!("{}", line(row));
            }
        }
    }
    Ok(())
}

/// Render an optional number, using "-" for null
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
