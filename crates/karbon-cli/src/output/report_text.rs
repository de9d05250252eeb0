use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_report(data: &Value) -> io::Result<String> {
    let total = data
        .get("total_gco2e")
        .and_then(Value::as_i64)
        .ok_or_else(|| io::Error::other("report output requires total_gco2e"))?;
    let score = data.get("eco_score").and_then(Value::as_i64).unwrap_or(0);
    let source = data.get("source").and_then(Value::as_str).unwrap_or("fixture");

    let mut lines = vec![
        period_heading("Carbon receipt", data),
        String::new(),
        "Summary:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Total emission", format::format_grams(total)),
            ("Eco score", format!("{score} / 100")),
            ("Source", source.to_string()),
        ],
        2,
    ));

    let top = data
        .get("top_categories")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if top.is_empty() {
        lines.push(String::new());
        lines.push("No transactions in this period.".to_string());
        return Ok(lines.join("\n"));
    }

    lines.push(String::new());
    lines.push("Top categories:".to_string());
    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "gCO2e",
            align: Align::Right,
        },
    ];
    let table_rows = top
        .iter()
        .map(|row| {
            vec![
                row.get("category_id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("gco2e")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    let guides = data
        .get("guides")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !guides.is_empty() {
        lines.push(String::new());
        lines.push("Guides:".to_string());
        for guide in &guides {
            if let Some(text) = guide.as_str() {
                lines.push(format!("  - {text}"));
            }
        }
    }

    Ok(lines.join("\n"))
}

pub fn render_trend(data: &Value) -> io::Result<String> {
    let days = data
        .get("days")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("trend output requires days"))?;

    if days.is_empty() {
        return Ok("No transactions in this period.".to_string());
    }

    let total = data.get("total_gco2e").and_then(Value::as_i64).unwrap_or(0);
    let mut lines = vec![period_heading("Emission trend", data), String::new()];

    let columns = [
        Column {
            name: "Day",
            align: Align::Left,
        },
        Column {
            name: "gCO2e",
            align: Align::Right,
        },
    ];
    let table_rows = days
        .iter()
        .map(|row| {
            vec![
                row.get("day")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                row.get("gco2e")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table(&columns, &table_rows));

    lines.push(String::new());
    lines.push(format!("  Total: {}", format::format_grams(total)));

    Ok(lines.join("\n"))
}

fn period_heading(label: &str, data: &Value) -> String {
    let from = data.get("from").and_then(Value::as_str);
    let to = data.get("to").and_then(Value::as_str);
    match (from, to) {
        (Some(start), Some(end)) => format!("{label} ({start} to {end})"),
        (Some(start), None) => format!("{label} (from {start})"),
        (None, Some(end)) => format!("{label} (through {end})"),
        (None, None) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_report, render_trend};

    #[test]
    fn report_text_lists_summary_and_top_categories() {
        let data = json!({
            "source": "fixture",
            "total_gco2e": 8028,
            "eco_score": 92,
            "top_categories": [
                {"category_id": "MOBILITY.TAXI", "gco2e": 2640}
            ],
            "guides": ["Take the bus."],
            "transactions": []
        });

        let rendered = render_report(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Carbon receipt"));
            assert!(text.contains("8.0 kgCO2e"));
            assert!(text.contains("92 / 100"));
            assert!(text.contains("MOBILITY.TAXI"));
            assert!(text.contains("- Take the bus."));
        }
    }

    #[test]
    fn empty_trend_prints_a_friendly_line() {
        let data = json!({"days": [], "total_gco2e": 0});
        let rendered = render_trend(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert_eq!(text, "No transactions in this period.");
        }
    }

    #[test]
    fn trend_heading_carries_the_period() {
        let data = json!({
            "from": "2025-08-01",
            "to": "2025-08-31",
            "total_gco2e": 954,
            "days": [{"day": "08-13", "gco2e": 954}]
        });
        let rendered = render_trend(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Emission trend (2025-08-01 to 2025-08-31)"));
            assert!(text.contains("08-13"));
        }
    }
}
