use std::io;

use serde_json::Value;

use super::format;

pub fn render_benefits(data: &Value) -> io::Result<String> {
    let esg_score = data
        .get("esg_score")
        .and_then(Value::as_i64)
        .ok_or_else(|| io::Error::other("benefits output requires esg_score"))?;
    let bonus_rate = data
        .get("bonus_rate_pp")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let interest = data
        .get("annual_bonus_interest")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let reward = data
        .get("monthly_card_reward")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let mut lines = vec![
        format!("Green banking benefits (eco score {esg_score})"),
        String::new(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Rate bonus", format!("+{bonus_rate:.2} %p")),
            ("Annual bonus interest", format!("{interest} /yr")),
            ("Monthly card reward", format!("{reward} /mo")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_benefits;

    #[test]
    fn renders_all_three_estimates() {
        let data = json!({
            "esg_score": 92,
            "bonus_rate_pp": 0.276,
            "annual_bonus_interest": 27600,
            "monthly_card_reward": 10100
        });
        let rendered = render_benefits(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Green banking benefits (eco score 92)"));
            assert!(text.contains("+0.28 %p"));
            assert!(text.contains("27600 /yr"));
            assert!(text.contains("10100 /mo"));
        }
    }
}
