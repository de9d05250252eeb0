use karbon_core::CoreError;
use serde_json::Value;

pub fn render_error(error: &CoreError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    let issues = error
        .data
        .as_ref()
        .and_then(|data| data.get("issues"))
        .and_then(Value::as_array);
    if let Some(issues) = issues {
        lines.push(String::new());
        lines.push("Rows that need fixes:".to_string());
        for issue in issues {
            lines.push(format!("  - {}", describe_issue(issue)));
        }
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn describe_issue(issue: &Value) -> String {
    let row = issue.get("row").and_then(Value::as_i64).unwrap_or(0);
    let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
    let description = issue
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("invalid value");
    match issue.get("received").and_then(Value::as_str) {
        Some(received) => format!("row {row}, {field}: {description} (got `{received}`)"),
        None => format!("row {row}, {field}: {description}"),
    }
}
