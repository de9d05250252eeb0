use std::fs;
use std::io::{IsTerminal, Read};

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) source_kind: SourceKind,
    pub(crate) content: String,
}

pub(crate) fn resolve_source(
    path: String,
    stdin_override: Option<String>,
) -> CoreResult<ResolvedSource> {
    if path == "-" {
        let stdin_body = read_stdin(stdin_override)?;
        if let Some(stdin_value) = stdin_body
            && !stdin_value.trim().is_empty()
        {
            return Ok(ResolvedSource {
                source_kind: SourceKind::Stdin,
                content: stdin_value,
            });
        }

        return Err(CoreError::invalid_argument(
            "Path `-` means stdin input, but stdin was empty. Pipe JSON/CSV input or pass a file path.",
        ));
    }

    let content = fs::read_to_string(&path).map_err(|error| {
        CoreError::invalid_argument_with_recovery(
            &format!("Could not read transaction file `{path}`: {error}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Rerun `karbon report --input <path>`.".to_string(),
            ],
        )
    })?;

    Ok(ResolvedSource {
        source_kind: SourceKind::File,
        content,
    })
}

fn read_stdin(stdin_override: Option<String>) -> CoreResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            CoreError::invalid_argument(&format!("Could not read stdin input: {error}"))
        })?;
    Ok(Some(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_override_feeds_dash_path() {
        let resolved = resolve_source("-".to_string(), Some("[{}]".to_string()));
        assert!(resolved.is_ok());
        if let Ok(source) = resolved {
            assert_eq!(source.source_kind, SourceKind::Stdin);
            assert_eq!(source.content, "[{}]");
        }
    }

    #[test]
    fn empty_stdin_override_is_rejected() {
        let resolved = resolve_source("-".to_string(), Some("   ".to_string()));
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn missing_file_is_an_argument_error() {
        let resolved = resolve_source("/nonexistent/txns.json".to_string(), None);
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}
