// Edge-list record tokenizer
use pathx_core::{Error, NodeId, Record, Result};

/// Reader options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat whitespace-only lines as absent instead of malformed.
    pub skip_blank_lines: bool,
    /// Lines starting with this prefix (after leading whitespace) are ignored.
    pub comment_prefix: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            comment_prefix: None,
        }
    }
}

fn parse_error(line: usize, content: &str, reason: impl Into<String>) -> Error {
    Error::Parse {
        line,
        content: content.to_string(),
        reason: reason.into(),
    }
}

fn parse_id(line: usize, content: &str, token: &str) -> Result<NodeId> {
    token
        .parse::<NodeId>()
        .map_err(|e| parse_error(line, content, e.to_string()))
}

fn parse_weight(line: usize, content: &str, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| {
        let digits = token.strip_prefix('-').unwrap_or(token);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            parse_error(line, content, format!("weight {} is out of range", token))
        } else {
            parse_error(line, content, format!("weight {:?} is not an integer", token))
        }
    })
}

/// Parse one input line. `line` is 1-based and only used for error context.
///
/// Returns `Ok(None)` for lines that carry no record (blank or comment).
/// A negative weight parses successfully; the graph store rejects it.
pub fn parse_line(line: usize, content: &str, options: &LoadOptions) -> Result<Option<Record>> {
    let trimmed = content.trim();
    if trimmed.is_empty() && options.skip_blank_lines {
        return Ok(None);
    }
    if let Some(prefix) = options.comment_prefix.as_deref() {
        if !prefix.is_empty() && trimmed.starts_with(prefix) {
            return Ok(None);
        }
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens.as_slice() {
        [id] => Ok(Some(Record::Node(parse_id(line, content, id)?))),
        [from, to, weight] => Ok(Some(Record::Edge {
            from: parse_id(line, content, from)?,
            to: parse_id(line, content, to)?,
            weight: parse_weight(line, content, weight)?,
        })),
        other => Err(parse_error(
            line,
            content,
            format!("expected 1 or 3 tokens, found {}", other.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Option<Record>> {
        parse_line(1, text, &LoadOptions::default())
    }

    fn reason(err: Error) -> String {
        match err {
            Error::Parse { reason, .. } => reason,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_node_and_edge_records() {
        assert_eq!(parse("316319897").unwrap(), Some(Record::Node(NodeId::from(316319897))));
        assert_eq!(
            parse("  314180912\t314180913   12 \r").unwrap(),
            Some(Record::Edge {
                from: NodeId::from(314180912),
                to: NodeId::from(314180913),
                weight: 12,
            })
        );
    }

    #[test]
    fn test_negative_weight_is_left_to_the_store() {
        let record = parse("1 2 -4").unwrap().unwrap();
        assert!(matches!(record, Record::Edge { weight: -4, .. }));
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(reason(parse("1 2").unwrap_err()), "expected 1 or 3 tokens, found 2");
        assert_eq!(reason(parse("1 2 3 4").unwrap_err()), "expected 1 or 3 tokens, found 4");
    }

    #[test]
    fn test_non_numeric_tokens() {
        assert!(reason(parse("abc").unwrap_err()).contains("\"abc\""));
        assert!(reason(parse("1 x 3").unwrap_err()).contains("\"x\""));
        assert!(reason(parse("1 2 3.5").unwrap_err()).contains("not an integer"));
        assert!(reason(parse("1 2 99999999999999999999").unwrap_err()).contains("out of range"));
    }

    #[test]
    fn test_large_ids_parse() {
        let record = parse("340282366920938463463374607431768211457 7 1").unwrap().unwrap();
        match record {
            Record::Edge { from, to, weight } => {
                assert_eq!(from.to_string(), "340282366920938463463374607431768211457");
                assert_eq!(to, NodeId::from(7));
                assert_eq!(weight, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse("   ").unwrap(), None);

        let strict = LoadOptions {
            skip_blank_lines: false,
            comment_prefix: Some("#".to_string()),
        };
        assert!(parse_line(3, "", &strict).is_err());
        assert_eq!(parse_line(4, "  # header", &strict).unwrap(), None);
    }

    #[test]
    fn test_error_carries_line_context() {
        match parse_line(17, "1 2", &LoadOptions::default()).unwrap_err() {
            Error::Parse { line, content, .. } => {
                assert_eq!(line, 17);
                assert_eq!(content, "1 2");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
