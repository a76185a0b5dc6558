//! Parsing of the raw text fields a form-style caller collects.

use anyhow::{anyhow, Context, Result};

/// Splits a comma-separated request field. A blank field yields an empty
/// batch so the engine reports it as such.
pub fn parse_requests(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(index, raw)| {
            let value = raw.trim();
            if value.is_empty() {
                return Err(anyhow!("request {} is empty", index + 1));
            }
            value
                .parse::<i64>()
                .with_context(|| format!("request {} (`{}`) is not an integer", index + 1, value))
        })
        .collect()
}

pub fn parse_track_field(name: &str, text: &str) -> Result<i64> {
    let value = text.trim();
    if value.is_empty() {
        return Err(anyhow!("{name} is required"));
    }
    value
        .parse::<i64>()
        .with_context(|| format!("{name} (`{value}`) is not an integer"))
}

/// Like [`parse_track_field`], but a blank field means "not supplied".
pub fn parse_optional_track_field(name: &str, text: Option<&str>) -> Result<Option<i64>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_track_field(name, value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_optional_track_field, parse_requests, parse_track_field};

    #[test]
    fn requests_tolerate_whitespace() {
        assert_eq!(
            parse_requests(" 98, 183 ,37,  -4").expect("parses"),
            vec![98, 183, 37, -4]
        );
        assert!(parse_requests("   ").expect("parses").is_empty());
    }

    #[test]
    fn malformed_requests_name_their_position() {
        let err = parse_requests("98,abc,37").expect_err("rejects");
        assert_eq!(err.to_string(), "request 2 (`abc`) is not an integer");

        let err = parse_requests("98,,37").expect_err("rejects");
        assert_eq!(err.to_string(), "request 2 is empty");

        assert!(parse_requests("1.5").is_err());
    }

    #[test]
    fn scalar_fields() {
        assert_eq!(parse_track_field("head", " 53 ").expect("parses"), 53);
        assert_eq!(
            parse_track_field("head", "").expect_err("required").to_string(),
            "head is required"
        );
        assert_eq!(
            parse_optional_track_field("disk size", Some("  ")).expect("parses"),
            None
        );
        assert_eq!(
            parse_optional_track_field("disk size", Some("200")).expect("parses"),
            Some(200)
        );
        assert!(parse_optional_track_field("disk size", Some("2OO")).is_err());
    }
}
