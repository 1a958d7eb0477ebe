//! Quote-aware field splitting.

/// Splits a CSV line on commas that are outside double quotes.
///
/// Quotes are kept in the returned fields; callers strip them where they
/// need to. A trailing comma yields a trailing empty field.
///
/// ```
/// use algolab_adapters::ingest::split_quoted;
///
/// let fields = split_quoted(r#"1,"Good, Bad",1966"#);
/// assert_eq!(fields, ["1", r#""Good, Bad""#, "1966"]);
/// ```
pub fn split_quoted(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_quoted("a,b,c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_fields_kept() {
        assert_eq!(split_quoted("a,,c,"), ["a", "", "c", ""]);
        assert_eq!(split_quoted(""), [""]);
    }

    #[test]
    fn test_comma_inside_quotes() {
        let line = r#"x,"The Good, the Bad and the Ugly","1,234",9"#;
        assert_eq!(
            split_quoted(line),
            ["x", r#""The Good, the Bad and the Ugly""#, r#""1,234""#, "9"]
        );
    }

    #[test]
    fn test_escaped_quotes() {
        // A doubled quote toggles twice, so the comma after it is still quoted.
        let line = r#"1,"He said ""hi, there""",2"#;
        assert_eq!(split_quoted(line), ["1", r#""He said ""hi, there""""#, "2"]);
    }
}
