/*!
# Delimited-Text Codec

The import grammar is deliberately minimal rather than full RFC 4180:
admins hand-edit these files in spreadsheets and text editors, and the
forgiving rules below round-trip everything the export side produces.

- A double quote toggles quoted mode and is structural, never literal;
  `""` is not unescaped on decode.
- Commas split fields only outside a quoted span.
- Every field is whitespace-trimmed after extraction.
- Blank lines are dropped.
*/

// ================================================================================================
// Decoding
// ================================================================================================

/// Split raw CSV text into rows of trimmed fields.
///
/// Empty input yields an empty vector. Quote characters are consumed as
/// mode toggles and never appear in field values.
pub fn decode(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => {
                    row.push(field.trim().to_string());
                    field.clear();
                }
                _ => field.push(ch),
            }
        }

        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows
}

// ================================================================================================
// Encoding
// ================================================================================================

/// Quote-wrap a field iff its raw value needs it (contains a comma, a
/// double quote or a newline), doubling any internal quotes.
pub fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize rows to CSV text: one line per row, lines joined with `\n`,
/// no trailing newline.
pub fn encode(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode("").is_empty());
        assert!(decode("\n\n  \n").is_empty());
    }

    #[test]
    fn test_decode_plain_rows() {
        let rows = decode("a,b,c\nd,e,f");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["d", "e", "f"])]);
    }

    #[test]
    fn test_decode_trims_fields_and_drops_blank_lines() {
        let rows = decode(" a , b \n\n c ,d\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_decode_quoted_comma() {
        let rows = decode("name,suffix\n\"Doe, Jr.\",phd");
        assert_eq!(rows[1], row(&["Doe, Jr.", "phd"]));
    }

    #[test]
    fn test_decode_quotes_are_structural_not_literal() {
        // Quotes toggle mid-field too and never show up in the value.
        let rows = decode("a\"b,c\"d,e");
        assert_eq!(rows, vec![row(&["ab,cd", "e"])]);
    }

    #[test]
    fn test_decode_does_not_unescape_doubled_quotes() {
        // "" is two toggles, not an escaped quote.
        let rows = decode("\"say \"\"hi\"\"\",x");
        assert_eq!(rows, vec![row(&["say hi", "x"])]);
    }

    #[test]
    fn test_escape_field_only_when_needed() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("Doe, Jr."), "\"Doe, Jr.\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_encode_no_trailing_newline() {
        let text = encode(&[row(&["a", "b"]), row(&["c", "d"])]);
        assert_eq!(text, "a,b\nc,d");
    }

    #[test]
    fn test_round_trip_without_pathological_characters() {
        let rows = vec![
            row(&["ada@lab.edu", "Ada", "Lovelace"]),
            row(&["grace@lab.edu", "Grace", "Hopper"]),
        ];
        assert_eq!(decode(&encode(&rows)), rows);
    }

    #[test]
    fn test_round_trip_comma_field() {
        let rows = vec![row(&["Doe, Jr.", "x"])];
        let text = encode(&rows);
        assert_eq!(text, "\"Doe, Jr.\",x");
        assert_eq!(decode(&text), rows);
    }
}
