//! # Input Adapter
//!
//! Builds pairs from dynamic, untrusted input.
//!
//! The core constructor is statically typed, so the six-numeric-values
//! contract is enforced here, where booleans, strings and other
//! non-numeric values can actually show up:
//! - JSON tuples (`pair_from_value`)
//! - raw string tokens from a command line (`pair_from_tokens`)
//! - line-oriented batch streams, one JSON tuple per line (`read_pairs`)

use std::io::BufRead;

use serde_json::Value;

use crate::core::{CirclePair, PairError, PairResult};

/// Result type for batch input operations
pub type InputResult<T> = Result<T, InputError>;

/// Errors raised while reading a batch stream
///
/// Validation failures keep their [`PairError`] taxonomy and gain the
/// 1-based line number they were found on.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying reader failed
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not valid JSON
    #[error("line {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },

    /// A line decoded but failed pair validation
    #[error("line {line}: {source}")]
    Pair { line: usize, source: PairError },
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a pair from a JSON value holding `[Ax, Ay, Ar, Bx, By, Br]`
///
/// The payload must be an array of exactly six JSON numbers. Booleans,
/// strings, null and nested containers are rejected with
/// [`PairError::ArgumentType`]; a non-array payload is reported as a type
/// error at index 0.
///
/// # Example
/// ```
/// use circle_pair::adapters::input::pair_from_value;
/// use circle_pair::PairKind;
///
/// let value = serde_json::json!([0, 1, 1, 0, 1, 1]);
/// let pair = pair_from_value(&value).unwrap();
/// assert_eq!(pair.classify(), PairKind::Identical);
///
/// let value = serde_json::json!([true, 1, 1, 0, 1, 1]);
/// assert!(pair_from_value(&value).is_err());
/// ```
pub fn pair_from_value(value: &Value) -> PairResult<CirclePair> {
    let items = value.as_array().ok_or_else(|| PairError::ArgumentType {
        index: 0,
        found: json_type_name(value).to_string(),
    })?;

    if items.len() != 6 {
        return Err(PairError::ArgumentCount { got: items.len() });
    }

    let mut values = [0.0f64; 6];
    for (index, item) in items.iter().enumerate() {
        // Value::as_f64 is None for every non-number, booleans included.
        values[index] = item.as_f64().ok_or_else(|| PairError::ArgumentType {
            index,
            found: json_type_name(item).to_string(),
        })?;
    }

    CirclePair::from_values(&values)
}

/// Build a pair from six string tokens, e.g. command-line arguments
///
/// Tokens that do not parse as numbers are rejected with
/// [`PairError::ArgumentType`] carrying the offending token.
pub fn pair_from_tokens<I, S>(tokens: I) -> PairResult<CirclePair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    if tokens.len() != 6 {
        return Err(PairError::ArgumentCount { got: tokens.len() });
    }

    let mut values = [0.0f64; 6];
    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref().trim();
        values[index] = token.parse::<f64>().map_err(|_| PairError::ArgumentType {
            index,
            found: format!("{:?}", token),
        })?;
    }

    CirclePair::from_values(&values)
}

/// Read a batch of pairs, one JSON tuple per line
///
/// Blank lines and `#` comment lines are skipped. The first malformed
/// line aborts the read with its line number; there is no partial result.
pub fn read_pairs<R: BufRead>(reader: R) -> InputResult<Vec<CirclePair>> {
    let mut pairs = Vec::new();

    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        let number = offset + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed)
            .map_err(|source| InputError::Json { line: number, source })?;
        let pair = pair_from_value(&value)
            .map_err(|source| InputError::Pair { line: number, source })?;
        pairs.push(pair);
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PairKind;
    use serde_json::json;

    #[test]
    fn test_value_accepts_six_numbers() {
        let pair = pair_from_value(&json!([3.21, 5.67, 1, 3.21, 5.67, 3])).unwrap();
        assert_eq!(pair.classify(), PairKind::Concentric);
    }

    #[test]
    fn test_value_rejects_strings() {
        let err = pair_from_value(&json!([1, 2, "test string", 4, 5, 6])).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 2,
                found: "string".to_string()
            }
        );
    }

    #[test]
    fn test_value_rejects_booleans() {
        let err = pair_from_value(&json!([true, false, 3, 4.0, 5, 1])).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 0,
                found: "boolean".to_string()
            }
        );
    }

    #[test]
    fn test_value_rejects_null_and_nested() {
        let err = pair_from_value(&json!([1, 2, 3, null, 5, 6])).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 3,
                found: "null".to_string()
            }
        );

        let err = pair_from_value(&json!([[1], 2, 3, 4, 5, 6])).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 0,
                found: "array".to_string()
            }
        );
    }

    #[test]
    fn test_value_rejects_wrong_counts() {
        for len in [0usize, 1, 5, 7, 8] {
            let items: Vec<f64> = vec![1.0; len];
            let err = pair_from_value(&json!(items)).unwrap_err();
            assert_eq!(err, PairError::ArgumentCount { got: len });
        }
    }

    #[test]
    fn test_value_rejects_non_array_payload() {
        let err = pair_from_value(&json!({"a": 1})).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 0,
                found: "object".to_string()
            }
        );
    }

    #[test]
    fn test_value_still_checks_radii() {
        let err = pair_from_value(&json!([-1, -1, -1, -1, -1, 0])).unwrap_err();
        assert_eq!(err, PairError::InvalidRadius { value: -1.0 });
    }

    #[test]
    fn test_tokens_accept_numeric_spellings() {
        let pair = pair_from_tokens(["2", "3", "4", "-6", "-6", "2.0"]).unwrap();
        assert_eq!(pair.classify(), PairKind::Nonoverlapping);
    }

    #[test]
    fn test_tokens_reject_non_numeric() {
        let err = pair_from_tokens(["1", "2", "three", "4", "5", "6"]).unwrap_err();
        assert_eq!(
            err,
            PairError::ArgumentType {
                index: 2,
                found: "\"three\"".to_string()
            }
        );
    }

    #[test]
    fn test_tokens_reject_wrong_counts() {
        let err = pair_from_tokens(["1", "2", "3"]).unwrap_err();
        assert_eq!(err, PairError::ArgumentCount { got: 3 });
    }

    #[test]
    fn test_read_pairs_skips_blanks_and_comments() {
        let text = "\
# one pair per kind
[0, 1, 1, 0, 1, 1]

[2, 2, 5, 1, 2, 1]
";
        let pairs = read_pairs(text.as_bytes()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].classify(), PairKind::Identical);
        assert_eq!(pairs[1].classify(), PairKind::DisjointInside);
    }

    #[test]
    fn test_read_pairs_reports_json_error_line() {
        let text = "[0, 1, 1, 0, 1, 1]\nnot json\n";
        match read_pairs(text.as_bytes()) {
            Err(InputError::Json { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_pairs_reports_validation_error_line() {
        let text = "\
# comment
[0, 1, 1, 0, 1, 1]
[1, 2, 3]
";
        match read_pairs(text.as_bytes()) {
            Err(InputError::Pair { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, PairError::ArgumentCount { got: 3 });
            }
            other => panic!("expected Pair error, got {:?}", other),
        }
    }
}
