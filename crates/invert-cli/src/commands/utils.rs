use anyhow::{Context, Result};

/// Parses a list of board numbers such as `"3,11, 19 27"`.
///
/// Commas and whitespace both separate entries. Range checks are left to
/// the engine.
pub fn parse_numbers(input: &str) -> Result<Vec<u8>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>()
                .with_context(|| format!("'{}' is not a board number", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_numbers("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_numbers(" 4 5,  6 ").unwrap(), vec![4, 5, 6]);
        assert!(parse_numbers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_numbers("1,x,3").unwrap_err();
        assert!(err.to_string().contains("'x'"));
        assert!(parse_numbers("300").is_err());
        assert!(parse_numbers("-1").is_err());
    }
}
