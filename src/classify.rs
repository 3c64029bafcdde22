//! Token classification
//!
//! Splits a mixed list of string/integer tokens into numeric and alphabetic
//! groups and finds the highest lowercase alphabetic token.

use crate::api::types::Token;

#[derive(Debug, PartialEq, Eq)]
pub struct Classification {
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_lowercase: Option<String>,
}

/// Partition tokens into numeric and alphabetic lists, preserving input order.
///
/// A token is alphabetic when it is a non-empty string made entirely of
/// alphabetic characters; every other token is stringified into `numbers`.
pub fn classify(data: &[Token]) -> Classification {
    let mut numbers = Vec::new();
    let mut alphabets = Vec::new();

    for item in data {
        match item {
            Token::Text(s) if is_alphabetic(s) => alphabets.push(s.clone()),
            Token::Text(s) => numbers.push(s.clone()),
            Token::Int(n) => numbers.push(n.to_string()),
        }
    }

    let highest_lowercase = alphabets
        .iter()
        .filter(|s| s.chars().all(char::is_lowercase))
        .max()
        .cloned();

    Classification {
        numbers,
        alphabets,
        highest_lowercase,
    }
}

fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<Token> {
        items
            .iter()
            .map(|s| {
                s.parse::<i64>()
                    .map_or_else(|_| Token::Text((*s).to_string()), Token::Int)
            })
            .collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let data = tokens(&["M", "1", "334", "4", "B"]);
        let result = classify(&data);
        assert_eq!(result.numbers, vec!["1", "334", "4"]);
        assert_eq!(result.alphabets, vec!["M", "B"]);
    }

    #[test]
    fn test_partition_is_exact() {
        let data = tokens(&["a", "7", "Zx", "a1", "99"]);
        let result = classify(&data);
        assert_eq!(
            result.numbers.len() + result.alphabets.len(),
            data.len()
        );
        // Mixed alphanumeric strings are not alphabetic
        assert!(result.numbers.contains(&"a1".to_string()));
    }

    #[test]
    fn test_highest_lowercase() {
        let result = classify(&tokens(&["a", "C", "z", "c", "3"]));
        assert_eq!(result.highest_lowercase, Some("z".to_string()));
    }

    #[test]
    fn test_highest_lowercase_is_lexicographic_over_words() {
        let result = classify(&tokens(&["abc", "ab", "B"]));
        assert_eq!(result.highest_lowercase, Some("abc".to_string()));
    }

    #[test]
    fn test_no_lowercase_yields_none() {
        let result = classify(&tokens(&["A", "B", "1"]));
        assert_eq!(result.highest_lowercase, None);
    }

    #[test]
    fn test_uppercase_excluded_from_highest() {
        let result = classify(&tokens(&["Z", "a"]));
        assert_eq!(result.highest_lowercase, Some("a".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let result = classify(&[]);
        assert!(result.numbers.is_empty());
        assert!(result.alphabets.is_empty());
        assert_eq!(result.highest_lowercase, None);
    }

    #[test]
    fn test_empty_string_goes_to_numbers() {
        let result = classify(&tokens(&[""]));
        assert_eq!(result.numbers, vec![String::new()]);
        assert!(result.alphabets.is_empty());
    }

    #[test]
    fn test_negative_integers_stringified() {
        let result = classify(&[Token::Int(-5), Token::Int(0)]);
        assert_eq!(result.numbers, vec!["-5", "0"]);
    }
}
