//! Classifiers over page text.

use crate::config::TEXT_PREVIEW_CHARS;
use crate::utils::collapse_whitespace;

use super::tables::SignatureTables;

/// Case-insensitive search of the raw body for login vocabulary.
pub fn detect_login_page(body: &str, tables: &SignatureTables) -> bool {
    let lower = body.to_lowercase();
    tables
        .login_indicators
        .iter()
        .any(|indicator| lower.contains(indicator.as_str()))
}

/// Every category with a keyword in the lower-cased page text, in table
/// order; the default category when nothing matches.
pub fn classify_content(text: &str, tables: &SignatureTables) -> Vec<String> {
    let lower = text.to_lowercase();
    let categories: Vec<String> = tables
        .content_categories
        .iter()
        .filter(|category| category.keywords.iter().any(|k| lower.contains(k.as_str())))
        .map(|category| category.name.clone())
        .collect();

    if categories.is_empty() {
        vec![tables.default_content_category.clone()]
    } else {
        categories
    }
}

/// First characters of the page text with whitespace runs collapsed.
pub fn text_preview(text: &str) -> String {
    collapse_whitespace(text)
        .chars()
        .take(TEXT_PREVIEW_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_detection_is_case_insensitive() {
        let tables = SignatureTables::default();
        assert!(detect_login_page("<a href='/x'>Sign In</a>", &tables));
        assert!(detect_login_page("<input name='USERNAME'>", &tables));
        assert!(!detect_login_page("<p>Welcome to our bakery</p>", &tables));
    }

    #[test]
    fn test_no_keywords_gives_general_information() {
        let tables = SignatureTables::default();
        assert_eq!(
            classify_content("zzz qqq", &tables),
            vec!["General Information".to_string()]
        );
    }

    #[test]
    fn test_multiple_categories_in_table_order() {
        let tables = SignatureTables::default();
        let categories = classify_content("Visit our SHOP or read the Blog", &tables);
        assert_eq!(
            categories,
            vec!["E-commerce".to_string(), "Blog/News".to_string()]
        );
    }

    #[test]
    fn test_text_preview_is_collapsed_and_bounded() {
        assert_eq!(text_preview("  Hello \n\n  world  "), "Hello world");
        let long = "a ".repeat(400);
        assert_eq!(text_preview(&long).chars().count(), TEXT_PREVIEW_CHARS);
    }
}
