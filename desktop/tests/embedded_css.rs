#![cfg(test)]
//! The desktop build embeds the shared theme (`ui/assets/theme/main.css`)
//! instead of shipping an asset folder. A truncated or moved file would only
//! show up at runtime as an unstyled window, so check it here.
//!
//! If the theme is renamed, update this test and `ui::THEME_CSS_INLINE`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_matches_the_ui_constant() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS_INLINE);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", ".theme-dark", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
