use diary_markup::render;

#[test]
fn test_heading_levels() {
    assert_eq!(render("# Title"), "<h1>Title</h1>");
    assert_eq!(render("## Title"), "<h2>Title</h2>");
    assert_eq!(render("### Title"), "<h3>Title</h3>");
}

#[test]
fn test_line_without_hash_is_untouched() {
    assert_eq!(render("Title"), "Title");
}

#[test]
fn test_heading_text_is_trimmed() {
    assert_eq!(render("#Tight"), "<h1>Tight</h1>");
    assert_eq!(render("#   Spaced   "), "<h1>Spaced</h1>");
}

#[test]
fn test_four_hashes_is_not_a_heading() {
    assert_eq!(render("#### Too deep"), "#### Too deep");
}

#[test]
fn test_heading_must_start_the_line() {
    assert_eq!(render("text # not heading"), "text # not heading");
    assert_eq!(render("# A # B"), "# A # B");
}

#[test]
fn test_heading_wraps_earlier_rule_output() {
    assert_eq!(render("# **Bold** title"), "<h1><b>Bold</b> title</h1>");
}

#[test]
fn test_heading_applies_per_line() {
    assert_eq!(
        render("# One\r\nbody\r\n## Two"),
        "<h1>One</h1><br>body<br><h2>Two</h2>"
    );
}

#[test]
fn test_heading_with_stray_line_feed() {
    assert_eq!(render("# Title\n"), "<h1>Title</h1>\n");
    assert_eq!(render("# Title\n\n"), "# Title\n\n");
}
