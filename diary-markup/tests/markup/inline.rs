//! Doubled-sigil styles and line handling

use diary_markup::render;

#[test]
fn test_bold() {
    assert_eq!(render("**hi**"), "<b>hi</b>");
}

#[test]
fn test_each_style_emits_its_tag() {
    assert_eq!(render("//it//"), "<i>it</i>");
    assert_eq!(render("__under__"), "<u>under</u>");
    assert_eq!(render("~~gone~~"), "<del>gone</del>");
    assert_eq!(render("E = mc^^2^^"), "E = mc<sup>2</sup>");
    assert_eq!(render("H,,2,,O"), "H<sub>2</sub>O");
}

#[test]
fn test_styles_apply_inside_a_sentence() {
    assert_eq!(
        render("Dnes bylo **opravdu** hezky."),
        "Dnes bylo <b>opravdu</b> hezky."
    );
}

#[test]
fn test_unicode_text_is_kept() {
    assert_eq!(render("**žluťoučký kůň**"), "<b>žluťoučký kůň</b>");
}

#[test]
fn test_bold_span_is_greedy() {
    // One span from the first opening sigil to the last closing one.
    assert_eq!(render("**a** and **b**"), "<b>a** and **b</b>");
}

#[test]
fn test_superscript_and_subscript_reject_whitespace() {
    assert_eq!(render("^^two words^^"), "^^two words^^");
    assert_eq!(render(",,two words,,"), ",,two words,,");
}

#[test]
fn test_unbalanced_sigils_stay_literal() {
    assert_eq!(render("**open"), "**open");
    assert_eq!(render("single *star* and /slash/"), "single *star* and /slash/");
    assert_eq!(render("~~~"), "~~~");
}

#[test]
fn test_rules_stack_in_order() {
    assert_eq!(render("**__both__**"), "<b><u>both</u></b>");
    assert_eq!(render("**//x//**"), "<b><i>x</i></b>");
}

#[test]
fn test_lines_are_joined_with_br() {
    assert_eq!(render("a\r\nb\r\nc"), "a<br>b<br>c");
    assert_eq!(render("a\r\n\r\nb"), "a<br><br>b");
    assert_eq!(render("trailing\r\n"), "trailing<br>");
}

#[test]
fn test_styles_do_not_cross_lines() {
    assert_eq!(render("**start\r\nend**"), "**start<br>end**");
}
