use diary_markup::render;

#[test]
fn test_escaped_line_is_verbatim() {
    assert_eq!(render("@@**raw** //text//@@"), "**raw** //text//");
}

#[test]
fn test_escape_only_affects_its_own_line() {
    assert_eq!(
        render("@@# not a heading@@\r\n# Heading"),
        "# not a heading<br><h1>Heading</h1>"
    );
}

#[test]
fn test_escaped_link_is_not_linked() {
    assert_eq!(
        render("@@[a](http://b.cz)@@"),
        "[a](http://b.cz)"
    );
}

#[test]
fn test_half_escaped_line_is_formatted() {
    assert_eq!(render("@@open"), "@@open");
    assert_eq!(render("@@ **x** "), "@@ <b>x</b> ");
}

#[test]
fn test_bare_markers() {
    assert_eq!(render("@@"), "");
    assert_eq!(render("@@@"), "");
    assert_eq!(render("@@@@"), "");
}
