use diary_markup::{EngineOptions, MarkupEngine};
use insta::assert_snapshot;

fn render(raw: &str) -> String {
    diary_markup::render(raw)
}

#[test]
fn test_link() {
    assert_snapshot!(
        render("[diary](https://example.com)"),
        @r#"<a class="textlink" href="https://example.com">diary</a>"#
    );
}

#[test]
fn test_link_inside_text() {
    assert_eq!(
        render("see [docs](http://x.cz/a) now"),
        r#"see <a class="textlink" href="http://x.cz/a">docs</a> now"#
    );
}

#[test]
fn test_link_scheme_is_case_insensitive() {
    assert_eq!(
        render("[x](HTTPS://A.CZ)"),
        r#"<a class="textlink" href="HTTPS://A.CZ">x</a>"#
    );
}

#[test]
fn test_non_http_link_stays_literal() {
    assert_eq!(render("[x](ftp://a.cz)"), "[x](ftp://a.cz)");
}

#[test]
fn test_malformed_links_stay_literal() {
    for raw in [
        "[two words](http://a.cz)",
        "[x](http://a.cz",
        "[x] (http://a.cz)",
        "x](http://a.cz)",
        "[](http://a.cz)",
    ] {
        let html = render(raw);
        assert!(!html.contains("<a "), "{raw:?} produced {html:?}");
        assert_eq!(html, raw);
    }
}

#[test]
fn test_link_without_paren_target_stays_literal() {
    // The bracket group swallows the URL, leaving no paren group for the target.
    assert_eq!(render("[a](http://x[b])"), "[a](http://x[b])");
}

#[test]
fn test_bold_link() {
    assert_eq!(
        render("**[a](http://b.cz)**"),
        r#"<b><a class="textlink" href="http://b.cz">a</a></b>"#
    );
}

#[test]
fn test_configured_link_class() {
    let engine = MarkupEngine::new(EngineOptions {
        link_class: "external".to_string(),
        ..EngineOptions::default()
    });
    assert_eq!(
        engine.render("[a](http://b.cz)"),
        r#"<a class="external" href="http://b.cz">a</a>"#
    );
}
