//! Every rule at once, one per line.

use insta::assert_snapshot;

const KITCHENSINK: &str = "# Dnešní den\r\n\
Byl jsem **venku** a bylo __krásně__.\r\n\
@@**nechat**@@\r\n\
H,,2,,O a E = mc^^2^^\r\n\
~~smazat~~ [odkaz](https://example.com)\r\n\
//konec//";

#[test]
fn test_kitchensink_render() {
    assert_snapshot!(
        diary_markup::render(KITCHENSINK),
        @r#"<h1>Dnešní den</h1><br>Byl jsem <b>venku</b> a bylo <u>krásně</u>.<br>**nechat**<br>H<sub>2</sub>O a E = mc<sup>2</sup><br><del>smazat</del> <a class="textlink" href="https://example.com">odkaz</a><br><i>konec</i>"#
    );
}

#[test]
fn test_kitchensink_preview() {
    let html = diary_markup::render(KITCHENSINK);
    assert_eq!(diary_markup::preview(&html), "Dnešní den");
}
