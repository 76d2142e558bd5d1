//! HTML in, normalized tree out.
//!
//! Each case parses literal HTML with html5ever, runs the list pass and
//! compares the `<body>` subtree against its dump.

use mdshape::dom::{Dom, NodeId, dump, is_list_container, is_list_item, parse_html};
use mdshape::normalize_lists;
use pretty_assertions::assert_eq;

fn normalized_body(html: &str) -> String {
    let mut dom = parse_html(html);
    normalize_lists(&mut dom);
    dom.validate().expect("tree should stay consistent");
    let body = dom.find_by_tag("body").expect("parser always creates body");
    dump(&dom, body)
}

fn assert_tree(html: &str, expected: &str) {
    assert_eq!(normalized_body(html).trim_end(), expected.trim());
}

#[test]
fn test_normal_list_is_not_changed() {
    assert_tree(
        "<div><ul><li>A</li><li>B</li><li>C</li></ul></div>",
        r#"
├─body
│ ├─div
│ │ ├─ul
│ │ │ ├─li
│ │ │ │ ├─#text "A"
│ │ │ ├─li
│ │ │ │ ├─#text "B"
│ │ │ ├─li
│ │ │ │ ├─#text "C"
"#,
    );
}

#[test]
fn test_text_moves_into_previous_li() {
    assert_tree(
        "<ul><li>A</li>B</ul>",
        r#"
├─body
│ ├─ul
│ │ ├─li
│ │ │ ├─#text "A"
│ │ │ ├─#text "B"
"#,
    );
}

#[test]
fn test_div_moves_into_previous_li() {
    assert_tree(
        "<ul><li>A</li><div>B</div></ul>",
        r#"
├─body
│ ├─ul
│ │ ├─li
│ │ │ ├─#text "A"
│ │ │ ├─div
│ │ │ │ ├─#text "B"
"#,
    );
}

#[test]
fn test_ol_moves_into_previous_li() {
    assert_tree(
        "<ul><li>A</li><ol><li>B</li></ol></ul>",
        r#"
├─body
│ ├─ul
│ │ ├─li
│ │ │ ├─#text "A"
│ │ │ ├─ol
│ │ │ │ ├─li
│ │ │ │ │ ├─#text "B"
"#,
    );
}

#[test]
fn test_no_existing_li() {
    assert_tree(
        "<ul><span>A</span><span>B</span></ul>",
        r#"
├─body
│ ├─ul
│ │ ├─li
│ │ │ ├─span
│ │ │ │ ├─#text "A"
│ │ │ ├─span
│ │ │ │ ├─#text "B"
"#,
    );
}

#[test]
fn test_comment_before_first_item_gets_its_own_li() {
    assert_tree(
        "<ul><!-- generated --><li>A</li></ul>",
        r#"
├─body
│ ├─ul
│ │ ├─li
│ │ │ ├─#comment " generated "
│ │ ├─li
│ │ │ ├─#text "A"
"#,
    );
}

#[test]
fn test_indented_nested_list_keeps_whitespace() {
    let html = "<ol>\n\t<li>One</li>\n\t<li>Two</li>\n\t<ol>\n\t\t<li>Two point one</li>\n\t\t<li>Two point two</li>\n\t</ol>\n</ol>";

    assert_tree(
        html,
        r#"
├─body
│ ├─ol
│ │ ├─li
│ │ │ ├─#text "\n\t"
│ │ ├─li
│ │ │ ├─#text "One"
│ │ │ ├─#text "\n\t"
│ │ ├─li
│ │ │ ├─#text "Two"
│ │ │ ├─#text "\n\t"
│ │ │ ├─ol
│ │ │ │ ├─li
│ │ │ │ │ ├─#text "\n\t\t"
│ │ │ │ ├─li
│ │ │ │ │ ├─#text "Two point one"
│ │ │ │ │ ├─#text "\n\t\t"
│ │ │ │ ├─li
│ │ │ │ │ ├─#text "Two point two"
│ │ │ │ │ ├─#text "\n\t"
│ │ │ ├─#text "\n"
"#,
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let html = "<ul>x<li>A</li><ol>y<li>B</li>z</ol><p>C</p></ul><ol></ol>";

    let mut dom = parse_html(html);
    normalize_lists(&mut dom);
    let once = dump(&dom, NodeId::ROOT);
    let len = dom.len();

    normalize_lists(&mut dom);

    assert_eq!(dump(&dom, NodeId::ROOT), once);
    assert_eq!(dom.len(), len);
}

#[test]
fn test_every_list_child_is_an_item() {
    let html = r#"
        <ul>
            <p>intro</p>
            <li>one</li>
            <ol><b>two</b><li>three</li></ol>
            text <em>and more</em>
        </ul>
        <div><ol>stray<ul>deeper<li>x</li></ul></ol></div>
    "#;

    let mut dom = parse_html(html);
    normalize_lists(&mut dom);

    let lists: Vec<_> = dom
        .descendants(NodeId::ROOT)
        .filter(|&id| is_list_container(&dom, id))
        .collect();
    assert_eq!(lists.len(), 4);
    for list in lists {
        assert!(dom.children(list).all(|c| is_list_item(&dom, c)));
    }
}

#[test]
fn test_deeply_nested_lists_do_not_overflow() {
    const DEPTH: usize = 50_000;

    let mut dom = Dom::new();
    let mut parent = dom.document();
    for _ in 0..DEPTH {
        let ul = dom.create_html_element("ul");
        dom.append(parent, ul);
        parent = ul;
    }

    normalize_lists(&mut dom);

    let items = dom
        .descendants(NodeId::ROOT)
        .filter(|&id| is_list_item(&dom, id))
        .count();
    assert_eq!(items, DEPTH - 1);
    dom.validate().unwrap();
}
