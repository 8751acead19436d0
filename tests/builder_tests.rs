#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use tagtree::test_utils::*;

fn style_pairs(el: &Element) -> Vec<(&str, &str)> {
    el.styles()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[test]
fn style_block_parses_three_pairs() {
    let el = div().style_block("width:100px;height:100px;background:red");
    assert_eq!(
        style_pairs(&el),
        vec![("width", "100px"), ("height", "100px"), ("background", "red")]
    );
}

#[test]
fn style_block_trims_values() {
    let el = div().style_block(" width : 100px ; color:  red");
    assert_eq!(el.style_value("width"), Some("100px"));
    assert_eq!(el.style_value("color"), Some("red"));
}

#[test]
fn malformed_style_block_stores_nothing() {
    let el = div().style_block("bad;also:bad:worse;:missingkey;novalue:");
    assert!(el.styles().is_empty());

    let el = div()
        .style("color", "blue")
        .style_block("bad;also:bad:worse;:missingkey;novalue:");
    assert_eq!(style_pairs(&el), vec![("color", "blue")]);
}

#[test]
fn later_style_writes_overwrite() {
    let el = div()
        .style_block("color:red;margin:0")
        .style_block("color:blue")
        .style("margin", "4px");
    assert_eq!(style_pairs(&el), vec![("color", "blue"), ("margin", "4px")]);
}

#[test]
fn blank_style_pairs_are_dropped() {
    let el = div()
        .style("color", "")
        .style("", "red")
        .style("  ", "blue")
        .style("margin", "  ")
        .style("width", "1px");
    assert_eq!(style_pairs(&el), vec![("width", "1px")]);
    assert!(el.styles().values().all(|v| !v.trim().is_empty()));
    assert_eq!(el.render(), "<div style='width:1px;'>\n</div>");
}

#[test]
fn empty_attribute_values_are_kept_but_blank_names_are_not() {
    let el = input().attr("disabled", "").attr("", "x").attr(" ", "y");
    assert_eq!(el.attribute("disabled"), Some(""));
    assert_eq!(el.attributes().len(), 2);
    assert_eq!(el.render(), "<input type='text' disabled=''>\n</input>");
}

#[test]
fn class_tokens_split_on_spaces() {
    let el = div().class("  foo   bar ");
    assert_eq!(el.classes(), ["foo", "bar"]);
}

#[test]
fn class_calls_append_without_dedup() {
    let el = div().class("foo").class("bar foo").class("");
    assert_eq!(el.classes(), ["foo", "bar", "foo"]);
}

#[test]
fn attribute_overwrite_keeps_one_entry() {
    let el = input().attr("type", "text").attr("type", "number");
    assert_eq!(el.attributes().len(), 1);
    assert_eq!(el.attribute("type"), Some("number"));
}

#[test]
fn value_and_type_shorthands() {
    let el = Element::new("input").input_type("number").value("my value");
    assert_eq!(el.attribute("type"), Some("number"));
    assert_eq!(el.attribute("value"), Some("my value"));
}

#[test]
fn text_overwrites_previous_text() {
    let el = p().text("first").text_fmt(format_args!("{}-{}", "second", 2));
    assert_eq!(el.text_content(), "second-2");
}

#[test]
fn children_keep_argument_order() {
    let el = ul()
        .child(li().text("a"))
        .children([li().text("b"), li().text("c")]);
    let texts: Vec<&str> = el
        .child_nodes()
        .iter()
        .filter_map(Child::as_element)
        .map(Element::text_content)
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn in_place_mutators() {
    let mut list = ul();
    for i in 0..3 {
        list.push_child(li().text(i.to_string()));
    }
    list.set_attr("role", "list");
    list.add_class("menu");
    assert_eq!(list.child_nodes().len(), 3);
    assert_eq!(list.attribute("role"), Some("list"));
    assert_eq!(list.classes(), ["menu"]);
}

#[test]
fn try_new_rejects_empty_tag() {
    let err = Element::try_new("").unwrap_err();
    assert_eq!(err.kind(), &MarkupErrorKind::Build(BuildError::EmptyTag));
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn tag_shorthands_map_to_attributes() {
    let el = a().href("/home");
    assert_eq!(el.attribute("href"), Some("/home"));

    let el = script().src("/app.js").javascript();
    assert_eq!(el.attribute("src"), Some("/app.js"));
    assert_eq!(el.attribute("type"), Some("text/javascript"));

    let el = link().stylesheet().href("/site.css");
    assert_eq!(el.attribute("rel"), Some("stylesheet"));

    let el = textarea().rows(4).cols(40);
    assert_eq!(el.attribute("rows"), Some("4"));
    assert_eq!(el.attribute("cols"), Some("40"));

    let el = img().src("/logo.png");
    assert_eq!(el.tag(), "img");
    assert_eq!(el.attribute("src"), Some("/logo.png"));
}
