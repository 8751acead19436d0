use crate::{element::Element, tags::*};

/// A small document exercising text, classes, styles and nesting.
pub fn sample_page() -> Element {
    html().child(head().child(title_link())).child(
        body().child(
            div()
                .id("main")
                .class("container wide")
                .style_block("width:100px;height:100px;background:red")
                .text("My Html builder")
                .child(p().text("first paragraph"))
                .child(ul().children([li().text("one"), li().text("two")])),
        ),
    )
}

fn title_link() -> Element {
    link().stylesheet().href("/site.css")
}

/// A form with a select and a numeric input.
pub fn sample_form() -> Element {
    div()
        .child(
            select()
                .name("choice")
                .options([option("1", "teste 1"), option("2", "teste 2")]),
        )
        .child(input().input_type("number").value("42"))
}

/// A table with `rows` rows of `cols` cells, used for larger outputs.
pub fn wide_tree(rows: usize, cols: usize) -> Element {
    table().child(tbody().children((0..rows).map(|r| {
        tr().children((0..cols).map(move |c| td().class("cell").text(format!("{}x{}", r, c))))
    })))
}
