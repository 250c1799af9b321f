//! Snapshot tests for layout and semantic container markup.

use scaffold::layout::{Direction, Display, GridAlign, Justify, LayoutTag, Position};
use scaffold::stylekit::{Constraint, responsive};
use scaffold::{BoxLayout, ConstraintLayout, Container, Element, FlexLayout, GridLayout, Main, Step};

#[test]
fn flex_responsive_direction() {
    let flex = FlexLayout::new()
        .direction(responsive([("initial", Direction::Col), ("medium", Direction::Row)]))
        .justify(Justify::Between)
        .gap(responsive([("initial", 2), ("large", 6)]))
        .padding(4)
        .child("one")
        .child("two");

    insta::assert_snapshot!(Element::from(flex).to_string(), @r#"<div class="flex flex-col md:flex-row justify-between p-4 gap-2 lg:gap-6">onetwo</div>"#);
}

#[test]
fn flex_hidden_until_medium() {
    let flex = FlexLayout::new()
        .with_tag(LayoutTag::Span)
        .display(responsive([("initial", Display::Hidden), ("medium", Display::InlineFlex)]))
        .position(Position::Sticky)
        .top(0)
        .z_index(10);

    insta::assert_snapshot!(Element::from(flex).to_string(), @r#"<span class="hidden md:inline-flex sticky z-10 top-0"></span>"#);
}

#[test]
fn grid_with_placed_child() {
    let grid = GridLayout::new()
        .columns(responsive([("initial", 1), ("medium", 2), ("xl", 4)]))
        .place_items(GridAlign::Center)
        .gap(4)
        .child(Element::new("div").with_class("col-span-2").with_child("A"));

    insta::assert_snapshot!(Element::from(grid).to_string(), @r#"<div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 place-items-center gap-4"><div class="col-span-2">A</div></div>"#);
}

#[test]
fn grid_custom_breakpoint_passes_through() {
    let grid = GridLayout::new().rows(responsive([("initial", "none"), ("print", "2")]));

    insta::assert_snapshot!(grid.class_name(), @"grid grid-rows-none print:grid-rows-2");
}

#[test]
fn box_defaults() {
    insta::assert_snapshot!(Element::from(BoxLayout::new()).to_string(), @r#"<div class="overflow-hidden block w-auto h-auto justify-center items-center text-left p-0 px-0 py-0 m-0 mx-0 my-0 gap-0 gap-x-0 gap-y-0 space-x-none space-y-none"></div>"#);
}

#[test]
fn constraint_layout_positions_children() {
    let layout = ConstraintLayout::new()
        .with_class("h-64")
        .child(Element::new("img").with_attr("src", "/cover.png").with_attr("alt", "Cover"))
        .constrained(
            Constraint::new().bottom(2).right(2).z_index(10),
            Element::new("span").with_class("rounded-full").with_child("3"),
        )
        .constrained(
            Constraint::new().top(12.5).left("50%").width(200),
            Element::new("p").with_child("Caption"),
        );

    insta::assert_snapshot!(Element::from(layout).to_string(), @r#"<div class="relative h-64"><img src="/cover.png" alt="Cover"><span class="absolute right-2 bottom-2 z-10 rounded-full">3</span><p class="absolute" style="top: 12.5px; left: 50%; width: 200px">Caption</p></div>"#);
}

#[test]
fn main_wraps_container() {
    let page = Main::new().child(Container::new().distance(Step::Six).child("Hello"));

    insta::assert_snapshot!(Element::from(page).to_string(), @r#"<main class="py-4 gap-0 gap-x-0 gap-y-0 space-x-none space-y-none"><div class="container px-6 gap-0 gap-x-0 gap-y-0 space-x-none space-y-none">Hello</div></main>"#);
}
