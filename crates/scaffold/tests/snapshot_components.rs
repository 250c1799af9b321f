//! Snapshot tests for rendered component markup.

use scaffold::components::{Radius, avatar_variants};
use scaffold::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Avatar, AvatarFallback, AvatarImage, Button,
    ButtonVariant, Element, Render,
};

#[test]
fn accordion_tree() {
    let faq = Accordion::new().with_attr("type", "single").child(
        AccordionItem::new("shipping")
            .child(AccordionTrigger::new().child("Do you ship abroad?"))
            .child(AccordionContent::new().child("Yes, worldwide.")),
    );

    insta::assert_snapshot!(Element::from(faq).to_string(), @r#"<div data-primitive="accordion.root" data-slot="accordion" type="single"><div data-primitive="accordion.item" data-slot="accordion-item" class="border-b last:border-b-0" value="shipping"><h3 data-primitive="accordion.header" class="flex"><button data-primitive="accordion.trigger" data-slot="accordion-trigger" class="focus-visible:border-ring focus-visible:ring-ring/50 flex flex-1 items-start justify-between gap-4 rounded-md py-4 text-left text-sm font-medium transition-all outline-none hover:underline focus-visible:ring-[3px] disabled:pointer-events-none disabled:opacity-50 [&amp;[data-state=open]&gt;svg]:rotate-180">Do you ship abroad?<svg class="text-muted-foreground pointer-events-none size-4 shrink-0 translate-y-0.5 transition-transform duration-200" data-icon="chevron-down" aria-hidden="true"></svg></button></h3><div data-primitive="accordion.content" data-slot="accordion-content" class="data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down overflow-hidden text-sm"><div class="pt-0 pb-4">Yes, worldwide.</div></div></div></div>"#);
}

#[test]
fn avatar_with_fallback() {
    let avatar = Avatar::new()
        .radius(Radius::Full)
        .child(AvatarImage::new("/me.png").alt("Me"))
        .child(AvatarFallback::new().child("MK"));

    insta::assert_snapshot!(Element::from(avatar).to_string(), @r#"<span data-primitive="avatar.root" data-slot="avatar" class="inline-flex items-center justify-center align-middle gap-2 whitespace-nowrap text-sm font-normal transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 [&amp;_svg]:pointer-events-none [&amp;_svg]:size-4 [&amp;_svg]:shrink-0 h-9 px-4 py-2 rounded-full"><img data-primitive="avatar.image" data-slot="avatar-image" class="aspect-square size-full" src="/me.png" alt="Me"><span data-primitive="avatar.fallback" data-slot="avatar-fallback" class="bg-muted flex size-full items-center justify-center rounded-full">MK</span></span>"#);
}

#[test]
fn button_as_link() {
    let link = Element::new("a").with_attr("href", "/docs").with_child("Docs");
    let button = Button::new().variant(ButtonVariant::Linked).as_child(link);

    insta::assert_snapshot!(Element::from(button).to_string(), @r#"<a class="inline-flex items-center align-middle gap-2 whitespace-nowrap text-sm font-normal transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 [&amp;_svg]:pointer-events-none [&amp;_svg]:size-4 [&amp;_svg]:shrink-0 text-primary underline-offset-4 hover:underline h-9 px-4 py-2 rounded-md justify-center text-center" href="/docs">Docs</a>"#);
}

#[test]
fn adopted_child_keeps_its_own_attributes() {
    let child = Element::new("a").with_attr("href", "/new").with_attr("type", "link");
    let element = Render::AdoptChild(child).resolve(
        Element::new("button")
            .with_attr("type", "button")
            .with_attr("disabled", "true"),
    );

    insta::assert_snapshot!(element.to_string(), @r#"<a type="link" disabled="true" href="/new"></a>"#);
}

#[test]
fn text_children_are_escaped() {
    let button = Button::labeled("Save & <exit>").with_class("w-full");
    let html = Element::from(button).to_string();

    assert!(html.ends_with(">Save &amp; &lt;exit&gt;</button>"));
    assert!(html.contains(" w-full\""));
}

#[test]
fn variant_table_displays_default_classes() {
    let table = avatar_variants();
    assert_eq!(table.component(), "avatar");
    assert!(table.to_string().ends_with("h-9 px-4 py-2 rounded-md"));
}
