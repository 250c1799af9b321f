//! Tests for conflict-aware class merging.

use stylekit::parser::parse_class;
use stylekit::{ClassMerger, TailwindMerge, cn, cn_with};

#[test]
fn test_override_wins_over_base() {
    let base = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium";
    assert_eq!(
        cn([base, "rounded-full gap-4"]),
        "inline-flex items-center justify-center text-sm font-medium rounded-full gap-4"
    );
}

#[test]
fn test_variants_scope_conflicts() {
    assert_eq!(
        cn(["hover:bg-primary/90 bg-primary", "bg-secondary"]),
        "hover:bg-primary/90 bg-secondary"
    );
    assert_eq!(cn(["md:flex-row", "sm:flex-row", "flex-col"]), "md:flex-row sm:flex-row flex-col");
}

#[test]
fn test_arbitrary_variants_and_values() {
    assert_eq!(
        cn(["[&_svg]:size-4", "[&_svg]:size-6"]),
        "[&_svg]:size-6"
    );
    assert_eq!(
        cn(["focus-visible:ring-[3px]", "focus-visible:ring-2 focus-visible:ring-ring/50"]),
        "focus-visible:ring-2 focus-visible:ring-ring/50"
    );
}

#[test]
fn test_text_size_and_colour_do_not_conflict() {
    assert_eq!(
        cn(["text-sm text-primary-foreground", "text-white"]),
        "text-sm text-white"
    );
}

#[test]
fn test_border_width_and_colour() {
    assert_eq!(cn(["border-b border-border", "border-b-0"]), "border-border border-b-0");
    assert_eq!(cn(["border-x-2", "border-l-4"]), "border-x-2 border-l-4");
    assert_eq!(cn(["border-l-4", "border-x-2"]), "border-x-2");
}

#[test]
fn test_merger_trait_object() {
    let merger: &dyn ClassMerger = &TailwindMerge;
    assert_eq!(merger.merge(&["absolute top-4", "top-8"]), "absolute top-8");
}

#[test]
fn test_cn_with_optional_override() {
    let parts = vec!["flex".to_string(), "gap-2".to_string()];
    assert_eq!(cn_with(&parts, None), "flex gap-2");
    assert_eq!(cn_with(&parts, Some("grid")), "gap-2 grid");
}

#[test]
fn test_parse_error_reports_token() {
    let err = parse_class("w-[10px").unwrap_err();
    assert_eq!(err.to_string(), "invalid class token: w-[10px");
}
