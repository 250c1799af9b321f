//! Utility groups used for conflict detection.
//!
//! Two utilities conflict when they set the same CSS property. Each utility is
//! mapped to a group name; tokens with the same variants and group conflict,
//! and the later one wins. Utilities that are not recognised form a group of
//! their own, so they only conflict with exact duplicates.

use phf::{phf_map, phf_set};

/// Utilities that are a whole class name with no value part.
static EXACT_GROUPS: phf::Map<&'static str, &'static str> = phf_map! {
    // display
    "block" => "display",
    "inline-block" => "display",
    "inline" => "display",
    "flex" => "display",
    "inline-flex" => "display",
    "grid" => "display",
    "inline-grid" => "display",
    "table" => "display",
    "contents" => "display",
    "flow-root" => "display",
    "list-item" => "display",
    "hidden" => "display",
    // position
    "static" => "position",
    "fixed" => "position",
    "absolute" => "position",
    "relative" => "position",
    "sticky" => "position",
    // visibility
    "visible" => "visibility",
    "invisible" => "visibility",
    "collapse" => "visibility",
    // flexbox
    "flex-row" => "flex-direction",
    "flex-row-reverse" => "flex-direction",
    "flex-col" => "flex-direction",
    "flex-col-reverse" => "flex-direction",
    "flex-wrap" => "flex-wrap",
    "flex-wrap-reverse" => "flex-wrap",
    "flex-nowrap" => "flex-wrap",
    "flex-1" => "flex",
    "flex-auto" => "flex",
    "flex-initial" => "flex",
    "flex-none" => "flex",
    "grow" => "grow",
    "shrink" => "shrink",
    // typography
    "underline" => "text-decoration",
    "overline" => "text-decoration",
    "line-through" => "text-decoration",
    "no-underline" => "text-decoration",
    "uppercase" => "text-transform",
    "lowercase" => "text-transform",
    "capitalize" => "text-transform",
    "normal-case" => "text-transform",
    "italic" => "font-style",
    "not-italic" => "font-style",
    "truncate" => "text-overflow",
    "text-ellipsis" => "text-overflow",
    "text-clip" => "text-overflow",
    // borders and effects
    "border" => "border-width",
    "rounded" => "rounded",
    "shadow" => "shadow",
    "ring" => "ring-width",
    "ring-inset" => "ring-inset",
    "transition" => "transition",
};

/// Utilities of the form `{prefix}-{value}`, matched on the longest prefix.
static PREFIX_GROUPS: phf::Map<&'static str, &'static str> = phf_map! {
    // spacing
    "p" => "p", "px" => "px", "py" => "py",
    "pt" => "pt", "pr" => "pr", "pb" => "pb", "pl" => "pl", "ps" => "ps", "pe" => "pe",
    "m" => "m", "mx" => "mx", "my" => "my",
    "mt" => "mt", "mr" => "mr", "mb" => "mb", "ml" => "ml", "ms" => "ms", "me" => "me",
    "gap" => "gap", "gap-x" => "gap-x", "gap-y" => "gap-y",
    "space-x" => "space-x", "space-y" => "space-y",
    // sizing
    "w" => "w", "h" => "h", "size" => "size",
    "min-w" => "min-w", "min-h" => "min-h", "max-w" => "max-w", "max-h" => "max-h",
    // positioning
    "inset" => "inset", "inset-x" => "inset-x", "inset-y" => "inset-y",
    "top" => "top", "right" => "right", "bottom" => "bottom", "left" => "left",
    "z" => "z",
    // layout
    "overflow" => "overflow", "overflow-x" => "overflow-x", "overflow-y" => "overflow-y",
    "aspect" => "aspect",
    "opacity" => "opacity",
    "pointer-events" => "pointer-events",
    "basis" => "basis", "grow" => "grow", "shrink" => "shrink", "order" => "order",
    // alignment
    "justify" => "justify-content",
    "justify-items" => "justify-items",
    "justify-self" => "justify-self",
    "items" => "align-items",
    "content" => "align-content",
    "self" => "align-self",
    "place-content" => "place-content",
    "place-items" => "place-items",
    "place-self" => "place-self",
    "align" => "vertical-align",
    // grid
    "grid-cols" => "grid-cols", "grid-rows" => "grid-rows", "grid-flow" => "grid-flow",
    "col" => "col", "col-span" => "col", "col-start" => "col-start", "col-end" => "col-end",
    "row" => "row", "row-span" => "row", "row-start" => "row-start", "row-end" => "row-end",
    // typography
    "leading" => "leading",
    "tracking" => "tracking",
    "whitespace" => "whitespace",
    "underline-offset" => "underline-offset",
    // borders
    "rounded" => "rounded",
    "rounded-t" => "rounded-t", "rounded-r" => "rounded-r",
    "rounded-b" => "rounded-b", "rounded-l" => "rounded-l",
    "rounded-tl" => "rounded-tl", "rounded-tr" => "rounded-tr",
    "rounded-br" => "rounded-br", "rounded-bl" => "rounded-bl",
    "ring-offset" => "ring-offset",
    "outline" => "outline",
    // transforms and motion
    "translate-x" => "translate-x", "translate-y" => "translate-y",
    "rotate" => "rotate", "scale" => "scale",
    "transition" => "transition",
    "duration" => "duration",
    "ease" => "ease",
    "animate" => "animate",
    "cursor" => "cursor",
    "select" => "select",
};

static FONT_SIZES: phf::Set<&'static str> = phf_set! {
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
};

static TEXT_ALIGNS: phf::Set<&'static str> = phf_set! {
    "left", "center", "right", "justify", "start", "end",
};

static FONT_WEIGHTS: phf::Set<&'static str> = phf_set! {
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
};

static SHADOW_SIZES: phf::Set<&'static str> = phf_set! {
    "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "none", "inner",
};

static BORDER_STYLES: phf::Set<&'static str> = phf_set! {
    "solid", "dashed", "dotted", "double", "hidden", "none",
};

/// Narrower groups that a later token in `group` overrides.
pub fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-width" => &[
            "border-width-x",
            "border-width-y",
            "border-width-t",
            "border-width-r",
            "border-width-b",
            "border-width-l",
        ],
        "border-width-x" => &["border-width-r", "border-width-l"],
        "border-width-y" => &["border-width-t", "border-width-b"],
        _ => &[],
    }
}

/// The conflict group of a utility (without variants or markers).
pub fn utility_group(utility: &str) -> &str {
    if let Some(group) = EXACT_GROUPS.get(utility) {
        return group;
    }
    if let Some(group) = family_group(utility) {
        return group;
    }

    let mut candidate = utility;
    while let Some((head, _)) = candidate.rsplit_once('-') {
        if let Some(group) = PREFIX_GROUPS.get(head) {
            return group;
        }
        candidate = head;
    }

    utility
}

/// Families whose group depends on the value, not just the prefix.
fn family_group(utility: &str) -> Option<&'static str> {
    let (family, value) = utility.split_once('-')?;
    let arbitrary = value.starts_with('[');
    let numeric = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());

    let group = match family {
        "text" if FONT_SIZES.contains(value) => "font-size",
        "text" if TEXT_ALIGNS.contains(value) => "text-align",
        "text" if arbitrary && value.contains(|c: char| c.is_ascii_digit()) => "font-size",
        "text" => "text-color",
        "font" if FONT_WEIGHTS.contains(value) => "font-weight",
        "font" => "font-family",
        "shadow" if SHADOW_SIZES.contains(value) => "shadow",
        "shadow" => "shadow-color",
        "ring" if value.starts_with("offset") => return None,
        "ring" if numeric || arbitrary => "ring-width",
        "ring" => "ring-color",
        "bg" if value == "none" || value.starts_with("gradient") => "bg-image",
        "bg" => "bg-color",
        "border" => border_group(value),
        _ => return None,
    };
    Some(group)
}

fn border_group(value: &str) -> &'static str {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return "border-width";
    }
    if BORDER_STYLES.contains(value) {
        return "border-style";
    }
    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    let side_group = match side {
        "x" => "border-width-x",
        "y" => "border-width-y",
        "t" => "border-width-t",
        "r" => "border-width-r",
        "b" => "border-width-b",
        "l" => "border-width-l",
        _ => return "border-color",
    };
    if rest.bytes().all(|b| b.is_ascii_digit()) {
        side_group
    } else {
        "border-color"
    }
}
