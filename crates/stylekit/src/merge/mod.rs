//! Class merging.
//!
//! Components build their class list from base classes, variant fragments and
//! the caller's override. Merging joins those parts and drops every token
//! that a later token overrides:
//!
//! ```rust
//! use stylekit::cn;
//!
//! assert_eq!(cn(["px-4 py-2", "px-8"]), "py-2 px-8");
//! assert_eq!(cn(["p-2 md:p-4", "p-1"]), "md:p-4 p-1");
//! assert_eq!(cn(["px-2", "p-4"]), "p-4");
//! assert_eq!(cn(["p-4", "px-2"]), "p-4 px-2");
//! ```
//!
//! Tokens conflict when they share variants, importance and utility group (see
//! [`groups`]). A broad group such as `p` also overrides earlier narrower ones
//! (`px`, `pt`, ...). Tokens that fail to parse are kept as they are.

pub mod groups;

use std::collections::HashSet;

use crate::parser::{ClassToken, parse_class, split_classes};

/// Joins class fragments into a single class string.
pub trait ClassMerger {
    /// Merge `parts`, each a whitespace-separated class string, in order.
    fn merge(&self, parts: &[&str]) -> String;
}

/// Conflict-resolving merger following the utility vocabulary's precedence:
/// the last token for a property wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindMerge;

/// Plain concatenation without conflict resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinClasses;

impl ClassMerger for TailwindMerge {
    fn merge(&self, parts: &[&str]) -> String {
        let tokens: Vec<&str> = parts.iter().copied().flat_map(split_classes).collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for &raw in tokens.iter().rev() {
            let Ok(token) = parse_class(raw) else {
                if seen.insert(format!("raw:{raw}")) {
                    kept.push(raw);
                }
                continue;
            };

            let scope = scope_key(&token);
            let group = groups::utility_group(token.utility);
            if !seen.insert(format!("{scope}{group}")) {
                log::trace!("merge: `{}` overridden", raw);
                continue;
            }
            for narrower in groups::conflicting_groups(group) {
                seen.insert(format!("{scope}{narrower}"));
            }
            kept.push(raw);
        }

        kept.reverse();
        kept.join(" ")
    }
}

impl ClassMerger for JoinClasses {
    fn merge(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .copied()
            .flat_map(split_classes)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Variants and importance, normalised so modifier order does not matter
/// between arbitrary variants.
fn scope_key(token: &ClassToken<'_>) -> String {
    let mut variants: Vec<&str> = Vec::with_capacity(token.variants.len());
    let mut run_start = 0;
    for variant in &token.variants {
        if variant.starts_with('[') {
            variants[run_start..].sort_unstable();
            variants.push(variant);
            run_start = variants.len();
        } else {
            variants.push(variant);
        }
    }
    variants[run_start..].sort_unstable();

    let mut key = variants.join(":");
    key.push('|');
    if token.important {
        key.push('!');
    }
    key.push('|');
    key
}

/// Merge class fragments with [`TailwindMerge`], skipping empty parts.
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = parts.into_iter().collect();
    let parts: Vec<&str> = owned.iter().map(|part| part.as_ref()).collect();
    TailwindMerge.merge(&parts)
}

/// Merge with an optional override appended last.
pub fn cn_with<S: AsRef<str>>(classes: &[S], class_override: Option<&str>) -> String {
    let mut parts: Vec<&str> = classes.iter().map(|class| class.as_ref()).collect();
    parts.extend(class_override);
    TailwindMerge.merge(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_wins_same_group() {
        assert_eq!(cn(["h-8 md:h-9", "h-10"]), "md:h-9 h-10");
        assert_eq!(cn(["rounded-md", "rounded-full"]), "rounded-full");
        assert_eq!(cn(["text-sm text-left", "text-xs"]), "text-left text-xs");
    }

    #[test]
    fn variant_order_is_normalised() {
        assert_eq!(cn(["hover:md:p-2", "md:hover:p-4"]), "md:hover:p-4");
    }

    #[test]
    fn important_is_separate() {
        assert_eq!(cn(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn negative_values_share_group() {
        assert_eq!(cn(["mt-2", "-mt-4"]), "-mt-4");
    }

    #[test]
    fn size_overrides_width_and_height() {
        assert_eq!(cn(["w-8 h-8", "size-full"]), "size-full");
        assert_eq!(cn(["size-full", "w-8"]), "size-full w-8");
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(cn(["container", "container"]), "container");
        assert_eq!(cn(["w-[10px", "w-[10px"]), "w-[10px");
    }

    #[test]
    fn empty_parts_are_ignored() {
        assert_eq!(cn(["", "  flex  ", ""]), "flex");
        assert_eq!(cn(Vec::<String>::new()), "");
    }

    #[test]
    fn join_keeps_everything() {
        assert_eq!(JoinClasses.merge(&["px-4", "px-8 px-8"]), "px-4 px-8 px-8");
    }

    #[test]
    fn cn_with_override() {
        assert_eq!(cn_with(&["relative", "p-2"], Some("p-6")), "relative p-6");
        assert_eq!(cn_with::<&str>(&[], None), "");
    }
}
