//! Breakpoint aliases.
//!
//! Responsive values are keyed by logical breakpoint names (`"medium"`), while
//! the utility vocabulary expects short variant tokens (`md:`). The alias table
//! below is fixed for the lifetime of the process:
//!
//! ```text
//! initial -> ""     (base breakpoint, no variant prefix)
//! small   -> sm
//! medium  -> md
//! large   -> lg
//! xl      -> xl
//! 2xl     -> 2xl
//! ```
//!
//! Keys that are not in the table pass through verbatim, so custom
//! breakpoints configured in the utility system (`"tablet"`, `"3xl"`) keep
//! working without changes here.

use phf::phf_map;

/// Reserved key for the base breakpoint.
pub const INITIAL: &str = "initial";

/// Map of logical breakpoint names to utility variant tokens.
pub static BREAKPOINT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "initial" => "",
    "small" => "sm",
    "medium" => "md",
    "large" => "lg",
    "xl" => "xl",
    "2xl" => "2xl",
};

/// Resolve a breakpoint key through the fixed alias table.
///
/// Unknown keys are returned unchanged.
pub fn breakpoint_token(key: &str) -> &str {
    BREAKPOINT_ALIASES.get(key).copied().unwrap_or(key)
}

/// Breakpoint configuration: the fixed alias table plus caller-supplied
/// aliases.
///
/// Extra aliases take precedence over the fixed table, which lets an app map
/// its own vocabulary (`"tablet"`) onto the utility system's tokens.
///
/// ```rust
/// use stylekit::Breakpoints;
///
/// let breakpoints = Breakpoints::default().with_alias("tablet", "md");
/// assert_eq!(breakpoints.token("tablet"), "md");
/// assert_eq!(breakpoints.token("large"), "lg");
/// assert_eq!(breakpoints.token("print"), "print");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints {
    extra: Vec<(String, String)>,
}

impl Breakpoints {
    /// Breakpoints using only the fixed alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an alias.
    pub fn with_alias(mut self, name: impl Into<String>, token: impl Into<String>) -> Self {
        let name = name.into();
        let token = token.into();
        match self.extra.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = token,
            None => self.extra.push((name, token)),
        }
        self
    }

    /// Resolve a breakpoint key to its variant token.
    pub fn token<'a>(&'a self, key: &'a str) -> &'a str {
        self.extra
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, token)| token.as_str())
            .unwrap_or_else(|| breakpoint_token(key))
    }
}
