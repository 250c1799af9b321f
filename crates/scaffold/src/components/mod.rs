//! Interactive and display components.
//!
//! - [`accordion`]: accordion parts over the accordion primitive
//! - [`avatar`]: avatar parts over the avatar primitive
//! - [`button`]: the button, with its variant table

pub mod accordion;
pub mod avatar;
pub mod button;

pub use accordion::{Accordion, AccordionContent, AccordionItem, AccordionTrigger};
pub use avatar::{Avatar, AvatarFallback, AvatarImage, Radius, avatar_variants};
pub use button::{Alignment, Button, ButtonRadius, ButtonVariant, button_variants};

use crate::keyed_enum;

/// Base classes shared by buttons and avatars.
pub(crate) const CONTROL_BASE: &str = "inline-flex items-center justify-center align-middle gap-2 whitespace-nowrap rounded-md text-sm font-normal transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:size-4 [&_svg]:shrink-0";

keyed_enum! {
    /// Control size, shared by buttons and avatars.
    pub enum Size {
        Badge => "badge",
        /// Compact on small screens, natural from `md` up.
        Default => "default",
        Natural => "natural",
        Small => "small",
        Large => "large",
        Action => "action",
        Icon => "icon",
        Social => "social",
        Wide => "wide",
    }
}

pub(crate) const SIZE_CLASSES: [(&str, &str); 9] = [
    ("badge", "h-7 gap-1.5 p-1 text-sm normal font-medium text-muted-foreground"),
    ("default", "h-8 md:h-9 text-xs md:text-sm px-3 md:px-4 py-2"),
    ("natural", "h-9 px-4 py-2"),
    ("small", "h-8 px-3 text-xs"),
    ("large", "h-10 px-8"),
    ("action", "h-8 px-2 py-2 text-xs shadow-none"),
    ("icon", "h-8 w-8 px-2 py-2 shadow-none"),
    ("social", "h-8 w-8 px-2 py-2"),
    ("wide", "h-9 w-full px-4 py-2"),
];
