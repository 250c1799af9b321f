//! Macros for component implementation.
//!
//! This module provides macros to reduce boilerplate when declaring variant
//! axes and the shared builder surface of components.

/// Declares a closed set of axis values, each tied to its class-table key.
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and
/// `Hash`, implements [`VariantKey`](stylekit::VariantKey) for variant tables
/// and `Display` (the key) for the responsive resolvers.
///
/// # Example
///
/// ```rust
/// use scaffold::keyed_enum;
///
/// keyed_enum! {
///     /// Card elevation.
///     #[derive(Default)]
///     pub enum Elevation {
///         #[default]
///         Flat => "flat",
///         Raised => "raised",
///     }
/// }
///
/// assert_eq!(Elevation::Raised.key(), "raised");
/// assert_eq!(Elevation::default().to_string(), "flat");
/// assert_eq!(Elevation::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The class-table key of this value.
            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl $crate::stylekit::VariantKey for $name {
            fn key(self) -> &'static str {
                $name::key(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

/// Generates the shared builder methods and conversions for a component
/// that stores its pass-through props in a `props: ElementProps` field.
///
/// ```ignore
/// impl_element_props!(Button);
/// ```
macro_rules! impl_element_props {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $ty {
                /// Caller classes, merged last so they win conflicts.
                pub fn with_class(mut self, class: impl Into<String>) -> Self {
                    self.props.class = Some(class.into());
                    self
                }

                /// Set a pass-through attribute.
                pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    self.props.set_attr(name.into(), value.into());
                    self
                }

                /// Append a child node.
                pub fn child(mut self, child: impl Into<$crate::Node>) -> Self {
                    self.props.children.push(child.into());
                    self
                }

                /// Append several child nodes.
                pub fn children<I, N>(mut self, children: I) -> Self
                where
                    I: IntoIterator<Item = N>,
                    N: Into<$crate::Node>,
                {
                    self.props.children.extend(children.into_iter().map(Into::into));
                    self
                }

                /// Apply this component's classes, styles and attributes to
                /// `element` instead of rendering its own element.
                pub fn as_child(mut self, element: $crate::Element) -> Self {
                    self.props.render = $crate::Render::AdoptChild(element);
                    self
                }

                pub fn with_render(mut self, render: $crate::Render) -> Self {
                    self.props.render = render;
                    self
                }
            }

            impl From<$ty> for $crate::Element {
                fn from(component: $ty) -> Self {
                    $crate::Component::into_element(component)
                }
            }

            impl From<$ty> for $crate::Node {
                fn from(component: $ty) -> Self {
                    $crate::Node::Element($crate::Component::into_element(component))
                }
            }
        )+
    };
}

pub(crate) use impl_element_props;
