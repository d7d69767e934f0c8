//! Macros for declaring states with minimal boilerplate.

/// Generate a `FiniteState` implementation for a fieldless enum whose
/// variants all share one category.
///
/// The enum also gets `Display` (the variant name) and the usual value
/// derives, including serde.
///
/// # Example
///
/// ```
/// use statebus::core::FiniteState;
/// use statebus::finite_state;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// pub enum Category {
///     Movement,
///     Combat,
/// }
///
/// finite_state! {
///     pub enum Locomotion {
///         Idle,
///         Walking,
///         Running,
///     }
///     category: Category = Category::Movement
/// }
///
/// assert_eq!(Locomotion::Running.name(), "Running");
/// assert_eq!(Locomotion::Idle.category(), Category::Movement);
/// assert_eq!(Locomotion::Walking.to_string(), "Walking");
/// ```
#[macro_export]
macro_rules! finite_state {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        category: $category_ty:ty = $category:expr $(;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::FiniteState for $name {
            type Category = $category_ty;

            fn category(&self) -> $category_ty {
                $category
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::FiniteState::name(self))
            }
        }
    };
}
