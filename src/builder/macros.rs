//! Macros for declaring state and event token enums.

/// Generate a `State` implementation for a fieldless enum.
///
/// The enum gets the derives the engine needs (`Clone`, `Copy`, `Eq`,
/// `Hash`, `Debug`) plus serde, and each variant is named after itself.
///
/// # Example
///
/// ```
/// use tabled_fsm::state_enum;
/// use tabled_fsm::core::State;
///
/// state_enum! {
///     pub enum SessionState {
///         Deregistered,
///         Authenticating,
///         Registered,
///     }
/// }
///
/// assert_eq!(SessionState::Registered.name(), "Registered");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use tabled_fsm::event_enum;
/// use tabled_fsm::core::Event;
///
/// event_enum! {
///     pub enum SessionEvent {
///         RegistrationRequest,
///         AuthSuccess,
///     }
/// }
///
/// assert_eq!(SessionEvent::AuthSuccess.name(), "AuthSuccess");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
