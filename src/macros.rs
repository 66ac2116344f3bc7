/// Declares a token group together with its partial-override counterpart.
///
/// The override struct mirrors the group's keys one-to-one, so a theme can
/// substitute values but never add or drop a key.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $overrides:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial override of [`", stringify!($name), "`]; `None` keeps the parent value.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $overrides {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Rebuilds the group, taking each key from `overrides` when present.
            pub fn merged_with(&self, overrides: &$overrides) -> Self {
                Self {
                    $(
                        $field: overrides
                            .$field
                            .clone()
                            .unwrap_or_else(|| self.$field.clone()),
                    )*
                }
            }
        }

        impl $overrides {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

/// Adds closure-style builders for override structs that nest other overrides.
macro_rules! impl_nested_overrides_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, configure: impl FnOnce($value) -> $value) -> Self {
                    self.$field = configure(self.$field);
                    self
                }
            )*
        }
    };
}
