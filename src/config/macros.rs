/// Configuration macros for config definitions with embedded defaults
///
/// `config_struct!` takes field name, type, and default value in a single
/// declaration and generates:
/// - The struct with public fields
/// - The Default implementation
/// - Serde support with `#[serde(default)]`, so partial TOML files load
///
/// # Example
/// ```
/// gasstation::config_struct! {
///     pub struct RetryConfig {
///         attempts: u32 = 3,
///         enabled: bool = true,
///     }
/// }
///
/// assert_eq!(RetryConfig::default().attempts, 3);
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
