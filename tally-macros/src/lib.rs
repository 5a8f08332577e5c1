//! Procedural macros for tally

use darling::{FromDeriveInput, FromMeta, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Case convention applied to every variant name
    #[darling(default)]
    rename_all: Option<RenameRule>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit name override
    #[darling(default)]
    rename: Option<String>,
}

/// Supported `rename_all` conventions
#[derive(Debug, Clone, Copy)]
enum RenameRule {
    SnakeCase,
    KebabCase,
    Lowercase,
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "snake_case" => Ok(RenameRule::SnakeCase),
            "kebab-case" => Ok(RenameRule::KebabCase),
            "lowercase" => Ok(RenameRule::Lowercase),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

impl RenameRule {
    fn apply(self, name: &str) -> String {
        match self {
            RenameRule::SnakeCase => to_snake_case(name),
            RenameRule::KebabCase => to_snake_case(name).replace('_', "-"),
            RenameRule::Lowercase => name.to_lowercase(),
        }
    }
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method returning a static string per variant. By
/// default the name is the variant identifier.
///
/// - `#[action(rename_all = "snake_case")]` on the enum converts every
///   variant name (`"snake_case"`, `"kebab-case"` and `"lowercase"` are
///   supported)
/// - `#[action(rename = "...")]` on a variant overrides its name
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(rename_all = "snake_case")]
/// enum MyAction {
///     Increment,
///     Increase(i64),
///     #[action(rename = "toggle_counter")]
///     ToggleVisibility,
/// }
///
/// assert_eq!(MyAction::Increase(5).name(), "increase");
/// assert_eq!(MyAction::ToggleVisibility.name(), "toggle_counter");
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms: Vec<TokenStream2> = variants
        .iter()
        .map(|v| {
            let variant_name = &v.ident;
            let ident_str = variant_name.to_string();
            let variant_str = match (&v.rename, opts.rename_all) {
                (Some(explicit), _) => explicit.clone(),
                (None, Some(rule)) => rule.apply(&ident_str),
                (None, None) => ident_str,
            };

            match &v.fields.style {
                darling::ast::Style::Unit => quote! {
                    #name::#variant_name => #variant_str
                },
                darling::ast::Style::Tuple => quote! {
                    #name::#variant_name(..) => #variant_str
                },
                darling::ast::Style::Struct => quote! {
                    #name::#variant_name { .. } => #variant_str
                },
            }
        })
        .collect();

    let expanded = quote! {
        impl tally::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
