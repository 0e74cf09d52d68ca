use proc_macro2::Span;

/// Strict and reserved keywords that cannot be written as raw identifiers.
const NOT_RAW: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Creates an identifier from a derived name.
///
/// Keywords become raw identifiers (`type` -> `r#type`); names that cannot be
/// identifiers at all are adjusted (`2fa` -> `_2fa`, `self` -> `self_`).
pub(crate) fn ident(name: &str) -> syn::Ident {
    let mut name: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if name.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    if syn::parse_str::<syn::Ident>(&name).is_ok() {
        syn::Ident::new(&name, Span::call_site())
    } else if NOT_RAW.contains(&&name[..]) {
        syn::Ident::new(&format!("{name}_"), Span::call_site())
    } else {
        syn::Ident::new_raw(&name, Span::call_site())
    }
}

macro_rules! ident {
    ( $($t:tt)* ) => {
        $crate::util::ident(&format!( $($t)* ))
    }
}
