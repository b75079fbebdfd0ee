use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, Attribute, Data, DeriveInput, Field, Fields,
    Index, Member, Type,
};

/// A field that takes part in the comparison.
struct Key {
    member: Member,
    ty: Type,
}

struct ItemDerive {
    input: DeriveInput,
    /// Keys that decide only on a strict inequality, in declaration order.
    leading: Vec<Key>,
    /// Final key, whose comparison is the result when all leading keys tie.
    last: Key,
    reverse: bool,
}

impl ItemDerive {
    fn new(input: DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new(
                    input.span(),
                    "#[derive(Item)] is only supported on structs",
                ))
            }
        };
        let mut leading = keys(fields)?;
        let Some(last) = leading.pop() else {
            return Err(syn::Error::new(
                fields.span(),
                "mark at least one field with #[item(key)]",
            ));
        };
        let reverse = parse_flag(&input.attrs, "reverse")?;
        Ok(Self {
            input,
            leading,
            last,
            reverse,
        })
    }

    fn generate(&self) -> TokenStream {
        let name = &self.input.ident;

        let mut generics = self.input.generics.clone();
        let where_clause = generics.make_where_clause();
        for Key { ty, .. } in self.leading.iter().chain([&self.last]) {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::insertion_queue::Item));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let (lhs, rhs) = if self.reverse {
            (quote!(other), quote!(self))
        } else {
            (quote!(self), quote!(other))
        };

        let leading = self.leading.iter().map(|Key { member, .. }| {
            quote! {
                if ::insertion_queue::Item::less(&#lhs.#member, &#rhs.#member) {
                    return true;
                }
                if ::insertion_queue::Item::less(&#rhs.#member, &#lhs.#member) {
                    return false;
                }
            }
        });
        let last = &self.last.member;

        quote! {
            impl #impl_generics ::insertion_queue::Item for #name #ty_generics #where_clause {
                fn less(&self, other: &Self) -> bool {
                    #( #leading )*
                    ::insertion_queue::Item::less(&#lhs.#last, &#rhs.#last)
                }
            }
        }
    }
}

/// Derive `insertion_queue::Item` for a struct.
///
/// Example:
///
/// ```ignore
/// #[derive(Item)]
/// #[item(reverse)]
/// struct Task {
///     #[item(key)]
///     deadline: u64,
///     #[item(key)]
///     id: u32,
///     payload: Vec<u8>,
/// }
/// ```
///
#[proc_macro_derive(Item, attributes(item))]
pub fn derive_item(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ItemDerive::new(input)
        .map(|derive| derive.generate())
        .unwrap_or_else(|e| e.into_compile_error())
        .into()
}

/// Collect the fields marked `#[item(key)]`, falling back to the only field of the struct.
fn keys(fields: &Fields) -> syn::Result<Vec<Key>> {
    let mut keys = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if parse_flag(&field.attrs, "key")? {
            keys.push(key(i, field));
        }
    }

    if keys.is_empty() && fields.len() == 1 {
        keys.extend(fields.iter().map(|field| key(0, field)));
    }

    Ok(keys)
}

fn key(i: usize, field: &Field) -> Key {
    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(i)),
    };
    Key {
        member,
        ty: field.ty.clone(),
    }
}

/// Whether `#[item(<flag>)]` appears among `attrs`; any other `item` argument is an error.
fn parse_flag(attrs: &[Attribute], flag: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("item")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
                Ok(())
            } else {
                Err(meta.error(format!("unsupported item attribute, expected `{flag}`")))
            }
        })?;
    }
    Ok(found)
}
