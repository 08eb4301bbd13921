//! Shared attribute parsing and field collection for the `Data` derive

use syn::{Attribute, Field, Fields, GenericParam, Generics, Ident, Index, Member, Type, parse_quote};

const DATA_ATTR: &str = "data";

/// Options from type-level `#[data(...)]` attributes
#[derive(Default)]
pub struct TypeOptions {
    /// `#[data(leaf)]` - never decompose this type
    pub leaf: bool,
}

/// A field the generated code hands to the visitor
pub struct VisitedField {
    pub member:  Member,
    pub name:    String,
    pub ty:      Type,
    pub binding: Ident,
}

/// Parse type-level `#[data(...)]` attributes
pub fn parse_type_options(attrs: &[Attribute]) -> syn::Result<TypeOptions> {
    let mut options = TypeOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(DATA_ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("leaf") {
                options.leaf = true;
                Ok(())
            } else {
                Err(meta.error("unsupported data attribute on a type, expected `leaf`"))
            }
        })?;
    }

    Ok(options)
}

/// Whether a field carries `#[data(skip)]`
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident(DATA_ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported data attribute on a field, expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}

/// Collect the visited fields in declaration order
pub fn visited_fields(fields: &Fields) -> syn::Result<Vec<VisitedField>> {
    let mut visited = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }

        let (member, name) = field.ident.as_ref().map_or_else(
            || (Member::Unnamed(Index::from(index)), index.to_string()),
            |ident| (Member::Named(ident.clone()), ident.to_string()),
        );

        visited.push(VisitedField {
            member,
            name,
            ty: field.ty.clone(),
            binding: quote::format_ident!("__field{}", index),
        });
    }

    Ok(visited)
}

/// Bound every type parameter for the generated impl
///
/// `Data` is `'static`, so borrowed types are rejected outright. Leaf types only need their
/// parameters to be `'static`; everything else needs them to be `Data` as well.
pub fn bound_generics(generics: &Generics, leaf: bool) -> syn::Result<Generics> {
    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Data cannot be derived for types with lifetime parameters",
        ));
    }

    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            if leaf {
                type_param.bounds.push(parse_quote!('static));
            } else {
                type_param.bounds.push(parse_quote!(::syb::Data));
            }
        }
    }

    Ok(generics)
}
