//! Data derive macro implementation

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

use crate::shared::{VisitedField, bound_generics, parse_type_options, visited_fields};

/// Implementation of the Data derive macro
pub fn derive_data_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let options = parse_type_options(&input.attrs)?;
    let generics = bound_generics(&input.generics, options.leaf)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let type_name = &input.ident;

    let body = if options.leaf {
        leaf_body()
    } else {
        match &input.data {
            Data::Struct(data_struct) => record_body(&data_struct.fields)?,
            Data::Enum(data_enum) => sum_body(data_enum)?,
            Data::Union(data_union) => {
                return Err(syn::Error::new_spanned(
                    data_union.union_token,
                    "Data cannot be derived for unions; mark the type #[data(leaf)] instead",
                ));
            },
        }
    };

    Ok(quote! {
        impl #impl_generics ::syb::Data for #type_name #ty_generics #where_clause {
            #body
        }
    })
}

fn leaf_body() -> TokenStream2 {
    quote! {
        const SHAPE: ::syb::Shape = ::syb::Shape::Scalar;
    }
}

fn record_body(fields: &Fields) -> syn::Result<TokenStream2> {
    let fields = visited_fields(fields)?;
    let members = fields.iter().map(|field| &field.member);
    let names = fields.iter().map(|field| &field.name);

    Ok(quote! {
        const SHAPE: ::syb::Shape = ::syb::Shape::Record;

        fn gmap_mut<__V: ::syb::Visitor>(&mut self, __visitor: &mut __V) -> ::syb::Result<()> {
            #( __visitor.visit(&mut self.#members)?; )*
            ::core::result::Result::Ok(())
        }

        fn fields() -> &'static [&'static str] {
            &[#(#names),*]
        }
    })
}

/// One enum variant with the fields the visitor sees
struct Alternative<'a> {
    variant: &'a syn::Ident,
    fields:  Vec<VisitedField>,
}

impl Alternative<'_> {
    /// Braced pattern binding every visited field, valid for unit, tuple and struct variants
    fn pattern(&self) -> TokenStream2 {
        let variant = self.variant;
        let members = self.fields.iter().map(|field| &field.member);
        let bindings = self.fields.iter().map(|field| &field.binding);
        quote! { Self::#variant { #(#members: #bindings,)* .. } }
    }

    fn payload(&self) -> TokenStream2 {
        match self.fields.as_slice() {
            [] => quote! { ::syb::Payload::Empty },
            [single] => {
                let ty = &single.ty;
                quote! { ::syb::Payload::single::<#ty>() }
            },
            fields => {
                let count = fields.len();
                quote! { ::syb::Payload::Fields(#count) }
            },
        }
    }
}

fn sum_body(data_enum: &DataEnum) -> syn::Result<TokenStream2> {
    if data_enum.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &data_enum.variants,
            "Data cannot be derived for enums without variants",
        ));
    }

    let alternatives = data_enum
        .variants
        .iter()
        .map(|variant| {
            Ok(Alternative {
                variant: &variant.ident,
                fields:  visited_fields(&variant.fields)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let visit_arms = alternatives.iter().map(|alternative| {
        let pattern = alternative.pattern();
        let bindings = alternative.fields.iter().map(|field| &field.binding);
        quote! {
            #pattern => {
                #( __visitor.visit(#bindings)?; )*
            }
        }
    });

    let descriptors = alternatives.iter().map(|alternative| {
        let name = alternative.variant.to_string();
        let payload = alternative.payload();
        quote! { ::syb::Alternative::new(#name, #payload) }
    });

    let index_arms = alternatives.iter().enumerate().map(|(index, alternative)| {
        let variant = alternative.variant;
        quote! { Self::#variant { .. } => #index }
    });

    let payload_arms: Vec<_> = alternatives
        .iter()
        .filter_map(|alternative| match alternative.fields.as_slice() {
            [single] => {
                let pattern = alternative.pattern();
                let binding = &single.binding;
                Some(quote! {
                    #pattern => ::core::option::Option::Some(#binding as &mut dyn ::core::any::Any)
                })
            },
            _ => None,
        })
        .collect();

    let payload_fallback = (payload_arms.len() < alternatives.len())
        .then(|| quote! { _ => ::core::option::Option::None, });

    Ok(quote! {
        const SHAPE: ::syb::Shape = ::syb::Shape::Sum;

        fn gmap_mut<__V: ::syb::Visitor>(&mut self, __visitor: &mut __V) -> ::syb::Result<()> {
            match self {
                #(#visit_arms)*
            }
            ::core::result::Result::Ok(())
        }

        fn alternatives() -> ::std::vec::Vec<::syb::Alternative> {
            ::std::vec![#(#descriptors),*]
        }

        fn active_alternative(&self) -> ::core::option::Option<usize> {
            ::core::option::Option::Some(match self {
                #(#index_arms,)*
            })
        }

        fn active_payload_mut(&mut self) -> ::core::option::Option<&mut dyn ::core::any::Any> {
            match self {
                #(#payload_arms,)*
                #payload_fallback
            }
        }
    })
}
