use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `inputbind::form::FormModel` for a struct with named fields.
///
/// Field order in the struct is the declaration order the form composer uses
/// for its state and for the assembled submission record. Every field type
/// must convert from `String` and implement `Display`.
#[proc_macro_derive(FormModel)]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "FormModel derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let model_ident = input.ident;
    let fields_struct_ident = format_ident!("{model_ident}Fields");

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "FormModel derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "FormModel derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let inputbind = inputbind_path();
    let mut key_consts = Vec::new();
    let mut fields_methods = Vec::new();
    let mut value_entries = Vec::new();
    let mut decode_entries = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let field_ty = field.ty;
        let field_name = field_ident.to_string();

        key_consts.push(quote! {
            #inputbind::form::FieldKey::new(#field_name)
        });

        fields_methods.push(quote! {
            pub const fn #field_ident(&self) -> #inputbind::form::FieldKey {
                #inputbind::form::FieldKey::new(#field_name)
            }
        });

        value_entries.push(quote! {
            (
                #inputbind::form::FieldKey::new(#field_name),
                #inputbind::SharedString::from(::std::string::ToString::to_string(&self.#field_ident)),
            )
        });

        decode_entries.push(quote! {
            #field_ident: <#field_ty as ::core::convert::From<::std::string::String>>::from(
                record
                    .require(#inputbind::form::FieldKey::new(#field_name))?
                    .to_string(),
            )
        });
    }

    quote! {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #fields_struct_ident;

        impl #fields_struct_ident {
            #(#fields_methods)*
        }

        impl #inputbind::form::FormModel for #model_ident {
            type Fields = #fields_struct_ident;

            const FIELD_KEYS: &'static [#inputbind::form::FieldKey] = &[#(#key_consts),*];

            fn fields() -> Self::Fields {
                #fields_struct_ident
            }

            fn values(&self) -> ::std::vec::Vec<(#inputbind::form::FieldKey, #inputbind::SharedString)> {
                ::std::vec![#(#value_entries),*]
            }

            fn from_record(
                record: &#inputbind::form::FormRecord,
            ) -> #inputbind::form::FormResult<Self> {
                ::core::result::Result::Ok(Self {
                    #(#decode_entries),*
                })
            }
        }
    }
    .into()
}

fn inputbind_path() -> TokenStream2 {
    match crate_name("inputbind") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::inputbind),
    }
}
