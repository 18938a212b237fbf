use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, Expr, Fields, Result};

/// The tags of the `error` attribute.
#[derive(Default)]
struct Tags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Reads the tags of the first `error` attribute on the item. Every tag is optional.
    fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut tags = Tags::default();
        let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(tags);
        };

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut tags.message
            } else if meta.path.is_ident("labels") {
                &mut tags.labels
            } else if meta.path.is_ident("help") {
                &mut tags.help
            } else {
                return Err(meta.error("unknown tag"));
            };
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        Ok(tags)
    }
}

/// Destructures `self` into the named fields of the struct, so that tag expressions can use them.
fn destructure_fields(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let Data::Struct(data) = &input.data else {
        return quote_spanned! { name.span() => compile_error!("`ErrorKind` can only be derived for structs"); };
    };

    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            quote! { let #name { #(#names),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// Expands `#[derive(ErrorKind)]` into an implementation of `cas_error::ErrorKind`.
pub fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let tags = Tags::from_input(&input)?;
    let name = &input.ident;
    let fields = destructure_fields(&input);

    let message = tags.message.map_or_else(|| quote! { "" }, |message| quote! { #message });
    let labels = tags.labels.map_or_else(|| quote! { Vec::<String>::new() }, |labels| quote! { #labels });
    let help = tags.help.map(|help| quote! { report.set_help(#help); });

    Ok(quote! {
        impl cas_error::ErrorKind for #name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #fields

                // engine errors may carry no spans; labels are paired with as many as there are
                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .map(|text| text.to_string())
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(cas_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    });

                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        }
    })
}
