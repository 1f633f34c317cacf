////////////////////////////////////////////////////////////////////////////////
// This file is a part of the "Lady Deirdre" Work,                            //
// a compiler front-end foundation technology.                                //
//                                                                            //
// This Work is a proprietary software with source available code.            //
//                                                                            //
// To copy, use, distribute, and contribute into this Work you must agree to  //
// the terms of the End User License Agreement:                               //
//                                                                            //
// https://github.com/Eliah-Lakhin/lady-deirdre/blob/master/EULA.md.          //
//                                                                            //
// The Agreement let you use this Work in commercial and non-commercial       //
// purposes. Commercial use of the Work is free of charge to start,           //
// but the Agreement obligates you to pay me royalties                        //
// under certain conditions.                                                  //
//                                                                            //
// If you want to contribute into the source code of this Work,               //
// the Agreement obligates you to assign me all exclusive rights to           //
// the Derivative Work or contribution made by you                            //
// (this includes GitHub forks and pull requests to my repository).           //
//                                                                            //
// The Agreement does not limit rights of the third party software developers //
// as long as the third party software uses public API of this Work only,     //
// and the third party software does not incorporate or distribute            //
// this Work directly.                                                        //
//                                                                            //
// AS FAR AS THE LAW ALLOWS, THIS SOFTWARE COMES AS IS, WITHOUT ANY WARRANTY  //
// OR CONDITION, AND I WILL NOT BE LIABLE TO ANYONE FOR ANY DAMAGES           //
// RELATED TO THIS SOFTWARE, UNDER ANY KIND OF LEGAL CLAIM.                   //
//                                                                            //
// If you do not or cannot agree to the terms of this Agreement,              //
// do not use this Work.                                                      //
//                                                                            //
// Copyright (c) 2022 Ilya Lakhin (Илья Александрович Лахин).                 //
// All rights reserved.                                                       //
////////////////////////////////////////////////////////////////////////////////

mod diagnostic;
mod input;
mod output;

use std::time::{Duration, Instant};

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    Attribute,
    Error,
    File,
    Result,
};

pub use crate::raw_value::{
    diagnostic::{Diagnostic, DiagnosticKind},
    input::Mapping,
};
use crate::{
    syntax::{Declaration, GeneratedInitializer},
    utils::{error, Dump},
    BENCHMARK,
};

pub struct RawValue {
    original: TokenStream,
    declaration: Declaration,
    dump: Result<Dump>,
    build_time: Duration,
}

impl Parse for RawValue {
    fn parse(input: ParseStream) -> Result<Self> {
        let build_start = Instant::now();

        let mut attrs = input.call(Attribute::parse_outer)?;
        let dump = Dump::take(&mut attrs);
        let rest = input.parse::<TokenStream>()?;

        let original = quote!(#(#attrs)* #rest);
        let declaration = parse2::<Declaration>(original.clone())?;

        Ok(Self {
            original,
            declaration,
            dump,
            build_time: build_start.elapsed(),
        })
    }
}

impl From<RawValue> for proc_macro::TokenStream {
    #[inline(always)]
    fn from(raw_value: RawValue) -> Self {
        raw_value.expand().into()
    }
}

impl RawValue {
    /// Re-emits the annotated declaration followed by its reverse mapping,
    /// or by the compile error that explains why the mapping is absent.
    pub(crate) fn expand(self) -> TokenStream {
        let mut output = self.original;

        let dump = match self.dump {
            Ok(Dump::Dry(..)) => return output,
            Ok(dump) => dump,

            Err(error) => {
                error.to_compile_error().to_tokens(&mut output);

                return output;
            }
        };

        let name = match &self.declaration {
            Declaration::Property(property) => property.signature.ident.to_string(),
            Declaration::Other(..) => String::from("<unknown>"),
        };

        let compile_start = Instant::now();
        let result = Mapping::try_from(self.declaration);
        let compile_time = compile_start.elapsed();

        if BENCHMARK {
            println!(
                "RawValue {} expansion time: {:?}",
                name,
                compile_time + self.build_time,
            )
        }

        let initializer = match result {
            Ok(mapping) => GeneratedInitializer::from(mapping),

            Err(diagnostic) => {
                Error::from(diagnostic)
                    .to_compile_error()
                    .to_tokens(&mut output);

                return output;
            }
        };

        if let Dump::Output(span) = dump {
            let generated = initializer.to_token_stream();

            let output_string = match parse2::<File>(generated.clone()) {
                Ok(file) => prettyplease::unparse(&file),
                Err(_) => generated.to_string(),
            };

            error!(
                span,
                " -- Macro Debug Dump --\n\nRawValue \"{name}\" reverse \
                mapping code:\n\n{output_string}",
            )
            .to_compile_error()
            .to_tokens(&mut output);

            return output;
        }

        initializer.to_tokens(&mut output);

        output
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use syn::{parse2, parse_quote, Expr, ImplItemFn, Pat, Visibility};

    use crate::{
        raw_value::{DiagnosticKind, Mapping, RawValue},
        syntax::{Declaration, GeneratedInitializer},
    };

    fn extract(input: TokenStream) -> Result<Mapping, DiagnosticKind> {
        let declaration = parse2::<Declaration>(input).expect("Declaration parse failure.");

        Mapping::try_from(declaration).map_err(|diagnostic| diagnostic.kind())
    }

    fn generate(input: TokenStream) -> ImplItemFn {
        let mapping = extract(input).expect("Unexpected diagnostic.");

        let initializer = GeneratedInitializer::from(mapping);

        parse2::<ImplItemFn>(quote!(#initializer)).expect("Generated code parse failure.")
    }

    fn reverse_arms(initializer: &ImplItemFn) -> Vec<(String, String)> {
        let switch = match initializer.block.stmts.as_slice() {
            [syn::Stmt::Expr(Expr::Match(switch), None)] => switch,
            _ => panic!("Generated body is not a single match expression."),
        };

        switch
            .arms
            .iter()
            .map(|arm| {
                let pat = &arm.pat;
                let body = &arm.body;

                (quote!(#pat).to_string(), quote!(#body).to_string())
            })
            .collect()
    }

    #[test]
    fn test_coupes_and_sports() {
        let initializer = generate(quote! {
            fn raw_value(&self) -> &str {
                match self {
                    Self::Coupes => "cou",
                    Self::Sports => "spo",
                }
            }
        });

        assert_eq!("from_raw_value", initializer.sig.ident.to_string());
        assert_eq!(Visibility::Inherited, initializer.vis);

        let parameter: syn::FnArg = parse_quote!(raw_value: &str);

        assert_eq!(1, initializer.sig.inputs.len());
        assert_eq!(Some(&parameter), initializer.sig.inputs.first());

        let output: syn::ReturnType = parse_quote!(-> ::std::option::Option<Self>);

        assert_eq!(output, initializer.sig.output);

        let switch = match initializer.block.stmts.as_slice() {
            [syn::Stmt::Expr(Expr::Match(switch), None)] => switch,
            _ => panic!("Generated body is not a single match expression."),
        };

        let subject: Expr = parse_quote!(raw_value);

        assert_eq!(subject, *switch.expr);

        assert_eq!(
            vec![
                (
                    String::from("\"cou\""),
                    quote!(::std::option::Option::Some(Self::Coupes)).to_string(),
                ),
                (
                    String::from("\"spo\""),
                    quote!(::std::option::Option::Some(Self::Sports)).to_string(),
                ),
                (
                    String::from("_"),
                    quote!(::std::option::Option::None).to_string(),
                ),
            ],
            reverse_arms(&initializer),
        );
    }

    #[test]
    fn test_arity_and_order() {
        let initializer = generate(quote! {
            fn code(&self) -> u8 {
                match self {
                    Kind::A => 1,
                    Kind::B => { 2 }
                    Kind::C => 1,
                    Kind::D => 40,
                }
            }
        });

        let arms = reverse_arms(&initializer);

        assert_eq!(5, arms.len());

        assert_eq!(
            vec!["1", "2", "1", "40", "_"],
            arms.iter().map(|(label, _)| label.as_str()).collect::<Vec<_>>(),
        );

        let target: Pat = parse_quote!(_);

        assert_eq!(target, initializer_fallback(&initializer));
    }

    fn initializer_fallback(initializer: &ImplItemFn) -> Pat {
        match initializer.block.stmts.as_slice() {
            [syn::Stmt::Expr(Expr::Match(switch), None)] => match switch.arms.last() {
                Some(arm) => arm.pat.clone(),
                None => panic!("Generated match has no arms."),
            },
            _ => panic!("Generated body is not a single match expression."),
        }
    }

    #[test]
    fn test_empty_mapping() {
        let initializer = generate(quote! {
            fn raw_value(&self) -> u16 {
                match self {}
            }
        });

        assert_eq!(1, reverse_arms(&initializer).len());
    }

    #[test]
    fn test_visibility() {
        let public = generate(quote! {
            pub fn raw_value(&self) -> i32 {
                match self { Self::A => -1 }
            }
        });

        let expected: Visibility = parse_quote!(pub);

        assert_eq!(expected, public.vis);

        let restricted = generate(quote! {
            pub(crate) fn raw_value(&self) -> i32 {
                match self { Self::A => -1 }
            }
        });

        let expected: Visibility = parse_quote!(pub(crate));

        assert_eq!(expected, restricted.vis);

        let private = generate(quote! {
            const fn raw_value(&self) -> i32 {
                match self { Self::A => -1 }
            }
        });

        assert_eq!(Visibility::Inherited, private.vis);
        assert!(private.sig.constness.is_none());
    }

    #[test]
    fn test_generic_accessor() {
        let initializer = generate(quote! {
            pub fn raw_value<'a>(&'a self) -> &'a str
            where
                Self: 'a,
            {
                match self { Self::A => "a" }
            }
        });

        let parameter: syn::FnArg = parse_quote!(raw_value: &'a str);

        assert_eq!(Some(&parameter), initializer.sig.inputs.first());
        assert_eq!(1, initializer.sig.generics.params.len());

        let generics = &initializer.sig.generics;

        assert_eq!(quote!(<'a>).to_string(), quote!(#generics).to_string());

        assert!(initializer.sig.generics.where_clause.is_some());

        let plain = generate(quote! {
            fn raw_value(&self) -> u8 {
                match self { Self::A => 1 }
            }
        });

        assert!(plain.sig.generics.params.is_empty());
        assert!(plain.sig.generics.where_clause.is_none());
    }

    #[test]
    fn test_preconditions() {
        use DiagnosticKind::*;

        let cases = [
            (RequiresVariableDeclaration, quote!(struct Foo;)),
            (
                RequiresBinding,
                quote!(fn raw_value() -> u8 { match self { Self::A => 1 } }),
            ),
            (
                RequiresBinding,
                quote!(fn raw_value(&self, other: u8) -> u8 { match self { Self::A => 1 } }),
            ),
            (
                RequiresTypeAnnotation,
                quote!(fn raw_value(&self) { match self { Self::A => 1 } }),
            ),
            (RequiresAccessorBlock, quote!(fn raw_value(&self) -> u8;)),
            (
                RequiresCodeBlock,
                quote!(async fn raw_value(&self) -> u8 { match self { Self::A => 1 } }),
            ),
            (RequiresCodeBlockItem, quote!(fn raw_value(&self) -> u8 {})),
            (
                RequiresCodeBlockItem,
                quote!(fn raw_value(&self) -> u8 {
                    match self { Self::A => 1 }
                    match self { Self::A => 1 }
                }),
            ),
            (
                RequiresCodeBlockItemExpression,
                quote!(fn raw_value(&self) -> u8 {
                    let value = 1;
                    match self { Self::A => value }
                }),
            ),
            (
                RequiresCodeBlockItemExpression,
                quote!(fn raw_value(&self) -> u8 {
                    prepare();
                    match self { Self::A => 1 }
                }),
            ),
            (RequiresSwitch, quote!(fn raw_value(&self) -> u8 { 1 })),
            (
                RequiresSwitchSubject,
                quote!(fn raw_value(&self) -> u8 { match *self { Self::A => 1 } }),
            ),
            (
                RequiresSwitchSubject,
                quote!(fn raw_value(&self) -> u8 { match other { Self::A => 1 } }),
            ),
            (
                RequiresSwitchCase,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A if true => 1 } }),
            ),
            (
                RequiresSwitchCaseLabel,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => 1, _ => 2 } }),
            ),
            (
                RequiresSwitchCaseLabelItem,
                quote!(fn raw_value(&self) -> &str { match self { Self::A | Self::B => "x" } }),
            ),
            (
                RequiresSwitchCaseStatement,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => {} } }),
            ),
            (
                RequiresSwitchCaseStatement,
                quote!(fn raw_value(&self) -> u8 {
                    match self { Self::A => { let value = 1; value } }
                }),
            ),
            (
                RequiresSwitchCaseStatementItem,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => { 1; } } }),
            ),
            (
                RequiresSwitchCaseStatementItem,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => return 1, Self::B => 2 } }),
            ),
            (
                RequiresSwitchCaseStatementItem,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => { return 1 } } }),
            ),
            (
                RequiresSwitchCaseStatementItem,
                quote!(fn raw_value(&self) -> u8 { match self { Self::A => continue } }),
            ),
            (
                RequiresCodeBlockItemExpression,
                quote!(fn raw_value(&self) -> u8 { return match self { Self::A => 1 } }),
            ),
        ];

        for (expected, input) in cases {
            let source = input.to_string();

            match extract(input) {
                Ok(_) => panic!("Expected {expected:?} for: {source}"),
                Err(kind) => assert_eq!(expected, kind, "{source}"),
            }
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let result = extract(quote! {
            fn raw_value(&self) -> u8 {
                match self {
                    Self::A if true => 1,
                    _ => 2,
                    Self::B | Self::C => 3,
                }
            }
        });

        assert_eq!(Some(DiagnosticKind::RequiresSwitchCase), result.err());
    }

    #[test]
    fn test_diagnostic_witness() {
        let declaration = parse2::<Declaration>(quote! {
            fn raw_value(&self) -> &str {
                match self {
                    Self::A => "a",
                    Self::B | Self::C => "x",
                }
            }
        })
        .expect("Declaration parse failure.");

        let diagnostic = match Mapping::try_from(declaration) {
            Ok(_) => panic!("Or-pattern arm accepted."),
            Err(diagnostic) => diagnostic,
        };

        assert_eq!(
            quote!(Self::B | Self::C).to_string(),
            diagnostic.witness().to_string(),
        );
    }

    #[test]
    fn test_expansion() {
        let raw_value = parse2::<RawValue>(quote! {
            #[dump(dry)]
            #[doc = "Raw value."]
            pub fn raw_value(&self) -> u8 {
                match self { Self::A => 1 }
            }
        })
        .expect("RawValue parse failure.");

        let original = quote! {
            #[doc = "Raw value."]
            pub fn raw_value(&self) -> u8 {
                match self { Self::A => 1 }
            }
        };

        assert_eq!(original.to_string(), raw_value.expand().to_string());

        let raw_value = parse2::<RawValue>(quote! {
            fn raw_value(&self) -> u8 {
                match self { _ => 1 }
            }
        })
        .expect("RawValue parse failure.");

        let output = raw_value.expand().to_string();

        assert!(output.starts_with(&quote!(fn raw_value).to_string()));
        assert!(output.contains("compile_error"));
        assert!(output.contains("RawValue.requiresSwitchCaseLabel"));
        assert!(!output.contains("from_raw_value"));
    }

    #[test]
    fn test_duplicate_dump() {
        let result = parse2::<RawValue>(quote! {
            #[dump]
            #[dump(dry)]
            fn raw_value(&self) -> u8 {
                match self { Self::A => 1 }
            }
        });

        let output = match result {
            Ok(raw_value) => raw_value.expand().to_string(),
            Err(error) => panic!("RawValue parse failure: {error}"),
        };

        assert!(output.starts_with(&quote!(fn raw_value).to_string()));
        assert!(output.contains("Duplicate Dump attribute."));
        assert!(!output.contains("[dump"));
        assert!(!output.contains("from_raw_value"));
    }
}
