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

use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;
use syn::{Generics, Pat, Type, Visibility};

use crate::{syntax::Expression, utils::Facade};

/// A failable constructor that recovers an instance from its raw value:
///
/// ```text
/// <vis> fn <name><generics>(<parameter>) -> Option<Self> <where clause> {
///     match <parameter name> {
///         <value 1> => Some(<pattern 1>),
///         ...
///         _ => None,
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedInitializer {
    pub vis: Visibility,
    pub name: Ident,
    pub generics: Generics,
    pub parameter: Parameter,
    pub body: ReverseSwitch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: Ident,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseSwitch {
    pub subject: Ident,
    pub arms: Vec<ReverseArm>,
    pub fallback: FallbackArm,
}

/// `<label> => Some(<target>)`, where the label is the forward mapping's
/// value and the target is the forward mapping's pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseArm {
    pub label: Expression,
    pub target: Pat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackArm {
    pub underscore_token: Token![_],
}

impl ToTokens for GeneratedInitializer {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let span = self.name.span();
        let option = self.name.face_option();

        let vis = &self.vis;
        let name = &self.name;
        let generics = &self.generics;
        let where_clause = &self.generics.where_clause;
        let parameter = &self.parameter;
        let body = &self.body;

        quote_spanned!(span=>
            #[inline]
            #[allow(unreachable_patterns)]
            #vis fn #name #generics(#parameter) -> #option<Self> #where_clause {
                #body
            }
        )
        .to_tokens(tokens)
    }
}

impl ToTokens for Parameter {
    #[inline(always)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let ty = &self.ty;

        quote!(#name: #ty).to_tokens(tokens)
    }
}

impl ToTokens for ReverseSwitch {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let span = self.subject.span();

        let subject = &self.subject;
        let arms = &self.arms;
        let fallback = &self.fallback;

        quote_spanned!(span=>
            match #subject {
                #( #arms )*
                #fallback
            }
        )
        .to_tokens(tokens)
    }
}

impl ToTokens for ReverseArm {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let option = self.target.face_option();

        let label = &self.label;
        let target = &self.target;

        quote!(#label => #option::Some(#target),).to_tokens(tokens)
    }
}

impl ToTokens for FallbackArm {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let option = self.underscore_token.face_option();

        let underscore = &self.underscore_token;

        quote!(#underscore => #option::None,).to_tokens(tokens)
    }
}
