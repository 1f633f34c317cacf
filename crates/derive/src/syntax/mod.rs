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

//! Syntax subset understood by the RawValue attribute.
//!
//! The node kinds below mirror the fragment of Rust grammar that can form
//! a forward mapping: a property-like accessor method whose body is a single
//! `match self` expression. Leaves are `syn` nodes moved into the tree as is;
//! every node re-emits its original tokens, so diagnostics can point at
//! the exact fragment that violates the expected shape.

mod initializer;
mod lower;

use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;
use syn::{
    punctuated::Punctuated,
    token::{Brace, Paren},
    Arm,
    Attribute,
    Expr,
    ExprPath,
    Pat,
    Receiver,
    Signature,
    Stmt,
    Type,
    Visibility,
};

pub use crate::syntax::initializer::{
    FallbackArm,
    GeneratedInitializer,
    Parameter,
    ReverseArm,
    ReverseSwitch,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Property(PropertyDeclaration),
    Other(Verbatim),
}

/// An accessor method: `<vis> fn <name>(<binding>) -> <type> <accessor block>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub signature: Signature,
    /// Present only if the method takes nothing but its `self` receiver.
    pub binding: Option<Binding>,
    /// Absent for the body-less `fn name(&self) -> Type;` form.
    pub accessor_block: Option<AccessorBlock>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: Ident,
    pub paren_token: Paren,
    pub receiver: Receiver,
    pub type_annotation: Option<TypeAnnotation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub arrow_token: Token![->],
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessorBlock {
    Code(CodeBlock),
    Async(AsyncAccessor),
}

/// The body of an `async fn`: a deferred computation rather than a plain
/// statement sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsyncAccessor {
    pub async_token: Token![async],
    pub block: CodeBlock,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    pub brace_token: Brace,
    pub items: Vec<CodeBlockItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeBlockItem {
    /// An expression without a trailing semicolon.
    Expression(Expression),
    Statement(Stmt),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    SelfReference(ExprPath),
    Switch(SwitchExpression),
    Other(Expr),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchExpression {
    pub attrs: Vec<Attribute>,
    pub match_token: Token![match],
    pub subject: Box<Expression>,
    pub brace_token: Brace,
    pub elements: Vec<SwitchElement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchElement {
    Case(SwitchCase),
    /// An arm with an `if` guard.
    Conditional(Arm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchCase {
    pub attrs: Vec<Attribute>,
    pub label: CaseLabel,
    pub fat_arrow_token: Token![=>],
    pub statements: CaseStatements,
    pub comma: Option<Token![,]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseLabel {
    Items(CaseItems),
    Default(Token![_]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseItems {
    pub leading_vert: Option<Token![|]>,
    pub items: Punctuated<Pat, Token![|]>,
}

/// Arm body. A braced body contributes its statements, any other body is
/// a single bare expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseStatements {
    pub brace_token: Option<Brace>,
    pub items: Vec<CodeBlockItem>,
}

/// Tokens of a declaration the attribute does not recognize.
#[derive(Clone, Debug)]
pub struct Verbatim(pub TokenStream);

impl PartialEq for Verbatim {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.to_string() == other.0.to_string()
    }
}

impl Eq for Verbatim {}

impl ToTokens for Declaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Property(property) => property.to_tokens(tokens),
            Self::Other(verbatim) => verbatim.to_tokens(tokens),
        }
    }
}

impl ToTokens for Verbatim {
    #[inline(always)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.0.to_tokens(tokens)
    }
}

impl ToTokens for PropertyDeclaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for attr in &self.attrs {
            attr.to_tokens(tokens);
        }

        self.vis.to_tokens(tokens);
        self.signature.to_tokens(tokens);

        match &self.accessor_block {
            Some(AccessorBlock::Code(block)) => block.to_tokens(tokens),
            Some(AccessorBlock::Async(accessor)) => accessor.block.to_tokens(tokens),
            None => <Token![;]>::default().to_tokens(tokens),
        }
    }
}

impl ToTokens for Binding {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.name.to_tokens(tokens);

        self.paren_token
            .surround(tokens, |tokens| self.receiver.to_tokens(tokens));

        if let Some(annotation) = &self.type_annotation {
            annotation.to_tokens(tokens);
        }
    }
}

impl ToTokens for TypeAnnotation {
    #[inline(always)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.arrow_token.to_tokens(tokens);
        self.ty.to_tokens(tokens);
    }
}

impl ToTokens for AccessorBlock {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Code(block) => block.to_tokens(tokens),
            Self::Async(accessor) => accessor.to_tokens(tokens),
        }
    }
}

impl ToTokens for AsyncAccessor {
    #[inline(always)]
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.async_token.to_tokens(tokens);
        self.block.to_tokens(tokens);
    }
}

impl ToTokens for CodeBlock {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.brace_token.surround(tokens, |tokens| {
            for item in &self.items {
                item.to_tokens(tokens);
            }
        });
    }
}

impl ToTokens for CodeBlockItem {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Expression(expression) => expression.to_tokens(tokens),
            Self::Statement(statement) => statement.to_tokens(tokens),
        }
    }
}

impl ToTokens for Expression {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::SelfReference(path) => path.to_tokens(tokens),
            Self::Switch(switch) => switch.to_tokens(tokens),
            Self::Other(expr) => expr.to_tokens(tokens),
        }
    }
}

impl ToTokens for SwitchExpression {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for attr in &self.attrs {
            attr.to_tokens(tokens);
        }

        self.match_token.to_tokens(tokens);
        self.subject.to_tokens(tokens);

        self.brace_token.surround(tokens, |tokens| {
            for element in &self.elements {
                element.to_tokens(tokens);
            }
        });
    }
}

impl ToTokens for SwitchElement {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Case(case) => case.to_tokens(tokens),
            Self::Conditional(arm) => arm.to_tokens(tokens),
        }
    }
}

impl ToTokens for SwitchCase {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for attr in &self.attrs {
            attr.to_tokens(tokens);
        }

        self.label.to_tokens(tokens);
        self.fat_arrow_token.to_tokens(tokens);
        self.statements.to_tokens(tokens);
        self.comma.to_tokens(tokens);
    }
}

impl ToTokens for CaseLabel {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Items(items) => items.to_tokens(tokens),
            Self::Default(underscore) => underscore.to_tokens(tokens),
        }
    }
}

impl ToTokens for CaseItems {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.leading_vert.to_tokens(tokens);
        self.items.to_tokens(tokens);
    }
}

impl ToTokens for CaseStatements {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match &self.brace_token {
            Some(brace) => brace.surround(tokens, |tokens| {
                for item in &self.items {
                    item.to_tokens(tokens);
                }
            }),

            None => {
                for item in &self.items {
                    item.to_tokens(tokens);
                }
            }
        }
    }
}
