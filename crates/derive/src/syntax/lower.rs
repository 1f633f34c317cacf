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

use proc_macro2::TokenStream;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Arm,
    Attribute,
    Block,
    Expr,
    ExprBlock,
    ExprMacro,
    ExprMatch,
    ExprPath,
    FnArg,
    Pat,
    PatOr,
    Result,
    ReturnType,
    Signature,
    Stmt,
    StmtMacro,
    Visibility,
};

use crate::syntax::{
    AccessorBlock,
    AsyncAccessor,
    Binding,
    CaseItems,
    CaseLabel,
    CaseStatements,
    CodeBlock,
    CodeBlockItem,
    Declaration,
    Expression,
    PropertyDeclaration,
    SwitchCase,
    SwitchElement,
    SwitchExpression,
    TypeAnnotation,
    Verbatim,
};

impl Parse for Declaration {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse::<Visibility>()?;

        if input.fork().parse::<Signature>().is_err() {
            let rest = input.parse::<TokenStream>()?;

            return Ok(Self::Other(Verbatim(quote!(#(#attrs)* #vis #rest))));
        }

        let signature = input.parse::<Signature>()?;

        let body = match input.peek(Token![;]) {
            true => {
                let _ = input.parse::<Token![;]>()?;
                None
            }

            false => Some(input.parse::<Block>()?),
        };

        Ok(Self::Property(PropertyDeclaration::new(
            attrs, vis, signature, body,
        )))
    }
}

impl PropertyDeclaration {
    pub(crate) fn new(
        attrs: Vec<Attribute>,
        vis: Visibility,
        signature: Signature,
        body: Option<Block>,
    ) -> Self {
        let binding = Binding::from_signature(&signature);

        let accessor_block = body.map(|body| {
            let block = CodeBlock::from(body);

            match signature.asyncness {
                Some(async_token) => AccessorBlock::Async(AsyncAccessor { async_token, block }),
                None => AccessorBlock::Code(block),
            }
        });

        Self {
            attrs,
            vis,
            signature,
            binding,
            accessor_block,
        }
    }
}

impl Binding {
    fn from_signature(signature: &Signature) -> Option<Self> {
        let mut inputs = signature.inputs.iter();

        let receiver = match (inputs.next(), inputs.next()) {
            (Some(FnArg::Receiver(receiver)), None) => receiver.clone(),
            _ => return None,
        };

        let type_annotation = match &signature.output {
            ReturnType::Default => None,

            ReturnType::Type(arrow_token, ty) => Some(TypeAnnotation {
                arrow_token: *arrow_token,
                ty: ty.as_ref().clone(),
            }),
        };

        Some(Self {
            name: signature.ident.clone(),
            paren_token: signature.paren_token,
            receiver,
            type_annotation,
        })
    }
}

impl From<Block> for CodeBlock {
    #[inline]
    fn from(block: Block) -> Self {
        Self {
            brace_token: block.brace_token,
            items: block.stmts.into_iter().map(CodeBlockItem::from).collect(),
        }
    }
}

impl From<Stmt> for CodeBlockItem {
    fn from(stmt: Stmt) -> Self {
        match stmt {
            Stmt::Expr(expr, None) if !is_control_flow(&expr) => {
                Self::Expression(Expression::from(expr))
            }

            Stmt::Macro(StmtMacro {
                attrs,
                mac,
                semi_token: None,
            }) => Self::Expression(Expression::Other(Expr::Macro(ExprMacro { attrs, mac }))),

            other => Self::Statement(other),
        }
    }
}

impl From<Expr> for Expression {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Path(path) if is_self_reference(&path) => Self::SelfReference(path),
            Expr::Match(switch) => Self::Switch(SwitchExpression::from(switch)),
            other => Self::Other(other),
        }
    }
}

impl From<ExprMatch> for SwitchExpression {
    fn from(switch: ExprMatch) -> Self {
        Self {
            attrs: switch.attrs,
            match_token: switch.match_token,
            subject: Box::new(Expression::from(*switch.expr)),
            brace_token: switch.brace_token,
            elements: switch.arms.into_iter().map(SwitchElement::from).collect(),
        }
    }
}

impl From<Arm> for SwitchElement {
    fn from(arm: Arm) -> Self {
        if arm.guard.is_some() {
            return Self::Conditional(arm);
        }

        Self::Case(SwitchCase {
            attrs: arm.attrs,
            label: CaseLabel::from(arm.pat),
            fat_arrow_token: arm.fat_arrow_token,
            statements: CaseStatements::from(*arm.body),
            comma: arm.comma,
        })
    }
}

impl From<Pat> for CaseLabel {
    fn from(pat: Pat) -> Self {
        match pat {
            Pat::Wild(wild) if wild.attrs.is_empty() => Self::Default(wild.underscore_token),

            Pat::Or(PatOr {
                attrs,
                leading_vert,
                cases,
            }) if attrs.is_empty() => Self::Items(CaseItems {
                leading_vert,
                items: cases,
            }),

            other => {
                let mut items = Punctuated::new();

                items.push(other);

                Self::Items(CaseItems {
                    leading_vert: None,
                    items,
                })
            }
        }
    }
}

impl From<Expr> for CaseStatements {
    fn from(body: Expr) -> Self {
        match body {
            Expr::Block(ExprBlock {
                attrs,
                label: None,
                block,
            }) if attrs.is_empty() => Self {
                brace_token: Some(block.brace_token),
                items: block.stmts.into_iter().map(CodeBlockItem::from).collect(),
            },

            other => Self {
                brace_token: None,
                items: vec![CodeBlockItem::from(Stmt::Expr(other, None))],
            },
        }
    }
}

#[inline(always)]
fn is_self_reference(path: &ExprPath) -> bool {
    path.attrs.is_empty() && path.qself.is_none() && path.path.is_ident("self")
}

// Jumps out of the enclosing scope never produce a value.
#[inline(always)]
fn is_control_flow(expr: &Expr) -> bool {
    match expr {
        Expr::Return(..) | Expr::Break(..) | Expr::Continue(..) => true,
        _ => false,
    }
}
