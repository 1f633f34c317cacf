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

use std::fmt::{Display, Formatter};

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Error;

const DOMAIN: &str = "RawRepresentations";

/// Structural precondition violated by the annotated declaration.
///
/// Every kind is an error. The Shape Extractor stops at the first violated
/// precondition, so a failed expansion reports exactly one diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    RequiresVariableDeclaration,
    RequiresBinding,
    RequiresTypeAnnotation,
    RequiresAccessorBlock,
    RequiresCodeBlock,
    RequiresCodeBlockItem,
    RequiresCodeBlockItemExpression,
    RequiresSwitch,
    RequiresSwitchSubject,
    RequiresSwitchCase,
    RequiresSwitchCaseLabel,
    RequiresSwitchCaseLabelItem,
    RequiresSwitchCaseStatement,
    RequiresSwitchCaseStatementItem,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::RequiresVariableDeclaration => {
                "RawValue attribute requires a property-like method declaration."
            }
            Self::RequiresBinding => "Method declaration requires a single `self` binding.",
            Self::RequiresTypeAnnotation => "Binding requires a return type annotation.",
            Self::RequiresAccessorBlock => "Binding requires a body block.",
            Self::RequiresCodeBlock => "Body requires a plain code block.",
            Self::RequiresCodeBlockItem => "Code block requires exactly one item.",
            Self::RequiresCodeBlockItemExpression => "Item requires a bare expression.",
            Self::RequiresSwitch => "Expression requires a match expression.",
            Self::RequiresSwitchSubject => "Match expression requires the `self` subject.",
            Self::RequiresSwitchCase => "Match expression requires an unguarded case arm.",
            Self::RequiresSwitchCaseLabel => "Match arm requires a case pattern.",
            Self::RequiresSwitchCaseLabelItem => "Match arm pattern requires a single item.",
            Self::RequiresSwitchCaseStatement => "Match arm requires a single statement.",
            Self::RequiresSwitchCaseStatementItem => "Match arm statement requires an expression.",
        }
    }

    /// Stable identifier, e.g. `RawValue.requiresSwitch`.
    pub fn id(self) -> MessageId {
        let kind = format!("{self:?}").to_case(Case::Camel);

        MessageId {
            domain: DOMAIN,
            id: format!("RawValue.{kind}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageId {
    pub domain: &'static str,
    pub id: String,
}

impl Display for MessageId {
    #[inline(always)]
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}::{}", self.domain, self.id)
    }
}

/// A diagnostic bound to the smallest node that witnesses the failure.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    witness: TokenStream,
}

impl Display for Diagnostic {
    #[inline(always)]
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}\n\n[{}]", self.kind.message(), self.kind.id())
    }
}

impl From<Diagnostic> for Error {
    #[inline(always)]
    fn from(diagnostic: Diagnostic) -> Self {
        Error::new_spanned(&diagnostic.witness, diagnostic.to_string())
    }
}

impl Diagnostic {
    #[inline(always)]
    pub(super) fn new(kind: DiagnosticKind, node: &impl ToTokens) -> Self {
        Self {
            kind,
            witness: node.to_token_stream(),
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    #[inline(always)]
    pub fn witness(&self) -> &TokenStream {
        &self.witness
    }
}

#[cfg(test)]
mod tests {
    use crate::raw_value::DiagnosticKind;

    #[test]
    fn test_diagnostic_ids() {
        assert_eq!(
            "RawRepresentations::RawValue.requiresSwitch",
            DiagnosticKind::RequiresSwitch.id().to_string(),
        );

        assert_eq!(
            "RawValue.requiresSwitchCaseStatementItem",
            DiagnosticKind::RequiresSwitchCaseStatementItem.id().id,
        );

        assert_eq!(
            "RawValue.requiresCodeBlockItemExpression",
            DiagnosticKind::RequiresCodeBlockItemExpression.id().id,
        );
    }
}
