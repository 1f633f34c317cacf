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

use proc_macro2::Ident;
use syn::{Generics, Pat, Type, Visibility};

use crate::{
    raw_value::{Diagnostic, DiagnosticKind},
    syntax::{
        AccessorBlock,
        CaseLabel,
        CodeBlockItem,
        Declaration,
        Expression,
        SwitchElement,
        SwitchExpression,
    },
};

/// A validated forward mapping: the accessor's declared type and
/// the ordered `pattern => value` pairs of its `match self` expression.
#[derive(Clone, Debug)]
pub struct Mapping {
    pub(super) vis: Visibility,
    pub(super) name: Ident,
    pub(super) generics: Generics,
    pub(super) subject: Ident,
    pub(super) declared_type: Type,
    pub(super) arms: Vec<MappingArm>,
}

#[derive(Clone, Debug)]
pub(super) struct MappingArm {
    pub(super) pattern: Pat,
    pub(super) value: Expression,
}

impl TryFrom<Declaration> for Mapping {
    type Error = Diagnostic;

    fn try_from(declaration: Declaration) -> Result<Self, Diagnostic> {
        use DiagnosticKind::*;

        let property = match &declaration {
            Declaration::Property(property) => property,
            other => return Err(Diagnostic::new(RequiresVariableDeclaration, other)),
        };

        let binding = match &property.binding {
            Some(binding) => binding,
            None => return Err(Diagnostic::new(RequiresBinding, &property.signature)),
        };

        let declared_type = match &binding.type_annotation {
            Some(annotation) => annotation.ty.clone(),
            None => return Err(Diagnostic::new(RequiresTypeAnnotation, binding)),
        };

        let accessor_block = match &property.accessor_block {
            Some(accessor_block) => accessor_block,
            None => return Err(Diagnostic::new(RequiresAccessorBlock, binding)),
        };

        let code_block = match accessor_block {
            AccessorBlock::Code(code_block) => code_block,
            AccessorBlock::Async(accessor) => {
                return Err(Diagnostic::new(RequiresCodeBlock, accessor));
            }
        };

        let item = match code_block.items.first() {
            Some(item) => item,
            None => return Err(Diagnostic::new(RequiresCodeBlockItem, code_block)),
        };

        let expression = match item {
            CodeBlockItem::Expression(expression) => expression,
            CodeBlockItem::Statement(statement) => {
                return Err(Diagnostic::new(RequiresCodeBlockItemExpression, statement));
            }
        };

        if let Some(extra) = code_block.items.get(1) {
            return Err(Diagnostic::new(RequiresCodeBlockItem, extra));
        }

        let switch = match expression {
            Expression::Switch(switch) => switch,
            other => return Err(Diagnostic::new(RequiresSwitch, other)),
        };

        let subject = match switch.subject.as_ref() {
            Expression::SelfReference(path) => match path.path.get_ident() {
                Some(ident) => ident.clone(),
                None => return Err(Diagnostic::new(RequiresSwitchSubject, path)),
            },

            other => return Err(Diagnostic::new(RequiresSwitchSubject, other)),
        };

        Ok(Self {
            vis: property.vis.clone(),
            name: binding.name.clone(),
            generics: property.signature.generics.clone(),
            subject,
            declared_type,
            arms: extract_arms(switch)?,
        })
    }
}

fn extract_arms(switch: &SwitchExpression) -> Result<Vec<MappingArm>, Diagnostic> {
    use DiagnosticKind::*;

    let mut arms = Vec::with_capacity(switch.elements.len());

    for element in &switch.elements {
        let case = match element {
            SwitchElement::Case(case) => case,
            SwitchElement::Conditional(arm) => {
                return Err(Diagnostic::new(RequiresSwitchCase, arm));
            }
        };

        let label = match &case.label {
            CaseLabel::Items(label) => label,
            CaseLabel::Default(underscore) => {
                return Err(Diagnostic::new(RequiresSwitchCaseLabel, underscore));
            }
        };

        let pattern = match (label.items.first(), label.items.len()) {
            (Some(pattern), 1) => pattern.clone(),
            _ => return Err(Diagnostic::new(RequiresSwitchCaseLabelItem, label)),
        };

        let statements = &case.statements;

        let statement = match (statements.items.first(), statements.items.len()) {
            (Some(statement), 1) => statement,
            _ => return Err(Diagnostic::new(RequiresSwitchCaseStatement, statements)),
        };

        let value = match statement {
            CodeBlockItem::Expression(expression) => expression.clone(),
            CodeBlockItem::Statement(statement) => {
                return Err(Diagnostic::new(RequiresSwitchCaseStatementItem, statement));
            }
        };

        arms.push(MappingArm { pattern, value });
    }

    Ok(arms)
}
