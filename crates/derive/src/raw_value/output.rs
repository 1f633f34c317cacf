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

use crate::{
    raw_value::Mapping,
    syntax::{FallbackArm, GeneratedInitializer, Parameter, ReverseArm, ReverseSwitch},
};

pub(super) const INITIALIZER: &str = "from_raw_value";
pub(super) const PARAMETER: &str = "raw_value";

impl From<Mapping> for GeneratedInitializer {
    fn from(mapping: Mapping) -> Self {
        let name_span = mapping.name.span();
        let parameter = Ident::new(PARAMETER, mapping.subject.span());

        let arms = mapping
            .arms
            .into_iter()
            .map(|arm| ReverseArm {
                label: arm.value,
                target: arm.pattern,
            })
            .collect();

        Self {
            vis: mapping.vis,
            name: Ident::new(INITIALIZER, name_span),
            generics: mapping.generics,
            parameter: Parameter {
                name: parameter.clone(),
                ty: mapping.declared_type,
            },
            body: ReverseSwitch {
                subject: parameter,
                arms,
                fallback: FallbackArm {
                    underscore_token: Token![_](name_span),
                },
            },
        }
    }
}
