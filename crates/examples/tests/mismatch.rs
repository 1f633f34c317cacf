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

use rand::{thread_rng, Rng};
use raw_representations_examples::{
    race_class::Id,
    vehicle::{Drivetrain, Gear, Surface},
};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[test]
fn test_random_strings() {
    let mut random = thread_rng();

    for _ in 0..10_000 {
        let length = random.gen_range(0..6);

        let string = (0..length)
            .map(|_| ALPHABET[random.gen_range(0..ALPHABET.len())] as char)
            .collect::<String>();

        match string.as_str() {
            "cou" => assert_eq!(Some(Id::Coupes), Id::from_raw_value(&string)),
            "spo" => assert_eq!(Some(Id::Sports), Id::from_raw_value(&string)),
            _ => assert_eq!(None, Id::from_raw_value(&string), "{string}"),
        }
    }
}

#[test]
fn test_near_misses() {
    for string in ["", "co", "couu", "COU", " cou", "spo ", "Spo", "cpu"] {
        assert_eq!(None, Id::from_raw_value(string), "{string:?}");
    }

    assert_eq!(None, Surface::from_raw_value("Road"));
}

#[test]
fn test_numeric_domain() {
    let known = Drivetrain::ALL.map(|drivetrain| drivetrain.raw_value());

    for raw_value in u8::MIN..=u8::MAX {
        let expected = Drivetrain::ALL
            .into_iter()
            .find(|drivetrain| drivetrain.raw_value() == raw_value);

        assert_eq!(expected, Drivetrain::from_raw_value(raw_value));
        assert_eq!(known.contains(&raw_value), expected.is_some());
    }

    let mismatches = (i8::MIN..=i8::MAX)
        .filter(|raw_value| Gear::from_raw_value(*raw_value).is_none())
        .count();

    assert_eq!(256 - Gear::ALL.len(), mismatches);
}
