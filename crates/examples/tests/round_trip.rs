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

use raw_representations_examples::{
    race_class::Id,
    vehicle::{Drivetrain, Gear, Surface, Tyre},
};

#[test]
fn test_race_class_codes() {
    assert_eq!(Some(Id::Coupes), Id::from_raw_value("cou"));
    assert_eq!(Some(Id::Sports), Id::from_raw_value("spo"));
    assert_eq!(None, Id::from_raw_value("xyz"));
}

#[test]
fn test_race_class_round_trip() {
    for id in Id::ALL {
        assert_eq!(Some(id), Id::from_raw_value(id.raw_value()));
    }

    let owned = String::from("cou");

    assert_eq!(Some(Id::Coupes), Id::from_raw_value(owned.as_str()));
}

#[test]
fn test_numeric_round_trip() {
    for drivetrain in Drivetrain::ALL {
        assert_eq!(
            Some(drivetrain),
            Drivetrain::from_raw_value(drivetrain.raw_value()),
        );
    }

    for gear in Gear::ALL {
        assert_eq!(Some(gear), Gear::from_raw_value(gear.raw_value()));
    }

    assert_eq!(Some(Gear::Reverse), Gear::from_raw_value(-1));
    assert_eq!(Some(Gear::Neutral), Gear::from_raw_value(0));
}

#[test]
fn test_first_match_wins() {
    assert_eq!("road", Surface::Asphalt.raw_value());
    assert_eq!("road", Surface::Tarmac.raw_value());

    assert_eq!(Some(Surface::Asphalt), Surface::from_raw_value("road"));
    assert_eq!(Some(Surface::Gravel), Surface::from_raw_value("dirt"));

    assert_ne!(
        Some(Surface::Tarmac),
        Surface::from_raw_value(Surface::Tarmac.raw_value()),
    );
}

#[test]
fn test_borrowed_round_trip() {
    for tyre in Tyre::ALL {
        assert_eq!(Some(tyre), Tyre::from_raw_value(tyre.compound()));
    }

    let label = String::from("medium");

    assert_eq!(Some(Tyre::Medium), Tyre::from_raw_value(&label));
    assert_eq!(None, Tyre::from_raw_value("wet"));
}
