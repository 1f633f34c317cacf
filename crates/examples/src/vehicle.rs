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

use raw_representations::raw_value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Drivetrain {
    FrontWheel,
    RearWheel,
    AllWheel,
    Electric,
}

impl Drivetrain {
    pub const ALL: [Self; 4] = [
        Self::FrontWheel,
        Self::RearWheel,
        Self::AllWheel,
        Self::Electric,
    ];

    /// Bit flag of the drivetrain in the telemetry stream.
    #[raw_value]
    pub fn raw_value(&self) -> u8 {
        match self {
            Self::FrontWheel => 1,
            Self::RearWheel => 2,
            Self::AllWheel => 4,
            Self::Electric => 8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gear {
    Reverse,
    Neutral,
    First,
    Second,
}

impl Gear {
    pub const ALL: [Self; 4] = [Self::Reverse, Self::Neutral, Self::First, Self::Second];

    #[raw_value]
    pub fn raw_value(&self) -> i8 {
        match self {
            Self::Reverse => -1,
            Self::Neutral => 0,
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Track surfaces. Asphalt and Tarmac share the same code, so the code
/// always resolves back to Asphalt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Asphalt,
    Tarmac,
    Gravel,
}

impl Surface {
    #[raw_value]
    pub fn raw_value(&self) -> &'static str {
        match self {
            Surface::Asphalt => "road",
            Surface::Tarmac => { "road" }
            Surface::Gravel => "dirt",
        }
    }
}

/// Tyre compounds, labelled by a name borrowed from the tyre itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tyre {
    Soft,
    Medium,
    Hard,
}

impl Tyre {
    pub const ALL: [Self; 3] = [Self::Soft, Self::Medium, Self::Hard];

    #[raw_value]
    pub fn compound<'a>(&'a self) -> &'a str
    where
        Self: 'a,
    {
        match self {
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Green,
    Yellow,
    Red,
}

impl Flag {
    /// Signal code. The reverse mapping stays private to this module.
    #[raw_value]
    fn code(&self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Red => 'r',
        }
    }

    pub fn parse(signal: char) -> Option<Self> {
        Self::from_raw_value(signal)
    }

    pub fn signal(&self) -> char {
        self.code()
    }
}

#[cfg(test)]
mod tests {
    use crate::vehicle::Flag;

    #[test]
    fn test_private_mapping() {
        for flag in [Flag::Green, Flag::Yellow, Flag::Red] {
            assert_eq!(Some(flag), Flag::from_raw_value(flag.code()));
        }

        assert_eq!(None, Flag::from_raw_value('b'));
        assert_eq!(Some(Flag::Red), Flag::parse('r'));
        assert_eq!('y', Flag::Yellow.signal());
    }
}
