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

#![no_std]
#![deny(missing_docs)]

//! # Raw Representations API Documentation
//!
//! Raw Representations derives the reverse of a forward mapping written as
//! a `match self` expression.
//!
//! You describe how each enum variant maps to a raw value once, in a plain
//! accessor method, and annotate this method with the
//! [raw_value](macro@raw_value) attribute. The attribute keeps your method
//! and generates a failable constructor next to it that maps raw values back
//! to variants:
//!
//! ```rust
//! use raw_representations::raw_value;
//!
//! #[derive(Debug, PartialEq)]
//! pub enum Id {
//!     Coupes,
//!     Sports,
//! }
//!
//! impl Id {
//!     #[raw_value]
//!     pub fn raw_value(&self) -> &str {
//!         match self {
//!             Self::Coupes => "cou",
//!             Self::Sports => "spo",
//!         }
//!     }
//! }
//!
//! assert_eq!("cou", Id::Coupes.raw_value());
//! assert_eq!(Some(Id::Sports), Id::from_raw_value("spo"));
//! assert_eq!(None, Id::from_raw_value("xyz"));
//! ```
//!
//! ## Getting Started
//!
//! Add this crate to the dependencies in your project's Cargo.toml file:
//!
//! ```toml
//! [dependencies.raw-representations]
//! version = "1.0"
//! ```
//!
//! The `std` feature is enabled by default. Turn off default features to
//! generate code that refers to `core` only.
//!
//! ## Links
//!
//! - [Source Code](https://github.com/Eliah-Lakhin/lady-deirdre)
//! - [License Agreement](https://github.com/Eliah-Lakhin/lady-deirdre/blob/master/EULA.md)

pub use raw_representations_derive::raw_value;
