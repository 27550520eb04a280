//! Jurisdiction domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! states {
    ($($variant:ident => $code:literal,)+) => {
        /// Jurisdiction an operation is filed in
        ///
        /// Serialized as the two-letter code the service expects.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum State {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl State {
            /// Every supported jurisdiction, in declaration order
            pub const ALL: &'static [State] = &[$(State::$variant,)+];

            /// Wire code of the jurisdiction
            pub fn code(&self) -> &'static str {
                match self {
                    $(State::$variant => $code,)+
                }
            }

            /// Variant name, used for display in reports
            pub fn name(&self) -> &'static str {
                match self {
                    $(State::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

// Codes follow the service, which uses GE for Georgia.
states! {
    Kansas => "KS",
    Wyoming => "WY",
    Florida => "FL",
    Kentucky => "KY",
    Vermont => "VT",
    Arkansas => "AR",
    California => "CA",
    NorthCarolina => "NC",
    Idaho => "ID",
    Alabama => "AL",
    Louisiana => "LA",
    Georgia => "GE",
    Tennessee => "TN",
    Iowa => "IA",
    NewJersey => "NJ",
    SouthDakota => "SD",
    Oregon => "OR",
    Alaska => "AK",
    Missouri => "MO",
    Maryland => "MD",
    Nebraska => "NE",
    Nevada => "NV",
    SouthCarolina => "SC",
    Wisconsin => "WI",
    Pennsylvania => "PA",
    Washington => "WA",
    Colorado => "CO",
    Delaware => "DE",
    NewYork => "NY",
    NewHampshire => "NH",
    NewMexico => "NM",
    RhodeIsland => "RI",
    NorthDakota => "ND",
    Indiana => "IN",
}

impl Default for State {
    fn default() -> Self {
        State::Florida
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known jurisdiction code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state code '{0}'")]
pub struct UnknownState(pub String);

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .iter()
            .copied()
            .find(|state| state.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}
