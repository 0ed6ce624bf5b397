//! The enumerated form options and their bilingual display labels.
//!
//! Every option carries a stable machine token (used in the flat-file log
//! and over the wire) and one display label per supported language. The
//! token is identical to the serde representation, so a value that goes
//! through JSON and a value that goes through the log file spell the same.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::locale::Language;

macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal, $en:literal, $zh:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Stable machine token, identical to the serde representation.
            pub fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            pub fn parse_token(token: &str) -> Result<Self, CoreError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|o| o.token() == token)
                    .ok_or_else(|| CoreError::UnknownOption(format!(
                        "{}: {token}", stringify!($name)
                    )))
            }

            pub fn label(self, language: Language) -> &'static str {
                match (self, language) {
                    $( (Self::$variant, Language::En) => $en, )+
                    $( (Self::$variant, Language::Zh) => $zh, )+
                }
            }
        }
    };
}

form_option! {
    /// Where the client reports pain. A submission selects 1–3 of these.
    PainArea {
        Neck => "neck", "Neck", "颈";
        Shoulders => "shoulders", "Shoulders", "肩";
        UpperBack => "upper_back", "Upper Back", "上背";
        LowerBack => "lower_back", "Lower Back", "下腰";
        Hips => "hips", "Hips", "臀";
        Legs => "legs", "Legs", "腿";
        Knees => "knees", "Knees", "膝";
        Feet => "feet", "Feet", "足";
        Head => "head", "Head", "头";
        Arms => "arms", "Arms", "手";
    }
}

form_option! {
    PainSide {
        Both => "both", "Both", "两侧";
        Left => "left", "Left", "左";
        Right => "right", "Right", "右";
        Center => "center", "Center", "中";
    }
}

form_option! {
    /// How long the client has had the complaint.
    Duration {
        Under24Hours => "under_24h", "<24h (new injury)", "<24小时 (新伤)";
        OneWeek => "one_week", "About a week", "一周";
        OneMonth => "one_month", "About a month", "一月";
        OverThreeMonths => "over_3_months", ">3 months (chronic)", ">3个月 (长期)";
    }
}

form_option! {
    PainDescriptor {
        Sharp => "sharp", "Sharp", "刺痛";
        Dull => "dull", "Dull", "酸痛";
        Stiff => "stiff", "Stiff", "僵硬";
        Numb => "numb", "Numb", "麻木";
    }
}

form_option! {
    /// Daily activity / occupation bucket.
    Activity {
        DeskJob => "desk_job", "Desk Job", "办公";
        Standing => "standing", "Standing", "久站";
        Labor => "labor", "Manual Labor", "体力";
        Athlete => "athlete", "Athlete", "运动";
    }
}

form_option! {
    /// Sitting hours per day. Variants are declared in ascending order,
    /// so the derived discriminant order is the bucket order.
    SittingHours {
        Under2 => "under_2h", "<2h", "<2小时";
        TwoToFour => "2_4h", "2-4h", "2-4小时";
        FourToEight => "4_8h", "4-8h", "4-8小时";
        EightPlus => "8h_plus", "8h+", "8小时以上";
    }
}

form_option! {
    Goal {
        PainRelief => "pain_relief", "Pain Relief", "止痛";
        Relax => "relax", "Relaxation", "放松";
        Sleep => "sleep", "Better Sleep", "助眠";
        Tissue => "tissue", "Deep Tissue Release", "松解";
    }
}

/// Join a slice of options into the comma-joined token string used by the
/// flat-file log (e.g. `"neck,lower_back"`).
pub fn join_tokens<O: Copy>(options: &[O], token: fn(O) -> &'static str) -> String {
    options
        .iter()
        .map(|o| token(*o))
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-joined token string back into options. Empty input yields
/// an empty set.
pub fn split_tokens<O>(
    joined: &str,
    parse: fn(&str) -> Result<O, CoreError>,
) -> Result<Vec<O>, CoreError> {
    joined
        .split(',')
        .filter(|t| !t.is_empty())
        .map(parse)
        .collect()
}
