use serde::{Deserialize, Serialize};

use super::ParseError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(EventKind {
    Appointment => "appointment",
    History => "history",
    Medication => "medication",
    Vitals => "vitals",
    Labs => "labs",
    Document => "document",
});

impl EventKind {
    /// Every category, in canonical display order. Passing this to the
    /// filter yields the unfiltered timeline.
    pub const ALL: [EventKind; 6] = [
        EventKind::Appointment,
        EventKind::History,
        EventKind::Medication,
        EventKind::Vitals,
        EventKind::Labs,
        EventKind::Document,
    ];
}

str_enum!(Theme {
    Light => "light",
    Dark => "dark",
});
