use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum similarity for suggesting a known key in place of an unknown one.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Log an unknown answer, pointing at the closest known key when one is near.
///
/// Empty input is the collector's "not answered" sentinel and is not reported.
fn warn_unrecognized(choice: &str, input: &str, keys: &[&'static str]) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }

    let lowered = input.to_lowercase();
    let suggestion = keys
        .iter()
        .map(|k| (*k, jaro_winkler(k, &lowered)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k);

    match suggestion {
        Some(key) => tracing::warn!(
            choice,
            value = input,
            suggestion = key,
            "unrecognized answer, using default coefficient (did you mean '{}'?)",
            key
        ),
        None => tracing::warn!(
            choice,
            value = input,
            "unrecognized answer, using default coefficient"
        ),
    }
}

/// Declares a closed set of survey answers keyed by their form values.
///
/// Every choice gets an `Unrecognized` variant that absorbs unknown or absent
/// input, so parsing never fails.
macro_rules! survey_choice {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "Option<String>", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Unknown or missing answer.
            #[default]
            Unrecognized,
        }

        impl $name {
            /// All known answers, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form value for this answer (empty for `Unrecognized`).
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Unrecognized => "",
                }
            }

            /// Parse a form value case-insensitively. Never fails.
            pub fn parse(input: &str) -> Self {
                let needle = input.trim().to_lowercase();
                $(
                    if needle == $key {
                        return $name::$variant;
                    }
                )+
                warn_unrecognized(stringify!($name), input, &[$($key),+]);
                $name::Unrecognized
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<Option<String>> for $name {
            fn from(value: Option<String>) -> Self {
                value.map_or($name::Unrecognized, |v| Self::parse(&v))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.key().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $name::Unrecognized => f.write_str("(unrecognized)"),
                    other => f.write_str(other.key()),
                }
            }
        }
    };
}

survey_choice! {
    /// How the respondent usually gets to work.
    CommuteMode {
        CarAlone => "car-alone",
        CarCarpool => "car-carpool",
        ElectricCar => "electric-car",
        PublicTransit => "public-transit",
        Bike => "bike",
        Walk => "walk",
        Remote => "remote",
    }
}

survey_choice! {
    HomeSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

survey_choice! {
    /// Share of household electricity bought on a green tariff.
    GreenEnergy {
        Yes => "yes",
        Partial => "partial",
        No => "no",
    }
}

survey_choice! {
    HeatingSource {
        NaturalGas => "natural-gas",
        Electric => "electric",
        Oil => "oil",
        HeatPump => "heat-pump",
        Other => "other",
    }
}

survey_choice! {
    /// Share of bulbs that are LED or similar.
    LightingEfficiency {
        All => "all",
        Most => "most",
        Some => "some",
        None => "none",
    }
}

survey_choice! {
    Diet {
        Vegan => "vegan",
        Vegetarian => "vegetarian",
        Pescatarian => "pescatarian",
        LowMeat => "low-meat",
        RegularMeat => "regular-meat",
        HighMeat => "high-meat",
    }
}

survey_choice! {
    /// Five-point habit scale shared by several questions.
    Frequency {
        Always => "always",
        Often => "often",
        Sometimes => "sometimes",
        Rarely => "rarely",
        Never => "never",
    }
}

survey_choice! {
    FoodWaste {
        None => "none",
        Little => "little",
        Moderate => "moderate",
        Lot => "lot",
    }
}

survey_choice! {
    /// Recycling uses "usually" where the other scales use "often".
    RecyclingFrequency {
        Always => "always",
        Usually => "usually",
        Sometimes => "sometimes",
        Rarely => "rarely",
        Never => "never",
    }
}

survey_choice! {
    /// How often new clothes or electronics are bought.
    PurchaseFrequency {
        Rarely => "rarely",
        Occasionally => "occasionally",
        Often => "often",
    }
}

survey_choice! {
    WaterUsage {
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
}

survey_choice! {
    PaperUsage {
        Minimal => "minimal",
        Moderate => "moderate",
        High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(CommuteMode::parse("car-alone"), CommuteMode::CarAlone);
        assert_eq!(HeatingSource::parse("heat-pump"), HeatingSource::HeatPump);
        assert_eq!(Diet::parse("regular-meat"), Diet::RegularMeat);
        assert_eq!(FoodWaste::parse("lot"), FoodWaste::Lot);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Diet::parse("  Vegan "), Diet::Vegan);
        assert_eq!(Frequency::parse("ALWAYS"), Frequency::Always);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(CommuteMode::parse("teleport"), CommuteMode::Unrecognized);
        assert_eq!(HomeSize::parse(""), HomeSize::Unrecognized);
        assert_eq!(PaperUsage::parse("car-alone"), PaperUsage::Unrecognized);
    }

    #[test]
    fn test_key_roundtrip_for_all_variants() {
        for mode in CommuteMode::ALL {
            assert_eq!(CommuteMode::parse(mode.key()), *mode);
        }
        for freq in Frequency::ALL {
            assert_eq!(Frequency::parse(freq.key()), *freq);
        }
        assert!(!CommuteMode::ALL.contains(&CommuteMode::Unrecognized));
    }

    #[test]
    fn test_serde_uses_form_keys() {
        let json = serde_json::to_string(&HeatingSource::NaturalGas).unwrap();
        assert_eq!(json, "\"natural-gas\"");

        let parsed: LightingEfficiency = serde_json::from_str("\"most\"").unwrap();
        assert_eq!(parsed, LightingEfficiency::Most);

        let unknown: WaterUsage = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(unknown, WaterUsage::Unrecognized);

        let null: Diet = serde_json::from_str("null").unwrap();
        assert_eq!(null, Diet::Unrecognized);
    }
}
