//! Display value normalization
//!
//! The vehicle reports most states as `snake_case` tokens. Each sensor
//! descriptor names one of these transforms to turn the raw token into the
//! label shown to the user. All transforms are pure and never fail.

use serde::Serialize;

/// Raw value to display label transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// Leave the raw value untouched
    Identity,

    /// Title-case each word: `park` -> `Park`
    Title,

    /// Underscores to spaces, then title-case: `ready_to_install` -> `Ready To Install`
    Humanize,

    /// Fixed label table; unknown values pass through unchanged
    Lookup(&'static [(&'static str, &'static str)]),

    /// [`Normalizer::Humanize`], then restore the casing of an acronym:
    /// `ota_ready` -> `OTA Ready`
    HumanizeAcronym(&'static str),
}

impl Normalizer {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Normalizer::Identity => raw.to_string(),
            Normalizer::Title => title_case(raw),
            Normalizer::Humanize => humanize(raw),
            Normalizer::Lookup(map) => lookup(map, raw).unwrap_or(raw).to_string(),
            Normalizer::HumanizeAcronym(acronym) => {
                // Must run after title-casing or the acronym is lowercased again
                humanize(raw).replace(&title_case(acronym), acronym)
            }
        }
    }

    /// Labels this normalizer can produce from a known raw value
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        let map: &'static [(&'static str, &'static str)] = match self {
            Normalizer::Lookup(map) => map,
            _ => &[],
        };
        map.iter().map(|(_, label)| *label)
    }
}

fn lookup(map: &'static [(&'static str, &'static str)], raw: &str) -> Option<&'static str> {
    map.iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, label)| *label)
}

/// Uppercase every cased character that follows an uncased one and
/// lowercase the rest (`level_1` -> `Level_1`, `3rd` -> `3Rd`).
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_cased = false;

    for c in raw.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }

    out
}

/// Replace underscores with spaces, then [`title_case`]
pub fn humanize(raw: &str) -> String {
    title_case(&raw.replace('_', " "))
}
