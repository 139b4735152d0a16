//! Arcana — the 21 fixed categories every persona and social link belongs to.
//!
//! Declaration order doubles as the rank used to canonicalize fusion pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arcana {
    Fool,
    Magician,
    Priestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Justice,
    Hermit,
    Fortune,
    Strength,
    HangedMan,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
}

/// Error returned when a user-facing string names no arcana.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArcanaError {
    #[error("missing arcana")]
    Empty,
    #[error("unknown arcana: {0}")]
    Unknown(String),
}

impl Arcana {
    pub const COUNT: usize = 21;

    /// Every arcana in declared order.
    pub const ALL: [Arcana; Arcana::COUNT] = [
        Arcana::Fool,
        Arcana::Magician,
        Arcana::Priestess,
        Arcana::Empress,
        Arcana::Emperor,
        Arcana::Hierophant,
        Arcana::Lovers,
        Arcana::Chariot,
        Arcana::Justice,
        Arcana::Hermit,
        Arcana::Fortune,
        Arcana::Strength,
        Arcana::HangedMan,
        Arcana::Death,
        Arcana::Temperance,
        Arcana::Devil,
        Arcana::Tower,
        Arcana::Star,
        Arcana::Moon,
        Arcana::Sun,
        Arcana::Judgement,
    ];

    /// Position in the declared order (Fool = 0, Judgement = 20).
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Arcana::Fool => "Fool",
            Arcana::Magician => "Magician",
            Arcana::Priestess => "Priestess",
            Arcana::Empress => "Empress",
            Arcana::Emperor => "Emperor",
            Arcana::Hierophant => "Hierophant",
            Arcana::Lovers => "Lovers",
            Arcana::Chariot => "Chariot",
            Arcana::Justice => "Justice",
            Arcana::Hermit => "Hermit",
            Arcana::Fortune => "Fortune",
            Arcana::Strength => "Strength",
            Arcana::HangedMan => "Hanged Man",
            Arcana::Death => "Death",
            Arcana::Temperance => "Temperance",
            Arcana::Devil => "Devil",
            Arcana::Tower => "Tower",
            Arcana::Star => "Star",
            Arcana::Moon => "Moon",
            Arcana::Sun => "Sun",
            Arcana::Judgement => "Judgement",
        }
    }
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse an arcana name (case-insensitive, surrounding whitespace ignored).
///
/// Accepts "Hanged Man", "HangedMan", "hanged_man" and "hanged-man", plus the
/// "Judgment" spelling used in the persona roster. Separators are only
/// allowed between "hanged" and "man".
impl FromStr for Arcana {
    type Err = ParseArcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseArcanaError::Empty);
        }
        let key = trimmed.to_lowercase();
        match key.as_str() {
            "fool" => Ok(Arcana::Fool),
            "magician" => Ok(Arcana::Magician),
            "priestess" => Ok(Arcana::Priestess),
            "empress" => Ok(Arcana::Empress),
            "emperor" => Ok(Arcana::Emperor),
            "hierophant" => Ok(Arcana::Hierophant),
            "lovers" => Ok(Arcana::Lovers),
            "chariot" => Ok(Arcana::Chariot),
            "justice" => Ok(Arcana::Justice),
            "hermit" => Ok(Arcana::Hermit),
            "fortune" => Ok(Arcana::Fortune),
            "strength" => Ok(Arcana::Strength),
            "hanged man" | "hangedman" | "hanged_man" | "hanged-man" => Ok(Arcana::HangedMan),
            "death" => Ok(Arcana::Death),
            "temperance" => Ok(Arcana::Temperance),
            "devil" => Ok(Arcana::Devil),
            "tower" => Ok(Arcana::Tower),
            "star" => Ok(Arcana::Star),
            "moon" => Ok(Arcana::Moon),
            "sun" => Ok(Arcana::Sun),
            "judgement" | "judgment" => Ok(Arcana::Judgement),
            _ => Err(ParseArcanaError::Unknown(trimmed.to_string())),
        }
    }
}

impl Serialize for Arcana {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Arcana {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declared_order() {
        for (i, arcana) in Arcana::ALL.iter().enumerate() {
            assert_eq!(arcana.rank(), i);
        }
        assert_eq!(Arcana::Fool.rank(), 0);
        assert_eq!(Arcana::Judgement.rank(), 20);
    }

    #[test]
    fn display_uses_spaced_name() {
        assert_eq!(Arcana::HangedMan.to_string(), "Hanged Man");
        assert_eq!(Arcana::Star.to_string(), "Star");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Fool".parse(), Ok(Arcana::Fool));
        assert_eq!("MAGICIAN".parse(), Ok(Arcana::Magician));
        assert_eq!("  sun ".parse(), Ok(Arcana::Sun));
    }

    #[test]
    fn parse_accepts_hanged_man_variants() {
        assert_eq!("Hanged Man".parse(), Ok(Arcana::HangedMan));
        assert_eq!("HangedMan".parse(), Ok(Arcana::HangedMan));
        assert_eq!("hanged_man".parse(), Ok(Arcana::HangedMan));
        assert_eq!("hanged-man".parse(), Ok(Arcana::HangedMan));
    }

    #[test]
    fn parse_rejects_separators_inside_other_names() {
        assert!(matches!("S u n".parse::<Arcana>(), Err(ParseArcanaError::Unknown(_))));
        assert!(matches!("Fo-ol".parse::<Arcana>(), Err(ParseArcanaError::Unknown(_))));
        assert!(matches!("Hanged  Man".parse::<Arcana>(), Err(ParseArcanaError::Unknown(_))));
    }

    #[test]
    fn parse_accepts_judgment_spelling() {
        assert_eq!("Judgment".parse(), Ok(Arcana::Judgement));
        assert_eq!("Judgement".parse(), Ok(Arcana::Judgement));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert_eq!(
            "Aeon".parse::<Arcana>(),
            Err(ParseArcanaError::Unknown("Aeon".to_string()))
        );
        assert_eq!("   ".parse::<Arcana>(), Err(ParseArcanaError::Empty));
    }

    #[test]
    fn every_name_parses_back() {
        for arcana in Arcana::ALL {
            assert_eq!(arcana.name().parse(), Ok(arcana));
        }
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&Arcana::HangedMan).unwrap();
        assert_eq!(json, "\"Hanged Man\"");
        let back: Arcana = serde_json::from_str("\"judgment\"").unwrap();
        assert_eq!(back, Arcana::Judgement);
        assert!(serde_json::from_str::<Arcana>("\"Aeon\"").is_err());
    }
}
