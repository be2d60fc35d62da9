//! catalog of satisfaction indicators (KPIs) and the transfer modes used by
//! the transfer convenience model.
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// key performance indicators modeled by the satisfaction coefficients.
/// coefficient tables refer to these by their code, e.g. `PAI`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kpi {
    /// physical accessibility
    Pai,
    /// temporal accessibility
    Tai,
    /// economic accessibility
    Eai,
    /// train frequency
    Tf,
    /// scheduled speed
    Tv,
    /// on-time performance
    Totp,
    /// transfer convenience
    Tci,
    /// station comfort
    Sc,
    /// in-train comfort
    Tc,
    /// transfer facility comfort
    Tpc,
}

/// the standard modes of the transfer convenience model, in display order.
pub const TCI_MODES: [&str; 5] = ["대중교통", "도보", "승용차", "택시/배웅", "PM"];

impl Kpi {
    pub const ALL: [Kpi; 10] = [
        Kpi::Pai,
        Kpi::Tai,
        Kpi::Eai,
        Kpi::Tf,
        Kpi::Tv,
        Kpi::Totp,
        Kpi::Tci,
        Kpi::Sc,
        Kpi::Tc,
        Kpi::Tpc,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Kpi::Pai => "PAI",
            Kpi::Tai => "TAI",
            Kpi::Eai => "EAI",
            Kpi::Tf => "TF",
            Kpi::Tv => "TV",
            Kpi::Totp => "TOTP",
            Kpi::Tci => "TCI",
            Kpi::Sc => "SC",
            Kpi::Tc => "TC",
            Kpi::Tpc => "TPC",
        }
    }

    /// the name shown to dashboard users.
    pub fn full_name(&self) -> &'static str {
        match self {
            Kpi::Pai => "물리적 접근성",
            Kpi::Tai => "시간적 접근성",
            Kpi::Eai => "경제적 접근성",
            Kpi::Tf => "운행횟수",
            Kpi::Tv => "표정속도",
            Kpi::Totp => "열차운행 정시성",
            Kpi::Tci => "환승시설 편의성",
            Kpi::Sc => "역사 시설 쾌적성",
            Kpi::Tc => "열차이용 쾌적성",
            Kpi::Tpc => "환승시설 쾌적성",
        }
    }

    /// exact match on the indicator code, as written in coefficient tables.
    pub fn from_code(code: &str) -> Option<Kpi> {
        Kpi::ALL.into_iter().find(|k| k.code() == code)
    }

    pub fn from_full_name(name: &str) -> Option<Kpi> {
        Kpi::ALL.into_iter().find(|k| k.full_name() == name)
    }
}

impl FromStr for Kpi {
    type Err = String;

    /// accepts either the code or the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Kpi::from_code(&trimmed.to_uppercase())
            .or_else(|| Kpi::from_full_name(trimmed))
            .ok_or_else(|| format!("unknown indicator '{s}'"))
    }
}

impl Display for Kpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::Kpi;

    #[test]
    fn test_code_and_name_lookup() {
        for kpi in Kpi::ALL {
            assert_eq!(Kpi::from_code(kpi.code()), Some(kpi));
            assert_eq!(kpi.full_name().parse::<Kpi>(), Ok(kpi));
        }
        assert_eq!("tci".parse::<Kpi>(), Ok(Kpi::Tci));
        assert_eq!(Kpi::from_code("tci"), None);
        assert!("XYZ".parse::<Kpi>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Kpi::Totp).expect("serializes");
        assert_eq!(json, "\"TOTP\"");
    }
}
