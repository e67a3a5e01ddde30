use serde::{Deserialize, Serialize};

/// Coarse display category derived from an OpenWeather icon code.
///
/// The code table only covers the codes the service is known to emit for
/// these buckets; everything else (including a missing code) resolves to
/// [`ConditionIcon::DEFAULT`]. Current-conditions and forecast lookups share
/// this table, so both fall back to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionIcon {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl ConditionIcon {
    pub const DEFAULT: ConditionIcon = ConditionIcon::Clear;

    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("01d" | "01n") => ConditionIcon::Clear,
            Some("02d" | "02n" | "03d" | "03n") => ConditionIcon::Cloud,
            Some("04d" | "04n") => ConditionIcon::Drizzle,
            Some("09d" | "09n" | "10d" | "10n") => ConditionIcon::Rain,
            Some("13d" | "13n") => ConditionIcon::Snow,
            _ => Self::DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionIcon::Clear => "clear",
            ConditionIcon::Cloud => "cloud",
            ConditionIcon::Drizzle => "drizzle",
            ConditionIcon::Rain => "rain",
            ConditionIcon::Snow => "snow",
        }
    }
}

impl std::fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_categories() {
        assert_eq!(ConditionIcon::from_code(Some("01d")), ConditionIcon::Clear);
        assert_eq!(ConditionIcon::from_code(Some("03n")), ConditionIcon::Cloud);
        assert_eq!(ConditionIcon::from_code(Some("04d")), ConditionIcon::Drizzle);
        assert_eq!(ConditionIcon::from_code(Some("09n")), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::from_code(Some("10d")), ConditionIcon::Rain);
        assert_eq!(ConditionIcon::from_code(Some("13d")), ConditionIcon::Snow);
    }

    #[test]
    fn day_and_night_variants_agree() {
        for (day, night) in [("01d", "01n"), ("02d", "02n"), ("09d", "09n"), ("13d", "13n")] {
            assert_eq!(
                ConditionIcon::from_code(Some(day)),
                ConditionIcon::from_code(Some(night)),
            );
        }
    }

    #[test]
    fn unknown_and_missing_codes_share_the_fallback() {
        assert_eq!(ConditionIcon::from_code(Some("99x")), ConditionIcon::DEFAULT);
        assert_eq!(ConditionIcon::from_code(None), ConditionIcon::DEFAULT);
        assert_eq!(
            ConditionIcon::from_code(Some("99x")),
            ConditionIcon::from_code(None),
        );
    }
}
