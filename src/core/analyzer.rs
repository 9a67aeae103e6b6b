use crate::adapters::EnvBlacklist;
use crate::core::normalizer::{normalize, split_national};
use crate::core::scorer::score;
use crate::core::signals::{AreaCodeSets, SignalExtractor};
use crate::domain::model::{NormalizedView, RiskResult};
use crate::domain::ports::BlacklistSource;

/// Normalizer → signal extractor → scorer, with the blacklist loaded fresh
/// from its source on every call.
pub struct PhoneAnalyzer<B: BlacklistSource> {
    blacklist: B,
    extractor: SignalExtractor,
}

impl<B: BlacklistSource> PhoneAnalyzer<B> {
    pub fn new(blacklist: B) -> Self {
        Self::with_area_codes(blacklist, AreaCodeSets::default())
    }

    pub fn with_area_codes(blacklist: B, area_codes: AreaCodeSets) -> Self {
        Self {
            blacklist,
            extractor: SignalExtractor::new(area_codes),
        }
    }

    pub fn analyze(&self, raw: &str) -> RiskResult {
        let normalized = normalize(raw);
        let blacklist = self.blacklist.load();
        let signals = self.extractor.extract(&normalized, &blacklist);
        let (spam_score, risk_level) = score(&signals);

        tracing::debug!(
            digits = %normalized.digits,
            valid = normalized.valid,
            blacklist_size = blacklist.len(),
            spam_score,
            risk_level = risk_level.as_str(),
            "analyzed phone number"
        );

        let (area_code, exchange) = split_national(&normalized.national_number);
        let normalized = NormalizedView {
            area_code: area_code.map(str::to_string),
            exchange: exchange.map(str::to_string),
            digits: normalized.digits,
            e164: normalized.e164,
            country_code: normalized.country_code,
            national_number: normalized.national_number,
        };

        RiskResult {
            input: raw.to_string(),
            normalized,
            signals,
            spam_score,
            risk_level,
        }
    }
}

impl Default for PhoneAnalyzer<EnvBlacklist> {
    fn default() -> Self {
        Self::new(EnvBlacklist::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticBlacklist;
    use crate::domain::model::RiskLevel;

    #[test]
    fn test_result_echoes_input_and_parts() {
        let analyzer = PhoneAnalyzer::new(StaticBlacklist::default());
        let result = analyzer.analyze("(212) 867-5309");

        assert_eq!(result.input, "(212) 867-5309");
        assert_eq!(result.normalized.area_code.as_deref(), Some("212"));
        assert_eq!(result.normalized.exchange.as_deref(), Some("867"));
        assert_eq!(result.spam_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_invalid_number_has_no_area_code() {
        let analyzer = PhoneAnalyzer::new(StaticBlacklist::default());
        let result = analyzer.analyze("911");

        assert_eq!(result.normalized.national_number, "911");
        assert_eq!(result.normalized.area_code, None);
        assert_eq!(result.normalized.exchange, None);
        assert!(result.signals.invalid_length);
        assert_eq!(result.spam_score, 80);
    }

    #[test]
    fn test_serialized_shape() {
        let analyzer = PhoneAnalyzer::new(StaticBlacklist::default());
        let value = serde_json::to_value(analyzer.analyze("abc")).unwrap();

        assert_eq!(value["input"], "abc");
        assert_eq!(value["normalized"]["digits"], "");
        assert!(value["normalized"]["e164"].is_null());
        assert!(value["normalized"]["country_code"].is_null());
        assert_eq!(value["normalized"]["national_number"], "");
        assert!(value["normalized"]["area_code"].is_null());
        assert!(value["normalized"]["exchange"].is_null());
        assert_eq!(value["signals"]["invalid_length"], true);
        assert_eq!(value["spam_score"], 80);
        assert_eq!(value["risk_level"], "high");
    }
}
