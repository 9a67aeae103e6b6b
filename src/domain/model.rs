use serde::{Deserialize, Serialize};

/// Canonical form of a raw phone-number string.
///
/// `national_number` is always populated; on unrecognized input it falls back
/// to the bare digit string so the signal detectors still have something to
/// scan. `valid` implies both `country_code` and `e164` are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    pub raw: String,
    pub digits: String,
    pub country_code: Option<String>,
    pub national_number: String,
    pub e164: Option<String>,
    pub valid: bool,
}

/// The `normalized` block of a [`RiskResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedView {
    pub digits: String,
    pub e164: Option<String>,
    pub country_code: Option<String>,
    pub national_number: String,
    pub area_code: Option<String>,
    pub exchange: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    InvalidLength,
    RepeatedDigits,
    SequentialPattern,
    Contains0000,
    Contains555,
    SuspiciousAreaCode,
    TollFree,
    Blacklisted,
}

impl Signal {
    pub const ALL: [Signal; 8] = [
        Signal::InvalidLength,
        Signal::RepeatedDigits,
        Signal::SequentialPattern,
        Signal::Contains0000,
        Signal::Contains555,
        Signal::SuspiciousAreaCode,
        Signal::TollFree,
        Signal::Blacklisted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::InvalidLength => "invalid_length",
            Signal::RepeatedDigits => "repeated_digits",
            Signal::SequentialPattern => "sequential_pattern",
            Signal::Contains0000 => "contains_0000",
            Signal::Contains555 => "contains_555",
            Signal::SuspiciousAreaCode => "suspicious_area_code",
            Signal::TollFree => "toll_free",
            Signal::Blacklisted => "blacklisted",
        }
    }

    /// Score contribution when the signal fires. Scores take the max, never the sum.
    pub fn weight(&self) -> u8 {
        match self {
            Signal::Blacklisted => 100,
            Signal::InvalidLength => 80,
            Signal::SuspiciousAreaCode => 60,
            Signal::RepeatedDigits => 40,
            Signal::SequentialPattern => 30,
            Signal::Contains0000 | Signal::Contains555 => 25,
            Signal::TollFree => 10,
        }
    }
}

/// Independent boolean detectors computed for one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub invalid_length: bool,
    pub repeated_digits: bool,
    pub sequential_pattern: bool,
    pub contains_0000: bool,
    pub contains_555: bool,
    pub suspicious_area_code: bool,
    pub toll_free: bool,
    pub blacklisted: bool,
}

impl SignalSet {
    pub fn get(&self, signal: Signal) -> bool {
        match signal {
            Signal::InvalidLength => self.invalid_length,
            Signal::RepeatedDigits => self.repeated_digits,
            Signal::SequentialPattern => self.sequential_pattern,
            Signal::Contains0000 => self.contains_0000,
            Signal::Contains555 => self.contains_555,
            Signal::SuspiciousAreaCode => self.suspicious_area_code,
            Signal::TollFree => self.toll_free,
            Signal::Blacklisted => self.blacklisted,
        }
    }

    pub fn set(&mut self, signal: Signal, value: bool) {
        let slot = match signal {
            Signal::InvalidLength => &mut self.invalid_length,
            Signal::RepeatedDigits => &mut self.repeated_digits,
            Signal::SequentialPattern => &mut self.sequential_pattern,
            Signal::Contains0000 => &mut self.contains_0000,
            Signal::Contains555 => &mut self.contains_555,
            Signal::SuspiciousAreaCode => &mut self.suspicious_area_code,
            Signal::TollFree => &mut self.toll_free,
            Signal::Blacklisted => &mut self.blacklisted,
        };
        *slot = value;
    }

    pub fn active(&self) -> impl Iterator<Item = Signal> + '_ {
        Signal::ALL.into_iter().filter(move |s| self.get(*s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const HIGH_THRESHOLD: u8 = 60;
    pub const MEDIUM_THRESHOLD: u8 = 25;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Final output of one phone analysis; the only type crossing the tool boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub input: String,
    pub normalized: NormalizedView,
    pub signals: SignalSet,
    pub spam_score: u8,
    pub risk_level: RiskLevel,
}
