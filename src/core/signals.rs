use crate::core::normalizer::split_national;
use crate::domain::model::{NormalizedNumber, SignalSet};
use crate::domain::ports::Blacklist;
use std::collections::HashSet;

/// NANP codes often seen in premium-rate callback scams. Non-exhaustive.
pub const DEFAULT_SUSPICIOUS_AREA_CODES: [&str; 12] = [
    "809", "876", "284", "473", "649", "664", "721", "758", "784", "868", "869", "441",
];

pub const DEFAULT_TOLL_FREE_AREA_CODES: [&str; 7] = ["800", "833", "844", "855", "866", "877", "888"];

const REPEAT_RUN: usize = 6;
const SEQUENCE_RUN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeSets {
    pub suspicious: HashSet<String>,
    pub toll_free: HashSet<String>,
}

impl AreaCodeSets {
    pub fn new<I, J, S, T>(suspicious: I, toll_free: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            suspicious: suspicious.into_iter().map(Into::into).collect(),
            toll_free: toll_free.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for AreaCodeSets {
    fn default() -> Self {
        Self::new(DEFAULT_SUSPICIOUS_AREA_CODES, DEFAULT_TOLL_FREE_AREA_CODES)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignalExtractor {
    area_codes: AreaCodeSets,
}

impl SignalExtractor {
    pub fn new(area_codes: AreaCodeSets) -> Self {
        Self { area_codes }
    }

    pub fn area_codes(&self) -> &AreaCodeSets {
        &self.area_codes
    }

    pub fn extract(&self, normalized: &NormalizedNumber, blacklist: &Blacklist) -> SignalSet {
        let digits = normalized.digits.as_str();
        let (area, _) = split_national(&normalized.national_number);

        SignalSet {
            invalid_length: !normalized.valid,
            repeated_digits: has_repeated_digits(digits, REPEAT_RUN),
            sequential_pattern: has_sequence(digits, SEQUENCE_RUN),
            contains_0000: digits.contains("0000"),
            contains_555: digits.contains("555"),
            suspicious_area_code: area.is_some_and(|a| self.area_codes.suspicious.contains(a)),
            toll_free: area.is_some_and(|a| self.area_codes.toll_free.contains(a)),
            blacklisted: blacklist.contains(digits),
        }
    }
}

/// Runs every detector with the built-in area-code sets.
pub fn extract_signals(normalized: &NormalizedNumber, blacklist: &Blacklist) -> SignalSet {
    SignalExtractor::default().extract(normalized, blacklist)
}

/// True if any single digit repeats `run` or more times back to back.
pub fn has_repeated_digits(digits: &str, run: usize) -> bool {
    let mut streak = 0;
    let mut prev = None;
    for b in digits.bytes() {
        if Some(b) == prev {
            streak += 1;
        } else {
            prev = Some(b);
            streak = 1;
        }
        if streak >= run {
            return true;
        }
    }
    false
}

/// True if any window of `run` digits steps strictly by +1 or strictly by -1.
pub fn has_sequence(digits: &str, run: usize) -> bool {
    if run < 2 {
        return false;
    }
    digits.as_bytes().windows(run).any(|window| {
        let steps = || window.windows(2).map(|p| p[1] as i16 - p[0] as i16);
        steps().all(|d| d == 1) || steps().all(|d| d == -1)
    })
}
