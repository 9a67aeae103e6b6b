use crate::domain::model::{RiskLevel, SignalSet};

/// Worst single indicator wins: the score is the highest weight among the
/// signals that fired, or 0 when none did.
pub fn spam_score(signals: &SignalSet) -> u8 {
    signals.active().map(|s| s.weight()).max().unwrap_or(0)
}

pub fn score(signals: &SignalSet) -> (u8, RiskLevel) {
    let score = spam_score(signals);
    (score, RiskLevel::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Signal;

    fn set_from_mask(mask: u16) -> SignalSet {
        let mut set = SignalSet::default();
        for (i, signal) in Signal::ALL.into_iter().enumerate() {
            set.set(signal, mask & (1 << i) != 0);
        }
        set
    }

    #[test]
    fn test_no_signals_is_low() {
        assert_eq!(score(&SignalSet::default()), (0, RiskLevel::Low));
    }

    #[test]
    fn test_single_signal_weights() {
        let expected = [
            (Signal::Blacklisted, 100, RiskLevel::High),
            (Signal::InvalidLength, 80, RiskLevel::High),
            (Signal::SuspiciousAreaCode, 60, RiskLevel::High),
            (Signal::RepeatedDigits, 40, RiskLevel::Medium),
            (Signal::SequentialPattern, 30, RiskLevel::Medium),
            (Signal::Contains0000, 25, RiskLevel::Medium),
            (Signal::Contains555, 25, RiskLevel::Medium),
            (Signal::TollFree, 10, RiskLevel::Low),
        ];
        for (signal, weight, level) in expected {
            let mut set = SignalSet::default();
            set.set(signal, true);
            assert_eq!(score(&set), (weight, level), "{}", signal.as_str());
        }
    }

    #[test]
    fn test_weights_do_not_add_up() {
        let mut set = SignalSet::default();
        set.toll_free = true;
        set.contains_555 = true;
        set.contains_0000 = true;
        set.sequential_pattern = true;
        assert_eq!(score(&set), (30, RiskLevel::Medium));
    }

    #[test]
    fn test_adding_a_signal_never_lowers_the_score() {
        for mask in 0u16..256 {
            let base = spam_score(&set_from_mask(mask));
            for bit in 0..8 {
                let grown = spam_score(&set_from_mask(mask | (1 << bit)));
                assert!(grown >= base, "mask={mask:#010b} bit={bit}");
            }
        }
    }

    #[test]
    fn test_score_is_always_in_range() {
        for mask in 0u16..256 {
            let (s, _) = score(&set_from_mask(mask));
            assert!(s <= 100);
        }
    }
}
