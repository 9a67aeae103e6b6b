use spamsense::{
    normalize, ChainedBlacklist, EnvBlacklist, PhoneAnalyzer, RiskLevel, SpamsenseConfig,
    StaticBlacklist,
};

fn analyzer() -> PhoneAnalyzer<StaticBlacklist> {
    PhoneAnalyzer::new(StaticBlacklist::default())
}

#[test]
fn test_caribbean_callback_number_is_high_risk() {
    let result = analyzer().analyze("+1 (809) 555-1234");

    assert_eq!(result.normalized.digits, "18095551234");
    assert_eq!(result.normalized.e164.as_deref(), Some("+18095551234"));
    assert_eq!(result.normalized.area_code.as_deref(), Some("809"));
    assert_eq!(result.normalized.exchange.as_deref(), Some("555"));
    assert!(!result.signals.invalid_length);
    assert!(result.signals.suspicious_area_code);
    assert!(result.signals.contains_555);
    assert_eq!(result.spam_score, 60);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_sequential_number_is_medium_risk() {
    let result = analyzer().analyze("123-456-7890");

    assert_eq!(result.normalized.digits, "1234567890");
    assert_eq!(result.normalized.national_number, "1234567890");
    assert!(result.signals.sequential_pattern);
    assert!(!result.signals.invalid_length);
    assert!(!result.signals.contains_555);
    assert_eq!(result.spam_score, 30);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn test_non_numeric_input_is_invalid_and_high_risk() {
    let result = analyzer().analyze("abc");

    assert_eq!(result.normalized.digits, "");
    assert_eq!(result.normalized.e164, None);
    assert!(result.signals.invalid_length);
    assert_eq!(result.spam_score, 80);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_toll_free_with_555_takes_higher_weight() {
    let result = analyzer().analyze("8005551212");

    assert_eq!(result.normalized.area_code.as_deref(), Some("800"));
    assert!(result.signals.toll_free);
    assert!(result.signals.contains_555);
    assert_eq!(result.spam_score, 25);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn test_blacklist_overrides_everything() {
    let analyzer = PhoneAnalyzer::new(StaticBlacklist::new(["5551234567"]));
    let result = analyzer.analyze("555-123-4567");

    assert!(result.signals.blacklisted);
    assert!(result.signals.sequential_pattern);
    assert_eq!(result.spam_score, 100);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_plain_number_is_low_risk() {
    let result = analyzer().analyze("(212) 867-5309");

    assert_eq!(result.spam_score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn test_repeated_digits_number() {
    let result = analyzer().analyze("212-777-7777");

    assert!(result.signals.repeated_digits);
    assert_eq!(result.spam_score, 40);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn test_env_blacklist_is_read_per_call() {
    let var = "SPAMSENSE_IT_BLACKLIST_PER_CALL";
    std::env::remove_var(var);
    let analyzer = PhoneAnalyzer::new(EnvBlacklist::new(var));

    assert!(!analyzer.analyze("212-867-5309").signals.blacklisted);

    std::env::set_var(var, "2128675309, 18095551234");
    let result = analyzer.analyze("212-867-5309");
    assert!(result.signals.blacklisted);
    assert_eq!(result.spam_score, 100);

    std::env::set_var(var, "");
    assert!(!analyzer.analyze("212-867-5309").signals.blacklisted);

    std::env::remove_var(var);
}

#[test]
fn test_config_file_drives_area_codes_and_blacklist() {
    let config = SpamsenseConfig::from_toml_str(
        r#"
[blacklist]
env_var = "SPAMSENSE_IT_CONFIG_UNSET"
numbers = ["212 867 5309"]

[area_codes]
suspicious = ["646"]
toll_free = []
"#,
    )
    .unwrap();
    let analyzer = config.build_analyzer();

    assert_eq!(analyzer.analyze("2128675309").spam_score, 100);
    assert!(analyzer.analyze("646-222-3141").signals.suspicious_area_code);

    let caribbean = analyzer.analyze("809-222-3141");
    assert!(!caribbean.signals.suspicious_area_code);
    assert_eq!(caribbean.spam_score, 0);

    let toll_free = analyzer.analyze("800-222-3141");
    assert!(!toll_free.signals.toll_free);
}

#[test]
fn test_chained_blacklist_sources_combine() {
    let var = "SPAMSENSE_IT_CHAINED";
    std::env::set_var(var, "8765551234");
    let analyzer = PhoneAnalyzer::new(
        ChainedBlacklist::new()
            .with(StaticBlacklist::new(["2128675309"]))
            .with(EnvBlacklist::new(var)),
    );

    assert!(analyzer.analyze("212-867-5309").signals.blacklisted);
    assert!(analyzer.analyze("876-555-1234").signals.blacklisted);
    std::env::remove_var(var);
}

#[test]
fn test_every_input_produces_a_result() {
    let inputs = [
        "",
        " ",
        "+",
        "0",
        "++1 (((800))) 555--1212",
        "1234567890123456789012345678901234567890",
        "call me at eight",
        "\u{0}\u{1}\u{7f}",
        "１２３４５６７８９０",
    ];
    for raw in inputs {
        let result = analyzer().analyze(raw);
        assert_eq!(result.input, raw);
        assert!(result.spam_score <= 100);
        assert_eq!(result.normalized.national_number.is_empty(), normalize(raw).digits.is_empty());
    }
}

#[test]
fn test_json_keys_match_wire_format() {
    let value = serde_json::to_value(analyzer().analyze("8005551212")).unwrap();

    let mut top: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    top.sort();
    assert_eq!(top, ["input", "normalized", "risk_level", "signals", "spam_score"]);

    let mut normalized: Vec<_> = value["normalized"].as_object().unwrap().keys().cloned().collect();
    normalized.sort();
    assert_eq!(
        normalized,
        ["area_code", "country_code", "digits", "e164", "exchange", "national_number"]
    );

    assert_eq!(value["signals"].as_object().unwrap().len(), 8);
    assert_eq!(value["risk_level"], "medium");
}
