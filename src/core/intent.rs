//! Rule-based classifier for call transcripts, voicemails and messages.
//!
//! Positive rules push toward spam, negative rules pull away from it at a
//! discount. The net weight is squashed into `[0, 1]` and labelled.

use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

struct RuleDef {
    pattern: &'static str,
    weight: f64,
    reason: &'static str,
}

const POSITIVE_RULES: &[RuleDef] = &[
    RuleDef { pattern: r"free\b|prize|win(?:ner)?\b|lottery|sweepstake", weight: 3.0, reason: "Prize/lottery bait" },
    RuleDef { pattern: r"gift\s*card|voucher", weight: 2.5, reason: "Gift card incentive" },
    RuleDef { pattern: r"act\s*now|urgent|immediately|limited\s*time", weight: 2.0, reason: "Urgency pressure" },
    RuleDef { pattern: r"verify\s+(?:your\s+)?(?:identity|account|details|information)", weight: 3.0, reason: "Verification lure" },
    RuleDef { pattern: r"bank\s+account|routing\s+number|sort\s+code|otp\b|one[-\s]?time\s*password", weight: 2.5, reason: "Sensitive data request" },
    RuleDef { pattern: r"warranty|extended\s+warranty|auto\s+warranty", weight: 3.0, reason: "Car warranty spam" },
    RuleDef { pattern: r"(irs|revenue\s+service|tax\s+office)\b", weight: 3.0, reason: "Government/tax scare" },
    RuleDef { pattern: r"(account|amazon|apple|microsoft).{0,20}(suspended|locked|unusual|suspicious)", weight: 3.0, reason: "Account suspension scare" },
    RuleDef { pattern: r"press\s*(?:1|one)\b|automated\s+message|robocall", weight: 2.5, reason: "Robocall prompt" },
    RuleDef { pattern: r"pre-?approved|guaranteed\s+loan|payday\s+loan", weight: 2.5, reason: "Loan bait" },
    RuleDef { pattern: r"student\s+loan\s+forgiveness|debt\s+relief", weight: 2.5, reason: "Debt relief bait" },
    RuleDef { pattern: r"(bitcoin|crypto(?:currency)?)\b", weight: 2.0, reason: "Crypto lure" },
    RuleDef { pattern: r"delivery\s+failed|final\s+attempt|customs\s+(?:fee|duty)", weight: 2.0, reason: "Fake delivery notice" },
    RuleDef { pattern: r"wire\s+transfer|western\s+union|moneygram", weight: 2.5, reason: "Wire transfer request" },
    RuleDef { pattern: r"gift\s*card|itunes\s*card|steam\s*card", weight: 3.0, reason: "Gift-card payment request" },
    RuleDef { pattern: r"confidential|do\s+not\s+share|secret", weight: 1.5, reason: "Secrecy pressure" },
];

const NEGATIVE_RULES: &[RuleDef] = &[
    RuleDef { pattern: r"interview|schedule|meeting|calendar|agenda", weight: 2.0, reason: "Business scheduling" },
    RuleDef { pattern: r"doctor|clinic|dentist|appointment|pharmacy", weight: 2.0, reason: "Healthcare appointment" },
    RuleDef { pattern: r"delivery|courier|tracking\s+number|order\s+update", weight: 1.5, reason: "Logistics update" },
    RuleDef { pattern: r"invoice|receipt|purchase order|purchase-order|quote", weight: 1.5, reason: "Transactional docs" },
    RuleDef { pattern: r"recruit(er|ing)|candidate|offer\s+letter|hiring", weight: 1.5, reason: "Hiring/recruiting" },
    RuleDef { pattern: r"follow\s*up|as\s+discussed|per\s+our\s+call", weight: 1.2, reason: "Contextual follow-up" },
];

// first match wins
const INTENT_LABELS: &[(&str, &str)] = &[
    ("scam/spam", r"(warranty|sweepstake|lottery|verify\s+account|account\s+suspended|press\s*1|gift\s*card|student\s+loan|debt\s+relief|irs|tax\s+office)"),
    ("sales", r"(offer|quote|plan|subscribe|discount|limited\s*time|save\s+\d+%)"),
    ("support", r"(support|help\s+desk|issue|ticket|troubleshoot|service\s+request)"),
    ("delivery", r"(delivery|courier|package|parcel|driver|drop\s*off|pickup)"),
    ("recruiting", r"(interview|resume|cv|opening|position|role|candidate)"),
    ("collections", r"(past\s+due|overdue|collections|balance\s+due|debt\s+collector)"),
    ("personal", r"(dinner|party|family|catch\s*up|birthday|see\s+you)"),
];

const NEGATIVE_DISCOUNT: f64 = 0.8;
const SCORE_SCALE: f64 = 6.0; // roughly two or three strong positive rules
const SPAM_THRESHOLD: f64 = 0.6;
const LIKELY_SPAM_THRESHOLD: f64 = 0.4;
const MAX_REASONS: usize = 6;
const HIDDEN_CALLER_WEIGHT: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

impl CallDirection {
    /// Only the two exact lowercase names are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inbound" => Some(CallDirection::Inbound),
            "outbound" => Some(CallDirection::Outbound),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub text: String,
    pub caller_id: Option<String>,
    pub direction: Option<CallDirection>,
    pub locale: Option<String>,
}

impl CallContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatch {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    pub pattern: String,
    pub weight: f64,
    pub reason: String,
}

impl RuleMatch {
    /// `kind:pattern[weight]`, as printed in debug logs.
    pub fn summary(&self) -> String {
        let kind = match self.kind {
            MatchKind::Positive => "positive",
            MatchKind::Negative => "negative",
        };
        format!("{}:{}[{}]", kind, self.pattern, self.weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    Spam,
    LikelySpam,
    NotSpam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMeta {
    pub direction: Option<CallDirection>,
    pub caller_id: Option<String>,
    pub locale: Option<String>,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallIntentAnalysis {
    pub is_spam: bool,
    pub label: IntentLabel,
    pub confidence: f64,
    pub intent: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub matches: Vec<RuleMatch>,
    pub meta: CallMeta,
}

impl CallIntentAnalysis {
    pub fn verdict(&self) -> &'static str {
        match self.label {
            IntentLabel::Spam => "Spam intent detected",
            IntentLabel::LikelySpam => "Likely spam intent",
            IntentLabel::NotSpam => "Not spam intent",
        }
    }

    pub fn log_verdict(&self, debug: bool) {
        tracing::info!("{} (confidence: {:.0}%)", self.verdict(), self.confidence * 100.0);
        if debug {
            tracing::info!("Reasons: {}", self.reasons.join("; "));
            if !self.matches.is_empty() {
                let matched: Vec<String> = self.matches.iter().map(RuleMatch::summary).collect();
                tracing::info!("Matched signals: {}", matched.join(", "));
            }
        }
    }
}

struct Rule {
    regex: Regex,
    source: &'static str,
    weight: f64,
    reason: &'static str,
}

pub struct IntentDetector {
    positive: Vec<Rule>,
    negative: Vec<Rule>,
    intents: Vec<(&'static str, Regex)>,
    exclamations: Regex,
    links: Regex,
    hidden_caller: Regex,
}

fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn compile_rules(defs: &[RuleDef]) -> Result<Vec<Rule>> {
    defs.iter()
        .map(|d| -> Result<Rule> {
            Ok(Rule {
                regex: case_insensitive(d.pattern)?,
                source: d.pattern,
                weight: d.weight,
                reason: d.reason,
            })
        })
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl IntentDetector {
    pub fn new() -> Result<Self> {
        let intents = INTENT_LABELS
            .iter()
            .map(|(label, pattern)| -> Result<(&'static str, Regex)> {
                Ok((*label, case_insensitive(pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            positive: compile_rules(POSITIVE_RULES)?,
            negative: compile_rules(NEGATIVE_RULES)?,
            intents,
            exclamations: Regex::new(r"!{2,}")?,
            links: case_insensitive(r"https?://")?,
            hidden_caller: Regex::new(r"unknown|private|blocked|no\s*caller\s*id")?,
        })
    }

    pub fn detect(&self, ctx: &CallContext) -> CallIntentAnalysis {
        let content = ctx.text.trim();
        let mut matches = Vec::new();
        let mut pos = 0.0;
        let mut neg = 0.0;

        for rule in self.positive.iter().filter(|r| r.regex.is_match(content)) {
            matches.push(rule_match(MatchKind::Positive, rule.source, rule.weight, rule.reason));
            pos += rule.weight;
        }
        for rule in self.negative.iter().filter(|r| r.regex.is_match(content)) {
            matches.push(rule_match(MatchKind::Negative, rule.source, rule.weight, rule.reason));
            neg += rule.weight * NEGATIVE_DISCOUNT;
        }

        let bangs = self.exclamations.find_iter(content).count();
        if bangs > 0 {
            let weight = (0.5 * bangs as f64).min(1.5);
            matches.push(rule_match(MatchKind::Positive, "!{2,}", weight, "Excessive punctuation"));
            pos += weight;
        }

        let links = self.links.find_iter(content).count();
        if links > 0 {
            let weight = (0.7 * links as f64).min(1.5);
            matches.push(rule_match(MatchKind::Positive, "https?://", weight, "Contains external link(s)"));
            pos += weight;
        }

        if let Some(caller_id) = ctx.caller_id.as_deref().filter(|c| !c.is_empty()) {
            if self.hidden_caller.is_match(&caller_id.to_lowercase()) {
                matches.push(rule_match(
                    MatchKind::Positive,
                    "blocked/unknown callerId",
                    HIDDEN_CALLER_WEIGHT,
                    "Hidden caller ID",
                ));
                pos += HIDDEN_CALLER_WEIGHT;
            }
        }

        let score = ((pos - neg) / SCORE_SCALE).clamp(0.0, 1.0);
        let confidence = (0.3 + score * 0.7).clamp(0.0, 1.0);

        let (label, is_spam) = if score >= SPAM_THRESHOLD {
            (IntentLabel::Spam, true)
        } else if score >= LIKELY_SPAM_THRESHOLD {
            (IntentLabel::LikelySpam, false)
        } else {
            (IntentLabel::NotSpam, false)
        };

        let intent = if is_spam {
            "scam/spam"
        } else {
            self.intents
                .iter()
                .find(|(_, re)| re.is_match(content))
                .map(|(label, _)| *label)
                .unwrap_or("unknown")
        };

        let mut reasons: Vec<String> = Vec::new();
        for m in matches
            .iter()
            .filter(|m| !is_spam || m.kind == MatchKind::Positive)
            .take(MAX_REASONS)
        {
            if !reasons.contains(&m.reason) {
                reasons.push(m.reason.clone());
            }
        }

        tracing::debug!(score, pos, neg, matched = matches.len(), "classified call text");

        CallIntentAnalysis {
            is_spam,
            label,
            confidence: round2(confidence),
            intent: intent.to_string(),
            score: round2(score),
            reasons,
            matches,
            meta: CallMeta {
                direction: ctx.direction,
                caller_id: ctx.caller_id.clone().filter(|c| !c.is_empty()),
                locale: ctx.locale.clone().filter(|l| !l.is_empty()),
                length: content.chars().count(),
            },
        }
    }
}

fn rule_match(kind: MatchKind, pattern: &str, weight: f64, reason: &str) -> RuleMatch {
    RuleMatch {
        kind,
        pattern: pattern.to_string(),
        weight,
        reason: reason.to_string(),
    }
}
