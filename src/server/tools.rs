use crate::core::analyzer::PhoneAnalyzer;
use crate::core::intent::{CallContext, CallDirection, IntentDetector};
use crate::domain::ports::BlacklistSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const CHECK_PHONE_TOOL: &str = "spamsense_check_phone";
pub const DETECT_INTENT_TOOL: &str = "detect_call_intent";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<TextContent>,
    pub is_error: bool,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(text)
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => Self::error(format!("Error: {}", e)),
        }
    }
}

/// A callable exposed to the tool host. Failures are reported in the result,
/// never as protocol errors.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;
    async fn call(&self, args: Value) -> CallToolResult;
}

pub struct CheckPhoneTool<B: BlacklistSource> {
    analyzer: PhoneAnalyzer<B>,
}

impl<B: BlacklistSource> CheckPhoneTool<B> {
    pub fn new(analyzer: PhoneAnalyzer<B>) -> Self {
        Self { analyzer }
    }
}

#[derive(Deserialize)]
struct CheckPhoneArgs {
    number: String,
}

#[async_trait]
impl<B: BlacklistSource> Tool for CheckPhoneTool<B> {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: CHECK_PHONE_TOOL,
            description: "Analyze a phone number for spam risk using pattern heuristics and optional blacklist. Returns JSON.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "number": { "type": "string", "description": "Phone number in any format" }
                },
                "required": ["number"]
            }),
        }
    }

    async fn call(&self, args: Value) -> CallToolResult {
        let args: CheckPhoneArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(_) => {
                return CallToolResult::error(format!("Error: Invalid arguments for {}", CHECK_PHONE_TOOL))
            }
        };

        let result = self.analyzer.analyze(&args.number);
        tracing::info!(
            spam_score = result.spam_score,
            risk_level = result.risk_level.as_str(),
            "checked phone number"
        );
        CallToolResult::json(&result)
    }
}

pub struct DetectIntentTool {
    detector: IntentDetector,
}

impl DetectIntentTool {
    pub fn new(detector: IntentDetector) -> Self {
        Self { detector }
    }
}

fn str_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

#[async_trait]
impl Tool for DetectIntentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: DETECT_INTENT_TOOL,
            description: "Analyzes call or message text to determine if the intent is spam/scam, with confidence and reasons.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "Call transcript, voicemail, or message content to analyze"
                    },
                    "callerId": { "type": "string", "description": "Caller ID or phone number (optional)" },
                    "direction": {
                        "type": "string",
                        "description": "Call direction (inbound/outbound)",
                        "enum": ["inbound", "outbound"]
                    },
                    "locale": { "type": "string", "description": "Locale hint like en-US (optional)" },
                    "debug": { "type": "boolean", "description": "Include extra debug details in stderr logs" }
                },
                "required": ["text"],
                "additionalProperties": false
            }),
        }
    }

    async fn call(&self, args: Value) -> CallToolResult {
        let text = match str_arg(&args, "text").filter(|t| !t.trim().is_empty()) {
            Some(text) => text,
            None => {
                return CallToolResult {
                    is_error: true,
                    ..CallToolResult::json(&json!({
                        "error": "Missing required 'text' string in arguments"
                    }))
                }
            }
        };

        let ctx = CallContext {
            text,
            caller_id: str_arg(&args, "callerId"),
            direction: str_arg(&args, "direction").and_then(|d| CallDirection::parse(&d)),
            locale: str_arg(&args, "locale"),
        };
        let analysis = self.detector.detect(&ctx);

        analysis.log_verdict(args.get("debug").and_then(Value::as_bool).unwrap_or(false));

        CallToolResult::json(&analysis)
    }
}
