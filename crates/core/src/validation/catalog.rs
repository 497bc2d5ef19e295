//! Localized messages for field validation failures.
//!
//! Maps a failed rule (`ValidationError::code` plus its params) on a named
//! field to a human-readable sentence. Rules without a dedicated sentence
//! fall back to a generic "field is invalid" message so a failure never
//! translates to an empty string.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use validator::ValidationError;

/// Language used for validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported validation locale '{0}' (expected 'zh' or 'en')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" => Ok(Locale::Zh),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        })
    }
}

/// Normalized view of a failed rule, independent of language.
#[derive(Debug, PartialEq, Eq)]
enum Rule {
    Required,
    LengthBetween(String, String),
    LengthAtLeast(String),
    LengthAtMost(String),
    RangeBetween(String, String),
    Email,
    Url,
    Other,
}

impl Rule {
    fn classify(error: &ValidationError) -> Self {
        match &*error.code {
            "required" => Rule::Required,
            "length" => {
                let min = param(error, "min");
                let max = param(error, "max");
                let blank = matches!(error.params.get("value"), Some(Value::String(s)) if s.is_empty());
                match (min, max) {
                    (Some(min), _) if blank && min != "0" => Rule::Required,
                    (Some(min), Some(max)) => Rule::LengthBetween(min, max),
                    (Some(min), None) => Rule::LengthAtLeast(min),
                    (None, Some(max)) => Rule::LengthAtMost(max),
                    (None, None) => Rule::Other,
                }
            }
            "range" => match (param(error, "min"), param(error, "max")) {
                (Some(min), Some(max)) => Rule::RangeBetween(min, max),
                _ => Rule::Other,
            },
            "email" => Rule::Email,
            "url" => Rule::Url,
            _ => Rule::Other,
        }
    }
}

fn param(error: &ValidationError, name: &str) -> Option<String> {
    match error.params.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Translate one failed rule on `field` into a sentence in `locale`.
///
/// A custom `message` attached to the rule wins over the catalogue.
pub fn translate(locale: Locale, field: &str, error: &ValidationError) -> String {
    if let Some(message) = error.message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }

    match locale {
        Locale::Zh => zh(field, Rule::classify(error)),
        Locale::En => en(field, Rule::classify(error)),
    }
}

fn zh(field: &str, rule: Rule) -> String {
    match rule {
        Rule::Required => format!("{field}为必填字段"),
        Rule::LengthBetween(min, max) => format!("{field}长度必须在{min}到{max}个字符之间"),
        Rule::LengthAtLeast(min) => format!("{field}长度必须至少为{min}个字符"),
        Rule::LengthAtMost(max) => format!("{field}长度不能超过{max}个字符"),
        Rule::RangeBetween(min, max) => format!("{field}必须在{min}和{max}之间"),
        Rule::Email => format!("{field}必须是一个有效的邮箱"),
        Rule::Url => format!("{field}必须是一个有效的URL"),
        Rule::Other => format!("{field}格式不正确"),
    }
}

fn en(field: &str, rule: Rule) -> String {
    match rule {
        Rule::Required => format!("{field} is a required field"),
        Rule::LengthBetween(min, max) => {
            format!("{field} must be between {min} and {max} characters in length")
        }
        Rule::LengthAtLeast(min) => format!("{field} must be at least {min} characters in length"),
        Rule::LengthAtMost(max) => {
            format!("{field} must be a maximum of {max} characters in length")
        }
        Rule::RangeBetween(min, max) => format!("{field} must be between {min} and {max}"),
        Rule::Email => format!("{field} must be a valid email address"),
        Rule::Url => format!("{field} must be a valid URL"),
        Rule::Other => format!("{field} is invalid"),
    }
}
