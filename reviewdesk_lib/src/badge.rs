//! Badge variants for status-like cells.

use serde::Serialize;

use reviewdesk_api::types::Sentiment;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Info => "info",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
        }
    }
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label with its variant.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn sentiment_variant(sentiment: Sentiment) -> BadgeVariant {
    match sentiment {
        Sentiment::Positive => BadgeVariant::Success,
        Sentiment::Neutral => BadgeVariant::Warning,
        Sentiment::Negative => BadgeVariant::Error,
    }
}

pub fn sentiment_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Neutral => "Neutral",
        Sentiment::Negative => "Negative",
    }
}

pub fn sentiment_badge(sentiment: Sentiment) -> Badge {
    Badge::new(sentiment_label(sentiment), sentiment_variant(sentiment))
}

/// Metric status: `"success"` is a success, anything else an error.
pub fn status_badge(status: &str) -> Badge {
    let variant = if status == "success" {
        BadgeVariant::Success
    } else {
        BadgeVariant::Error
    };
    Badge::new(status, variant)
}

pub fn sent_badge(sent: bool) -> Badge {
    if sent {
        Badge::new("Yes", BadgeVariant::Success)
    } else {
        Badge::new("No", BadgeVariant::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_mapping() {
        assert_eq!(sentiment_variant(Sentiment::Positive), BadgeVariant::Success);
        assert_eq!(sentiment_variant(Sentiment::Neutral), BadgeVariant::Warning);
        assert_eq!(sentiment_variant(Sentiment::Negative), BadgeVariant::Error);
        assert_eq!(sentiment_badge(Sentiment::Neutral).to_string(), "Neutral");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(status_badge("success").variant, BadgeVariant::Success);
        assert_eq!(status_badge("timeout").variant, BadgeVariant::Error);
        assert_eq!(status_badge("Success").variant, BadgeVariant::Error);
    }

    #[test]
    fn sent_mapping() {
        assert_eq!(sent_badge(true), Badge::new("Yes", BadgeVariant::Success));
        assert_eq!(sent_badge(false).variant, BadgeVariant::Default);
    }
}
