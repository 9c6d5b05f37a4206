//! Prompt builders and reply strings for the AI writing tools.
//!
//! The server, the browser client, and the CLI all share these so that a
//! reply shown inline (including every failure text) reads the same
//! everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful, professional AI assistant.";
pub const MENTOR_INSTRUCTION: &str = "You are a creative mentor.";

pub const MISSING_KEY_REPLY: &str = "Error: API Key not configured.";
pub const EMPTY_REPLY: &str = "No response generated.";
pub const FAILURE_REPLY: &str = "An error occurred while communicating with the AI. Please try again.";
pub const RATE_LIMITED_REPLY: &str = "Too many AI requests. Please wait a moment and try again.";

pub const DEFAULT_RECIPIENT: &str = "Hiring Manager";

/// Body of `POST /api/ai/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
}

/// Reply of `POST /api/ai/generate`; `text` may carry one of the failure
/// replies above.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

// =============================================================================
// TONE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Self::Professional, Self::Casual, Self::Friendly, Self::Formal];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolError::Invalid(format!("unknown tone: {s}")))
    }
}

// =============================================================================
// TOOL KINDS
// =============================================================================

/// Knobs that shape the prompt besides the user's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptOptions {
    pub tone: Tone,
    pub recipient: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self { tone: Tone::default(), recipient: DEFAULT_RECIPIENT.to_owned() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiTool {
    #[default]
    Rewrite,
    Email,
    Explain,
    Resume,
}

impl AiTool {
    pub const ALL: [AiTool; 4] = [Self::Rewrite, Self::Email, Self::Explain, Self::Resume];

    /// Stable id, used for tab ids and `ai-{id}` tool ids.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Rewrite => "rewrite",
            Self::Email => "email",
            Self::Explain => "explain",
            Self::Resume => "resume",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Rewrite => "AI Text Rewriter",
            Self::Email => "Email Generator",
            Self::Explain => "Topic Explainer",
            Self::Resume => "Resume Bullet Points",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Rewrite => "Paste text to rewrite...",
            Self::Email => "Describe the email (e.g., Requesting a sick leave)...",
            Self::Explain => "What topic should I explain? (e.g., Quantum Physics)...",
            Self::Resume => "Describe your job role and achievements...",
        }
    }

    /// Whether the recipient field applies.
    #[must_use]
    pub fn uses_recipient(self) -> bool {
        matches!(self, Self::Email)
    }

    /// Prompt for `input`, or `None` when there is nothing to send.
    #[must_use]
    pub fn build_prompt(self, input: &str, options: &PromptOptions) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        let tone = options.tone;
        Some(match self {
            Self::Rewrite => format!("Rewrite the following text to be more {tone}: \"{input}\""),
            Self::Email => format!("Write a {tone} email to {}. Context: {input}", options.recipient),
            Self::Explain => format!("Explain \"{input}\" simply for a general audience. Use analogies."),
            Self::Resume => format!("Generate impactful resume bullet points for: {input}. Use action verbs."),
        })
    }
}

impl FromStr for AiTool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| ToolError::Invalid(format!("unknown AI tool: {s}")))
    }
}

/// Prompt for the student project-idea generator; `None` for a blank domain.
#[must_use]
pub fn project_ideas_prompt(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }
    Some(format!("Give me 5 unique project ideas for {domain} students."))
}
