// Command classifier - matches a final utterance against the fixed voice
// grammar, or passes it through as content speech
//
// Matching is pure: execution and all side effects belong to the session
// router. Priority order is navigation > control > generation > none, with
// the numeric goto pattern tried after the fixed-phrase set and a fuzzy
// tier catching near-miss recognitions of short command phrases.

mod grammar;

pub use grammar::{CommandIntent, IntentGroup, GOTO_PATTERN, GRAMMAR};

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use strsim::normalized_levenshtein;

use crate::recognition::Utterance;

/// Parameter key carrying the goto target slide
pub const PARAM_SLIDE: &str = "slide";

/// A classified command. Never mutated after creation except for the
/// router marking it executed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// The transcribed text that matched
    pub raw_text: String,
    pub intent: CommandIntent,
    /// Recognition confidence of the source utterance
    pub confidence: f64,
    /// Intent parameters (e.g., target slide number for goto)
    pub parameters: HashMap<String, String>,
    /// Set by the router once the command's side effect ran
    pub executed: bool,
}

impl Command {
    fn new(utterance: &Utterance, intent: CommandIntent) -> Self {
        Self {
            raw_text: utterance.text.clone(),
            intent,
            confidence: utterance.confidence,
            parameters: HashMap::new(),
            executed: false,
        }
    }

    /// Goto target, when present and parseable
    pub fn target_slide(&self) -> Option<u32> {
        self.parameters
            .get(PARAM_SLIDE)
            .and_then(|s| s.parse().ok())
    }
}

/// Result of classifying one final utterance
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Command(Command),
    /// No intent matched; route to the feature extractor
    ContentSpeech(Utterance),
}

/// Configuration for the classifier's fuzzy tier
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Minimum normalized similarity between the whole utterance and a
    /// grammar phrase for a fuzzy match (0.0 to 1.0)
    pub fuzzy_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.85,
        }
    }
}

/// Grammar-based command classifier
pub struct CommandClassifier {
    config: ClassifierConfig,
    goto_pattern: Regex,
}

impl Default for CommandClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandClassifier {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            // The pattern is a checked constant; this cannot fail
            goto_pattern: Regex::new(GOTO_PATTERN).expect("invalid goto pattern"),
        }
    }

    /// Normalize for matching: lowercase, punctuation (except apostrophes)
    /// to spaces, whitespace collapsed
    fn normalize(input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        let stripped: String = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '\'' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Classify a final utterance against the grammar.
    ///
    /// Callers hand in finals only; interim results are never classified.
    pub fn classify(&self, utterance: &Utterance) -> Classification {
        let normalized = Self::normalize(&utterance.text);
        if normalized.is_empty() {
            return Classification::ContentSpeech(utterance.clone());
        }

        // Fixed phrases, in declaration (priority) order
        for (intent, phrases) in GRAMMAR {
            for phrase in *phrases {
                if normalized.contains(phrase) {
                    return Classification::Command(Command::new(utterance, *intent));
                }
            }
        }

        // Numeric goto, checked after the fixed-phrase set
        if let Some(captures) = self.goto_pattern.captures(&normalized) {
            if let Some(n) = grammar::parse_slide_number(&captures[1]) {
                let mut command = Command::new(utterance, CommandIntent::GotoSlide);
                command
                    .parameters
                    .insert(PARAM_SLIDE.to_string(), n.to_string());
                return Classification::Command(command);
            }
        }

        // Fuzzy tier: whole-utterance similarity against each phrase,
        // catching near-miss recognitions like "nxt slide"
        let mut best: Option<(CommandIntent, f64)> = None;
        for (intent, phrases) in GRAMMAR {
            for phrase in *phrases {
                let score = normalized_levenshtein(&normalized, phrase);
                if score >= self.config.fuzzy_threshold {
                    match best {
                        Some((_, top)) if top >= score => {}
                        _ => best = Some((*intent, score)),
                    }
                }
            }
        }
        if let Some((intent, score)) = best {
            crate::debug!(
                "[classifier] fuzzy match {} ({:.2}) for {:?}",
                intent,
                score,
                utterance.text
            );
            return Classification::Command(Command::new(utterance, intent));
        }

        Classification::ContentSpeech(utterance.clone())
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
