// Fixed voice grammar - intent enum, phrase sets, and the goto-slide pattern

use serde::{Deserialize, Serialize};

use crate::events::actions;

/// Priority group an intent belongs to. Navigation outranks control,
/// control outranks generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentGroup {
    Navigation,
    Control,
    Generation,
}

/// Closed set of recognized command intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandIntent {
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    GotoSlide,
    StartPresentation,
    StopPresentation,
    PausePresentation,
    ResumePresentation,
    StartRecording,
    StopRecording,
    GenerateQuiz,
    CreateSummary,
    ShowNotes,
}

impl CommandIntent {
    pub fn group(&self) -> IntentGroup {
        match self {
            CommandIntent::NextSlide
            | CommandIntent::PreviousSlide
            | CommandIntent::FirstSlide
            | CommandIntent::LastSlide
            | CommandIntent::GotoSlide => IntentGroup::Navigation,
            CommandIntent::StartPresentation
            | CommandIntent::StopPresentation
            | CommandIntent::PausePresentation
            | CommandIntent::ResumePresentation
            | CommandIntent::StartRecording
            | CommandIntent::StopRecording => IntentGroup::Control,
            CommandIntent::GenerateQuiz | CommandIntent::CreateSummary | CommandIntent::ShowNotes => {
                IntentGroup::Generation
            }
        }
    }

    /// Stable snake_case name for payloads and logs
    pub fn name(&self) -> &'static str {
        match self {
            CommandIntent::NextSlide => "next_slide",
            CommandIntent::PreviousSlide => "previous_slide",
            CommandIntent::FirstSlide => "first_slide",
            CommandIntent::LastSlide => "last_slide",
            CommandIntent::GotoSlide => "goto_slide",
            CommandIntent::StartPresentation => "start_presentation",
            CommandIntent::StopPresentation => "stop_presentation",
            CommandIntent::PausePresentation => "pause_presentation",
            CommandIntent::ResumePresentation => "resume_presentation",
            CommandIntent::StartRecording => "start_recording",
            CommandIntent::StopRecording => "stop_recording",
            CommandIntent::GenerateQuiz => "generate_quiz",
            CommandIntent::CreateSummary => "create_summary",
            CommandIntent::ShowNotes => "show_notes",
        }
    }

    /// Command bus action the slide viewer interprets
    pub fn action(&self) -> &'static str {
        match self {
            CommandIntent::NextSlide => actions::NEXT_SLIDE,
            CommandIntent::PreviousSlide => actions::PREV_SLIDE,
            CommandIntent::FirstSlide => actions::FIRST_SLIDE,
            CommandIntent::LastSlide => actions::LAST_SLIDE,
            CommandIntent::GotoSlide => actions::GOTO_SLIDE,
            CommandIntent::StartPresentation => actions::START_PRESENTATION,
            CommandIntent::StopPresentation => actions::STOP_PRESENTATION,
            CommandIntent::PausePresentation => actions::PAUSE_PRESENTATION,
            CommandIntent::ResumePresentation => actions::RESUME_PRESENTATION,
            CommandIntent::StartRecording => actions::START_RECORDING,
            CommandIntent::StopRecording => actions::STOP_RECORDING,
            CommandIntent::GenerateQuiz => actions::GENERATE_QUIZ,
            CommandIntent::CreateSummary => actions::GENERATE_SUMMARY,
            CommandIntent::ShowNotes => actions::SHOW_NOTES,
        }
    }
}

impl std::fmt::Display for CommandIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed phrase sets per intent, in match priority order.
/// First matching phrase wins; the goto-slide pattern is tried after these.
pub const GRAMMAR: &[(CommandIntent, &[&str])] = &[
    // Navigation
    (CommandIntent::NextSlide, &["next slide", "next page"]),
    (
        CommandIntent::PreviousSlide,
        &["previous slide", "previous page", "go back"],
    ),
    (CommandIntent::FirstSlide, &["first slide", "first page"]),
    (CommandIntent::LastSlide, &["last slide", "last page"]),
    // Control
    (
        CommandIntent::StartPresentation,
        &["start presentation", "start the presentation", "begin presentation"],
    ),
    (
        CommandIntent::StopPresentation,
        &[
            "stop presentation",
            "stop the presentation",
            "end presentation",
            "end session",
            "end the session",
        ],
    ),
    (
        CommandIntent::PausePresentation,
        &["pause presentation", "pause the presentation"],
    ),
    (
        CommandIntent::ResumePresentation,
        &["resume presentation", "resume the presentation"],
    ),
    (
        CommandIntent::StartRecording,
        &["start recording", "begin recording"],
    ),
    (
        CommandIntent::StopRecording,
        &["stop recording", "end recording"],
    ),
    // Generation
    (
        CommandIntent::GenerateQuiz,
        &["generate quiz", "generate a quiz", "create quiz", "create a quiz"],
    ),
    (
        CommandIntent::CreateSummary,
        &["create summary", "create a summary", "generate summary", "generate a summary"],
    ),
    (CommandIntent::ShowNotes, &["show notes", "show my notes"]),
];

/// Pattern for "go to slide N" / "jump to page N", digits or number words
pub const GOTO_PATTERN: &str = r"(?:go|jump)\s+to\s+(?:slide|page)\s+([a-z0-9]+)";

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
];

/// Parse a slide reference: digits first, then spoken number words
pub fn parse_slide_number(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, n)| *n)
}

#[cfg(test)]
#[path = "grammar_test.rs"]
mod tests;
