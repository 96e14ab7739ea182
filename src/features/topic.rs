// Topic completion - per-slide coverage estimate
//
// Heuristic stand-in for topic modelling: accumulated speech length for
// the current slide against a fixed target, capped at 100. Monotone
// non-decreasing while the slide stays put; reset when it changes.

/// Tracks topic coverage for the slide currently being presented
#[derive(Debug, Clone)]
pub struct TopicTracker {
    /// Slide the accumulator belongs to (None before the first utterance)
    slide: Option<u32>,
    accumulated_chars: usize,
    target_chars: usize,
}

impl TopicTracker {
    pub fn new(target_chars: usize) -> Self {
        Self {
            slide: None,
            accumulated_chars: 0,
            // Guard against a zero target turning every utterance into 100%
            target_chars: target_chars.max(1),
        }
    }

    /// Fold one content utterance into the tracker and return the topic
    /// completion estimate (0-100) for its slide.
    pub fn observe(&mut self, slide: u32, text: &str) -> f64 {
        if self.slide != Some(slide) {
            self.slide = Some(slide);
            self.accumulated_chars = 0;
        }
        self.accumulated_chars += text.trim().chars().count();
        (self.accumulated_chars as f64 / self.target_chars as f64 * 100.0).min(100.0)
    }

    /// Completion for the tracked slide without folding anything in
    pub fn completion(&self) -> f64 {
        (self.accumulated_chars as f64 / self.target_chars as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
#[path = "topic_test.rs"]
mod tests;
