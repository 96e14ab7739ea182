// Keyword extraction - frequency-ranked content words per utterance

/// Common words that never count as keywords, checked after the length
/// filter (tokens of 3 characters or fewer are dropped regardless)
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "also", "because", "been", "before", "being",
    "between", "both", "cannot", "could", "does", "doing", "down", "during", "each", "either",
    "every", "from", "further", "gonna", "have", "having", "here", "hers", "herself", "himself",
    "into", "itself", "just", "like", "made", "make", "many", "more", "most", "much", "myself",
    "okay", "only", "other", "ours", "over", "own", "really", "right", "same", "should", "some",
    "such", "than", "that", "their", "theirs", "them", "then", "there", "these", "they", "thing",
    "things", "this", "those", "through", "under", "until", "very", "want", "well", "went",
    "were", "what", "when", "where", "which", "while", "will", "with", "would", "your", "yours",
];

/// Is this token a keyword candidate?
fn is_candidate(token: &str) -> bool {
    token.len() > 3 && !STOPWORDS.contains(&token)
}

/// Extract the top `max` keywords from an utterance.
///
/// Lowercases, strips punctuation, drops short and stopworded tokens, then
/// ranks by in-utterance frequency with ties broken by first occurrence.
/// Deterministic for a given input.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty());

    // (keyword, count, first occurrence index), in first-seen order
    let mut ranked: Vec<(String, usize, usize)> = Vec::new();
    for (index, token) in tokens.enumerate() {
        if !is_candidate(token) {
            continue;
        }
        match ranked.iter_mut().find(|(kw, _, _)| kw == token) {
            Some((_, count, _)) => *count += 1,
            None => ranked.push((token.to_string(), 1, index)),
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(max).map(|(kw, _, _)| kw).collect()
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
