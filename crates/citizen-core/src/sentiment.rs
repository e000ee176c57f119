//! Lexicon-based sentiment scoring for citizen feedback.
//!
//! A lexicon entry counts once per text no matter how often it occurs, and
//! matching is a case-insensitive substring test against the whole text.

use citizen_schema::{SentimentLabel, SentimentResult};

pub const EMPTY_INPUT_NOTICE: &str = "Please enter some text to analyze.";

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "satisfied",
    "happy",
    "pleased",
    "improved",
    "better",
    "thanks",
    "thank you",
    "helpful",
    "efficient",
    "quick",
    "fast",
    "love",
    "appreciate",
    "perfect",
    "outstanding",
    "brilliant",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointed",
    "angry",
    "frustrated",
    "poor",
    "worse",
    "broken",
    "issue",
    "problem",
    "slow",
    "delay",
    "complaint",
    "not working",
    "hate",
    "worst",
    "useless",
    "waste",
    "disgusting",
    "annoying",
];

/// Two ordered, de-duplicated sets of lower-case phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: normalize_entries(positive),
            negative: normalize_entries(negative),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}

// An empty entry would match every text, so it is dropped along with repeats.
fn normalize_entries<I>(entries: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.as_ref().trim().to_lowercase();
        if !entry.is_empty() && !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    Scored(SentimentResult),
    /// The text was empty after trimming.
    EmptyInput,
}

impl ScoreOutcome {
    pub fn result(&self) -> Option<&SentimentResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::EmptyInput => None,
        }
    }

    /// Markdown shown to the person who submitted the text.
    pub fn render(&self) -> String {
        match self {
            Self::Scored(result) => render_report(result),
            Self::EmptyInput => EMPTY_INPUT_NOTICE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn score(&self, text: &str) -> ScoreOutcome {
        if text.trim_matches(is_separator).is_empty() {
            return ScoreOutcome::EmptyInput;
        }

        let lowered = text.to_lowercase();
        let positive_count = membership_count(&self.lexicon.positive, &lowered);
        let negative_count = membership_count(&self.lexicon.negative, &lowered);
        let word_count = text
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .count();

        let label = if positive_count > negative_count {
            SentimentLabel::Positive
        } else if negative_count > positive_count {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        // One token can contain several entries ("goodbetter"), which would
        // push the raw ratio past 1.
        let matched = positive_count.max(negative_count) as f64;
        let confidence = (matched / (word_count as f64 + 1.0)).min(1.0);

        ScoreOutcome::Scored(SentimentResult {
            label,
            confidence,
            positive_count,
            negative_count,
            word_count,
        })
    }
}

fn membership_count(entries: &[String], lowered: &str) -> usize {
    entries
        .iter()
        .filter(|entry| lowered.contains(entry.as_str()))
        .count()
}

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F),
/// which also delimit words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn render_report(result: &SentimentResult) -> String {
    format!(
        "**Sentiment Analysis Result:**\n\n\
         🎭 **Sentiment:** {emoji} {label}\n\
         📊 **Confidence:** {confidence:.2}\n\
         👍 **Positive words:** {pos}\n\
         👎 **Negative words:** {neg}\n\n\
         **Analysis Details:**\n\
         - Total words analyzed: {words}\n\
         - Positive indicators: {pos}\n\
         - Negative indicators: {neg}\n",
        emoji = result.label.emoji(),
        label = result.label,
        confidence = result.confidence,
        pos = result.positive_count,
        neg = result.negative_count,
        words = result.word_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str) -> SentimentResult {
        match SentimentScorer::default().score(text) {
            ScoreOutcome::Scored(result) => result,
            ScoreOutcome::EmptyInput => panic!("expected a score for {text:?}"),
        }
    }

    #[test]
    fn builtin_lexicons_have_22_entries() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.positive().len(), 22);
        assert_eq!(lexicon.negative().len(), 22);
    }

    #[test]
    fn empty_and_blank_input_yield_notice() {
        let scorer = SentimentScorer::default();
        for text in ["", "   ", "\n\t "] {
            assert_eq!(scorer.score(text), ScoreOutcome::EmptyInput);
            assert_eq!(scorer.score(text).render(), EMPTY_INPUT_NOTICE);
        }
    }

    #[test]
    fn thank_you_for_excellent_service_is_positive() {
        let result = scored("Thank you for the excellent customer service today.");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.positive_count >= 2);
        assert_eq!(result.negative_count, 0);
        assert_eq!(result.word_count, 8);
    }

    #[test]
    fn slow_website_is_negative() {
        let result = scored("The website is slow and not user-friendly at all.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.positive_count, 0);
        assert_eq!(result.word_count, 9);
        assert!((result.confidence - 0.1).abs() < 1e-9);
    }

    #[test]
    fn repetition_counts_once() {
        let result = scored("good good good");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.word_count, 3);
        assert!((result.confidence - 0.25).abs() < 1e-9);
    }

    #[test]
    fn no_matches_is_neutral_with_zero_confidence() {
        let result = scored("The office opens at nine.");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.positive_count, 0);
        assert_eq!(result.negative_count, 0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn tie_is_neutral() {
        let result = scored("Great staff but a terrible queue");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = scored("EXCELLENT and FAST");
        assert_eq!(result.positive_count, 2);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn substring_matches_inside_words() {
        // "issue" inside "reissued", "good" inside "goodness"
        let result = scored("My goodness, the card was reissued");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 1);
    }

    #[test]
    fn multi_word_phrases_match() {
        let result = scored("the portal is not working again");
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn thanks_and_thank_you_are_distinct_entries() {
        let result = scored("thanks, thank you");
        assert_eq!(result.positive_count, 2);
    }

    #[test]
    fn confidence_is_clamped_for_dense_tokens() {
        let result = scored("goodbetterfastquick");
        assert_eq!(result.word_count, 1);
        assert_eq!(result.positive_count, 4);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn information_separators_split_words() {
        let result = scored("a\u{1c}b good");
        assert_eq!(result.word_count, 3);
        assert_eq!(result.positive_count, 1);
    }

    #[test]
    fn separator_only_text_is_empty_input() {
        let scorer = SentimentScorer::default();
        assert!(matches!(
            scorer.score("\u{1c}\u{1f} \t"),
            ScoreOutcome::EmptyInput
        ));
    }

    #[test]
    fn counts_bounded_by_lexicon_size() {
        let text = POSITIVE_WORDS.join(" ").repeat(5);
        let result = scored(&text);
        assert_eq!(result.positive_count, POSITIVE_WORDS.len());
        assert!(result.confidence <= 1.0);
    }

    #[test]
    fn custom_lexicon_is_normalized() {
        let lexicon = Lexicon::new(["Bien", "bien", " ", "Rápido"], ["Malo"]);
        assert_eq!(lexicon.positive(), ["bien", "rápido"]);
        assert_eq!(lexicon.negative(), ["malo"]);

        let scorer = SentimentScorer::new(lexicon);
        let result = scorer.score("Servicio BIEN y rápido").result().cloned().unwrap();
        assert_eq!(result.positive_count, 2);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn report_contains_all_figures() {
        let report = SentimentScorer::default()
            .score("I really appreciate the quick service at the passport office!")
            .render();
        assert!(report.contains("**Sentiment Analysis Result:**"));
        assert!(report.contains("😊 Positive"));
        assert!(report.contains("📊 **Confidence:** 0.18"));
        assert!(report.contains("👍 **Positive words:** 2"));
        assert!(report.contains("👎 **Negative words:** 0"));
        assert!(report.contains("- Total words analyzed: 10"));
    }
}
