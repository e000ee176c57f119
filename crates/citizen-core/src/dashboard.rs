use chrono::{DateTime, Utc};
use citizen_schema::TIMESTAMP_FORMAT;

use crate::conversation::ConversationLog;

pub const UNINITIALIZED_STATS: &str =
    "**⚠️ Session Not Started**\n\nStart a chat session to view statistics.";
pub const UNINITIALIZED_ANALYTICS: &str =
    "**Analytics Unavailable**\n\nStart a chat session to see conversation analytics.";

/// Figures derived from one session's log at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub total_conversations: usize,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub first_interaction: Option<DateTime<Utc>>,
    pub last_interaction: Option<DateTime<Utc>>,
    pub avg_question_words: f64,
    pub avg_answer_words: f64,
}

impl DashboardSnapshot {
    pub fn capture(log: &ConversationLog, model: &str, now: DateTime<Utc>) -> Self {
        let records = log.records();
        let total = records.len();
        let (question_words, answer_words) = records.iter().fold((0usize, 0usize), |acc, r| {
            (
                acc.0 + r.user_input().split_whitespace().count(),
                acc.1 + r.ai_response().split_whitespace().count(),
            )
        });
        let average = |sum: usize| if total == 0 { 0.0 } else { sum as f64 / total as f64 };

        Self {
            total_conversations: total,
            generated_at: now,
            model: model.to_string(),
            first_interaction: records.first().map(|r| r.timestamp()),
            last_interaction: records.last().map(|r| r.timestamp()),
            avg_question_words: average(question_words),
            avg_answer_words: average(answer_words),
        }
    }

    pub fn render_stats(&self) -> String {
        format!(
            "**📊 Quick Statistics**\n\n\
             🗣️ **Total Conversations:** {total}\n\
             ⏰ **Last Updated:** {updated}\n\
             🤖 **Citizen AI Status:** Active\n\
             🌐 **Platform:** Web Interface\n\n\
             **Recent Activity:**\n\
             - Conversations in session: {total}\n\
             - Citizen AI Model: {model}\n",
            total = self.total_conversations,
            updated = self.generated_at.format(TIMESTAMP_FORMAT),
            model = self.model,
        )
    }

    pub fn render_analytics(&self) -> String {
        let when = |at: Option<DateTime<Utc>>| {
            at.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "—".to_string())
        };
        format!(
            "**📈 Analytics Overview**\n\n\
             **Conversation Trends:**\n\
             - Total interactions: {total}\n\
             - First interaction: {first}\n\
             - Latest interaction: {last}\n\n\
             **Message Size:**\n\
             - Average question length: {q:.1} words\n\
             - Average answer length: {a:.1} words\n",
            total = self.total_conversations,
            first = when(self.first_interaction),
            last = when(self.last_interaction),
            q = self.avg_question_words,
            a = self.avg_answer_words,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use citizen_schema::InteractionRecord;

    fn at(sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, sec).unwrap()
    }

    #[test]
    fn empty_log_snapshot() {
        let snapshot = DashboardSnapshot::capture(&ConversationLog::new(), "m", at(0));
        assert_eq!(snapshot.total_conversations, 0);
        assert_eq!(snapshot.first_interaction, None);
        assert_eq!(snapshot.avg_answer_words, 0.0);
        assert!(snapshot.render_analytics().contains("- First interaction: —"));
    }

    #[test]
    fn snapshot_counts_and_averages() {
        let mut log = ConversationLog::new();
        log.append(InteractionRecord::at(at(1), "passport fees", "one two three four"));
        log.append(InteractionRecord::at(at(5), "voter id help please", "ok"));

        let snapshot = DashboardSnapshot::capture(&log, "openai/gpt-oss-120b", at(9));
        assert_eq!(snapshot.total_conversations, 2);
        assert_eq!(snapshot.first_interaction, Some(at(1)));
        assert_eq!(snapshot.last_interaction, Some(at(5)));
        assert!((snapshot.avg_question_words - 3.0).abs() < 1e-9);
        assert!((snapshot.avg_answer_words - 2.5).abs() < 1e-9);

        let stats = snapshot.render_stats();
        assert!(stats.contains("🗣️ **Total Conversations:** 2"));
        assert!(stats.contains("⏰ **Last Updated:** 2024-05-01 12:00:09 UTC"));
        assert!(stats.contains("- Citizen AI Model: openai/gpt-oss-120b"));

        let analytics = snapshot.render_analytics();
        assert!(analytics.contains("- Latest interaction: 2024-05-01 12:00:05 UTC"));
        assert!(analytics.contains("- Average answer length: 2.5 words"));
    }
}
