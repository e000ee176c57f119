use std::fmt::Write as _;
use std::num::NonZeroUsize;

use citizen_schema::InteractionRecord;

pub const NO_HISTORY_MESSAGE: &str = "📝 No conversation history yet.";

pub const DEFAULT_HISTORY_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Append-only record of one session's exchanges, oldest first.
///
/// The log does no locking of its own; whoever shares it between tasks must
/// serialize access.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    records: Vec<InteractionRecord>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    /// The last `limit` records, in chronological order.
    pub fn recent(&self, limit: NonZeroUsize) -> &[InteractionRecord] {
        let start = self.records.len().saturating_sub(limit.get());
        &self.records[start..]
    }

    pub fn render_recent(&self, limit: NonZeroUsize) -> String {
        if self.records.is_empty() {
            return NO_HISTORY_MESSAGE.to_string();
        }

        let mut out = String::from("**📝 Conversation History:**\n\n");
        for (i, record) in self.recent(limit).iter().enumerate() {
            let _ = write!(
                out,
                "**{}.** [{}]\n👤 **You:** {}\n🤖 **Citizen AI:** {}\n\n",
                i + 1,
                record.formatted_timestamp(),
                record.user_input(),
                record.ai_response(),
            );
        }
        out
    }
}
