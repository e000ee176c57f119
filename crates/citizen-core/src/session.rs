use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use citizen_schema::SessionKey;
use tokio::sync::Mutex as TokioMutex;
use tokio::time::Instant;

use crate::conversation::ConversationLog;

pub type SharedLog = Arc<TokioMutex<ConversationLog>>;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(1800);

struct SessionEntry {
    log: SharedLog,
    last_active: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            log: Arc::new(TokioMutex::new(ConversationLog::new())),
            last_active: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.last_active) >= ttl
    }

    /// A handle held outside the store means a request is still using the log.
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.log) > 1
    }

    fn evictable(&self, ttl: Duration, now: Instant) -> bool {
        self.is_expired(ttl, now) && !self.in_use()
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }
}

/// One [`ConversationLog`] per session.
///
/// Each log sits behind its own mutex, so appends and reads for one session
/// are serialized without blocking other sessions. Sessions idle for longer
/// than the TTL are dropped, unless a request still holds their log.
pub struct SessionStore {
    sessions: TokioMutex<HashMap<SessionKey, SessionEntry>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: TokioMutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Creating is the only way the store grows, so expired sessions are
    /// swept first.
    pub async fn create(&self) -> SessionKey {
        let key = SessionKey::generate();
        let mut sessions = self.sessions.lock().await;
        let evicted = Self::sweep_locked(&mut sessions, self.idle_ttl);
        sessions.insert(key.clone(), SessionEntry::new());
        tracing::debug!(session = %key, evicted, "session created");
        key
    }

    pub async fn get(&self, key: &SessionKey) -> Option<SharedLog> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.get_mut(key)?;
        if entry.evictable(self.idle_ttl, Instant::now()) {
            sessions.remove(key);
            tracing::debug!(session = %key, "session expired");
            return None;
        }
        entry.touch();
        Some(entry.log.clone())
    }

    /// Mark the session active without handing out its log.
    pub async fn touch(&self, key: &SessionKey) {
        if let Some(entry) = self.sessions.lock().await.get_mut(key) {
            entry.touch();
        }
    }

    /// Drop every expired session nobody is using. Returns how many went.
    pub async fn sweep(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        Self::sweep_locked(&mut sessions, self.idle_ttl)
    }

    fn sweep_locked(sessions: &mut HashMap<SessionKey, SessionEntry>, ttl: Duration) -> usize {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.evictable(ttl, now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
