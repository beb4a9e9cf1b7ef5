use std::time::{Duration, Instant};

/// How long the assistant "thinks" before an answer lands.
pub const ANSWER_DELAY: Duration = Duration::from_secs(2);

pub const SIMULATED_ANSWER: &str = "This is a simulated AI response. In the real implementation, \
this would connect to your AI backend service to provide intelligent answers about your codebase.";

const KNOWN_ANSWERS: [(&str, &str); 2] = [
    (
        "How does authentication work in this codebase?",
        "The authentication system uses NextAuth.js with JWT tokens. Users can sign in with \
         email/password, and sessions are managed through secure HTTP-only cookies.",
    ),
    (
        "What's the database schema structure?",
        "The database uses Prisma ORM with PostgreSQL. Main models include User, Repository, \
         File, Query, and PullRequest with proper relationships and constraints.",
    ),
];

pub const QUICK_QUESTIONS: [&str; 4] = [
    "How do I add a new component?",
    "What's the API structure?",
    "How does the file parsing work?",
    "What are the main dependencies?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub question: String,
    /// `None` while the answer is pending.
    pub answer: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnswer {
    pub due: Instant,
}

/// Question/answer history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: Option<PendingAnswer>,
}

impl Default for ChatState {
    fn default() -> Self {
        let history = KNOWN_ANSWERS
            .iter()
            .zip(["2 hours ago", "1 day ago"])
            .map(|((question, answer), when)| ChatMessage {
                question: (*question).to_string(),
                answer: Some((*answer).to_string()),
                timestamp: when.to_string(),
            })
            .collect();
        Self {
            messages: history,
            pending: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    #[error("Type a question first")]
    Empty,
    #[error("Still answering the previous question")]
    Busy,
}

impl ChatState {
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Queues `question`. Its answer lands on the first poll at or after
    /// `now + ANSWER_DELAY`.
    pub fn ask(&mut self, question: &str, now: Instant) -> Result<(), AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::Empty);
        }
        if self.is_thinking() {
            return Err(AskError::Busy);
        }
        self.messages.insert(
            0,
            ChatMessage {
                question: question.to_string(),
                answer: None,
                timestamp: "Just now".to_string(),
            },
        );
        self.pending = Some(PendingAnswer {
            due: now + ANSWER_DELAY,
        });
        Ok(())
    }

    /// Fills in the pending answer once it is due. Returns true if it landed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.pending = None;
                if let Some(message) = self.messages.first_mut() {
                    message.answer = Some(answer_for(&message.question).to_string());
                }
                true
            }
            _ => false,
        }
    }
}

fn answer_for(question: &str) -> &'static str {
    KNOWN_ANSWERS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(question))
        .map_or(SIMULATED_ANSWER, |&(_, answer)| answer)
}
