use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    /// Case-insensitive match on question or answer
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.question.to_lowercase().contains(&query) || self.answer.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocLink {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// A submitted support request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub reference: Uuid,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SupportTicket {
    pub fn new(subject: &str, message: &str) -> Self {
        Self {
            reference: Uuid::new_v4(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            submitted_at: Utc::now(),
        }
    }

    /// Short reference shown to the user
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}
