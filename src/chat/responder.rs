/// First message of every transcript.
pub const GREETING: &str = "Hello! I'm John's virtual assistant. Feel free to ask about my experience, education, skills, or projects!";

pub const FALLBACK_REPLY: &str = "I'm not sure about that. Feel free to ask about my experience, education, skills, or projects!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyRule {
    pub keyword: &'static str,
    pub reply: &'static str,
}

/// Checked top to bottom; the first keyword found wins.
pub const REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        keyword: "experience",
        reply: "I have over 5 years of experience in software development, including roles at Tech Corp and StartUp Inc.",
    },
    ReplyRule {
        keyword: "education",
        reply: "I hold a Master's in Computer Science from Stanford University and a Bachelor's from MIT.",
    },
    ReplyRule {
        keyword: "skills",
        reply: "My core skills include JavaScript, TypeScript, React, Node.js, and cloud technologies like AWS and Google Cloud.",
    },
    ReplyRule {
        keyword: "projects",
        reply: "I've worked on several projects including an AI-powered analytics platform and a real-time collaboration tool.",
    },
];

/// Returns the rule whose keyword appears in `message`, ignoring case.
pub fn matching_rule(message: &str) -> Option<&'static ReplyRule> {
    let text = message.to_lowercase();
    REPLY_RULES.iter().find(|rule| text.contains(rule.keyword))
}

/// Canned reply for a visitor message. Never fails: unmatched input gets
/// [`FALLBACK_REPLY`].
pub fn respond(message: &str) -> &'static str {
    match matching_rule(message) {
        Some(rule) => {
            tracing::debug!(keyword = rule.keyword, "chat rule matched");
            rule.reply
        }
        None => {
            tracing::debug!("no chat rule matched, using fallback");
            FALLBACK_REPLY
        }
    }
}
