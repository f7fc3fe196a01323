//! Keyword-based source attribution.
//!
//! Deterministic, case-insensitive substring matching over the user's raw
//! input. Categories are checked independently, so several may fire for one
//! message; the result is a flat ordered list with no deduplication.

const VEXCODE_URL: &str = "https://www.vexrobotics.com/vexcode";
const CS_CURRICULUM_URL: &str = "https://cs.vex.com";
const V5_MANUAL_URL: &str =
    "https://content.vexrobotics.com/docs/25-26/v5rc-push-back/docs/PushBack-GameManual-0.1.pdf";
const IQ_MANUAL_URL: &str = "https://www.vexrobotics.com/mix-and-match-manual";
const ROBOT_EVENTS_URL: &str = "https://www.robotevents.com";
const VEX_FORUM_URL: &str = "https://www.vexforum.com";

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

/// Resource links relevant to the user's message.
#[must_use]
pub fn extract_relevant_sources(user_message: &str) -> Vec<String> {
    let message = user_message.to_lowercase();
    let mut sources = Vec::new();

    if contains_any(&message, &["programming", "code", "vexcode"]) {
        sources.push(VEXCODE_URL.to_owned());
        sources.push(CS_CURRICULUM_URL.to_owned());
    }

    if contains_any(&message, &["manual", "rules", "game"]) {
        if contains_any(&message, &["v5", "push back"]) {
            sources.push(V5_MANUAL_URL.to_owned());
        }
        if contains_any(&message, &["iq", "mix", "match"]) {
            sources.push(IQ_MANUAL_URL.to_owned());
        }
    }

    if contains_any(&message, &["tournament", "competition", "register"]) {
        sources.push(ROBOT_EVENTS_URL.to_owned());
    }

    if contains_any(&message, &["forum", "community", "q&a"]) {
        sources.push(VEX_FORUM_URL.to_owned());
    }

    sources
}
