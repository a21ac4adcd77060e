use crate::domain::{Directive, RespectScore, RespectTier, TimeContext, Transcript};

/// Delta awarded when the transcript contains a politeness marker.
pub const POLITENESS_DELTA: i32 = 2;
/// Delta applied to very short non-silent utterances.
pub const CURTNESS_DELTA: i32 = -1;
/// Utterances shorter than this (trimmed) count as curt.
pub const SHORT_UTTERANCE_MAX_CHARS: usize = 10;

/// Substrings recognized as polite, matched case-insensitively against the
/// raw transcript.
const POLITENESS_MARKERS: [&str; 3] = ["s'il vous plaît", "s'il te plaît", "merci"];

/// Builds the instruction text for the response generator. Pure and total:
/// every valid (time context, score) pair yields a non-empty directive. A
/// non-empty caller override replaces the template outright; it is never
/// merged.
pub fn build_directive(
    time_context: TimeContext,
    score: RespectScore,
    override_prompt: Option<&str>,
) -> Directive {
    if let Some(prompt) = override_prompt {
        let trimmed = prompt.trim();
        if !trimmed.is_empty() {
            return Directive::new(trimmed.to_string());
        }
    }

    let time_line = match time_context {
        TimeContext::Morning => {
            "It is early morning; the café is quiet and the espresso machine is still warming up."
        }
        TimeContext::LunchRush => {
            "It is the lunch rush; every table is taken and you have no time to waste."
        }
        TimeContext::Evening => "It is evening; service is winding down and you want to go home.",
        TimeContext::Standard => "It is an ordinary service hour.",
    };

    let tier_line = match score.tier() {
        RespectTier::Low => {
            "This customer has been rude to you. Be curt and dismissive; address them as 'mon petit' or worse."
        }
        RespectTier::Neutral => {
            "Be impatient but professional. Address the customer with a plain 'vous'."
        }
        RespectTier::High => {
            "This customer has earned a measure of your respect. Be more attentive, though never obsequious."
        }
    };

    Directive::new(format!(
        "You are Pierre, a waiter at a Parisian café.\n\
         {time_line}\n\
         {tier_line}\n\
         Current respect score: {score}/100.\n\
         Rules:\n\
         - Speak only dialogue. No stage directions like *sighs* or *wipes table*.\n\
         - Be extremely brief and direct.\n\
         - Reply in casual French."
    ))
}

/// Computes the respect delta for one turn from the raw transcript. The rule
/// table is evaluated in fixed priority order and the first matching rule
/// wins; rules never stack. The result is clamped so the caller's score
/// stays inside [0, 100].
pub fn score_delta(transcript: &Transcript, score: RespectScore) -> i32 {
    let delta = if transcript.is_silence() {
        0
    } else {
        let lowered = transcript.as_str().to_lowercase();
        if POLITENESS_MARKERS.iter().any(|m| lowered.contains(m)) {
            POLITENESS_DELTA
        } else if transcript.as_str().trim().chars().count() < SHORT_UTTERANCE_MAX_CHARS {
            CURTNESS_DELTA
        } else {
            0
        }
    };

    score.clamp_delta(delta)
}
