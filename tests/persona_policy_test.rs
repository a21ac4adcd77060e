use garcon::application::services::persona_policy::{build_directive, score_delta};
use garcon::domain::{RespectScore, RespectTier, TimeContext, Transcript};

const ALL_TIME_CONTEXTS: [TimeContext; 4] = [
    TimeContext::Morning,
    TimeContext::LunchRush,
    TimeContext::Evening,
    TimeContext::Standard,
];

#[test]
fn given_score_below_forty_when_mapping_tier_then_low() {
    assert_eq!(RespectScore::new(0).tier(), RespectTier::Low);
    assert_eq!(RespectScore::new(39).tier(), RespectTier::Low);
}

#[test]
fn given_score_in_neutral_band_when_mapping_tier_then_neutral() {
    assert_eq!(RespectScore::new(40).tier(), RespectTier::Neutral);
    assert_eq!(RespectScore::new(50).tier(), RespectTier::Neutral);
    assert_eq!(RespectScore::new(80).tier(), RespectTier::Neutral);
}

#[test]
fn given_score_above_eighty_when_mapping_tier_then_high() {
    assert_eq!(RespectScore::new(81).tier(), RespectTier::High);
    assert_eq!(RespectScore::new(100).tier(), RespectTier::High);
}

#[test]
fn given_out_of_range_score_when_constructing_then_clamped() {
    assert_eq!(RespectScore::new(-10).value(), 0);
    assert_eq!(RespectScore::new(250).value(), 100);
}

#[test]
fn given_every_context_and_score_when_building_directive_then_non_empty() {
    for context in ALL_TIME_CONTEXTS {
        for score in 0..=100i64 {
            let directive = build_directive(context, RespectScore::new(score), None);
            assert!(
                !directive.as_str().trim().is_empty(),
                "empty directive for {} at score {}",
                context,
                score
            );
        }
    }
}

#[test]
fn given_tier_boundaries_when_building_directive_then_addressing_style_switches() {
    let low = build_directive(TimeContext::Standard, RespectScore::new(39), None);
    let neutral = build_directive(TimeContext::Standard, RespectScore::new(40), None);
    let high = build_directive(TimeContext::Standard, RespectScore::new(81), None);

    assert!(low.as_str().contains("curt"));
    assert!(neutral.as_str().contains("impatient"));
    assert!(high.as_str().contains("respect"));
    assert_ne!(low.as_str(), neutral.as_str());
    assert_ne!(neutral.as_str(), high.as_str());
}

#[test]
fn given_override_prompt_when_building_directive_then_replaces_template_outright() {
    let override_text = "You are a pirate. Answer in rhyme.";
    let directive = build_directive(
        TimeContext::LunchRush,
        RespectScore::new(50),
        Some(override_text),
    );
    assert_eq!(directive.as_str(), override_text);
}

#[test]
fn given_blank_override_prompt_when_building_directive_then_falls_back_to_template() {
    let directive = build_directive(TimeContext::Standard, RespectScore::new(50), Some("   "));
    assert!(directive.as_str().contains("Pierre"));
}

#[test]
fn given_politeness_marker_when_scoring_then_positive_delta() {
    let transcript = Transcript::from_raw("Un café, s'il vous plaît.");
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), 2);
}

#[test]
fn given_uppercase_politeness_marker_when_scoring_then_match_is_case_insensitive() {
    let transcript = Transcript::from_raw("MERCI BEAUCOUP POUR LE CROISSANT");
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), 2);
}

#[test]
fn given_short_curt_utterance_when_scoring_then_negative_delta() {
    let transcript = Transcript::from_raw("Café.");
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), -1);
}

#[test]
fn given_short_but_polite_utterance_when_scoring_then_politeness_rule_wins() {
    // "merci" is under the short-utterance threshold; first match wins.
    let transcript = Transcript::from_raw("merci");
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), 2);
}

#[test]
fn given_silence_sentinel_when_scoring_then_zero_delta() {
    let transcript = Transcript::from_raw("");
    assert!(transcript.is_silence());
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), 0);
}

#[test]
fn given_plain_utterance_when_scoring_then_zero_delta() {
    let transcript = Transcript::from_raw("Je voudrais une table près de la fenêtre");
    assert_eq!(score_delta(&transcript, RespectScore::new(50)), 0);
}

#[test]
fn given_same_input_when_scoring_twice_then_deterministic() {
    let transcript = Transcript::from_raw("Un café, s'il vous plaît.");
    let first = score_delta(&transcript, RespectScore::new(50));
    let second = score_delta(&transcript, RespectScore::new(50));
    assert_eq!(first, second);
}

#[test]
fn given_score_near_cap_when_polite_then_delta_clamped_to_cap() {
    let transcript = Transcript::from_raw("Merci bien, c'est parfait.");
    assert_eq!(score_delta(&transcript, RespectScore::new(99)), 1);
    assert_eq!(score_delta(&transcript, RespectScore::new(100)), 0);
}

#[test]
fn given_score_at_floor_when_curt_then_delta_clamped_to_floor() {
    let transcript = Transcript::from_raw("Non.");
    assert_eq!(score_delta(&transcript, RespectScore::new(0)), 0);
}
