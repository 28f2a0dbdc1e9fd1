use super::*;

fn score(text: &str) -> ClarityScore {
    score_clarity(&TokenizedText::new(text), &FillerLexicon::builtin())
}

#[test]
fn test_empty_text_full_marks() {
    let out = score("");
    assert_eq!(out.score, 30.0);
    assert_eq!(out.filler_rate, 0.0);
    assert_eq!(out.filler_count, 0);
}

#[test]
fn test_multi_word_fillers_never_match() {
    let out = score("you know");
    assert_eq!(out.filler_count, 0);
    assert_eq!(out.score, 30.0);

    let out = score("I mean, it was sort of fine");
    assert_eq!(out.filler_count, 0);
}

#[test]
fn test_punctuation_and_case_are_ignored() {
    let out = score("Um, well... OKAY! so");
    assert_eq!(out.filler_count, 4);
    assert_eq!(out.fillers_found, vec!["um", "well", "okay", "so"]);
    assert_eq!(out.filler_rate, 100.0);
    assert_eq!(out.score, 6.0);
}

#[test]
fn test_rate_bands_scaled_by_three() {
    // 1 filler in 100 tokens -> 1% -> 10 raw.
    let mut words = vec!["word"; 99];
    words.push("um");
    assert_eq!(score(&words.join(" ")).score, 30.0);

    // 3 in 100 -> 3% -> 8 raw.
    let mut words = vec!["word"; 97];
    words.extend(["um", "uh", "hmm"]);
    let out = score(&words.join(" "));
    assert_eq!(out.filler_rate, 3.0);
    assert_eq!(out.score, 24.0);

    // 1 in 10 -> 10% -> 4 raw.
    let mut words = vec!["word"; 9];
    words.push("like");
    assert_eq!(score(&words.join(" ")).score, 12.0);
}

#[test]
fn test_rate_rounded_two_decimals() {
    // 1 in 3 tokens.
    let out = score("um hello there");
    assert_eq!(out.filler_rate, 33.33);
    assert_eq!(out.score, 6.0);
}

#[test]
fn test_custom_lexicon() {
    let lexicon = FillerLexicon {
        entries: vec!["erm".to_string()],
    };
    let out = score_clarity(&TokenizedText::new("erm um erm"), &lexicon);
    assert_eq!(out.filler_count, 2);
}
