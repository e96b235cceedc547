use super::features::TextFeatures;

const CLARITY_BASE: i32 = 50;
const SPECIFICITY_BASE: i32 = 40;
const STRUCTURE_BASE: i32 = 50;

const SHORT_PROMPT_CHARS: usize = 20;
const DETAILED_PROMPT_WORDS: usize = 10;
const STRUCTURED_LINE_BREAKS: usize = 2;

/// The three independent quality dimensions, each clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DimensionScores {
    pub clarity: u8,
    pub specificity: u8,
    pub structure: u8,
}

pub(crate) fn score_dimensions(features: &TextFeatures) -> DimensionScores {
    DimensionScores {
        clarity: clarity(features),
        specificity: specificity(features),
        structure: structure(features),
    }
}

pub(crate) fn clarity(features: &TextFeatures) -> u8 {
    let mut score = CLARITY_BASE;

    if features.has_question_word {
        score += 15;
    }
    if features.has_action_verb {
        score += 15;
    }
    if features.has_terminal_punctuation {
        score += 10;
    }
    if features.char_len < SHORT_PROMPT_CHARS {
        score -= 20;
    }

    clamp_score(score)
}

pub(crate) fn specificity(features: &TextFeatures) -> u8 {
    let mut score = SPECIFICITY_BASE;

    if features.has_digit {
        score += 15;
    }
    if features.has_formatting_keyword {
        score += 20;
    }
    if features.word_count > DETAILED_PROMPT_WORDS {
        score += 15;
    }
    if features.has_specificity_adjective {
        score += 10;
    }

    clamp_score(score)
}

pub(crate) fn structure(features: &TextFeatures) -> u8 {
    let mut score = STRUCTURE_BASE;

    if features.has_section_label {
        score += 30;
    }
    if features.line_breaks >= STRUCTURED_LINE_BREAKS {
        score += 10;
    }
    if features.has_list_marker {
        score += 10;
    }

    clamp_score(score)
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_signals() -> TextFeatures {
        TextFeatures {
            has_question_word: true,
            has_action_verb: true,
            has_terminal_punctuation: true,
            has_digit: true,
            has_formatting_keyword: true,
            has_section_label: true,
            line_breaks: 4,
            has_list_marker: true,
            has_specificity_adjective: true,
            char_len: 400,
            word_count: 60,
        }
    }

    #[test]
    fn empty_features_score_from_the_bases() {
        let scores = score_dimensions(&TextFeatures::default());

        assert_eq!(scores.clarity, 30);
        assert_eq!(scores.specificity, 40);
        assert_eq!(scores.structure, 50);
    }

    #[test]
    fn every_signal_saturates_without_exceeding_bounds() {
        let scores = score_dimensions(&all_signals());

        assert_eq!(scores.clarity, 90);
        assert_eq!(scores.specificity, 100);
        assert_eq!(scores.structure, 100);
    }

    #[test]
    fn increments_are_independent() {
        let features = TextFeatures {
            has_digit: true,
            word_count: 11,
            char_len: 25,
            ..TextFeatures::default()
        };

        assert_eq!(specificity(&features), 70);
        assert_eq!(clarity(&features), 50);
    }

    #[test]
    fn single_line_break_does_not_count_as_structure() {
        let features = TextFeatures {
            line_breaks: 1,
            ..TextFeatures::default()
        };

        assert_eq!(structure(&features), 50);
    }
}
