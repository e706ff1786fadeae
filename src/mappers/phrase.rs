// src/mappers/phrase.rs
//! Order-preserving phrase (sentence) extraction.
//!
//! A terminator counts as a sentence boundary only when it is not part of a
//! decimal number or an abbreviation and is followed by whitespace (or ends
//! the text). Unlike the word and paragraph mappers this one never chunks:
//! phrase count is bounded by sentence count, not byte size.

const TERMINATORS: &[char] = &['.', '!', '?'];

/// Extracts trimmed sentences in source order, terminator included. Any
/// non-empty remainder after the last boundary is emitted as a final phrase.
pub fn map_phrases(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    if text.trim().is_empty() {
        return phrases;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];
        if TERMINATORS.contains(&c) && is_sentence_boundary(&chars, i) {
            let phrase = text[chars[start].0..pos + c.len_utf8()].trim();
            if !phrase.is_empty() {
                phrases.push(phrase.to_string());
            }
            i += 1;
            while i < chars.len() && chars[i].1.is_whitespace() {
                i += 1;
            }
            start = i;
            continue;
        }
        i += 1;
    }

    if start < chars.len() {
        let rest = text[chars[start].0..].trim();
        if !rest.is_empty() {
            phrases.push(rest.to_string());
        }
    }

    phrases
}

/// A terminator at `i` is a genuine boundary unless it sits inside a decimal
/// number ("3.14"), between two letters ("e.g."), or is immediately followed
/// by a non-space character.
fn is_sentence_boundary(chars: &[(usize, char)], i: usize) -> bool {
    if i > 0 && chars[i - 1].1.is_numeric() {
        return false;
    }
    if i > 0
        && chars[i - 1].1.is_alphabetic()
        && i + 1 < chars.len()
        && chars[i + 1].1.is_alphabetic()
    {
        return false;
    }
    if i + 1 < chars.len() && !chars[i + 1].1.is_whitespace() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_ordered_sentences() {
        let phrases = map_phrases("Isto é válido. Segue.");
        assert_eq!(phrases, vec!["Isto é válido.", "Segue."]);
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        let phrases = map_phrases("O valor é 3.14 hoje.");
        assert_eq!(phrases, vec!["O valor é 3.14 hoje."]);
    }

    #[test]
    fn letter_dot_letter_is_not_a_boundary() {
        let phrases = map_phrases("Veja e.g");
        assert_eq!(phrases, vec!["Veja e.g"]);
    }

    #[test]
    fn terminator_glued_to_text_is_not_a_boundary() {
        let phrases = map_phrases("versão 2!beta pronta");
        assert_eq!(phrases, vec!["versão 2!beta pronta"]);
    }

    #[test]
    fn trailing_remainder_becomes_final_phrase() {
        let phrases = map_phrases("Primeira frase. resto sem ponto final");
        assert_eq!(phrases, vec!["Primeira frase.", "resto sem ponto final"]);
    }

    #[test]
    fn all_terminators_split() {
        let phrases = map_phrases("Sim! Claro? Talvez.");
        assert_eq!(phrases, vec!["Sim!", "Claro?", "Talvez."]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        assert!(map_phrases("   ").is_empty());
    }
}
