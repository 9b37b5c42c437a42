use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::parse_pattern_token;
use crate::types::*;

/// Parse the tokens of one sub-pattern, stopping at `;` or the end of input
pub fn parse_subpattern_tokens(input: &mut &str) -> ModalResult<Vec<PatternToken>> {
    repeat(1.., parse_pattern_token).parse_next(input)
}

/// Split a run of tokens into prefix, numeric body and suffix
pub fn build_subpattern(tokens: &[PatternToken]) -> Result<SubPattern, String> {
    let first_numeric = tokens.iter().position(PatternToken::is_numeric);
    let last_numeric = tokens.iter().rposition(PatternToken::is_numeric);
    let (Some(first), Some(last)) = (first_numeric, last_numeric) else {
        return Err("Pattern has no digit placeholder".to_string());
    };

    let body = &tokens[first..=last];
    if let Some(stray) = body.iter().find(|token| !token.is_numeric()) {
        return Err(format!("Affix token {stray:?} inside the numeric part"));
    }
    if !body.iter().any(|token| {
        matches!(
            token,
            PatternToken::DigitOrZero | PatternToken::DigitIfNeeded
        )
    }) {
        return Err("Pattern has no digit placeholder".to_string());
    }

    let mut subpattern = SubPattern {
        prefix: collect_affix(&tokens[..first]),
        suffix: collect_affix(&tokens[last + 1..]),
        ..SubPattern::default()
    };
    apply_numeric_body(&mut subpattern, body);
    Ok(subpattern)
}

/// Derive grouping sizes and digit counts from the numeric body
fn apply_numeric_body(subpattern: &mut SubPattern, body: &[PatternToken]) {
    let decimal_idx = body
        .iter()
        .position(|token| matches!(token, PatternToken::DecimalPoint));
    let (integer_part, fraction_part) = match decimal_idx {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, &[][..]),
    };

    // Digits before the first separator never form a group of their own
    let mut group_sizes = Vec::new();
    let mut run = 0;
    let mut saw_separator = false;
    for token in integer_part {
        match token {
            PatternToken::DigitOrZero => {
                subpattern.min_integer_digits += 1;
                run += 1;
            }
            PatternToken::DigitIfNeeded => run += 1,
            PatternToken::GroupingSeparator => {
                if saw_separator {
                    group_sizes.push(run);
                }
                saw_separator = true;
                run = 0;
            }
            _ => {}
        }
    }

    if saw_separator {
        subpattern.primary_grouping = run;
        subpattern.secondary_grouping = group_sizes.last().copied().unwrap_or(run);
    }

    for token in fraction_part {
        match token {
            PatternToken::DigitOrZero => {
                subpattern.min_fraction_digits += 1;
                subpattern.max_fraction_digits += 1;
            }
            PatternToken::DigitIfNeeded => subpattern.max_fraction_digits += 1,
            _ => {}
        }
    }
}

fn collect_affix(tokens: &[PatternToken]) -> Vec<AffixToken> {
    let mut affix = Vec::new();
    for token in tokens {
        match token {
            PatternToken::Literal(c) => push_literal(&mut affix, c.encode_utf8(&mut [0; 4])),
            PatternToken::QuotedText(text) => push_literal(&mut affix, text),
            PatternToken::CurrencySign => affix.push(AffixToken::CurrencySign),
            PatternToken::PercentSign => affix.push(AffixToken::PercentSign),
            PatternToken::MinusSign => affix.push(AffixToken::MinusSign),
            // numeric tokens never reach the affixes
            _ => {}
        }
    }
    affix
}

fn push_literal(affix: &mut Vec<AffixToken>, text: &str) {
    if let Some(AffixToken::Literal(existing)) = affix.last_mut() {
        existing.push_str(text);
    } else {
        affix.push(AffixToken::Literal(text.to_string()));
    }
}
