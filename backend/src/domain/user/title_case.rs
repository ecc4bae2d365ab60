//! Word title-casing with the Unicode titlecase mapping.
//!
//! A word is a run of cased characters (categories Lu, Ll and Lt). The first
//! character of each word takes its titlecase form and the rest are
//! lower-cased. Anything else, digits and apostrophes included, ends the
//! current word.

/// Title-case every word in `raw`, so `"o'neil mcDONALD"` becomes
/// `"O'Neil Mcdonald"` and `"ßen"` becomes `"Ssen"`.
pub(super) fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            push_titlecase(&mut out, ch);
        }
        in_word = is_cased(ch);
    }
    out
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase() || is_titlecase_letter(ch)
}

fn is_titlecase_letter(ch: char) -> bool {
    matches!(
        ch,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn push_titlecase(out: &mut String, ch: char) {
    match ch {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.push(char::from_u32(u32::from(ch) + 8).unwrap_or(ch));
        }
        '\u{1FB3}' => out.push('\u{1FBC}'),
        '\u{1FC3}' => out.push('\u{1FCC}'),
        '\u{1FF3}' => out.push('\u{1FFC}'),
        '\u{1FB2}' => out.push_str("\u{1FBA}\u{0345}"),
        '\u{1FB4}' => out.push_str("\u{0386}\u{0345}"),
        '\u{1FB7}' => out.push_str("\u{0391}\u{0342}\u{0345}"),
        '\u{1FC2}' => out.push_str("\u{1FCA}\u{0345}"),
        '\u{1FC4}' => out.push_str("\u{0389}\u{0345}"),
        '\u{1FC7}' => out.push_str("\u{0397}\u{0342}\u{0345}"),
        '\u{1FF2}' => out.push_str("\u{1FFA}\u{0345}"),
        '\u{1FF4}' => out.push_str("\u{038F}\u{0345}"),
        '\u{1FF7}' => out.push_str("\u{03A9}\u{0342}\u{0345}"),
        // ŉ keeps the whole upper-case expansion: ʼN.
        '\u{0149}' => out.extend(ch.to_uppercase()),
        ch if is_titlecase_letter(ch) => out.push(ch),
        _ => {
            // Ligature expansions (ß, ﬁ, և, ...) capitalise only their first letter.
            let mut upper = ch.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
    }
}
