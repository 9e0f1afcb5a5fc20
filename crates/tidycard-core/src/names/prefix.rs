use crate::names::months::{is_given_name, month_from_digits, month_from_token, month_name};

const MIN_NAME_CHARS: usize = 2;

/// Result of stripping leading codes and dates from a raw name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stripped {
    /// What is left of the name, or `None` when nothing usable remains.
    pub name: Option<String>,
    /// Human-readable date lifted from the consumed prefix.
    pub date_fragment: Option<String>,
}

/// Strips numeric runs, month tokens, stray initials, and punctuation from
/// the front of `raw`.
///
/// The rules are tried in that order; whenever one consumes text the scan
/// restarts from the first rule, so `"1 Jul 2025alejandro"` loses the day,
/// then the month and year.
pub fn strip_prefix(raw: &str) -> Stripped {
    let mut rest = raw.trim();
    let mut consumed = Consumed::default();

    loop {
        if let Some(after) = consume_numeric_run(rest, &mut consumed) {
            rest = after;
            continue;
        }
        if let Some(after) = consume_month(rest, &mut consumed) {
            rest = after;
            continue;
        }
        if let Some(after) = consume_stray_initial(rest) {
            rest = after;
            continue;
        }
        if let Some(after) = consume_punctuation(rest) {
            rest = after;
            continue;
        }
        break;
    }

    let rest = rest.trim_end();
    let usable = rest.chars().count() >= MIN_NAME_CHARS
        && !rest.chars().all(|ch| ch.is_numeric() || ch.is_whitespace());

    Stripped {
        name: usable.then(|| rest.to_string()),
        date_fragment: consumed.fragment(),
    }
}

#[derive(Debug, Default)]
struct Consumed {
    // Each numeric run as written, separators trimmed.
    runs: Vec<String>,
    // Every digit group across all runs, in order.
    groups: Vec<String>,
    month: Option<u32>,
    month_year: Option<String>,
}

impl Consumed {
    fn record_run(&mut self, run: &str) {
        let trimmed = run.trim_matches(|ch: char| !ch.is_ascii_digit());
        if !trimmed.is_empty() {
            self.runs.push(trimmed.to_string());
        }
        self.groups.extend(
            run.split(|ch: char| !ch.is_ascii_digit())
                .filter(|group| !group.is_empty())
                .map(ToString::to_string),
        );
    }

    fn last_group_is_day(&self) -> bool {
        self.groups.last().is_some_and(|group| {
            group.len() <= 2 && group.parse::<u32>().is_ok_and(|day| (1..=31).contains(&day))
        })
    }

    fn fragment(&self) -> Option<String> {
        if let Some(month) = self.month {
            let name = month_name(month)?;
            let year = self.month_year.clone().or_else(|| {
                self.groups
                    .iter()
                    .rev()
                    .find(|group| is_full_year(group))
                    .cloned()
            });
            return Some(match year {
                Some(year) => format!("{name} {year}"),
                None => name.to_string(),
            });
        }

        match self.groups.as_slice() {
            [] => None,
            [single] => is_full_year(single).then(|| single.clone()),
            [.., month, year] => {
                if is_full_year(year) {
                    if let Some(name) = month_from_digits(month).and_then(month_name) {
                        return Some(format!("{name} {year}"));
                    }
                }
                Some(self.runs.join(" "))
            }
        }
    }
}

fn is_full_year(group: &str) -> bool {
    group.len() == 4 && group.parse::<u32>().is_ok_and(|year| (1900..=2099).contains(&year))
}

fn is_run_separator(ch: char) -> bool {
    matches!(ch, '-' | '/') || ch.is_whitespace()
}

// Rule a: digits interspersed with `-`, `/` or spaces.
fn consume_numeric_run<'a>(input: &'a str, consumed: &mut Consumed) -> Option<&'a str> {
    if !input.starts_with(|ch: char| ch.is_ascii_digit()) {
        return None;
    }
    let end = input
        .find(|ch: char| !(ch.is_ascii_digit() || is_run_separator(ch)))
        .unwrap_or(input.len());
    consumed.record_run(&input[..end]);
    Some(&input[end..])
}

// Rule b: `[de] <month> [[de] <year>]`, only when it reads as a date.
fn consume_month<'a>(input: &'a str, consumed: &mut Consumed) -> Option<&'a str> {
    let (introduced, after_connector) = match strip_word(input, "de") {
        Some(after) => (true, after),
        None => (false, input),
    };

    let end = after_connector
        .find(|ch: char| !ch.is_alphabetic())
        .unwrap_or(after_connector.len());
    if end == 0 {
        return None;
    }
    let token = &after_connector[..end];
    let month = month_from_token(token)?;
    let after_token = &after_connector[end..];

    let (year, rest) = match trailing_year(after_token) {
        Some((year, rest)) => (Some(year), rest),
        None => (None, after_token),
    };

    // "Abril Gómez", "5 Abril Gomez" and "2024 Julio Guecha" keep their given
    // names; a day alone is enough only for months that are not names.
    let after_day = consumed.last_group_is_day() && !is_given_name(token);
    if !(introduced || year.is_some() || after_day) {
        return None;
    }

    consumed.month = Some(month);
    if let Some(year) = year {
        consumed.month_year = Some(year.to_string());
    }
    Some(rest)
}

fn trailing_year(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_start();
    let digits = strip_word(trimmed, "de").unwrap_or(trimmed);
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if (2..=4).contains(&end) {
        Some((&digits[..end], &digits[end..]))
    } else {
        None
    }
}

// Case-insensitive `word` followed by whitespace; returns what follows.
fn strip_word<'a>(input: &'a str, word: &str) -> Option<&'a str> {
    let head = input.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let tail = &input[word.len()..];
    if !tail.starts_with(char::is_whitespace) {
        return None;
    }
    Some(tail.trim_start())
}

// Rule c: a lone letter such as the "B" in "B Carolina".
pub(crate) fn consume_stray_initial(input: &str) -> Option<&str> {
    let mut chars = input.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_alphabetic() {
        return None;
    }
    let (gap, space) = chars.next()?;
    if !space.is_whitespace() {
        return None;
    }
    let rest = input[gap..].trim_start();
    rest.starts_with(char::is_alphabetic).then_some(rest)
}

// Rule d: anything that is neither a letter nor a digit.
fn consume_punctuation(input: &str) -> Option<&str> {
    let end = input
        .find(|ch: char| ch.is_alphanumeric())
        .unwrap_or(input.len());
    if end == 0 {
        None
    } else {
        Some(&input[end..])
    }
}

#[cfg(test)]
mod tests {
    use super::{strip_prefix, Stripped};

    fn stripped(name: &str, fragment: Option<&str>) -> Stripped {
        Stripped {
            name: Some(name.to_string()),
            date_fragment: fragment.map(ToString::to_string),
        }
    }

    #[test]
    fn day_month_year_becomes_month_and_year() {
        assert_eq!(
            strip_prefix("03 04 2025erika Natalia Sotelo"),
            stripped("erika Natalia Sotelo", Some("Abril 2025"))
        );
        assert_eq!(
            strip_prefix("1/9/2024 Maria"),
            stripped("Maria", Some("Septiembre 2024"))
        );
    }

    #[test]
    fn month_token_with_year_is_consumed() {
        assert_eq!(
            strip_prefix("1 Jul 2025alejandro Paiva"),
            stripped("alejandro Paiva", Some("Julio 2025"))
        );
        assert_eq!(
            strip_prefix("de marzo de 2024 - Laura"),
            stripped("Laura", Some("Marzo 2024"))
        );
    }

    #[test]
    fn month_after_a_day_is_consumed() {
        assert_eq!(
            strip_prefix("15 Mayo Pedro"),
            stripped("Pedro", Some("Mayo"))
        );
    }

    #[test]
    fn given_names_that_are_months_survive() {
        assert_eq!(strip_prefix("Abril Gómez"), stripped("Abril Gómez", None));
        assert_eq!(
            strip_prefix("2024 Julio Guecha"),
            stripped("Julio Guecha", Some("2024"))
        );
        assert_eq!(strip_prefix("Mariana"), stripped("Mariana", None));
        assert_eq!(strip_prefix("5 Abril Gomez"), stripped("Abril Gomez", None));
        assert_eq!(
            strip_prefix("12 Julio Ramirez"),
            stripped("Julio Ramirez", None)
        );
    }

    #[test]
    fn given_name_month_needs_a_year_or_connector() {
        assert_eq!(
            strip_prefix("5 Abril 2024 Gomez"),
            stripped("Gomez", Some("Abril 2024"))
        );
        assert_eq!(
            strip_prefix("5 de abril Gomez"),
            stripped("Gomez", Some("Abril"))
        );
    }

    #[test]
    fn bare_year_is_lifted() {
        assert_eq!(
            strip_prefix("2024carolina Giraldo"),
            stripped("carolina Giraldo", Some("2024"))
        );
    }

    #[test]
    fn short_codes_leave_no_fragment() {
        assert_eq!(strip_prefix("21adriana Torres"), stripped("adriana Torres", None));
        assert_eq!(strip_prefix("007 Bond"), stripped("Bond", None));
    }

    #[test]
    fn unnamed_month_falls_back_to_raw_digits() {
        assert_eq!(
            strip_prefix("45-13-2025 Pablo"),
            stripped("Pablo", Some("45-13-2025"))
        );
    }

    #[test]
    fn stray_initial_and_punctuation_are_dropped() {
        assert_eq!(strip_prefix("B Carolina"), stripped("Carolina", None));
        assert_eq!(strip_prefix("-- . Juan"), stripped("Juan", None));
        assert_eq!(strip_prefix("12 - A Lucia"), stripped("Lucia", None));
    }

    #[test]
    fn nothing_left_is_unrecoverable() {
        assert_eq!(strip_prefix("12345"), Stripped::default());
        assert_eq!(
            strip_prefix("2025 x"),
            Stripped {
                name: None,
                date_fragment: Some("2025".to_string())
            }
        );
        assert_eq!(
            strip_prefix("03 04 2025"),
            Stripped {
                name: None,
                date_fragment: Some("Abril 2025".to_string())
            }
        );
    }

    #[test]
    fn clean_names_pass_through() {
        assert_eq!(strip_prefix("  Ana María  "), stripped("Ana María", None));
    }

    #[test]
    fn stripped_name_is_a_suffix_of_the_input() {
        for raw in [
            "03 04 2025erika Natalia Sotelo",
            "1 Jul 2025alejandro Paiva",
            "B Carolina",
            "2024carolina Giraldo",
        ] {
            let name = strip_prefix(raw).name.expect("name");
            assert!(raw.ends_with(&name), "{raw}");
        }
    }

    #[test]
    fn no_fragment_without_digits_or_months() {
        for raw in ["Acarlos", "- Juan", "B Carolina", "Abril Gómez", "Julio"] {
            assert!(strip_prefix(raw).date_fragment.is_none(), "{raw}");
        }
    }
}
