//! parsing of the plain-text result files.
//!
//! every line is one problem. blank lines, missing or extra fields and
//! unknown tokens are errors: a skipped line would shift every later problem
//! against the other files.

use align::def::ResultSeries;
use align::def::SolutionFlags;
use align::error::AlignError;

/// lines of the gpu timing file that start with this are headers
pub const GPU_HEADER_PREFIX: &str = "Synthesizer";

const TRUE_TOKENS: [&str; 5] = ["t", "true", "1", "y", "yes"];
const FALSE_TOKENS: [&str; 5] = ["f", "false", "0", "n", "no"];

fn parse_time(line: usize, content: &str, field: &str) -> Result<f64, AlignError> {
    field
        .parse::<f64>()
        .map_err(|e| AlignError::malformed(line, content, format!("bad time {field:?} ({e})")))
}

/// split a line into exactly `n` whitespace separated times
fn parse_fields(line: usize, content: &str, n: usize) -> Result<Vec<f64>, AlignError> {
    let fields = content.split_whitespace().collect::<Vec<_>>();
    if fields.len() != n {
        return Err(AlignError::malformed(
            line,
            content,
            format!("expected {n} field(s), found {}", fields.len()),
        ));
    }
    fields
        .into_iter()
        .map(|f| parse_time(line, content, f))
        .collect()
}

/// parse the comparison file: `<baseline time> <solver time>` per line
pub fn parse_pairs(text: &str) -> Result<(ResultSeries, ResultSeries), AlignError> {
    let mut baseline = vec![];
    let mut single = vec![];
    for (i, content) in text.lines().enumerate() {
        let fields = parse_fields(i + 1, content, 2)?;
        baseline.push(fields[0]);
        single.push(fields[1]);
    }
    Ok((baseline, single))
}

/// parse a file with one time per line, skipping lines that start with
/// `header` if given
///
/// ```
/// # use plots::parsing::parse_times;
/// let times = parse_times("Synthesizer v2\n0.5\n1e-3\n", Some("Synthesizer")).unwrap();
/// assert_eq!(times, vec![0.5, 0.001]);
/// ```
pub fn parse_times(text: &str, header: Option<&str>) -> Result<ResultSeries, AlignError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !header.is_some_and(|h| l.starts_with(h)))
        .map(|(i, content)| parse_fields(i + 1, content, 1).map(|f| f[0]))
        .collect()
}

/// a single solution flag token, case insensitive
pub fn parse_flag(token: &str) -> Option<bool> {
    let token = token.to_ascii_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// parse the solution flag file: one token per line
pub fn parse_flags(text: &str) -> Result<SolutionFlags, AlignError> {
    text.lines()
        .enumerate()
        .map(|(i, content)| {
            parse_flag(content.trim()).ok_or_else(|| {
                AlignError::malformed(
                    i + 1,
                    content,
                    format!("expected one of {TRUE_TOKENS:?} or {FALSE_TOKENS:?}"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        let (b, s) = parse_pairs("1.5 2.5\n0.25\t7\n  3   4  \n").unwrap();
        assert_eq!(b, vec![1.5, 0.25, 3.0]);
        assert_eq!(s, vec![2.5, 7.0, 4.0]);
    }

    #[test]
    fn pair_missing_second_field() {
        let err = parse_pairs("1.0 2.0\n3.0\n").unwrap_err();
        assert_eq!(
            err,
            AlignError::MalformedLine {
                line: 2,
                content: "3.0".to_string(),
                reason: "expected 2 field(s), found 1".to_string(),
            }
        );
    }

    #[test]
    fn pair_extra_field() {
        assert!(parse_pairs("1 2 3\n").is_err());
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = parse_times("1.0\n\n2.0\n", None).unwrap_err();
        assert!(matches!(err, AlignError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn bad_number() {
        let err = parse_times("1.0\nabc\n", None).unwrap_err();
        match err {
            AlignError::MalformedLine { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn header_lines_keep_line_numbers() {
        let err = parse_times("Synthesizer\n1.0\nx\n", Some(GPU_HEADER_PREFIX)).unwrap_err();
        assert!(matches!(err, AlignError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn header_is_only_skipped_when_asked() {
        assert!(parse_times("Synthesizer\n1.0\n", None).is_err());
    }

    #[test]
    fn nan_and_inf_parse() {
        let t = parse_times("NaN\ninf\n", None).unwrap();
        assert!(t[0].is_nan());
        assert_eq!(t[1], f64::INFINITY);
    }

    #[test]
    fn flag_tokens() {
        for t in ["T", "t", "true", "TRUE", "1", "y", "Yes"] {
            assert_eq!(parse_flag(t), Some(true), "{t}");
        }
        for t in ["F", "false", "0", "N", "no"] {
            assert_eq!(parse_flag(t), Some(false), "{t}");
        }
        for t in ["", "Tr", "2", "found"] {
            assert_eq!(parse_flag(t), None, "{t}");
        }
    }

    #[test]
    fn flags_file() {
        assert_eq!(
            parse_flags("T\nF\n  t \nfalse\n").unwrap(),
            vec![true, false, true, false]
        );
        let err = parse_flags("T\n\nF\n").unwrap_err();
        assert!(matches!(err, AlignError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn empty_files_are_empty_series() {
        assert_eq!(parse_pairs("").unwrap(), (vec![], vec![]));
        assert!(parse_times("", None).unwrap().is_empty());
        assert!(parse_flags("").unwrap().is_empty());
    }
}
