//! Rendering of batch results.
//!
//! The `text` format is what downstream jobs already parse: one value per
//! line, integers for sentinels, deltas and empty-input results, and
//! shortest round-trip decimals (always with a fractional part) for computed
//! scores. `json` and `tsv` add the row index and an explicit status.

use serde::{Deserialize, Serialize};

use crate::core::types::{PairScore, Verdict, MALFORMED_TITLE_ARTIST};
use crate::matching::Policy;
use crate::text::charset::{is_clean, is_foreign_script};
use crate::text::NormalizedString;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Tsv,
}

/// Format a computed score as a decimal.
///
/// Integral values keep a `.0`; magnitudes below `1e-4` or from `1e16` up use
/// exponent form with at least two exponent digits.
///
/// # Examples
///
/// ```
/// use lexalign::batch::format::format_decimal;
///
/// assert_eq!(format_decimal(1.0), "1.0");
/// assert_eq!(format_decimal(0.88), "0.88");
/// assert_eq!(format_decimal(1.0 - 6.0 / 5.0), "-0.19999999999999996");
/// assert_eq!(format_decimal(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{value:e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return scientific;
        };
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Legacy encoding of one row.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_text(score: &PairScore, policy: Policy) -> String {
    let sentinels = policy.sentinels();
    match score {
        PairScore::Ratio(Verdict::Scored(v)) => format_decimal(*v),
        PairScore::Ratio(Verdict::Trivial(v)) => format!("{}", *v as i64),
        PairScore::Count(Verdict::Scored(n) | Verdict::Trivial(n)) => n.to_string(),
        PairScore::Ratio(Verdict::Ignored) | PairScore::Count(Verdict::Ignored) => {
            sentinels.ignored.to_string()
        }
        PairScore::Ratio(Verdict::Invalid) | PairScore::Count(Verdict::Invalid) => {
            sentinels.invalid.to_string()
        }
        PairScore::Malformed => MALFORMED_TITLE_ARTIST.to_string(),
    }
}

#[derive(Serialize)]
struct ScoreRecord {
    row: usize,
    status: crate::core::types::Status,
    score: serde_json::Value,
}

fn json_value(score: &PairScore, policy: Policy) -> serde_json::Value {
    let sentinels = policy.sentinels();
    match score {
        PairScore::Ratio(Verdict::Scored(v) | Verdict::Trivial(v)) => serde_json::Value::from(*v),
        PairScore::Count(Verdict::Scored(n) | Verdict::Trivial(n)) => serde_json::Value::from(*n),
        PairScore::Ratio(Verdict::Ignored) | PairScore::Count(Verdict::Ignored) => {
            serde_json::Value::from(sentinels.ignored)
        }
        PairScore::Ratio(Verdict::Invalid) | PairScore::Count(Verdict::Invalid) => {
            serde_json::Value::from(sentinels.invalid)
        }
        PairScore::Malformed => serde_json::Value::from(MALFORMED_TITLE_ARTIST),
    }
}

/// Render scored rows in the requested format.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_scores(
    scores: &[PairScore],
    policy: Policy,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for score in scores {
                out.push_str(&encode_text(score, policy));
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let records: Vec<ScoreRecord> = scores
                .iter()
                .enumerate()
                .map(|(row, score)| ScoreRecord {
                    row,
                    status: score.status(),
                    score: json_value(score, policy),
                })
                .collect();
            out.push_str(&serde_json::to_string_pretty(&records)?);
            out.push('\n');
        }
        OutputFormat::Tsv => {
            out.push_str("row\tstatus\tscore\n");
            for (row, score) in scores.iter().enumerate() {
                out.push_str(&format!(
                    "{row}\t{}\t{}\n",
                    score.status(),
                    encode_text(score, policy)
                ));
            }
        }
    }
    Ok(out)
}

#[derive(Serialize)]
struct NormalizedRecord<'a> {
    row: usize,
    normalized: &'a str,
    clean: bool,
    foreign_script: bool,
}

/// Render normalized lines in the requested format.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_normalized(
    lines: &[NormalizedString],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for line in lines {
                out.push_str(line.as_str());
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let records: Vec<NormalizedRecord<'_>> = lines
                .iter()
                .enumerate()
                .map(|(row, line)| NormalizedRecord {
                    row,
                    normalized: line.as_str(),
                    clean: is_clean(line.as_str()),
                    foreign_script: is_foreign_script(line.as_str()),
                })
                .collect();
            out.push_str(&serde_json::to_string_pretty(&records)?);
            out.push('\n');
        }
        OutputFormat::Tsv => {
            out.push_str("row\tnormalized\tclean\tforeign_script\n");
            for (row, line) in lines.iter().enumerate() {
                out.push_str(&format!(
                    "{row}\t{line}\t{}\t{}\n",
                    is_clean(line.as_str()),
                    is_foreign_script(line.as_str())
                ));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(-3.0), "-3.0");
        assert_eq!(format_decimal(1.0 - 2.0 / 18.0), "0.8888888888888888");
        assert_eq!(format_decimal(19.0 / 33.0), "0.5757575757575758");
        assert_eq!(format_decimal(0.0001), "0.0001");
        assert_eq!(format_decimal(0.000_015), "1.5e-05");
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_encode_text() {
        let policy = Policy::Similarity;
        assert_eq!(encode_text(&PairScore::Ratio(Verdict::Scored(1.0)), policy), "1.0");
        assert_eq!(encode_text(&PairScore::Ratio(Verdict::Trivial(1.0)), policy), "1");
        assert_eq!(encode_text(&PairScore::Ratio(Verdict::Trivial(0.0)), policy), "0");
        assert_eq!(encode_text(&PairScore::Ratio(Verdict::Ignored), policy), "-2");
        assert_eq!(encode_text(&PairScore::Ratio(Verdict::Invalid), policy), "-1");
        assert_eq!(encode_text(&PairScore::Malformed, Policy::TitleArtist), "-13");

        let policy = Policy::WordDelta;
        assert_eq!(encode_text(&PairScore::Count(Verdict::Scored(-3)), policy), "-3");
        assert_eq!(encode_text(&PairScore::Count(Verdict::Ignored), policy), "-1000");
        assert_eq!(encode_text(&PairScore::Count(Verdict::Invalid), policy), "-2000");
    }

    #[test]
    fn test_render_text() {
        let scores = [
            PairScore::Ratio(Verdict::Scored(0.88)),
            PairScore::Ratio(Verdict::Ignored),
            PairScore::Ratio(Verdict::Trivial(1.0)),
        ];
        let text = render_scores(&scores, Policy::Similarity, OutputFormat::Text).unwrap();
        assert_eq!(text, "0.88\n-2\n1\n");
    }

    #[test]
    fn test_render_tsv() {
        let scores = [PairScore::Count(Verdict::Scored(2)), PairScore::Count(Verdict::Invalid)];
        let tsv = render_scores(&scores, Policy::WordDelta, OutputFormat::Tsv).unwrap();
        assert_eq!(tsv, "row\tstatus\tscore\n0\tscored\t2\n1\tinvalid\t-2000\n");
    }

    #[test]
    fn test_render_json() {
        let scores = [PairScore::Ratio(Verdict::Scored(0.5)), PairScore::Malformed];
        let json = render_scores(&scores, Policy::TitleArtist, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["row"], 0);
        assert_eq!(parsed[0]["status"], "scored");
        assert_eq!(parsed[0]["score"], 0.5);
        assert_eq!(parsed[1]["status"], "malformed");
        assert_eq!(parsed[1]["score"], -13);
    }

    #[test]
    fn test_render_normalized() {
        let lines = vec![normalize("Hello, World!"), normalize("恋")];
        let text = render_normalized(&lines, OutputFormat::Text).unwrap();
        assert_eq!(text, "hello world\n恋\n");

        let tsv = render_normalized(&lines, OutputFormat::Tsv).unwrap();
        assert!(tsv.contains("0\thello world\ttrue\tfalse\n"));
        assert!(tsv.contains("1\t恋\tfalse\ttrue\n"));
    }
}
