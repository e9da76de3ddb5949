// src/fasta/models.rs
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Column holding the record identifier used for selection
pub const ID_COLUMN: &str = "SEQ_ID";
/// Column holding the display name appended to the label
pub const NAME_COLUMN: &str = "SHORT_NAME";
/// Column holding the sequence payload
pub const SEQUENCE_COLUMN: &str = "PROTEIN_SEQUENCE";
/// Required headers, in the order they are reported on failure
pub const REQUIRED_COLUMNS: [&str; 3] = [ID_COLUMN, NAME_COLUMN, SEQUENCE_COLUMN];

/// Placeholder display name for rows without a SHORT_NAME field
pub const MISSING_NAME: &str = "N/A";
/// Characters per sequence line (standard FASTA wrapping)
pub const LINE_WIDTH: usize = 60;

/// Which records get extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCriterion {
    All,
    Ids(BTreeSet<String>),
}

impl SelectionCriterion {
    /// Parses the user's selector: `all` (any case) or a comma-separated id list.
    /// Returns `None` when neither yields anything to extract.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(SelectionCriterion::All);
        }

        let ids: BTreeSet<String> = input
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            None
        } else {
            Some(SelectionCriterion::Ids(ids))
        }
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            SelectionCriterion::All => true,
            SelectionCriterion::Ids(ids) => !id.is_empty() && ids.contains(id),
        }
    }

    /// Human readable description used in the start-of-run message.
    pub fn describe(&self) -> String {
        match self {
            SelectionCriterion::All => "ALL sequences".to_string(),
            SelectionCriterion::Ids(ids) => format!("{} target ID(s)", ids.len()),
        }
    }
}

/// One FASTA record ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub label: String,
    pub sequence: String,
}

impl SequenceEntry {
    /// Builds an entry labelled `{id}_{name}`; `None` if the trimmed sequence is empty.
    pub fn new(id: &str, name: &str, sequence: &str) -> Option<Self> {
        let sequence = sequence.trim();
        if sequence.is_empty() {
            return None;
        }
        Some(Self {
            label: format!("{}_{}", id, name),
            sequence: sequence.to_string(),
        })
    }

    /// Writes the header line followed by the sequence wrapped at `LINE_WIDTH` characters.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, ">{}", self.label)?;
        for line in wrap_chars(&self.sequence, LINE_WIDTH) {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Splits `s` into slices of at most `width` chars without cutting a code point.
fn wrap_chars(s: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let split = rest
            .char_indices()
            .nth(width)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(split);
        rest = tail;
        Some(line)
    })
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub entries_written: usize,
    pub rows_read: usize,
    /// Matching rows dropped because their sequence was blank
    pub skipped_empty: usize,
    /// Requested ids that never appeared in the source
    pub unmatched_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entry: &SequenceEntry) -> String {
        let mut buf = Vec::new();
        entry.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parse_all_is_case_insensitive_and_trimmed() {
        assert_eq!(SelectionCriterion::parse("all"), Some(SelectionCriterion::All));
        assert_eq!(SelectionCriterion::parse("  ALL "), Some(SelectionCriterion::All));
        assert_eq!(SelectionCriterion::parse("aLl"), Some(SelectionCriterion::All));
    }

    #[test]
    fn parse_id_list_trims_and_drops_empty_entries() {
        let parsed = SelectionCriterion::parse(" X1 , ,X2,, X1 ,").unwrap();
        let expected: BTreeSet<String> = ["X1", "X2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parsed, SelectionCriterion::Ids(expected));
    }

    #[test]
    fn parse_without_any_id_cancels() {
        assert_eq!(SelectionCriterion::parse(""), None);
        assert_eq!(SelectionCriterion::parse("  "), None);
        assert_eq!(SelectionCriterion::parse(" , ,, "), None);
    }

    #[test]
    fn id_set_never_matches_empty_identifier() {
        let criterion = SelectionCriterion::Ids(["".to_string(), "X1".to_string()].into());
        assert!(criterion.matches("X1"));
        assert!(!criterion.matches(""));
        assert!(!criterion.matches("x1"));
        assert!(SelectionCriterion::All.matches(""));
    }

    #[test]
    fn describe_reports_mode() {
        assert_eq!(SelectionCriterion::All.describe(), "ALL sequences");
        let ids = SelectionCriterion::parse("A,B,C").unwrap();
        assert_eq!(ids.describe(), "3 target ID(s)");
    }

    #[test]
    fn blank_sequence_yields_no_entry() {
        assert!(SequenceEntry::new("X1", "kinase", "").is_none());
        assert!(SequenceEntry::new("X1", "kinase", " \t\r\n ").is_none());
    }

    #[test]
    fn label_joins_with_underscore_without_escaping() {
        let entry = SequenceEntry::new("X_1", "my_name", "  MKV ").unwrap();
        assert_eq!(entry.label, "X_1_my_name");
        assert_eq!(entry.sequence, "MKV");
        assert_eq!(render(&entry), ">X_1_my_name\nMKV\n");
    }

    #[test]
    fn sixty_one_chars_wrap_to_two_lines() {
        let seq = "A".repeat(61);
        let out = render(&SequenceEntry::new("id", "n", &seq).unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![">id_n", &seq[..60], "A"]);
    }

    #[test]
    fn exact_multiple_of_width_has_no_trailing_empty_line() {
        let seq = "M".repeat(120);
        let out = render(&SequenceEntry::new("id", "n", &seq).unwrap());
        assert_eq!(out, format!(">id_n\n{}\n{}\n", &seq[..60], &seq[60..]));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn wrapping_counts_characters_not_bytes() {
        let seq = "é".repeat(61);
        let out = render(&SequenceEntry::new("id", "n", &seq).unwrap());
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 60);
        assert_eq!(lines[1], "é");
    }
}
