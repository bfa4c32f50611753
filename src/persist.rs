//! Text form of a probability table: one `word\tzero\tone\ttwo\tlots` row per
//! vocabulary word, no header.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader, BufWriter},
    path::Path,
};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::{
    error::{ClassifierError, Result},
    probability::{ProbabilityTable, WordProbabilities},
    vocabulary::Vocabulary,
};

const FIELDS: usize = 5;

/// Writes the rows of `table` in vocabulary order.
pub fn write_table<W: io::Write>(
    table: &ProbabilityTable,
    vocabulary: &Vocabulary,
    writer: W,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for word in vocabulary.iter() {
        let probs = table
            .get(word)
            .ok_or_else(|| ClassifierError::MissingVocabularyWord(word.to_string()))?;
        let [zero, one, two, lots] = probs.as_array();
        // `Display` for f64 is the shortest string that parses back to the same value.
        writer.write_record(&[
            word.to_string(),
            zero.to_string(),
            one.to_string(),
            two.to_string(),
            lots.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_table<R: io::Read>(reader: R) -> Result<ProbabilityTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let malformed = |reason: String| ClassifierError::MalformedTable { line, reason };

        if record.len() != FIELDS {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                FIELDS,
                record.len()
            )));
        }

        let mut probs = [0.0; 4];
        for (slot, field) in probs.iter_mut().zip(record.iter().skip(1)) {
            let p: f64 = field
                .trim()
                .parse()
                .map_err(|_| malformed(format!("'{}' is not a number", field)))?;
            if !(0.0..=1.0).contains(&p) {
                return Err(malformed(format!("probability {} is outside [0, 1]", p)));
            }
            *slot = p;
        }

        let word = &record[0];
        if !seen.insert(word.to_string()) {
            return Err(malformed(format!("duplicate word '{}'", word)));
        }

        let [zero, one, two, lots] = probs;
        rows.push((word.to_string(), WordProbabilities::new(zero, one, two, lots)));
    }

    Ok(rows.into_iter().collect())
}

pub fn save_table<P: AsRef<Path>>(
    table: &ProbabilityTable,
    vocabulary: &Vocabulary,
    path: P,
) -> Result<()> {
    let file = File::create(path)?;
    write_table(table, vocabulary, BufWriter::new(file))
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ProbabilityTable> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        count_class::Bucketing, features::FeatureVector, frequency::FrequencyTable,
        probability::Smoothing,
    };

    fn sample() -> (Vocabulary, ProbabilityTable) {
        let vocabulary = Vocabulary::from_text("free meeting winner");
        let table: ProbabilityTable = vec![
            ("free", WordProbabilities::new(0.5, 0.0, 0.0, 0.5)),
            ("meeting", WordProbabilities::new(0.5, 0.5, 0.0, 0.0)),
            (
                "winner",
                WordProbabilities::new(1.0 / 3.0, 1.0 / 7.0, 0.1, 1.0 - 1.0 / 3.0 - 1.0 / 7.0 - 0.1),
            ),
        ]
        .into_iter()
        .collect();
        (vocabulary, table)
    }

    #[test]
    fn writes_tab_separated_rows_in_vocabulary_order() {
        let (vocabulary, table) = sample();
        let mut out = Vec::new();
        write_table(&table, &vocabulary, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "free\t0.5\t0\t0\t0.5");
        assert_eq!(lines[1], "meeting\t0.5\t0.5\t0\t0");
        assert!(lines[2].starts_with("winner\t"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn round_trips_exactly() {
        let (vocabulary, table) = sample();
        let mut out = Vec::new();
        write_table(&table, &vocabulary, &mut out).unwrap();

        let restored = read_table(out.as_slice()).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn round_trips_estimated_tables_through_files() {
        let vocabulary = Vocabulary::from_text("a b c");
        let documents: Vec<FeatureVector> = (0..13u32)
            .map(|i| vec![("a", i % 4), ("b", i % 3)].into_iter().collect())
            .collect();
        let freq = FrequencyTable::build(&documents, &vocabulary, Bucketing::default());
        let table = ProbabilityTable::estimate(&freq, freq.documents(), Smoothing::Laplace).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam-probability.txt");
        save_table(&table, &vocabulary, &path).unwrap();
        let restored = load_table(&path).unwrap();

        for word in vocabulary.iter() {
            let before = table.get(word).unwrap().as_array();
            let after = restored.get(word).unwrap().as_array();
            for (b, a) in before.iter().zip(after.iter()) {
                assert!((b - a).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn short_rows_are_malformed() {
        let err = read_table("free\t0.5\t0.5\n".as_bytes()).unwrap_err();
        match err {
            ClassifierError::MalformedTable { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("expected 5 fields"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn bad_numbers_are_malformed() {
        let input = "free\t0.5\t0\t0\t0.5\nmeeting\thalf\t0.5\t0\t0\n";
        match read_table(input.as_bytes()).unwrap_err() {
            ClassifierError::MalformedTable { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(read_table("free\t1.5\t0\t0\t0\n".as_bytes()).is_err());
    }

    #[test]
    fn duplicate_rows_are_malformed() {
        let input = "free\t0.5\t0\t0\t0.5\nfree\t1\t0\t0\t0\n";
        match read_table(input.as_bytes()).unwrap_err() {
            ClassifierError::MalformedTable { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("duplicate word 'free'"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn refuses_to_write_tables_missing_a_word() {
        let (_, table) = sample();
        let vocabulary = Vocabulary::from_text("free prize");
        let err = write_table(&table, &vocabulary, Vec::new()).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingVocabularyWord(w) if w == "prize"));
    }
}
