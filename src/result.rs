use std::collections::BTreeMap;

use ingest::Provenance;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use stats::{LengthFrequency, WordStatistics, WordTally};

/// The outcome of one successful request.
///
/// Serializes with the field names clients already consume:
///
/// ```json
/// {
///   "url": null,
///   "text": "thy brother's blood",
///   "wordcount": 3,
///   "averageWordLength": 5.666666666666667,
///   "groupedCounts": {"3": 1, "5": 1, "9": 1},
///   "errorMessage": null,
///   "mostFrequentlyOccuringWordLength": [{"3": 1}, {"5": 1}, {"9": 1}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Source URL; only set for remote text.
    pub url: Option<String>,
    pub text: String,
    #[serde(rename = "wordcount")]
    pub word_count: usize,
    pub average_word_length: f64,
    pub grouped_counts: WordTally,
    /// Always `None` on success; failures are returned as errors.
    pub error_message: Option<String>,
    #[serde(
        rename = "mostFrequentlyOccuringWordLength",
        serialize_with = "serialize_length_entries"
    )]
    pub most_frequent_lengths: Vec<LengthFrequency>,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl AnalysisResult {
    pub(crate) fn assemble(text: String, provenance: Provenance, stats: WordStatistics) -> Self {
        let WordStatistics {
            word_count,
            average_word_length,
            grouped_counts,
            most_frequent_lengths,
        } = stats;

        Self {
            url: provenance.url().map(str::to_owned),
            text,
            word_count,
            average_word_length,
            grouped_counts,
            error_message: None,
            most_frequent_lengths,
            provenance,
        }
    }
}

/// Each entry becomes a one-key object, `{"<length>": <count>}`.
fn serialize_length_entries<S>(entries: &[LengthFrequency], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(entries.len()))?;
    for entry in entries {
        seq.serialize_element(&BTreeMap::from([(entry.length, entry.count)]))?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let stats = stats::analyze(["thy", "brother's", "blood"]).unwrap();
        let result = AnalysisResult::assemble(
            "thy brother's blood".into(),
            Provenance::Inline,
            stats,
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["url"], json!(null));
        assert_eq!(value["text"], json!("thy brother's blood"));
        assert_eq!(value["wordcount"], json!(3));
        assert_eq!(value["groupedCounts"], json!({"3": 1, "5": 1, "9": 1}));
        assert_eq!(value["errorMessage"], json!(null));
        assert_eq!(
            value["mostFrequentlyOccuringWordLength"],
            json!([{"3": 1}, {"5": 1}, {"9": 1}])
        );
        assert!(value.get("provenance").is_none());
    }

    #[test]
    fn remote_provenance_sets_url() {
        let stats = stats::analyze(["word"]).unwrap();
        let result = AnalysisResult::assemble(
            "word".into(),
            Provenance::Remote {
                url: "http://host/a.txt".into(),
            },
            stats,
        );
        assert_eq!(result.url.as_deref(), Some("http://host/a.txt"));
    }
}
