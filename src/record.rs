//! Canonical benchmark record and key normalization
//!
//! Every entry, whatever its source, is normalized into a [`Record`] carrying
//! exactly the ten canonical fields as strings (empty when unknown). Source
//! key names are mapped through a fixed alias table; keys that resolve to no
//! canonical field are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten canonical fields, in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// e.g. "CheXNet (2017)"
    PaperYear,
    /// e.g. "DenseNet-121"
    Model,
    /// e.g. "384x384"
    InputResolution,
    /// e.g. "Weighted BCE"
    Loss,
    /// e.g. "AdamW"
    Optimizer,
    /// e.g. "30"
    Epochs,
    /// e.g. "0.89" or "Avg AUC 0.89"
    ReportedAuc,
    /// e.g. "0.61"
    ReportedF1,
    /// e.g. "Grad-CAM++"
    Interpretability,
    Notes,
}

impl Field {
    /// All fields in canonical column order
    pub const ALL: [Field; 10] = [
        Field::PaperYear,
        Field::Model,
        Field::InputResolution,
        Field::Loss,
        Field::Optimizer,
        Field::Epochs,
        Field::ReportedAuc,
        Field::ReportedF1,
        Field::Interpretability,
        Field::Notes,
    ];

    /// Canonical snake_case name, used as the CSV and xlsx header
    pub fn name(self) -> &'static str {
        match self {
            Field::PaperYear => "paper_year",
            Field::Model => "model",
            Field::InputResolution => "input_resolution",
            Field::Loss => "loss",
            Field::Optimizer => "optimizer",
            Field::Epochs => "epochs",
            Field::ReportedAuc => "reported_auc",
            Field::ReportedF1 => "reported_f1",
            Field::Interpretability => "interpretability",
            Field::Notes => "notes",
        }
    }

    /// Human-readable column label for the Markdown table
    pub fn label(self) -> &'static str {
        match self {
            Field::PaperYear => "Paper & Year",
            Field::Model => "Model Backbone",
            Field::InputResolution => "Input Resolution",
            Field::Loss => "Loss Function",
            Field::Optimizer => "Optimizer",
            Field::Epochs => "Epochs",
            Field::ReportedAuc => "Reported AUC",
            Field::ReportedF1 => "Reported F1",
            Field::Interpretability => "Interpretability",
            Field::Notes => "Notes",
        }
    }

    /// Resolve a canonical name to its field
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Resolve an arbitrary source key to a canonical field
    ///
    /// The key is trimmed and lowercased, then looked up in the alias table.
    /// Unmatched keys fall back to a space-to-underscore transform and a final
    /// match against the canonical names; `None` means the key is dropped.
    pub fn from_key(key: &str) -> Option<Field> {
        let k = key.trim().to_lowercase();
        let field = match k.as_str() {
            "paper & year" | "paper" | "year" => Field::PaperYear,
            "model backbone" | "backbone" | "architecture" => Field::Model,
            "input" | "resolution" | "input size" | "input resolution" => Field::InputResolution,
            "loss" | "loss function" => Field::Loss,
            "optimizer" => Field::Optimizer,
            "epochs" => Field::Epochs,
            "reported auc" | "auc" => Field::ReportedAuc,
            "reported f1" | "f1" => Field::ReportedF1,
            "interpretability (grad-cam, attention, etc.)" | "interpretability" => {
                Field::Interpretability
            }
            "notes" => Field::Notes,
            _ => return Field::from_name(&k.replace(' ', "_")),
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One benchmark entry, a complete mapping over the canonical fields
///
/// Every field is always present as a string; unknown values are empty
/// strings. Deserialization defaults missing columns to empty, so older CSVs
/// with fewer columns load leniently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub paper_year: String,
    pub model: String,
    pub input_resolution: String,
    pub loss: String,
    pub optimizer: String,
    pub epochs: String,
    pub reported_auc: String,
    pub reported_f1: String,
    pub interpretability: String,
    pub notes: String,
}

impl Record {
    /// Build a Record from arbitrary (key, value) pairs
    ///
    /// Keys pass through [`Field::from_key`]; unrecognized keys are silently
    /// discarded, recognized ones overwrite the field with the trimmed value.
    /// The resolution separators are unified afterwards.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Record
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Record::default();
        for (key, value) in pairs {
            if let Some(field) = Field::from_key(key.as_ref()) {
                record.set(field, value.as_ref().trim().to_string());
            }
        }
        record.input_resolution = normalize_resolution(&record.input_resolution);
        record
    }

    /// Field accessor in canonical terms
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PaperYear => &self.paper_year,
            Field::Model => &self.model,
            Field::InputResolution => &self.input_resolution,
            Field::Loss => &self.loss,
            Field::Optimizer => &self.optimizer,
            Field::Epochs => &self.epochs,
            Field::ReportedAuc => &self.reported_auc,
            Field::ReportedF1 => &self.reported_f1,
            Field::Interpretability => &self.interpretability,
            Field::Notes => &self.notes,
        }
    }

    /// Field mutator in canonical terms
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::PaperYear => self.paper_year = value,
            Field::Model => self.model = value,
            Field::InputResolution => self.input_resolution = value,
            Field::Loss => self.loss = value,
            Field::Optimizer => self.optimizer = value,
            Field::Epochs => self.epochs = value,
            Field::ReportedAuc => self.reported_auc = value,
            Field::ReportedF1 => self.reported_f1 = value,
            Field::Interpretability => self.interpretability = value,
            Field::Notes => self.notes = value,
        }
    }

    /// (name, value) pairs in canonical order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Field::ALL.into_iter().map(|f| (f.name(), self.get(f)))
    }

    /// Identity key for deduplication: lowercased (paper_year, model)
    pub fn dedup_key(&self) -> (String, String) {
        (self.paper_year.to_lowercase(), self.model.to_lowercase())
    }
}

/// Unify "×" and uppercase "X" resolution separators to lowercase "x"
fn normalize_resolution(value: &str) -> String {
    value.replace('×', "x").replace('X', "x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution() {
        assert_eq!(Field::from_key("Architecture"), Some(Field::Model));
        assert_eq!(Field::from_key("  AUC "), Some(Field::ReportedAuc));
        assert_eq!(Field::from_key("Input Size"), Some(Field::InputResolution));
        assert_eq!(Field::from_key("Paper & Year"), Some(Field::PaperYear));
        assert_eq!(
            Field::from_key("Interpretability (Grad-CAM, attention, etc.)"),
            Some(Field::Interpretability)
        );
    }

    #[test]
    fn test_canonical_names_resolve_via_fallback() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.name()), Some(field));
        }
        // The fallback also catches spaced-out canonical names
        assert_eq!(Field::from_key("paper year"), Some(Field::PaperYear));
    }

    #[test]
    fn test_unknown_keys_dropped() {
        assert_eq!(Field::from_key("dataset split"), None);
        assert_eq!(Field::from_key(""), None);

        let record = Record::from_pairs([("Model Backbone", "ResNet-50"), ("GPU", "V100")]);
        assert_eq!(record.model, "ResNet-50");
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_from_pairs_trims_values() {
        let record = Record::from_pairs([("Optimizer", "  AdamW  "), ("Epochs", "30")]);
        assert_eq!(record.optimizer, "AdamW");
        assert_eq!(record.epochs, "30");
    }

    #[test]
    fn test_resolution_separators_unified() {
        let a = Record::from_pairs([("Input Resolution", "384×384")]);
        let b = Record::from_pairs([("Input Resolution", "384X384")]);
        assert_eq!(a.input_resolution, "384x384");
        assert_eq!(b.input_resolution, "384x384");
    }

    #[test]
    fn test_all_fields_present_as_strings() {
        let record = Record::from_pairs([("Model", "X")]);
        assert_eq!(record.pairs().count(), 10);
        for (_, value) in Record::default().pairs() {
            assert_eq!(value, "");
        }
    }

    #[test]
    fn test_dedup_key_lowercases() {
        let record = Record::from_pairs([("Paper", "CheXNet (2017)"), ("Backbone", "DenseNet-121")]);
        assert_eq!(
            record.dedup_key(),
            ("chexnet (2017)".to_string(), "densenet-121".to_string())
        );
    }
}
