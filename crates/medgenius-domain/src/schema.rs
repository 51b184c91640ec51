//! Declared record schemas
//!
//! The upstream model's output shape is not contractually guaranteed, so
//! every analysis declares the shape it expects per field. One generic
//! normalizer consults the declaration instead of bespoke per-field
//! conditionals.

use std::fmt;

/// The declared shape of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single scalar value (string, number, bool).
    Scalar,
    /// A single nested mapping, e.g. `demographics`.
    Record,
    /// An ordered sequence of strings, e.g. `symptoms`.
    ScalarSeq,
    /// An ordered sequence of nested mappings, e.g. `drugRecommendations`.
    RecordSeq,
}

impl FieldShape {
    /// Whether this shape is materialized as a JSON array after
    /// normalization.
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldShape::ScalarSeq | FieldShape::RecordSeq)
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldShape::Scalar => "scalar",
            FieldShape::Record => "record",
            FieldShape::ScalarSeq => "sequence-of-scalar",
            FieldShape::RecordSeq => "sequence-of-record",
        };
        write!(f, "{}", name)
    }
}

/// An ordered set of declared fields for one analysis result.
///
/// Field order is the order fields were declared in; the normalizer
/// emits fields in this order so serialized records are stable.
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    fields: Vec<(String, FieldShape)>,
}

impl RecordSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with the given shape. Builder-style.
    pub fn field(mut self, name: impl Into<String>, shape: FieldShape) -> Self {
        self.fields.push((name.into(), shape));
        self
    }

    /// Iterate declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldShape)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), *s))
    }

    /// Look up the declared shape of a field.
    pub fn shape_of(&self, name: &str) -> Option<FieldShape> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_preserves_order() {
        let schema = RecordSchema::new()
            .field("demographics", FieldShape::Record)
            .field("symptoms", FieldShape::ScalarSeq)
            .field("allergies", FieldShape::ScalarSeq);

        let names: Vec<&str> = schema.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["demographics", "symptoms", "allergies"]);
    }

    #[test]
    fn test_shape_of() {
        let schema = RecordSchema::new()
            .field("patientData", FieldShape::Record)
            .field("drugRecommendations", FieldShape::RecordSeq);

        assert_eq!(schema.shape_of("patientData"), Some(FieldShape::Record));
        assert_eq!(
            schema.shape_of("drugRecommendations"),
            Some(FieldShape::RecordSeq)
        );
        assert_eq!(schema.shape_of("missing"), None);
    }

    #[test]
    fn test_is_sequence() {
        assert!(FieldShape::ScalarSeq.is_sequence());
        assert!(FieldShape::RecordSeq.is_sequence());
        assert!(!FieldShape::Scalar.is_sequence());
        assert!(!FieldShape::Record.is_sequence());
    }
}
