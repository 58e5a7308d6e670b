//! Diagnostics produced while baking.
//!
//! Nothing in the bake is fatal. Problems that a designer should hear about
//! are collected as [`BakeWarning`] values on the bake output; the host
//! decides how to surface them.

use serde::Serialize;

/// A non-fatal problem found while baking one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum BakeWarning {
    /// A required identifier was empty or whitespace. The facet's record
    /// was not emitted.
    #[error("{target}: {facet}.{field} is empty, record skipped")]
    MissingIdentifier {
        /// Name of the scene object being baked.
        target: String,
        /// Facet that owns the field.
        facet: &'static str,
        /// Authoring field name.
        field: &'static str,
    },

    /// An identifier exceeded its byte budget and was cut at a character
    /// boundary.
    #[error("{target}: {facet}.{field} is {original_bytes} bytes, truncated to fit {max_bytes}")]
    IdentifierTruncated {
        /// Name of the scene object being baked.
        target: String,
        /// Facet that owns the field.
        facet: &'static str,
        /// Authoring field name.
        field: &'static str,
        /// Byte budget of the identifier.
        max_bytes: usize,
        /// Byte length of the trimmed authored text.
        original_bytes: usize,
    },
}

impl BakeWarning {
    /// Name of the scene object the warning refers to.
    pub fn target(&self) -> &str {
        match self {
            Self::MissingIdentifier { target, .. } | Self::IdentifierTruncated { target, .. } => {
                target
            }
        }
    }

    /// Facet the warning refers to.
    pub const fn facet(&self) -> &'static str {
        match self {
            Self::MissingIdentifier { facet, .. } | Self::IdentifierTruncated { facet, .. } => facet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_target_and_field() {
        let warning = BakeWarning::MissingIdentifier {
            target: "Frigate_01".to_owned(),
            facet: "hull_id",
            field: "hull_id",
        };
        let text = warning.to_string();
        assert!(text.contains("Frigate_01"));
        assert!(text.contains("hull_id.hull_id"));
        assert_eq!(warning.target(), "Frigate_01");
        assert_eq!(warning.facet(), "hull_id");
    }
}
