//! Descriptive metadata of an uploaded document
//!
//! Carries the title, description, content language, source identifier and
//! the four coded classifications written to the submission set and the
//! DocumentReference.

use super::errors::InvalidArgument;
use crate::catalog;
use crate::fhir::datatypes::Coding;
use serde::{Deserialize, Serialize};

/// Metadata of one document upload
///
/// # Examples
///
/// ```
/// use epd_gateway::catalog;
/// use epd_gateway::domain::metadata::DocumentMetadata;
///
/// let metadata = DocumentMetadata::builder()
///     .title("Lab report")
///     .description("Blood count")
///     .content_language("de-CH")
///     .source_identifier("urn:oid:1.3.6.1.4.1.12559.11.13.2.5")
///     .category(catalog::class_code("419891008").unwrap().coding())
///     .type_coding(catalog::type_code("419891008").unwrap().coding())
///     .facility(catalog::facility_code("264358009").unwrap().coding())
///     .practice_setting(catalog::practice_setting_code("394802001").unwrap().coding())
///     .build()
///     .unwrap();
///
/// assert!(metadata.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,

    pub description: String,

    /// The caller asserts JSON content is a FHIR resource
    #[serde(default)]
    pub is_fhir: bool,

    /// BCP 47 language tag of the content
    pub content_language: String,

    /// Identifier of the document source, usually an OID URN
    pub source_identifier: String,

    /// Class code, written to DocumentReference.category
    pub category: Coding,

    /// Type code, written to DocumentReference.type
    pub type_coding: Coding,

    /// Healthcare facility type of the originating organization
    pub facility: Coding,

    /// Clinical specialty of the author
    pub practice_setting: Coding,
}

impl DocumentMetadata {
    /// Creates a new builder
    pub fn builder() -> DocumentMetadataBuilder {
        DocumentMetadataBuilder::default()
    }

    /// Checks the type code against the class/type combination matrix
    ///
    /// Categories outside the matrix are accepted with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::IncompatibleTypeCode`] if the category is
    /// known and does not allow the type code.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        let class_code = self.category.code_str();
        let type_code = self.type_coding.code_str();

        if !catalog::has_class_type_combination(class_code) {
            tracing::warn!(
                class_code,
                type_code,
                "Class code not in combination matrix, type code not checked"
            );
            return Ok(());
        }

        if catalog::is_valid_class_type_combination(class_code, type_code) {
            Ok(())
        } else {
            Err(InvalidArgument::IncompatibleTypeCode {
                class_code: class_code.to_string(),
                type_code: type_code.to_string(),
            })
        }
    }
}

/// Builder for [`DocumentMetadata`]
#[derive(Debug, Default)]
pub struct DocumentMetadataBuilder {
    title: Option<String>,
    description: Option<String>,
    is_fhir: bool,
    content_language: Option<String>,
    source_identifier: Option<String>,
    category: Option<Coding>,
    type_coding: Option<Coding>,
    facility: Option<Coding>,
    practice_setting: Option<Coding>,
}

impl DocumentMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks `application/json` content as a FHIR resource
    pub fn is_fhir(mut self, is_fhir: bool) -> Self {
        self.is_fhir = is_fhir;
        self
    }

    pub fn content_language(mut self, language: impl Into<String>) -> Self {
        self.content_language = Some(language.into());
        self
    }

    pub fn source_identifier(mut self, source_identifier: impl Into<String>) -> Self {
        self.source_identifier = Some(source_identifier.into());
        self
    }

    pub fn category(mut self, coding: Coding) -> Self {
        self.category = Some(coding);
        self
    }

    pub fn type_coding(mut self, coding: Coding) -> Self {
        self.type_coding = Some(coding);
        self
    }

    pub fn facility(mut self, coding: Coding) -> Self {
        self.facility = Some(coding);
        self
    }

    pub fn practice_setting(mut self, coding: Coding) -> Self {
        self.practice_setting = Some(coding);
        self
    }

    /// Builds the metadata
    ///
    /// # Errors
    ///
    /// Returns an error if any field other than `description` and `is_fhir`
    /// is missing
    pub fn build(self) -> Result<DocumentMetadata, String> {
        Ok(DocumentMetadata {
            title: self.title.ok_or("title is required")?,
            description: self.description.unwrap_or_default(),
            is_fhir: self.is_fhir,
            content_language: self.content_language.ok_or("content_language is required")?,
            source_identifier: self
                .source_identifier
                .ok_or("source_identifier is required")?,
            category: self.category.ok_or("category is required")?,
            type_coding: self.type_coding.ok_or("type_coding is required")?,
            facility: self.facility.ok_or("facility is required")?,
            practice_setting: self.practice_setting.ok_or("practice_setting is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(class: &str, typ: &str) -> DocumentMetadataBuilder {
        DocumentMetadata::builder()
            .title("Report")
            .content_language("de-CH")
            .source_identifier("urn:oid:1.2.3")
            .category(Coding::new(catalog::SNOMED_CT, class, "class"))
            .type_coding(Coding::new(catalog::SNOMED_CT, typ, "type"))
            .facility(Coding::new(catalog::SNOMED_CT, "264358009", "facility"))
            .practice_setting(Coding::new(catalog::SNOMED_CT, "394802001", "setting"))
    }

    #[test]
    fn test_builder_missing_field() {
        let result = DocumentMetadata::builder().title("Report").build();
        assert!(result.unwrap_err().contains("content_language is required"));
    }

    #[test]
    fn test_builder_defaults() {
        let metadata = builder("419891008", "419891008").build().unwrap();
        assert_eq!(metadata.description, "");
        assert!(!metadata.is_fhir);
    }

    #[test]
    fn test_validate_allowed_combination() {
        let metadata = builder("371531000", "371529009").build().unwrap();
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn test_validate_unspecified_class_requires_unspecified_type() {
        let metadata = builder("419891008", "371529009").build().unwrap();
        assert_eq!(
            metadata.validate(),
            Err(InvalidArgument::IncompatibleTypeCode {
                class_code: "419891008".to_string(),
                type_code: "371529009".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_unknown_class_passes() {
        let metadata = builder("12345", "371529009").build().unwrap();
        assert!(metadata.validate().is_ok());
    }
}
