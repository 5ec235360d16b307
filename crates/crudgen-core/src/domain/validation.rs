use crate::domain::{
    entities::{entity::EntityMetadata, plan::GenerationPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// The identifier-shape preconditions, checked before any filesystem
    /// mutation: exactly one identifier field, and it must be named `id`.
    pub fn validate_entity_metadata(metadata: &EntityMetadata) -> Result<(), DomainError> {
        let identifiers = metadata.identifier_fields();

        if identifiers.len() != 1 {
            return Err(DomainError::unsupported_schema(
                "composite primary keys are not supported",
            ));
        }

        if identifiers[0] != "id" {
            return Err(DomainError::unsupported_schema(
                "entity must expose an `id` identifier",
            ));
        }

        Ok(())
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(ids: &[&str]) -> EntityMetadata {
        EntityMetadata::new(
            ids.iter().map(|s| s.to_string()).chain(["title".into()]).collect(),
            ids.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn single_id_identifier_passes() {
        assert!(DomainValidator::validate_entity_metadata(&metadata(&["id"])).is_ok());
    }

    #[test]
    fn composite_identifier_rejected() {
        let err = DomainValidator::validate_entity_metadata(&metadata(&["id", "tenant"]))
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedSchema { .. }));
        assert!(err.to_string().contains("composite"));
    }

    #[test]
    fn missing_identifier_rejected() {
        assert!(DomainValidator::validate_entity_metadata(&metadata(&[])).is_err());
    }

    #[test]
    fn non_id_identifier_rejected() {
        let err = DomainValidator::validate_entity_metadata(&metadata(&["uuid"])).unwrap_err();
        assert!(err.to_string().contains("`id`"));
    }
}
