//! Step and single-field validation over a rule table

use super::schema::{employee_schemas, user_schemas, StepSchema};
use std::collections::HashMap;

/// Read access to form values by field name
pub trait FieldSource {
    /// Current value of `field`, or `None` when the record has no such field
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// Field name to message for every currently failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(HashMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Validates form data against one schema per step (steps are 1-based)
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    schemas: Vec<StepSchema>,
}

impl ValidationEngine {
    pub fn new(schemas: Vec<StepSchema>) -> Self {
        Self { schemas }
    }

    /// Engine for the nine-step employee form
    pub fn employee() -> Self {
        Self::new(employee_schemas())
    }

    /// Engine for the single-page user form
    pub fn user() -> Self {
        Self::new(user_schemas())
    }

    #[cfg(test)]
    pub fn step_count(&self) -> usize {
        self.schemas.len()
    }

    pub fn schema(&self, step: usize) -> Option<&StepSchema> {
        step.checked_sub(1).and_then(|idx| self.schemas.get(idx))
    }

    /// Validate every field of `step`, replacing the contents of `errors`.
    ///
    /// All violations are collected. Returns true when there are none.
    pub fn validate_step<D: FieldSource + ?Sized>(
        &self,
        data: &D,
        step: usize,
        errors: &mut ErrorMap,
    ) -> bool {
        errors.clear();

        let Some(schema) = self.schema(step) else {
            tracing::warn!("No validation schema for step {step}; treating it as valid");
            return true;
        };

        for rule in schema.rules() {
            let value = data.field_value(rule.field).unwrap_or_default();
            if let Some(message) = rule.check(value) {
                errors.insert(rule.field, message);
            }
        }

        tracing::debug!(step, violations = errors.len(), "Validated step");
        errors.is_empty()
    }

    /// Re-check a single field of `step`, leaving every other entry untouched.
    ///
    /// A field the step does not declare only loses its stale entry.
    pub fn validate_field<D: FieldSource + ?Sized>(
        &self,
        data: &D,
        field: &str,
        step: usize,
        errors: &mut ErrorMap,
    ) {
        errors.remove(field);

        let Some(rule) = self.schema(step).and_then(|s| s.rule_for(field)) else {
            return;
        };

        let value = data.field_value(field).unwrap_or_default();
        if let Some(message) = rule.check(value) {
            errors.insert(field, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record(HashMap<&'static str, &'static str>);

    impl Record {
        fn with(mut self, field: &'static str, value: &'static str) -> Self {
            self.0.insert(field, value);
            self
        }
    }

    impl FieldSource for Record {
        fn field_value(&self, field: &str) -> Option<&str> {
            self.0.get(field).copied()
        }
    }

    fn valid_record() -> Record {
        Record::default()
            .with("name", "Ahmad Wijaya")
            .with("email", "ahmad.wijaya@company.com")
            .with("phone", "081234567890")
            .with("address", "Jl. Merdeka 1")
            .with("city", "Bandung")
            .with("postalCode", "40115")
            .with("position", "Software Engineer")
            .with("department", "Engineering")
            .with("joinDate", "2023-01-15")
            .with("emergencyContact", "Rina")
            .with("emergencyPhone", "081298765432")
            .with("bankName", "BCA")
            .with("bankAccount", "1234567890")
            .with("taxNumber", "123456789012345")
            .with("education", "S1")
            .with("university", "ITB")
            .with("graduationYear", "2019")
            .with("status", "active")
    }

    mod error_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insert_get_remove() {
            let mut errors = ErrorMap::new();
            errors.insert("name", "Name is required");
            assert!(errors.contains("name"));
            assert_eq!(errors.get("name"), Some("Name is required"));
            assert_eq!(errors.remove("name"), Some("Name is required".to_string()));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_insert_overwrites() {
            let mut errors = ErrorMap::new();
            errors.insert("name", "first");
            errors.insert("name", "second");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get("name"), Some("second"));
        }
    }

    mod validate_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_step_passes_with_valid_data() {
            let engine = ValidationEngine::employee();
            let data = valid_record();
            for step in 1..=engine.step_count() {
                let mut errors = ErrorMap::new();
                assert!(engine.validate_step(&data, step, &mut errors), "step {step}");
                assert!(errors.is_empty(), "step {step}: {errors:?}");
            }
        }

        #[test]
        fn test_each_blank_required_field_is_reported() {
            let engine = ValidationEngine::employee();
            for step in 1..=engine.step_count() {
                let schema = engine.schema(step).unwrap().clone();
                for field in schema.fields() {
                    let data = valid_record().with(field, "");
                    let mut errors = ErrorMap::new();
                    assert!(!engine.validate_step(&data, step, &mut errors));
                    assert_eq!(errors.len(), 1, "{field}");
                    assert!(errors.contains(field));
                }
            }
        }

        #[test]
        fn test_collects_all_violations() {
            let engine = ValidationEngine::employee();
            let data = Record::default()
                .with("name", "Al")
                .with("email", "bad")
                .with("phone", "123");
            let mut errors = ErrorMap::new();

            assert!(!engine.validate_step(&data, 1, &mut errors));
            assert_eq!(errors.len(), 3);
            assert_eq!(
                errors.get("name"),
                Some("Name must be at least 3 characters")
            );
            assert_eq!(errors.get("email"), Some("Invalid email format"));
            assert_eq!(
                errors.get("phone"),
                Some("Invalid phone number format (10-13 digits)")
            );
        }

        #[test]
        fn test_clears_previous_errors() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            errors.insert("postalCode", "stale");
            errors.insert("unrelated", "stale");

            assert!(engine.validate_step(&valid_record(), 1, &mut errors));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_missing_field_is_treated_as_blank() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            assert!(!engine.validate_step(&Record::default(), 6, &mut errors));
            assert_eq!(errors.get("taxNumber"), Some("Tax number (NPWP) is required"));
        }

        #[test]
        fn test_postal_code_format() {
            let engine = ValidationEngine::employee();
            let data = valid_record().with("postalCode", "4011");
            let mut errors = ErrorMap::new();
            assert!(!engine.validate_step(&data, 2, &mut errors));
            assert_eq!(errors.get("postalCode"), Some("Postal code must be 5 digits"));
        }

        #[test]
        fn test_status_must_be_known() {
            let engine = ValidationEngine::employee();
            let data = valid_record().with("status", "retired");
            let mut errors = ErrorMap::new();
            assert!(!engine.validate_step(&data, 8, &mut errors));
            assert!(errors.contains("status"));
        }

        #[test]
        fn test_review_step_always_valid() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            assert!(engine.validate_step(&Record::default(), 9, &mut errors));
        }

        #[test]
        fn test_unknown_step_has_no_rules() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            errors.insert("name", "stale");
            assert!(engine.validate_step(&Record::default(), 0, &mut errors));
            assert!(engine.validate_step(&Record::default(), 42, &mut errors));
            assert!(errors.is_empty());
        }
    }

    mod validate_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fixed_field_clears_only_its_entry() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            errors.insert("name", "Name is required");
            errors.insert("email", "Invalid email format");

            let data = valid_record().with("email", "bad");
            engine.validate_field(&data, "name", 1, &mut errors);

            assert!(!errors.contains("name"));
            assert_eq!(errors.get("email"), Some("Invalid email format"));
        }

        #[test]
        fn test_still_failing_field_is_reinserted() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            errors.insert("phone", "Phone number is required");

            let data = valid_record().with("phone", "0812");
            engine.validate_field(&data, "phone", 1, &mut errors);

            assert_eq!(
                errors.get("phone"),
                Some("Invalid phone number format (10-13 digits)")
            );
        }

        #[test]
        fn test_field_without_previous_error_can_be_added() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            let data = valid_record().with("city", " ");
            engine.validate_field(&data, "city", 2, &mut errors);
            assert_eq!(errors.get("city"), Some("City is required"));
        }

        #[test]
        fn test_field_outside_step_only_removes_entry() {
            let engine = ValidationEngine::employee();
            let mut errors = ErrorMap::new();
            errors.insert("city", "City is required");

            let data = Record::default();
            engine.validate_field(&data, "city", 1, &mut errors);

            assert!(errors.is_empty());
        }
    }

    mod user_engine {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_user_role_must_be_known() {
            let engine = ValidationEngine::user();
            let data = Record::default()
                .with("name", "John Doe")
                .with("email", "john@example.com")
                .with("role", "Intern")
                .with("status", "active");
            let mut errors = ErrorMap::new();

            assert!(!engine.validate_step(&data, 1, &mut errors));
            assert_eq!(errors.len(), 1);
            assert!(errors.contains("role"));
        }
    }
}
