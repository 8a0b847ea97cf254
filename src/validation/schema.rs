//! Per-step rule tables for the employee and user forms

use super::rules::{
    FieldRule, BANK_ACCOUNT_PATTERN, PHONE_PATTERN, POSTAL_CODE_PATTERN, TAX_NUMBER_PATTERN,
    YEAR_PATTERN,
};

/// Values accepted by the status fields
pub const STATUS_OPTIONS: &[&str] = &["active", "inactive"];

/// Values accepted by the user role field
pub const ROLE_OPTIONS: &[&str] = &["Admin", "Manager", "Employee"];

const PHONE_FORMAT_MESSAGE: &str = "Invalid phone number format (10-13 digits)";

/// Ordered field rules for one step
#[derive(Debug, Clone, Default)]
pub struct StepSchema {
    rules: Vec<FieldRule>,
}

impl StepSchema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// A step without rules, which always validates
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Schemas for the nine employee form steps, in step order
pub fn employee_schemas() -> Vec<StepSchema> {
    vec![
        // Personal data
        StepSchema::new(vec![
            FieldRule::new("name")
                .required("Name is required")
                .min_length(3, "Name must be at least 3 characters"),
            FieldRule::new("email")
                .required("Email is required")
                .email("Invalid email format"),
            FieldRule::new("phone")
                .required("Phone number is required")
                .pattern(&PHONE_PATTERN, PHONE_FORMAT_MESSAGE),
        ]),
        // Contact
        StepSchema::new(vec![
            FieldRule::new("address").required("Address is required"),
            FieldRule::new("city").required("City is required"),
            FieldRule::new("postalCode")
                .required("Postal code is required")
                .pattern(&POSTAL_CODE_PATTERN, "Postal code must be 5 digits"),
        ]),
        // Contract
        StepSchema::new(vec![
            FieldRule::new("position").required("Position is required"),
            FieldRule::new("department").required("Department is required"),
            FieldRule::new("joinDate").required("Join date is required"),
        ]),
        // Emergency contact
        StepSchema::new(vec![
            FieldRule::new("emergencyContact").required("Emergency contact name is required"),
            FieldRule::new("emergencyPhone")
                .required("Emergency contact phone is required")
                .pattern(&PHONE_PATTERN, PHONE_FORMAT_MESSAGE),
        ]),
        // Bank
        StepSchema::new(vec![
            FieldRule::new("bankName").required("Bank name is required"),
            FieldRule::new("bankAccount")
                .required("Account number is required")
                .pattern(&BANK_ACCOUNT_PATTERN, "Account number must contain digits only"),
        ]),
        // Tax
        StepSchema::new(vec![FieldRule::new("taxNumber")
            .required("Tax number (NPWP) is required")
            .pattern(&TAX_NUMBER_PATTERN, "Tax number (NPWP) must be 15 digits")]),
        // Education
        StepSchema::new(vec![
            FieldRule::new("education").required("Highest education is required"),
            FieldRule::new("university").required("Institution name is required"),
            FieldRule::new("graduationYear")
                .required("Graduation year is required")
                .pattern(&YEAR_PATTERN, "Invalid year format"),
        ]),
        // Account status
        StepSchema::new(vec![FieldRule::new("status")
            .required("Status is required")
            .one_of(STATUS_OPTIONS, "Status must be active or inactive")]),
        // Review
        StepSchema::empty(),
    ]
}

/// Schema for the single-page user form
pub fn user_schemas() -> Vec<StepSchema> {
    vec![StepSchema::new(vec![
        FieldRule::new("name")
            .required("Name is required")
            .min_length(3, "Name must be at least 3 characters"),
        FieldRule::new("email")
            .required("Email is required")
            .email("Invalid email format"),
        FieldRule::new("role")
            .required("Role is required")
            .one_of(ROLE_OPTIONS, "Role must be Admin, Manager or Employee"),
        FieldRule::new("status")
            .required("Status is required")
            .one_of(STATUS_OPTIONS, "Status must be active or inactive"),
    ])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_employee_has_nine_steps() {
        assert_eq!(employee_schemas().len(), 9);
    }

    #[test]
    fn test_employee_field_assignment() {
        let schemas = employee_schemas();
        let fields: Vec<Vec<&str>> = schemas.iter().map(|s| s.fields().collect()).collect();
        assert_eq!(
            fields,
            vec![
                vec!["name", "email", "phone"],
                vec!["address", "city", "postalCode"],
                vec!["position", "department", "joinDate"],
                vec!["emergencyContact", "emergencyPhone"],
                vec!["bankName", "bankAccount"],
                vec!["taxNumber"],
                vec!["education", "university", "graduationYear"],
                vec!["status"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_every_employee_field_is_required() {
        for schema in employee_schemas() {
            assert!(schema.rules().iter().all(FieldRule::is_required));
        }
    }

    #[test]
    fn test_review_step_is_empty() {
        let schemas = employee_schemas();
        assert!(schemas[8].is_empty());
    }

    #[test]
    fn test_rule_for_lookup() {
        let schemas = employee_schemas();
        assert!(schemas[1].rule_for("postalCode").is_some());
        assert!(schemas[1].rule_for("name").is_none());
    }

    #[test]
    fn test_user_schema_fields() {
        let schemas = user_schemas();
        assert_eq!(schemas.len(), 1);
        let fields: Vec<&str> = schemas[0].fields().collect();
        assert_eq!(fields, vec!["name", "email", "role", "status"]);
    }
}
