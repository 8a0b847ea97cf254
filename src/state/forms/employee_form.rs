//! Nine-step employee create/edit form

use super::field::FieldSpec;
use super::form_state::{Form, FormData};
use crate::repository::EmployeeRepository;
use crate::state::entities::{Employee, EmployeePatch, EmployeeProfile, NewEmployee, Status};
use crate::state::stepper::{StepSequencer, StepperOrientation};
use crate::state::steps::{employee_step, StepDefinition, EMPLOYEE_FORM_STEPS};
use crate::validation::{ErrorMap, FieldSource, ValidationEngine, STATUS_OPTIONS};
use chrono::{Days, NaiveDate};

/// Date format stored in the join date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Full Name"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("phone", "Phone Number"),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("address", "Address"),
    FieldSpec::text("city", "City"),
    FieldSpec::text("postalCode", "Postal Code"),
];

const CONTRACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("position", "Position"),
    FieldSpec::text("department", "Department"),
    FieldSpec::date("joinDate", "Join Date (YYYY-MM-DD)"),
];

const EMERGENCY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("emergencyContact", "Emergency Contact Name"),
    FieldSpec::text("emergencyPhone", "Emergency Contact Phone"),
];

const BANK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("bankName", "Bank Name"),
    FieldSpec::text("bankAccount", "Account Number"),
];

const TAX_FIELDS: &[FieldSpec] = &[FieldSpec::text("taxNumber", "Tax Number (NPWP)")];

const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("education", "Highest Education"),
    FieldSpec::text("university", "University / Institution"),
    FieldSpec::text("graduationYear", "Graduation Year"),
];

const ACCOUNT_FIELDS: &[FieldSpec] = &[FieldSpec::choice("status", "Status", STATUS_OPTIONS)];

/// Editable fields per step; the review step has none
pub const EMPLOYEE_STEP_FIELDS: [&[FieldSpec]; 9] = [
    PERSONAL_FIELDS,
    CONTACT_FIELDS,
    CONTRACT_FIELDS,
    EMERGENCY_FIELDS,
    BANK_FIELDS,
    TAX_FIELDS,
    EDUCATION_FIELDS,
    ACCOUNT_FIELDS,
    &[],
];

/// Flat record of every employee form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormData {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub join_date: String,
    pub status: Status,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub bank_name: String,
    pub bank_account: String,
    pub tax_number: String,
    pub education: String,
    pub university: String,
    pub graduation_year: String,
}

impl EmployeeFormData {
    pub fn from_employee(employee: &Employee) -> Self {
        let profile = employee.profile.clone();
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            phone: employee.phone.clone(),
            join_date: employee.join_date.clone(),
            status: employee.status,
            address: profile.address,
            city: profile.city,
            postal_code: profile.postal_code,
            emergency_contact: profile.emergency_contact,
            emergency_phone: profile.emergency_phone,
            bank_name: profile.bank_name,
            bank_account: profile.bank_account,
            tax_number: profile.tax_number,
            education: profile.education,
            university: profile.university,
            graduation_year: profile.graduation_year,
        }
    }

    fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            emergency_contact: self.emergency_contact.clone(),
            emergency_phone: self.emergency_phone.clone(),
            bank_name: self.bank_name.clone(),
            bank_account: self.bank_account.clone(),
            tax_number: self.tax_number.clone(),
            education: self.education.clone(),
            university: self.university.clone(),
            graduation_year: self.graduation_year.clone(),
        }
    }

    fn text_field_mut(&mut self, field: &str) -> Option<&mut String> {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "position" => &mut self.position,
            "department" => &mut self.department,
            "phone" => &mut self.phone,
            "joinDate" => &mut self.join_date,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "postalCode" => &mut self.postal_code,
            "emergencyContact" => &mut self.emergency_contact,
            "emergencyPhone" => &mut self.emergency_phone,
            "bankName" => &mut self.bank_name,
            "bankAccount" => &mut self.bank_account,
            "taxNumber" => &mut self.tax_number,
            "education" => &mut self.education,
            "university" => &mut self.university,
            "graduationYear" => &mut self.graduation_year,
            _ => return None,
        };
        Some(slot)
    }
}

impl FieldSource for EmployeeFormData {
    fn field_value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => &self.name,
            "email" => &self.email,
            "position" => &self.position,
            "department" => &self.department,
            "phone" => &self.phone,
            "joinDate" => &self.join_date,
            "status" => return Some(self.status.as_str()),
            "address" => &self.address,
            "city" => &self.city,
            "postalCode" => &self.postal_code,
            "emergencyContact" => &self.emergency_contact,
            "emergencyPhone" => &self.emergency_phone,
            "bankName" => &self.bank_name,
            "bankAccount" => &self.bank_account,
            "taxNumber" => &self.tax_number,
            "education" => &self.education,
            "university" => &self.university,
            "graduationYear" => &self.graduation_year,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl FormData for EmployeeFormData {
    fn set_field(&mut self, field: &str, value: String) -> bool {
        if field == "status" {
            return match value.parse::<Status>() {
                Ok(status) => {
                    self.status = status;
                    true
                }
                Err(_) => false,
            };
        }
        match self.text_field_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Employee form session: values, errors and step position
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub data: EmployeeFormData,
    pub errors: ErrorMap,
    pub stepper: StepSequencer,
    /// Id of the employee being edited; `None` when creating
    pub editing_id: Option<String>,
    pub active_field_index: usize,
    /// Parsed join date, kept in sync with the text field
    pub join_date: Option<NaiveDate>,
    engine: ValidationEngine,
}

impl EmployeeForm {
    pub fn new(orientation: StepperOrientation) -> Self {
        Self {
            data: EmployeeFormData::default(),
            errors: ErrorMap::new(),
            stepper: StepSequencer::new(EMPLOYEE_FORM_STEPS.len()).with_orientation(orientation),
            editing_id: None,
            active_field_index: 0,
            join_date: None,
            engine: ValidationEngine::employee(),
        }
    }

    pub fn from_employee(employee: &Employee, orientation: StepperOrientation) -> Self {
        let mut form = Self::new(orientation);
        form.data = EmployeeFormData::from_employee(employee);
        form.join_date = NaiveDate::parse_from_str(&employee.join_date, DATE_FORMAT).ok();
        form.editing_id = Some(employee.id.clone());
        form
    }

    /// Edit form for employee `id`, or `None` when it does not exist
    pub async fn load(
        repo: &dyn EmployeeRepository,
        id: &str,
        orientation: StepperOrientation,
    ) -> Option<Self> {
        let employee = repo.get_by_id(id).await?;
        Some(Self::from_employee(&employee, orientation))
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn current_step(&self) -> usize {
        self.stepper.current_step()
    }

    pub fn step_definition(&self) -> Option<&'static StepDefinition> {
        employee_step(self.current_step())
    }

    pub fn validate_current_step(&mut self) -> bool {
        let step = self.current_step();
        self.engine.validate_step(&self.data, step, &mut self.errors)
    }

    /// Validate the current step and advance when it passes
    pub fn next_step(&mut self) -> bool {
        let before = self.current_step();
        let (engine, data, errors) = (&self.engine, &self.data, &mut self.errors);
        let valid = self
            .stepper
            .advance(|step| engine.validate_step(data, step, errors));
        self.after_step_change(before);
        valid
    }

    pub fn prev_step(&mut self) {
        let before = self.current_step();
        self.stepper.retreat();
        self.after_step_change(before);
    }

    pub fn go_to_step(&mut self, target: usize) {
        let before = self.current_step();
        let (engine, data, errors) = (&self.engine, &self.data, &mut self.errors);
        self.stepper
            .jump_to(target, |step| engine.validate_step(data, step, errors));
        self.after_step_change(before);
    }

    fn after_step_change(&mut self, before: usize) {
        if self.current_step() != before {
            self.active_field_index = 0;
        }
    }

    /// Re-check one field against the current step's rules
    pub fn revalidate_field(&mut self, field: &str) {
        let step = self.current_step();
        self.engine
            .validate_field(&self.data, field, step, &mut self.errors);
    }

    /// Store a picked join date and re-check the field
    pub fn select_join_date(&mut self, date: NaiveDate) {
        self.join_date = Some(date);
        self.data.join_date = date.format(DATE_FORMAT).to_string();
        self.revalidate_field("joinDate");
    }

    /// Move the join date by `days`, starting from `today` when none is set
    pub fn shift_join_date(&mut self, days: i64, today: NaiveDate) {
        let date = match self.join_date {
            None => Some(today),
            Some(current) if days >= 0 => current.checked_add_days(Days::new(days as u64)),
            Some(current) => current.checked_sub_days(Days::new(days.unsigned_abs())),
        };
        if let Some(date) = date {
            self.select_join_date(date);
        }
    }

    /// Whether the active field is the join date picker
    pub fn is_date_field_active(&self) -> bool {
        self.active_spec().is_some_and(|s| s.name == "joinDate")
    }

    pub fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            name: self.data.name.trim().to_string(),
            email: self.data.email.trim().to_string(),
            position: self.data.position.trim().to_string(),
            department: self.data.department.trim().to_string(),
            phone: self.data.phone.clone(),
            join_date: self.data.join_date.clone(),
            status: self.data.status,
            profile: self.data.profile(),
        }
    }

    pub fn to_patch(&self) -> EmployeePatch {
        let new = self.to_new_employee();
        EmployeePatch {
            name: Some(new.name),
            email: Some(new.email),
            position: Some(new.position),
            department: Some(new.department),
            phone: Some(new.phone),
            join_date: Some(new.join_date),
            status: Some(new.status),
            profile: Some(new.profile),
        }
    }
}

impl Form for EmployeeForm {
    type Data = EmployeeFormData;

    fn fields(&self) -> &'static [FieldSpec] {
        self.current_step()
            .checked_sub(1)
            .and_then(|idx| EMPLOYEE_STEP_FIELDS.get(idx))
            .copied()
            .unwrap_or(&[])
    }

    fn data(&self) -> &EmployeeFormData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut EmployeeFormData {
        &mut self.data
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }

    fn field_edited(&mut self, field: &'static str) {
        if field == "joinDate" {
            self.join_date = NaiveDate::parse_from_str(&self.data.join_date, DATE_FORMAT).ok();
        }
        if self.errors.contains(field) {
            self.revalidate_field(field);
        }
    }
}
