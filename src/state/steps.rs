//! Step metadata for the employee form

/// One page of a multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    /// 1-based step number
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub tooltip: &'static str,
}

/// The nine employee form steps, in order
pub const EMPLOYEE_FORM_STEPS: [StepDefinition; 9] = [
    StepDefinition {
        number: 1,
        title: "Personal Data",
        description: "Employee personal information",
        tooltip: "Fill in the employee's full name, email and phone number. Make sure the email and phone formats are valid.",
    },
    StepDefinition {
        number: 2,
        title: "Contact",
        description: "Contact and address information",
        tooltip: "Enter the full address, city of residence and postal code. The postal code must be 5 digits.",
    },
    StepDefinition {
        number: 3,
        title: "Contract",
        description: "Position and department information",
        tooltip: "Set the job position, the department and the date the employee joined the company.",
    },
    StepDefinition {
        number: 4,
        title: "Emergency Contact",
        description: "Emergency contact information",
        tooltip: "Enter the name and phone number to call in an emergency. Use a number that is reachable at any time.",
    },
    StepDefinition {
        number: 5,
        title: "Bank",
        description: "Bank account information",
        tooltip: "Enter the bank name and account number used for salary transfers. The account must match the employee's identity.",
    },
    StepDefinition {
        number: 6,
        title: "Tax",
        description: "Tax information",
        tooltip: "Enter the employee's tax number (NPWP) for tax filing and reporting.",
    },
    StepDefinition {
        number: 7,
        title: "Education",
        description: "Education history",
        tooltip: "Enter the highest education level, the university or institution and the graduation year.",
    },
    StepDefinition {
        number: 8,
        title: "Account",
        description: "Account and status information",
        tooltip: "Set the account status: Active for working employees, Inactive for employees who resigned or are on long leave.",
    },
    StepDefinition {
        number: 9,
        title: "Review",
        description: "Review all data",
        tooltip: "Check everything you entered. Make sure all information is correct before saving.",
    },
];

/// Look up a step by its 1-based number
pub fn employee_step(number: usize) -> Option<&'static StepDefinition> {
    number
        .checked_sub(1)
        .and_then(|idx| EMPLOYEE_FORM_STEPS.get(idx))
}
