//! Employee and user records managed by the repositories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status shared by employees and users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Extended employee details collected by the later form steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
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

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub join_date: String,
    pub status: Status,
    /// `YYYY-MM-DD`
    pub created_at: String,
    #[serde(default)]
    pub profile: EmployeeProfile,
}

/// Employee data before the repository assigns an id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub phone: String,
    pub join_date: String,
    pub status: Status,
    pub profile: EmployeeProfile,
}

/// Partial employee update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub join_date: Option<String>,
    pub status: Option<Status>,
    pub profile: Option<EmployeeProfile>,
}

impl EmployeePatch {
    /// Apply the present fields to `employee`
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(join_date) = self.join_date {
            employee.join_date = join_date;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
        if let Some(profile) = self.profile {
            employee.profile = profile;
        }
    }
}

/// Application user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
    /// `YYYY-MM-DD`
    pub created_at: String,
}

/// User data before the repository assigns an id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
}

/// Partial user update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<Status>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}
