//! In-memory employee repository

use super::error::{EntityKind, RepositoryError};
use super::today;
use super::traits::EmployeeRepository;
use crate::state::{Employee, EmployeePatch, EmployeeProfile, NewEmployee, Status};
use async_trait::async_trait;

/// Employee storage held in process memory, newest record first
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Repository holding the three demo employees
    pub fn seeded() -> Self {
        let seed = |id: &str,
                    name: &str,
                    email: &str,
                    position: &str,
                    department: &str,
                    phone: &str,
                    date: &str,
                    status: Status| Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            department: department.to_string(),
            phone: phone.to_string(),
            join_date: date.to_string(),
            status,
            created_at: date.to_string(),
            profile: EmployeeProfile::default(),
        };
        Self {
            employees: vec![
                seed(
                    "1",
                    "Ahmad Wijaya",
                    "ahmad.wijaya@company.com",
                    "Software Engineer",
                    "Engineering",
                    "081234567890",
                    "2023-01-15",
                    Status::Active,
                ),
                seed(
                    "2",
                    "Siti Nurhaliza",
                    "siti.nurhaliza@company.com",
                    "HR Manager",
                    "Human Resources",
                    "081234567891",
                    "2022-06-20",
                    Status::Active,
                ),
                seed(
                    "3",
                    "Budi Santoso",
                    "budi.santoso@company.com",
                    "Sales Executive",
                    "Sales",
                    "081234567892",
                    "2023-03-10",
                    Status::Inactive,
                ),
            ],
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    async fn get_by_id(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    async fn add(&mut self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        if self.employees.iter().any(|e| e.email == employee.email) {
            return Err(RepositoryError::EmailRegistered);
        }
        if self.employees.iter().any(|e| e.phone == employee.phone) {
            return Err(RepositoryError::PhoneRegistered);
        }

        let record = Employee {
            id: uuid::Uuid::new_v4().to_string(),
            name: employee.name,
            email: employee.email,
            position: employee.position,
            department: employee.department,
            phone: employee.phone,
            join_date: employee.join_date,
            status: employee.status,
            created_at: today(),
            profile: employee.profile,
        };
        tracing::info!(id = %record.id, "Added employee");
        self.employees.insert(0, record.clone());
        Ok(record)
    }

    async fn update(
        &mut self,
        id: &str,
        patch: EmployeePatch,
    ) -> Result<Employee, RepositoryError> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::NotFound(EntityKind::Employee))?;

        let taken_by_other = |matches: &dyn Fn(&Employee) -> bool| {
            self.employees.iter().any(|e| e.id != id && matches(e))
        };
        if let Some(email) = patch.email.as_deref().filter(|v| !v.is_empty()) {
            if taken_by_other(&|e: &Employee| e.email == email) {
                return Err(RepositoryError::EmailTaken(EntityKind::Employee));
            }
        }
        if let Some(phone) = patch.phone.as_deref().filter(|v| !v.is_empty()) {
            if taken_by_other(&|e: &Employee| e.phone == phone) {
                return Err(RepositoryError::PhoneTaken(EntityKind::Employee));
            }
        }

        let record = &mut self.employees[index];
        patch.apply_to(record);
        tracing::info!(id, "Updated employee");
        Ok(record.clone())
    }

    async fn delete(&mut self, id: &str) -> Result<(), RepositoryError> {
        let index = self
            .position(id)
            .ok_or(RepositoryError::NotFound(EntityKind::Employee))?;
        self.employees.remove(index);
        tracing::info!(id, "Deleted employee");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(email: &str, phone: &str) -> NewEmployee {
        NewEmployee {
            name: "Dewi Lestari".to_string(),
            email: email.to_string(),
            position: "Accountant".to_string(),
            department: "Finance".to_string(),
            phone: phone.to_string(),
            join_date: "2024-02-01".to_string(),
            status: Status::Active,
            profile: EmployeeProfile::default(),
        }
    }

    mod add {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_inserts_at_front_with_new_id() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let added = repo
                .add(new_employee("dewi@company.com", "081299998888"))
                .await
                .unwrap();

            let list = repo.list().await;
            assert_eq!(list.len(), 4);
            assert_eq!(list[0], added);
            assert!(!["1", "2", "3"].contains(&added.id.as_str()));
            assert_eq!(added.created_at.len(), 10);
        }

        #[tokio::test]
        async fn test_duplicate_email_rejected() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let err = repo
                .add(new_employee("ahmad.wijaya@company.com", "081299998888"))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Email is already registered");
            assert_eq!(repo.list().await.len(), 3);
        }

        #[tokio::test]
        async fn test_duplicate_phone_rejected() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let err = repo
                .add(new_employee("dewi@company.com", "081234567891"))
                .await
                .unwrap_err();
            assert_eq!(err, RepositoryError::PhoneRegistered);
        }
    }

    mod update {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_merges_present_fields() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let updated = repo
                .update(
                    "3",
                    EmployeePatch {
                        status: Some(Status::Active),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            assert_eq!(updated.status, Status::Active);
            assert_eq!(updated.name, "Budi Santoso");
        }

        #[tokio::test]
        async fn test_keeping_own_email_is_allowed() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let result = repo
                .update(
                    "1",
                    EmployeePatch {
                        email: Some("ahmad.wijaya@company.com".to_string()),
                        phone: Some("081234567890".to_string()),
                        ..Default::default()
                    },
                )
                .await;
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_email_of_other_employee_rejected() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let err = repo
                .update(
                    "1",
                    EmployeePatch {
                        email: Some("siti.nurhaliza@company.com".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Email is already used by another employee"
            );
        }

        #[tokio::test]
        async fn test_phone_of_other_employee_rejected() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let err = repo
                .update(
                    "2",
                    EmployeePatch {
                        phone: Some("081234567892".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err, RepositoryError::PhoneTaken(EntityKind::Employee));
        }

        #[tokio::test]
        async fn test_unknown_id() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            let err = repo
                .update("99", EmployeePatch::default())
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Employee not found");
        }
    }

    mod delete {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_removes_record() {
            let mut repo = InMemoryEmployeeRepository::seeded();
            repo.delete("2").await.unwrap();
            assert!(repo.get_by_id("2").await.is_none());
            assert_eq!(repo.list().await.len(), 2);
        }

        #[test]
        fn test_unknown_id() {
            let mut repo = InMemoryEmployeeRepository::empty();
            let result = tokio_test::block_on(repo.delete("1"));
            assert_eq!(result, Err(RepositoryError::NotFound(EntityKind::Employee)));
        }
    }
}
