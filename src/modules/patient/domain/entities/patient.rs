use chrono::{DateTime, Utc};

use crate::modules::patient::domain::value_objects::{DateOfBirth, Email, FirstName, LastName};
use crate::shared::{
    domain::{next_timestamp, ClinicId, PatientId, PhoneNumber},
    errors::{AppError, AppResult},
};

/// Patient aggregate root
///
/// `clinic_id` is only guaranteed non-empty here; whether the clinic exists
/// is checked by the create use case.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    id: PatientId,
    first_name: FirstName,
    last_name: LastName,
    email: Email,
    phone: PhoneNumber,
    date_of_birth: DateOfBirth,
    clinic_id: ClinicId,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        email: Email,
        phone: PhoneNumber,
        date_of_birth: DateOfBirth,
        clinic_id: ClinicId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PatientId::generate(),
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            clinic_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &PatientId {
        &self.id
    }

    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn date_of_birth(&self) -> DateOfBirth {
        self.date_of_birth
    }

    pub fn age(&self) -> u32 {
        self.date_of_birth.age()
    }

    pub fn clinic_id(&self) -> &ClinicId {
        &self.clinic_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn change_first_name(&mut self, first_name: FirstName) {
        self.first_name = first_name;
        self.touch();
    }

    pub fn change_last_name(&mut self, last_name: LastName) {
        self.last_name = last_name;
        self.touch();
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    pub fn change_phone(&mut self, phone: PhoneNumber) {
        self.phone = phone;
        self.touch();
    }

    /// Replace the provided contact fields in one step.
    /// Omitted fields keep their value; `updated_at` always advances.
    pub fn update(
        &mut self,
        first_name: Option<FirstName>,
        last_name: Option<LastName>,
        email: Option<Email>,
        phone: Option<PhoneNumber>,
    ) {
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        self.touch();
    }

    pub fn activate(&mut self) -> AppResult<()> {
        if self.is_active {
            return Err(AppError::Conflict("Patient is already active".to_string()));
        }
        self.is_active = true;
        self.touch();
        Ok(())
    }

    pub fn deactivate(&mut self) -> AppResult<()> {
        if !self.is_active {
            return Err(AppError::Conflict(
                "Patient is already inactive".to_string(),
            ));
        }
        self.is_active = false;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }
}
