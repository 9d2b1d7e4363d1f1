use chrono::{DateTime, Utc};

use crate::modules::clinic::domain::value_objects::{ClinicAddress, ClinicName};
use crate::shared::{
    domain::{next_timestamp, ClinicId, PhoneNumber},
    errors::{AppError, AppResult},
};

/// Clinic aggregate root
///
/// Fields are private: state only changes through `update`, `activate` and
/// `deactivate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clinic {
    id: ClinicId,
    name: ClinicName,
    address: ClinicAddress,
    phone: PhoneNumber,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Clinic {
    /// Register a new, active clinic
    pub fn new(name: ClinicName, address: ClinicAddress, phone: PhoneNumber) -> Self {
        let now = Utc::now();
        Self {
            id: ClinicId::generate(),
            name,
            address,
            phone,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ClinicId {
        &self.id
    }

    pub fn name(&self) -> &ClinicName {
        &self.name
    }

    pub fn address(&self) -> &ClinicAddress {
        &self.address
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
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

    /// Replace the provided fields; omitted fields keep their value.
    /// `updated_at` advances even when every field is omitted.
    pub fn update(
        &mut self,
        name: Option<ClinicName>,
        address: Option<ClinicAddress>,
        phone: Option<PhoneNumber>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        self.touch();
    }

    pub fn activate(&mut self) -> AppResult<()> {
        if self.is_active {
            return Err(AppError::Conflict("Clinic is already active".to_string()));
        }
        self.is_active = true;
        self.touch();
        Ok(())
    }

    pub fn deactivate(&mut self) -> AppResult<()> {
        if !self.is_active {
            return Err(AppError::Conflict(
                "Clinic is already inactive".to_string(),
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
