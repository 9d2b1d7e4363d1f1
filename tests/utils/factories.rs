/// Test data factories using builder pattern
///
/// Each factory produces a valid create command by default; tests override
/// only the fields they care about.
use chrono::{Duration, Utc};
use clinicflow::modules::{
    clinic::application::CreateClinicCommand, patient::application::CreatePatientCommand,
    sample::application::CreateSampleCommand,
};

pub struct ClinicFactory {
    name: String,
    address: String,
    phone: String,
}

impl Default for ClinicFactory {
    fn default() -> Self {
        Self {
            name: "Central Clinic".to_string(),
            address: "Main Street 123".to_string(),
            phone: "+34 912345678".to_string(),
        }
    }
}

impl ClinicFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn build(self) -> CreateClinicCommand {
        CreateClinicCommand::new(self.name, self.address, self.phone)
    }
}

pub struct PatientFactory {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: String,
    clinic_id: String,
}

impl PatientFactory {
    /// John Smith, born 1990-01-15, registered at `clinic_id`
    pub fn new(clinic_id: &str) -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "+34 987654321".to_string(),
            date_of_birth: "1990-01-15".to_string(),
            clinic_id: clinic_id.to_string(),
        }
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: &str) -> Self {
        self.date_of_birth = date_of_birth.to_string();
        self
    }

    pub fn build(self) -> CreatePatientCommand {
        CreatePatientCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            clinic_id: self.clinic_id,
        }
    }
}

pub struct SampleFactory {
    patient_id: String,
    clinic_id: String,
    sample_type: String,
    collection_date: String,
}

impl SampleFactory {
    /// Blood sample collected one hour ago
    pub fn new(patient_id: &str, clinic_id: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            clinic_id: clinic_id.to_string(),
            sample_type: "Blood".to_string(),
            collection_date: (Utc::now() - Duration::hours(1)).to_rfc3339(),
        }
    }

    pub fn with_sample_type(mut self, sample_type: &str) -> Self {
        self.sample_type = sample_type.to_string();
        self
    }

    pub fn with_collection_date(mut self, collection_date: &str) -> Self {
        self.collection_date = collection_date.to_string();
        self
    }

    pub fn collected_tomorrow(self) -> Self {
        let tomorrow = (Utc::now() + Duration::days(1)).to_rfc3339();
        self.with_collection_date(&tomorrow)
    }

    pub fn build(self) -> CreateSampleCommand {
        CreateSampleCommand {
            patient_id: self.patient_id,
            clinic_id: self.clinic_id,
            sample_type: self.sample_type,
            collection_date: self.collection_date,
        }
    }
}
