use serde::Deserialize;

/// Command for registering a patient at an existing clinic
///
/// `date_of_birth` is the raw `YYYY-MM-DD` string from the request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub clinic_id: String,
}
