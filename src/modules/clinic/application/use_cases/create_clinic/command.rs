use serde::Deserialize;

/// Command for registering a new clinic
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClinicCommand {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl CreateClinicCommand {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}
