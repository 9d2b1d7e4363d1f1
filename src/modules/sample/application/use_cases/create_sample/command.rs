use serde::Deserialize;

/// Command for registering a freshly collected sample
///
/// `collection_date` is RFC 3339 or `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleCommand {
    pub patient_id: String,
    pub clinic_id: String,
    pub sample_type: String,
    pub collection_date: String,
}
