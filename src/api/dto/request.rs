//! Request DTOs

use serde::Deserialize;

use crate::record::Submission;

/// Request body for POST /api/submit-quote
///
/// Every field is optional at this layer; the validator decides what is
/// required. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

impl QuoteRequest {
    /// Attach the client address taken from the connection
    pub fn into_submission(self, ip_address: Option<String>) -> Submission {
        Submission {
            name: self.name,
            company: self.company,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            product_name: self.product_name,
            ip_address,
        }
    }
}
