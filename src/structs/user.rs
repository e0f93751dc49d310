use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::models::user::ProfilePatch;

/// Accepts a URL, or an empty string meaning "no link".
pub fn validate_contact_link(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(custom(function = "validate_contact_link", message = "Invalid WhatsApp link"))]
    pub whatsapp_link: Option<String>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            whatsapp_link: req.whatsapp_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_whatsapp_link_passes_validation() {
        let req = UpdateProfileRequest {
            name: None,
            email: None,
            phone: Some(String::new()),
            whatsapp_link: Some(String::new()),
        };
        assert!(req.validate().is_ok());

        let req = UpdateProfileRequest {
            whatsapp_link: Some("not a url".into()),
            ..req
        };
        assert!(req.validate().is_err());
    }
}
