use serde::{Deserialize, Serialize};

use crate::models::print_size::PrintSize;
use crate::models::qr_code::{ContactInfo, QrCode, QrStatus};
use crate::utils::qr_render::ImageFormatParam;

#[derive(Deserialize)]
pub struct GenerateBatchRequest {
    pub count: i64,
}

#[derive(Deserialize)]
pub struct QrSearchParams {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct PrintParams {
    #[serde(default)]
    pub size: PrintSize,
}

#[derive(Deserialize)]
pub struct ImageParams {
    #[serde(default)]
    pub size: PrintSize,
    #[serde(default)]
    pub format: ImageFormatParam,
}

/// What a finder sees after scanning a code.
#[derive(Serialize)]
pub struct PublicQrView {
    pub unique_id: String,
    pub status: QrStatus,
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

impl PublicQrView {
    pub fn new(qr: QrCode, target_url: String) -> Self {
        // Contact details are only public while the code is claimed
        let contact_info = match qr.status {
            QrStatus::Claimed => qr.contact_info.filter(|contact| !contact.is_empty()),
            QrStatus::Unclaimed | QrStatus::Deleted => None,
        };
        Self {
            unique_id: qr.unique_id,
            status: qr.status,
            target_url,
            contact_info,
        }
    }
}

#[derive(Serialize)]
pub struct PrintItem {
    pub unique_id: String,
    pub target_url: String,
    pub pixel_size: u32,
    pub image_path: String,
}

#[derive(Serialize)]
pub struct PrintSheet {
    pub title: String,
    pub size: PrintSize,
    pub items: Vec<PrintItem>,
}
