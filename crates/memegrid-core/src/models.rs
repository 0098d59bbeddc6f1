use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One meme as served by the imgflip catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "url")]
    pub image_url: String,
    pub width: i64,
    pub height: i64,
    pub box_count: i64,
}

impl MemeRecord {
    /// Human readable dimensions, e.g. `1200 x 1200`.
    pub fn dimensions(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// Envelope of the `get_memes` response. Only lives for the duration of [`decode`].
#[derive(Debug, Serialize, Deserialize)]
pub struct MemeListResponse {
    pub success: bool,
    pub data: MemeData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemeData {
    pub memes: Vec<MemeRecord>,
}

/// Parse a response body into the ordered list of memes.
///
/// Every required field must be present with the right JSON type; extra
/// fields are ignored. Nothing is returned unless the whole document
/// matches. `success: false` is not inspected.
pub fn decode(bytes: &[u8]) -> Result<Vec<MemeRecord>, DecodeError> {
    debug!(len = bytes.len(), "decoding meme list");

    let response: MemeListResponse = serde_json::from_slice(bytes)?;
    if !response.success {
        debug!("upstream reported success=false with a well-formed body");
    }

    let memes = response.data.memes;
    info!(count = memes.len(), "decoded meme list");
    Ok(memes)
}
