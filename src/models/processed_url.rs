#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessedUrlV1 {
    pub processed_url: String,
}

json_responder!(ProcessedUrlV1);

impl From<String> for ProcessedUrlV1 {
    fn from(processed_url: String) -> Self {
        Self { processed_url }
    }
}
