use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::extraction::Section;

/// A stored resume: the extracted record plus the raw text it came from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub file_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub sections: Json<Vec<Section>>,
    pub text_content: String,
    pub uploaded_at: DateTime<Utc>,
}
