use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    #[serde(default)]
    pub texto: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub ticket_id: i32,
    pub usuario_id: i32,
    pub autor_nombre: String,
    pub texto: String,
    pub fecha_creacion: DateTime<Utc>,
}
