use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

use crate::model::comment::CommentDto;

/// Lifecycle status of a ticket.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Pending,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!("Invalid estado '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("Invalid prioridad '{}'", other)),
        }
    }
}

/// Ticket creation payload.
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTicketDto {
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub ubicacion: String,
}

/// Partial ticket update payload.
///
/// `asignado_a` distinguishes an absent key (leave unchanged) from an explicit
/// `null` (unassign).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateTicketDto {
    pub estado: Option<String>,
    pub prioridad: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub asignado_a: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct AssignTicketDto {
    pub tecnico_id: Option<i32>,
}

/// Equality filters accepted by the ticket list endpoint.
///
/// Empty values are ignored.
#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketListQuery {
    pub estado: Option<String>,
    pub prioridad: Option<String>,
    pub asignado_a: Option<String>,
    pub usuario_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub tipo: String,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub usuario_id: i32,
    pub estado: TicketStatus,
    pub prioridad: TicketPriority,
    pub asignado_a: Option<i32>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    pub fecha_resolucion: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketListItemDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub usuario_nombre: Option<String>,
    pub tecnico_nombre: Option<String>,
    pub total_comentarios: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDetailDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub usuario_nombre: Option<String>,
    pub usuario_email: Option<String>,
    pub tecnico_nombre: Option<String>,
    pub tecnico_email: Option<String>,
    pub comentarios: Vec<CommentDto>,
}

/// Deserializes a present key into `Some(value)`, keeping `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]` so an absent key stays `None`.
fn deserialize_explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_values_round_trip_through_serde() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!("in-progress".parse::<TicketStatus>(), Ok(TicketStatus::InProgress));
        assert!("en-progreso".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn update_dto_distinguishes_absent_and_null_assignee() {
        let absent: UpdateTicketDto = serde_json::from_str(r#"{"prioridad":"high"}"#).unwrap();
        assert_eq!(absent.asignado_a, None);

        let null: UpdateTicketDto = serde_json::from_str(r#"{"asignado_a":null}"#).unwrap();
        assert_eq!(null.asignado_a, Some(None));

        let set: UpdateTicketDto = serde_json::from_str(r#"{"asignado_a":7}"#).unwrap();
        assert_eq!(set.asignado_a, Some(Some(7)));
    }
}
