//! Ticket lifecycle engine.
//!
//! Reduces an update request or an assignment to the `TicketMutation` persisted by
//! `TicketRepository::apply`. No estado transition is forbidden. Moving into
//! `Resolved` stamps `fecha_resolucion`; leaving it never clears the stamp.

use chrono::{DateTime, Utc};

use crate::{
    model::ticket::TicketStatus,
    server::model::ticket::{TicketMutation, UpdateTicketParams},
};

/// Plans a partial update.
///
/// Every supplied `Resolved` (including resolved → resolved) refreshes
/// `fecha_resolucion`. `fecha_actualizacion` is always bumped, even for an empty update.
pub fn plan_update(params: &UpdateTicketParams, now: DateTime<Utc>) -> TicketMutation {
    let fecha_resolucion = match params.estado {
        Some(TicketStatus::Resolved) => Some(now),
        _ => None,
    };

    TicketMutation {
        estado: params.estado,
        prioridad: params.prioridad,
        asignado_a: params.asignado_a,
        fecha_resolucion,
        fecha_actualizacion: now,
    }
}

/// Plans an assignment: sets the technician and forces `InProgress` from any estado.
pub fn plan_assignment(tecnico_id: i32, now: DateTime<Utc>) -> TicketMutation {
    TicketMutation {
        estado: Some(TicketStatus::InProgress),
        prioridad: None,
        asignado_a: Some(Some(tecnico_id)),
        fecha_resolucion: None,
        fecha_actualizacion: now,
    }
}
