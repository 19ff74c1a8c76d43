//! Alert list.
//!
//! The alert set is fixed when the session starts.  The only mutation is
//! acknowledging (or un-acknowledging) an alert; acknowledged alerts stay
//! in the list and keep their position.

use log::{debug, info};
use serde::Serialize;

/// Capacity of the fixed alert set.
pub const MAX_ALERTS: usize = 8;

/// Presentation class of an alert.  Carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTone {
    Danger,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertItem {
    pub id: &'static str,
    pub status: &'static str,
    pub message: &'static str,
    pub tone: AlertTone,
    pub acknowledged: bool,
}

#[derive(Debug, Clone)]
pub struct AlertStore {
    alerts: heapless::Vec<AlertItem, MAX_ALERTS>,
}

impl AlertStore {
    /// The three device alerts every session starts with.
    pub fn seeded() -> Self {
        let alerts = heapless::Vec::from_iter([
            AlertItem {
                id: "alert-1",
                status: "Nivel de agua bajo",
                message: "Quedan 15% en el depósito. Recomendado recargar hoy.",
                tone: AlertTone::Danger,
                acknowledged: false,
            },
            AlertItem {
                id: "alert-2",
                status: "Próxima limpieza",
                message: "Faltan 3 días para la limpieza preventiva del dispensador.",
                tone: AlertTone::Warning,
                acknowledged: false,
            },
            AlertItem {
                id: "alert-3",
                status: "Filtro de agua",
                message: "Último cambio hace 28 días. Programa un reemplazo pronto.",
                tone: AlertTone::Info,
                acknowledged: true,
            },
        ]);
        Self { alerts }
    }

    /// Flip the `acknowledged` flag of the alert with `id`.
    ///
    /// Returns the new flag value, or `None` if no such alert exists.
    pub fn toggle_acknowledged(&mut self, id: &str) -> Option<bool> {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.acknowledged = !alert.acknowledged;
                info!("Alerts: '{}' acknowledged={}", alert.id, alert.acknowledged);
                Some(alert.acknowledged)
            }
            None => {
                debug!("Alerts: toggle '{}' ignored (not present)", id);
                None
            }
        }
    }

    /// Alerts in their original order.
    pub fn alerts(&self) -> &[AlertItem] {
        &self.alerts
    }

    /// Number of alerts still awaiting acknowledgment.
    pub fn pending_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.acknowledged).count()
    }
}
