use crate::constants::RECENT_RESERVATIONS;
use crate::models::{FinancialTotals, Reservation};
use crate::state::reports::totals;
use crate::state::workspace::Workspace;

/// Headline figures for the administrator dashboard, computed from live state.
#[derive(Debug, Clone)]
pub struct DashboardKpis<'a> {
    pub events_scheduled: usize,
    pub financial: FinancialTotals,
    pub critical_items: usize,
    pub unread_notifications: usize,
    pub recent_reservations: Vec<&'a Reservation>,
}

impl<'a> DashboardKpis<'a> {
    pub fn from_workspace(ws: &'a Workspace) -> Self {
        Self {
            events_scheduled: ws
                .events
                .all()
                .iter()
                .filter(|e| e.status.is_active())
                .count(),
            financial: totals(ws.reports.all()),
            critical_items: ws.purchasing.low_stock().len(),
            unread_notifications: ws.notifications.unread_count(),
            recent_reservations: ws.reservations.most_recent(RECENT_RESERVATIONS),
        }
    }
}
