//! In-memory appointment store enforcing the active-slot constraint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::InMemoryUserStore;
use crate::domain::ports::{AppointmentStore, AppointmentStoreError, UserStore};
use crate::domain::{Appointment, AppointmentStatus, AppointmentView, Slot, UserId};

/// Appointment rows behind one mutex; the guard makes the slot-uniqueness
/// check and the insert a single atomic step, like the database constraint
/// a durable adapter would rely on.
///
/// Participant projections are resolved against the shared user directory,
/// standing in for the join a SQL adapter would perform.
pub struct InMemoryAppointmentStore {
    rows: Mutex<HashMap<Uuid, Appointment>>,
    users: Arc<InMemoryUserStore>,
}

impl InMemoryAppointmentStore {
    /// Create an empty store resolving participants against `users`.
    pub fn new(users: Arc<InMemoryUserStore>) -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            users,
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Appointment>>, AppointmentStoreError> {
        self.rows
            .lock()
            .map_err(|_| AppointmentStoreError::query("appointment store mutex poisoned"))
    }

    async fn project(&self, appointment: Appointment) -> Result<AppointmentView, AppointmentStoreError> {
        let provider = self
            .users
            .find_by_id(appointment.provider_id())
            .await
            .map_err(|err| AppointmentStoreError::query(err.to_string()))?
            .ok_or_else(|| AppointmentStoreError::query("appointment provider missing"))?;
        let client = self
            .users
            .find_by_id(appointment.user_id())
            .await
            .map_err(|err| AppointmentStoreError::query(err.to_string()))?
            .ok_or_else(|| AppointmentStoreError::query("appointment client missing"))?;

        Ok(AppointmentView {
            appointment,
            provider_name: provider.name,
            provider_email: provider.email,
            client_name: client.name,
        })
    }

    async fn project_all(
        &self,
        mut appointments: Vec<Appointment>,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError> {
        appointments.sort_by_key(Appointment::date);
        let mut views = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            views.push(self.project(appointment).await?);
        }
        Ok(views)
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn find_active_in_slot(
        &self,
        slot: &Slot,
    ) -> Result<Option<Appointment>, AppointmentStoreError> {
        let rows = self.guard()?;
        Ok(rows
            .values()
            .find(|row| row.status() == AppointmentStatus::Active && row.slot() == *slot)
            .cloned())
    }

    async fn create(&self, appointment: &Appointment) -> Result<(), AppointmentStoreError> {
        let mut rows = self.guard()?;
        let slot = appointment.slot();
        if rows
            .values()
            .any(|row| row.status() == AppointmentStatus::Active && row.slot() == slot)
        {
            return Err(AppointmentStoreError::slot_taken(&slot));
        }
        rows.insert(appointment.id(), appointment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AppointmentView>, AppointmentStoreError> {
        let row = { self.guard()?.get(&id).cloned() };
        match row {
            Some(appointment) => Ok(Some(self.project(appointment).await?)),
            None => Ok(None),
        }
    }

    async fn mark_canceled(
        &self,
        id: Uuid,
        canceled_at: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentStoreError> {
        let mut rows = self.guard()?;
        let row = rows
            .get(&id)
            .ok_or(AppointmentStoreError::NotFound { id })?;
        let canceled = row
            .cancel(canceled_at)
            .map_err(|_| AppointmentStoreError::AlreadyCanceled { id })?;
        rows.insert(id, canceled.clone());
        Ok(canceled)
    }

    async fn list_active_for_user(
        &self,
        user_id: &UserId,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError> {
        let matching: Vec<Appointment> = {
            let rows = self.guard()?;
            rows.values()
                .filter(|row| {
                    row.status() == AppointmentStatus::Active && row.user_id() == user_id
                })
                .cloned()
                .collect()
        };
        let views = self.project_all(matching).await?;
        let offset = page.saturating_sub(1) as usize * page_size as usize;
        Ok(views
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect())
    }

    async fn list_active_for_provider_on(
        &self,
        provider_id: &UserId,
        day: NaiveDate,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError> {
        let matching: Vec<Appointment> = {
            let rows = self.guard()?;
            rows.values()
                .filter(|row| {
                    row.status() == AppointmentStatus::Active
                        && row.provider_id() == provider_id
                        && row.date().date_naive() == day
                })
                .cloned()
                .collect()
        };
        self.project_all(matching).await
    }
}
