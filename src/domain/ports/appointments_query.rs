//! Driving port for appointment reads: client listings and provider
//! day schedules.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AppointmentView, Error, UserId};

/// One entry in a client's paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntryPayload {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub provider_id: UserId,
    pub provider_name: String,
}

impl From<&AppointmentView> for ListingEntryPayload {
    fn from(value: &AppointmentView) -> Self {
        Self {
            id: value.appointment.id(),
            date: value.appointment.date(),
            provider_id: *value.appointment.provider_id(),
            provider_name: value.provider_name.clone(),
        }
    }
}

/// One entry in a provider's day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntryPayload {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub client_name: String,
}

impl From<&AppointmentView> for ScheduleEntryPayload {
    fn from(value: &AppointmentView) -> Self {
        Self {
            id: value.appointment.id(),
            date: value.appointment.date(),
            client_name: value.client_name.clone(),
        }
    }
}

/// Request for one page of a client's active appointments. Pages are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsRequest {
    pub user_id: UserId,
    pub page: u32,
}

/// One page of a client's listing, ordered by date ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsResponse {
    pub appointments: Vec<ListingEntryPayload>,
}

/// Request for a provider's schedule within one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderScheduleRequest {
    pub provider_id: UserId,
    pub day: NaiveDate,
}

/// A provider's day schedule, ordered by date ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderScheduleResponse {
    pub appointments: Vec<ScheduleEntryPayload>,
}

/// Driving port for appointment reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsQuery: Send + Sync {
    /// Read one page of a client's active appointments, consulting the
    /// listing cache before the store.
    async fn list_appointments(
        &self,
        request: ListAppointmentsRequest,
    ) -> Result<ListAppointmentsResponse, Error>;

    /// Read a provider's active appointments for one day. Only users with
    /// the provider flag may load a schedule.
    async fn provider_schedule(
        &self,
        request: ProviderScheduleRequest,
    ) -> Result<ProviderScheduleResponse, Error>;
}

/// Fixture query for tests that only need the port wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentsQuery;

#[async_trait]
impl AppointmentsQuery for FixtureAppointmentsQuery {
    async fn list_appointments(
        &self,
        _request: ListAppointmentsRequest,
    ) -> Result<ListAppointmentsResponse, Error> {
        Ok(ListAppointmentsResponse {
            appointments: Vec::new(),
        })
    }

    async fn provider_schedule(
        &self,
        _request: ProviderScheduleRequest,
    ) -> Result<ProviderScheduleResponse, Error> {
        Ok(ProviderScheduleResponse {
            appointments: Vec::new(),
        })
    }
}
