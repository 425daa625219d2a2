//! HTTP client for the booking site's read API.
//!
//! Both logical queries share a dependent two-step lookup: resolve the map
//! by its opaque sharing id, then resolve the map's space list into the
//! curated room set. Only then can availability or reservations be fetched.
//!
//! The client never retries; a failed request surfaces as a single
//! descriptive error and retrying is the caller's decision.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use roomgrid_engine::availability::{AvailabilityCounts, RoomAvailability};
use roomgrid_engine::catalog::{self, Room, RoomCatalog};
use roomgrid_engine::schedule::{self, DailySchedule, RoomSchedule};
use roomgrid_engine::{availability, validate};

use crate::error::{ClientError, Result};

/// Production API host.
const DEFAULT_BASE_URL: &str = "https://k8s.zzimkkong.com";

/// Map display name used when the provider supplies none.
const DEFAULT_MAP_NAME: &str = "meeting room map";

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A resolved provider context: one map and its curated room set.
#[derive(Debug, Clone, PartialEq)]
pub struct MapContext {
    pub map_id: i64,
    pub map_name: String,
    pub rooms: Vec<Room>,
}

/// Input for an availability query. Times are `"HH:MM"` on the 10-minute
/// grid; the end must be strictly later than the start.
#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    pub sharing_map_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Input for a daily-schedule query.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub sharing_map_id: String,
    pub date: String,
}

/// The queried window, echoed back for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedWindow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Availability result with map metadata attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityView {
    pub map_id: i64,
    pub map_name: String,
    pub window: SelectedWindow,
    pub counts: AvailabilityCounts,
    pub rooms: Vec<RoomAvailability>,
}

/// Daily schedule result with map metadata attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub map_id: i64,
    pub map_name: String,
    #[serde(flatten)]
    pub schedule: DailySchedule,
}

/// Client for the read API.
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
    catalog: RoomCatalog,
}

impl ProviderClient {
    /// Creates a client against the production host with the default room
    /// catalog.
    pub fn new() -> Result<Self> {
        Self::with_config(ProviderConfig::default(), RoomCatalog::production_default())
    }

    /// Creates a client with custom configuration and catalog.
    pub fn with_config(config: ProviderConfig, catalog: RoomCatalog) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            catalog,
        })
    }

    /// Resolves the provider context for a sharing id: map lookup, then the
    /// map's space list resolved against the catalog.
    pub async fn resolve_map_context(&self, sharing_map_id: &str) -> Result<MapContext> {
        let sharing_map_id = sharing_map_id.trim();
        if sharing_map_id.is_empty() {
            return Err(ClientError::MissingSharingId);
        }

        debug!(sharing_map_id, "resolving map context");
        let map_body = self
            .fetch_json(
                &format!("{}/api/guests/maps", self.config.base_url),
                &[("sharingMapId", sharing_map_id)],
            )
            .await?;

        let map_id = roomgrid_engine::raw::int_field(&map_body, "mapId")
            .ok_or(ClientError::MissingMapId)?;
        let map_name = map_body
            .get("mapName")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_MAP_NAME)
            .to_string();

        let spaces_body = self
            .fetch_json(
                &format!("{}/api/guests/maps/{map_id}/spaces", self.config.base_url),
                &[],
            )
            .await?;
        let spaces = catalog::extract_spaces(&spaces_body);
        let rooms = catalog::resolve_rooms(&spaces, &self.catalog);

        info!(map_id, room_count = rooms.len(), "resolved map context");
        Ok(MapContext {
            map_id,
            map_name,
            rooms,
        })
    }

    /// Fetches per-room availability for an explicit window.
    ///
    /// Validation runs before any network call; each failure carries its own
    /// message.
    pub async fn fetch_availability(&self, request: &AvailabilityRequest) -> Result<AvailabilityView> {
        let date = validate::validate_date(&request.date, Utc::now())?;
        let (start_time, end_time) =
            validate::validate_time_window(&request.start_time, &request.end_time)?;

        let context = self.resolve_map_context(&request.sharing_map_id).await?;

        let start_date_time = format!("{date}T{start_time}:00+09:00");
        let end_date_time = format!("{date}T{end_time}:00+09:00");
        debug!(map_id = context.map_id, %start_date_time, %end_date_time, "fetching availability");

        let body = self
            .fetch_json(
                &format!(
                    "{}/api/guests/maps/{}/spaces/availability",
                    self.config.base_url, context.map_id
                ),
                &[
                    ("startDateTime", start_date_time.as_str()),
                    ("endDateTime", end_date_time.as_str()),
                ],
            )
            .await?;

        let entries = body
            .get("spaces")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let snapshot = availability::build_snapshot(&context.rooms, &entries);

        info!(
            map_id = context.map_id,
            available = snapshot.counts.available,
            occupied = snapshot.counts.occupied,
            "availability snapshot built"
        );
        Ok(AvailabilityView {
            map_id: context.map_id,
            map_name: context.map_name,
            window: SelectedWindow {
                date,
                start_time,
                end_time,
            },
            counts: snapshot.counts,
            rooms: snapshot.rooms,
        })
    }

    /// Fetches and assembles the full daily schedule.
    ///
    /// Per-room reservation fetches are issued concurrently; a failure in
    /// any one fails the whole request. No partial-room schedule is ever
    /// returned.
    pub async fn fetch_daily_schedule(&self, request: &ScheduleRequest) -> Result<ScheduleView> {
        let date = validate::validate_date(&request.date, Utc::now())?;
        let context = self.resolve_map_context(&request.sharing_map_id).await?;

        let fetches = context
            .rooms
            .iter()
            .map(|room| self.fetch_room_schedule(context.map_id, room, &date));
        let rooms: Vec<RoomSchedule> = futures::future::try_join_all(fetches).await?;

        let schedule = schedule::assemble_schedule(&date, rooms);
        info!(
            map_id = context.map_id,
            date = %schedule.date,
            rooms = schedule.rooms.len(),
            slots = schedule.timeline.len(),
            "daily schedule assembled"
        );
        Ok(ScheduleView {
            map_id: context.map_id,
            map_name: context.map_name,
            schedule,
        })
    }

    async fn fetch_room_schedule(
        &self,
        map_id: i64,
        room: &Room,
        date: &str,
    ) -> Result<RoomSchedule> {
        debug!(map_id, room_id = room.id, date, "fetching reservations");
        let body = self
            .fetch_json(
                &format!(
                    "{}/api/guests/maps/{map_id}/spaces/{}/reservations",
                    self.config.base_url, room.id
                ),
                &[("date", date)],
            )
            .await?;

        let reservations =
            schedule::normalize_reservations(body.get("reservations").unwrap_or(&Value::Null));
        Ok(RoomSchedule::new(room, reservations))
    }

    /// GETs a URL and applies the JSON boundary contract: an unparseable or
    /// empty body reads as `{}`; non-2xx surfaces the provider's `message`
    /// field when present; a 2xx body that is not an object is malformed.
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default()));

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed ({})", status.as_u16()));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The spaces endpoint may answer with a bare array; scalars and
        // non-JSON are malformed.
        if !body.is_object() && !body.is_array() {
            return Err(ClientError::MalformedResponse);
        }

        Ok(body)
    }
}
