use anyhow::Result;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::FetchError;
use crate::utils::datetime::{
    describe_hour_difference, format_clock_12h, format_date, parse_remote_datetime,
};

const IRELAND_ZONE: Tz = chrono_tz::Europe::Dublin;
const ETHIOPIA_ZONE: Tz = chrono_tz::Africa::Addis_Ababa;

/// Expected shape of the world-time API response. Only the `datetime`
/// field is consumed; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct TimeApiResponse {
    datetime: String,
}

/// A single zone's current time-of-day and date.
///
/// `estimated` is true when the reading was computed from the host clock
/// instead of fetched from the remote service; the label then carries an
/// "(estimated)" suffix so templates show the degradation inline.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneReading {
    pub time: String,
    pub date: String,
    pub zone_label: String,
    pub estimated: bool,
}

/// The full dual-zone result handed to the rendering layer.
///
/// `degraded` flips only when BOTH readings are estimated; a single-zone
/// outage is visible solely through that zone's label suffix.
#[derive(Debug, Clone, Serialize)]
pub struct WorldTimes {
    pub ireland: ZoneReading,
    pub ethiopia: ZoneReading,
    pub time_difference: String,
    pub degraded: bool,
}

/// Resolves the current time in Ireland and Ethiopia, preferring the
/// remote world-time API and falling back to host-clock zone math.
pub struct WorldTimeService {
    client: Client,
    base_url: String,
}

impl WorldTimeService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.time_api_base_url.clone(),
        })
    }

    /// Produces a fully-populated result for the current instant.
    ///
    /// Never fails: every fetch error is logged and converted into an
    /// estimated reading so page rendering is not blocked by a
    /// third-party outage. Zones are fetched sequentially, so the
    /// worst case blocks for twice the configured timeout.
    pub async fn resolve(&self) -> WorldTimes {
        let ireland = self.zone_reading(IRELAND_ZONE).await;
        let ethiopia = self.zone_reading(ETHIOPIA_ZONE).await;
        let degraded = ireland.estimated && ethiopia.estimated;

        WorldTimes {
            ireland,
            ethiopia,
            time_difference: current_hour_difference(),
            degraded,
        }
    }

    async fn zone_reading(&self, zone: Tz) -> ZoneReading {
        match self.fetch_zone(zone).await {
            Ok(dt) => ZoneReading {
                time: format_clock_12h(&dt),
                date: format_date(&dt),
                zone_label: zone.name().to_string(),
                estimated: false,
            },
            Err(err) => {
                warn!("Could not fetch {} time: {}", zone.name(), err);
                let local = Utc::now().with_timezone(&zone);
                ZoneReading {
                    time: format_clock_12h(&local),
                    date: format_date(&local),
                    zone_label: format!("{} (estimated)", zone.name()),
                    estimated: true,
                }
            }
        }
    }

    async fn fetch_zone(&self, zone: Tz) -> Result<DateTime<FixedOffset>, FetchError> {
        let url = format!("{}/{}", self.base_url, zone.name());
        debug!("Fetching remote time from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteUnavailable(format!(
                "{} returned status {}",
                url, status
            )));
        }

        let payload: TimeApiResponse = response.json().await?;
        Ok(parse_remote_datetime(&payload.datetime)?)
    }
}

/// Describes the hour difference between the two zones at this instant.
///
/// Computed from live zone offsets rather than from the fetched readings,
/// which may correspond to slightly different instants. The displayed
/// times and this description can therefore disagree briefly around
/// offset transitions; that decoupling is intentional.
fn current_hour_difference() -> String {
    let now = Utc::now();
    let ireland_offset = now
        .with_timezone(&IRELAND_ZONE)
        .offset()
        .fix()
        .local_minus_utc() as i64;
    let ethiopia_offset = now
        .with_timezone(&ETHIOPIA_ZONE)
        .offset()
        .fix()
        .local_minus_utc() as i64;

    describe_hour_difference("Ethiopia", ethiopia_offset - ireland_offset)
}
