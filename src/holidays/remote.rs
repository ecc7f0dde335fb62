//! Remote holiday lookup through the AbstractAPI holidays service.
//!
//! The service is queried with
//! `GET {endpoint}?api_key=..&country=EC&year=..&month=..&day=..` and answers
//! with a JSON array of holidays for that day (`[]` when there is none).

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{PredictorError, PredictorResult};
use crate::models::HolidayRecord;

/// Observances the remote provider lists but Ecuador does not treat as
/// public holidays.
pub const EXCLUDED_OBSERVANCES: [&str; 1] = ["Maundy Thursday"];

const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Settings for [`RemoteHolidayClient`], with the credential already
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    /// Base URL of the holidays endpoint.
    pub endpoint: String,
    /// ISO 3166-1 alpha-2 country code sent with each request.
    pub country: String,
    /// API key; requests are still sent without one and rejected remotely.
    pub api_key: Option<String>,
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// How many times a transport failure or timeout is retried.
    pub max_retries: u32,
}

/// A holiday as reported by the remote service.
#[derive(Debug, Clone, Deserialize)]
struct RemoteHoliday {
    name: String,
}

/// The service normally answers with an array, but a single object is
/// accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteBody {
    Many(Vec<RemoteHoliday>),
    One(RemoteHoliday),
}

impl RemoteBody {
    fn into_holidays(self) -> Vec<RemoteHoliday> {
        match self {
            RemoteBody::Many(holidays) => holidays,
            RemoteBody::One(holiday) => vec![holiday],
        }
    }
}

/// HTTP client for the remote holidays service.
#[derive(Debug, Clone)]
pub struct RemoteHolidayClient {
    settings: RemoteSettings,
    http_client: Client,
}

impl RemoteHolidayClient {
    /// Creates a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Network`] if the HTTP client cannot be
    /// initialised.
    pub fn new(settings: RemoteSettings) -> PredictorResult<Self> {
        let http_client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| PredictorError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            settings,
            http_client,
        })
    }

    /// Returns the client settings.
    pub fn settings(&self) -> &RemoteSettings {
        &self.settings
    }

    /// Looks up whether `date` is a public holiday.
    ///
    /// Returns `Ok(None)` when the service reports no holiday, or only
    /// observances listed in [`EXCLUDED_OBSERVANCES`]. Transport failures and
    /// timeouts are retried up to `max_retries` times.
    ///
    /// # Errors
    ///
    /// - [`PredictorError::Authentication`] on a 401 response
    /// - [`PredictorError::Timeout`] when the request exceeds its timeout
    /// - [`PredictorError::Network`] on other transport failures
    /// - [`PredictorError::UnexpectedResponse`] on other non-success
    ///   statuses or an unreadable body
    pub async fn lookup(&self, date: NaiveDate) -> PredictorResult<Option<HolidayRecord>> {
        let mut attempt = 0;
        loop {
            match self.fetch(date).await {
                Err(err) if err.is_transient() && attempt < self.settings.max_retries => {
                    attempt += 1;
                    warn!(%date, attempt, error = %err, "Retrying holiday lookup");
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                }
                Err(err) => return Err(err),
                Ok(holidays) => return Ok(select_holiday(date, holidays)),
            }
        }
    }

    /// Sends a single request for `date`.
    async fn fetch(&self, date: NaiveDate) -> PredictorResult<Vec<RemoteHoliday>> {
        info!(%date, endpoint = %self.settings.endpoint, "Querying remote holiday API");

        let query = [
            ("api_key", self.settings.api_key.clone().unwrap_or_default()),
            ("country", self.settings.country.clone()),
            ("year", date.year().to_string()),
            ("month", format!("{:02}", date.month())),
            ("day", format!("{:02}", date.day())),
        ];

        let response = self
            .http_client
            .get(&self.settings.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%date, "Remote holiday API rejected the API key");
            return Err(PredictorError::Authentication {
                message: "missing or invalid API key".to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(PredictorError::UnexpectedResponse {
                status: status.as_u16(),
                message: truncate(&body),
            });
        }

        serde_json::from_str::<RemoteBody>(&body)
            .map(RemoteBody::into_holidays)
            .map_err(|e| PredictorError::UnexpectedResponse {
                status: status.as_u16(),
                message: format!("invalid holiday payload: {e}"),
            })
    }

    fn transport_error(&self, error: reqwest::Error) -> PredictorError {
        if error.is_timeout() {
            PredictorError::Timeout {
                timeout: self.settings.timeout,
            }
        } else {
            PredictorError::Network {
                message: error.to_string(),
            }
        }
    }
}

/// Picks the first reported holiday that is not an excluded observance.
fn select_holiday(date: NaiveDate, holidays: Vec<RemoteHoliday>) -> Option<HolidayRecord> {
    holidays
        .into_iter()
        .find(|holiday| {
            let excluded = EXCLUDED_OBSERVANCES.contains(&holiday.name.as_str());
            if excluded {
                info!(%date, name = %holiday.name, "Ignoring observance that is not a public holiday");
            }
            !excluded
        })
        .map(|holiday| HolidayRecord {
            date,
            label: holiday.name,
        })
}

fn truncate(body: &str) -> String {
    const LIMIT: usize = 200;
    match body.char_indices().nth(LIMIT) {
        Some((index, _)) => format!("{}...", &body[..index]),
        None => body.to_string(),
    }
}
