use crate::core::rates::{DailyRates, FetchError, RateProvider};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct KursPajakResponse {
    #[serde(rename = "KursTable")]
    kurs_table: Vec<KursRow>,
    #[serde(rename = "DasarHukum")]
    dasar_hukum: String,
}

#[derive(Debug, Deserialize)]
struct KursRow {
    #[serde(rename = "MataUang")]
    mata_uang: String,
    #[serde(rename = "Nilai")]
    nilai: String,
}

/// Fetches the daily tax exchange-rate table from the kurs KMK API.
pub struct KursPajakProvider {
    base_url: String,
}

impl KursPajakProvider {
    pub fn new(base_url: &str) -> Self {
        KursPajakProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for KursPajakProvider {
    #[instrument(
        name = "KursPajakFetch",
        skip(self),
        fields(date = %date)
    )]
    async fn fetch_daily(&self, date: NaiveDate) -> Result<DailyRates, FetchError> {
        let url = format!(
            "{}/kurs-pajak?date={}",
            self.base_url,
            date.format("%Y-%m-%d")
        );
        debug!("Requesting rate table from {}", url);

        let client = reqwest::Client::builder().user_agent("kursdb/1.0").build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await?;
        let data: KursPajakResponse =
            serde_json::from_str(&text).map_err(|e| FetchError::Payload(e.to_string()))?;

        // Collapse the rate list into the per-date record; source order is
        // preserved and a duplicate code keeps the last value.
        let mut rates = DailyRates::new(data.dasar_hukum);
        for row in data.kurs_table {
            rates.insert(row.mata_uang, row.nilai);
        }
        Ok(rates)
    }
}
