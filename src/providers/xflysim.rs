use http::StatusCode;
use rocket::async_trait;
use serde::Deserialize;
use serde_json::Value;
use crate::error::{Error, Result};
use crate::locale;
use crate::metar::RawReport;
use crate::providers::Fetcher;

/// Application level success code of the XFlysim API.
const SUCCESS: i64 = 20000;

/// XFlysim Network real time map weather API.
pub struct XFlysim {
    client: reqwest::Client,
    base_url: String,
}

impl XFlysim {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
}

impl Envelope {
    pub(crate) fn into_report(self) -> Result<RawReport> {
        if self.code != SUCCESS {
            return Err(Error::Upstream(self.message.unwrap_or_else(|| locale::FETCH_FAILED.to_string())));
        }

        let text = |key: &str| self.data.get(key).and_then(Value::as_str).map(String::from);

        let metar_decode = match self.data.get("metarDecode") {
            Some(Value::String(decoded)) if !decoded.is_empty() => decoded.clone(),
            Some(decoded) if decoded.is_object() || decoded.is_array() => decoded.to_string(),
            // no pre-decoded fields, hand over the whole payload instead
            _ => self.data.to_string(),
        };

        Ok(RawReport {
            icao: text("icao"),
            metar: text("metar"),
            metar_decode: Some(metar_decode),
        })
    }
}

#[async_trait]
impl Fetcher for XFlysim {
    fn id(&self) -> String {
        String::from("xflysim")
    }

    async fn fetch(&self, icao: &str) -> Result<RawReport> {
        let req = self.client.get(format!("{}/{}", self.base_url, icao)).build()?;

        debug!("`{}` Try to fetch {}", icao, req.url());

        let response = self.client.execute(req).await?;
        match response.status() {
            StatusCode::OK => {
                let envelope: Envelope = serde_json::from_slice(response.bytes().await?.as_ref())?;
                debug!("`{}` Upstream answered code {}", icao, envelope.code);
                envelope.into_report()
            },
            any => {
                warn!("Fetch failed `{}` : {}", icao, any);
                Err(Error::Upstream(format!("HTTP error! {}", any)))
            }
        }
    }
}
