use std::sync::Arc;
use crate::clock::Clock;
use crate::error::Result;
use crate::locale;
use crate::metar::tables::CodeTables;
use crate::providers::Fetcher;
use crate::render::Renderer;
use crate::report::render_document;

/// What the command answers to whoever invoked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// No ICAO given: the prompt followed by the usage text.
    Prompt(String),
    /// JPEG report card.
    Image(Vec<u8>),
    Failure(String),
}

/// Fetch, decode, format and render of a METAR report card.
pub struct MetarService {
    fetcher: Box<dyn Fetcher>,
    renderer: Box<dyn Renderer>,
    tables: Arc<CodeTables>,
    clock: Box<dyn Clock>,
    usage: String,
    verbose: bool,
}

impl MetarService {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        renderer: Box<dyn Renderer>,
        tables: Arc<CodeTables>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            fetcher,
            renderer,
            tables,
            clock,
            usage: locale::usage("metar", "气象"),
            verbose: false,
        }
    }

    /// Usage text appended to the missing ICAO prompt.
    pub fn with_usage(mut self, command: &str, alias: &str) -> Self {
        self.usage = locale::usage(command, alias);
        self
    }

    /// Logs every step at info level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn trace(&self, message: impl FnOnce() -> String) {
        if self.verbose {
            info!("{}", message());
        }
    }

    /// Runs the whole pipeline for one airport, strictly in sequence.
    pub async fn report(&self, icao: &str) -> Result<Vec<u8>> {
        let icao = icao.trim().to_uppercase();

        let report = self.fetcher.fetch(&icao).await?;
        self.trace(|| format!("{} - {:?}", self.fetcher.id(), report));

        let document = render_document(&report, &self.tables, self.clock.now())?;
        self.trace(|| format!("`{}` document of {} bytes", icao, document.len()));

        let image = self.renderer.capture(&document).await?;
        self.trace(|| format!("`{}` image of {} bytes", icao, image.len()));

        Ok(image)
    }

    /// Command entry point. Every failure ends here: it is logged for the
    /// operator and the user only ever sees the generic failure message.
    pub async fn command(&self, icao: Option<&str>) -> Reply {
        let icao = match icao.map(str::trim).filter(|icao| !icao.is_empty()) {
            Some(icao) => icao,
            None => return Reply::Prompt(format!("{}\n{}", locale::INVALID_ICAO, self.usage)),
        };

        self.trace(|| format!("Requested icao `{}`", icao));

        match self.report(icao).await {
            Ok(image) => Reply::Image(image),
            Err(e) => {
                error!("Failed to fetch, generate or send METAR `{}` : {}", icao, e);
                if self.verbose {
                    error!("{:?}", e);
                }
                Reply::Failure(locale::REPORT_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use chrono::DateTime;
    use rocket::async_trait;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::metar::RawReport;
    use crate::metar::tables::{default_cloud_coverage_map, default_weather_map};

    struct StaticFetcher(Arc<Mutex<Vec<String>>>, Option<RawReport>);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        fn id(&self) -> String {
            String::from("static")
        }

        async fn fetch(&self, icao: &str) -> Result<RawReport> {
            self.0.lock().unwrap().push(icao.to_string());
            self.1.clone().ok_or_else(|| Error::Upstream("airport not found".to_string()))
        }
    }

    struct EchoRenderer;

    #[async_trait]
    impl Renderer for EchoRenderer {
        async fn capture(&self, document: &str) -> Result<Vec<u8>> {
            Ok(document.as_bytes().to_vec())
        }
    }

    fn service(report: Option<RawReport>) -> MetarService {
        service_with_log(report, Arc::default())
    }

    fn service_with_log(report: Option<RawReport>, log: Arc<Mutex<Vec<String>>>) -> MetarService {
        MetarService::new(
            Box::new(StaticFetcher(log, report)),
            Box::new(EchoRenderer),
            Arc::new(CodeTables::new(&default_weather_map(), &default_cloud_coverage_map())),
            Box::new(FixedClock(DateTime::parse_from_rfc3339("2024-03-25T10:00:00+00:00").unwrap())),
        )
    }

    fn ksfo(metar: &str) -> RawReport {
        RawReport { icao: Some("KSFO".into()), metar: Some(metar.into()), metar_decode: None }
    }

    #[tokio::test]
    async fn missing_icao_prompts() {
        let service = service(None).with_usage("wx", "天气");
        for icao in [None, Some(""), Some("  ")] {
            match service.command(icao).await {
                Reply::Prompt(text) => {
                    assert!(text.starts_with("请提供一个有效的 ICAO 代码。"));
                    assert!(text.contains("wx <icao>"));
                },
                other => panic!("unexpected reply {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn uppercases_before_fetching() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let service = service_with_log(Some(ksfo("METAR KSFO 221651Z")), log.clone());

        assert!(matches!(service.command(Some(" ksfo ")).await, Reply::Image(_)));
        assert_eq!(*log.lock().unwrap(), vec!["KSFO".to_string()]);
    }

    #[tokio::test]
    async fn upstream_error_is_generic_failure() {
        assert_eq!(service(None).command(Some("XXXX")).await, Reply::Failure("获取或生成 METAR 信息失败，请稍后再试。".into()));
    }

    #[tokio::test]
    async fn timestamp_error_is_generic_failure() {
        let service = service(Some(ksfo("METAR KSFO NIL")));
        assert!(matches!(service.report("KSFO").await, Err(Error::StampError(_))));
        assert_eq!(service.command(Some("KSFO")).await, Reply::Failure("获取或生成 METAR 信息失败，请稍后再试。".into()));
    }
}
