use log::kv::{Error, Key, Source, Value, VisitSource};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once, OnceLock};

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
    pub key_values: Vec<(String, String)>,
}

impl CapturedRecord {
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.key_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Process-wide logger that keeps every record in memory.
/// Tests running in parallel share it, so lookups should filter on a value unique to the test.
#[derive(Default)]
pub struct CapturingLogger {
    captured: Mutex<Vec<CapturedRecord>>,
}

impl CapturingLogger {
    pub fn install() -> &'static CapturingLogger {
        static INSTANCE: OnceLock<CapturingLogger> = OnceLock::new();
        static INSTALL: Once = Once::new();

        let logger = INSTANCE.get_or_init(CapturingLogger::default);
        INSTALL.call_once(|| {
            if log::set_logger(logger).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
        logger
    }

    pub fn records_containing(&self, needle: &str) -> Vec<CapturedRecord> {
        self.captured
            .lock()
            .unwrap()
            .iter()
            .filter(|record| {
                record.message.contains(needle) || record.key_values.iter().any(|(_, v)| v.contains(needle))
            })
            .cloned()
            .collect()
    }
}

struct KeyValueCollector(Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for KeyValueCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), Error> {
        self.0.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let mut collector = KeyValueCollector(Vec::new());
        let _ = record.key_values().visit(&mut collector);
        self.captured.lock().unwrap().push(CapturedRecord {
            level: record.level(),
            message: record.args().to_string(),
            key_values: collector.0,
        });
    }

    fn flush(&self) {}
}
