use serde_json::{Map, Value};

/// A message plus structured context fields.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    pub message: String,
    pub fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), fields: Map::new() }
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}

pub trait Logger: Send + Sync {
    fn info(&self, record: LogRecord);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, record: LogRecord) {
        let LogRecord { message, fields } = record;
        let context = Value::Object(fields);
        tracing::info!(context = %context, "{message}");
    }
}
