use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer, EnvFilter, Registry};
use tracing_subscriber::prelude::*;

pub const DEFAULT_FILTER: &str = "warn,fortune_backend=info,fortune_shared=info";

/// Message plus any structured fields of one event. The `log.*` fields added
/// when bridging `log` records are dropped.
#[derive(Default, Debug, PartialEq)]
struct EventFields {
    message: String,
    extra: Vec<(&'static str, String)>,
}

impl EventFields {
    fn push(&mut self, name: &'static str, value: String) {
        if name == "message" {
            self.message = value;
        } else if !name.starts_with("log.") {
            self.extra.push((name, value));
        }
    }

    fn text(&self) -> String {
        self.extra.iter().fold(self.message.clone(), |mut text, (name, value)| {
            text.push_str(&format!(" {}={}", name, value));
            text
        })
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field.name(), format!("{:?}", value));
    }
}

/// A rendered log line and whether it belongs on stderr.
#[derive(Debug, PartialEq)]
struct Line {
    text: String,
    to_stderr: bool,
}

fn render_line(level: &Level, target: &str, fields: &EventFields, timestamp: &str) -> Option<Line> {
    if fields.message.is_empty() {
        return None;
    }
    let body = fields.text();
    let (badge, to_stderr) = if *level == Level::ERROR {
        ("❌ Error:", true)
    } else if *level == Level::WARN {
        ("⚠️ Warning:", true)
    } else if *level == Level::INFO {
        ("ℹ️", false)
    } else if *level == Level::DEBUG {
        ("🔄", false)
    } else if target.contains("games") {
        // Per-frame angles, only from the session driver
        ("🎞️", false)
    } else {
        return None;
    };
    Some(Line {
        text: format!("[{}] {} {} - {}", timestamp, badge, target, body),
        to_stderr,
    })
}

struct WheelLayer;

impl<S: Subscriber> Layer<S> for WheelLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        match render_line(metadata.level(), metadata.target(), &fields, &timestamp) {
            Some(line) if line.to_stderr => eprintln!("{}", line.text),
            Some(line) => println!("{}", line.text),
            None => {}
        }
    }
}

/// Installs the global subscriber. `log` records from `fortune_shared` are bridged in.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(WheelLayer);

    if let Err(e) = subscriber.try_init() {
        eprintln!("Failed to set subscriber: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(message: &str, extra: &[(&'static str, &str)]) -> EventFields {
        let mut fields = EventFields::default();
        fields.push("message", message.to_string());
        for (name, value) in extra {
            fields.push(*name, value.to_string());
        }
        fields
    }

    #[test]
    fn test_bridged_log_fields_are_dropped() {
        let fields = fields("spin done", &[("log.target", "fortune_shared"), ("sector", "3")]);
        assert_eq!(fields.text(), "spin done sector=3");
    }

    #[test]
    fn test_warnings_go_to_stderr() {
        let line = render_line(&Level::WARN, "fortune_shared::wheel_prize", &fields("jackpot", &[]), "t").unwrap();
        assert!(line.to_stderr);
        assert_eq!(line.text, "[t] ⚠️ Warning: fortune_shared::wheel_prize - jackpot");

        let line = render_line(&Level::INFO, "fortune_backend", &fields("started", &[]), "t").unwrap();
        assert!(!line.to_stderr);
    }

    #[test]
    fn test_trace_only_from_session_driver() {
        let angle = fields("angle -12.00", &[]);
        assert!(render_line(&Level::TRACE, "fortune_backend::games::backend_wheel_game", &angle, "t").is_some());
        assert!(render_line(&Level::TRACE, "fortune_shared", &angle, "t").is_none());
    }

    #[test]
    fn test_empty_message_is_skipped() {
        assert!(render_line(&Level::ERROR, "fortune_backend", &EventFields::default(), "t").is_none());
    }
}
