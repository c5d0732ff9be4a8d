/// Events emitted while a protocol runs. Stage indices are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    ProtocolStart { total_stages: usize },
    ProtocolFinish,

    /// Sent after the step count is known, before the first engine call of the stage.
    StageStart { index: usize, name: String, steps: u64 },
    StageFinish { index: usize, steps: u64 },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports a free-form message. `text` is only evaluated when a callback is installed.
    pub fn message(&self, text: impl FnOnce() -> String) {
        if self.callback.is_some() {
            self.report(Progress::Message(text()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn silent_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("nobody listens".to_string()));
    }

    #[test]
    fn message_is_built_only_when_someone_listens() {
        let reporter = ProgressReporter::new();
        reporter.message(|| panic!("message built for a silent reporter"));

        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            *sink.lock().unwrap() = Some(event);
        }));
        reporter.message(|| "md9 failed".to_string());
        assert_eq!(
            *received.lock().unwrap(),
            Some(Progress::Message("md9 failed".to_string()))
        );
    }

    #[test]
    fn callback_receives_events_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        reporter.report(Progress::ProtocolStart { total_stages: 21 });
        reporter.report(Progress::ProtocolFinish);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::ProtocolStart { total_stages: 21 },
                Progress::ProtocolFinish
            ]
        );
    }
}
