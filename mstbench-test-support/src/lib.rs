//! Shared test utilities used across mstbench crates.

pub mod proptest_profile;

pub mod tracing {
    //! A capturing layer for asserting spans and events emitted by the
    //! generator, MST engine, and benchmark harness.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that keeps closed spans and emitted events in memory.
    ///
    /// Clones share the same buffers, so a test can install one clone in a
    /// subscriber and inspect another after the code under test has run.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use mstbench_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Emitted events in emission order.
        ///
        /// # Examples
        /// ```
        /// use mstbench_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Closed spans whose name equals `name`.
        #[must_use]
        pub fn spans_named(&self, name: &str) -> Vec<SpanRecord> {
            lock(&self.spans)
                .iter()
                .filter(|span| span.name == name)
                .cloned()
                .collect()
        }

        /// Events whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// A closed span with its name and recorded fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the rendered value of `field`, if recorded.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// An emitted event with its level, target, and fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, normally the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `field`, if recorded.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }

        /// Returns the event message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    #[derive(Default)]
    struct PendingSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut pending = PendingSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldCollector(&mut pending.fields));
            span.extensions_mut().insert(pending);
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(pending) = extensions.get_mut::<PendingSpan>() {
                values.record(&mut FieldCollector(&mut pending.fields));
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(pending) = span.extensions_mut().remove::<PendingSpan>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: pending.name,
                fields: pending.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector(&mut fields));
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut HashMap<String, String>);

    impl FieldCollector<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value.to_string());
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tracing::{info, info_span};
        use tracing_subscriber::layer::SubscriberExt;

        #[test]
        fn captures_span_fields_recorded_after_creation() {
            let layer = RecordingLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            tracing::subscriber::with_default(subscriber, || {
                let span = info_span!("core.step", size = 8_u64, mean_ms = tracing::field::Empty);
                span.record("mean_ms", 1.5_f64);
                drop(span);
            });

            let spans = layer.spans_named("core.step");
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].field("size"), Some("8"));
            assert_eq!(spans[0].field("mean_ms"), Some("1.5"));
        }

        #[test]
        fn captures_event_messages() {
            let layer = RecordingLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            tracing::subscriber::with_default(subscriber, || {
                info!(trial = 3_u64, "trial completed");
            });

            let events = layer.events_with_message("trial completed");
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].level, Level::INFO);
            assert_eq!(events[0].field("trial"), Some("3"));
        }
    }
}
