//! Tests for the event system.

use std::sync::{Arc, Mutex};

use super::{Event, EventListener, VoidListener};

#[test]
fn void_listener_implements_event_listener() {
    let listener = VoidListener;
    // The default no-op body runs without panicking.
    listener.send_event(Event::Bell);
    listener.send_event(Event::Title("t".to_string()));
}

#[test]
fn void_listener_is_send_and_static() {
    fn assert_send_static<T: Send + 'static>() {}
    assert_send_static::<VoidListener>();
}

#[test]
fn event_debug_format() {
    assert_eq!(format!("{:?}", Event::Bell), "Bell");
    let title = Event::Title("hello".to_string());
    assert_eq!(format!("{title:?}"), "Title(\"hello\")");
    let reply = Event::PtyWrite("\x1b[0n".to_string());
    assert_eq!(format!("{reply:?}"), "PtyWrite(\"\\u{1b}[0n\")");
}

#[test]
fn custom_listener_receives_events() {
    #[derive(Default)]
    struct Recorder(Arc<Mutex<Vec<Event>>>);

    impl EventListener for Recorder {
        fn send_event(&self, event: Event) {
            self.0.lock().unwrap().push(event);
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let recorder = Recorder(Arc::clone(&log));
    recorder.send_event(Event::Bell);
    recorder.send_event(Event::PtyWrite("x".to_string()));

    let events = log.lock().unwrap();
    assert_eq!(*events, [Event::Bell, Event::PtyWrite("x".to_string())]);
}
