//! View state for the lookup screen.
//!
//! The state machine is deliberately free of terminals, timers, and sockets:
//! the event loop feeds it key events and ticks, and it answers with
//! [`FetchCommand`]s for the loop to dispatch. Fetch results come back tagged
//! with a sequence number so a superseded request can never overwrite
//! fresher state, no matter how late its response arrives.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error, warn};
use skycast_core::{
    Backdrop, DEFAULT_BACKDROP, Debouncer, FetchError, WeatherSnapshot, backdrop_for,
};

/// A fetch the event loop should dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    pub seq: u64,
    pub city: String,
}

/// What the body of the screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// No weather loaded: initial state, empty query, or failed fetch.
    Empty,
    /// A request for the current debounced city is in flight.
    Loading,
    Loaded(WeatherSnapshot),
}

pub struct App {
    input: String,
    debouncer: Debouncer<String>,
    /// Last debounced value acted on; equal values issue no new fetch.
    committed: Option<String>,
    /// Tag of the most recently issued (or invalidated) request.
    latest_seq: u64,
    panel: Panel,
    backdrop: Backdrop,
    should_quit: bool,
}

impl App {
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            debouncer: Debouncer::new(debounce),
            committed: None,
            latest_seq: 0,
            panel: Panel::Empty,
            backdrop: DEFAULT_BACKDROP,
            should_quit: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Event::Key(key) = event {
            self.handle_key(*key, now);
        }
    }

    /// Apply a keystroke. The raw input changes immediately; propagation to
    /// the fetch flow waits on the debouncer.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Windows terminals report both Press and Release.
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.debouncer.update(self.input.clone(), now);
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.debouncer.update(self.input.clone(), now);
                }
            }
            _ => {}
        }
    }

    /// Advance the debouncer. Returns a command when a changed, non-empty
    /// city name has settled; an empty settled value clears the screen and
    /// invalidates any request still in flight.
    pub fn tick(&mut self, now: Instant) -> Option<FetchCommand> {
        let city = self.debouncer.poll(now)?;

        if self.committed.as_deref() == Some(city.as_str()) {
            return None;
        }
        self.committed = Some(city.clone());

        // Whatever is in flight answers an older value now.
        self.latest_seq += 1;

        if city.is_empty() {
            self.panel = Panel::Empty;
            self.backdrop = DEFAULT_BACKDROP;
            return None;
        }

        self.panel = Panel::Loading;
        Some(FetchCommand { seq: self.latest_seq, city })
    }

    /// Accept a completed fetch. Results tagged with anything but the latest
    /// sequence number are dropped.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<WeatherSnapshot, FetchError>) {
        if seq != self.latest_seq {
            debug!("discarding stale fetch result (seq {seq}, latest {})", self.latest_seq);
            return;
        }

        match result {
            Ok(snapshot) => {
                self.backdrop = backdrop_for(&snapshot.condition);
                self.panel = Panel::Loaded(snapshot);
            }
            Err(err) => {
                // Provider rejections are usually a typo mid-word; transport
                // and shape problems are worth a louder log.
                if err.is_rejection() {
                    warn!("weather fetch rejected: {err}");
                } else {
                    error!("weather fetch failed: {err}");
                }
                self.panel = Panel::Empty;
                self.backdrop = DEFAULT_BACKDROP;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const DEBOUNCE: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            app.handle_key(press(c), now);
        }
    }

    fn snapshot(condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: "London".to_string(),
            condition: condition.to_string(),
            description: condition.to_lowercase(),
            icon: "10d".to_string(),
            feels_like_c: 11.2,
            temp_max_c: 13.0,
            temp_min_c: 9.4,
            humidity_pct: 81,
            wind_speed_mps: 4.1,
            observed_at: Utc::now(),
        }
    }

    fn malformed() -> FetchError {
        FetchError::Malformed("weather array is empty".to_string())
    }

    #[test]
    fn input_updates_immediately_but_no_fetch_before_settle() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "Lon", t0);
        assert_eq!(app.input(), "Lon");
        assert_eq!(app.tick(t0 + ms(100)), None);
        assert_eq!(*app.panel(), Panel::Empty);
    }

    #[test]
    fn rapid_edits_issue_one_fetch_for_the_final_value() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "Lon", t0);
        type_str(&mut app, "don", t0 + ms(200));

        // 500ms after the *first* burst: the second burst restarted the clock.
        assert_eq!(app.tick(t0 + ms(500)), None);

        let cmd = app.tick(t0 + ms(700)).expect("settled value must fetch");
        assert_eq!(cmd, FetchCommand { seq: 1, city: "London".to_string() });
        assert_eq!(*app.panel(), Panel::Loading);

        // Nothing further without new keystrokes.
        assert_eq!(app.tick(t0 + ms(2000)), None);
    }

    #[test]
    fn settled_empty_input_clears_and_invalidates_in_flight() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        app.handle_key(press('a'), t0);
        let cmd = app.tick(t0 + ms(600)).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE), t0 + ms(700));
        assert_eq!(app.tick(t0 + ms(1300)), None);
        assert_eq!(*app.panel(), Panel::Empty);

        // The request issued for "a" resolves late; it must not resurrect a panel.
        app.apply_fetch(cmd.seq, Ok(snapshot("Clear")));
        assert_eq!(*app.panel(), Panel::Empty);
    }

    #[test]
    fn stale_result_is_discarded_in_favor_of_the_latest() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "Paris", t0);
        let first = app.tick(t0 + ms(600)).unwrap();

        type_str(&mut app, "x", t0 + ms(700));
        let second = app.tick(t0 + ms(1300)).unwrap();
        assert_ne!(first.seq, second.seq);

        // Out-of-order completion: newest first, stale afterwards.
        app.apply_fetch(second.seq, Ok(snapshot("Rain")));
        app.apply_fetch(first.seq, Ok(snapshot("Snow")));

        match app.panel() {
            Panel::Loaded(snap) => assert_eq!(snap.condition, "Rain"),
            other => panic!("expected loaded panel, got {other:?}"),
        }
        assert_eq!(app.backdrop(), backdrop_for("Rain"));
    }

    #[test]
    fn failed_fetch_reverts_to_empty_regardless_of_prior_state() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "London", t0);
        let cmd = app.tick(t0 + ms(600)).unwrap();
        app.apply_fetch(cmd.seq, Ok(snapshot("Rain")));
        assert!(matches!(app.panel(), Panel::Loaded(_)));

        type_str(&mut app, "x", t0 + ms(700));
        let cmd = app.tick(t0 + ms(1300)).unwrap();
        app.apply_fetch(cmd.seq, Err(malformed()));

        assert_eq!(*app.panel(), Panel::Empty);
        assert_eq!(app.backdrop(), DEFAULT_BACKDROP);
    }

    #[test]
    fn unchanged_settled_value_does_not_refetch() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "Oslo", t0);
        assert!(app.tick(t0 + ms(600)).is_some());

        // "Osloo" then backspace settles back to "Oslo".
        app.handle_key(press('o'), t0 + ms(700));
        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE), t0 + ms(800));

        assert_eq!(app.tick(t0 + ms(1400)), None);
    }

    #[test]
    fn successful_fetch_selects_backdrop_with_clear_fallback() {
        let t0 = Instant::now();
        let mut app = App::new(DEBOUNCE);

        type_str(&mut app, "Kyiv", t0);
        let cmd = app.tick(t0 + ms(600)).unwrap();
        app.apply_fetch(cmd.seq, Ok(snapshot("Tornado")));

        assert_eq!(app.backdrop(), DEFAULT_BACKDROP);
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let t0 = Instant::now();

        let mut app = App::new(DEBOUNCE);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), t0);
        assert!(app.should_quit());

        let mut app = App::new(DEBOUNCE);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), t0);
        assert!(app.should_quit());
    }
}
