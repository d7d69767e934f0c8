//! Tests for the diagnostics machines emit through the `log` facade.
//!
//! A capturing logger is installed once for this test binary. Tests run in
//! parallel, so each one uses its own machine label and only looks at
//! records starting with it.

use log::{Level, LevelFilter, Log, Metadata, Record};
use statebus::core::{DynState, StateRef};
use statebus::finite_state;
use statebus::machine::{MachineOptions, StateMachine, StateMachineBehavior};
use statebus::messaging::{LocalBus, StateChanged};
use std::sync::{Arc, Mutex, Once};

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn records_for(label: &str) -> Vec<(Level, String)> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, text)| text.starts_with(label))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Category {
    Movement,
    Combat,
}

finite_state! {
    enum Movement {
        Idle,
        Walking,
    }
    category: Category = Category::Movement
}

finite_state! {
    enum Combat {
        Attacking,
    }
    category: Category = Category::Combat
}

type State = DynState<Category>;
type Message = StateChanged<State>;

struct Behavior {
    idle: StateRef<State>,
}

impl StateMachineBehavior for Behavior {
    type State = State;
    type Message = Message;

    fn initial_state(&self) -> StateRef<State> {
        Arc::clone(&self.idle)
    }

    fn create_state_changed_message(
        &self,
        previous: Option<StateRef<State>>,
        next: StateRef<State>,
    ) -> Message {
        StateChanged::new(previous, next)
    }
}

fn machine(options: MachineOptions) -> StateMachine<Behavior> {
    install_logger();
    let bus: Arc<LocalBus<Message>> = Arc::new(LocalBus::new());
    let mut machine = StateMachine::with_options(
        Behavior {
            idle: Arc::new(Movement::Idle),
        },
        bus,
        options,
    );
    machine.initialize().unwrap();
    machine
}

#[test]
fn accepted_transition_logs_info() {
    let mut machine = machine(MachineOptions::builder().label("Accepting").build());
    let walking: StateRef<State> = Arc::new(Movement::Walking);

    machine.set_state(walking).unwrap();

    let records = records_for("Accepting");
    assert!(records.contains(&(
        Level::Info,
        "Accepting is now in \"Idle\" state.".to_string()
    )));
    assert!(records.contains(&(
        Level::Info,
        "Accepting is now in \"Walking\" state.".to_string()
    )));
}

#[test]
fn redundant_transition_logs_warning_with_default_label() {
    let mut machine = machine(MachineOptions::default());
    let walking: StateRef<State> = Arc::new(Movement::Walking);

    machine.set_state(Arc::clone(&walking)).unwrap();
    machine.set_state(walking).unwrap();

    let warnings: Vec<_> = records_for("State Machine")
        .into_iter()
        .filter(|(level, _)| *level == Level::Warn)
        .collect();
    assert_eq!(
        warnings,
        vec![(
            Level::Warn,
            "State Machine is already in \"Walking\" state.".to_string()
        )]
    );
}

#[test]
fn redundant_transition_logs_debug_when_warnings_disabled() {
    let mut machine = machine(
        MachineOptions::builder()
            .label("Quiet")
            .warn_on_redundant(false)
            .build(),
    );
    let walking: StateRef<State> = Arc::new(Movement::Walking);

    machine.set_state(Arc::clone(&walking)).unwrap();
    machine.set_state(walking).unwrap();

    let records = records_for("Quiet");
    assert!(records.contains(&(
        Level::Debug,
        "Quiet is already in \"Walking\" state.".to_string()
    )));
    assert!(records.iter().all(|(level, _)| *level != Level::Warn));
}

#[test]
fn rejected_transition_logs_no_state_change() {
    let mut machine = machine(MachineOptions::builder().label("Rejecting").build());
    let attacking: StateRef<State> = Arc::new(Combat::Attacking);

    assert!(machine.set_state(attacking).is_err());

    let changes: Vec<_> = records_for("Rejecting")
        .into_iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, text)| text)
        .collect();
    assert_eq!(changes, vec!["Rejecting is now in \"Idle\" state.".to_string()]);
}
