//! Character Controller
//!
//! This example drives two machines for one character, a movement machine
//! and a combat machine, over a shared bus.
//!
//! Key concepts:
//! - Long-lived state instances shared through `StateRef`
//! - Category locking (movement states never mix with combat states)
//! - Redundant transitions are skipped with a warning
//! - Subscribers observe every accepted change
//!
//! Run with: RUST_LOG=info cargo run --example character_controller

use statebus::core::{DynState, StateRef};
use statebus::finite_state;
use statebus::machine::{MachineOptions, StateMachine, StateMachineBehavior};
use statebus::messaging::{LocalBus, StateChanged};
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Category {
    Movement,
    Combat,
}

finite_state! {
    enum Movement {
        Idle,
        Walking,
        Running,
    }
    category: Category = Category::Movement
}

finite_state! {
    enum Combat {
        Peaceful,
        Attacking,
        Blocking,
    }
    category: Category = Category::Combat
}

type State = DynState<Category>;
type Message = StateChanged<State>;

struct StartsIn(StateRef<State>);

impl StateMachineBehavior for StartsIn {
    type State = State;
    type Message = Message;

    fn initial_state(&self) -> StateRef<State> {
        Arc::clone(&self.0)
    }

    fn create_state_changed_message(
        &self,
        previous: Option<StateRef<State>>,
        next: StateRef<State>,
    ) -> Message {
        StateChanged::new(previous, next)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Character Controller ===\n");

    let idle: StateRef<State> = Arc::new(Movement::Idle);
    let walking: StateRef<State> = Arc::new(Movement::Walking);
    let running: StateRef<State> = Arc::new(Movement::Running);
    let peaceful: StateRef<State> = Arc::new(Combat::Peaceful);
    let attacking: StateRef<State> = Arc::new(Combat::Attacking);
    let blocking: StateRef<State> = Arc::new(Combat::Blocking);

    let bus: Arc<LocalBus<Message>> = Arc::new(LocalBus::new());
    bus.subscribe(|msg: &Message| match msg.summary().to_json() {
        Ok(json) => println!("  [bus] {}", json),
        Err(err) => println!("  [bus] unserializable message: {}", err),
    });

    let mut movement = StateMachine::with_options(
        StartsIn(Arc::clone(&idle)),
        bus.clone(),
        MachineOptions::builder().label("Movement").build(),
    );
    let mut combat = StateMachine::with_options(
        StartsIn(peaceful),
        bus,
        MachineOptions::builder().label("Combat").build(),
    );

    println!("Initializing machines:");
    movement.initialize().expect("movement machine starts once");
    combat.initialize().expect("combat machine starts once");

    println!("\nMoving around:");
    for next in [&walking, &running, &running, &idle] {
        match movement.set_state(Arc::clone(next)) {
            Ok(outcome) => println!("  {:?}", outcome),
            Err(err) => println!("  rejected: {}", err),
        }
    }

    println!("\nFighting:");
    for next in [&attacking, &blocking] {
        match combat.set_state(Arc::clone(next)) {
            Ok(outcome) => println!("  {:?}", outcome),
            Err(err) => println!("  rejected: {}", err),
        }
    }

    println!("\nMisuse:");
    if let Err(err) = movement.set_state(Arc::clone(&attacking)) {
        println!("  rejected: {}", err);
    }
    if let Err(err) = movement.set_state(None) {
        println!("  rejected: {}", err);
    }

    println!("\nFinal machines:");
    println!("  {:?}", movement);
    println!("  {:?}", combat);

    println!("\n=== Example Complete ===");
}
