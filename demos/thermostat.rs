//! Thermostat State Machine
//!
//! This example drives a four-state thermostat with printed entry and exit
//! actions.
//!
//! Key concepts:
//! - Fluent per-state configuration
//! - Entry/exit actions
//! - Rejected triggers surface as `TransitionError`
//!
//! Run with: cargo run --example thermostat

use fluidstate::{fsm_enum, StateMachine};

fsm_enum! {
    enum States {
        Off,
        On,
        Heating,
        Cooling,
    }
}

fsm_enum! {
    enum Events {
        PowerOn,
        PowerOff,
        StartHeating,
        StartCooling,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Thermostat Example ===\n");

    let mut machine = StateMachine::new(States::Off);

    machine
        .configure(States::Off)
        .permit(Events::PowerOn, States::On)
        .on_entry(|| println!("Entering Off"))
        .on_exit(|| println!("Exiting Off"));

    machine
        .configure(States::On)
        .permit(Events::PowerOff, States::Off)
        .permit(Events::StartHeating, States::Heating)
        .on_entry(|| println!("Entering On"))
        .on_exit(|| println!("Exiting On"));

    // Heating and Cooling only cycle between each other once started
    machine
        .configure(States::Heating)
        .permit(Events::StartCooling, States::Cooling)
        .on_entry(|| println!("Entering Heating"))
        .on_exit(|| println!("Exiting Heating"));

    machine
        .configure(States::Cooling)
        .permit(Events::StartHeating, States::Heating)
        .on_entry(|| println!("Entering Cooling"))
        .on_exit(|| println!("Exiting Cooling"));

    println!("Current State: {}", machine.current_state());
    for trigger in [
        Events::PowerOn,
        Events::StartHeating,
        Events::StartCooling,
        Events::PowerOff,
    ] {
        match machine.fire(trigger) {
            Ok(()) => println!("Current State: {}", machine.current_state()),
            Err(e) => println!("Rejected {trigger}: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}
