//! Delayed Thermostat
//!
//! This example runs the thermostat on the delay-aware machine. Each state
//! waits before its entry and exit actions run, without blocking the
//! runtime.
//!
//! Run with: RUST_LOG=fluidstate=debug cargo run --example delayed_thermostat

use fluidstate::{fsm_enum, AsyncStateMachine, TransitionError};
use std::time::{Duration, Instant};

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

#[tokio::main]
async fn main() -> Result<(), TransitionError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Delayed Thermostat Example ===\n");

    let mut machine = AsyncStateMachine::new(States::Off);

    machine
        .configure(States::Off)
        .permit(Events::PowerOn, States::On)
        .with_exit_delay(Duration::from_millis(500))
        .on_exit(|| println!("Exiting Off"));

    machine
        .configure(States::On)
        .permit(Events::PowerOff, States::Off)
        .permit(Events::StartHeating, States::Heating)
        .with_entry_delay(Duration::from_millis(500))
        .on_entry(|| println!("Entering On"))
        .on_exit(|| println!("Exiting On"));

    machine
        .configure(States::Heating)
        .permit(Events::StartCooling, States::Cooling)
        .with_entry_delay(Duration::from_millis(250))
        .on_entry(|| println!("Entering Heating"));

    machine
        .configure(States::Cooling)
        .permit(Events::StartHeating, States::Heating)
        .with_entry_delay(Duration::from_millis(250))
        .on_entry(|| println!("Entering Cooling"));

    println!("Current State: {}", machine.current_state());
    for trigger in [Events::PowerOn, Events::StartHeating, Events::StartCooling] {
        let started = Instant::now();
        machine.fire_async(trigger).await?;
        println!(
            "Current State: {} ({trigger} took {:?})",
            machine.current_state(),
            started.elapsed()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
