/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::{error, info};
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use lift_dispatch::config;
use lift_dispatch::host::{self, Replay, ReplayCar, Step};
use lift_dispatch::unwrap_or_exit;
use lift_dispatch::Scheduler;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Command::new("lift-dispatch")
        .about("Replays a recorded building scenario through the fleet dispatch scheduler")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .short('s')
                .takes_value(true)
                .help("Scenario to replay, overrides the configured one"),
        )
        .get_matches();

    // Load the configuration
    let config_path = args.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path), "loading configuration");
    let scenario_path = args
        .value_of("scenario")
        .unwrap_or(config.replay.scenario.as_str())
        .to_string();
    let scenario = unwrap_or_exit!(host::load_scenario(&scenario_path), "loading scenario");
    info!("replaying {} with {} cars", scenario_path, scenario.cars.len());

    // Initialize channels
    let (step_tx, step_rx) = cbc::unbounded::<Step>();
    let (command_tx, command_rx) = cbc::unbounded::<host::Command>();
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Build the fleet
    let cars = ReplayCar::fleet(&scenario.cars, &command_tx);
    let scheduler = Scheduler::new(&config.scheduler, &config.debug, cars);

    // Start the scenario feed
    let steps = scenario.steps;
    let feed_thread = Builder::new().name("scenario_feed".into());
    unwrap_or_exit!(
        feed_thread.spawn(move || host::feed_steps(steps, step_tx)),
        "starting scenario feed"
    );

    // Start the scheduler
    let replay = Replay::new(
        scheduler,
        Duration::from_millis(config.replay.poll_interval),
        step_rx,
        command_rx,
        terminate_rx,
    );
    let scheduler_thread = Builder::new().name("scheduler".into());
    let handle = unwrap_or_exit!(
        scheduler_thread.spawn(move || replay.run()),
        "starting scheduler"
    );

    let report = match handle.join() {
        Ok(report) => report,
        Err(_) => {
            error!("scheduler thread panicked");
            std::process::exit(1);
        }
    };

    println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&report), "writing report"));
}
