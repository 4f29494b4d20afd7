#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate rand;

extern crate team_builder_common;
extern crate team_builder_ms;

use team_builder_common::config::ServiceConfig;

use team_builder_common::pubsub::PubSubConsumer;
use team_builder_common::pubsub::PubSubProducer;

use team_builder_common::pubsub::TEAM_BUILDER_REQUESTS_TOPIC;

use team_builder_ms::provider::{RosterProvider, HttpRosterProvider, StaticRosterProvider};

use std::env;
use std::thread;

const KAFKA_GROUP: &'static str = "team-builder-ms";

fn match_request_handler(mut consumer: PubSubConsumer, mut producer: PubSubProducer, provider: Box<dyn RosterProvider + Send>, config: ServiceConfig)
{
    let mut rng = rand::thread_rng();

    loop
    {
        match team_builder_ms::run_service(&mut consumer, &mut producer, &*provider, &config, &mut rng)
        {
            Err(error) => error!("Failed to handle match requests: {}", error),
            Ok(0) => thread::yield_now(),
            Ok(handled) => trace!("Handled {} match requests", handled),
        }
    }
}

fn main() {
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let config = ServiceConfig::from_env()
        .expect("Bad team builder configuration");
    info!("Starting with {:?}", config);

    let provider: Box<dyn RosterProvider + Send> = match config.roster_file
    {
        Some(ref path) => Box::new(StaticRosterProvider::from_file(path)
            .expect("Failed to load roster file")),
        None => Box::new(HttpRosterProvider::new(config.roster_service_url.as_str())),
    };

    team_builder_common::pubsub::perform_loopback_test(&config.broker_uris, KAFKA_GROUP)
        .expect("Kafka not initialized yet");

    let producer = PubSubProducer::new(config.broker_uris.clone())
        .unwrap();
    let consumer = PubSubConsumer::new(config.broker_uris.clone(), TEAM_BUILDER_REQUESTS_TOPIC, KAFKA_GROUP)
        .unwrap();

    let match_requests_thread = thread::spawn(move || {
        match_request_handler(consumer, producer, provider, config);
    });

    let _ = match_requests_thread.join();
}
