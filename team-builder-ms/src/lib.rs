#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

extern crate chrono;
extern crate rand;
extern crate reqwest;
extern crate serde_json;

extern crate team_builder_common;

pub mod engine;
pub mod provider;

use provider::RosterProvider;

use team_builder_common::config::ServiceConfig;
use team_builder_common::pubsub::consumer::PubSubConsumer;
use team_builder_common::pubsub::producer::PubSubProducer;
use team_builder_common::pubsub::model::{Message, MatchRequest, MatchResponse};

use team_builder_common::errors::Result;

use rand::Rng;

/// Builds the match for one request and works out where the answer goes.
///
/// Returns `None` when the request has nowhere to reply to. Failures to build the match are answered with
/// `MatchResponse::Failed` so the command that asked can tell the user.
pub fn handle_request<P, R>(key: u64, mut message: Message<MatchRequest>, provider: &P, default_threshold: f64, rng: &mut R) -> Option<(String, Message<MatchResponse>)>
    where P: RosterProvider + ?Sized, R: Rng + ?Sized
{
    let topic = match message.destinations.pop_front()
    {
        None =>
        {
            warn!("Received message without destinations for key: {}", key);
            return None;
        },
        Some(topic) => topic,
    };

    let response = match engine::build_match(provider, &message.data, default_threshold, rng)
    {
        Ok(built) =>
        {
            if message.debug
            {
                debug!("Placements for key: {}: {:?}", key, built.placements);
                debug!("Balance for key: {}: {:?}", key, built.balance);
            }

            MatchResponse::Built(built.summarize())
        },
        Err(error) =>
        {
            error!("Failed to build match for key: {} because {}", key, error);
            MatchResponse::Failed(format!("{}", error))
        },
    };

    Some((topic, Message::new(response, message.destinations, message.debug)))
}

/// Answers every request of one consumed batch through `send`, returning how many answers went out.
///
/// The batch is already committed by the time it gets here, so a failed send is logged and the rest of the batch
/// still gets answered.
pub fn handle_batch<P, R, S>(messages: Vec<(u64, Message<MatchRequest>)>, provider: &P, default_threshold: f64, rng: &mut R, mut send: S) -> usize
    where P: RosterProvider + ?Sized, R: Rng + ?Sized, S: FnMut(&str, u64, &Message<MatchResponse>) -> Result<()>
{
    let mut handled = 0;

    for (key, message) in messages.into_iter()
    {
        if let Some((topic, response)) = handle_request(key, message, provider, default_threshold, rng)
        {
            if let Err(error) = send(&topic, key, &response)
            {
                error!("Failed to send match response for key: {} to topic: {} because {}", key, topic, error);
                continue;
            }

            handled = handled + 1;
            trace!("Sent match response for key: {} to topic: {}", key, topic);
        }
    }

    handled
}

pub fn run_service<P, R>(consumer: &mut PubSubConsumer, producer: &mut PubSubProducer, provider: &P, config: &ServiceConfig, rng: &mut R) -> Result<usize>
    where P: RosterProvider + ?Sized, R: Rng + ?Sized
{
    let messages: Vec<(u64, Message<MatchRequest>)> = consumer.listen()?;

    Ok(handle_batch(messages, provider, config.balance_threshold, rng, |topic, key, response| {
        producer.send_to_topic(topic, key, response)
    }))
}
