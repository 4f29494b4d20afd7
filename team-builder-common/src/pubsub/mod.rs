pub mod producer;

pub use self::producer::PubSubProducer;



pub mod consumer;

pub use self::consumer::PubSubConsumer;



pub mod model;

pub use self::model::Message;
pub use self::model::MatchRequest;
pub use self::model::MatchResponse;

use ::errors::*;

use rmp_serde::{Deserializer, Serializer};

use serde::de::{Deserialize, DeserializeOwned};
use serde::Serialize;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use std::io::Cursor;
use std::thread;
use std::time::Duration;

pub const TEAM_BUILDER_REQUESTS_TOPIC: &'static str = "team-builder-requests";
pub const TEAM_BUILDER_RESPONSES_TOPIC: &'static str = "team-builder-responses";

pub const TEAM_BUILDER_LOOPBACK_TOPIC: &'static str = "team-builder-loopback";

const LOOPBACK_KEY: u64 = 1337;
const LOOPBACK_ATTEMPTS: u32 = 10;

pub fn encode_key(key: u64) -> Result<Vec<u8>>
{
    let mut key_bytes = Vec::with_capacity(8);
    key_bytes.write_u64::<BigEndian>(key)?;

    Ok(key_bytes)
}

pub fn decode_key(raw: &[u8]) -> Result<u64>
{
    Ok(Cursor::new(raw).read_u64::<BigEndian>()?)
}

pub fn encode_value<D>(value: &D) -> Result<Vec<u8>>
    where D: Serialize
{
    let mut serialized = Vec::new();
    value.serialize(&mut Serializer::new(&mut serialized))?;

    Ok(serialized)
}

pub fn decode_value<D>(raw: &[u8]) -> Result<D>
    where D: DeserializeOwned
{
    let mut deserializer = Deserializer::new(raw);

    Ok(Deserialize::deserialize(&mut deserializer)?)
}

/// Sends a message to the loopback topic and waits until it comes back.
///
/// Kafka takes a while to come up next to the services so this is used at start up to fail fast instead of
/// silently dropping requests.
pub fn perform_loopback_test(broker_uris: &Vec<String>, group: &str) -> Result<()>
{
    let mut producer = PubSubProducer::new(broker_uris.clone())?;
    let mut consumer = PubSubConsumer::new(broker_uris.clone(), TEAM_BUILDER_LOOPBACK_TOPIC, group)?;

    producer.send_to_topic(TEAM_BUILDER_LOOPBACK_TOPIC, LOOPBACK_KEY, group)?;

    for attempt in 0..LOOPBACK_ATTEMPTS
    {
        let responses: Vec<(u64, String)> = consumer.listen()?;
        if responses.iter().any(|&(key, ref value)| key == LOOPBACK_KEY && value == group)
        {
            debug!("Loopback succeeded after {} polls", attempt + 1);
            return Ok(());
        }

        thread::sleep(Duration::from_millis(500));
    }

    bail!("Loopback message never came back on topic: {}", TEAM_BUILDER_LOOPBACK_TOPIC);
}
