use std::time::Duration;
use std::fmt::Debug;

use kafka::producer::{Producer, Record, RequiredAcks};

use serde::Serialize;

use super::{encode_key, encode_value};

use ::errors::*;

pub struct PubSubProducer
{
    producer: Producer,
}

impl PubSubProducer
{
    pub fn new(broker_uris: Vec<String>) -> Result<PubSubProducer>
    {
        let producer = Producer::from_hosts(broker_uris)
             // ~ give the brokers one second time to ack the message
             .with_ack_timeout(Duration::from_secs(1))
             // ~ require only one broker to ack the message
             .with_required_acks(RequiredAcks::One)
             // ~ build the producer with the above settings
             .create()?;

        Ok(PubSubProducer
        {
            producer,
        })
    }

    pub fn send_to_topic<D>(&mut self, topic: &str, key: u64, value: D) -> Result<()>
        where D: Serialize+Debug
    {
        debug!("Sending? topic: {:?}, key: {:?}, value: {:?}", topic, key, value);

        let key_bytes = encode_key(key)?;
        let serialized = encode_value(&value)?;

        self.producer.send(&Record {
            topic: topic,
            partition: -1,
            key: key_bytes,
            value: serialized,
        })?;

        Ok(())
    }
}
