#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Transport seam between the publish/subscribe broker and the world.
//!
//! The broker itself is an external collaborator; this crate owns everything
//! up to it: the topic codec, the [`Publisher`] sink the coordinator fires
//! outbound messages into, the single-threaded [`Dispatcher`] that turns
//! inbound messages into world mutations, and an in-process [`MemoryBroker`]
//! that implements the transport contract for tests and demo matches.

mod codec;

pub use codec::{
    decode, decode_scores, decode_view, encode, game_state_topic, lobby_topic, move_topic,
    scores_topic, start_topic, DecodeError, JOIN_TOPIC, SUBSCRIPTION_FILTERS,
};

use std::collections::VecDeque;

use coin_clash_core::Event;
use coin_clash_world::{self as world, World};

/// A topic-addressed payload traveling through the broker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Topic the payload is published on, segments separated by `/`.
    pub topic: String,
    /// Raw payload bytes.
    pub payload: Vec<u8>,
}

/// Fire-and-forget sink for outbound messages.
///
/// The coordinator never tracks delivery; acknowledgment and retransmission
/// are the transport's concern.
pub trait Publisher {
    /// Publishes a message onto its topic.
    fn publish(&mut self, message: Message);
}

/// Single-threaded message handler owning the authoritative [`World`].
///
/// Inbound messages are handled one at a time, so the check-all-present,
/// apply-all, clear sequence of turn resolution is atomic with respect to
/// concurrent move submissions by construction.
#[derive(Debug)]
pub struct Dispatcher {
    world: World,
    events: Vec<Event>,
}

impl Dispatcher {
    /// Creates a dispatcher over the provided world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            world,
            events: Vec::new(),
        }
    }

    /// Read-only access to the owned world, for queries.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Reports whether the dispatcher's subscription filters match the topic.
    #[must_use]
    pub fn wants(&self, topic: &str) -> bool {
        SUBSCRIPTION_FILTERS
            .iter()
            .any(|filter| topic_matches(filter, topic))
    }

    /// Handles one inbound message: decode, apply, publish the fallout.
    ///
    /// Messages that fail structural validation are logged and dropped
    /// without mutating any state.
    pub fn handle(&mut self, topic: &str, payload: &[u8], publisher: &mut dyn Publisher) {
        let command = match codec::decode(topic, payload) {
            Ok(command) => command,
            Err(error) => {
                tracing::warn!(topic, %error, "dropping undecodable message");
                return;
            }
        };

        tracing::debug!(?command, "dispatching");
        world::apply(&mut self.world, command, &mut self.events);
        for event in self.events.drain(..) {
            publisher.publish(codec::encode(&event));
        }
    }
}

/// Reports whether a hierarchical topic filter matches a concrete topic.
///
/// `+` matches exactly one level; a trailing `#` matches the remaining
/// levels, including none.
#[must_use]
pub fn topic_matches(filter: &str, topic: &str) -> bool {
    let mut filter_segments = filter.split('/');
    let mut topic_segments = topic.split('/');

    loop {
        match (filter_segments.next(), topic_segments.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => {}
            (Some(expected), Some(actual)) if expected == actual => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// In-process message queue standing in for the external broker.
///
/// Publishes append to a FIFO queue, which preserves per-topic ordering from
/// any single publisher. Consumers pop messages and fan them out to whichever
/// subscribers' filters match, completing the transport contract.
#[derive(Debug, Default)]
pub struct MemoryBroker {
    queue: VecDeque<Message>,
}

impl MemoryBroker {
    /// Creates an empty broker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest undelivered message.
    pub fn pop(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }
}

impl Publisher for MemoryBroker {
    fn publish(&mut self, message: Message) {
        self.queue.push_back(message);
    }
}
