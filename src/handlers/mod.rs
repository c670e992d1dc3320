pub mod message_consumer;
pub mod message_sender;
