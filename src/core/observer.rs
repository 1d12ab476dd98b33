//! Observer registry for emitted records
//!
//! Each channel maps to an ordered list of callbacks. A record is delivered to
//! the channel of its own severity and then to the catch-all channel.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::severity::Severity;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Name of the catch-all channel
pub const CATCH_ALL_CHANNEL: &str = "LOG";

/// Callback invoked with each record delivered to its channel.
///
/// Returning an error stops delivery of that record and surfaces the error
/// from the emit call.
pub type ObserverCallback = Arc<dyn Fn(&LogRecord) -> Result<()> + Send + Sync>;

/// A notification channel.
///
/// Channel names are uppercase: the eight severity names and `LOG` for the
/// catch-all channel. Lowercase names are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Level(Severity),
    All,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Level(severity) => severity.to_str(),
            Channel::All => CATCH_ALL_CHANNEL,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for Channel {
    fn from(severity: Severity) -> Self {
        Channel::Level(severity)
    }
}

impl FromStr for Channel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        if s == CATCH_ALL_CHANNEL {
            return Ok(Channel::All);
        }
        Severity::ALL
            .iter()
            .find(|severity| severity.to_str() == s)
            .map(|severity| Channel::Level(*severity))
            .ok_or_else(|| {
                LoggerError::config(
                    "Channel",
                    format!("unknown channel '{}'; channel names are uppercase", s),
                )
            })
    }
}

/// Handle returned by registration, used to remove the callback again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct ObserverRegistry {
    channels: HashMap<Channel, Vec<(ObserverId, ObserverCallback)>>,
    next_id: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, channel: Channel, callback: ObserverCallback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.channels.entry(channel).or_default().push((id, callback));
        id
    }

    /// Remove a callback; returns `false` if it was not registered on `channel`
    pub fn unregister(&mut self, channel: Channel, id: ObserverId) -> bool {
        let Some(observers) = self.channels.get_mut(&channel) else {
            return false;
        };
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        let removed = observers.len() != before;
        if observers.is_empty() {
            self.channels.remove(&channel);
        }
        removed
    }

    pub fn count(&self, channel: Channel) -> usize {
        self.channels.get(&channel).map_or(0, Vec::len)
    }

    /// Callbacks for a record at `level`, exact channel first, catch-all last
    pub fn recipients(&self, level: Severity) -> Vec<(Channel, ObserverCallback)> {
        [Channel::Level(level), Channel::All]
            .into_iter()
            .flat_map(|channel| {
                self.channels
                    .get(&channel)
                    .into_iter()
                    .flatten()
                    .map(move |(_, callback)| (channel, Arc::clone(callback)))
            })
            .collect()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .channels
            .iter()
            .map(|(channel, observers)| (channel.name(), observers.len()))
            .collect();
        f.debug_struct("ObserverRegistry")
            .field("channels", &counts)
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Deliver `record` to each recipient in order, stopping at the first failure
pub fn notify(recipients: &[(Channel, ObserverCallback)], record: &LogRecord) -> Result<()> {
    for (channel, callback) in recipients {
        callback(record).map_err(|e| match e {
            LoggerError::Observer { .. } => e,
            other => LoggerError::observer(channel.name(), other.to_string()),
        })?;
    }
    Ok(())
}
