use shared::constants::{NOTIFY_MS, REDIRECT_DELAY_MS};

pub const ATTR_NOTIFY_MS: &str = "notify-ms";
pub const ATTR_REDIRECT_DELAY_MS: &str = "redirect-delay-ms";
pub const ATTR_SUBMIT_POLICY: &str = "submit-policy";

/// What happens to a submit or refresh while the previous one is still in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Every action issues its request; the last response to arrive wins.
    #[default]
    Unguarded,
    /// Submits are dropped while one is pending, refreshes are coalesced into one follow-up.
    Serialized,
}

impl SubmitPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "unguarded" => Some(SubmitPolicy::Unguarded),
            "serialized" => Some(SubmitPolicy::Serialized),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub notify_ms: u32,
    pub redirect_delay_ms: u32,
    pub submit_policy: SubmitPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            notify_ms: NOTIFY_MS,
            redirect_delay_ms: REDIRECT_DELAY_MS,
            submit_policy: SubmitPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Builds the config from page attributes, `lookup` returning the raw value for a key.
    /// Bad values keep the default.
    pub fn from_attrs<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ATTR_NOTIFY_MS) {
            match value.trim().parse::<u32>() {
                Ok(ms) => config.notify_ms = ms,
                Err(_) => log::warn!("ignoring {ATTR_NOTIFY_MS}={value:?}"),
            }
        }
        if let Some(value) = lookup(ATTR_REDIRECT_DELAY_MS) {
            match value.trim().parse::<u32>() {
                Ok(ms) => config.redirect_delay_ms = ms,
                Err(_) => log::warn!("ignoring {ATTR_REDIRECT_DELAY_MS}={value:?}"),
            }
        }
        if let Some(value) = lookup(ATTR_SUBMIT_POLICY) {
            match SubmitPolicy::parse(&value) {
                Some(policy) => config.submit_policy = policy,
                None => log::warn!("ignoring {ATTR_SUBMIT_POLICY}={value:?}"),
            }
        }
        config
    }

    pub fn serialized(&self) -> bool {
        self.submit_policy == SubmitPolicy::Serialized
    }
}
