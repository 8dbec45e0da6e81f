use std::fmt::Display;

/// Lifecycle state written on activation. Expiry is not tracked by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SubscriptionStatus::Active => "active",
        };
        write!(f, "{}", status)
    }
}
