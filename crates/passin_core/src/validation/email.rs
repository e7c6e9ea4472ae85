//! Email address syntax policy.
//!
//! # Invariants
//! - Only bare `local@domain` addresses are accepted; display names, quoted
//!   local parts and IP-literal domains are rejected.
//! - Single-label domains (`user@localhost`) are accepted unless
//!   `require_domain_dot` is set.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_ADDRESS_CHARS: usize = 254;
const MAX_LOCAL_PART_CHARS: usize = 64;

static LOCAL_PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("valid local-part regex")
});
static DOMAIN_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("valid domain label regex")
});

/// Configurable grammar for attendee email addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmailPolicy {
    /// Reject domains without at least one `.` (e.g. `localhost`).
    pub require_domain_dot: bool,
}

impl EmailPolicy {
    /// Policy that only accepts multi-label domains.
    pub fn strict() -> Self {
        Self {
            require_domain_dot: true,
        }
    }

    /// Returns whether `address` is syntactically acceptable.
    ///
    /// The caller is expected to trim surrounding whitespace first.
    pub fn is_valid(&self, address: &str) -> bool {
        if address.is_empty() || address.chars().count() > MAX_ADDRESS_CHARS {
            return false;
        }

        let Some((local, domain)) = address.rsplit_once('@') else {
            return false;
        };

        if local.chars().count() > MAX_LOCAL_PART_CHARS || !LOCAL_PART_RE.is_match(local) {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if self.require_domain_dot && labels.len() < 2 {
            return false;
        }
        labels.iter().all(|label| DOMAIN_LABEL_RE.is_match(label))
    }
}
