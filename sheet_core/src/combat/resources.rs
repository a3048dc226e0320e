//! Spell slot pools and the hex status flag

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a cast drew its resource from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSource {
    /// Tier-0 spells cost nothing
    AtWill,
    /// Short-rest pool, consumed first
    Pact,
    /// General spellcasting pool, the fallback
    Sorcery,
}

impl SlotSource {
    pub fn label(&self) -> &'static str {
        match self {
            SlotSource::AtWill => "Cantrip",
            SlotSource::Pact => "Pact Slot",
            SlotSource::Sorcery => "Sorc Slot",
        }
    }
}

/// Resource consumption failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("no spell slots remaining")]
    Exhausted,
}

/// A counted resource with a configured maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounter {
    pub current: u32,
    pub max: u32,
}

impl ResourceCounter {
    pub fn full(max: u32) -> Self {
        ResourceCounter { current: max, max }
    }

    fn consume(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    fn refill(&mut self) {
        self.current = self.max;
    }
}

/// Configured maxima for a session's resource pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub pact_max: u32,
    pub sorcery_max: u32,
    pub balance_max: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            pact_max: 1,
            sorcery_max: 2,
            balance_max: 2,
        }
    }
}

/// Per-session mutable resource state
///
/// Two slot pools with a fixed fallback order, a generic balance
/// counter, and the hex status flag. Mutated only by `consume_for_tier`,
/// `toggle_hex` and `reset`; never persisted — every session starts full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePool {
    pub pact: ResourceCounter,
    pub sorcery: ResourceCounter,
    pub balance: ResourceCounter,
    hex_active: bool,
}

impl ResourcePool {
    pub fn new(config: ResourceConfig) -> Self {
        ResourcePool {
            pact: ResourceCounter::full(config.pact_max),
            sorcery: ResourceCounter::full(config.sorcery_max),
            balance: ResourceCounter::full(config.balance_max),
            hex_active: false,
        }
    }

    /// Pay for a cast of the given tier
    ///
    /// Tier 0 always succeeds without consuming anything. Tier 1+
    /// drains the pact pool first, then sorcery; failure leaves both
    /// pools untouched.
    pub fn consume_for_tier(&mut self, tier: u32) -> Result<SlotSource, ResourceError> {
        if tier == 0 {
            return Ok(SlotSource::AtWill);
        }
        if self.pact.consume() {
            Ok(SlotSource::Pact)
        } else if self.sorcery.consume() {
            Ok(SlotSource::Sorcery)
        } else {
            Err(ResourceError::Exhausted)
        }
    }

    pub fn hex_active(&self) -> bool {
        self.hex_active
    }

    /// Flip the hex flag, returning the new state
    pub fn toggle_hex(&mut self) -> bool {
        self.hex_active = !self.hex_active;
        self.hex_active
    }

    /// Long rest: refill every counter and clear the hex flag
    pub fn reset(&mut self) {
        self.pact.refill();
        self.sorcery.refill();
        self.balance.refill();
        self.hex_active = false;
    }
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new(ResourceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cantrip_is_free() {
        let mut pool = ResourcePool::default();
        for _ in 0..10 {
            assert_eq!(pool.consume_for_tier(0), Ok(SlotSource::AtWill));
        }
        assert_eq!(pool.pact.current, 1);
        assert_eq!(pool.sorcery.current, 2);
    }

    #[test]
    fn test_pact_before_sorcery_then_fail() {
        let mut pool = ResourcePool::new(ResourceConfig {
            pact_max: 1,
            sorcery_max: 2,
            balance_max: 0,
        });

        assert_eq!(pool.consume_for_tier(1), Ok(SlotSource::Pact));
        assert_eq!(pool.consume_for_tier(1), Ok(SlotSource::Sorcery));
        assert_eq!((pool.pact.current, pool.sorcery.current), (0, 1));

        assert_eq!(pool.consume_for_tier(1), Ok(SlotSource::Sorcery));
        assert_eq!(pool.consume_for_tier(1), Err(ResourceError::Exhausted));
        // Failure never partially deducts
        assert_eq!((pool.pact.current, pool.sorcery.current), (0, 0));
    }

    #[test]
    fn test_consumption_sequence() {
        // limited=1, general=2: two casts drain pact then sorcery,
        // leaving (0,1); a third fails and changes nothing.
        let mut pool = ResourcePool::new(ResourceConfig {
            pact_max: 1,
            sorcery_max: 2,
            balance_max: 2,
        });
        pool.consume_for_tier(1).unwrap();
        pool.consume_for_tier(1).unwrap();
        assert_eq!((pool.pact.current, pool.sorcery.current), (0, 1));

        pool.consume_for_tier(1).unwrap();
        assert_eq!(pool.consume_for_tier(1), Err(ResourceError::Exhausted));
        assert_eq!((pool.pact.current, pool.sorcery.current), (0, 0));
    }

    #[test]
    fn test_reset_refills_and_clears_hex() {
        let mut pool = ResourcePool::default();
        pool.consume_for_tier(1).unwrap();
        pool.consume_for_tier(1).unwrap();
        pool.toggle_hex();
        assert!(pool.hex_active());

        pool.reset();
        assert_eq!(pool.pact.current, pool.pact.max);
        assert_eq!(pool.sorcery.current, pool.sorcery.max);
        assert!(!pool.hex_active());
    }
}
