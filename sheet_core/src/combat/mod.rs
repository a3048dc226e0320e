//! Combat: resource pool, action resolution and the bounded log

mod event;
mod log;
pub mod resolver;
mod resources;

pub use event::ResultEvent;
pub use log::{CombatLog, LOG_CAPACITY};
pub use resolver::{crit_threshold, resolve, resolve_spell, weapon_attack};
pub use resources::{ResourceConfig, ResourceCounter, ResourceError, ResourcePool, SlotSource};
