//! Troop catalog: the registry and the standard set.
//!
//! The registry stores troop definitions by name and hands out shared
//! references to them. [`StandardSetup`] registers the standard six-troop
//! set and builds the starting armies.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::actions::TroopAction;
use crate::board::Board;
use crate::game::{Army, GameState, PlayingSide};

use super::troop::Troop;

/// Registry of troop definitions.
///
/// ## Example
///
/// ```
/// use banneret::actions::TroopAction;
/// use banneret::troops::{Troop, TroopRegistry};
///
/// let mut registry = TroopRegistry::new();
/// registry.register(Troop::new(
///     "Scout",
///     &[TroopAction::shift(0, 1)],
///     &[TroopAction::shift(0, -1)],
/// ));
///
/// let scout = registry.get("Scout").unwrap();
/// assert_eq!(scout.name(), "Scout");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TroopRegistry {
    troops: FxHashMap<String, Arc<Troop>>,
}

impl TroopRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a troop definition.
    ///
    /// Panics if a troop with the same name already exists.
    pub fn register(&mut self, troop: Troop) {
        let name = troop.name().to_string();
        if self.troops.contains_key(&name) {
            panic!("Troop {name:?} already registered");
        }

        trace!(troop = %name, "register troop");
        self.troops.insert(name, Arc::new(troop));
    }

    /// Get a troop definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Troop>> {
        self.troops.get(name).map(Arc::clone)
    }

    /// Check if a troop name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.troops.contains_key(name)
    }

    /// The number of registered troops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.troops.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.troops.is_empty()
    }

    /// Iterate over all troop definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Troop>> {
        self.troops.values()
    }
}

/// The standard game setup: six troop types and a seven-troop stack per
/// side.
///
/// Action lists are authored from BLUE's point of view; positive `y` points
/// toward the enemy. The stack leads with the Warlord, so the first
/// placement each side makes is its leader.
#[derive(Clone, Debug)]
pub struct StandardSetup {
    registry: TroopRegistry,
}

impl StandardSetup {
    /// Build the standard setup and register its troops.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = TroopRegistry::new();

        registry.register(Troop::new(
            "Warlord",
            &[
                TroopAction::slide(1, 0),
                TroopAction::slide(-1, 0),
                TroopAction::slide(0, 1),
                TroopAction::slide(0, -1),
            ],
            &[
                TroopAction::slide(1, 1),
                TroopAction::slide(-1, 1),
                TroopAction::slide(1, -1),
                TroopAction::slide(-1, -1),
            ],
        ));

        registry.register(Troop::new(
            "Footman",
            &[
                TroopAction::shift(1, 0),
                TroopAction::shift(-1, 0),
                TroopAction::shift(0, 1),
                TroopAction::shift(0, -1),
            ],
            &[
                TroopAction::shift(1, 1),
                TroopAction::shift(-1, 1),
                TroopAction::shift(1, -1),
                TroopAction::shift(-1, -1),
            ],
        ));

        registry.register(Troop::new(
            "Monk",
            &[
                TroopAction::slide(1, 1),
                TroopAction::slide(-1, 1),
                TroopAction::slide(1, -1),
                TroopAction::slide(-1, -1),
            ],
            &[
                TroopAction::shift(1, 0),
                TroopAction::shift(-1, 0),
                TroopAction::shift(0, 1),
                TroopAction::shift(0, -1),
            ],
        ));

        registry.register(Troop::new(
            "Spearman",
            &[
                TroopAction::shift(0, 1),
                TroopAction::strike(1, 2),
                TroopAction::strike(-1, 2),
            ],
            &[
                TroopAction::shift(0, -1),
                TroopAction::shift(1, -1),
                TroopAction::shift(-1, -1),
            ],
        ));

        registry.register(Troop::new(
            "Swordsman",
            &[
                TroopAction::strike(1, 0),
                TroopAction::strike(-1, 0),
                TroopAction::strike(0, 1),
                TroopAction::strike(0, -1),
            ],
            &[
                TroopAction::shift(1, 0),
                TroopAction::shift(-1, 0),
                TroopAction::shift(0, 1),
                TroopAction::shift(0, -1),
            ],
        ));

        registry.register(Troop::new(
            "Archer",
            &[TroopAction::shift(0, 1), TroopAction::strike(0, 2)],
            &[
                TroopAction::shift(0, -1),
                TroopAction::strike(1, 1),
                TroopAction::strike(-1, 1),
            ],
        ));

        Self { registry }
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &TroopRegistry {
        &self.registry
    }

    /// Look up a standard troop by name.
    ///
    /// Panics if the name is not part of the standard set.
    #[must_use]
    pub fn troop(&self, name: &str) -> Arc<Troop> {
        self.registry
            .get(name)
            .unwrap_or_else(|| panic!("Troop {name:?} is not part of the standard set"))
    }

    /// The standard placement stack, leader first.
    #[must_use]
    pub fn stack(&self) -> Vec<Arc<Troop>> {
        ["Warlord", "Footman", "Footman", "Monk", "Spearman", "Swordsman", "Archer"]
            .into_iter()
            .map(|name| self.troop(name))
            .collect()
    }

    /// A fresh game on the given board with both standard armies.
    #[must_use]
    pub fn start_state(&self, board: Board) -> GameState {
        GameState::new(
            board,
            Army::new(PlayingSide::Blue, self.stack()),
            Army::new(PlayingSide::Orange, self.stack()),
        )
    }
}

impl Default for StandardSetup {
    fn default() -> Self {
        Self::new()
    }
}
