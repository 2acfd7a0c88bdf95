//! In-memory capability and session doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use cb_host::{
    FoodCategory, Player, PlayerId, RestoreForm, SatiationCapability, Session, ThermalCapability,
};

/// Backing state of a [`CountingThermal`], shared so tests can inspect it
/// after the double has been boxed into a capability handle.
#[derive(Debug, Default)]
pub(crate) struct ThermalState {
    pub temps: RefCell<HashMap<PlayerId, f32>>,
    pub reads: Cell<u32>,
    pub writes: Cell<u32>,
}

/// Thermal capability double that counts every accessor invocation.
#[derive(Debug, Clone, Default)]
pub(crate) struct CountingThermal {
    pub state: Rc<ThermalState>,
}

impl CountingThermal {
    pub fn set_temp(&self, player: PlayerId, value: f32) {
        self.state.temps.borrow_mut().insert(player, value);
    }

    pub fn temp(&self, player: PlayerId) -> Option<f32> {
        self.state.temps.borrow().get(&player).copied()
    }

    pub fn invocations(&self) -> u32 {
        self.state.reads.get() + self.state.writes.get()
    }
}

impl ThermalCapability for CountingThermal {
    fn read(&self, player: PlayerId) -> Option<f32> {
        self.state.reads.set(self.state.reads.get() + 1);
        self.state.temps.borrow().get(&player).copied()
    }

    fn write(&self, player: PlayerId, value: f32) {
        self.state.writes.set(self.state.writes.get() + 1);
        self.state.temps.borrow_mut().insert(player, value);
    }
}

/// Backing state of a [`CountingSatiation`].
#[derive(Debug, Default)]
pub(crate) struct SatiationState {
    pub present: RefCell<HashSet<PlayerId>>,
    pub fetches: Cell<u32>,
    pub plain_calls: RefCell<Vec<(PlayerId, f32)>>,
    pub categorized_calls: RefCell<Vec<(PlayerId, f32, FoodCategory, f32)>>,
}

/// Satiation capability double recording which restore form was invoked.
#[derive(Debug, Clone)]
pub(crate) struct CountingSatiation {
    pub exposed_form: RestoreForm,
    pub state: Rc<SatiationState>,
}

impl CountingSatiation {
    pub fn new(exposed_form: RestoreForm) -> Self {
        Self {
            exposed_form,
            state: Rc::default(),
        }
    }

    pub fn attach(&self, player: PlayerId) {
        self.state.present.borrow_mut().insert(player);
    }

    pub fn invocations(&self) -> u32 {
        self.state.fetches.get()
            + self.state.plain_calls.borrow().len() as u32
            + self.state.categorized_calls.borrow().len() as u32
    }
}

impl SatiationCapability for CountingSatiation {
    fn form(&self) -> RestoreForm {
        self.exposed_form
    }

    fn fetch(&self, player: PlayerId) -> bool {
        self.state.fetches.set(self.state.fetches.get() + 1);
        self.state.present.borrow().contains(&player)
    }

    fn restore(&self, player: PlayerId, amount: f32) {
        self.state.plain_calls.borrow_mut().push((player, amount));
    }

    fn restore_categorized(
        &self,
        player: PlayerId,
        amount: f32,
        category: FoodCategory,
        intensity: f32,
    ) {
        self.state
            .categorized_calls
            .borrow_mut()
            .push((player, amount, category, intensity));
    }
}

/// Minimal in-memory session.
#[derive(Debug, Default)]
pub(crate) struct TestSession {
    pub live: bool,
    pub now: f64,
    pub players: Vec<Player>,
}

impl TestSession {
    pub fn live_at(now: f64, players: Vec<Player>) -> Self {
        Self {
            live: true,
            now,
            players,
        }
    }
}

impl Session for TestSession {
    fn is_live(&self) -> bool {
        self.live
    }

    fn now_seconds(&self) -> f64 {
        self.now
    }

    fn online_players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }
}
