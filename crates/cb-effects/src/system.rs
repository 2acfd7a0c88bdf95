use cb_host::{FoodCategory, Player, RestoreForm, Session};

use crate::resolver::Capabilities;
use crate::window::{HungerWindow, WarmthWindow, any_window_active};

/// The per-tick effect application loop.
///
/// Stateless between invocations: each window's "active" predicate is
/// recomputed fresh from the stored timestamps every tick, and the only side
/// effects are writes through the resolved capability handles. The window
/// attributes themselves are never modified here; expiry and parameter
/// changes belong exclusively to the granting logic.
#[derive(Debug)]
pub struct CoffeeBuffSystem {
    capabilities: Capabilities,
}

impl CoffeeBuffSystem {
    /// Build the system over bindings produced by the resolver.
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    /// The bindings this system applies effects through.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Apply one tick of `dt` seconds to every online player.
    ///
    /// No-ops while the session is not live or nobody is online, and scans
    /// only the two expiry attributes before touching any capability, so an
    /// idle feature costs O(players) attribute reads and zero capability
    /// invocations per tick.
    pub fn on_tick(&self, session: &dyn Session, dt: f32) {
        if !session.is_live() {
            return;
        }
        let players = session.online_players();
        if players.is_empty() {
            return;
        }

        let now = session.now_seconds();
        if !any_window_active(players.iter().copied(), now) {
            return;
        }

        for player in players {
            self.apply_warmth(player, now, dt);
            self.apply_hunger(player, now, dt);
        }
    }

    fn apply_warmth(&self, player: &Player, now: f64, dt: f32) {
        let Some(thermal) = self.capabilities.thermal.as_deref() else {
            return;
        };
        let window = WarmthWindow::from_attributes(&player.attributes);
        // The rate predicate is kept in the positive direction so a NaN
        // stored by corrupt data fails it and is skipped, never written.
        // A player without the thermal behavior is likewise skipped.
        if window.is_active(now)
            && window.boost_per_sec > 0.0
            && let Some(current) = thermal.read(player.id)
        {
            thermal.write(player.id, window.boosted(current, dt));
        }
    }

    fn apply_hunger(&self, player: &Player, now: f64, dt: f32) {
        let Some(binding) = self.capabilities.satiation.as_ref() else {
            return;
        };
        let window = HungerWindow::from_attributes(&player.attributes);
        let rate = window.restore_per_second();
        // Positive-direction predicate: NaN parameters yield a NaN rate,
        // which fails `> 0.0` and skips the restore entirely.
        if window.is_active(now) && rate > 0.0 && binding.handle.fetch(player.id) {
            let amount = rate * dt;
            match binding.form {
                RestoreForm::Plain => binding.handle.restore(player.id, amount),
                RestoreForm::Categorized => binding.handle.restore_categorized(
                    player.id,
                    amount,
                    FoodCategory::Uncategorized,
                    1.0,
                ),
            }
        }
    }
}
