use std::fmt;

use crate::player::PlayerId;

/// Category discriminant passed to the three-argument satiation restore.
///
/// The buff core always passes [`FoodCategory::Uncategorized`]; the richer
/// variants exist because host builds expose them and adapters must be able
/// to name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoodCategory {
    /// No particular category. The fixed discriminant for buff restores.
    #[default]
    Uncategorized,
    /// Fruit and berries.
    Fruit,
    /// Vegetables and roots.
    Vegetable,
    /// Meat and fish.
    Protein,
    /// Grains and bread.
    Grain,
    /// Dairy products.
    Dairy,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncategorized => write!(f, "uncategorized"),
            Self::Fruit => write!(f, "fruit"),
            Self::Vegetable => write!(f, "vegetable"),
            Self::Protein => write!(f, "protein"),
            Self::Grain => write!(f, "grain"),
            Self::Dairy => write!(f, "dairy"),
        }
    }
}

/// Which satiation restore call shape a host build exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreForm {
    /// Single-argument restore: amount only.
    Plain,
    /// Three-argument restore: amount, food category, intensity.
    Categorized,
}

impl fmt::Display for RestoreForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Categorized => write!(f, "categorized"),
        }
    }
}

/// Read/write surface over the host's thermal model.
///
/// Resolved once per process and shared read-only afterwards, so the methods
/// take `&self`; adapters that mutate host state do so through interior
/// mutability. All calls arrive on the host's single simulation thread.
pub trait ThermalCapability: fmt::Debug {
    /// Current body temperature of `player`, or `None` if this player does
    /// not carry the thermal behavior. A `None` is a per-tick skip, not an
    /// error.
    fn read(&self, player: PlayerId) -> Option<f32>;

    /// Overwrite `player`'s current body temperature.
    fn write(&self, player: PlayerId, value: f32);
}

/// Mutation surface over the host's satiation model.
///
/// A host build exposes exactly one restore call shape, reported by
/// [`SatiationCapability::form`]; the other method is never invoked on that
/// binding.
pub trait SatiationCapability: fmt::Debug {
    /// The restore call shape this adapter exposes.
    fn form(&self) -> RestoreForm;

    /// Whether `player` currently carries the satiation behavior.
    fn fetch(&self, player: PlayerId) -> bool;

    /// Single-argument restore. Invoked only on [`RestoreForm::Plain`]
    /// bindings.
    fn restore(&self, player: PlayerId, amount: f32);

    /// Three-argument restore. Invoked only on [`RestoreForm::Categorized`]
    /// bindings.
    fn restore_categorized(
        &self,
        player: PlayerId,
        amount: f32,
        category: FoodCategory,
        intensity: f32,
    );
}
