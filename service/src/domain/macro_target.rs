//! [`MacroTarget`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Grams, Kilocalories};

#[cfg(doc)]
use crate::domain::Client;
use crate::domain::client;

/// Daily macronutrient targets of a [`Client`].
///
/// At most one [`MacroTarget`] exists per [`Client`], replaced wholesale on
/// every change.
#[derive(Clone, Debug)]
pub struct MacroTarget {
    /// ID of the [`Client`] these targets belong to.
    pub client_id: client::Id,

    /// Daily protein target.
    pub protein: Grams,

    /// Daily carbohydrate target.
    pub carbs: Grams,

    /// Daily fat target.
    pub fat: Grams,

    /// [`DateTime`] when this [`MacroTarget`] was last updated.
    pub updated_at: UpdateDateTime,
}

impl MacroTarget {
    /// Energy density of protein and carbohydrates, in kcal per gram.
    const KCAL_PER_GRAM: u32 = 4;

    /// Energy density of fat, in kcal per gram.
    const KCAL_PER_GRAM_FAT: u32 = 9;

    /// Returns the total daily energy of these targets.
    #[must_use]
    pub fn calories(&self) -> Kilocalories {
        self.protein.energy(Self::KCAL_PER_GRAM)
            + self.carbs.energy(Self::KCAL_PER_GRAM)
            + self.fat.energy(Self::KCAL_PER_GRAM_FAT)
    }
}

/// [`DateTime`] when a [`MacroTarget`] was last updated.
pub type UpdateDateTime = DateTimeOf<(MacroTarget, unit::Update)>;

#[cfg(test)]
mod spec {
    use common::{Grams, Kilocalories};

    use super::MacroTarget;

    #[test]
    fn calories_follow_atwater_factors() {
        let target = MacroTarget {
            client_id: crate::domain::client::Id::new(),
            protein: Grams::from(180),
            carbs: Grams::from(250),
            fat: Grams::from(70),
            updated_at: common::DateTime::now().coerce(),
        };

        // 180 * 4 + 250 * 4 + 70 * 9
        assert_eq!(target.calories(), Kilocalories::from(2350));
    }
}
