//! Nutrition and body measures.

use std::{fmt, str::FromStr};

use derive_more::{Display, From, Into};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whole grams of a macronutrient.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, Ord,
    PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[display("{_0}g")]
pub struct Grams(u32);

impl Grams {
    /// Returns the energy of this amount of [`Grams`] given the energy
    /// density of the nutrient.
    #[must_use]
    pub const fn energy(self, kcal_per_gram: u32) -> Kilocalories {
        Kilocalories(self.0 * kcal_per_gram)
    }
}

impl FromStr for Grams {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix('g')
            .unwrap_or(s)
            .parse()
            .map(Self)
            .map_err(|_| "invalid grams value")
    }
}

/// Dietary energy in kilocalories.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, Ord,
    PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[display("{_0}kcal")]
pub struct Kilocalories(u32);

impl std::ops::Add for Kilocalories {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Body mass in kilograms.
#[derive(Clone, Copy, Debug, Eq, Hash, Into, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(into = "Decimal", try_from = "Decimal")
)]
pub struct Kilograms(Decimal);

impl Kilograms {
    /// Upper bound of a representable body mass.
    const MAX: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

    /// Creates a new [`Kilograms`] if the provided value is a representable
    /// body mass.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val <= Decimal::ZERO || val > Self::MAX {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Kilograms`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be greater than `0` and not exceed `500`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(amount) = self;
        if amount.is_integer() {
            write!(f, "{}kg", amount.to_i64().expect("integer"))
        } else {
            write!(f, "{amount}kg")
        }
    }
}

impl FromStr for Kilograms {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.strip_suffix("kg").ok_or("missing `kg` suffix")?;
        Decimal::from_str(amount)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid kilograms value")
    }
}

impl TryFrom<Decimal> for Kilograms {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("invalid kilograms value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Grams, Kilocalories, Kilograms};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn grams_from_str() {
        assert_eq!(Grams::from_str("150g").unwrap(), Grams::from(150));
        assert_eq!(Grams::from_str("150").unwrap(), Grams::from(150));
        assert!(Grams::from_str("150gg").is_err());
        assert!(Grams::from_str("-1g").is_err());
    }

    #[test]
    fn grams_energy() {
        assert_eq!(Grams::from(150).energy(4), Kilocalories::from(600));
        assert_eq!(Grams::from(70).energy(9), Kilocalories::from(630));
    }

    #[test]
    fn kilograms_from_str() {
        assert_eq!(
            Kilograms::from_str("82.5kg").unwrap(),
            Kilograms::new(decimal("82.5")).unwrap(),
        );
        assert_eq!(
            Kilograms::from_str("82kg").unwrap(),
            Kilograms::new(decimal("82")).unwrap(),
        );

        assert!(Kilograms::from_str("82.5").is_err());
        assert!(Kilograms::from_str("0kg").is_err());
        assert!(Kilograms::from_str("-82.5kg").is_err());
        assert!(Kilograms::from_str("501kg").is_err());
    }

    #[test]
    fn kilograms_to_string() {
        assert_eq!(
            Kilograms::new(decimal("82.5")).unwrap().to_string(),
            "82.5kg",
        );
        assert_eq!(
            Kilograms::new(decimal("82.0")).unwrap().to_string(),
            "82kg",
        );
        assert_eq!(Kilograms::new(decimal("82")).unwrap().to_string(), "82kg");
    }
}
