// ============================================================================
// Monetary Amount
// Fixed-point euro amount with two fraction digits (stored as cents)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical monetary value with exactly two fraction digits.
///
/// Internally stores the value as an `i64` count of cents. Intermediate
/// arithmetic (products, VAT ratios, summations) is carried in
/// [`rust_decimal::Decimal`] and rounded half-up exactly once when an
/// `Amount` is produced, so repeated derivations never accumulate binary
/// floating-point drift.
///
/// With the serde feature enabled, an `Amount` serializes as its raw cent
/// count.
///
/// # Example
/// ```ignore
/// use holding_core::numeric::Amount;
///
/// let price: Amount = "10.33".parse()?;          // 10,33 €
/// let total = price.checked_mul_int(3)?;         // 30,99 €
/// assert_eq!(total.to_string(), "30.99");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Cents per euro (10^2)
    pub const SCALE: i64 = 100;

    /// Zero amount (0,00)
    pub const ZERO: Self = Self(0);

    /// One euro (1,00)
    pub const ONE: Self = Self(Self::SCALE);

    /// Maximum representable amount
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable amount
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw cent count.
    ///
    /// Use this when the value is already expressed in cents (e.g., read
    /// back from storage).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create from a whole number of euros.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_euros(euros: i64) -> NumericResult<Self> {
        euros
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from euro and cent parts.
    ///
    /// # Arguments
    /// - `euros`: The euro part (can be negative)
    /// - `centimes`: The cent part (0-99, always positive)
    ///
    /// # Example
    /// ```ignore
    /// // Create 123,45 €
    /// let x = Amount::from_parts(123, 45)?;
    /// ```
    #[inline]
    pub fn from_parts(euros: i64, centimes: u32) -> NumericResult<Self> {
        if centimes >= Self::SCALE as u32 {
            return Err(NumericError::InvalidNumber);
        }

        let euros_scaled = euros
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let centimes_signed = if euros < 0 {
            -(centimes as i64)
        } else {
            centimes as i64
        };

        euros_scaled
            .checked_add(centimes_signed)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Round a high-precision decimal to the nearest cent, half away from
    /// zero.
    ///
    /// This is the single terminal rounding applied to every derived
    /// amount. A value exactly halfway between two cents rounds toward the
    /// larger magnitude (10.335 becomes 10.34, -10.335 becomes -10.34).
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the rounded value does not fit in
    /// an `i64` cent count.
    pub fn round2(value: Decimal) -> NumericResult<Self> {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let scaled = rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(NumericError::Overflow)?;

        scaled.to_i64().map(Self).ok_or_else(|| {
            if rounded.is_sign_negative() {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            }
        })
    }

    /// Convert a binary float into an amount.
    ///
    /// This is intended for API boundaries only (deserialized form input).
    /// All internal arithmetic stays decimal.
    ///
    /// # Errors
    /// Returns `InvalidNumber` for NaN or infinite input, never silently
    /// coercing it to zero. Returns `Overflow` if the magnitude exceeds the
    /// representable range.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidNumber);
        }
        let decimal = Decimal::from_f64(value).ok_or(NumericError::Overflow)?;
        Self::round2(decimal)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw cent count.
    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Get the euro part (truncated toward zero).
    #[inline]
    pub const fn euros_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the cent part as a positive value.
    #[inline]
    pub const fn cents_part(self) -> u32 {
        (self.0 % Self::SCALE).unsigned_abs() as u32
    }

    /// Check if the amount is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.0 == i64::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(self.0.abs()))
        }
    }

    /// Convert to a high-precision decimal for intermediate arithmetic.
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Multiply by an integer count (no rounding involved).
    ///
    /// Exact for integer quantities; use the line computation functions
    /// when the multiplier carries decimals.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Returns the minimum of two amounts.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two amounts.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Amount addition overflow")
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Amount subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({}, cents={})", self, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let euros = self.euros_part();
        let centimes = self.cents_part();

        if self.0 < 0 && euros == 0 {
            // Handle -0.xx case
            write!(f, "-0.{:02}", centimes)
        } else {
            write!(f, "{}.{:02}", euros, centimes)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Amount {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// Values carrying more than two fraction digits are rounded half-up
    /// to the nearest cent.
    ///
    /// # Examples
    /// - "123" -> 123.00
    /// - "123.4" -> 123.40
    /// - "-0.005" -> -0.01
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidNumber);
        }

        let decimal: Decimal = s.parse().map_err(|_| NumericError::InvalidNumber)?;
        Self::round2(decimal)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(Amount::SCALE, 100);
        assert_eq!(Amount::ZERO.cents(), 0);
        assert_eq!(Amount::ONE.cents(), 100);
    }

    #[test]
    fn test_from_euros() {
        let x = Amount::from_euros(100).unwrap();
        assert_eq!(x.cents(), 10_000);
        assert_eq!(x.euros_part(), 100);
        assert_eq!(x.cents_part(), 0);
    }

    #[test]
    fn test_from_parts() {
        // 123,45
        let x = Amount::from_parts(123, 45).unwrap();
        assert_eq!(x.euros_part(), 123);
        assert_eq!(x.cents_part(), 45);
        assert_eq!(x.to_string(), "123.45");

        // -5,50
        let y = Amount::from_parts(-5, 50).unwrap();
        assert_eq!(y.euros_part(), -5);
        assert_eq!(y.cents_part(), 50);
        assert!(y.is_negative());
    }

    #[test]
    fn test_from_parts_invalid() {
        let result = Amount::from_parts(1, 100);
        assert_eq!(result, Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_round2_half_up() {
        let up: Decimal = "10.335".parse().unwrap();
        assert_eq!(Amount::round2(up).unwrap().cents(), 1034);

        let down: Decimal = "10.334".parse().unwrap();
        assert_eq!(Amount::round2(down).unwrap().cents(), 1033);

        // Half-up rounds away from zero on the negative side too
        let neg: Decimal = "-10.335".parse().unwrap();
        assert_eq!(Amount::round2(neg).unwrap().cents(), -1034);
    }

    #[test]
    fn test_round2_exact_values() {
        let exact: Decimal = "30.99".parse().unwrap();
        assert_eq!(Amount::round2(exact).unwrap().cents(), 3099);

        assert_eq!(Amount::round2(Decimal::ZERO).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq!(Amount::from_f64(f64::NAN), Err(NumericError::InvalidNumber));
        assert_eq!(
            Amount::from_f64(f64::INFINITY),
            Err(NumericError::InvalidNumber)
        );
        assert_eq!(
            Amount::from_f64(f64::NEG_INFINITY),
            Err(NumericError::InvalidNumber)
        );
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Amount::from_f64(10.33).unwrap().cents(), 1033);
        assert_eq!(Amount::from_f64(-0.5).unwrap().cents(), -50);
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::from_euros(100).unwrap();
        let b = Amount::from_euros(50).unwrap();
        let c = a.checked_add(b).unwrap();
        assert_eq!(c.euros_part(), 150);

        // Overflow
        let result = Amount::MAX.checked_add(Amount::ONE);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = Amount::from_euros(100).unwrap();
        let b = Amount::from_euros(30).unwrap();
        let c = a.checked_sub(b).unwrap();
        assert_eq!(c.euros_part(), 70);

        // Negative result
        let d = b.checked_sub(a).unwrap();
        assert_eq!(d.euros_part(), -70);

        // Underflow
        let result = Amount::MIN.checked_sub(Amount::ONE);
        assert_eq!(result, Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul_int() {
        let price = Amount::from_parts(10, 33).unwrap();
        let total = price.checked_mul_int(3).unwrap();
        assert_eq!(total.to_string(), "30.99");

        let result = Amount::MAX.checked_mul_int(2);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_comparison() {
        let a = Amount::from_euros(100).unwrap();
        let b = Amount::from_euros(50).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_display() {
        let x = Amount::from_parts(123, 45).unwrap();
        assert_eq!(x.to_string(), "123.45");

        let zero = Amount::ZERO;
        assert_eq!(zero.to_string(), "0.00");

        let small = Amount::from_cents(5);
        assert_eq!(small.to_string(), "0.05");

        let neg = Amount::from_cents(-10);
        assert_eq!(neg.to_string(), "-0.10");
    }

    #[test]
    fn test_from_str() {
        let x: Amount = "123.45".parse().unwrap();
        assert_eq!(x.cents(), 12_345);

        let y: Amount = "-0.005".parse().unwrap();
        assert_eq!(y.cents(), -1);

        let z: Amount = "42".parse().unwrap();
        assert_eq!(z.cents(), 4200);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Amount, _> = "not_a_number".parse();
        assert_eq!(result, Err(NumericError::InvalidNumber));

        let result: Result<Amount, _> = "".parse();
        assert_eq!(result, Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_to_decimal() {
        let x = Amount::from_parts(123, 45).unwrap();
        assert_eq!(x.to_decimal().to_string(), "123.45");
    }

    #[test]
    fn test_negation_and_abs() {
        let x = Amount::from_euros(100).unwrap();
        assert_eq!((-x).euros_part(), -100);
        assert_eq!((-x).abs().unwrap(), x);
        assert_eq!(Amount::MIN.abs(), Err(NumericError::Overflow));
    }

    proptest! {
        // round2 is a no-op on values that are already whole cents
        #[test]
        fn prop_round2_idempotent(cents in -1_000_000_000i64..1_000_000_000i64) {
            let amount = Amount::from_cents(cents);
            let again = Amount::round2(amount.to_decimal()).unwrap();
            prop_assert_eq!(amount, again);
        }

        #[test]
        fn prop_add_then_sub_roundtrips(a in -1_000_000i64..1_000_000i64,
                                        b in -1_000_000i64..1_000_000i64) {
            let x = Amount::from_cents(a);
            let y = Amount::from_cents(b);
            let back = x.checked_add(y).unwrap().checked_sub(y).unwrap();
            prop_assert_eq!(x, back);
        }
    }
}
