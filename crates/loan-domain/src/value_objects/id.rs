//! Generic opaque identifier value object
//!
//! Type-safe identifier using phantom types for compile-time differentiation.
//! Uses sealed trait pattern to prevent external marker implementations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Sealed trait module preventing external implementations
mod private {
    pub trait Sealed {}
}

/// Marker trait for type-safe ID differentiation.
///
/// This trait is sealed - external crates cannot implement it.
pub trait IdMarker: private::Sealed + Send + Sync + 'static {}

/// Marker type for merchant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MerchantMarker;

/// Marker type for product identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductMarker;

/// Marker type for loan application identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanApplicationMarker;

impl private::Sealed for MerchantMarker {}
impl private::Sealed for ProductMarker {}
impl private::Sealed for LoanApplicationMarker {}

impl IdMarker for MerchantMarker {}
impl IdMarker for ProductMarker {}
impl IdMarker for LoanApplicationMarker {}

/// Opaque string identifier with phantom type safety.
///
/// Identifiers are supplied by callers or collaborators and carry no format
/// of their own; the domain only compares them. The phantom parameter keeps
/// a merchant id from being passed where a product id is expected:
///
/// ```compile_fail
/// # use loan_origination_domain::value_objects::{MerchantId, ProductId};
/// let merchant_id = MerchantId::new("123");
/// let product_id: ProductId = merchant_id;  // Compile error!
/// ```
pub struct Id<T: IdMarker> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// Create identifier from its string form
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the identifier, returning the owned string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Whether the identifier is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// Manual impls avoid derive's `T: Trait` bounds on the marker.
impl<T: IdMarker> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: IdMarker> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdMarker> Eq for Id<T> {}

impl<T: IdMarker> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(std::any::type_name::<Self>())
            .field(&self.value)
            .finish()
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Type alias for merchant identifier
pub type MerchantId = Id<MerchantMarker>;

/// Type alias for product identifier
pub type ProductId = Id<ProductMarker>;

/// Type alias for loan application identifier
pub type LoanApplicationId = Id<LoanApplicationMarker>;
