//! Shared test utilities for the domain crates.
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied
//! - `TestDataBuilder`: deterministic names per test
//! - `assertions`: small assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("my_postgres_test");
//!     let name = data.name("product", "main");
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Seeded generator so reruns of a test produce the same data while
/// different tests do not collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<prefix>-<seed>-<suffix>`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::new(7);
    /// assert_eq!(data.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Category label unique to this test, for filtering in a shared table.
    pub fn category(&self) -> String {
        format!("category-{}", self.seed)
    }

    pub fn username(&self, suffix: &str) -> String {
        format!("user{}{}", self.seed % 100_000, suffix)
    }

    pub fn email(&self, suffix: &str) -> String {
        format!("{}@example.com", self.username(suffix))
    }
}

pub mod assertions {
    /// Unwrap with the context in the panic message.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `value` is an RFC 3339 timestamp in UTC (`...Z`).
    pub fn assert_utc_timestamp(value: &str, context: &str) {
        assert!(
            value.ends_with('Z') && value.contains('T'),
            "{}: expected an RFC 3339 UTC timestamp, got {:?}",
            context,
            value
        );
    }
}
