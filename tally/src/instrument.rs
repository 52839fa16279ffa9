//! Capability contracts the harness drives.
//!
//! Each trait is the smallest surface a check needs: one write operation. How an
//! instrument stores, locks, labels or decays its state is its own business; the
//! harness only reads it back through the closure passed to the check.
//!
//! Methods take `&self`. Real instruments are shared between writers and use
//! interior mutability, and it lets the readback closure borrow the instrument
//! while the check holds a reference to it too:
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use tally::{HarnessConfig, check, instrument::Counter};
//!
//! #[derive(Default)]
//! struct CellCounter(Cell<f64>);
//!
//! impl Counter for CellCounter {
//!     fn add(&self, delta: f64) {
//!         self.0.set(self.0.get() + delta);
//!     }
//! }
//!
//! let counter = CellCounter::default();
//! let outcome = check::counter(7, &HarnessConfig::default(), &counter, || counter.0.get()).unwrap();
//! assert!(outcome.is_success());
//! ```

use std::sync::Arc;

/// Additive instrument.
pub trait Counter {
    fn add(&self, delta: f64);
}

/// Last-write-wins instrument.
pub trait Gauge {
    fn set(&self, value: f64);
}

/// Instrument accumulating observations into some distribution summary.
pub trait Histogram {
    fn observe(&self, value: f64);
}

macro_rules! forward {
    ($trait:ident, $method:ident) => {
        impl<T: $trait + ?Sized> $trait for &T {
            fn $method(&self, value: f64) {
                (**self).$method(value)
            }
        }

        impl<T: $trait + ?Sized> $trait for Box<T> {
            fn $method(&self, value: f64) {
                (**self).$method(value)
            }
        }

        impl<T: $trait + ?Sized> $trait for Arc<T> {
            fn $method(&self, value: f64) {
                (**self).$method(value)
            }
        }
    };
}

forward!(Counter, add);
forward!(Gauge, set);
forward!(Histogram, observe);
