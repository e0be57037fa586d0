//! Inverse-CDF tables for the polar angle of an n-sphere.
//!
//! `get_tp(n)` tabulates, on a fixed grid of [`N_POINTS`] angles over
//! `[0, π]`, an antiderivative of `sin^n θ`. Inverting it by interpolation
//! turns a uniform variate into a polar angle with the right marginal
//! density. Tables obey the reduction
//!
//! ```text
//! tp(0) = θ
//! tp(1) = -cos θ
//! tp(n) = ((n - 1) tp(n - 2) - cos θ sin^(n-1) θ) / n
//! ```
//!
//! and are memoized per dimension in a [`TableCache`].
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use ldsgen_utils::linspace;
use log::debug;

use crate::error::{LdsError, Result};

/// Number of angles in every table
pub const N_POINTS: usize = 300;

/// An immutable, shareable table of [`N_POINTS`] values
pub type Table = Arc<[f64]>;

/// Memoized inverse-CDF tables, keyed by dimension.
///
/// Each table is built at most once per cache. Lookups of a published table
/// only take a read lock; a miss takes the write lock, checks again, and
/// builds the missing table along with any missing tables of the same parity
/// below it.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: RwLock<HashMap<usize, Table>>,
    n_builds: AtomicUsize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`get_tp`] and by sphere generators
    /// built without an explicit cache
    pub fn global() -> &'static TableCache {
        static GLOBAL: OnceLock<TableCache> = OnceLock::new();
        GLOBAL.get_or_init(TableCache::new)
    }

    /// The table for dimension `n`
    ///
    /// # Example
    ///
    /// ```rust
    /// use ldsgen::table::{TableCache, N_POINTS};
    ///
    /// let cache = TableCache::new();
    /// let tp = cache.get_tp(1).unwrap();
    /// assert_eq!(tp.len(), N_POINTS);
    /// assert_eq!(tp[0], -1.0);
    ///
    /// assert!(cache.get_tp(-1).is_err());
    /// ```
    pub fn get_tp(&self, n: i64) -> Result<Table> {
        let n =
            usize::try_from(n).map_err(|_| LdsError::NegativeDimension(n))?;
        Ok(self.table(n))
    }

    /// The angle grid, `linspace(0, π, N_POINTS)`. Same as `get_tp(0)`.
    pub fn grid(&self) -> Table {
        self.table(0)
    }

    /// Number of tables this cache has built so far
    pub fn builds(&self) -> usize {
        self.n_builds.load(Ordering::Relaxed)
    }

    pub(crate) fn table(&self, n: usize) -> Table {
        {
            let tables =
                self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = tables.get(&n) {
                return Arc::clone(table);
            }
        }

        let mut tables =
            self.tables.write().unwrap_or_else(PoisonError::into_inner);
        self.build(n, &mut tables)
    }

    fn build(&self, n: usize, tables: &mut HashMap<usize, Table>) -> Table {
        // another thread may have published it between the two locks
        if let Some(table) = tables.get(&n) {
            return Arc::clone(table);
        }

        let angles = linspace(0.0, PI, N_POINTS);
        let neg_cosine: Vec<f64> = angles.iter().map(|x| -x.cos()).collect();
        let sine: Vec<f64> = angles.iter().map(|x| x.sin()).collect();

        let lowest = n % 2;
        let cached = (1..=n / 2)
            .map(|i| n - 2 * i)
            .find_map(|m| tables.get(&m).map(|tp| (m, Arc::clone(tp))));

        let (mut m, mut table) = match cached {
            Some(found) => found,
            None => {
                let base: Table = if lowest == 0 {
                    angles.into()
                } else {
                    neg_cosine.clone().into()
                };
                self.publish(lowest, &base, tables);
                (lowest, base)
            }
        };

        while m < n {
            m += 2;
            let mf = m as f64;
            let power = (m - 1) as f64;
            let next: Table = table
                .iter()
                .zip(neg_cosine.iter().zip(sine.iter()))
                .map(|(tp, (nc, s))| {
                    ((mf - 1.0) * tp + nc * s.powf(power)) / mf
                })
                .collect();
            self.publish(m, &next, tables);
            table = next;
        }

        table
    }

    fn publish(
        &self,
        n: usize,
        table: &Table,
        tables: &mut HashMap<usize, Table>,
    ) {
        debug!("built inverse-CDF table for n = {n} ({} points)", table.len());
        tables.insert(n, Arc::clone(table));
        self.n_builds.fetch_add(1, Ordering::Relaxed);
    }
}

/// The table for dimension `n` from the process-wide cache.
///
/// Fails if `n` is negative.
pub fn get_tp(n: i64) -> Result<Table> {
    TableCache::global().get_tp(n)
}
