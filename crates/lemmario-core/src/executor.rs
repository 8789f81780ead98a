//! Wykonawcy partii dla `Language::pipe`.
//!
//! Potok odpowiada tylko za podział na partie i złożenie wyników;
//! samo wykonanie partii jest delegowane do [`BatchExecutor`].

use std::fmt;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{LemmaError, Result};

pub trait BatchExecutor: Send + Sync {
    /// Liczba równoległych wykonawców.
    fn workers(&self) -> usize;

    /// Wykonuje `f(indeks_partii, partia)` dla każdej partii. Wyniki wracają
    /// w kolejności partii; pierwszy błąd przerywa całe wywołanie.
    fn execute<I, T, F>(&self, batches: Vec<Vec<I>>, f: F) -> Result<Vec<T>>
    where
        I: Send + Sync,
        T: Send,
        F: Fn(usize, &[I]) -> Result<T> + Send + Sync;
}

/// Wszystko w wątku wywołującym.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl BatchExecutor for SequentialExecutor {
    fn workers(&self) -> usize {
        1
    }

    fn execute<I, T, F>(&self, batches: Vec<Vec<I>>, f: F) -> Result<Vec<T>>
    where
        I: Send + Sync,
        T: Send,
        F: Fn(usize, &[I]) -> Result<T> + Send + Sync,
    {
        batches
            .iter()
            .enumerate()
            .map(|(idx, batch)| f(idx, batch.as_slice()))
            .collect()
    }
}

/// Własna pula wątków rayon, tworzona raz i używana przez wszystkie wywołania.
pub struct RayonExecutor {
    pool: ThreadPool,
    workers: usize,
}

impl RayonExecutor {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(LemmaError::Config(
                "worker count must be greater than zero".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("lemmario-worker-{}", idx))
            .build()
            .map_err(|e| LemmaError::ExecutorSetup(e.to_string()))?;
        debug!("Utworzono pulę {} wątków roboczych", workers);
        Ok(RayonExecutor { pool, workers })
    }
}

impl fmt::Debug for RayonExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayonExecutor")
            .field("workers", &self.workers)
            .finish()
    }
}

impl BatchExecutor for RayonExecutor {
    fn workers(&self) -> usize {
        self.workers
    }

    fn execute<I, T, F>(&self, batches: Vec<Vec<I>>, f: F) -> Result<Vec<T>>
    where
        I: Send + Sync,
        T: Send,
        F: Fn(usize, &[I]) -> Result<T> + Send + Sync,
    {
        self.pool.install(|| {
            batches
                .par_iter()
                .enumerate()
                .map(|(idx, batch)| f(idx, batch.as_slice()))
                .collect::<Result<Vec<T>>>()
        })
    }
}
