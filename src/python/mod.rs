//! Python bindings for the match engine.
//!
//! Observations and masks cross the boundary as JSON strings; the agent
//! side decodes them into whatever tensors it needs.
//!
//! # Quick Start
//!
//! ```python
//! import rust_autobattler as ab
//!
//! engine = ab.MatchEngine(catalog_json=open("catalog.json").read())
//! engine.reset(seed=42)
//! while True:
//!     decision = engine.run_until_decision_point()
//!     if decision is None:
//!         break
//!     player, round_ = decision
//!     engine.apply_action(player, "pass", [])
//! print(engine.summary_json())
//! ```

use std::sync::Arc;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::augments::AugmentRegistry;
use crate::catalog::{sample_catalog, Catalog, CatalogData};
use crate::core::{EngineError, MatchConfig, PlayerId};
use crate::engine::{MatchEngine, RunResult};

fn engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::UnknownAction { .. } | EngineError::UnknownPlayer(_) => {
            PyValueError::new_err(err.to_string())
        }
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

fn json_err(err: serde_json::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn seat(player: usize) -> PyResult<PlayerId> {
    u8::try_from(player)
        .map(PlayerId::new)
        .map_err(|_| PyValueError::new_err(format!("player index {player} out of range")))
}

/// Python wrapper for [`MatchEngine`].
#[pyclass(name = "MatchEngine")]
pub struct PyMatchEngine {
    inner: MatchEngine,
}

#[pymethods]
impl PyMatchEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - catalog_json: catalog contents; the bundled sample catalog if omitted
    /// - config_json: full match configuration; defaults if omitted
    #[new]
    #[pyo3(signature = (catalog_json = None, config_json = None))]
    fn new(catalog_json: Option<&str>, config_json: Option<&str>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => {
                let data: CatalogData = serde_json::from_str(json).map_err(json_err)?;
                Catalog::from_data(data)
            }
            None => sample_catalog(),
        };
        let config = match config_json {
            Some(json) => serde_json::from_str::<MatchConfig>(json).map_err(json_err)?,
            None => MatchConfig::default(),
        };
        let inner = MatchEngine::new(
            Arc::new(catalog),
            config,
            Arc::new(AugmentRegistry::builtin()),
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Start a new match.
    #[pyo3(signature = (seed = 42))]
    fn reset(&mut self, seed: u64) {
        self.inner.reset(seed);
    }

    /// Advance to the next decision.
    ///
    /// Returns `(player, round)`, or `None` once the match is over.
    fn run_until_decision_point(&mut self) -> PyResult<Option<(usize, u32)>> {
        match self.inner.run_until_decision_point().map_err(engine_err)? {
            RunResult::Decision(d) => Ok(Some((d.player.index(), d.round))),
            RunResult::GameOver(_) => Ok(None),
        }
    }

    /// Apply a wire-format action. Returns whether it succeeded.
    fn apply_action(&mut self, player: usize, name: &str, args: Vec<usize>) -> PyResult<bool> {
        let outcome = self
            .inner
            .apply_named(seat(player)?, name, &args)
            .map_err(engine_err)?;
        Ok(outcome.succeeded())
    }

    /// Observation of `player` as JSON.
    fn observation_json(&self, player: usize) -> PyResult<String> {
        let observation = self.inner.observe(seat(player)?).map_err(engine_err)?;
        serde_json::to_string(&observation).map_err(json_err)
    }

    /// Action mask of `player` as JSON.
    fn action_mask_json(&self, player: usize) -> PyResult<String> {
        let mask = self.inner.action_mask(seat(player)?).map_err(engine_err)?;
        serde_json::to_string(&mask).map_err(json_err)
    }

    /// Legal actions of `player` as `(name, args)` pairs.
    fn legal_actions(&self, player: usize) -> PyResult<Vec<(String, Vec<usize>)>> {
        let mask = self.inner.action_mask(seat(player)?).map_err(engine_err)?;
        Ok(mask
            .legal_actions()
            .into_iter()
            .map(|action| (action.name().to_string(), action.args()))
            .collect())
    }

    /// Standings as JSON, or `None` before the first reset.
    fn summary_json(&self) -> PyResult<Option<String>> {
        self.inner
            .summary()
            .map(|s| serde_json::to_string(&s).map_err(json_err))
            .transpose()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    #[getter]
    fn awaiting(&self) -> Option<usize> {
        self.inner.awaiting().map(PlayerId::index)
    }

    #[getter]
    fn round(&self) -> u32 {
        self.inner.game().map_or(0, |g| g.round())
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.inner.config().players
    }
}

/// rust_autobattler: an auto-battler match simulator for RL training.
#[pymodule]
fn rust_autobattler(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchEngine>()?;
    Ok(())
}
