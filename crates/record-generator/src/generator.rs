//! Main record generator: assembles records from a model.

use crate::generators::ValueGenerator;
use crate::mapping::{MappingError, ObjectMapper, SetterTable, SetterTarget};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use record_core::{Model, Record, SpecError};
use tracing::debug;

/// Number of records produced by a batch when no volume is given.
pub const DEFAULT_VOLUME: usize = 20;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A field type string failed to parse
    #[error("Invalid model: {0}")]
    InvalidSpec(#[from] SpecError),
}

/// Generates random records shaped by a [`Model`].
///
/// The model is parsed and validated before the generator exists, so every
/// `fetch` call succeeds. Values are drawn fresh on each call; nothing is
/// cached between records. The random source is owned by the generator:
/// seed it with [`RecordGenerator::with_seed`] for reproducible output.
pub struct RecordGenerator<R = StdRng> {
    /// Field declarations, in output order
    model: Model,
    /// Number of records per batch
    volume: usize,
    /// Random source advanced by every draw
    rng: R,
}

impl RecordGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn new(model: Model, volume: usize) -> Self {
        Self::with_rng(model, volume, StdRng::from_os_rng())
    }

    /// Create a generator with a fixed seed.
    ///
    /// The same model, volume and seed always produce the same records.
    pub fn with_seed(model: Model, volume: usize, seed: u64) -> Self {
        Self::with_rng(model, volume, StdRng::seed_from_u64(seed))
    }

    /// Parse `(field name, type string)` declarations and create a generator.
    pub fn from_types<I, K, V>(declarations: I, volume: usize) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Ok(Self::new(Model::parse(declarations)?, volume))
    }
}

/// The default model with a batch volume of 20.
impl Default for RecordGenerator<StdRng> {
    fn default() -> Self {
        Self::new(Model::default(), DEFAULT_VOLUME)
    }
}

impl<R: Rng> RecordGenerator<R> {
    /// Create a generator drawing from the given random source.
    pub fn with_rng(model: Model, volume: usize, rng: R) -> Self {
        debug!(
            "Record generator ready: {} fields, volume {}",
            model.len(),
            volume
        );
        Self { model, volume, rng }
    }

    /// Generate one record, fields in model order.
    pub fn fetch(&mut self) -> Record {
        let mut record = Record::with_capacity(self.model.len());
        for (name, spec) in self.model.iter() {
            record.insert(name, spec.generate(&mut self.rng));
        }
        record
    }

    /// Generate `volume` independent records.
    pub fn fetch_all(&mut self) -> Vec<Record> {
        debug!("Generating {} records", self.volume);
        (0..self.volume).map(|_| self.fetch()).collect()
    }

    /// Generate one record and map it onto a new `T`.
    pub fn fetch_obj<T: SetterTarget>(&mut self) -> Result<T, MappingError> {
        let mapper = ObjectMapper::<T>::for_target(&self.model)?;
        Ok(mapper.map(self.fetch()))
    }

    /// Generate `volume` records mapped onto new `T` instances.
    ///
    /// Setters are resolved before any record is generated.
    pub fn fetch_all_obj<T: SetterTarget>(&mut self) -> Result<Vec<T>, MappingError> {
        let mapper = ObjectMapper::<T>::for_target(&self.model)?;
        Ok(self.fetch_all_mapped(&mapper))
    }

    /// Generate one record and map it through an explicit setter table.
    pub fn fetch_obj_with<T: Default>(
        &mut self,
        table: &SetterTable<T>,
    ) -> Result<T, MappingError> {
        let mapper = ObjectMapper::from_table(&self.model, table)?;
        Ok(mapper.map(self.fetch()))
    }

    /// Generate `volume` records mapped through an explicit setter table.
    pub fn fetch_all_obj_with<T: Default>(
        &mut self,
        table: &SetterTable<T>,
    ) -> Result<Vec<T>, MappingError> {
        let mapper = ObjectMapper::from_table(&self.model, table)?;
        Ok(self.fetch_all_mapped(&mapper))
    }

    fn fetch_all_mapped<T: Default>(&mut self, mapper: &ObjectMapper<T>) -> Vec<T> {
        (0..self.volume).map(|_| mapper.map(self.fetch())).collect()
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Number of records produced by a batch.
    pub fn volume(&self) -> usize {
        self.volume
    }
}
