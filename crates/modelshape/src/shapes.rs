//! Cached shape contracts for the operations of a data store.

mod builder;
pub use builder::Builder;

mod cache;
use cache::Cache;

use crate::schema::{ModelId, Schema};
use crate::shape::{self, ComputedModel, Include, Mode, Projector};
use crate::{err, Result};

use std::sync::Arc;

/// Answers "what shape does this record have" for each operation on a model.
///
/// Plain projections are cached per `(model, mode)`. Schemas never change
/// once built, so cached entries are never invalidated.
///
/// ```
/// # use modelshape::schema::{AutoStrategy, Field, Model, ModelId};
/// # use modelshape::value::Type;
/// # use modelshape::{Schema, Shapes};
/// let schema = Schema::builder()
///     .model(
///         Model::root(ModelId(0), "user")
///             .with_field(Field::primitive("id", Type::I64).primary_key().auto(AutoStrategy::Increment))
///             .with_field(Field::primitive("name", Type::String)),
///     )
///     .build()
///     .unwrap();
///
/// let shapes = Shapes::new(schema);
/// let insert = shapes.insert_params(ModelId(0)).unwrap();
///
/// assert!(insert.get("id").unwrap().is_optional());
/// assert!(insert.get("name").unwrap().is_required());
/// ```
#[derive(Debug)]
pub struct Shapes {
    schema: Arc<Schema>,
    cache: Option<Cache>,
}

impl Shapes {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Builder::default().build(schema)
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The shape of `model` for `mode`.
    pub fn project(&self, model: impl Into<ModelId>, mode: Mode) -> Result<Arc<ComputedModel>> {
        let id = model.into();
        let compute = || {
            Projector::new(&self.schema)
                .project(id, mode)
                .map_err(|e| e.context(err!("failed to project {id:?} for `{mode}`")))
        };

        match &self.cache {
            Some(cache) => cache.get_or_try_insert_with(id, mode, compute),
            None => compute().map(Arc::new),
        }
    }

    /// A fully read record.
    pub fn model(&self, model: impl Into<ModelId>) -> Result<Arc<ComputedModel>> {
        self.project(model, Mode::All)
    }

    /// A fully read record with the relations named by `include` loaded.
    ///
    /// Not cached.
    pub fn model_with(&self, model: impl Into<ModelId>, include: &Include) -> Result<ComputedModel> {
        let id = model.into();
        Projector::new(&self.schema)
            .project_with(id, Mode::All, include)
            .map_err(|e| e.context(err!("failed to project {id:?} with includes")))
    }

    /// A read record in which every field, at every depth, is optional.
    pub fn model_partial(&self, model: impl Into<ModelId>) -> Result<ComputedModel> {
        Ok(self.model(model)?.as_ref().clone().into_partial())
    }

    /// Input accepted when creating a record.
    pub fn create_params(&self, model: impl Into<ModelId>) -> Result<Arc<ComputedModel>> {
        self.project(model, Mode::Create)
    }

    /// Input accepted when inserting a record.
    pub fn insert_params(&self, model: impl Into<ModelId>) -> Result<Arc<ComputedModel>> {
        self.project(model, Mode::Insert)
    }

    /// Fields the store computes and hands back after a write.
    pub fn virtuals(&self, model: impl Into<ModelId>) -> Result<Arc<ComputedModel>> {
        self.project(model, Mode::Virtuals)
    }

    /// The record returned by a create call given `input`: the input together
    /// with the fields the store generated.
    pub fn created(&self, model: impl Into<ModelId>, input: &ComputedModel) -> Result<ComputedModel> {
        let id = model.into();
        let virtuals = self.virtuals(id)?;

        shape::merge([input, virtuals.as_ref()])
            .map_err(|e| e.context(err!("invalid create input for {id:?}")))
    }

    /// The record returned by an insert call given `input`: the input together
    /// with the full read model.
    pub fn inserted(&self, model: impl Into<ModelId>, input: &ComputedModel) -> Result<ComputedModel> {
        let id = model.into();
        let all = self.model(id)?;

        shape::merge([input, all.as_ref()])
            .map_err(|e| e.context(err!("invalid insert input for {id:?}")))
    }

    /// Merges `models`. See [`shape::merge`].
    pub fn merged(&self, models: &[ComputedModel]) -> Result<ComputedModel> {
        shape::merge(models)
    }
}
