use super::{column, embedded, relation, ComputedModel, Include, Mode};
use crate::schema::{FieldTy, Model, ModelId, Schema};
use crate::{Error, Result};

/// Projects models of one schema.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    schema: &'a Schema,
}

/// Computes the shape of `model` for `mode`.
pub fn project(schema: &Schema, model: impl Into<ModelId>, mode: Mode) -> Result<ComputedModel> {
    Projector::new(schema).project(model, mode)
}

impl<'a> Projector<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn project(&self, model: impl Into<ModelId>, mode: Mode) -> Result<ComputedModel> {
        self.project_with(model, mode, &Include::default())
    }

    /// Computes the shape of `model` for `mode`, loading the relations named
    /// by `include`.
    ///
    /// Only [`Mode::All`] accepts a non-empty include.
    pub fn project_with(
        &self,
        model: impl Into<ModelId>,
        mode: Mode,
        include: &Include,
    ) -> Result<ComputedModel> {
        let id = model.into();

        let Some(model) = self.schema.get_model(id) else {
            crate::bail!("no model registered with {id:?}");
        };

        if !include.is_empty() && mode != Mode::All {
            return Err(Error::invalid_include(format!(
                "relations can only be included in `all` projections, not `{mode}`"
            )));
        }

        self.project_model(model, mode, Some(include))
    }

    pub(crate) fn project_model(
        &self,
        model: &Model,
        mode: Mode,
        include: Option<&Include>,
    ) -> Result<ComputedModel> {
        if let Some(include) = include {
            include.verify(self.schema, model)?;
        }

        let mut computed = ComputedModel::new();

        for field in &model.fields {
            let nested = include.and_then(|include| include.get(&field.name));

            let shape = match &field.ty {
                FieldTy::Primitive(_) => column::resolve(field, mode),
                FieldTy::Embedded(_) => Some(embedded::resolve(self, field, mode, nested)?),
                FieldTy::Relation(_) => match nested {
                    Some(nested) if mode == Mode::All => {
                        Some(relation::materialize(self, field, nested)?)
                    }
                    _ => relation::resolve(self.schema, field, mode),
                },
            };

            if let Some(shape) = shape {
                computed.insert(field.name.clone(), shape);
            }
        }

        Ok(computed)
    }
}
