use super::{Model, ModelId, Schema};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Collects models and turns them into a verified [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<Model>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model.
    pub fn model(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Registers several models.
    pub fn models(&mut self, models: impl IntoIterator<Item = Model>) -> &mut Self {
        self.models.extend(models);
        self
    }

    /// Builds the schema, draining the registered models.
    ///
    /// Relations without explicit references are resolved to their target's
    /// primary key, then the whole graph is verified. Any integrity problem is
    /// reported here, once; projections never re-check.
    pub fn build(&mut self) -> Result<Schema> {
        let mut models = IndexMap::with_capacity(self.models.len());

        for model in self.models.drain(..) {
            let id = model.id;
            if id == ModelId::placeholder() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` has no id",
                    model.name.upper_camel_case()
                )));
            }

            if let Some(prev) = models.insert(id, model) {
                return Err(Error::invalid_schema(format!(
                    "models `{}` and `{}` share {id:?}",
                    prev.name.upper_camel_case(),
                    models[&id].name.upper_camel_case(),
                )));
            }
        }

        let mut schema = Schema { models };
        schema.resolve_default_references();
        schema.verify()?;

        log::debug!("built schema; models={}", schema.models.len());

        Ok(schema)
    }
}

impl Schema {
    /// Relations that do not name their referenced columns reference the
    /// target's primary key.
    fn resolve_default_references(&mut self) {
        // Targets are read while relations are written, so collect first.
        let mut resolved = vec![];

        for (model_index, model) in self.models.values().enumerate() {
            for (field_index, field) in model.fields.iter().enumerate() {
                let Some(relation) = field.ty.as_relation() else {
                    continue;
                };

                if !relation.references.is_empty() {
                    continue;
                }

                // A missing target is reported by verification.
                let Some(target) = self.models.get(&relation.target) else {
                    continue;
                };

                let references: Vec<_> = target
                    .primary_key_fields()
                    .map(|field| field.name.clone())
                    .collect();

                resolved.push((model_index, field_index, references));
            }
        }

        for (model_index, field_index, references) in resolved {
            if let Some(relation) = self.models[model_index].fields[field_index]
                .ty
                .as_relation_mut()
            {
                relation.references = references;
            }
        }
    }
}
