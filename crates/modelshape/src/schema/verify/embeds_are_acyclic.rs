use super::*;
use crate::schema::ModelId;

use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

impl Verify<'_> {
    /// Projection recurses through embeds, so a model must never embed
    /// itself, directly or through other embedded models.
    pub(super) fn verify_embeds_are_acyclic(&self) -> Result<()> {
        let mut state = HashMap::new();
        let mut stack = vec![];

        for model in self.schema.models() {
            self.visit_embeds(model.id, &mut state, &mut stack)?;
        }

        Ok(())
    }

    fn visit_embeds(
        &self,
        id: ModelId,
        state: &mut HashMap<ModelId, Visit>,
        stack: &mut Vec<ModelId>,
    ) -> Result<()> {
        match state.get(&id) {
            Some(Visit::Done) => return Ok(()),
            Some(Visit::InProgress) => {
                let start = stack.iter().position(|entry| *entry == id).unwrap_or(0);
                let cycle = stack[start..]
                    .iter()
                    .chain(Some(&id))
                    .map(|id| self.schema.model(*id).name.upper_camel_case())
                    .collect::<Vec<_>>()
                    .join(" -> ");

                return Err(Error::invalid_schema(format!("embed cycle: {cycle}")));
            }
            None => {}
        }

        state.insert(id, Visit::InProgress);
        stack.push(id);

        let model = self.schema.model(id);
        for field in &model.fields {
            if let FieldTy::Embedded(embedded) = &field.ty {
                self.visit_embeds(embedded.target, state, stack)?;
            }
        }

        stack.pop();
        state.insert(id, Visit::Done);

        Ok(())
    }
}
