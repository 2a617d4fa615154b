use crate::schema::{Model, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Relations to materialize when projecting a fully read record.
///
/// By default an [`All`](super::Mode::All) projection leaves relations out.
/// Naming a relation here adds it as the target model's own `All` projection.
/// Embeds are always present; naming one only lets nested relations inside
/// it be included.
///
/// ```
/// # use modelshape::Include;
/// let include = Include::new()
///     .relation("author")
///     .nested("comments", Include::new().relation("author"));
///
/// assert!(include.get("author").is_some());
/// assert!(include.get("title").is_none());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Include {
    relations: IndexMap<String, Include>,
}

impl Include {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn relation(self, name: impl Into<String>) -> Self {
        self.nested(name, Include::new())
    }

    /// Includes `name` and, within its target, everything `include` names.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, include: Include) -> Self {
        self.relations.insert(name.into(), include);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Include> {
        self.relations.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Include)> + '_ {
        self.relations
            .iter()
            .map(|(name, include)| (name.as_str(), include))
    }

    /// Checks that every named field exists on `model` and is a relation or
    /// an embed.
    ///
    /// Only the top level is checked; nested includes are checked when the
    /// projection descends into them.
    pub(crate) fn verify(&self, schema: &Schema, model: &Model) -> Result<()> {
        for name in self.relations.keys() {
            let Some(field) = model.field_by_name(name) else {
                return Err(Error::invalid_include(format!(
                    "`{}` has no field `{name}`",
                    model.name.upper_camel_case(),
                )));
            };

            if field.ty.is_primitive() {
                return Err(Error::invalid_include(format!(
                    "field `{}` is a column, not a relation",
                    field.full_name(schema),
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_include() {
        let include = Include::new()
            .relation("author")
            .nested("comments", Include::new().relation("author"));

        assert!(!include.is_empty());
        assert!(include.get("author").unwrap().is_empty());
        assert!(include
            .get("comments")
            .and_then(|comments| comments.get("author"))
            .is_some());

        let names: Vec<_> = include.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["author", "comments"]);
    }
}
