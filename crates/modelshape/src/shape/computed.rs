use super::merge::merge_into;
use super::{FieldShape, Presence, ShapeTy};
use crate::value::{Type, Value, ValueRecord};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The fields a record carries for one operation, keyed by field name.
///
/// Nested models (embeds, relation references, loaded relations) live inside
/// their parent field's [`ShapeTy`]. [`flatten`](Self::flatten) gives the
/// dot-joined path view. Equality ignores field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComputedModel {
    fields: IndexMap<String, FieldShape>,
}

impl ComputedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning the shape it replaced.
    pub fn insert(&mut self, name: impl Into<String>, shape: FieldShape) -> Option<FieldShape> {
        self.fields.insert(name.into(), shape)
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, shape: FieldShape) -> Self {
        self.insert(name, shape);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldShape> {
        self.fields.get(name)
    }

    pub(super) fn get_mut(&mut self, name: &str) -> Option<&mut FieldShape> {
        self.fields.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Looks up a dot-joined path such as `address.city`.
    ///
    /// Paths descend through object shapes and through lists of objects.
    pub fn get_path(&self, path: &str) -> Option<&FieldShape> {
        let mut steps = path.split('.');
        let mut shape = self.get(steps.next()?)?;

        for step in steps {
            shape = nested_model(&shape.ty)?.get(step)?;
        }

        Some(shape)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldShape)> + '_ {
        self.fields.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    /// Every field at every depth, keyed by its dot-joined path.
    ///
    /// A nested object appears under its own path, followed by its fields.
    pub fn flatten(&self) -> IndexMap<String, &FieldShape> {
        let mut out = IndexMap::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut IndexMap<String, &'a FieldShape>) {
        for (name, shape) in &self.fields {
            let path = join_path(prefix, name);

            out.insert(path.clone(), shape);

            if let Some(nested) = nested_model(&shape.ty) {
                nested.flatten_into(&path, out);
            }
        }
    }

    /// The deep-partial form: every field at every depth becomes optional.
    #[must_use]
    pub fn into_partial(self) -> Self {
        self.fields
            .into_iter()
            .map(|(name, shape)| (name, shape.into_partial()))
            .collect()
    }
}

fn nested_model(ty: &ShapeTy) -> Option<&ComputedModel> {
    match ty {
        ShapeTy::List(item) => nested_model(item),
        ty => ty.as_model(),
    }
}

impl FromIterator<(String, FieldShape)> for ComputedModel {
    fn from_iter<T: IntoIterator<Item = (String, FieldShape)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComputedModel {
    type Item = (&'a String, &'a FieldShape);
    type IntoIter = indexmap::map::Iter<'a, String, FieldShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// The shape of a concrete record: every field it carries is required.
///
/// A list of records takes the merged shape of all its records; a field that
/// only some records carry is optional. Records disagreeing on a field's type
/// fail with a merge conflict.
impl TryFrom<&ValueRecord> for ComputedModel {
    type Error = Error;

    fn try_from(record: &ValueRecord) -> Result<Self> {
        infer_record(record, "")
    }
}

/// Joins a field name onto a dot-separated path.
pub(super) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn infer_record(record: &ValueRecord, prefix: &str) -> Result<ComputedModel> {
    record
        .iter()
        .map(|(name, value)| {
            let shape = infer_field(value, &join_path(prefix, name))?;
            Ok((name.to_string(), shape))
        })
        .collect()
}

fn infer_field(value: &Value, path: &str) -> Result<FieldShape> {
    Ok(match value {
        Value::Null => FieldShape::required(Type::Null).nullable(),
        value => FieldShape::required(infer_ty(value, path)?),
    })
}

fn infer_ty(value: &Value, path: &str) -> Result<ShapeTy> {
    Ok(match value {
        Value::Record(record) => ShapeTy::Object(infer_record(record, path)?),
        Value::List(items) if items.iter().any(Value::is_record) => {
            ShapeTy::list(ShapeTy::Object(infer_list_item(items, path)?))
        }
        value => ShapeTy::Scalar(value.infer_ty()),
    })
}

fn infer_list_item(items: &[Value], path: &str) -> Result<ComputedModel> {
    let mut records = vec![];

    for item in items.iter().filter(|item| !item.is_null()) {
        let Some(record) = item.as_record() else {
            return Err(Error::merge_conflict(
                path,
                "object",
                item.infer_ty().to_string(),
            ));
        };
        records.push(infer_record(record, path)?);
    }

    let mut item = ComputedModel::new();
    for record in &records {
        merge_into(&mut item, record, path)?;
    }

    for (name, shape) in &mut item.fields {
        if records.iter().any(|record| !record.contains(name)) {
            shape.presence = Presence::Optional;
        }
    }

    Ok(item)
}
