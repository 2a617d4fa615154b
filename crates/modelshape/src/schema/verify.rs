mod embeds_are_acyclic;

use super::{Field, FieldTy, Model, Schema};
use crate::value::{Type, Value};
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for model in self.schema.models() {
            self.verify_field_ids(model)?;
            self.verify_field_names_are_unique(model)?;

            for field in &model.fields {
                match &field.ty {
                    FieldTy::Primitive(primitive) => {
                        self.verify_auto(model, field, &primitive.ty)?;
                        self.verify_default(model, field, &primitive.ty)?;
                    }
                    FieldTy::Embedded(_) | FieldTy::Relation(_) => {
                        self.verify_not_generated(model, field)?;
                    }
                }

                match &field.ty {
                    FieldTy::Embedded(_) => self.verify_embed_target(model, field)?,
                    FieldTy::Relation(_) => self.verify_relation(model, field)?,
                    FieldTy::Primitive(_) => {}
                }
            }
        }

        self.verify_embeds_are_acyclic()?;
        Ok(())
    }

    fn verify_field_ids(&self, model: &Model) -> Result<()> {
        for (index, field) in model.fields.iter().enumerate() {
            if field.id != model.id.field(index) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` has {:?} but is field {index} of `{}`; add fields with `Model::with_field`",
                    field.name,
                    field.id,
                    model.name.upper_camel_case(),
                )));
            }
        }

        Ok(())
    }

    fn verify_field_names_are_unique(&self, model: &Model) -> Result<()> {
        let mut names = HashSet::new();

        for field in &model.fields {
            if !names.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` in model `{}`",
                    field.name,
                    model.name.upper_camel_case(),
                )));
            }
        }

        Ok(())
    }

    fn verify_embed_target(&self, model: &Model, field: &Field) -> Result<()> {
        let embedded = field.ty.expect_embedded();

        match self.schema.get_model(embedded.target) {
            Some(target) if target.is_embedded() => Ok(()),
            Some(target) => Err(Error::invalid_schema(format!(
                "field `{}` embeds `{}`, which is not an embedded model",
                full_name(model, field),
                target.name.upper_camel_case(),
            ))),
            None => Err(Error::invalid_schema(format!(
                "field `{}` embeds a model that was not registered with the schema",
                full_name(model, field),
            ))),
        }
    }

    fn verify_relation(&self, model: &Model, field: &Field) -> Result<()> {
        let relation = field.ty.expect_relation();

        let target = match self.schema.get_model(relation.target) {
            Some(target) if target.is_root() => target,
            Some(target) => {
                return Err(Error::invalid_schema(format!(
                    "field `{}` references `{}`, which is an embedded model; \
                     relations must target root models",
                    full_name(model, field),
                    target.name.upper_camel_case(),
                )));
            }
            None => {
                return Err(Error::invalid_schema(format!(
                    "field `{}` references a model that was not registered with the schema",
                    full_name(model, field),
                )));
            }
        };

        if relation.references.is_empty() {
            return Err(Error::invalid_schema(format!(
                "field `{}` does not name referenced columns and `{}` has no primary key",
                full_name(model, field),
                target.name.upper_camel_case(),
            )));
        }

        let mut seen = HashSet::new();

        for column in &relation.references {
            if !seen.insert(column.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "field `{}` references column `{column}` more than once",
                    full_name(model, field),
                )));
            }

            match target.field_by_name(column) {
                Some(referenced) if referenced.ty.is_primitive() => {}
                Some(_) => {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` references `{}::{column}`, which is not a column",
                        full_name(model, field),
                        target.name.upper_camel_case(),
                    )));
                }
                None => {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` references column `{column}`, which does not exist on `{}`",
                        full_name(model, field),
                        target.name.upper_camel_case(),
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_not_generated(&self, model: &Model, field: &Field) -> Result<()> {
        if field.auto.is_some() {
            return Err(Error::invalid_schema(format!(
                "field `{}` is not a column and cannot be `auto`",
                full_name(model, field),
            )));
        }

        if field.default.is_some() {
            return Err(Error::invalid_schema(format!(
                "field `{}` is not a column and cannot have a default",
                full_name(model, field),
            )));
        }

        Ok(())
    }

    fn verify_auto(&self, model: &Model, field: &Field, ty: &Type) -> Result<()> {
        match &field.auto {
            Some(auto) if auto.is_increment() && !ty.is_integer() => {
                Err(Error::invalid_schema(format!(
                    "field `{}` of type {ty} cannot auto-increment; only integer columns can",
                    full_name(model, field),
                )))
            }
            Some(auto) if auto.is_uuid() && !(*ty == Type::Uuid || ty.is_string()) => {
                Err(Error::invalid_schema(format!(
                    "field `{}` of type {ty} cannot hold an auto-generated UUID",
                    full_name(model, field),
                )))
            }
            _ => Ok(()),
        }
    }

    fn verify_default(&self, model: &Model, field: &Field, ty: &Type) -> Result<()> {
        let Some(default) = &field.default else {
            return Ok(());
        };

        if default.is_null() {
            if field.nullable {
                return Ok(());
            }

            return Err(Error::invalid_schema(format!(
                "field `{}` is not nullable but defaults to null",
                full_name(model, field),
            )));
        }

        if !default_fits(default, ty) {
            return Err(Error::invalid_schema(format!(
                "default for field `{}` has type {}, expected {ty}",
                full_name(model, field),
                default.infer_ty(),
            )));
        }

        Ok(())
    }
}

fn default_fits(default: &Value, ty: &Type) -> bool {
    match (default, ty) {
        (Value::List(items), Type::List(item_ty)) => items
            .iter()
            .all(|item| item.is_null() || default_fits(item, item_ty)),
        (Value::Record(_), _) => false,
        _ => default.infer_ty().unify(ty).as_ref() == Some(ty),
    }
}

fn full_name(model: &Model, field: &Field) -> String {
    format!("{}::{}", model.name.upper_camel_case(), field.name)
}
