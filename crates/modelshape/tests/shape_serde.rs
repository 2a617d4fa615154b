#![cfg(feature = "serde")]

use modelshape::schema::{AutoStrategy, Field, Model, ModelId};
use modelshape::shape::{project, FieldShape, Mode, ShapeTy};
use modelshape::value::Type;
use modelshape::{ComputedModel, Schema};
use pretty_assertions::assert_eq;
use serde_json::json;

const USER: ModelId = ModelId(0);

#[test]
fn computed_model_as_json() {
    let schema = Schema::builder()
        .model(
            Model::root(USER, "user")
                .with_field(
                    Field::primitive("id", Type::I64)
                        .primary_key()
                        .auto(AutoStrategy::Increment),
                )
                .with_field(Field::primitive("email", Type::String).nullable()),
        )
        .build()
        .unwrap();

    let insert = project(&schema, USER, Mode::Insert).unwrap();

    assert_eq!(
        serde_json::to_value(&insert).unwrap(),
        json!({
            "id": { "presence": "optional", "nullable": false, "ty": { "scalar": "I64" } },
            "email": { "presence": "optional", "nullable": true, "ty": { "scalar": "String" } },
        })
    );
}

#[test]
fn nested_shape_from_json() {
    let computed = ComputedModel::new().with(
        "tags",
        FieldShape::optional(ShapeTy::list(ShapeTy::Reference(
            ComputedModel::new().with("code", FieldShape::required(Type::String)),
        ))),
    );

    let json = serde_json::to_string(&computed).unwrap();
    let parsed: ComputedModel = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, computed);
    assert_eq!(parsed.names().collect::<Vec<_>>(), ["tags"]);
}

#[test]
fn mode_names() {
    assert_eq!(serde_json::to_value(Mode::Virtuals).unwrap(), json!("virtuals"));
    assert_eq!(
        serde_json::from_value::<Mode>(json!("insert")).unwrap(),
        Mode::Insert
    );
}
