use modelshape::shape::{merge, FieldShape, Presence, ShapeTy};
use modelshape::value::{Type, Value, ValueRecord};
use modelshape::ComputedModel;
use pretty_assertions::assert_eq;

fn required(ty: impl Into<ShapeTy>) -> FieldShape {
    FieldShape::required(ty)
}

fn optional(ty: impl Into<ShapeTy>) -> FieldShape {
    FieldShape::optional(ty)
}

#[test]
fn merge_of_nothing_is_empty() {
    let none: [&ComputedModel; 0] = [];
    assert!(merge(none).unwrap().is_empty());
}

#[test]
fn merge_is_idempotent() {
    let model = ComputedModel::new()
        .with("id", optional(Type::I64))
        .with("name", required(Type::String).nullable());

    assert_eq!(merge([&model]).unwrap(), model);
    assert_eq!(merge([&model, &model]).unwrap(), model);
}

#[test]
fn required_wins() {
    let a = ComputedModel::new().with("x", required(Type::String));
    let b = ComputedModel::new().with("x", optional(Type::String));

    let expect = ComputedModel::new().with("x", required(Type::String));
    assert_eq!(merge([&a, &b]).unwrap(), expect);
    assert_eq!(merge([&b, &a]).unwrap(), expect);

    let both_optional = merge([&b, &b]).unwrap();
    assert_eq!(both_optional.get("x").unwrap().presence, Presence::Optional);
}

#[test]
fn union_of_fields() {
    let a = ComputedModel::new()
        .with("id", optional(Type::I64))
        .with("name", required(Type::String));
    let b = ComputedModel::new()
        .with("id", required(Type::I64))
        .with("email", optional(Type::String));

    let merged = merge([&a, &b]).unwrap();

    assert_eq!(
        merged,
        ComputedModel::new()
            .with("id", required(Type::I64))
            .with("name", required(Type::String))
            .with("email", optional(Type::String))
    );
    assert_eq!(merged.names().collect::<Vec<_>>(), ["id", "name", "email"]);
}

#[test]
fn merge_is_associative() {
    let a = ComputedModel::new()
        .with("id", optional(Type::I64))
        .with(
            "address",
            optional(ShapeTy::Embedded(
                ComputedModel::new().with("city", optional(Type::String).nullable()),
            )),
        );
    let b = ComputedModel::new()
        .with("id", required(Type::I64))
        .with("tags", optional(Type::list(Type::Unknown)));
    let c = ComputedModel::new()
        .with("tags", required(Type::list(Type::String)))
        .with(
            "address",
            required(ShapeTy::Embedded(
                ComputedModel::new()
                    .with("city", required(Type::String))
                    .with("zip", required(Type::String)),
            )),
        );

    let ab = merge([&a, &b]).unwrap();
    let bc = merge([&b, &c]).unwrap();

    assert_eq!(merge([&a, &b, &c]).unwrap(), merge([&ab, &c]).unwrap());
    assert_eq!(merge([&a, &b, &c]).unwrap(), merge([&a, &bc]).unwrap());
}

#[test]
fn nullable_narrows() {
    let a = ComputedModel::new().with("email", optional(Type::String).nullable());
    let b = ComputedModel::new().with("email", required(Type::String));

    let merged = merge([&a, &b]).unwrap();
    assert_eq!(merged.get("email"), Some(&required(Type::String)));
}

#[test]
fn nested_models_merge_by_path() {
    let a = ComputedModel::new().with(
        "address",
        required(ShapeTy::Embedded(
            ComputedModel::new().with("street", required(Type::String)),
        )),
    );
    let b = ComputedModel::new().with(
        "address",
        optional(ShapeTy::Embedded(
            ComputedModel::new().with("zip", optional(Type::String)),
        )),
    );

    let merged = merge([&a, &b]).unwrap();

    assert_eq!(merged.get("address").unwrap().presence, Presence::Required);
    assert!(merged.get_path("address.street").unwrap().is_required());
    assert!(merged.get_path("address.zip").unwrap().is_optional());
}

#[test]
fn scalar_conflict() {
    let a = ComputedModel::new().with("id", required(Type::String));
    let b = ComputedModel::new().with("id", required(Type::I64));

    let err = merge([&a, &b]).unwrap_err();
    assert!(err.is_merge_conflict());
    assert_eq!(
        err.to_string(),
        "merge conflict at `id`: String is incompatible with I64"
    );
}

#[test]
fn nested_conflict_names_the_path() {
    let a = ComputedModel::new().with(
        "address",
        required(ShapeTy::Embedded(
            ComputedModel::new().with("zip", required(Type::String)),
        )),
    );
    let b = ComputedModel::new().with(
        "address",
        required(ShapeTy::Embedded(
            ComputedModel::new().with("zip", required(Type::I64)),
        )),
    );

    let err = merge([&a, &b]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "merge conflict at `address.zip`: String is incompatible with I64"
    );
}

#[test]
fn object_kinds_must_agree() {
    let reference = ComputedModel::new().with("id", required(Type::I64));

    let a = ComputedModel::new().with("author", optional(ShapeTy::Reference(reference.clone())));
    let b = ComputedModel::new().with("author", optional(ShapeTy::Related(reference)));

    let err = merge([&a, &b]).unwrap_err();
    assert!(err.is_merge_conflict());
    assert_eq!(
        err.to_string(),
        "merge conflict at `author`: relation reference is incompatible with related model"
    );
}

#[test]
fn object_and_scalar_conflict() {
    let a = ComputedModel::new().with("meta", required(Type::String));
    let b = ComputedModel::new().with("meta", required(ShapeTy::Object(ComputedModel::new())));

    assert!(merge([&a, &b]).unwrap_err().is_merge_conflict());
}

#[test]
fn merge_method_matches_function() {
    let a = ComputedModel::new().with("x", optional(Type::Bool));
    let b = ComputedModel::new().with("y", required(Type::Bool));

    assert_eq!(a.merge(&b).unwrap(), merge([&a, &b]).unwrap());
}

#[test]
fn value_shape_is_required() {
    let record = ValueRecord::new()
        .with("name", "Ada")
        .with("age", 36i64)
        .with("nickname", Value::Null)
        .with("tags", Value::List(vec![]))
        .with("address", ValueRecord::new().with("city", "London"));

    let computed = ComputedModel::try_from(&record).unwrap();

    assert_eq!(
        computed,
        ComputedModel::new()
            .with("name", required(Type::String))
            .with("age", required(Type::I64))
            .with("nickname", required(Type::Null).nullable())
            .with("tags", required(Type::list(Type::Unknown)))
            .with(
                "address",
                required(ShapeTy::Object(
                    ComputedModel::new().with("city", required(Type::String))
                ))
            )
    );
}

#[test]
fn value_merges_with_model() {
    let model = ComputedModel::new()
        .with("id", optional(Type::I64))
        .with("nickname", optional(Type::String).nullable())
        .with("tags", optional(Type::list(Type::String)))
        .with(
            "address",
            required(ShapeTy::Embedded(
                ComputedModel::new()
                    .with("city", required(Type::String))
                    .with("zip", optional(Type::String)),
            )),
        );

    let record = ValueRecord::new()
        .with("nickname", Value::Null)
        .with("tags", Value::List(vec![]))
        .with("address", ValueRecord::new().with("city", "London"));

    let merged = merge([&ComputedModel::try_from(&record).unwrap(), &model]).unwrap();

    assert_eq!(
        merged,
        ComputedModel::new()
            .with("nickname", required(Type::Null).nullable())
            .with("tags", required(Type::list(Type::String)))
            .with(
                "address",
                required(ShapeTy::Embedded(
                    ComputedModel::new()
                        .with("city", required(Type::String))
                        .with("zip", optional(Type::String)),
                ))
            )
            .with("id", optional(Type::I64))
    );
}

#[test]
fn null_value_conflicts_with_non_nullable_field() {
    let model = ComputedModel::new().with("name", required(Type::String));
    let record = ValueRecord::new().with("name", Value::Null);

    let err = merge([&ComputedModel::try_from(&record).unwrap(), &model]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "merge conflict at `name`: Null is incompatible with String"
    );
}

#[test]
fn list_of_records_merges_with_list_of_references() {
    let model = ComputedModel::new().with(
        "tags",
        optional(ShapeTy::list(ShapeTy::Reference(
            ComputedModel::new().with("code", required(Type::String)),
        ))),
    );

    let record = ValueRecord::new().with(
        "tags",
        Value::List(vec![Value::Record(ValueRecord::new().with("code", "rust"))]),
    );

    let merged = merge([&model, &ComputedModel::try_from(&record).unwrap()]).unwrap();

    assert_eq!(
        merged.get("tags").unwrap(),
        &required(ShapeTy::list(ShapeTy::Reference(
            ComputedModel::new().with("code", required(Type::String))
        )))
    );
}

#[test]
fn null_value_stays_null_with_nullable_field() {
    let value = ComputedModel::new().with("name", required(Type::Null).nullable());
    let model = ComputedModel::new().with("name", optional(Type::String).nullable());

    let expected = ComputedModel::new().with("name", required(Type::Null).nullable());
    assert_eq!(merge([&value, &model]).unwrap(), expected);
    assert_eq!(merge([&model, &value]).unwrap(), expected);
}

#[test]
fn null_value_conflicts_with_non_nullable_field_in_any_order() {
    let value = ComputedModel::new().with("name", required(Type::Null).nullable());
    let nullable = ComputedModel::new().with("name", optional(Type::String).nullable());
    let non_null = ComputedModel::new().with("name", required(Type::String));

    let orders = [
        [&value, &nullable, &non_null],
        [&value, &non_null, &nullable],
        [&nullable, &value, &non_null],
        [&nullable, &non_null, &value],
        [&non_null, &value, &nullable],
        [&non_null, &nullable, &value],
    ];

    for [a, b, c] in orders {
        assert!(merge([a, b, c]).unwrap_err().is_merge_conflict());

        let left = a.merge(b).and_then(|ab| ab.merge(c));
        assert!(left.unwrap_err().is_merge_conflict());

        let right = b.merge(c).and_then(|bc| a.merge(&bc));
        assert!(right.unwrap_err().is_merge_conflict());
    }
}

#[test]
fn list_of_records_merges_every_item() {
    let record = ValueRecord::new().with(
        "lines",
        Value::List(vec![
            Value::Record(ValueRecord::new().with("sku", "a-1")),
            Value::Record(ValueRecord::new().with("sku", "b-2").with("qty", 3i64)),
            Value::Null,
        ]),
    );

    let computed = ComputedModel::try_from(&record).unwrap();

    assert_eq!(
        computed.get("lines").unwrap(),
        &required(ShapeTy::list(ShapeTy::Object(
            ComputedModel::new()
                .with("sku", required(Type::String))
                .with("qty", optional(Type::I64))
        )))
    );
}

#[test]
fn list_of_records_with_inconsistent_items_conflicts() {
    let record = ValueRecord::new().with(
        "lines",
        Value::List(vec![
            Value::Record(ValueRecord::new().with("sku", "a-1")),
            Value::Record(ValueRecord::new().with("sku", 7i64)),
        ]),
    );

    let err = ComputedModel::try_from(&record).unwrap_err();
    assert!(err.is_merge_conflict());
    assert_eq!(
        err.to_string(),
        "merge conflict at `lines.sku`: String is incompatible with I64"
    );
}

#[test]
fn list_mixing_records_and_scalars_conflicts() {
    let record = ValueRecord::new().with(
        "lines",
        Value::List(vec![
            Value::Record(ValueRecord::new().with("sku", "a-1")),
            Value::from("loose"),
        ]),
    );

    let err = ComputedModel::try_from(&record).unwrap_err();
    assert!(err.is_merge_conflict());
}
