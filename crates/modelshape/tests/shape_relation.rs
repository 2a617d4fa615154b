use modelshape::schema::{AutoStrategy, Field, Model, ModelId, Relation};
use modelshape::shape::{project, relation, ComputedModel, FieldShape, Mode, ShapeTy};
use modelshape::value::Type;
use modelshape::Schema;
use pretty_assertions::assert_eq;

const USER: ModelId = ModelId(0);
const ORG: ModelId = ModelId(1);
const POST: ModelId = ModelId(2);
const TAG: ModelId = ModelId(3);

fn schema() -> Schema {
    Schema::builder()
        .model(
            Model::root(USER, "user")
                .with_field(
                    Field::primitive("id", Type::I64)
                        .primary_key()
                        .auto(AutoStrategy::Increment),
                )
                .with_field(Field::primitive("name", Type::String)),
        )
        .model(
            Model::root(ORG, "org")
                .with_field(Field::primitive("region", Type::String).primary_key())
                .with_field(Field::primitive("number", Type::U32).primary_key())
                .with_field(Field::primitive("slug", Type::String).nullable()),
        )
        .model(
            Model::root(POST, "post")
                .with_field(Field::primitive("id", Type::I64).primary_key())
                .with_field(Field::relation("author", Relation::one(USER)))
                .with_field(Field::relation("org", Relation::one(ORG)).nullable())
                .with_field(Field::relation(
                    "org_by_slug",
                    Relation::one(ORG).references(["slug"]),
                ))
                .with_field(Field::relation("tags", Relation::many(TAG))),
        )
        .model(
            Model::root(TAG, "tag")
                .with_field(Field::primitive("code", Type::String).primary_key()),
        )
        .build()
        .unwrap()
}

fn references(schema: &Schema, name: &str) -> Vec<String> {
    let field = schema.model(POST).field_by_name(name).unwrap();
    field.ty.expect_relation().references.clone()
}

#[test]
fn references_default_to_primary_key() {
    let schema = schema();

    assert_eq!(references(&schema, "author"), ["id"]);
    assert_eq!(references(&schema, "org"), ["region", "number"]);
    assert_eq!(references(&schema, "org_by_slug"), ["slug"]);
}

#[test]
fn reference_takes_target_column_types() {
    let schema = schema();
    let org = schema.model(POST).field_by_name("org").unwrap();

    let reference = relation::reference(&schema, org.ty.expect_relation());

    assert_eq!(
        reference,
        ComputedModel::new()
            .with("region", FieldShape::required(Type::String))
            .with("number", FieldShape::required(Type::U32))
    );
    assert_eq!(reference.names().collect::<Vec<_>>(), ["region", "number"]);
}

#[test]
fn referenced_columns_are_required_even_when_optional_on_target() {
    let schema = schema();

    // `user.id` is generated, so optional when inserting a user, but a
    // reference to a user must still carry it.
    let user_insert = project(&schema, USER, Mode::Insert).unwrap();
    assert!(user_insert.get("id").unwrap().is_optional());

    let post_insert = project(&schema, POST, Mode::Insert).unwrap();
    let author = post_insert.get("author").unwrap();
    assert!(author.is_optional());
    assert_eq!(
        author.ty,
        ShapeTy::Reference(ComputedModel::new().with("id", FieldShape::required(Type::I64)))
    );

    // Nullable target columns stay required, accepting null.
    let by_slug = post_insert.get("org_by_slug").unwrap();
    assert_eq!(
        by_slug.ty,
        ShapeTy::Reference(
            ComputedModel::new().with("slug", FieldShape::required(Type::String).nullable())
        )
    );
}

#[test]
fn relations_are_optional_on_write() {
    let schema = schema();

    for mode in [Mode::Create, Mode::Insert] {
        let computed = project(&schema, POST, mode).unwrap();

        for name in ["author", "org", "org_by_slug", "tags"] {
            let shape = computed.get(name).unwrap();
            assert!(shape.is_optional(), "{mode} {name}");
        }
    }
}

#[test]
fn nullable_relation_accepts_null() {
    let schema = schema();
    let computed = project(&schema, POST, Mode::Insert).unwrap();

    assert!(computed.get("org").unwrap().nullable);
    assert!(!computed.get("author").unwrap().nullable);
}

#[test]
fn many_relation_accepts_a_list_of_references() {
    let schema = schema();
    let computed = project(&schema, POST, Mode::Create).unwrap();

    assert_eq!(
        computed.get("tags").unwrap(),
        &FieldShape::optional(ShapeTy::list(ShapeTy::Reference(
            ComputedModel::new().with("code", FieldShape::required(Type::String))
        )))
    );
}

#[test]
fn relations_are_excluded_from_reads_and_virtuals() {
    let schema = schema();

    let all = project(&schema, POST, Mode::All).unwrap();
    assert_eq!(all.names().collect::<Vec<_>>(), ["id"]);

    let virtuals = project(&schema, POST, Mode::Virtuals).unwrap();
    assert!(virtuals.is_empty());
}

#[test]
fn flattened_reference_paths() {
    let schema = schema();
    let computed = project(&schema, POST, Mode::Insert).unwrap();
    let flat = computed.flatten();

    assert!(flat["org"].is_optional());
    assert!(flat["org.region"].is_required());
    assert!(flat["tags.code"].is_required());
    assert_eq!(computed.get_path("org.number"), Some(flat["org.number"]));
}
