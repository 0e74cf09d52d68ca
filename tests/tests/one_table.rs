//! Classes built from tables without relationships.

use tests::*;

use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablesmith_core::{
    builder,
    model::{FieldRole, FieldTy},
    ScalarType,
};

async fn user_without_relationships(s: impl Setup) {
    let schema = SchemaDef::new().table(
        TableDef::new("user")
            .pk("id", "integer")
            .column("name", "text")
            .column("email", "text")
            .unique("email"),
    );

    let reader = s.reader(&schema).await.unwrap();
    let class = builder::build_class(&reader, "user").await.unwrap();

    let summary: Vec<_> = class
        .fields
        .iter()
        .map(|field| (&field.name[..], &field.ty, field.role))
        .collect();

    assert_eq!(
        summary,
        [
            ("id", &FieldTy::Scalar(ScalarType::I32), FieldRole::Identifier),
            ("name", &FieldTy::Scalar(ScalarType::String), FieldRole::Scalar),
            ("email", &FieldTy::Scalar(ScalarType::String), FieldRole::Scalar),
        ]
    );
    assert!(!class.has_relations());
    assert!(class.field("email").unwrap().column().unwrap().unique);
}

async fn varchar_and_timestamp_columns(s: impl Setup) {
    let schema = SchemaDef::new().table(
        TableDef::new("user")
            .pk("id", "integer")
            .varchar("user_name", 64)
            .required("created_at", "timestamp without time zone"),
    );

    let reader = s.reader(&schema).await.unwrap();
    let class = assert_ok!(builder::build_class(&reader, "user").await);

    assert_eq!(class.name, "User");
    assert_eq!(class.table_name(), Some("user"));
    assert!(class.no_args_constructor);

    let summary: Vec<_> = class
        .fields
        .iter()
        .map(|field| (&field.name[..], &field.ty, field.role))
        .collect();

    assert_eq!(
        summary,
        [
            ("id", &FieldTy::Scalar(ScalarType::I32), FieldRole::Identifier),
            ("userName", &FieldTy::Scalar(ScalarType::String), FieldRole::Scalar),
            ("createdAt", &FieldTy::Scalar(ScalarType::Timestamp), FieldRole::Scalar),
        ]
    );

    let name = class.field("userName").unwrap().column().unwrap();
    assert_eq!(name.column, "user_name");
    assert_eq!(name.max_length, Some(64));
    assert!(name.nullable);

    let created_at = class.field("createdAt").unwrap().column().unwrap();
    assert!(!created_at.nullable);
}

async fn primary_key_is_named_id(s: impl Setup) {
    let schema = SchemaDef::new().table(
        TableDef::new("invoice")
            .pk("invoice_no", "bigint")
            .column("amount", "numeric"),
    );

    let reader = s.reader(&schema).await.unwrap();
    let class = builder::build_class(&reader, "invoice").await.unwrap();

    let id = class.identifier().unwrap();
    assert_eq!(id.name, "id");
    assert_eq!(id.ty, FieldTy::Scalar(ScalarType::I64));
    assert_eq!(id.column().unwrap().column, "invoice_no");
    assert_eq!(class.fields_with_role(FieldRole::Identifier).count(), 1);
    assert_eq!(
        class.field("amount").unwrap().ty,
        FieldTy::Scalar(ScalarType::Decimal)
    );
}

async fn unrecognized_type_is_opaque(s: impl Setup) {
    let schema = SchemaDef::new().table(
        TableDef::new("device")
            .pk("id", "integer")
            .column("address", "inet")
            .column("active", "boolean"),
    );

    let reader = s.reader(&schema).await.unwrap();
    let class = builder::build_class(&reader, "device").await.unwrap();

    let address = class.field("address").unwrap();
    assert_eq!(address.ty, FieldTy::Scalar(ScalarType::Unknown("inet".to_string())));
    assert_eq!(address.role, FieldRole::Scalar);
    assert!(address.is_unmapped());

    let unmapped: Vec<_> = class.unmapped_fields().map(|f| &f.name[..]).collect();
    assert_eq!(unmapped, ["address"]);

    assert_eq!(class.field("active").unwrap().ty, FieldTy::Scalar(ScalarType::Bool));
}

async fn user_defined_type_keeps_its_name(s: impl Setup) {
    let schema = SchemaDef::new()
        .enum_type("mood", &["sad", "ok", "happy"])
        .table(
            TableDef::new("person")
                .pk("id", "integer")
                .required("mood", "mood"),
        );

    let reader = s.reader(&schema).await.unwrap();
    let class = builder::build_class(&reader, "person").await.unwrap();

    let mood = class.field("mood").unwrap();
    assert_eq!(mood.ty, FieldTy::Scalar(ScalarType::Unknown("mood".to_string())));
    assert_eq!(mood.column().unwrap().db_type, "mood");
    assert!(mood.is_unmapped());
}

async fn scalar_type_mapping(s: impl Setup) {
    let schema = SchemaDef::new().table(
        TableDef::new("sample")
            .pk("id", "smallint")
            .column("a", "integer")
            .column("b", "bigint")
            .column("c", "text")
            .column("d", "real")
            .column("e", "double precision")
            .column("f", "date")
            .column("g", "time without time zone")
            .column("h", "numeric"),
    );

    let reader = s.reader(&schema).await.unwrap();
    let class = builder::build_class(&reader, "sample").await.unwrap();

    let tys: Vec<_> = class
        .fields
        .iter()
        .map(|field| field.ty.as_scalar().unwrap().clone())
        .collect();

    assert_eq!(
        tys,
        [
            ScalarType::I16,
            ScalarType::I32,
            ScalarType::I64,
            ScalarType::String,
            ScalarType::F32,
            ScalarType::F64,
            ScalarType::Date,
            ScalarType::Time,
            ScalarType::Decimal,
        ]
    );
}

async fn building_twice_is_identical(s: impl Setup) {
    let schema = SchemaDef::new()
        .table(TableDef::new("user").pk("id", "integer").column("name", "text"))
        .table(
            TableDef::new("order")
                .pk("id", "integer")
                .fk("user_id", "integer", "user", "id"),
        );

    let reader = s.reader(&schema).await.unwrap();

    for table in ["user", "order"] {
        let first = builder::build_class(&reader, table).await.unwrap();
        let second = builder::build_class(&reader, table).await.unwrap();
        assert_eq!(first, second);
    }
}

async fn field_names_are_unique(s: impl Setup) {
    let schema = SchemaDef::new()
        .table(
            TableDef::new("customer")
                .pk("customer_id", "integer")
                .column("first_name", "text")
                .column("last_name", "text"),
        )
        .table(
            TableDef::new("address")
                .pk("id", "integer")
                .fk("customer_id", "integer", "customer", "customer_id"),
        )
        .table(
            TableDef::new("account")
                .pk("id", "integer")
                .fk("owner_id", "integer", "customer", "customer_id")
                .unique("owner_id"),
        );

    let reader = s.reader(&schema).await.unwrap();

    for table in ["customer", "address", "account"] {
        let class = builder::build_class(&reader, table).await.unwrap();
        let names: Vec<_> = class.fields.iter().map(|f| &f.name[..]).collect();
        assert_unique!(names);
    }
}

tests!(
    user_without_relationships,
    varchar_and_timestamp_columns,
    primary_key_is_named_id,
    unrecognized_type_is_opaque,
    user_defined_type_keeps_its_name,
    scalar_type_mapping,
    building_twice_is_identical,
    field_names_are_unique,
);
