//! End-to-end transformation tests over a small school schema.

use modelgen_codegen::{Cardinality, EndpointKind, Entity, ModelGenerator, ModelKind, SchemaContext};
use modelgen_core::options::{GeneratorOptions, MatchPattern, RowVersionMapping};
use modelgen_core::schema::{
    ColumnSchema, DatabaseSchema, ForeignKeySchema, IndexSchema, PrimaryKeySchema, TableSchema,
    TemporalSchema, UniqueConstraintSchema,
};
use modelgen_core::{SqlTypeMapper, ValueType};

fn int_column(name: &str) -> ColumnSchema {
    ColumnSchema::new(name, "int")
}

fn text_column(name: &str) -> ColumnSchema {
    ColumnSchema::new(name, "nvarchar(100)")
}

fn primary_key(constraint: &str, columns: &[&str]) -> Option<PrimaryKeySchema> {
    Some(PrimaryKeySchema {
        name: Some(constraint.to_string()),
        columns: columns.iter().map(|c| c.to_string()).collect(),
    })
}

fn foreign_key(
    name: Option<&str>,
    columns: &[&str],
    principal_table: &str,
    principal_columns: &[&str],
) -> ForeignKeySchema {
    ForeignKeySchema {
        name: name.map(str::to_string),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        principal_schema: Some("dbo".to_string()),
        principal_table: principal_table.to_string(),
        principal_columns: principal_columns.iter().map(|c| c.to_string()).collect(),
    }
}

/// Instructor / Department / OfficeAssignment, with Department holding a
/// nullable foreign key to Instructor and OfficeAssignment holding two
/// role-prefixed foreign keys to Instructor.
fn school_schema() -> DatabaseSchema {
    let mut instructor = TableSchema::new("Instructor", Some("dbo"));
    instructor.columns = vec![int_column("Id"), text_column("Name")];
    instructor.primary_key = primary_key("PK_Instructor", &["Id"]);

    let mut department = TableSchema::new("Department", Some("dbo"));
    department.columns = vec![
        int_column("Id"),
        text_column("Name"),
        int_column("InstructorId").nullable(),
    ];
    department.primary_key = primary_key("PK_Department", &["Id"]);
    department.foreign_keys = vec![foreign_key(
        Some("FK_Department_Instructor"),
        &["InstructorId"],
        "Instructor",
        &["Id"],
    )];

    let mut office = TableSchema::new("OfficeAssignment", Some("dbo"));
    office.columns = vec![
        int_column("Id"),
        int_column("PrimaryInstructorId"),
        int_column("BackupInstructorId").nullable(),
    ];
    office.primary_key = primary_key("PK_OfficeAssignment", &["Id"]);
    office.foreign_keys = vec![
        foreign_key(None, &["PrimaryInstructorId"], "Instructor", &["Id"]),
        foreign_key(None, &["BackupInstructorId"], "Instructor", &["Id"]),
    ];

    let mut schema = DatabaseSchema::new("School");
    schema.tables = vec![instructor, department, office];
    schema
}

fn generate(schema: &DatabaseSchema, options: &GeneratorOptions) -> SchemaContext {
    let mapper = SqlTypeMapper;
    let mut generator = ModelGenerator::new(options, &mapper);
    generator.generate(schema).unwrap()
}

fn entity<'a>(context: &'a SchemaContext, name: &str) -> &'a Entity {
    context
        .entity_by_name(name)
        .unwrap_or_else(|| panic!("entity {name} not generated"))
}

#[test]
fn test_nullable_foreign_key_yields_zero_or_one() {
    let context = generate(&school_schema(), &GeneratorOptions::default());

    let department = entity(&context, "Department");
    let relationship = department
        .relationships
        .iter()
        .find(|r| r.is_foreign_key)
        .unwrap();

    assert_eq!(relationship.property_name, "Instructor");
    assert_eq!(relationship.cardinality, Cardinality::ZeroOrOne);
    assert_eq!(relationship.properties, vec!["InstructorId".to_string()]);
    assert_eq!(relationship.principal_properties, vec!["Id".to_string()]);

    let instructor = entity(&context, "Instructor");
    let reverse = instructor
        .relationships
        .iter()
        .find(|r| r.name == "FK_Department_Instructor")
        .unwrap();
    assert_eq!(reverse.cardinality, Cardinality::Many);
    assert_eq!(reverse.property_name, "Departments");
    assert_eq!(reverse.principal_property_name, "Instructor");
}

#[test]
fn test_role_prefixed_foreign_keys_get_distinct_navigations() {
    let context = generate(&school_schema(), &GeneratorOptions::default());

    let office = entity(&context, "OfficeAssignment");
    let navigations: Vec<&str> = office
        .relationships
        .iter()
        .filter(|r| r.is_foreign_key)
        .map(|r| r.property_name.as_str())
        .collect();

    assert_eq!(navigations, vec!["PrimaryInstructor", "BackupInstructor"]);

    let instructor = entity(&context, "Instructor");
    let reverse: Vec<&str> = instructor
        .relationships
        .iter()
        .filter(|r| !r.is_foreign_key && r.name.contains("OfficeAssignment"))
        .map(|r| r.property_name.as_str())
        .collect();
    assert_eq!(
        reverse,
        vec!["PrimaryOfficeAssignments", "BackupOfficeAssignments"]
    );
}

#[test]
fn test_unnamed_constraints_resolve_to_distinct_relationship_names() {
    let context = generate(&school_schema(), &GeneratorOptions::default());

    let office = entity(&context, "OfficeAssignment");
    let names: Vec<&str> = office
        .relationships
        .iter()
        .filter(|r| r.is_foreign_key)
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(names.len(), 2);
    assert_ne!(names[0], names[1]);
    assert!(names.iter().all(|n| n.starts_with("FK_OfficeAssignment_Instructor_")));
}

#[test]
fn test_one_to_one_via_shared_primary_key() {
    let mut person = TableSchema::new("Person", Some("dbo"));
    person.columns = vec![int_column("Id"), text_column("Name")];
    person.primary_key = primary_key("PK_Person", &["Id"]);

    let mut detail = TableSchema::new("PersonDetail", Some("dbo"));
    detail.columns = vec![int_column("Id"), text_column("Biography")];
    detail.primary_key = primary_key("PK_PersonDetail", &["Id"]);
    detail.foreign_keys = vec![foreign_key(
        Some("FK_PersonDetail_Person"),
        &["Id"],
        "Person",
        &["Id"],
    )];

    let mut schema = DatabaseSchema::new("People");
    schema.tables = vec![person, detail];

    let context = generate(&schema, &GeneratorOptions::default());
    let person = entity(&context, "Person");
    let reverse = person
        .relationships
        .iter()
        .find(|r| !r.is_foreign_key)
        .unwrap();

    assert_eq!(reverse.cardinality, Cardinality::One);
    // one-to-one navigations are never pluralized
    assert_eq!(reverse.property_name, "PersonDetail");
}

#[test]
fn test_one_to_one_via_unique_constraint() {
    let mut person = TableSchema::new("Person", Some("dbo"));
    person.columns = vec![int_column("Id")];
    person.primary_key = primary_key("PK_Person", &["Id"]);

    let mut passport = TableSchema::new("Passport", Some("dbo"));
    passport.columns = vec![int_column("Id"), int_column("OwnerId")];
    passport.primary_key = primary_key("PK_Passport", &["Id"]);
    passport.unique_constraints = vec![UniqueConstraintSchema {
        name: Some("UQ_Passport_OwnerId".to_string()),
        columns: vec!["OwnerId".to_string()],
    }];
    passport.foreign_keys = vec![foreign_key(
        Some("FK_Passport_Person"),
        &["OwnerId"],
        "Person",
        &["Id"],
    )];

    let mut schema = DatabaseSchema::new("People");
    schema.tables = vec![person, passport];

    let context = generate(&schema, &GeneratorOptions::default());
    let person = entity(&context, "Person");
    let reverse = person
        .relationships
        .iter()
        .find(|r| !r.is_foreign_key)
        .unwrap();

    assert_eq!(reverse.cardinality, Cardinality::One);
}

#[test]
fn test_self_referencing_foreign_key() {
    let mut employee = TableSchema::new("Employee", Some("dbo"));
    employee.columns = vec![
        int_column("Id"),
        text_column("Name"),
        int_column("ManagerId").nullable(),
    ];
    employee.primary_key = primary_key("PK_Employee", &["Id"]);
    employee.foreign_keys = vec![foreign_key(
        Some("FK_Employee_Manager"),
        &["ManagerId"],
        "Employee",
        &["Id"],
    )];

    let mut schema = DatabaseSchema::new("Org");
    schema.tables = vec![employee];

    let context = generate(&schema, &GeneratorOptions::default());
    let employee = entity(&context, "Employee");

    assert_eq!(employee.relationships.len(), 2);
    let foreign = employee.relationships.iter().find(|r| r.is_foreign_key).unwrap();
    let reverse = employee.relationships.iter().find(|r| !r.is_foreign_key).unwrap();
    assert_ne!(foreign.property_name, reverse.property_name);
    assert_eq!(foreign.property_name, "ManagerEmployee");
    assert_eq!(reverse.property_name, "ManagerEmployees");
}

#[test]
fn test_mutual_foreign_key_cycle_resolves_each_entity_once() {
    let mut author = TableSchema::new("Author", Some("dbo"));
    author.columns = vec![
        int_column("Id"),
        int_column("FavoriteBookId").nullable(),
    ];
    author.primary_key = primary_key("PK_Author", &["Id"]);
    author.foreign_keys = vec![foreign_key(
        Some("FK_Author_FavoriteBook"),
        &["FavoriteBookId"],
        "Book",
        &["Id"],
    )];

    let mut book = TableSchema::new("Book", Some("dbo"));
    book.columns = vec![int_column("Id"), int_column("AuthorId")];
    book.primary_key = primary_key("PK_Book", &["Id"]);
    book.foreign_keys = vec![foreign_key(
        Some("FK_Book_Author"),
        &["AuthorId"],
        "Author",
        &["Id"],
    )];

    let mut schema = DatabaseSchema::new("Library");
    schema.tables = vec![author, book];

    let context = generate(&schema, &GeneratorOptions::default());
    assert_eq!(context.entities.len(), 2);

    let author = entity(&context, "Author");
    let book = entity(&context, "Book");

    // one pair per foreign key, no duplicates from the re-entrant walk
    assert_eq!(author.relationships.len(), 2);
    assert_eq!(book.relationships.len(), 2);

    let favorite = author
        .relationships
        .iter()
        .find(|r| r.name == "FK_Author_FavoriteBook" && r.is_foreign_key)
        .unwrap();
    assert_eq!(favorite.property_name, "FavoriteBook");
    assert_eq!(favorite.cardinality, Cardinality::ZeroOrOne);

    let written = book
        .relationships
        .iter()
        .find(|r| r.name == "FK_Book_Author" && r.is_foreign_key)
        .unwrap();
    assert_eq!(written.property_name, "Author");
    assert_eq!(written.cardinality, Cardinality::One);

    // both pairs are fully cross-linked
    let favorite_reverse = book
        .relationships
        .iter()
        .find(|r| r.name == "FK_Author_FavoriteBook")
        .unwrap();
    assert_eq!(favorite_reverse.principal_property_name, favorite.property_name);
    assert_eq!(favorite.principal_property_name, favorite_reverse.property_name);

    let written_reverse = author
        .relationships
        .iter()
        .find(|r| r.name == "FK_Book_Author")
        .unwrap();
    assert_eq!(written_reverse.principal_property_name, written.property_name);
    assert_eq!(written.principal_property_name, written_reverse.property_name);
}

#[test]
fn test_composite_foreign_key_resolves_as_single_relationship() {
    let mut order = TableSchema::new("Order", Some("dbo"));
    order.columns = vec![int_column("TenantId"), int_column("Id")];
    order.primary_key = primary_key("PK_Order", &["TenantId", "Id"]);

    let mut line = TableSchema::new("OrderLine", Some("dbo"));
    line.columns = vec![
        int_column("Id"),
        int_column("TenantId"),
        int_column("OrderId"),
    ];
    line.primary_key = primary_key("PK_OrderLine", &["Id"]);
    line.foreign_keys = vec![foreign_key(
        Some("FK_OrderLine_Order"),
        &["TenantId", "OrderId"],
        "Order",
        &["TenantId", "Id"],
    )];

    let mut schema = DatabaseSchema::new("Sales");
    schema.tables = vec![order, line];

    let context = generate(&schema, &GeneratorOptions::default());
    let line = entity(&context, "OrderLine");

    let foreign: Vec<_> = line.relationships.iter().filter(|r| r.is_foreign_key).collect();
    assert_eq!(foreign.len(), 1);
    assert_eq!(
        foreign[0].properties,
        vec!["TenantId".to_string(), "OrderId".to_string()]
    );
    assert_eq!(
        foreign[0].principal_properties,
        vec!["TenantId".to_string(), "Id".to_string()]
    );
}

#[test]
fn test_methods_derive_from_keys_indexes_and_foreign_keys() {
    let context = generate(&school_schema(), &GeneratorOptions::default());

    let department = entity(&context, "Department");
    let suffixes: Vec<&str> = department.methods.iter().map(|m| m.suffix.as_str()).collect();
    assert_eq!(suffixes, vec!["Id", "InstructorId"]);

    let key = &department.methods[0];
    assert!(key.is_key);
    assert!(!key.is_index);
    assert!(!key.is_unique);
    assert!(!department.methods[1].is_key);
}

#[test]
fn test_methods_deduplicate_on_property_signature() {
    let mut user = TableSchema::new("User", Some("dbo"));
    user.columns = vec![int_column("Id"), text_column("Email")];
    user.primary_key = primary_key("PK_User", &["Id"]);
    user.indexes = vec![
        IndexSchema {
            name: Some("IX_User_Id".to_string()),
            columns: vec!["Id".to_string()],
            is_unique: true,
        },
        IndexSchema {
            name: Some("IX_User_Email".to_string()),
            columns: vec!["Email".to_string()],
            is_unique: true,
        },
    ];

    let mut schema = DatabaseSchema::new("Auth");
    schema.tables = vec![user];

    let context = generate(&schema, &GeneratorOptions::default());
    let user = entity(&context, "User");

    let suffixes: Vec<&str> = user.methods.iter().map(|m| m.suffix.as_str()).collect();
    assert_eq!(suffixes, vec!["Id", "Email"]);

    // primary key wins the shared suffix; the index-derived duplicate is dropped
    assert!(user.methods[0].is_key);
    assert!(!user.methods[0].is_index);
    assert!(user.methods[1].is_index);
}

#[test]
fn test_rename_rule_stripping_to_empty_falls_back() {
    let mut options = GeneratorOptions::default();
    options.data.entity.renaming.properties = vec!["^Name$".to_string()];

    let context = generate(&school_schema(), &options);
    let instructor = entity(&context, "Instructor");

    assert!(instructor.property_by_name("Name").is_some());
}

#[test]
fn test_member_name_colliding_with_entity_name_is_suffixed() {
    let mut widget = TableSchema::new("Widget", Some("dbo"));
    widget.columns = vec![int_column("Id"), text_column("Widget")];
    widget.primary_key = primary_key("PK_Widget", &["Id"]);

    let mut schema = DatabaseSchema::new("Inventory");
    schema.tables = vec![widget];

    let context = generate(&schema, &GeneratorOptions::default());
    let widget = entity(&context, "Widget");

    assert!(widget.property_by_column("Widget").is_some());
    assert_eq!(
        widget.property_by_column("Widget").unwrap().property_name,
        "WidgetMember"
    );
}

#[test]
fn test_row_version_mapping_override() {
    let mut options = GeneratorOptions::default();
    options.data.mapping.row_version = RowVersionMapping::I64;

    let mut account = TableSchema::new("Account", Some("dbo"));
    account.columns = vec![
        int_column("Id"),
        ColumnSchema::new("Version", "rowversion").row_version(),
    ];
    account.primary_key = primary_key("PK_Account", &["Id"]);

    let mut schema = DatabaseSchema::new("Ledger");
    schema.tables = vec![account];

    let context = generate(&schema, &options);
    let account = entity(&context, "Account");
    let version = account.property_by_column("Version").unwrap();

    assert!(version.is_row_version);
    assert_eq!(version.value_type, ValueType::I64);
}

#[test]
fn test_temporal_period_properties_are_synthesized() {
    let mut options = GeneratorOptions::default();
    options.data.mapping.temporal = true;

    let mut product = TableSchema::new("Product", Some("dbo"));
    product.columns = vec![int_column("Id"), text_column("Name")];
    product.primary_key = primary_key("PK_Product", &["Id"]);
    product.temporal = Some(TemporalSchema {
        history_table: Some("ProductHistory".to_string()),
        history_schema: Some("dbo".to_string()),
        period_start_column: Some("ValidFrom".to_string()),
        period_start_property: None,
        period_end_column: Some("ValidTo".to_string()),
        period_end_property: None,
    });

    let mut schema = DatabaseSchema::new("Catalog");
    schema.tables = vec![product];

    let context = generate(&schema, &options);
    let product = entity(&context, "Product");

    assert!(product.temporal.is_some());
    let start = product.property_by_column("ValidFrom").unwrap();
    assert_eq!(start.value_type, ValueType::DateTime);
    assert!(product.property_by_column("ValidTo").is_some());
}

#[test]
fn test_temporal_metadata_ignored_when_mapping_disabled() {
    let mut product = TableSchema::new("Product", Some("dbo"));
    product.columns = vec![int_column("Id")];
    product.primary_key = primary_key("PK_Product", &["Id"]);
    product.temporal = Some(TemporalSchema {
        history_table: Some("ProductHistory".to_string()),
        period_start_column: Some("ValidFrom".to_string()),
        period_end_column: Some("ValidTo".to_string()),
        ..Default::default()
    });

    let mut schema = DatabaseSchema::new("Catalog");
    schema.tables = vec![product];

    let context = generate(&schema, &GeneratorOptions::default());
    let product = entity(&context, "Product");

    assert!(product.temporal.is_none());
    assert!(product.property_by_column("ValidFrom").is_none());
}

#[test]
fn test_unmappable_column_is_skipped() {
    let mut blob = TableSchema::new("Artifact", Some("dbo"));
    blob.columns = vec![int_column("Id"), ColumnSchema::new("Payload", "hierarchyid")];
    blob.primary_key = primary_key("PK_Artifact", &["Id"]);

    let mut schema = DatabaseSchema::new("Repo");
    schema.tables = vec![blob];

    let context = generate(&schema, &GeneratorOptions::default());
    let artifact = entity(&context, "Artifact");

    assert_eq!(artifact.properties.len(), 1);
    assert!(artifact.property_by_column("Payload").is_none());
}

#[test]
fn test_models_and_shared_descriptors() {
    let context = generate(&school_schema(), &GeneratorOptions::default());
    let instructor = entity(&context, "Instructor");

    assert_eq!(instructor.models.len(), 4);
    let read = instructor.model(ModelKind::Read).unwrap();
    assert_eq!(read.name, "InstructorReadModel");
    assert_eq!(read.namespace, "Domain.Models");
    assert_eq!(read.properties, vec!["Id".to_string(), "Name".to_string()]);

    let mapper = instructor.mapper.as_ref().unwrap();
    let validator = instructor.validator.as_ref().unwrap();
    assert_eq!(mapper.name, "InstructorMapper");
    assert_eq!(validator.name, "InstructorValidator");
    for model in &instructor.models {
        assert_eq!(model.mapper_name, mapper.name);
        assert_eq!(model.validator_name, validator.name);
    }
}

#[test]
fn test_projection_property_filter() {
    let mut options = GeneratorOptions::default();
    options
        .model
        .update
        .exclude
        .properties
        .push(MatchPattern::new(r"^Instructor\.Id$"));

    let context = generate(&school_schema(), &options);
    let instructor = entity(&context, "Instructor");

    let update = instructor.model(ModelKind::Update).unwrap();
    assert_eq!(update.properties, vec!["Name".to_string()]);

    let read = instructor.model(ModelKind::Read).unwrap();
    assert_eq!(read.properties.len(), 2);
}

#[test]
fn test_fully_excluded_entity_gets_no_models_or_descriptors() {
    let mut options = GeneratorOptions::default();
    options
        .model
        .shared
        .exclude
        .entities
        .push(MatchPattern::new("^Instructor$"));

    let context = generate(&school_schema(), &options);
    let instructor = entity(&context, "Instructor");

    assert!(instructor.models.is_empty());
    assert!(instructor.mapper.is_none());
    assert!(instructor.validator.is_none());

    // other entities are unaffected
    assert_eq!(entity(&context, "Department").models.len(), 4);
}

#[test]
fn test_table_exclusion_skips_relationships_into_it() {
    let mut options = GeneratorOptions::default();
    options
        .database
        .exclude
        .push(MatchPattern::new(r"^dbo\.Instructor$"));

    let context = generate(&school_schema(), &options);

    assert!(context.entity_by_name("Instructor").is_none());
    let department = entity(&context, "Department");
    assert!(department.relationships.is_empty());
}

#[test]
fn test_endpoints_require_backing_models() {
    let mut options = GeneratorOptions::default();
    options.endpoint.retrieve.generate = true;
    options.endpoint.create.generate = true;
    options.endpoint.delete.generate = true;
    options.model.create.generate = false;

    let context = generate(&school_schema(), &options);
    let instructor = entity(&context, "Instructor");

    let kinds: Vec<EndpointKind> = instructor.endpoints.iter().map(|e| e.kind).collect();
    // create is dropped because its backing model is disabled
    assert_eq!(kinds, vec![EndpointKind::Retrieve, EndpointKind::Delete]);

    let retrieve = &instructor.endpoints[0];
    assert_eq!(retrieve.name, "InstructorRetrieveApi");
    assert_eq!(retrieve.namespace, "Api.Endpoints");
    assert_eq!(retrieve.request_model, None);
    assert_eq!(
        retrieve.response_model,
        Some("InstructorReadModel".to_string())
    );

    let delete = &instructor.endpoints[1];
    assert_eq!(delete.request_model, None);
    assert_eq!(delete.response_model, None);
}

#[test]
fn test_endpoints_disabled_by_default() {
    let context = generate(&school_schema(), &GeneratorOptions::default());
    assert!(entity(&context, "Instructor").endpoints.is_empty());
}

#[test]
fn test_missing_database_name_is_fatal() {
    let options = GeneratorOptions::default();
    let mapper = SqlTypeMapper;
    let mut generator = ModelGenerator::new(&options, &mapper);

    let schema = DatabaseSchema::new("  ");
    assert!(generator.generate(&schema).is_err());
}

#[test]
fn test_invalid_filter_pattern_is_fatal() {
    let mut options = GeneratorOptions::default();
    options.database.exclude.push(MatchPattern::new("(unclosed"));

    let mapper = SqlTypeMapper;
    let mut generator = ModelGenerator::new(&options, &mapper);
    assert!(generator.generate(&school_schema()).is_err());
}

#[test]
fn test_repeated_runs_are_structurally_identical() {
    let options = GeneratorOptions::default();
    let schema = school_schema();

    let first = generate(&schema, &options);
    let second = generate(&schema, &options);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_set_names_are_pluralized_and_unique() {
    let context = generate(&school_schema(), &GeneratorOptions::default());

    assert_eq!(entity(&context, "Instructor").set_name, "Instructors");
    assert_eq!(entity(&context, "Department").set_name, "Departments");
    assert_eq!(
        entity(&context, "OfficeAssignment").set_name,
        "OfficeAssignments"
    );
}
