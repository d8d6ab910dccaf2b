//! Integration tests for the registry-to-descriptor flow.
//!
//! These tests exercise realistic scenarios where a dispatch framework
//! registers handler members at startup and fans parameter descriptors out
//! over their tables when assembling binding metadata.

use bindscope::prelude::*;

fn path_variable() -> TypeName {
    TypeName::new("bindscope::bind", "PathVariable")
}

fn query_param() -> TypeName {
    TypeName::new("bindscope::bind", "QueryParam")
}

fn controller() -> TypeName {
    TypeName::new("app::users", "UsersController")
}

/// Register a complete handler method and read every parameter position back
/// the way a binding layer would.
#[test]
fn test_handler_method_descriptors() -> Result<()> {
    let registry = MemberRegistry::new();

    // fn search(id: i64 /* @PathVariable("id") */, filters: Vec<String> /* @QueryParam("filter") */)
    let search = registry.register_method(
        MethodBuilder::new(controller(), "search")
            .param(
                ParamMeta::new(TypeSig::I64).with_annotation(
                    AnnotationValue::new(path_variable())
                        .with_arg(AnnotationArgument::Str("id".into())),
                ),
            )
            .param(
                ParamMeta::new(TypeSig::generic(
                    TypeName::new("alloc::vec", "Vec"),
                    vec![TypeSig::Str],
                ))
                .with_annotation(
                    AnnotationValue::new(query_param())
                        .with_arg(AnnotationArgument::Str("filter".into()))
                        .with_named_arg("required", AnnotationArgument::Bool(false)),
                ),
            ),
    )?;

    let parameters = Parameter::for_member(&search, ["id", "filters"])?;
    assert_eq!(parameters.len(), 2);

    let id = &parameters[0];
    assert_eq!(id.name(), "id");
    assert_eq!(id.declared_type(), &TypeName::primitive("i64"));
    assert!(id.is_annotation_present(&path_variable()));
    assert!(!id.is_annotation_present(&query_param()));

    let filters = &parameters[1];
    assert_eq!(filters.declared_type(), &TypeName::new("alloc::vec", "Vec"));
    assert_eq!(
        format!("{}", filters.parameterized_type()),
        "alloc::vec::Vec<str>"
    );

    let annotation = filters.annotation(&query_param()).unwrap();
    assert_eq!(
        annotation.fixed_args[0],
        AnnotationArgument::Str("filter".into())
    );
    assert_eq!(annotation.named_args[0].name, "required");

    Ok(())
}

/// Constructor parameters go through the same descriptor surface as method
/// parameters.
#[test]
fn test_constructor_descriptors() -> Result<()> {
    let registry = MemberRegistry::new();

    let ctor = registry.register_constructor(
        ConstructorBuilder::new(controller())
            .param(ParamMeta::new(TypeSig::named("app::users", "UserRepository")))
            .param(ParamMeta::new(TypeSig::Optional(Box::new(TypeSig::U32)))),
    )?;

    let repository = Parameter::new(0, "repository", ctor.clone())?;
    assert_eq!(
        repository.declared_type(),
        &TypeName::new("app::users", "UserRepository")
    );
    assert_eq!(repository.annotations().count(), 0);

    let page_size = Parameter::new(1, "page_size", ctor)?;
    assert_eq!(
        page_size.declared_type(),
        &TypeName::new("core::option", "Option")
    );
    assert!(page_size.parameterized_type().is_parameterized());

    Ok(())
}

/// Descriptors over the same position are interchangeable regardless of the
/// caller-supplied name, and distinct positions or owners never collide.
#[test]
fn test_descriptor_identity_across_lookups() -> Result<()> {
    let registry = MemberRegistry::new();

    let show = registry.register_method(
        MethodBuilder::new(controller(), "show").param(ParamMeta::new(TypeSig::I64)),
    )?;
    let delete = registry.register_method(
        MethodBuilder::new(controller(), "delete").param(ParamMeta::new(TypeSig::I64)),
    )?;

    // A second resolution of the same member produces an equal descriptor
    let resolved = registry.resolve(&show.token())?;
    let first = Parameter::new(0, "id", show)?;
    let second = Parameter::new(0, "user_id", resolved)?;
    assert_eq!(first, second);

    // Same index on a different owner is a different parameter
    let other = Parameter::new(0, "id", delete)?;
    assert_ne!(first, other);

    Ok(())
}

/// Only methods and constructors own parameters; every other member kind is
/// rejected at descriptor construction.
#[test]
fn test_non_callable_owners_are_rejected() -> Result<()> {
    let registry = MemberRegistry::new();

    let field = registry.register_field(
        controller(),
        "repository",
        TypeName::new("app::users", "UserRepository"),
    )?;

    match Parameter::new(0, "repository", field) {
        Err(Error::UnsupportedOwner { kind }) => assert_eq!(kind, MemberKind::Field),
        other => panic!("expected UnsupportedOwner, got {:?}", other),
    }

    Ok(())
}
