/// Unit tests for Constructor and Provider declarations

use ferrous_inject::{Arguments, Constructor, DiResult, Injectable, Provider, Scope, Token};

struct Database;
impl Injectable for Database {
    fn scope() -> Scope {
        Scope::Global
    }
    fn construct(_: &mut Arguments) -> DiResult<Self> {
        Ok(Database)
    }
}

struct Repository;
impl Injectable for Repository {
    fn dependencies() -> Vec<Token> {
        vec![Token::of::<Database>(), Token::named("clock")]
    }
    fn construct(_: &mut Arguments) -> DiResult<Self> {
        Ok(Repository)
    }
}

#[test]
fn test_constructor_reports_declared_metadata() {
    let constructor = Constructor::of::<Repository>();
    assert_eq!(constructor.token(), Token::of::<Repository>());
    assert!(constructor.type_name().ends_with("Repository"));
    assert_eq!(
        constructor.declared_dependencies(),
        vec![Token::of::<Database>(), Token::named("clock")]
    );
    assert_eq!(constructor.declared_scope(), Scope::Default);

    let database = Constructor::of::<Database>();
    assert!(database.declared_dependencies().is_empty());
    assert_eq!(database.declared_scope(), Scope::Global);
}

#[test]
fn test_constructor_equality_is_identity() {
    assert_eq!(Constructor::of::<Database>(), Constructor::of::<Database>());
    assert_ne!(Constructor::of::<Database>(), Constructor::of::<Repository>());
}

#[test]
fn test_constructor_debug_names_type() {
    let debug = format!("{:?}", Constructor::of::<Database>());
    assert!(debug.starts_with("Constructor("));
    assert!(debug.contains("Database"));
}

#[test]
fn test_direct_provider() {
    let provider = Provider::class::<Database>();
    assert_eq!(provider.token(), Token::of::<Database>());
    assert_eq!(provider.constructor(), &Constructor::of::<Database>());
    assert!(!provider.is_indirect());

    let from: Provider = Constructor::of::<Database>().into();
    assert_eq!(from, provider);
}

#[test]
fn test_indirect_provider_separates_token_and_class() {
    let provider = Provider::alias::<Database>("primary");
    assert!(provider.is_indirect());
    assert_eq!(provider.token(), Token::named("primary"));
    assert_eq!(provider.constructor().token(), Token::of::<Database>());

    // Any token may be bound, including another type's
    let provider = Provider::indirect(Token::of::<Repository>(), Constructor::of::<Database>());
    assert_eq!(provider.token(), Token::of::<Repository>());
    assert_eq!(provider.constructor().token(), Token::of::<Database>());
}

#[test]
fn test_providers_differ_by_token() {
    assert_ne!(Provider::alias::<Database>("a"), Provider::alias::<Database>("b"));
    assert_ne!(Provider::class::<Database>(), Provider::alias::<Database>("a"));
}
