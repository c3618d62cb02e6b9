use ferrous_inject::{
    Arguments, Constructor, DiError, DiResult, FactoryKind, Injectable, InjectableMetadata,
    Injector, InjectorOptions, MetadataProvider, ModuleDescriptor, Resolver, Scope,
    ScopeOverrides, Token,
};
use std::collections::HashMap;
use std::sync::Arc;

struct Clock;
impl Injectable for Clock {
    fn construct(_: &mut Arguments) -> DiResult<Self> {
        Ok(Clock)
    }
}

#[allow(dead_code)]
struct Scheduler {
    clock: Arc<Clock>,
}
impl Injectable for Scheduler {
    fn dependencies() -> Vec<Token> {
        vec![Token::of::<Clock>()]
    }
    fn construct(args: &mut Arguments) -> DiResult<Self> {
        Ok(Scheduler { clock: args.next()? })
    }
}

fn module() -> ModuleDescriptor {
    ModuleDescriptor::new("jobs")
        .provide::<Clock>()
        .consume::<Scheduler>()
}

#[test]
fn test_scope_override_promotes_provider_to_global() {
    let metadata = ScopeOverrides::new(InjectableMetadata).with::<Clock>(Scope::Global);
    let mut injector = Injector::with_metadata(metadata);
    injector.bootstrap(module()).unwrap();

    assert_eq!(injector.entry_kind(&Token::of::<Clock>()), Some(FactoryKind::Memoized));
    assert_eq!(injector.entry_kind(&Token::of::<Scheduler>()), Some(FactoryKind::Memoized));

    let a = injector.get_required::<Scheduler>();
    let b = injector.get_required::<Scheduler>();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_without_override_declared_scope_applies() {
    let mut injector = Injector::new();
    injector.bootstrap(module()).unwrap();

    assert_eq!(injector.entry_kind(&Token::of::<Clock>()), Some(FactoryKind::Fresh));
    assert_eq!(injector.entry_kind(&Token::of::<Scheduler>()), Some(FactoryKind::Fresh));
}

#[test]
fn test_override_of_class_applies_to_its_alias() {
    struct Tick {
        clock: Arc<Clock>,
    }
    impl Injectable for Tick {
        fn dependencies() -> Vec<Token> {
            vec![Token::named("clock")]
        }
        fn construct(args: &mut Arguments) -> DiResult<Self> {
            Ok(Tick { clock: args.next()? })
        }
    }

    let metadata = ScopeOverrides::new(InjectableMetadata).with::<Clock>(Scope::Global);
    let mut injector = Injector::with_metadata(metadata);
    injector
        .bootstrap(
            ModuleDescriptor::new("tick")
                .provide_as::<Clock>("clock")
                .consume::<Tick>(),
        )
        .unwrap();

    let a = injector.get_required::<Tick>();
    let b = injector.get_required::<Tick>();
    assert!(Arc::ptr_eq(&a.clock, &b.clock));
    assert_eq!(injector.entry_kind(&Token::named("clock")), Some(FactoryKind::Memoized));
}

#[test]
fn test_override_can_demote_global() {
    struct Config;
    impl Injectable for Config {
        fn scope() -> Scope {
            Scope::Global
        }
        fn construct(_: &mut Arguments) -> DiResult<Self> {
            Ok(Config)
        }
    }

    let metadata = ScopeOverrides::new(InjectableMetadata).with::<Config>(Scope::Default);
    assert_eq!(metadata.declared_scope(&Constructor::of::<Config>()), Scope::Default);

    let mut injector = Injector::with_metadata(metadata);
    injector
        .bootstrap(ModuleDescriptor::new("config").provide::<Config>())
        .unwrap();

    let a = injector.get_required::<Config>();
    let b = injector.get_required::<Config>();
    assert!(!Arc::ptr_eq(&a, &b));
}

/// Dependency lists supplied from a table instead of `Injectable` impls
struct TableMetadata {
    dependencies: HashMap<Token, Vec<Token>>,
}

impl MetadataProvider for TableMetadata {
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token> {
        self.dependencies
            .get(&constructor.token())
            .cloned()
            .unwrap_or_default()
    }

    fn declared_scope(&self, constructor: &Constructor) -> Scope {
        constructor.declared_scope()
    }
}

#[test]
fn test_custom_metadata_drives_dependency_lists() {
    struct Audit;
    impl Injectable for Audit {
        fn construct(args: &mut Arguments) -> DiResult<Self> {
            let _clock: Arc<Clock> = args.next()?;
            Ok(Audit)
        }
    }

    let mut dependencies = HashMap::new();
    dependencies.insert(Token::of::<Audit>(), vec![Token::of::<Clock>()]);
    let metadata = TableMetadata { dependencies };

    let mut injector = Injector::from_parts(metadata, InjectorOptions::default());
    injector
        .bootstrap(
            ModuleDescriptor::new("audit")
                .provide::<Audit>()
                .provide::<Clock>(),
        )
        .unwrap();

    // Resolved on demand even though Audit's own impl declares nothing
    assert!(injector.is_resolved(&Token::of::<Clock>()));
    assert!(injector.get::<Audit>().is_ok());
}

#[test]
fn test_custom_metadata_reports_unregistered_dependency() {
    struct Audit;
    impl Injectable for Audit {
        fn construct(_: &mut Arguments) -> DiResult<Self> {
            Ok(Audit)
        }
    }

    let mut dependencies = HashMap::new();
    dependencies.insert(Token::of::<Audit>(), vec![Token::named("journal")]);
    let mut injector = Injector::with_metadata(TableMetadata { dependencies });

    let err = injector
        .bootstrap(ModuleDescriptor::new("audit").provide::<Audit>())
        .unwrap_err();
    assert!(matches!(err, DiError::UnregisteredToken { token: "journal", .. }));
}

#[test]
fn test_boxed_metadata_provider() {
    let metadata: Box<dyn MetadataProvider> =
        Box::new(ScopeOverrides::new(InjectableMetadata).with::<Clock>(Scope::Global));
    let mut injector = Injector::with_metadata(metadata);
    injector.bootstrap(module()).unwrap();

    assert_eq!(injector.entry_kind(&Token::of::<Clock>()), Some(FactoryKind::Memoized));
}
