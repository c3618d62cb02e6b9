use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ferrous_inject::*;
use std::sync::Arc;

struct Config;
impl Injectable for Config {
    fn scope() -> Scope {
        Scope::Global
    }
    fn construct(_: &mut Arguments) -> DiResult<Self> {
        Ok(Config)
    }
}

struct Repository {
    _config: Arc<Config>,
}
impl Injectable for Repository {
    fn dependencies() -> Vec<Token> {
        vec![Token::of::<Config>()]
    }
    fn construct(args: &mut Arguments) -> DiResult<Self> {
        Ok(Repository { _config: args.next()? })
    }
}

struct Service {
    _repository: Arc<Repository>,
}
impl Injectable for Service {
    fn dependencies() -> Vec<Token> {
        vec![Token::of::<Repository>()]
    }
    fn construct(args: &mut Arguments) -> DiResult<Self> {
        Ok(Service { _repository: args.next()? })
    }
}

struct Controller {
    _service: Arc<Service>,
    _config: Arc<Config>,
}
impl Injectable for Controller {
    fn dependencies() -> Vec<Token> {
        vec![Token::of::<Service>(), Token::of::<Config>()]
    }
    fn construct(args: &mut Arguments) -> DiResult<Self> {
        Ok(Controller {
            _service: args.next()?,
            _config: args.next()?,
        })
    }
}

fn app_module() -> ModuleDescriptor {
    ModuleDescriptor::new("app")
        .provide::<Controller>()
        .provide::<Service>()
        .provide::<Repository>()
        .provide::<Config>()
}

fn bootstrapped(options: InjectorOptions) -> Injector {
    let mut injector = Injector::with_options(options);
    injector.bootstrap(app_module()).unwrap();
    injector
}

// ===== Bootstrap =====

fn bench_bootstrap(c: &mut Criterion) {
    c.bench_function("bootstrap_chain_4", |b| {
        b.iter_batched(
            Injector::new,
            |mut injector| {
                injector.bootstrap(app_module()).unwrap();
                black_box(injector.resolved_count());
            },
            BatchSize::SmallInput,
        )
    });
}

// ===== Lookups =====

fn bench_memoized_hit(c: &mut Criterion) {
    let injector = bootstrapped(InjectorOptions::default());

    c.bench_function("memoized_hit", |b| {
        b.iter(|| {
            let v = injector.get::<Config>().unwrap();
            black_box(v);
        })
    });
}

fn bench_fresh_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fresh_chain");

    let per_call = bootstrapped(InjectorOptions::default());
    group.bench_function("per_call", |b| {
        b.iter(|| {
            let v = per_call.get::<Controller>().unwrap();
            black_box(v);
        })
    });

    let snapshot = bootstrapped(
        InjectorOptions::default().with_fresh_dependencies(FreshDependencies::Snapshot),
    );
    group.bench_function("snapshot", |b| {
        b.iter(|| {
            let v = snapshot.get::<Controller>().unwrap();
            black_box(v);
        })
    });

    group.finish();
}

fn bench_unknown_token(c: &mut Criterion) {
    let injector = bootstrapped(InjectorOptions::default());

    c.bench_function("unknown_token", |b| {
        b.iter(|| {
            let v = injector.resolve_token(&Token::named("missing"));
            black_box(v.is_err());
        })
    });
}

criterion_group!(
    benches,
    bench_bootstrap,
    bench_memoized_hit,
    bench_fresh_chain,
    bench_unknown_token
);
criterion_main!(benches);
