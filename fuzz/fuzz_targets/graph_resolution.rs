#![no_main]

use ferrous_inject::{
    Arguments, CaptivePolicy, Constructor, DiError, DiResult, FreshDependencies, Injectable,
    Injector, InjectorOptions, MetadataProvider, ModuleDescriptor, Provider, ResolverCore, Scope,
    Token,
};
use libfuzzer_sys::fuzz_target;

const NODES: usize = 6;

struct Node<const I: usize>;

impl<const I: usize> Injectable for Node<I> {
    fn construct(args: &mut Arguments) -> DiResult<Self> {
        while args.remaining() > 0 {
            args.next_any()?;
        }
        Ok(Node)
    }
}

fn node(i: usize) -> Constructor {
    match i % NODES {
        0 => Constructor::of::<Node<0>>(),
        1 => Constructor::of::<Node<1>>(),
        2 => Constructor::of::<Node<2>>(),
        3 => Constructor::of::<Node<3>>(),
        4 => Constructor::of::<Node<4>>(),
        _ => Constructor::of::<Node<5>>(),
    }
}

fn index_of(token: &Token) -> Option<usize> {
    (0..NODES).find(|i| node(*i).token() == *token)
}

// Arbitrary edges, cycles included
struct FuzzMetadata {
    edges: [u8; NODES],
    globals: u8,
}

impl MetadataProvider for FuzzMetadata {
    fn dependencies_of(&self, constructor: &Constructor) -> Vec<Token> {
        let Some(i) = index_of(&constructor.token()) else {
            return Vec::new();
        };
        (0..NODES)
            .filter(|j| (self.edges[i] & (1u8 << *j)) != 0)
            .map(|j| node(j).token())
            .collect()
    }

    fn declared_scope(&self, constructor: &Constructor) -> Scope {
        match index_of(&constructor.token()) {
            Some(i) if (self.globals & (1u8 << i)) != 0 => Scope::Global,
            _ => Scope::Default,
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < NODES + 4 {
        return;
    }

    let mut edges = [0u8; NODES];
    edges.copy_from_slice(&data[..NODES]);
    let globals = data[NODES];
    let declared = data[NODES + 1];
    let consumers = data[NODES + 2];
    let flags = data[NODES + 3];

    let options = InjectorOptions::default()
        .with_cycle_detection(flags & 1 == 0)
        .with_max_depth(32)
        .with_fresh_dependencies(if flags & 2 == 0 {
            FreshDependencies::PerCall
        } else {
            FreshDependencies::Snapshot
        })
        .with_captive_policy(match (flags >> 2) & 3 {
            0 => CaptivePolicy::Demote,
            1 => CaptivePolicy::Allow,
            2 => CaptivePolicy::Warn,
            _ => CaptivePolicy::Deny,
        });

    let mut module = ModuleDescriptor::new("fuzz");
    for i in (0..NODES).filter(|i| (declared & (1u8 << *i)) != 0) {
        module = module.provider(Provider::Direct(node(i)));
    }
    for i in (0..NODES).filter(|i| (consumers & (1u8 << *i)) != 0) {
        module = module.consumer(node(i));
    }

    let mut injector = Injector::from_parts(FuzzMetadata { edges, globals }, options);
    match injector.bootstrap(module) {
        Ok(()) => {
            for i in 0..NODES {
                let token = node(i).token();
                if injector.is_resolved(&token) {
                    assert!(injector.resolve_token(&token).is_ok());
                }
            }
        }
        Err(err) => {
            assert!(matches!(
                err,
                DiError::UnregisteredToken { .. }
                    | DiError::ConsumerDependencyMissing { .. }
                    | DiError::Circular(_)
                    | DiError::DepthExceeded(_)
                    | DiError::CaptiveDependency { .. }
            ));
        }
    }
});
