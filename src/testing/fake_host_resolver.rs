use std::cell::Cell;
use std::rc::Rc;

use crate::domain::{AppError, HostConfig};
use crate::ports::{HostResolver, HostResolverFactory};

/// Resolver returning a canned host or a lookup failure.
#[derive(Clone)]
pub struct FakeHostResolver {
    result: Option<String>,
    calls: Rc<Cell<usize>>,
}

impl FakeHostResolver {
    pub fn returning(host: impl Into<String>) -> Self {
        Self { result: Some(host.into()), calls: Rc::new(Cell::new(0)) }
    }

    pub fn failing() -> Self {
        Self { result: None, calls: Rc::new(Cell::new(0)) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl HostResolver for FakeHostResolver {
    fn resolve(&self) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone().ok_or_else(|| AppError::HostLookup {
            url: "http://fake.invalid/ip".to_string(),
            details: "simulated failure".to_string(),
        })
    }

    fn describe(&self) -> String {
        "fake resolver".to_string()
    }
}

pub struct FakeHostResolverFactory {
    pub resolver: FakeHostResolver,
}

impl FakeHostResolverFactory {
    pub fn new(resolver: FakeHostResolver) -> Self {
        Self { resolver }
    }
}

impl HostResolverFactory for FakeHostResolverFactory {
    fn create(&self, _config: &HostConfig) -> Result<Box<dyn HostResolver>, AppError> {
        Ok(Box::new(self.resolver.clone()))
    }
}
