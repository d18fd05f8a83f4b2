use std::collections::HashMap;

use async_trait::async_trait;

use super::service::{BookingError, BookingService};

/// Backend-agnostic gateway configuration.
///
/// `backend` must match the [`GatewayFactory::backend_name`] of a registered
/// factory.  `endpoint` is passed through to that factory unchanged — its
/// meaning is entirely backend-specific.
///
/// | backend     | endpoint examples        |
/// |-------------|--------------------------|
/// | `simulated` | `local`                  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"simulated"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend: "simulated".to_string(),
            endpoint: "local".to_string(),
        }
    }
}

/// One implementation per booking backend.  Each backend crate exports a
/// single unit struct that implements this trait and is registered with a
/// [`GatewayRegistry`] at startup.
#[async_trait]
pub trait GatewayFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use booking service.  Implementations are free to
    /// open connections or warm caches inside this method.
    async fn create(&self, config: &GatewayConfig)
    -> Result<Box<dyn BookingService>, BookingError>;
}

/// Registry of [`GatewayFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `GatewayRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` whenever a new booking service is needed.
pub struct GatewayRegistry {
    factories: HashMap<&'static str, Box<dyn GatewayFactory>>,
}

impl GatewayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory.
    ///
    /// If a factory with the same [`GatewayFactory::backend_name`] is
    /// already present it is silently replaced.
    pub fn register(&mut self, factory: Box<dyn GatewayFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend` and return
    /// the booking service it produces.
    ///
    /// # Errors
    /// * [`BookingError::Configuration`] — no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &GatewayConfig,
    ) -> Result<Box<dyn BookingService>, BookingError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                BookingError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for GatewayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use crate::models::{BookingConfirmation, BookingRequest};

    use super::{BookingError, BookingService, GatewayConfig, GatewayFactory, GatewayRegistry};

    // ── stub service ─────────────────────────────────────────────────────
    // `submit` is `unimplemented!()` — the tests never call it; they only
    // verify that the registry routes to the correct factory.
    struct StubService;

    #[async_trait]
    impl BookingService for StubService {
        async fn submit(
            &self,
            _request: BookingRequest,
        ) -> Result<BookingConfirmation, BookingError> {
            unimplemented!()
        }
    }

    // ── stub factory ─────────────────────────────────────────────────────
    /// A factory whose `create` flips an `AtomicBool` and returns a
    /// [`StubService`].  The flag lets tests prove that `create` was
    /// actually called.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl GatewayFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &GatewayConfig,
        ) -> Result<Box<dyn BookingService>, BookingError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubService))
        }
    }

    /// A factory that always returns an `Unavailable` error — used to verify
    /// that the registry surfaces errors from the underlying factory.
    struct FailingFactory;

    #[async_trait]
    impl GatewayFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &GatewayConfig,
        ) -> Result<Box<dyn BookingService>, BookingError> {
            Err(BookingError::Unavailable("intentional failure".to_string()))
        }
    }

    /// Build a `StubFactory` and return it alongside the flag so tests can
    /// assert whether `create` was reached.
    fn stub_factory(name: &'static str) -> (Box<dyn GatewayFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    // ── GatewayConfig ────────────────────────────────────────────────────
    #[test]
    fn gateway_config_default_is_local_simulated() {
        let cfg = GatewayConfig::default();
        assert_eq!(cfg.backend, "simulated");
        assert_eq!(cfg.endpoint, "local");
    }

    // ── registry construction ────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(GatewayRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn default_registry_is_empty() {
        assert!(GatewayRegistry::default().available_backends().is_empty());
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn register_single_backend() {
        let mut reg = GatewayRegistry::new();
        let (factory, _) = stub_factory("simulated");
        reg.register(factory);
        assert_eq!(reg.available_backends(), vec!["simulated"]);
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = GatewayRegistry::new();
        // Register in reverse alphabetical order on purpose.
        let (f1, _) = stub_factory("simulated");
        let (f2, _) = stub_factory("partner_api");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["partner_api", "simulated"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = GatewayRegistry::new();
        let (old, _) = stub_factory("simulated");
        let (new, _) = stub_factory("simulated");
        reg.register(old);
        reg.register(new);
        // Only one entry should remain.
        assert_eq!(reg.available_backends(), vec!["simulated"]);
    }

    // ── successful dispatch ──────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_matching_factory() {
        let mut reg = GatewayRegistry::new();
        let (factory, called) = stub_factory("simulated");
        reg.register(factory);

        let config = GatewayConfig::default();

        let result = reg.create(&config).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(
            called.load(Ordering::SeqCst),
            "factory create was not invoked"
        );
    }

    #[tokio::test]
    async fn create_does_not_call_non_matching_factory() {
        let mut reg = GatewayRegistry::new();
        let (sim_factory, sim_called) = stub_factory("simulated");
        let (partner_factory, partner_called) = stub_factory("partner_api");
        reg.register(sim_factory);
        reg.register(partner_factory);

        let config = GatewayConfig::default();

        reg.create(&config).await.unwrap();
        assert!(sim_called.load(Ordering::SeqCst));
        assert!(!partner_called.load(Ordering::SeqCst));
    }

    // ── unknown backend ──────────────────────────────────────────────────
    #[tokio::test]
    async fn unknown_backend_returns_configuration_error() {
        let reg = GatewayRegistry::new();
        let config = GatewayConfig {
            backend: "nope".to_string(),
            endpoint: "x".to_string(),
        };
        assert!(matches!(
            reg.create(&config).await,
            Err(BookingError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn configuration_error_names_requested_and_available_backends() {
        let mut reg = GatewayRegistry::new();
        let (f, _) = stub_factory("simulated");
        reg.register(f);

        let config = GatewayConfig {
            backend: "partner_api".to_string(),
            endpoint: "x".to_string(),
        };

        match reg.create(&config).await {
            Err(BookingError::Configuration(msg)) => {
                assert!(
                    msg.contains("partner_api"),
                    "error should name the requested backend"
                );
                assert!(
                    msg.contains("simulated"),
                    "error should list available backends"
                );
            }
            Err(other) => panic!("expected Configuration error, got {other:#?}"),
            Ok(_) => panic!("expected Configuration error, got Ok"),
        }
    }

    // ── factory errors propagate ─────────────────────────────────────────
    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = GatewayRegistry::new();
        reg.register(Box::new(FailingFactory));

        let config = GatewayConfig {
            backend: "failing".to_string(),
            endpoint: "x".to_string(),
        };

        match reg.create(&config).await {
            Err(err) => assert_eq!(
                err,
                BookingError::Unavailable("intentional failure".to_string())
            ),
            Ok(_) => panic!("expected the factory error to propagate"),
        }
    }
}
