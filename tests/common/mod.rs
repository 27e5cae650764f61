//! Shared fakes for integration testing.
//!
//! The real network engine is an external capability, so tests exercise the
//! shim against recording fakes: a provider that captures build specs, an
//! engine that captures translated requests, and a registry that captures
//! installation attempts.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use envoy_transport::engine::{
    BuildError, Engine, EngineProvider, EngineRequest, EngineRequestBuilder, EngineSpec,
    HandlerRegistry, HostContext, InstallError, StreamHandlerFactory, TransferCallback,
};
use envoy_transport::http::executor::TransferExecutor;

static TEMP_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Host context rooted at a unique temp directory.
pub struct FakeHost {
    root: PathBuf,
}

impl FakeHost {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!(
            "envoy-transport-test-{}-{}",
            std::process::id(),
            TEMP_DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl HostContext for FakeHost {
    fn cache_root(&self) -> PathBuf {
        self.root.clone()
    }
}

/// A request as the fake engine saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub upload: Option<Vec<u8>>,
}

impl RecordedRequest {
    /// Values for a header name, case-insensitive, in insertion order.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has_header(&self, name: &str) -> bool {
        !self.header_values(name).is_empty()
    }
}

/// Engine fake that records every request built against it.
///
/// The request log is shared with the builders it hands out, since a
/// builder outlives the `new_request` borrow.
#[derive(Default)]
pub struct FakeEngine {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeEngine {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was built")
            .clone()
    }
}

impl Engine for FakeEngine {
    fn version(&self) -> String {
        "fake/1.0".to_string()
    }

    fn new_request(
        &self,
        url: &str,
        _callback: Arc<dyn TransferCallback>,
        _executor: Arc<dyn TransferExecutor>,
    ) -> Box<dyn EngineRequestBuilder> {
        Box::new(RecordingBuilder {
            record: RecordedRequest {
                url: url.to_string(),
                method: String::new(),
                headers: Vec::new(),
                upload: None,
            },
            sink: self.requests.clone(),
        })
    }

    fn stream_handler_factory(&self) -> Arc<dyn StreamHandlerFactory> {
        Arc::new(FakeFactory)
    }
}

struct RecordingBuilder {
    record: RecordedRequest,
    sink: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl EngineRequestBuilder for RecordingBuilder {
    fn set_method(&mut self, method: &str) {
        self.record.method = method.to_string();
    }

    fn add_header(&mut self, name: &str, value: &str) {
        self.record.headers.push((name.to_string(), value.to_string()));
    }

    fn set_upload(&mut self, body: Vec<u8>, _executor: Arc<dyn TransferExecutor>) {
        self.record.upload = Some(body);
    }

    fn build(self: Box<Self>) -> Box<dyn EngineRequest> {
        self.sink.lock().unwrap().push(self.record);
        Box::new(FakeRequest { started: false })
    }
}

struct FakeRequest {
    started: bool,
}

impl EngineRequest for FakeRequest {
    fn start(&mut self) {
        self.started = true;
    }
}

struct FakeFactory;

impl StreamHandlerFactory for FakeFactory {}

/// Provider fake capturing build specs; can be flipped into failure mode.
#[derive(Default)]
pub struct FakeProvider {
    specs: Mutex<Vec<EngineSpec>>,
    built: Mutex<Vec<Arc<FakeEngine>>>,
    fail: AtomicBool,
}

impl FakeProvider {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn build_count(&self) -> usize {
        self.built.lock().unwrap().len()
    }

    pub fn specs(&self) -> Vec<EngineSpec> {
        self.specs.lock().unwrap().clone()
    }

    pub fn last_spec(&self) -> EngineSpec {
        self.specs
            .lock()
            .unwrap()
            .last()
            .expect("no engine was built")
            .clone()
    }

    pub fn last_engine(&self) -> Arc<FakeEngine> {
        self.built
            .lock()
            .unwrap()
            .last()
            .expect("no engine was built")
            .clone()
    }
}

impl EngineProvider for FakeProvider {
    fn build(&self, spec: &EngineSpec) -> Result<Arc<dyn Engine>, BuildError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(BuildError::Provider("forced failure".to_string()));
        }
        self.specs.lock().unwrap().push(spec.clone());
        let engine = Arc::new(FakeEngine::default());
        self.built.lock().unwrap().push(engine.clone());
        Ok(engine)
    }
}

/// Registry fake with configurable failure modes per strategy.
pub struct FakeRegistry {
    reject_primary: bool,
    reject_fallback: bool,
    installs: AtomicUsize,
    forced: AtomicUsize,
}

impl FakeRegistry {
    pub fn new(reject_primary: bool, reject_fallback: bool) -> Self {
        Self {
            reject_primary,
            reject_fallback,
            installs: AtomicUsize::new(0),
            forced: AtomicUsize::new(0),
        }
    }

    pub fn install_count(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    pub fn force_count(&self) -> usize {
        self.forced.load(Ordering::SeqCst)
    }
}

impl HandlerRegistry for FakeRegistry {
    fn install(&self, _factory: Arc<dyn StreamHandlerFactory>) -> Result<(), InstallError> {
        if self.reject_primary {
            return Err(InstallError::AlreadyInstalled);
        }
        self.installs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn force_install(&self, _factory: Arc<dyn StreamHandlerFactory>) -> Result<(), InstallError> {
        if self.reject_fallback {
            return Err(InstallError::Unsupported(
                "handler slot not replaceable".to_string(),
            ));
        }
        self.forced.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Executor that runs jobs on the calling thread.
pub struct InlineExecutor;

impl TransferExecutor for InlineExecutor {
    fn execute(&self, job: Box<dyn FnOnce() + Send>) {
        job();
    }
}

/// Callback stand-in; the fakes never invoke it.
pub struct NoopCallback;

impl TransferCallback for NoopCallback {}
