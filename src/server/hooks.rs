use http::Extensions;

use crate::server::{ApiError, ApiResponse, HttpRoute};

/// Per-request state threaded through every lifecycle hook.
///
/// `store` is a typed bag that lives exactly as long as the request; hooks use
/// their own types as keys.
pub struct RequestContext<'a> {
    pub route: HttpRoute<'a>,
    pub store: Extensions,
}

impl<'a> RequestContext<'a> {
    pub fn new(route: HttpRoute<'a>) -> RequestContext<'a> {
        RequestContext {
            route,
            store: Extensions::new(),
        }
    }
}

type RequestHook = Box<dyn Fn(&mut RequestContext<'_>) + Send + Sync>;
type AfterHandleHook = Box<dyn Fn(&mut RequestContext<'_>, &ApiResponse) + Send + Sync>;
type ErrorHook = Box<dyn Fn(&mut RequestContext<'_>, &ApiError) + Send + Sync>;

/// Lifecycle callbacks run by the server for every request, in registration order.
///
/// Order per request: `on_request`, `on_before_handle`, then either
/// `on_after_handle` or `on_error`.
#[derive(Default)]
pub struct Hooks {
    request: Vec<RequestHook>,
    before_handle: Vec<RequestHook>,
    after_handle: Vec<AfterHandleHook>,
    error: Vec<ErrorHook>,
}

/// Something that registers a set of hooks in one go.
pub trait Plugin {
    fn register(self, hooks: Hooks) -> Hooks;
}

impl Hooks {
    pub fn new() -> Hooks {
        Hooks::default()
    }

    pub fn on_request<F>(mut self, hook: F) -> Hooks
        where
            F: Fn(&mut RequestContext<'_>) + Send + Sync + 'static,
    {
        self.request.push(Box::new(hook));
        self
    }

    pub fn on_before_handle<F>(mut self, hook: F) -> Hooks
        where
            F: Fn(&mut RequestContext<'_>) + Send + Sync + 'static,
    {
        self.before_handle.push(Box::new(hook));
        self
    }

    pub fn on_after_handle<F>(mut self, hook: F) -> Hooks
        where
            F: Fn(&mut RequestContext<'_>, &ApiResponse) + Send + Sync + 'static,
    {
        self.after_handle.push(Box::new(hook));
        self
    }

    pub fn on_error<F>(mut self, hook: F) -> Hooks
        where
            F: Fn(&mut RequestContext<'_>, &ApiError) + Send + Sync + 'static,
    {
        self.error.push(Box::new(hook));
        self
    }

    pub fn use_plugin<P: Plugin>(self, plugin: P) -> Hooks {
        plugin.register(self)
    }

    pub(crate) fn run_request(&self, ctx: &mut RequestContext<'_>) {
        for hook in &self.request {
            hook(ctx);
        }
    }

    pub(crate) fn run_before_handle(&self, ctx: &mut RequestContext<'_>) {
        for hook in &self.before_handle {
            hook(ctx);
        }
    }

    pub(crate) fn run_after_handle(&self, ctx: &mut RequestContext<'_>, response: &ApiResponse) {
        for hook in &self.after_handle {
            hook(ctx, response);
        }
    }

    pub(crate) fn run_error(&self, ctx: &mut RequestContext<'_>, error: &ApiError) {
        for hook in &self.error {
            hook(ctx, error);
        }
    }
}
