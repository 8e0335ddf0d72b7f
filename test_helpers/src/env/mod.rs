//! Helpers for safely mutating environment variables in tests.
//!
//! Each mutation takes a global re-entrant mutex for the duration of the
//! set/remove call and returns an RAII guard that restores the previous state
//! on drop (removing the variable when it was absent). Guards for the same key
//! stack and restore in LIFO order.
//!
//! Use [`lock`] or [`scope_with`] when a test needs several variables held
//! steady at once, such as `GITHUB_ENV` alongside `INPUT_FILES`.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("INPUT_FILES", "base.yml");
//! assert_eq!(std::env::var("INPUT_FILES").as_deref(), Ok("base.yml"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

/// Variables read by the env-layers binary and library.
///
/// [`scrub_inputs`] removes all of them so a test starts from a clean slate
/// regardless of the environment the test runner inherited (a CI job may set
/// `GITHUB_ENV` itself).
pub const INPUT_VARS: &[&str] = &[
    "GITHUB_ENV",
    "INPUT_FILES",
    "ENV_LAYERS_FILES",
    "ENV_LAYERS_FORMAT",
    "ENV_LAYERS_OUTPUT",
    "ENV_LAYERS_LOG_VALUES",
];

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Wrapper around `std::env::set_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// Wrapper around `std::env::remove_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn mutate_locked<F>(key: String, mutator: F, _guard: &ReentrantMutexGuard<'static, ()>) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        if let Some(val) = self.original.take() {
            // SAFETY: `ENV_MUTEX` is held.
            unsafe { env_set_var(&self.key, &val) };
        } else {
            // SAFETY: `ENV_MUTEX` is held.
            unsafe { env_remove_var(&self.key) };
        }
    }
}

/// Holds the global environment lock for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets an environment variable while holding the lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        // SAFETY: `self.guard` holds `ENV_MUTEX`.
        mutate_locked(key.into(), |k| unsafe { env_set_var(k, value.as_ref()) }, &self.guard)
    }

    /// Removes an environment variable while holding the lock.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        // SAFETY: `self.guard` holds `ENV_MUTEX`.
        mutate_locked(key.into(), |k| unsafe { env_remove_var(k) }, &self.guard)
    }
}

/// Keeps the environment lock and a set of guards alive together.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        drop(std::mem::take(&mut self.guards));
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use test_helpers::env;
///
/// let _g = env::set_var("ENV_LAYERS_FORMAT", "json");
/// assert!(matches!(std::env::var("ENV_LAYERS_FORMAT"), Ok(ref v) if v == "json"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes an environment variable and returns a guard restoring its prior value.
///
/// # Examples
/// ```
/// use test_helpers::env;
///
/// let _g = env::remove_var("GITHUB_ENV");
/// assert!(std::env::var("GITHUB_ENV").is_err());
/// ```
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}

/// Acquire the global environment lock for the lifetime of the returned value.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        guard: ENV_MUTEX.lock(),
    }
}

/// Build guards while holding the lock and keep the lock until the scope drops.
///
/// # Examples
/// ```
/// use test_helpers::env;
///
/// let _scope = env::scope_with(|lock| {
///     vec![lock.set_var("INPUT_FILES", "a.yml"), lock.remove_var("GITHUB_ENV")]
/// });
/// ```
pub fn scope_with<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    let lock = lock();
    let guards = builder(&lock);
    EnvScope {
        guards,
        _lock: lock,
    }
}

/// Remove every variable in [`INPUT_VARS`] for the lifetime of the scope.
pub fn scrub_inputs() -> EnvScope {
    scope_with(|lock| INPUT_VARS.iter().map(|key| lock.remove_var(*key)).collect())
}

/// Run a closure while holding the global environment lock.
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock();
    f()
}
