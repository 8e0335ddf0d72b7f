//! Running test bodies inside a `figment::Jail`.
//!
//! A jail gives each test a scratch working directory and an environment that
//! is restored afterwards, which suits settings files such as
//! `env-layers.toml` and variables such as `INPUT_FILES`.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure returns a
/// [`figment::error::Error`].
///
/// # Examples
///
/// ```
/// let files = test_helpers::figment::with_jail(|jail| {
///     jail.set_env("INPUT_FILES", "base.yml");
///     Ok(std::env::var("INPUT_FILES").unwrap_or_default())
/// })?;
/// assert_eq!(files, "base.yml");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}
