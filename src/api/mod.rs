//! High-level, ergonomic library API: resolve a command line into a
//! `ResolvedSession` ready for a renderer. Prefer these entrypoints over
//! the low-level `config` modules when embedding the engine.
use crate::config::session::ResolvedSession;
use crate::error::Result;

/// Resolves an argument sequence (program name already stripped) into the
/// finished per-image parameter list and output selection.
///
/// ```rust,no_run
/// let session = asciigen::resolve_args(["--console", "photo.jpg", "--rotate", "90"])?;
/// for image in session.images() {
///     println!("{} rotated {}", image.path().display(), image.rotate);
/// }
/// # Ok::<(), asciigen::Error>(())
/// ```
pub fn resolve_args<I, S>(args: I) -> Result<ResolvedSession>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    ResolvedSession::resolve(&args)
}

/// Resolves the current process arguments, skipping the program name.
pub fn resolve_env() -> Result<ResolvedSession> {
    resolve_args(std::env::args().skip(1))
}
