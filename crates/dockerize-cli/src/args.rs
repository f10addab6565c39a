//! Single-dash long flags (`-expose 8080`, `-scratch`) predate the clap
//! interface and are still accepted; they are rewritten to their `--`
//! spelling before parsing.

use std::ffi::OsString;

const LEGACY_LONG_FLAGS: &[&str] = &["expose", "scratch"];

pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str().and_then(rewrite) {
            Some(rewritten) => OsString::from(rewritten),
            None => arg,
        })
        .collect()
}

fn rewrite(arg: &str) -> Option<String> {
    LEGACY_LONG_FLAGS.iter().find_map(|flag| {
        let rest = arg.strip_prefix('-')?.strip_prefix(flag)?;
        (rest.is_empty() || rest.starts_with('=')).then(|| format!("--{flag}{rest}"))
    })
}
