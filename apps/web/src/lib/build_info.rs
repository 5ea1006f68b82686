/// Commit the bundle was built from, or `unknown` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("CTF_PORTAL_GIT_SHA") {
        Some(value) if !value.trim().is_empty() => value,
        _ => "unknown",
    }
}

/// Footer label, e.g. `build 3f2a9c1b7d04`.
pub fn build_label() -> String {
    format!("build {}", git_commit_hash())
}
