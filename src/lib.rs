//! Workspace root package.
//!
//! Exists so workspace-level tooling (pre-commit hooks) has a package to
//! attach to. All library code lives in `crates/georoute-lib`.
