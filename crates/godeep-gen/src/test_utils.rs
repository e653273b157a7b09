//! Test utilities for generation tests.

use godeep_core::TypeEnvironment;

use crate::{Canonical, Config, Request, generate};

/// Parse an environment fixture.
pub fn environment(json: &str) -> TypeEnvironment {
    TypeEnvironment::from_json(json).expect("fixture should load")
}

/// Generate for `types` with the canonical formatter.
pub fn generate_go(json: &str, types: &[&str], config: Config) -> String {
    let env = environment(json);
    let requests: Vec<_> = types.iter().map(|t| Request::new(*t)).collect();
    generate(&env, &requests, config, &Canonical).expect("generation should succeed")
}

/// Tabs shown as four spaces, for readable inline snapshots.
pub fn show_tabs(text: &str) -> String {
    text.replace('\t', "    ")
}
